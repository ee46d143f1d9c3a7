//! Seeded linear congruential generator with Box-Muller normal sampling.
//!
//! The recurrence is `state = (a * state + c) mod m` with the classic
//! constants a = 1103515245, c = 12345, m = 2^31. The multiply-add wraps
//! modulo 2^32 before the final mod-2^31 reduction, matching fixed-width
//! unsigned semantics, so the sequence is reproducible bit-for-bit for any
//! given seed.

use std::f64::consts::PI;

use crate::error::GeneratorError;

/// Deterministic pseudo-random number generator.
///
/// Produces uniform values in [0, 1) from a linear congruential recurrence
/// and normal values via the Box-Muller transform. The second deviate of
/// each Box-Muller pair is cached and returned by the next normal draw.
///
/// # Reproducibility
///
/// The same seed always produces the same sequence. No platform entropy is
/// ever consumed.
///
/// # Examples
///
/// ```rust
/// use detrand_core::Lcg;
///
/// let mut a = Lcg::new(12345)?;
/// let mut b = Lcg::new(12345)?;
///
/// // Same seed produces identical sequences
/// assert_eq!(a.next_uniform(), b.next_uniform());
/// # Ok::<(), detrand_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lcg {
    /// Current LCG state; always in [0, `MODULUS`).
    state: u32,
    /// The initial state, retained for reproducibility tracking.
    seed: u32,
    /// Second deviate of the last Box-Muller pair, if not yet consumed.
    cached_gaussian: Option<f64>,
}

impl Lcg {
    /// LCG multiplier (a).
    pub const MULTIPLIER: u32 = 1_103_515_245;
    /// LCG increment (c).
    pub const INCREMENT: u32 = 12_345;
    /// LCG modulus (m = 2^31).
    pub const MODULUS: u32 = 1 << 31;

    /// Creates a generator initialised with the given seed.
    ///
    /// Seeds at or above 2^31 are reduced modulo [`Lcg::MODULUS`] so the
    /// state invariant `state < m` holds from construction.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidSeed`] when `seed` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use detrand_core::{GeneratorError, Lcg};
    ///
    /// let rng = Lcg::new(42)?;
    /// assert_eq!(rng.seed(), 42);
    ///
    /// assert_eq!(Lcg::new(-1), Err(GeneratorError::InvalidSeed { seed: -1 }));
    /// # Ok::<(), detrand_core::GeneratorError>(())
    /// ```
    pub fn new(seed: i64) -> Result<Self, GeneratorError> {
        if seed < 0 {
            return Err(GeneratorError::InvalidSeed { seed });
        }
        let state = (seed % i64::from(Self::MODULUS)) as u32;
        Ok(Self {
            state,
            seed: state,
            cached_gaussian: None,
        })
    }

    /// Returns the seed this generator was constructed with.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the current raw LCG state.
    ///
    /// Each uniform draw advances the state exactly once, so callers can
    /// count underlying draws by observing state transitions.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Returns `true` when the second half of a Box-Muller pair is pending.
    #[inline]
    pub fn has_cached_gaussian(&self) -> bool {
        self.cached_gaussian.is_some()
    }

    /// Generates the next uniform value in [0, 1).
    ///
    /// Advances the state via `state = (a * state + c) mod m` and returns
    /// `state / m`. Since `state < m` always holds, the result is strictly
    /// below 1.0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use detrand_core::Lcg;
    ///
    /// let mut rng = Lcg::new(42)?;
    /// let u = rng.next_uniform();
    /// assert!(u >= 0.0 && u < 1.0);
    /// # Ok::<(), detrand_core::GeneratorError>(())
    /// ```
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        // Wrap mod 2^32 in the multiply-add, then reduce mod 2^31. Both
        // steps are load-bearing for seed compatibility.
        self.state = Self::MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(Self::INCREMENT)
            % Self::MODULUS;
        f64::from(self.state) / f64::from(Self::MODULUS)
    }

    /// Generates the next normal value with the given mean and standard
    /// deviation.
    ///
    /// Uses the Box-Muller transform: a cache miss draws one pair of
    /// uniforms, returns the cosine deviate and caches the sine deviate for
    /// the following call. Two consecutive calls therefore consume exactly
    /// two uniform draws.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidStdDev`] when `stddev` is not
    /// strictly positive (NaN included). Validation happens before any
    /// draw, so the sequence position and the cache are left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use detrand_core::Lcg;
    ///
    /// let mut rng = Lcg::new(42)?;
    /// let z = rng.next_normal(5.0, 2.0)?;
    /// assert!(z.is_finite());
    ///
    /// assert!(rng.next_normal(0.0, -1.0).is_err());
    /// # Ok::<(), detrand_core::GeneratorError>(())
    /// ```
    pub fn next_normal(&mut self, mean: f64, stddev: f64) -> Result<f64, GeneratorError> {
        if stddev <= 0.0 || stddev.is_nan() {
            return Err(GeneratorError::InvalidStdDev { stddev });
        }
        Ok(mean + stddev * self.sample_standard())
    }

    /// Generates the next standard normal value (mean 0, standard
    /// deviation 1).
    ///
    /// Equivalent to `next_normal(0.0, 1.0)` but infallible, since the
    /// standard parameters always pass validation.
    #[inline]
    pub fn next_standard_normal(&mut self) -> f64 {
        self.sample_standard()
    }

    /// Fills the buffer with uniform values in [0, 1).
    ///
    /// Zero-allocation; the buffer is pre-allocated by the caller. An empty
    /// buffer is a no-op.
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }

    /// Fills the buffer with normal values of the given mean and standard
    /// deviation.
    ///
    /// Shares the pair cache with [`Lcg::next_normal`]: filling a buffer of
    /// even length from an empty cache consumes exactly `len` uniform draws
    /// (absent zero-redraws) and leaves the cache empty.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidStdDev`] when `stddev` is not
    /// strictly positive; the buffer and generator state are untouched.
    pub fn fill_normal(
        &mut self,
        buffer: &mut [f64],
        mean: f64,
        stddev: f64,
    ) -> Result<(), GeneratorError> {
        if stddev <= 0.0 || stddev.is_nan() {
            return Err(GeneratorError::InvalidStdDev { stddev });
        }
        for value in buffer.iter_mut() {
            *value = mean + stddev * self.sample_standard();
        }
        Ok(())
    }

    /// Draws one standard normal deviate, consuming the cache if present.
    fn sample_standard(&mut self) -> f64 {
        if let Some(z) = self.cached_gaussian.take() {
            return z;
        }

        // Box-Muller: u1 feeds the logarithm, so redraw while it is exactly
        // zero; u2 only feeds the angle and is drawn exactly once.
        let mut u1 = self.next_uniform();
        while u1 == 0.0 {
            u1 = self.next_uniform();
        }
        let u2 = self.next_uniform();

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;
        let z0 = r * theta.cos();
        let z1 = r * theta.sin();

        self.cached_gaussian = Some(z1);
        z0
    }
}
