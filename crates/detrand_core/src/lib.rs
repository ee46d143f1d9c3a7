//! # Detrand Core (Deterministic Sampling Kernel)
//!
//! This crate provides a seedable pseudo-random number generator built on a
//! linear congruential recurrence, producing uniform values in [0, 1) and
//! normally distributed values via the Box-Muller transform.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: a fixed seed yields a bit-for-bit identical uniform
//!   sequence across runs and platforms. The generator never delegates to a
//!   platform RNG; every output is a pure function of the seed.
//! - **Pair caching**: Box-Muller produces two deviates per pair of uniform
//!   draws. The second deviate is cached and consumed by the next normal
//!   draw, so a pair of calls costs exactly two uniform draws.
//! - **Single ownership**: the generator is a small owned struct mutated in
//!   place. Callers needing concurrent use keep one instance per thread.
//!
//! ## Module Structure
//!
//! - [`lcg`]: the generator itself ([`Lcg`])
//! - [`error`]: structured error types ([`GeneratorError`])
//!
//! ## Usage Example
//!
//! ```rust
//! use detrand_core::Lcg;
//!
//! let mut rng = Lcg::new(42)?;
//!
//! // Uniform draw in [0, 1)
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Normal draw with mean 0, standard deviation 1
//! let z = rng.next_normal(0.0, 1.0)?;
//! assert!(z.is_finite());
//!
//! // Batch generation into a pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_uniform(&mut buffer);
//! # Ok::<(), detrand_core::GeneratorError>(())
//! ```
//!
//! ## Non-Goals
//!
//! Not cryptographically secure, no multi-stream support, no internal
//! synchronisation. This is a reproducibility tool for simulation, testing
//! and procedural generation, not a source of secrets.

pub mod error;
pub mod lcg;

// Public re-exports
pub use error::GeneratorError;
pub use lcg::Lcg;
