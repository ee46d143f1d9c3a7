//! Sampler Demo CLI
//!
//! Minimal demonstration caller for the detrand generator: constructs a
//! seeded [`Lcg`] and prints successive samples to stdout. The generator's
//! public interface is the whole contract; this binary is just a caller.
//!
//! # Usage
//!
//! ```bash
//! sampler                         # five standard normal samples, seed 42
//! sampler --seed 7 --count 10     # ten samples from seed 7
//! sampler --uniform --count 3     # uniform draws instead of normal ones
//! sampler --mean 5 --stddev 2     # shifted/scaled normal samples
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use detrand_core::Lcg;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Deterministic sampling demo
#[derive(Parser)]
#[command(name = "sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the generator (same seed, same output)
    #[arg(short, long, default_value_t = 42)]
    seed: i64,

    /// Number of samples to print
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,

    /// Mean of the normal distribution
    #[arg(long, default_value_t = 0.0)]
    mean: f64,

    /// Standard deviation of the normal distribution
    #[arg(long, default_value_t = 1.0)]
    stddev: f64,

    /// Print uniform draws in [0, 1) instead of normal samples
    #[arg(short, long)]
    uniform: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("sampler=info".parse()?))
        .init();

    let cli = Cli::parse();
    info!(
        seed = cli.seed,
        count = cli.count,
        uniform = cli.uniform,
        "sampler starting"
    );

    let mut rng = Lcg::new(cli.seed).context("failed to construct generator")?;

    if cli.uniform {
        for _ in 0..cli.count {
            println!("{}", rng.next_uniform());
        }
    } else {
        for _ in 0..cli.count {
            let sample = rng
                .next_normal(cli.mean, cli.stddev)
                .context("failed to draw normal sample")?;
            println!("{sample}");
        }
    }

    info!("sampler done");
    Ok(())
}
