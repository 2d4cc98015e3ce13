pub mod config;
pub mod dice;
pub mod error;
pub mod naming;
pub mod walkthrough;

use config::Config;
use dice::{RandomSource, SeededSource, UniformTenSource};
use error::AppError;

/// Picks the source the configuration asks for and runs the walkthrough.
pub fn run_walkthrough(config: &Config) -> Result<Vec<String>, AppError> {
    let source: Box<dyn RandomSource> = match config.roller.seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded random source");
            Box::new(SeededSource::new(seed))
        }
        None => Box::new(UniformTenSource::new()),
    };

    Ok(walkthrough::run(&config.roller, source)?)
}
