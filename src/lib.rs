pub mod config;
pub mod error;
pub mod stocks;
pub mod upstream;
pub mod window;

#[cfg(test)]
#[path = "tests/test.rs"]
mod tests;

pub use error::Error;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber, honoring `RUST_LOG` and defaulting
/// to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
