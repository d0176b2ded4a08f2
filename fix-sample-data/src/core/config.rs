use std::path::PathBuf;

/// Fixer configuration
///
/// # Environment variables
///
/// All configuration can be overridden through environment variables; the
/// defaults reproduce a plain `fix-sample-data` invocation from the app root:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | SAMPLE_DATA_PATH | client/public/sampleDataFull.json | Fixture file to fix in place |
/// | RNG_SEED | (unset) | u64 seed for deterministic reservation backfill |
/// | LOG_LEVEL | info | Log level when RUST_LOG is not set |
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON fixture, read and overwritten in place
    pub data_path: PathBuf,
    /// Seed for the reservation backfill; unseeded (entropy) when absent
    pub rng_seed: Option<u64>,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            data_path: std::env::var("SAMPLE_DATA_PATH")
                .unwrap_or_else(|_| "client/public/sampleDataFull.json".into())
                .into(),
            rng_seed: std::env::var("RNG_SEED").ok().and_then(|s| s.parse().ok()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Override the fixture path and seed
    ///
    /// Commonly used in tests.
    pub fn with_overrides(data_path: impl Into<PathBuf>, rng_seed: Option<u64>) -> Self {
        let mut config = Self::from_env();
        config.data_path = data_path.into();
        config.rng_seed = rng_seed;
        config
    }
}
