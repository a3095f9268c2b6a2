//! Seeder configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable            | Default                          |
//! |---------------------|----------------------------------|
//! | `FORNERIA_DB_PATH`  | `./forneria_dev.db`              |
//! | `FORNERIA_RNG_SEED` | unset (entropy)                  |
//! | `RUST_LOG`          | `info,forneria=debug,sqlx=warn`  |

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::pool::DbConfig;

/// Default SQLite file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "./forneria_dev.db";

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,forneria=debug,sqlx=warn";

/// Seeder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// SQLite database file of the POS application
    pub database_path: PathBuf,

    /// Fixed RNG seed for reproducible runs
    pub rng_seed: Option<u64>,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl SeedConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup("FORNERIA_DB_PATH")
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        if database_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue("FORNERIA_DB_PATH".to_string()));
        }

        let rng_seed = match lookup("FORNERIA_RNG_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("FORNERIA_RNG_SEED".to_string()))?,
            ),
            None => None,
        };

        Ok(SeedConfig {
            database_path: PathBuf::from(database_path),
            rng_seed,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// Pool configuration for the seeder's database file.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_path.clone())
    }

    /// RNG for sale planning: seeded when `rng_seed` is set, entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages, including every row written
/// - `RUST_LOG=forneria=trace` - Trace only the seeder crates
/// - Default: info, debug for `forneria*`, warn for sqlx
///
/// A malformed filter falls back to the default. Calling this twice is a no-op.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            rng_seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SeedConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SeedConfig::default());
        assert_eq!(config.db_config().database_path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn test_overrides() {
        let config = SeedConfig::from_lookup(lookup(&[
            ("FORNERIA_DB_PATH", "/var/lib/forneria/pos.db"),
            ("FORNERIA_RNG_SEED", " 42 "),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/var/lib/forneria/pos.db"));
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_seed() {
        let err = SeedConfig::from_lookup(lookup(&[("FORNERIA_RNG_SEED", "abc")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for FORNERIA_RNG_SEED");
    }

    #[test]
    fn test_empty_db_path() {
        let err = SeedConfig::from_lookup(lookup(&[("FORNERIA_DB_PATH", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "FORNERIA_DB_PATH"));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = SeedConfig {
            rng_seed: Some(7),
            ..SeedConfig::default()
        };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
