//! Server configuration from environment variables.
//!
//! | Variable              | Default  | Notes                                       |
//! |-----------------------|----------|---------------------------------------------|
//! | `SUPABASE_URL`        | -        | unset: serve from the in-memory store       |
//! | `SUPABASE_ANON_KEY`   | -        | required once a URL is set                  |
//! | `PORT`                | 3000     |                                             |
//! | `STATIC_DIR`          | `public` | images and other static assets              |
//! | `STORE_TIMEOUT_SECS`  | 10       | per-request timeout for store queries       |
//!
//! The `NEXT_PUBLIC_`-prefixed names used by the old frontend deployment are
//! accepted as aliases for the two store variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set when SUPABASE_URL is set")]
    MissingKey(&'static str),

    #[error("{key} is not a valid number: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    /// `None` when no database is configured.
    pub store: Option<StoreConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            store: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |keys: &[&str]| {
            keys.iter()
                .find_map(|k| lookup(k))
                .filter(|v| !v.trim().is_empty())
        };

        let port = parse_number(get(&["PORT"]), "PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_number(
            get(&["STORE_TIMEOUT_SECS"]),
            "STORE_TIMEOUT_SECS",
            DEFAULT_STORE_TIMEOUT_SECS,
        )?;
        let static_dir = get(&["STATIC_DIR"])
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let store = match get(&["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"]) {
            Some(url) => {
                let anon_key = get(&["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"])
                    .ok_or(ConfigError::MissingKey("SUPABASE_ANON_KEY"))?;
                Some(StoreConfig {
                    url,
                    anon_key,
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            None => None,
        };

        Ok(Self { port, static_dir, store })
    }
}

fn parse_number<T: std::str::FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        None => Ok(default),
    }
}
