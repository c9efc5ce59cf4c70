//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `PAIRING_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::alias::EntityId;
use crate::constants::{DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_PARTNERS, DEFAULT_ORACLE_TIMEOUT_MS};
use crate::search::{FanOutConfig, RecommendConfig};
use crate::service::ServiceSettings;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PAIRING_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Scoring oracle base URL. Default: `http://localhost:8000`.
    pub oracle_url: String,

    /// Korean alias CSV. Embedded table when unset.
    pub alias_table_path: Option<PathBuf>,

    /// Entity dataset CSV. Embedded dataset when unset.
    pub dataset_path: Option<PathBuf>,

    /// Per-call oracle deadline. Default: 10 s.
    pub oracle_timeout_ms: u64,

    /// Oracle calls in flight per request. Default: 25.
    pub max_concurrency: usize,

    /// Partners scored per recommendation. Default: 50.
    pub max_partners: usize,

    pub sample_liquor_ids: Vec<EntityId>,

    pub sample_ingredient_ids: Vec<EntityId>,
}

/// Default oracle URL used when `PAIRING_ORACLE_URL` is not set.
pub const DEFAULT_ORACLE_URL: &str = "http://localhost:8000";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            oracle_url: DEFAULT_ORACLE_URL.to_string(),
            alias_table_path: None,
            dataset_path: None,
            oracle_timeout_ms: DEFAULT_ORACLE_TIMEOUT_MS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            max_partners: DEFAULT_MAX_PARTNERS,
            sample_liquor_ids: Vec::new(),
            sample_ingredient_ids: Vec::new(),
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "PAIRING_PORT";
    const ENV_BIND_ADDR: &'static str = "PAIRING_BIND_ADDR";
    const ENV_ORACLE_URL: &'static str = "PAIRING_ORACLE_URL";
    const ENV_ALIAS_TABLE_PATH: &'static str = "PAIRING_ALIAS_TABLE_PATH";
    const ENV_DATASET_PATH: &'static str = "PAIRING_DATASET_PATH";
    const ENV_ORACLE_TIMEOUT_MS: &'static str = "PAIRING_ORACLE_TIMEOUT_MS";
    const ENV_MAX_CONCURRENCY: &'static str = "PAIRING_MAX_CONCURRENCY";
    const ENV_MAX_PARTNERS: &'static str = "PAIRING_MAX_PARTNERS";
    const ENV_SAMPLE_LIQUOR_IDS: &'static str = "PAIRING_SAMPLE_LIQUOR_IDS";
    const ENV_SAMPLE_INGREDIENT_IDS: &'static str = "PAIRING_SAMPLE_INGREDIENT_IDS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            port: Self::parse_port_from_env(defaults.port)?,
            bind_addr: Self::parse_bind_addr_from_env(defaults.bind_addr)?,
            oracle_url: Self::parse_string_from_env(Self::ENV_ORACLE_URL, defaults.oracle_url),
            alias_table_path: Self::parse_optional_path_from_env(Self::ENV_ALIAS_TABLE_PATH),
            dataset_path: Self::parse_optional_path_from_env(Self::ENV_DATASET_PATH),
            oracle_timeout_ms: Self::parse_number_from_env(
                Self::ENV_ORACLE_TIMEOUT_MS,
                defaults.oracle_timeout_ms,
            )?,
            max_concurrency: Self::parse_number_from_env(
                Self::ENV_MAX_CONCURRENCY,
                defaults.max_concurrency,
            )?,
            max_partners: Self::parse_number_from_env(
                Self::ENV_MAX_PARTNERS,
                defaults.max_partners,
            )?,
            sample_liquor_ids: Self::parse_ids_from_env(Self::ENV_SAMPLE_LIQUOR_IDS)?,
            sample_ingredient_ids: Self::parse_ids_from_env(Self::ENV_SAMPLE_INGREDIENT_IDS)?,
        })
    }

    /// Checks basic invariants. Missing data files are allowed: the index falls back to
    /// embedded data for them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.oracle_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://"))
            || url.trim_start_matches("https://").trim_start_matches("http://").is_empty()
        {
            return Err(ConfigError::InvalidOracleUrl {
                value: self.oracle_url.clone(),
            });
        }

        if self.oracle_timeout_ms == 0 {
            return Err(ConfigError::MustBePositive {
                name: Self::ENV_ORACLE_TIMEOUT_MS,
            });
        }
        if self.max_concurrency == 0 {
            return Err(ConfigError::MustBePositive {
                name: Self::ENV_MAX_CONCURRENCY,
            });
        }
        if self.max_partners == 0 {
            return Err(ConfigError::MustBePositive {
                name: Self::ENV_MAX_PARTNERS,
            });
        }

        for path in [&self.alias_table_path, &self.dataset_path].into_iter().flatten() {
            if path.exists() && !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn oracle_timeout(&self) -> Duration {
        Duration::from_millis(self.oracle_timeout_ms)
    }

    /// Service settings derived from this configuration.
    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            fanout: FanOutConfig {
                max_concurrency: self.max_concurrency,
                call_timeout: self.oracle_timeout(),
            },
            recommend: RecommendConfig {
                max_partners: self.max_partners,
                sample_liquor_ids: self.sample_liquor_ids.clone(),
                sample_ingredient_ids: self.sample_ingredient_ids.clone(),
            },
            priorities: None,
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_number_from_env<T>(name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr<Err = std::num::ParseIntError>,
    {
        match env::var(name) {
            Ok(value) if !value.trim().is_empty() => {
                value
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::InvalidNumber {
                        name,
                        value: value.clone(),
                        source: e,
                    })
            }
            _ => Ok(default),
        }
    }

    fn parse_ids_from_env(name: &'static str) -> Result<Vec<EntityId>, ConfigError> {
        let Ok(value) = env::var(name) else {
            return Ok(Vec::new());
        };

        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| {
                item.parse().map_err(|_| ConfigError::InvalidIdList {
                    name,
                    item: item.to_string(),
                })
            })
            .collect()
    }
}
