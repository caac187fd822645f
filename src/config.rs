use std::env;
use std::net::SocketAddr;

use crate::error::ConfigError;

pub const BIND_VAR: &str = "EATNSPLIT_BIND";
pub const CURRENCY_VAR: &str = "EATNSPLIT_CURRENCY";
pub const CORS_ORIGIN_VAR: &str = "EATNSPLIT_CORS_ORIGIN";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub bind: SocketAddr,
    /// Appended to every amount shown in a balance line
    pub currency: String,
    pub cors_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            currency: "€".to_string(),
            cors_origin: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        if let Some(value) = lookup(BIND_VAR) {
            config.bind = value.parse().map_err(|_| ConfigError::InvalidBind {
                var: BIND_VAR,
                value: value.clone(),
            })?;
        }
        if let Some(currency) = lookup(CURRENCY_VAR) {
            config.currency = currency;
        }
        if let Some(origin) = lookup(CORS_ORIGIN_VAR) {
            if origin.is_empty() {
                return Err(ConfigError::Empty {
                    var: CORS_ORIGIN_VAR,
                });
            }
            config.cors_origin = Some(origin);
        }
        Ok(config)
    }
}
