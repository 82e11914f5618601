//! Application configuration

use std::env;

use crate::routing::validator::DEFAULT_VALIDATOR;

/// Host gate rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateConfig {
    /// Raw comma-separated allow-list, parsed on each evaluation
    pub allowed_hosts: String,
    /// Suffix under which subdomains are recognized
    pub domain: Option<String>,
    /// Admit localhost when the allow-list is empty
    pub debug: bool,
    /// Explicit default for `domain`; the request's own host otherwise
    pub server_name: Option<String>,
}

impl GateConfig {
    pub fn from_env() -> Self {
        Self {
            allowed_hosts: env::var("SCALAR_ALLOWED_HOSTS").unwrap_or_default(),
            domain: non_empty_var("SCALAR_DOMAIN"),
            debug: flag_var("SCALAR_DEBUG"),
            server_name: non_empty_var("SERVER_NAME"),
        }
    }
}

/// Per-installation gate parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateParams {
    pub subdomain_allowed: bool,
    pub subdomain_validator: Option<String>,
}

impl GateParams {
    pub fn from_env() -> Self {
        Self {
            subdomain_allowed: flag_var("SCALAR_SUBDOMAINS"),
            subdomain_validator: non_empty_var("SCALAR_SUBDOMAIN_VALIDATOR"),
        }
    }

    pub fn validator_name(&self) -> &str {
        self.subdomain_validator
            .as_deref()
            .unwrap_or(DEFAULT_VALIDATOR)
    }
}

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,

    // Database
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    // Gate
    pub gate: GateConfig,
    pub params: GateParams,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),

            // Database
            database_url: non_empty_var("DATABASE_URL"),
            database_max_connections: match env::var("DATABASE_MAX_CONNECTIONS") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .ok()
                    .filter(|n: &u32| *n > 0)
                    .ok_or_else(|| ConfigError::Invalid {
                        var: "DATABASE_MAX_CONNECTIONS",
                        reason: format!("expected a positive integer, got {raw:?}"),
                    })?,
                Err(_) => 5,
            },

            // Gate
            gate: GateConfig::from_env(),
            params: GateParams::from_env(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Variable value, treating empty as unset
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn flag_var(name: &str) -> bool {
    env::var(name).map(|v| parse_flag(&v)).unwrap_or(false)
}

/// Truthy unless empty or `0`; `false` and `off` count as set
pub fn parse_flag(raw: &str) -> bool {
    !matches!(raw, "" | "0")
}
