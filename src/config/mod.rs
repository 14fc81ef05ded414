#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{FxError, Result};
use crate::utils::validation::{validate_secret, validate_url, Validate};
use std::env;

pub const DEFAULT_ENDPOINT: &str = "https://ecpyfac.ecornell.com/python/currency/fixed";
pub const API_KEY_VAR: &str = "keyA";
pub const ENDPOINT_VAR: &str = "FX_ENDPOINT";

/// Where to send queries and the key to send with them. Loaded once at startup.
#[derive(Clone)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl ServiceConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads the key from `keyA` and the endpoint from `FX_ENDPOINT` (optional).
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(API_KEY_VAR)
    }

    /// Like [`from_env`](Self::from_env) with a different key variable.
    pub fn from_env_var(key_var: &str) -> Result<Self> {
        let api_key = env::var(key_var).map_err(|_| FxError::MissingConfig {
            field: key_var.to_string(),
        })?;
        let endpoint = env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let config = Self { endpoint, api_key };
        config.validate()?;
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

// Keeps the key out of `{:?}` output and therefore out of logs.
impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ConfigProvider for ServiceConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_secret("api_key", &self.api_key)?;
        Ok(())
    }
}
