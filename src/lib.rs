pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::ReqwestTransport;
pub use config::{toml_config::TomlConfig, ServiceConfig};
pub use crate::core::{
    client::ServiceClient,
    exchange::ExchangeEngine,
    parser::{extract_dst, extract_src, has_error},
    validator::is_valid_currency,
};
pub use domain::model::{Amount, CurrencyCode, ExchangeOutcome, ExchangeReport, ServiceResponse};
pub use utils::error::{FxError, Result};
