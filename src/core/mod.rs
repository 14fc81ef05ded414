pub mod client;
pub mod exchange;
pub mod parser;
pub mod scan;
pub mod validator;

pub use crate::domain::model::{Amount, CurrencyCode, ExchangeOutcome, ExchangeReport, ServiceResponse};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
