use crate::utils::error::Result;
use crate::utils::validation::{validate_amount, validate_currency_code};
use serde::Serialize;
use std::fmt;

/// A currency code as sent to the service. Letters only, case preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        validate_currency_code(&code)?;
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Money to convert. Non-negative and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self> {
        validate_amount(value)?;
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fields of a service reply, captured verbatim. `src` is informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub src: Option<String>,
    pub dst: String,
    pub error: String,
}

impl ServiceResponse {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExchangeOutcome {
    /// `value` is the leading number of the `dst` field, `description` the field itself.
    Converted { value: f64, description: String },
    /// The service answered with a non-empty error message.
    Rejected { message: String },
}

impl ExchangeOutcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            ExchangeOutcome::Converted { value, .. } => Some(*value),
            ExchangeOutcome::Rejected { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExchangeReport {
    pub src: CurrencyCode,
    pub dst: CurrencyCode,
    pub amount: Amount,
    #[serde(flatten)]
    pub outcome: ExchangeOutcome,
}

impl fmt::Display for ExchangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ExchangeOutcome::Converted { value, .. } => write!(
                f,
                "You can exchange {} {} for {} {}.",
                self.amount, self.src, value, self.dst
            ),
            ExchangeOutcome::Rejected { message } => write!(
                f,
                "Cannot exchange {} {} for {}: {}",
                self.amount, self.src, self.dst, message
            ),
        }
    }
}
