use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service returned HTTP {status} for {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid currency code '{code}': {reason}")]
    InvalidCurrencyCode { code: String, reason: String },

    #[error("Invalid amount {value}: {reason}")]
    InvalidAmount { value: f64, reason: String },

    #[error("Currency '{code}' is not accepted by the exchange service")]
    UnsupportedCurrency { code: String },

    #[error("'{needle}' not found in text (searched from index {from})")]
    NotFound { needle: String, from: usize },

    #[error("Marker {marker} not found in service response")]
    MarkerNotFound { marker: String },

    #[error("Expected at least two quote characters, found {found}")]
    UnbalancedQuotes { found: usize },

    #[error("Cannot read a number from '{value}'")]
    InvalidNumber { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Precondition,
    Response,
    Transport,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FxError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FxError::Http(_) | FxError::HttpStatus { .. } => ErrorCategory::Transport,
            FxError::MissingConfig { .. }
            | FxError::InvalidConfigValue { .. }
            | FxError::ConfigParse { .. } => ErrorCategory::Configuration,
            FxError::InvalidCurrencyCode { .. }
            | FxError::InvalidAmount { .. }
            | FxError::UnsupportedCurrency { .. } => ErrorCategory::Precondition,
            FxError::NotFound { .. }
            | FxError::MarkerNotFound { .. }
            | FxError::UnbalancedQuotes { .. }
            | FxError::InvalidNumber { .. } => ErrorCategory::Response,
            FxError::IoError(_) | FxError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Precondition | ErrorCategory::Response => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FxError::Http(_) | FxError::HttpStatus { .. } => {
                "Could not reach the exchange service".to_string()
            }
            FxError::MissingConfig { field } => format!("Required setting '{}' is missing", field),
            FxError::InvalidCurrencyCode { code, .. } | FxError::UnsupportedCurrency { code } => {
                format!("'{}' is not a valid currency code", code)
            }
            FxError::InvalidAmount { value, .. } => format!("{} is not a valid amount", value),
            FxError::NotFound { .. }
            | FxError::MarkerNotFound { .. }
            | FxError::UnbalancedQuotes { .. }
            | FxError::InvalidNumber { .. } => {
                "The exchange service sent a response that could not be read".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Transport => "Check your network connection and the service endpoint",
            ErrorCategory::Configuration => {
                "Set the API key environment variable or fix the configuration file"
            }
            ErrorCategory::Precondition => "Use a currency code made of letters only, e.g. USD",
            ErrorCategory::Response => "The service response format may have changed",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, FxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_drive_severity() {
        let missing = FxError::MissingConfig {
            field: "keyA".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(missing.severity(), ErrorSeverity::Critical);

        let status = FxError::HttpStatus {
            status: 503,
            endpoint: "https://example.com/fixed".to_string(),
        };
        assert_eq!(status.category(), ErrorCategory::Transport);
        assert_eq!(status.severity(), ErrorSeverity::Medium);

        let marker = FxError::MarkerNotFound {
            marker: "\"src\":".to_string(),
        };
        assert_eq!(marker.category(), ErrorCategory::Response);
        assert_eq!(marker.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_user_friendly_message_names_the_code() {
        let err = FxError::UnsupportedCurrency {
            code: "XYZ".to_string(),
        };
        assert!(err.user_friendly_message().contains("XYZ"));
    }
}
