use crate::utils::error::{FxError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FxError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FxError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FxError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Rejects blank values and `${VAR}` placeholders that were never substituted.
pub fn validate_secret(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FxError::MissingConfig {
            field: field_name.to_string(),
        });
    }
    if value.starts_with("${") && value.ends_with('}') {
        return Err(FxError::MissingConfig {
            field: value[2..value.len() - 1].to_string(),
        });
    }
    Ok(())
}

pub fn validate_currency_code(code: &str) -> Result<()> {
    if code.is_empty() {
        return Err(FxError::InvalidCurrencyCode {
            code: code.to_string(),
            reason: "code cannot be empty".to_string(),
        });
    }
    if let Some(bad) = code.chars().find(|c| !c.is_alphabetic()) {
        return Err(FxError::InvalidCurrencyCode {
            code: code.to_string(),
            reason: format!("'{}' is not a letter", bad),
        });
    }
    Ok(())
}

pub fn validate_amount(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FxError::InvalidAmount {
            value,
            reason: "amount must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(FxError::InvalidAmount {
            value,
            reason: "amount cannot be negative".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://example.com/fixed").is_ok());
        assert!(validate_url("endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "invalid-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_secret() {
        assert!(validate_secret("api_key", "abc123").is_ok());
        assert!(validate_secret("api_key", "   ").is_err());

        match validate_secret("api_key", "${keyA}") {
            Err(FxError::MissingConfig { field }) => assert_eq!(field, "keyA"),
            other => panic!("expected MissingConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("USD").is_ok());
        assert!(validate_currency_code("eur").is_ok());
        assert!(validate_currency_code("").is_err());
        assert!(validate_currency_code("US1").is_err());
        assert!(validate_currency_code("U D").is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(2.5).is_ok());
        assert!(validate_amount(-1.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }
}
