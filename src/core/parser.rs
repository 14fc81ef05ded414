//! Reads the `src`, `dst` and `error` fields out of a service reply.
//!
//! Replies look like
//! `{"success": true, "src": "2 United States Dollars", "dst": "1.772814 Euros", "error": ""}`
//! with no guarantee about spacing around the colons or about field order. Keys must be
//! quoted and followed by a colon; the value is the next quoted run after that colon.
//! Each field is found by searching for its own key, so a stray quote inside one value
//! does not hide the fields after it.

use crate::core::scan::{locate, quoted_span};
use crate::domain::model::ServiceResponse;
use crate::utils::error::{FxError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Src,
    Dst,
    Error,
}

impl Field {
    fn key_token(self) -> &'static str {
        match self {
            Field::Src => "\"src\"",
            Field::Dst => "\"dst\"",
            Field::Error => "\"error\"",
        }
    }

    /// How the field is named in `MarkerNotFound` errors.
    pub fn marker(self) -> &'static str {
        match self {
            Field::Src => "\"src\":",
            Field::Dst => "\"dst\"",
            Field::Error => "\"error\"",
        }
    }

    fn not_found(self) -> FxError {
        FxError::MarkerNotFound {
            marker: self.marker().to_string(),
        }
    }
}

/// Start of the value after a key ending at `key_end`, if a colon follows the key.
fn value_start(text: &str, key_end: usize) -> Option<usize> {
    let after_key = text[key_end..].trim_start();
    let value = after_key.strip_prefix(':')?.trim_start();
    Some(text.len() - value.len())
}

/// Value of `field`, or `None` when no occurrence of its key is followed by
/// a colon and a quoted value. The first such occurrence wins.
fn find_field(text: &str, field: Field) -> Result<Option<&str>> {
    let token = field.key_token();
    let mut from = 0;

    while let Ok(at) = locate(text, token, from) {
        from = at + 1;
        let Some(start) = value_start(text, at + token.len()) else {
            // the token is a value here, e.g. `"src": "dst"`
            continue;
        };
        if !text[start..].starts_with('"') {
            // e.g. `"src": null`
            continue;
        }
        return quoted_span(&text[start..]).map(Some);
    }

    Ok(None)
}

fn extract(text: &str, field: Field) -> Result<&str> {
    find_field(text, field)?.ok_or_else(|| field.not_found())
}

/// Value of the `src` field, e.g. `"2 United States Dollars"`. Empty on a failed query.
pub fn extract_src(text: &str) -> Result<&str> {
    extract(text, Field::Src)
}

/// Value of the `dst` field, e.g. `"1.772814 Euros"`. Empty on a failed query.
pub fn extract_dst(text: &str) -> Result<&str> {
    extract(text, Field::Dst)
}

/// Whether the reply carries a non-empty error message.
pub fn has_error(text: &str) -> Result<bool> {
    extract(text, Field::Error).map(|message| !message.is_empty())
}

impl ServiceResponse {
    /// Captures the reply fields. `dst` and `error` are required and reported by
    /// their marker when absent; `src` is kept only when present as a string.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self {
            src: find_field(text, Field::Src)?.map(str::to_string),
            dst: extract(text, Field::Dst)?.to_string(),
            error: extract(text, Field::Error)?.to_string(),
        })
    }
}

/// Leading number of an amount field such as `"1.772814 Euros"`.
pub fn leading_amount(field: &str) -> Result<f64> {
    let token = field.split_whitespace().next().unwrap_or_default();
    token.parse::<f64>().map_err(|_| FxError::InvalidNumber {
        value: field.to_string(),
    })
}
