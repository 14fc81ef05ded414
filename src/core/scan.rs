//! Substring helpers for reading the exchange service's quasi-JSON replies.

use crate::utils::error::{FxError, Result};

const QUOTE: &str = "\"";

/// Index of the first `needle` in `haystack` at or after `from`.
pub fn locate(haystack: &str, needle: &str, from: usize) -> Result<usize> {
    haystack
        .get(from..)
        .and_then(|rest| rest.find(needle))
        .map(|offset| from + offset)
        .ok_or_else(|| FxError::NotFound {
            needle: needle.to_string(),
            from,
        })
}

/// Non-overlapping occurrences of `needle`. An empty needle never matches.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Text strictly between the first and second double quote.
pub fn quoted_span(text: &str) -> Result<&str> {
    let found = count_occurrences(text, QUOTE);
    if found < 2 {
        return Err(FxError::UnbalancedQuotes { found });
    }
    let open = locate(text, QUOTE, 0)?;
    let close = locate(text, QUOTE, open + 1)?;
    Ok(&text[open + 1..close])
}
