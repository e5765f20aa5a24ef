use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, Result};

static EMAIL_FORMAT_REGEXP: Lazy<Regex> = Lazy::new(||
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regexp is valid")
);

/// `local@domain.tld` shape check. Whether the address exists is the provider's call.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_FORMAT_REGEXP.is_match(email)
}

/// Trims `value`, failing with `message` when nothing is left.
pub fn require_non_blank(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Splits a comma-separated input into trimmed, non-empty entries.
pub fn split_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
