//! Raw integer fields as they arrive from JSON bodies or HTML forms

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Signed base-10 digits, optionally grouped with single underscores (`1_000`).
static INTEGER_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(_\d+)*$").expect("integer pattern is valid"));

/// An integer field before validation.
///
/// JSON clients send numbers, forms send strings, and some JSON clients send
/// numbers as strings; all three are accepted here and checked later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntegerInput {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Why an [`IntegerInput`] has no `i64` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerError {
    /// Not an integer at all: `"12.5"`, `"abc"`, NaN
    NotInteger,
    /// An integer too large in magnitude for `i64`
    OutOfRange,
}

impl IntegerInput {
    /// Integer value of the field.
    ///
    /// Text is trimmed before parsing. Floats are truncated toward zero.
    pub fn parse(&self) -> Result<i64, IntegerError> {
        match self {
            IntegerInput::Int(v) => Ok(*v),
            IntegerInput::Float(f) => {
                if !f.is_finite() {
                    return Err(IntegerError::NotInteger);
                }
                let truncated = f.trunc();
                // i64::MAX as f64 rounds up to 2^63, which is already out of range
                if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
                    Ok(truncated as i64)
                } else {
                    Err(IntegerError::OutOfRange)
                }
            }
            IntegerInput::Text(s) => {
                let s = s.trim();
                if !INTEGER_TEXT.is_match(s) {
                    return Err(IntegerError::NotInteger);
                }
                // The pattern leaves overflow as the only way parsing can fail
                s.replace('_', "")
                    .parse::<i64>()
                    .map_err(|_| IntegerError::OutOfRange)
            }
        }
    }
}

impl From<i64> for IntegerInput {
    fn from(v: i64) -> Self {
        IntegerInput::Int(v)
    }
}

impl From<&str> for IntegerInput {
    fn from(s: &str) -> Self {
        IntegerInput::Text(s.to_string())
    }
}
