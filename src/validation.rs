//! Field rules applied to books and customers before they reach the store.
//!
//! Each checker runs its rules in a fixed order and reports the first one that
//! fails as [`AppError::Validation`]. Inputs are expected to be sanitized already.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateLength;

use crate::{
    error::{AppError, AppResult},
    models::{IntegerError, IntegerInput},
};

/// Shortest and longest accepted name, author and city, in characters
pub const TEXT_MIN_CHARS: u64 = 1;
pub const TEXT_MAX_CHARS: u64 = 50;

pub const YEAR_PUBLISHED_RANGE: RangeInclusive<i64> = -10000..=2025;
pub const AGE_RANGE: RangeInclusive<i64> = 0..=150;

static LETTERS_AND_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("letters pattern is valid"));

fn has_text_length(value: &str) -> bool {
    value.validate_length(Some(TEXT_MIN_CHARS), Some(TEXT_MAX_CHARS), None)
}

fn is_letters_and_spaces(value: &str) -> bool {
    LETTERS_AND_SPACES.is_match(value)
}

fn rule(ok: bool, message: &str) -> AppResult<()> {
    if ok {
        Ok(())
    } else {
        Err(AppError::Validation(message.to_string()))
    }
}

/// Parse `raw` and check it lies in `range`, returning it narrowed to `i32`.
fn bounded_integer(
    raw: &IntegerInput,
    range: RangeInclusive<i64>,
    not_integer: &str,
    out_of_range: &str,
) -> AppResult<i32> {
    let value = raw.parse().map_err(|e| match e {
        IntegerError::NotInteger => AppError::Validation(not_integer.to_string()),
        IntegerError::OutOfRange => AppError::Validation(out_of_range.to_string()),
    })?;
    rule(range.contains(&value), out_of_range)?;
    i32::try_from(value).map_err(|_| AppError::Validation(out_of_range.to_string()))
}

/// Check a book's fields. Returns the parsed publication year.
pub fn check_book(name: &str, author: &str, year_published: &IntegerInput) -> AppResult<i32> {
    rule(has_text_length(name), "Book name must contain 1-50 characters")?;
    rule(has_text_length(author), "Author field must contain 1-50 characters")?;
    rule(
        is_letters_and_spaces(author),
        "Author must only contain letters and spaces",
    )?;
    rule(
        is_letters_and_spaces(name),
        "Book name must only contain letters and spaces",
    )?;
    bounded_integer(
        year_published,
        YEAR_PUBLISHED_RANGE,
        "Year published must be an integer",
        "Year published must be between -10000 and 2025",
    )
}

/// Check a customer's fields. Returns the parsed age.
pub fn check_customer(name: &str, city: &str, age: &IntegerInput) -> AppResult<i32> {
    let age = bounded_integer(
        age,
        AGE_RANGE,
        "Age must be an integer value",
        "Age must be between 0 and 150",
    )?;
    rule(has_text_length(name), "Customer name must contain 1-50 characters")?;
    rule(has_text_length(city), "City must contain 1-50 characters")?;
    rule(
        is_letters_and_spaces(name),
        "Customer name must only contain letters and spaces",
    )?;
    rule(
        is_letters_and_spaces(city),
        "City must only contain letters and spaces",
    )?;
    Ok(age)
}
