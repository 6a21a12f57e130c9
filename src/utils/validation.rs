use crate::utils::error::{FilmorateError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FilmorateError::validation(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_no_whitespace(field_name: &str, value: &str) -> Result<()> {
    if value.chars().any(char::is_whitespace) {
        return Err(FilmorateError::validation(
            field_name,
            "Value cannot contain whitespace",
        ));
    }
    Ok(())
}

pub fn validate_contains(field_name: &str, value: &str, needle: char) -> Result<()> {
    if !value.contains(needle) {
        return Err(FilmorateError::validation(
            field_name,
            format!("Value must contain '{}'", needle),
        ));
    }
    Ok(())
}

/// Length is counted in characters, not bytes.
pub fn validate_max_chars(field_name: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(FilmorateError::validation(
            field_name,
            format!("Value is {} characters long, at most {} allowed", len, max),
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(FilmorateError::validation(
            field_name,
            format!("Value must be positive, got {}", value),
        ));
    }
    Ok(())
}

pub fn validate_not_before(field_name: &str, date: NaiveDate, earliest: NaiveDate) -> Result<()> {
    if date < earliest {
        return Err(FilmorateError::validation(
            field_name,
            format!("{} is before {}", date, earliest),
        ));
    }
    Ok(())
}

pub fn validate_not_after(field_name: &str, date: NaiveDate, latest: NaiveDate) -> Result<()> {
    if date > latest {
        return Err(FilmorateError::validation(
            field_name,
            format!("{} is after {}", date, latest),
        ));
    }
    Ok(())
}
