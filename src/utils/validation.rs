use crate::utils::error::{XpError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(XpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(XpError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Parse a whole number typed by the user and check it against `[min, max]`.
///
/// Surrounding whitespace and a leading sign are accepted; anything else
/// (decimals, thousands separators, words) is rejected.
pub fn parse_bounded_integer(field_name: &str, raw: &str, min: i32, max: i32) -> Result<i32> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<i32>()
        .map_err(|_| XpError::InvalidInputError {
            field: field_name.to_string(),
            value: trimmed.to_string(),
            reason: "Not a whole number".to_string(),
        })?;

    validate_range(field_name, value, min, max)?;
    Ok(value)
}
