use thiserror::Error;

/// User-input rejection. Surfaced as a blocking notice by the embedding UI;
/// no store mutation happens for rejected input.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("please enter a name")]
    EmptyName,
    #[error("please enter an amount")]
    EmptyAmount,
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
}

/// Trims the entry name, rejecting empty or whitespace-only input.
pub fn entry_name(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Parses a user-typed amount. Empty and non-numeric input are rejected
/// here, before the value reaches the store or any aggregate.
pub fn amount(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyAmount);
    }
    parse_finite(trimmed)
}

/// Optional spending limit: blank input clears the limit, anything else
/// must parse as a number.
pub fn optional_amount(input: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_finite(trimmed).map(Some)
}

fn parse_finite(trimmed: &str) -> Result<f64, ValidationError> {
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::InvalidAmount(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed() {
        assert_eq!(entry_name("  Hotel "), Ok("Hotel".to_string()));
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(entry_name("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn amounts_parse_as_floats() {
        assert_eq!(amount("500"), Ok(500.0));
        assert_eq!(amount(" 12.50 "), Ok(12.5));
    }

    #[test]
    fn blank_and_non_numeric_amounts_are_rejected() {
        assert_eq!(amount(""), Err(ValidationError::EmptyAmount));
        assert_eq!(
            amount("lots"),
            Err(ValidationError::InvalidAmount("lots".to_string()))
        );
        assert_eq!(
            amount("NaN"),
            Err(ValidationError::InvalidAmount("NaN".to_string()))
        );
    }

    #[test]
    fn blank_limit_clears_it() {
        assert_eq!(optional_amount("  "), Ok(None));
        assert_eq!(optional_amount("1000"), Ok(Some(1000.0)));
        assert!(optional_amount("oops").is_err());
    }
}
