//! Form input validation
//!
//! Local checks that run before submission and block the flow entirely; a
//! validation failure never reaches the gateway.

use miniseller_domain::constants::MAX_OPPORTUNITY_AMOUNT;
use miniseller_domain::{Result, SellerError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Static email regex pattern compiled once at first use
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// Static amount regex pattern compiled once at first use
static AMOUNT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(\.\d{1,2})?$").expect("AMOUNT_REGEX pattern is valid and well-formed")
});

/// Whether the string looks like an email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate a required email field.
pub fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(SellerError::Validation("Email is required".to_string()));
    }
    if !is_valid_email(email) {
        return Err(SellerError::Validation("Please enter a valid email address".to_string()));
    }
    Ok(())
}

/// Validate an optional monetary amount entered as text.
///
/// Empty input is valid and yields `None` (the amount is optional).
/// Otherwise the string must be a plain positive number with at most two
/// decimal places, no larger than $10,000,000.
pub fn validate_amount(amount: &str) -> Result<Option<f64>> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if !AMOUNT_REGEX.is_match(trimmed) {
        return Err(SellerError::Validation(
            "Amount must be a valid number (e.g., 1000 or 1000.50)".to_string(),
        ));
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        SellerError::Validation("Amount must be a valid number (e.g., 1000 or 1000.50)".to_string())
    })?;

    if value <= 0.0 {
        return Err(SellerError::Validation("Amount must be greater than 0".to_string()));
    }
    if value > MAX_OPPORTUNITY_AMOUNT {
        return Err(SellerError::Validation("Amount cannot exceed $10,000,000".to_string()));
    }

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_message(result: Result<Option<f64>>) -> String {
        result.expect_err("expected a validation error").to_string()
    }

    #[test]
    fn accepts_plain_and_decimal_amounts() {
        assert_eq!(validate_amount("25000").expect("valid"), Some(25_000.0));
        assert_eq!(validate_amount("25000.50").expect("valid"), Some(25_000.50));
    }

    #[test]
    fn empty_amount_is_valid_and_absent() {
        assert_eq!(validate_amount("").expect("valid"), None);
        assert_eq!(validate_amount("   ").expect("valid"), None);
    }

    #[test]
    fn rejects_malformed_amounts_with_format_message() {
        let message = "Amount must be a valid number (e.g., 1000 or 1000.50)";
        assert_eq!(validation_message(validate_amount("abc")), message);
        assert_eq!(validation_message(validate_amount("-5")), message);
        assert_eq!(validation_message(validate_amount("1.234")), message);
    }

    #[test]
    fn rejects_zero_amount() {
        assert_eq!(validation_message(validate_amount("0")), "Amount must be greater than 0");
    }

    #[test]
    fn rejects_amounts_over_the_cap() {
        assert_eq!(
            validation_message(validate_amount("20000000")),
            "Amount cannot exceed $10,000,000"
        );
    }

    #[test]
    fn accepts_well_formed_emails() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("user.name+tag@example.co.uk").is_ok());
    }

    #[test]
    fn empty_email_is_required_error() {
        let err = validate_email("").expect_err("empty is invalid");
        assert_eq!(err.to_string(), "Email is required");
        let err = validate_email("   ").expect_err("whitespace is invalid");
        assert_eq!(err.to_string(), "Email is required");
    }

    #[test]
    fn malformed_email_is_format_error() {
        for input in ["abc", "a@b", "a b@c.com", "@example.com"] {
            let err = validate_email(input).expect_err("malformed is invalid");
            assert_eq!(err.to_string(), "Please enter a valid email address");
        }
    }
}
