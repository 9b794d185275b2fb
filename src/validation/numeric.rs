//! Numeric amount checks
//!
//! Quantities, prices and fraction counts must be strictly positive and at
//! most one billion.

use super::error::ValidationResult;
use super::{MAX_FRACTION_COUNT, MAX_PRICE, MAX_QUANTITY};
use crate::utils::ensure_positive_at_most;

/// Validate a quantity value
pub fn validate_quantity(field: &str, quantity: i64) -> ValidationResult<()> {
    ensure_positive_at_most(quantity, MAX_QUANTITY, field)
}

/// Validate a price value (smallest unit)
pub fn validate_price(field: &str, price: i64) -> ValidationResult<()> {
    ensure_positive_at_most(price, MAX_PRICE, field)
}

/// Validate the fraction count of a mint
pub fn validate_fraction_count(field: &str, fraction_count: i64) -> ValidationResult<()> {
    ensure_positive_at_most(fraction_count, MAX_FRACTION_COUNT, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity("amount", 1000).is_ok());
        assert!(validate_quantity("amount", MAX_QUANTITY).is_ok());

        let zero = validate_quantity("amount", 0).unwrap_err();
        assert_eq!(zero.to_string(), "amount must be greater than 0");
        assert!(validate_quantity("amount", -100).is_err());

        assert_eq!(
            validate_quantity("amount", MAX_QUANTITY + 1)
                .unwrap_err()
                .to_string(),
            "amount exceeds maximum value of 1000000000"
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", 1).is_ok());
        assert!(validate_price("price", MAX_PRICE).is_ok());
        assert_eq!(
            validate_price("price", 0).unwrap_err(),
            ValidationError::NotPositive("price".to_string())
        );
        assert!(validate_price("price", MAX_PRICE + 1).is_err());
    }

    #[test]
    fn test_validate_fraction_count() {
        assert!(validate_fraction_count("fraction_count", 100).is_ok());
        assert!(validate_fraction_count("fraction_count", -1).is_err());
        assert!(validate_fraction_count("fraction_count", MAX_FRACTION_COUNT + 1).is_err());
    }
}
