//! Validation utilities
//!
//! Provides helpers for common validation patterns.

use crate::validation::{ValidationError, ValidationResult};

/// Ensure a condition is true, or return the given error
///
/// Similar to `assert!` but returns a Result instead of panicking.
///
/// # Example
/// ```rust
/// use fractal_validation::utils::ensure;
/// use fractal_validation::ValidationError;
///
/// assert!(ensure(1 > 0, ValidationError::Required("value")).is_ok());
/// ```
pub fn ensure(condition: bool, error: ValidationError) -> ValidationResult<()> {
    if condition {
        Ok(())
    } else {
        Err(error)
    }
}

/// Ensure a condition is true, building the error only on failure
///
/// # Example
/// ```rust
/// use fractal_validation::utils::ensure_with;
/// use fractal_validation::ValidationError;
///
/// let value = 0;
/// let result = ensure_with(value > 0, || ValidationError::NotPositive("value".to_string()));
/// assert!(result.is_err());
/// ```
pub fn ensure_with<F>(condition: bool, error: F) -> ValidationResult<()>
where
    F: FnOnce() -> ValidationError,
{
    if condition {
        Ok(())
    } else {
        Err(error())
    }
}

/// Validate a value is strictly positive and at most `max`
///
/// Returns `NotPositive` for `value <= 0` and `ExceedsMaximum` above `max`.
pub fn ensure_positive_at_most(value: i64, max: i64, name: &str) -> ValidationResult<()> {
    ensure_with(value > 0, || ValidationError::NotPositive(name.to_string()))?;
    ensure_with(value <= max, || ValidationError::ExceedsMaximum {
        field: name.to_string(),
        max,
    })
}
