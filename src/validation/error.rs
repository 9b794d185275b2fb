//! Validation Error Types

use thiserror::Error;

use super::{HASH_LENGTH, MAX_ADDRESS_LENGTH, MIN_ADDRESS_LENGTH, PUBLIC_KEY_LENGTH};

/// Reason a field was rejected
///
/// The `Display` output is the human-readable message handed back to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field was empty
    #[error("{0} is required")]
    Required(&'static str),

    /// Address length outside the accepted range
    #[error(
        "address length must be between {} and {} characters",
        MIN_ADDRESS_LENGTH,
        MAX_ADDRESS_LENGTH
    )]
    AddressLength,

    /// Address matched neither the mainnet nor the testnet pattern
    #[error("invalid Dogecoin address format")]
    InvalidAddressFormat,

    /// Hash is not exactly 64 characters
    #[error("hash must be exactly {} characters", HASH_LENGTH)]
    HashLength,

    /// Public key is not exactly 66 characters
    #[error(
        "public key must be exactly {} characters (compressed format)",
        PUBLIC_KEY_LENGTH
    )]
    PublicKeyLength,

    /// Field contains non-hexadecimal characters
    #[error("{0} must be a valid hexadecimal string")]
    InvalidHex(&'static str),

    /// Hex decoding failed after the format check passed
    #[error("public key is not valid hexadecimal: {0}")]
    HexDecode(String),

    /// Field is not valid UTF-8
    #[error("{0} contains invalid UTF-8 characters")]
    InvalidUtf8(String),

    /// Field has more code points than allowed
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: String, max: usize },

    /// Field contains characters outside the safe set
    #[error("{0} contains invalid characters")]
    UnsafeCharacters(String),

    /// URL without an http(s) scheme
    #[error("{0} must be a valid HTTP/HTTPS URL")]
    InvalidUrl(&'static str),

    /// Numeric field is zero or negative
    #[error("{0} must be greater than 0")]
    NotPositive(String),

    /// Numeric field above its ceiling
    #[error("{field} exceeds maximum value of {max}")]
    ExceedsMaximum { field: String, max: i64 },

    /// Tag list longer than allowed
    #[error("too many tags (maximum {max} allowed)")]
    TooManyTags { max: usize },

    /// Tag at the given 1-based position is empty
    #[error("tag {0} is empty")]
    EmptyTag(usize),

    /// Payload larger than the byte cap
    #[error("{field} exceeds maximum size of {max} bytes")]
    TooLarge { field: String, max: usize },

    /// Action type outside the known set
    #[error("invalid action type: {0}")]
    InvalidActionType(u32),
}

/// Result type for field validation
pub type ValidationResult<T> = Result<T, ValidationError>;
