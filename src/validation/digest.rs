//! SHA256 hash checks

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{ValidationError, ValidationResult};
use super::HASH_LENGTH;
use crate::utils::ensure;

static HASH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-fA-F0-9]{64}$").expect("valid hash regex"));

/// Validate SHA256 hash format (64 hex characters, any case)
pub fn validate_hash(hash: &str) -> ValidationResult<()> {
    if hash.is_empty() {
        return Err(ValidationError::Required("hash"));
    }

    ensure(hash.len() == HASH_LENGTH, ValidationError::HashLength)?;

    if !HASH_REGEX.is_match(hash) {
        return Err(ValidationError::InvalidHex("hash"));
    }

    Ok(())
}

/// Validate a hash and decode it into its 32 raw bytes
pub fn decode_hash(hash: &str) -> ValidationResult<[u8; 32]> {
    validate_hash(hash)?;

    let mut bytes = [0u8; 32];
    hex::decode_to_slice(hash, &mut bytes)
        .map_err(|_| ValidationError::InvalidHex("hash"))?;
    Ok(bytes)
}
