//! Compressed public key checks
//!
//! Only the encoding is checked: 66 hex characters. The `02`/`03` prefix and
//! curve membership are left to whoever verifies signatures.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{ValidationError, ValidationResult};
use super::PUBLIC_KEY_LENGTH;

static PUBLIC_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-fA-F0-9]{66}$").expect("valid public key regex"));

/// Validate public key format
pub fn validate_public_key(pub_key: &str) -> ValidationResult<()> {
    decode_public_key(pub_key).map(|_| ())
}

/// Validate a public key and decode it into its 33 raw bytes
pub fn decode_public_key(pub_key: &str) -> ValidationResult<[u8; 33]> {
    if pub_key.is_empty() {
        return Err(ValidationError::Required("public key"));
    }

    if pub_key.len() != PUBLIC_KEY_LENGTH {
        return Err(ValidationError::PublicKeyLength);
    }

    if !PUBLIC_KEY_REGEX.is_match(pub_key) {
        return Err(ValidationError::InvalidHex("public key"));
    }

    // Cannot fail once the pattern matched
    let mut bytes = [0u8; 33];
    hex::decode_to_slice(pub_key, &mut bytes)
        .map_err(|e| ValidationError::HexDecode(e.to_string()))?;
    Ok(bytes)
}
