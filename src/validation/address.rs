//! Dogecoin address format checks
//!
//! Mainnet addresses start with `D` (P2PKH) or `A` (P2SH); testnet and regtest
//! addresses start with `m`/`n` (P2PKH) or `2` (P2SH). The remainder must come
//! from the Base58 alphabet. The checksum is not verified.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{ValidationError, ValidationResult};
use super::{MAX_ADDRESS_LENGTH, MIN_ADDRESS_LENGTH};

/// Mainnet: P2PKH (D) or P2SH (A)
static MAINNET_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(D|A)[1-9A-HJ-NP-Za-km-z]{25,34}$").expect("valid mainnet address regex")
});

/// Testnet/regtest: P2PKH (m or n) or P2SH (2)
static TESTNET_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[mn2][1-9A-HJ-NP-Za-km-z]{25,34}$").expect("valid testnet address regex")
});

/// Network an address belongs to, judged by its leading character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// Validate a Dogecoin address and report its network
///
/// Checks run in order: emptiness, length (in bytes), mainnet pattern,
/// testnet pattern.
pub fn address_network(address: &str) -> ValidationResult<Network> {
    if address.is_empty() {
        return Err(ValidationError::Required("address"));
    }

    if address.len() < MIN_ADDRESS_LENGTH || address.len() > MAX_ADDRESS_LENGTH {
        return Err(ValidationError::AddressLength);
    }

    if MAINNET_ADDRESS_REGEX.is_match(address) {
        return Ok(Network::Mainnet);
    }

    if TESTNET_ADDRESS_REGEX.is_match(address) {
        return Ok(Network::Testnet);
    }

    Err(ValidationError::InvalidAddressFormat)
}

/// Validate Dogecoin address format
pub fn validate_address(address: &str) -> ValidationResult<()> {
    address_network(address).map(|_| ())
}
