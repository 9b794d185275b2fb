//! Checks for values decoded from on-chain protobuf messages

use serde::{Deserialize, Serialize};
use std::fmt;

use super::address::validate_address;
use super::digest::validate_hash;
use super::error::{ValidationError, ValidationResult};
use super::MAX_QUANTITY;

/// Action carried by an on-chain message envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum ActionType {
    Mint = 1,
    Invoice = 2,
    Payment = 3,
}

impl ActionType {
    /// Wire code of the action
    pub fn code(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ActionType {
    type Error = ValidationError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ActionType::Mint),
            2 => Ok(ActionType::Invoice),
            3 => Ok(ActionType::Payment),
            other => Err(ValidationError::InvalidActionType(other)),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::Mint => write!(f, "mint"),
            ActionType::Invoice => write!(f, "invoice"),
            ActionType::Payment => write!(f, "payment"),
        }
    }
}

/// Validate an action type code
pub fn validate_protobuf_action_type(action_type: u32) -> ValidationResult<()> {
    ActionType::try_from(action_type).map(|_| ())
}

/// Validate a quantity from a protobuf message
///
/// Only zero and values above [`MAX_QUANTITY`] are rejected. Negative values
/// pass; unlike [`validate_quantity`](super::validate_quantity) this entry
/// point does not check the sign.
pub fn validate_protobuf_quantity(quantity: i32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::NotPositive("quantity".to_string()));
    }

    if i64::from(quantity) > MAX_QUANTITY {
        return Err(ValidationError::ExceedsMaximum {
            field: "quantity".to_string(),
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validate a hash from a protobuf message
pub fn validate_protobuf_hash(hash: &str) -> ValidationResult<()> {
    validate_hash(hash)
}

/// Validate an address from a protobuf message
pub fn validate_protobuf_address(address: &str) -> ValidationResult<()> {
    validate_address(address)
}
