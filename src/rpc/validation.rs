//! RPC Parameter Validation
//!
//! Extracts positional JSON-RPC parameters and runs them through the field
//! validators, turning any rejection into an invalid-params error.

use serde_json::Value;

use super::errors::{RpcError, RpcResult};
use crate::validation::{
    validate_address, validate_hash, validate_public_key, validate_quantity, ActionType,
};

/// Maximum string length for general string parameters
const MAX_STRING_PARAM_LENGTH: usize = 10_000;

/// Extract a string parameter
pub fn string_param<'a>(params: &'a Value, index: usize, param_name: &str) -> RpcResult<&'a str> {
    let value = params
        .get(index)
        .and_then(|p| p.as_str())
        .ok_or_else(|| RpcError::invalid_params(format!("Missing {} parameter", param_name)))?;

    if value.len() > MAX_STRING_PARAM_LENGTH {
        return Err(RpcError::invalid_params(format!(
            "{} parameter too long: {} bytes (max: {})",
            param_name,
            value.len(),
            MAX_STRING_PARAM_LENGTH
        )));
    }

    Ok(value)
}

/// Extract a hash parameter (64 hex chars)
pub fn hash_param(params: &Value, index: usize, param_name: &str) -> RpcResult<String> {
    let hash = string_param(params, index, param_name)?;
    validate_hash(hash)?;
    Ok(hash.to_string())
}

/// Extract an address parameter
pub fn address_param(params: &Value, index: usize, param_name: &str) -> RpcResult<String> {
    let address = string_param(params, index, param_name)?;
    validate_address(address)?;
    Ok(address.to_string())
}

/// Extract a compressed public key parameter
pub fn public_key_param(params: &Value, index: usize, param_name: &str) -> RpcResult<String> {
    let key = string_param(params, index, param_name)?;
    validate_public_key(key)?;
    Ok(key.to_string())
}

/// Extract a quantity parameter
pub fn quantity_param(params: &Value, index: usize, param_name: &str) -> RpcResult<i64> {
    let value = params
        .get(index)
        .and_then(|p| p.as_i64())
        .ok_or_else(|| RpcError::invalid_params(format!("Missing {} parameter", param_name)))?;

    validate_quantity(param_name, value)?;
    Ok(value)
}

/// Extract an action type parameter
pub fn action_type_param(params: &Value, index: usize, param_name: &str) -> RpcResult<ActionType> {
    let code = params
        .get(index)
        .and_then(|p| p.as_u64())
        .ok_or_else(|| RpcError::invalid_params(format!("Missing {} parameter", param_name)))?;

    let code = u32::try_from(code)
        .map_err(|e| RpcError::invalid_params(format!("Invalid {}: {} ({})", param_name, code, e)))?;

    Ok(ActionType::try_from(code)?)
}
