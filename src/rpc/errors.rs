//! RPC Error Types
//!
//! JSON-RPC error codes and the mapping from field validation failures.

use serde_json::{json, Value};
use std::fmt;

use super::requests::FieldError;
use crate::validation::ValidationError;

/// JSON-RPC error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcErrorCode {
    /// Parse error (-32700)
    ParseError,
    /// Invalid request (-32600)
    InvalidRequest,
    /// Invalid params (-32602)
    InvalidParams,
}

impl RpcErrorCode {
    /// Get numeric error code
    pub fn code(&self) -> i32 {
        match self {
            RpcErrorCode::ParseError => -32700,
            RpcErrorCode::InvalidRequest => -32600,
            RpcErrorCode::InvalidParams => -32602,
        }
    }

    /// HTTP status a REST front end should answer with
    ///
    /// Every code here blames the client.
    pub fn http_status(&self) -> u16 {
        match self {
            RpcErrorCode::ParseError
            | RpcErrorCode::InvalidRequest
            | RpcErrorCode::InvalidParams => 400,
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            RpcErrorCode::ParseError => "Parse error",
            RpcErrorCode::InvalidRequest => "Invalid Request",
            RpcErrorCode::InvalidParams => "Invalid params",
        }
    }
}

/// RPC Error structure
#[derive(Debug, Clone)]
pub struct RpcError {
    pub code: RpcErrorCode,
    pub message: String,
    pub data: Option<Value>,
}

impl RpcError {
    /// Create a new RPC error
    pub fn new(code: RpcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create an error with additional data
    pub fn with_data(code: RpcErrorCode, message: impl Into<String>, data: Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::ParseError, message)
    }

    /// Invalid params
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::InvalidParams, message)
    }

    /// Invalid request (body is JSON but not a request object)
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::InvalidRequest, message)
    }

    /// Invalid params carrying every rejected field
    pub fn invalid_fields(errors: &[FieldError]) -> Self {
        let message = match errors {
            [single] => format!("{}: {}", single.field, single.message),
            _ => format!("Validation failed for {} fields", errors.len()),
        };
        Self::with_data(RpcErrorCode::InvalidParams, message, json!(errors))
    }

    /// Convert to JSON-RPC error response
    pub fn to_json(&self, id: Option<Value>) -> Value {
        let mut error = json!({
            "code": self.code.code(),
            "message": self.message,
        });

        if let Some(data) = &self.data {
            error["data"] = data.clone();
        }

        json!({
            "jsonrpc": "2.0",
            "error": error,
            "id": id
        })
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RPC Error {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for RpcError {}

/// Result type for RPC operations
pub type RpcResult<T> = Result<T, RpcError>;

/// A rejected field is always the caller's fault
impl From<ValidationError> for RpcError {
    fn from(err: ValidationError) -> Self {
        RpcError::invalid_params(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RpcErrorCode::ParseError.code(), -32700);
        assert_eq!(RpcErrorCode::InvalidParams.code(), -32602);
        assert_eq!(RpcErrorCode::InvalidRequest.code(), -32600);
        assert_eq!(RpcErrorCode::InvalidParams.http_status(), 400);
        assert_eq!(RpcErrorCode::InvalidRequest.message(), "Invalid Request");
    }

    #[test]
    fn test_from_validation_error() {
        let err: RpcError = ValidationError::Required("address").into();
        assert_eq!(err.code, RpcErrorCode::InvalidParams);
        assert_eq!(err.message, "address is required");
    }

    #[test]
    fn test_invalid_fields() {
        let errors = vec![
            FieldError::new("title", "title is required"),
            FieldError::new("tags", "tag 1 is empty"),
        ];
        let err = RpcError::invalid_fields(&errors);
        assert_eq!(err.message, "Validation failed for 2 fields");

        let json = err.to_json(Some(json!(7)));
        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["error"]["code"], -32602);
        assert_eq!(json["error"]["data"][1]["field"], "tags");
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn test_single_field_message() {
        let err = RpcError::invalid_fields(&[FieldError::new("hash", "hash is required")]);
        assert_eq!(err.message, "hash: hash is required");
    }
}
