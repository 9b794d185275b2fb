//! Path and query-string filters for listing endpoints
//!
//! Every raw value goes through [`sanitize_query_param`] first. A `hash` path
//! segment must then validate. Optional filters are validated only when
//! something is left after sanitizing; an empty filter means "no filter".

use std::collections::HashMap;

use tracing::debug;

use super::errors::{RpcError, RpcResult};
use super::pagination::Pagination;
use super::requests::FieldError;
use crate::validation::{
    sanitize_query_param, validate_address, validate_hash, validate_public_key, ValidationError,
    ValidationResult,
};

fn rejected(field: &str, err: ValidationError) -> RpcError {
    debug!(field, error = %err, "query parameter rejected");
    RpcError::invalid_fields(&[FieldError::new(field, err.to_string())])
}

/// Sanitize and validate a `hash` path segment
pub fn hash_path_param(raw: &str) -> RpcResult<String> {
    let hash = sanitize_query_param(raw);
    validate_hash(&hash).map_err(|e| rejected("hash", e))?;
    Ok(hash)
}

/// Sanitize an optional filter and validate it when non-empty
pub fn optional_filter<F>(field: &str, raw: Option<&str>, check: F) -> RpcResult<Option<String>>
where
    F: FnOnce(&str) -> ValidationResult<()>,
{
    let value = match raw.map(sanitize_query_param) {
        Some(value) if !value.is_empty() => value,
        _ => return Ok(None),
    };

    check(&value).map_err(|e| rejected(field, e))?;
    Ok(Some(value))
}

/// A sanitized flag is set only when it reads exactly `true`
pub fn flag_param(raw: Option<&str>) -> bool {
    raw.map(sanitize_query_param).as_deref() == Some("true")
}

fn get<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str)
}

fn pagination(params: &HashMap<String, String>) -> Pagination {
    Pagination::from_query(get(params, "limit"), get(params, "page"))
}

/// Filters accepted when listing mints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MintQuery {
    pub pagination: Pagination,
    pub public_key: Option<String>,
    pub address: Option<String>,
    pub include_unconfirmed: bool,
}

impl MintQuery {
    pub fn from_params(params: &HashMap<String, String>) -> RpcResult<Self> {
        Ok(Self {
            pagination: pagination(params),
            public_key: optional_filter(
                "public_key",
                get(params, "public_key"),
                validate_public_key,
            )?,
            address: optional_filter("address", get(params, "address"), validate_address)?,
            include_unconfirmed: flag_param(get(params, "include_unconfirmed")),
        })
    }
}

/// Filters accepted when listing invoices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceQuery {
    pub pagination: Pagination,
    pub mint_hash: Option<String>,
    pub offerer_address: Option<String>,
}

impl InvoiceQuery {
    pub fn from_params(params: &HashMap<String, String>) -> RpcResult<Self> {
        Ok(Self {
            pagination: pagination(params),
            mint_hash: optional_filter("mint_hash", get(params, "mint_hash"), validate_hash)?,
            offerer_address: optional_filter(
                "offerer_address",
                get(params, "offerer_address"),
                validate_address,
            )?,
        })
    }
}
