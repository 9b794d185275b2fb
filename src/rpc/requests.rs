//! Request payload validation
//!
//! Payloads accepted by the token service are checked field by field with the
//! validators in [`crate::validation`]. Unlike the field validators, a request
//! check keeps going after the first failure so the caller can report every
//! rejected field at once.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::errors::{RpcError, RpcResult};
use crate::validation::{
    validate_address, validate_description, validate_feed_url, validate_fraction_count,
    validate_hash, validate_metadata_size, validate_price, validate_public_key,
    validate_quantity, validate_tags, validate_title, ValidationError, ValidationResult,
};

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Implemented by every request payload that arrives from a client
pub trait Validate {
    /// Check all fields, returning every failure
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// Collects field results for a payload
#[derive(Debug, Default)]
pub struct FieldChecks {
    errors: Vec<FieldError>,
}

impl FieldChecks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one field check
    pub fn check(mut self, field: &str, result: ValidationResult<()>) -> Self {
        if let Err(err) = result {
            debug!(field, error = %err, "field rejected");
            self.errors.push(FieldError::new(field, err.to_string()));
        }
        self
    }

    /// Record the failures of a nested payload, prefixing their field names
    pub fn nested(mut self, prefix: &str, result: Result<(), Vec<FieldError>>) -> Self {
        if let Err(errors) = result {
            self.errors.extend(
                errors
                    .into_iter()
                    .map(|e| FieldError::new(format!("{}.{}", prefix, e.field), e.message)),
            );
        }
        self
    }

    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Payload for minting a new token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMintPayload {
    pub title: String,
    pub fraction_count: i64,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub feed_url: String,
    #[serde(default)]
    pub owner_address: Option<String>,
}

impl Validate for CreateMintPayload {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let metadata = match &self.metadata {
            Some(value) => validate_metadata_size("metadata", value.to_string().as_bytes()),
            None => Ok(()),
        };

        let owner_address = match self.owner_address.as_deref() {
            Some(address) if !address.is_empty() => validate_address(address),
            _ => Ok(()),
        };

        FieldChecks::new()
            .check("title", validate_title(&self.title))
            .check(
                "fraction_count",
                validate_fraction_count("fraction_count", self.fraction_count),
            )
            .check("description", validate_description(&self.description))
            .check("tags", validate_tags(&self.tags))
            .check("metadata", metadata)
            .check("feed_url", validate_feed_url(&self.feed_url))
            .check("owner_address", owner_address)
            .finish()
    }
}

/// Payload for a buy offer against a mint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBuyOfferPayload {
    pub offerer_address: String,
    #[serde(default)]
    pub seller_address: String,
    pub mint_hash: String,
    pub quantity: i64,
    pub price: i64,
}

impl Validate for CreateBuyOfferPayload {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        FieldChecks::new()
            .check("offerer_address", validate_address(&self.offerer_address))
            .check("seller_address", validate_address(&self.seller_address))
            .check("mint_hash", validate_hash(&self.mint_hash))
            .check("quantity", validate_quantity("quantity", self.quantity))
            .check("price", validate_price("price", self.price))
            .finish()
    }
}

/// Payload for a sell offer against a mint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSellOfferPayload {
    pub offerer_address: String,
    pub mint_hash: String,
    pub quantity: i64,
    pub price: i64,
}

impl Validate for CreateSellOfferPayload {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        FieldChecks::new()
            .check("offerer_address", validate_address(&self.offerer_address))
            .check("mint_hash", validate_hash(&self.mint_hash))
            .check("quantity", validate_quantity("quantity", self.quantity))
            .check("price", validate_price("price", self.price))
            .finish()
    }
}

/// Payload withdrawing a buy or sell offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOfferPayload {
    #[serde(default)]
    pub offer_hash: String,
}

impl Validate for DeleteOfferPayload {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        FieldChecks::new()
            .check("offer_hash", validate_hash(&self.offer_hash))
            .finish()
    }
}

/// Payload for an invoice settling a buy offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInvoicePayload {
    pub payment_address: String,
    pub buy_offer_offerer_address: String,
    pub buy_offer_hash: String,
    pub buy_offer_mint_hash: String,
    pub buy_offer_quantity: i64,
    pub buy_offer_price: i64,
    pub sell_offer_address: String,
}

impl Validate for CreateInvoicePayload {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        FieldChecks::new()
            .check("payment_address", validate_address(&self.payment_address))
            .check(
                "buy_offer_offerer_address",
                validate_address(&self.buy_offer_offerer_address),
            )
            .check("buy_offer_hash", validate_hash(&self.buy_offer_hash))
            .check("buy_offer_mint_hash", validate_hash(&self.buy_offer_mint_hash))
            .check(
                "buy_offer_quantity",
                validate_quantity("buy_offer_quantity", self.buy_offer_quantity),
            )
            .check(
                "buy_offer_price",
                validate_price("buy_offer_price", self.buy_offer_price),
            )
            .check("sell_offer_address", validate_address(&self.sell_offer_address))
            .finish()
    }
}

/// A payload signed by the holder of `public_key`
///
/// Only the shape of the key and the presence of a signature are checked
/// here; signature verification happens upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedRequest<P> {
    pub public_key: String,
    pub signature: String,
    pub payload: P,
}

impl<P: Validate> Validate for SignedRequest<P> {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let signature = if self.signature.is_empty() {
            Err(ValidationError::Required("signature"))
        } else {
            Ok(())
        };

        FieldChecks::new()
            .check("public_key", validate_public_key(&self.public_key))
            .check("signature", signature)
            .nested("payload", self.payload.validate())
            .finish()
    }
}

/// Deserialize a JSON request body and validate it
pub fn parse_request<T>(body: &[u8]) -> RpcResult<T>
where
    T: DeserializeOwned + Validate,
{
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "request body rejected");
        RpcError::parse_error(format!("Invalid JSON: {}", e))
    })?;

    if !value.is_object() {
        debug!("request body is not a JSON object");
        return Err(RpcError::invalid_request("request body must be a JSON object"));
    }

    let request: T = serde_json::from_value(value).map_err(|e| {
        debug!(error = %e, "request body rejected");
        RpcError::parse_error(format!("Invalid request body: {}", e))
    })?;

    request.validate().map_err(|errors| {
        debug!(count = errors.len(), "request failed validation");
        RpcError::invalid_fields(&errors)
    })?;

    Ok(request)
}
