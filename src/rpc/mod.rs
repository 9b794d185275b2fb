//! Request-level validation for the token service RPC surface
//!
//! Wires the field validators into what an RPC or REST handler needs:
//! - `requests`: JSON request payloads and the [`Validate`] trait
//! - `pagination`: `limit`/`page` query handling
//! - `query`: path and query-string filters for listing endpoints
//! - `validation`: positional JSON-RPC parameter extraction
//! - `errors`: JSON-RPC error codes and rendering

pub mod errors;
pub mod pagination;
pub mod query;
pub mod requests;
pub mod validation;

pub use errors::{RpcError, RpcErrorCode, RpcResult};
pub use pagination::{Pagination, DEFAULT_PAGE_LIMIT, MAX_PAGE};
pub use query::{flag_param, hash_path_param, optional_filter, InvoiceQuery, MintQuery};
pub use requests::{
    parse_request, CreateBuyOfferPayload, CreateInvoicePayload, CreateMintPayload,
    CreateSellOfferPayload, DeleteOfferPayload, FieldChecks, FieldError, SignedRequest, Validate,
};
