//! Field validation
//!
//! Stateless checks for user-supplied fields: addresses, hashes, public keys,
//! free text, numeric amounts, tag lists, metadata size, query parameters and
//! values decoded from protobuf messages.
//!
//! Every check is pure and returns `Ok(())` or a [`ValidationError`] carrying
//! a message that can be shown to the caller as-is. Nothing here logs; the
//! caller decides what a rejection means (usually an HTTP 400).
//!
//! Only surface format is checked. Address checksums and curve membership of
//! public keys are never verified.

pub mod address;
pub mod digest;
pub mod error;
pub mod numeric;
pub mod protobuf;
pub mod pubkey;
pub mod sanitize;
pub mod text;

pub use address::{address_network, validate_address, Network};
pub use digest::{decode_hash, validate_hash};
pub use error::{ValidationError, ValidationResult};
pub use numeric::{validate_fraction_count, validate_price, validate_quantity};
pub use protobuf::{
    validate_protobuf_action_type, validate_protobuf_address, validate_protobuf_hash,
    validate_protobuf_quantity, ActionType,
};
pub use pubkey::{decode_public_key, validate_public_key};
pub use sanitize::sanitize_query_param;
pub use text::{
    validate_description, validate_feed_url, validate_metadata_size, validate_string_length,
    validate_tags, validate_title,
};

/// Maximum title length in Unicode code points
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum description length in Unicode code points
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Maximum feed URL length in Unicode code points
pub const MAX_FEED_URL_LENGTH: usize = 500;

/// Maximum length of a single tag in Unicode code points
pub const MAX_TAG_LENGTH: usize = 50;

/// Maximum number of tags
pub const MAX_TAG_COUNT: usize = 20;

/// Maximum metadata size in bytes (serialized JSON)
pub const MAX_METADATA_SIZE: usize = 10_000;

/// Maximum quantity (1 billion)
pub const MAX_QUANTITY: i64 = 1_000_000_000;

/// Maximum price in the smallest unit (1 billion)
pub const MAX_PRICE: i64 = 1_000_000_000;

/// Maximum fraction count of a mint (1 billion)
pub const MAX_FRACTION_COUNT: i64 = 1_000_000_000;

/// SHA256 hex length
pub const HASH_LENGTH: usize = 64;

/// Compressed public key hex length (33 bytes)
pub const PUBLIC_KEY_LENGTH: usize = 66;

/// Minimum address length
pub const MIN_ADDRESS_LENGTH: usize = 26;

/// Maximum address length
pub const MAX_ADDRESS_LENGTH: usize = 62;

/// Byte cap applied by [`sanitize_query_param`]
pub const MAX_QUERY_PARAM_LENGTH: usize = 100;
