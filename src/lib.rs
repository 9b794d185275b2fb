//! Fractal Validation - input checks for the Fractal Engine token service
//!
//! This crate validates and sanitizes user-supplied fields before the token
//! service accepts them: Dogecoin addresses, SHA256 hashes, compressed public
//! keys, titles, descriptions, feed URLs, tags, metadata, amounts, query
//! parameters and values decoded from on-chain protobuf messages.
//!
//! ## Layers
//!
//! 1. `validation`: pure field checks, each returning `Ok(())` or a
//!    [`ValidationError`] with a message fit for display
//! 2. `rpc`: request payloads, pagination and JSON-RPC parameters built on
//!    the field checks
//! 3. `config` / `utils`: logging setup for the CLI and services embedding
//!    the request layer
//!
//! ## Design Principles
//!
//! 1. **Format only**: no checksum, signature or curve verification
//! 2. **Stateless**: every check is pure and safe to call from any thread
//! 3. **Fixed limits**: field limits are constants, not configuration
//!
//! ## Example
//!
//! ```rust
//! use fractal_validation::{validate_address, validate_quantity, sanitize_query_param};
//!
//! assert!(validate_address("D7P2jVEK6JGiGepUGTAHqELKK8QJ8GCahZ").is_ok());
//! assert!(validate_quantity("amount", 0).is_err());
//! assert_eq!(sanitize_query_param("  page\n2  "), "page2");
//! ```

pub mod config;
pub mod rpc;
pub mod utils;
pub mod validation;

pub use config::{LoggingConfig, ValidatorConfig};
pub use validation::*;
