//! Error types for the Cumulus media-store client.
//!
//! This crate provides the foundation error types used throughout the
//! Cumulus workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Four error families exist, one per failure class:
//! - [`CredentialError`]: a credential field is missing or empty; raised
//!   before any network activity
//! - [`ValidationError`]: malformed operation input, detected before any
//!   network call
//! - [`StoreError`]: the remote store rejected or failed a well-formed
//!   request; carries the operation name and the resource involved
//! - [`UploadError`]: upload-specific wrapper adding the attempted public
//!   id and folder to a store failure
//!
//! # Examples
//!
//! ```
//! use cumulus_error::{CumulusResult, StoreError, StoreErrorKind};
//!
//! fn fetch_data() -> CumulusResult<String> {
//!     Err(StoreError::new(
//!         "list",
//!         StoreErrorKind::Http("Connection refused".to_string()),
//!     ))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credential;
mod error;
mod store;
mod upload;
mod validation;

pub use credential::{CredentialError, CredentialErrorKind};
pub use error::{CumulusError, CumulusErrorKind, CumulusResult};
pub use store::{StoreError, StoreErrorKind};
pub use upload::{UploadError, UploadErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
