//! Data model and pure helpers for the Cumulus media-store client.
//!
//! This crate holds everything that needs no network access: credential
//! material, the wire-level resource model, the deterministic universal
//! identifier, public-id sanitization, transformation string assembly,
//! and the per-operation option types with their defaults.
//!
//! # Example
//!
//! ```
//! use cumulus_core::{sanitize_public_id, universal_id, ListOptions};
//!
//! let id = universal_id("gallery/sunset", 1700000001, "2024-01-15T10:00:00Z");
//! assert_eq!(id.len(), 12);
//!
//! assert_eq!(sanitize_public_id("my photo.png"), "my_photo");
//!
//! let options = ListOptions::default();
//! assert_eq!(options.max_results, 100);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod identifier;
mod options;
mod resource;
mod sanitize;
mod transformation;

pub use credentials::Credentials;
pub use identifier::universal_id;
pub use options::{
    ContentOptions, FileRef, ListOptions, UploadOptions, DEFAULT_MAX_RESULTS, MAX_RESULTS_LIMIT,
};
pub use resource::{RemoteResource, ResourceType};
pub use sanitize::sanitize_public_id;
pub use transformation::build_transformation;
