//! Async client for a Cloudinary-style remote media store.
//!
//! Three operations, each a single stateless request/response round trip:
//! list the resources in a folder, fetch one resource's metadata with
//! optional transformation URLs, and upload new content (base64 or remote
//! URL). Credentials are validated before any network access, and every
//! listed or fetched resource carries a deterministic 12-hex universal id
//! for cross-system joins.
//!
//! # Example
//!
//! ```no_run
//! use cumulus::{Credentials, ListOptions, MediaStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new("demo", "key", "secret");
//!     let store = MediaStore::new(credentials);
//!
//!     let listing = store
//!         .list(&ListOptions {
//!             folder: Some("gallery".to_string()),
//!             max_results: 25,
//!             ..ListOptions::default()
//!         })
//!         .await?;
//!
//!     for resource in &listing.resources {
//!         println!("{} -> {:?}", resource.public_id, resource.universal_id);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod content;
mod list;
mod provider;
mod upload;
mod urls;
mod wire;

pub use client::MediaStore;
pub use content::ResourceContent;
pub use list::ResourceList;
pub use provider::{CredentialProvider, StaticCredentials};

pub use cumulus_core::{
    build_transformation, sanitize_public_id, universal_id, ContentOptions, Credentials, FileRef,
    ListOptions, RemoteResource, ResourceType, UploadOptions, DEFAULT_MAX_RESULTS,
    MAX_RESULTS_LIMIT,
};
pub use cumulus_error::{
    CredentialError, CredentialErrorKind, CumulusError, CumulusErrorKind, CumulusResult,
    StoreError, StoreErrorKind, UploadError, UploadErrorKind, ValidationError, ValidationErrorKind,
};
