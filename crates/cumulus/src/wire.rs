//! Wire models for store API responses.

use cumulus_core::RemoteResource;
use serde::Deserialize;

/// Response envelope for the resource-listing endpoint.
///
/// Pagination cursors are ignored; listing is a single-page operation by
/// contract.
#[derive(Debug, Deserialize)]
pub(crate) struct ResourceListing {
    pub resources: Vec<RemoteResource>,
}
