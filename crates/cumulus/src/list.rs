//! Folder listing over the resource-listing endpoint.

use crate::wire::ResourceListing;
use crate::MediaStore;
use cumulus_core::{ListOptions, RemoteResource};
use cumulus_error::{CumulusError, StoreError, StoreErrorKind};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// One listed page of resources plus its length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceList {
    /// The (possibly downsampled) resources, each with its universal id
    pub resources: Vec<RemoteResource>,
    /// Number of resources returned; always `resources.len()`
    pub count: usize,
}

impl MediaStore {
    /// List stored resources matching the folder/type/tag filters.
    ///
    /// Issues a single page request constrained to `type=upload` and
    /// capped at `options.max_results` (clamped to the store's 1..=500
    /// bounds). Each row is mapped to a [`RemoteResource`] with its
    /// universal id attached. With `random_selection` set and more rows
    /// than `max_results`, the page is uniformly downsampled to exactly
    /// `max_results` entries in no particular order; otherwise store order
    /// is preserved exactly.
    ///
    /// Random selection only ever samples within the one returned page —
    /// the remote query is itself capped at `max_results`.
    ///
    /// # Errors
    ///
    /// - `CredentialError` when a credential field is empty; no request is
    ///   sent
    /// - `StoreError` when the request fails, the store answers non-2xx,
    ///   or the body cannot be decoded; the store's message is preserved
    #[instrument(skip(self, options), fields(
        folder = options.folder.as_deref().unwrap_or(""),
        resource_type = %options.resource_type,
        max_results = options.max_results,
    ))]
    pub async fn list(&self, options: &ListOptions) -> Result<ResourceList, CumulusError> {
        self.credentials.validate()?;

        let max_results = options.clamped_max_results();
        let url = format!(
            "{}/{}/resources/{}",
            self.api_base, self.credentials.cloud_name, options.resource_type
        );

        let mut query: Vec<(&str, String)> = vec![
            ("type", "upload".to_string()),
            ("max_results", max_results.to_string()),
        ];
        if let Some(folder) = &options.folder {
            query.push(("prefix", folder.clone()));
        }
        if let Some(tags) = &options.tags {
            query.push(("tags", tags.clone()));
        }

        debug!(url = %url, "Listing store resources");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.credentials.api_key, Some(&self.credentials.api_secret))
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Listing request failed");
                self.list_error(StoreErrorKind::Http(format!("Request failed: {}", e)), options)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            error!(status, message = %message, "Store returned error for listing");
            return Err(self
                .list_error(StoreErrorKind::Api { status, message }, options)
                .into());
        }

        let listing: ResourceListing = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse listing response");
            self.list_error(StoreErrorKind::Parse(e.to_string()), options)
        })?;

        let total_returned = listing.resources.len();
        let mut resources: Vec<RemoteResource> = listing
            .resources
            .into_iter()
            .map(RemoteResource::with_universal_id)
            .collect();

        if options.random_selection && resources.len() > max_results as usize {
            let mut rng = rand::thread_rng();
            resources.shuffle(&mut rng);
            resources.truncate(max_results as usize);
        }

        let count = resources.len();
        info!(count, total_returned, "Listed store resources");

        Ok(ResourceList { resources, count })
    }

    #[track_caller]
    fn list_error(&self, kind: StoreErrorKind, options: &ListOptions) -> StoreError {
        let err = StoreError::new("list", kind);
        match &options.folder {
            Some(folder) => err.with_subject(folder.clone()),
            None => err,
        }
    }
}
