//! Single-resource metadata retrieval with transformed URL derivation.

use crate::MediaStore;
use cumulus_core::{build_transformation, universal_id, ContentOptions, FileRef, RemoteResource, ResourceType};
use cumulus_error::{CumulusError, StoreError, StoreErrorKind, ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// One resource's metadata plus its serving URLs.
///
/// When a transformation was requested, `url` and `secure_url` are derived
/// locally by delivery-URL templating; `download_url` always equals the
/// final `secure_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceContent {
    /// The asset's public id
    pub public_id: String,
    /// HTTP serving URL, transformed when a transformation was requested
    pub url: String,
    /// HTTPS serving URL, transformed when a transformation was requested
    pub secure_url: String,
    /// Always the final `secure_url`
    pub download_url: String,
    /// Requested output format if given, else the stored format
    pub format: String,
    /// Width in pixels, when the store knows it
    pub width: Option<u32>,
    /// Height in pixels, when the store knows it
    pub height: Option<u32>,
    /// Content size in bytes
    pub bytes: u64,
    /// Media category of the asset
    pub resource_type: ResourceType,
    /// Creation timestamp as reported by the store
    pub created_at: String,
    /// Deterministic cross-system identifier for the fetched metadata
    pub universal_id: String,
    /// The transformation string applied to the URLs, when any
    pub transformation: Option<String>,
}

impl MediaStore {
    /// Fetch one resource's current metadata and derive its serving URLs.
    ///
    /// The resource type defaults to image. A transformation string is
    /// assembled from `options` (directives first, `f_<format>` last); when
    /// non-empty, the returned `url`/`secure_url` are templated locally with
    /// it rather than fetched — URL construction is deterministic and needs
    /// no extra round trip.
    ///
    /// # Errors
    ///
    /// - `CredentialError` when a credential field is empty; no request is
    ///   sent
    /// - `ValidationError` when `file.public_id` is empty; no request is
    ///   sent
    /// - `StoreError` when the fetch fails; the store's message is
    ///   preserved
    #[instrument(skip(self, file, options), fields(public_id = %file.public_id))]
    pub async fn get_content(
        &self,
        file: &FileRef,
        options: &ContentOptions,
    ) -> Result<ResourceContent, CumulusError> {
        self.credentials.validate()?;

        if file.public_id.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingPublicId).into());
        }

        let resource_type = file.resource_type.unwrap_or_default();
        let url = format!(
            "{}/{}/resources/{}/upload/{}",
            self.api_base, self.credentials.cloud_name, resource_type, file.public_id
        );

        debug!(url = %url, "Fetching resource metadata");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.credentials.api_key, Some(&self.credentials.api_secret))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Metadata request failed");
                StoreError::new("get_content", StoreErrorKind::Http(format!("Request failed: {}", e)))
                    .with_subject(file.public_id.clone())
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            error!(status, message = %message, "Store returned error for metadata fetch");
            return Err(StoreError::new("get_content", StoreErrorKind::Api { status, message })
                .with_subject(file.public_id.clone())
                .into());
        }

        let resource: RemoteResource = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse resource metadata");
            StoreError::new("get_content", StoreErrorKind::Parse(e.to_string()))
                .with_subject(file.public_id.clone())
        })?;

        let transformation =
            build_transformation(options.transformation.as_deref(), options.format.as_deref());

        let (url, secure_url) = match transformation.as_deref() {
            Some(t) => (
                self.delivery_url(&resource.public_id, resource_type, Some(t), resource.version, false),
                self.delivery_url(&resource.public_id, resource_type, Some(t), resource.version, true),
            ),
            None => (resource.url.clone(), resource.secure_url.clone()),
        };
        let download_url = secure_url.clone();

        info!(
            format = %options.format.as_deref().unwrap_or(&resource.format),
            transformed = transformation.is_some(),
            "Retrieved resource content"
        );

        Ok(ResourceContent {
            universal_id: universal_id(&resource.public_id, resource.version, &resource.created_at),
            public_id: resource.public_id,
            url,
            secure_url,
            download_url,
            format: options.format.clone().unwrap_or(resource.format),
            width: resource.width,
            height: resource.height,
            bytes: resource.bytes,
            resource_type: resource.resource_type,
            created_at: resource.created_at,
            transformation,
        })
    }
}
