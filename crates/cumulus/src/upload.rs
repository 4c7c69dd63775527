//! Image upload with signed form submission.

use crate::MediaStore;
use cumulus_core::{sanitize_public_id, RemoteResource, UploadOptions};
use cumulus_error::{
    CumulusError, StoreErrorKind, UploadError, ValidationError, ValidationErrorKind,
};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, error, info, instrument};

/// Prefix applied to un-prefixed payloads.
const DEFAULT_DATA_PREFIX: &str = "data:image/png;base64,";

impl MediaStore {
    /// Upload base64 or remote-URL content to the store.
    ///
    /// A payload that starts with neither `data:` nor `http` is treated as
    /// raw base64 image bytes and wrapped as `data:image/png;base64,…`;
    /// the store sniffs the real format from the decoded bytes. A supplied
    /// public id is sanitized first, and a sanitized-to-empty id is
    /// omitted so the store auto-assigns one. Tags are split on commas and
    /// trimmed.
    ///
    /// The request is signed: the signable form fields are sorted by key,
    /// joined as `k=v&…`, the API secret appended, and the SHA-256 hex
    /// digest sent alongside `signature_algorithm=sha256`.
    ///
    /// Upload is atomic from the caller's perspective: on success the
    /// created resource is returned, on failure nothing was stored.
    ///
    /// # Errors
    ///
    /// - `CredentialError` when a credential field is empty; no request is
    ///   sent
    /// - `ValidationError` when `data` is empty; no request is sent
    /// - `UploadError` when the store rejects or fails the request, with
    ///   the attempted public id and folder attached
    #[instrument(skip(self, data, options), fields(
        folder = options.folder.as_deref().unwrap_or(""),
        resource_type = %options.resource_type,
        payload_len = data.len(),
    ))]
    pub async fn upload(
        &self,
        data: &str,
        options: &UploadOptions,
    ) -> Result<RemoteResource, CumulusError> {
        self.credentials.validate()?;

        if data.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyPayload).into());
        }

        let file = prepare_payload(data);
        let public_id = options
            .public_id
            .as_deref()
            .map(sanitize_public_id)
            .filter(|id| !id.is_empty());
        let tags = options
            .tags
            .as_deref()
            .map(split_tags)
            .filter(|tags| !tags.is_empty());

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        // Signable fields, sorted by key before signing.
        let mut signed: Vec<(&str, String)> = Vec::new();
        if let Some(folder) = &options.folder {
            signed.push(("folder", folder.clone()));
        }
        signed.push(("overwrite", options.overwrite.to_string()));
        if let Some(public_id) = &public_id {
            signed.push(("public_id", public_id.clone()));
        }
        if let Some(tags) = &tags {
            signed.push(("tags", tags.join(",")));
        }
        signed.push(("timestamp", timestamp.to_string()));
        signed.sort_by(|a, b| a.0.cmp(b.0));

        let signature = sign_request(&signed, &self.credentials.api_secret);

        let mut form = signed;
        form.push(("api_key", self.credentials.api_key.clone()));
        form.push(("signature", signature));
        form.push(("signature_algorithm", "sha256".to_string()));
        form.push(("file", file));

        let url = format!(
            "{}/{}/{}/upload",
            self.api_base, self.credentials.cloud_name, options.resource_type
        );

        debug!(url = %url, public_id = public_id.as_deref().unwrap_or(""), "Uploading to store");

        let upload_err = |kind: StoreErrorKind| {
            let err = UploadError::new(kind);
            let err = match &public_id {
                Some(id) => err.with_public_id(id.clone()),
                None => err,
            };
            match &options.folder {
                Some(folder) => err.with_folder(folder.clone()),
                None => err,
            }
        };

        let response = self.http.post(&url).form(&form).send().await.map_err(|e| {
            error!(error = ?e, "Upload request failed");
            upload_err(StoreErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            error!(status, message = %message, "Store rejected upload");
            return Err(upload_err(StoreErrorKind::Api { status, message }).into());
        }

        let resource: RemoteResource = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse upload response");
            upload_err(StoreErrorKind::Parse(e.to_string()))
        })?;
        let resource = resource.with_universal_id();

        info!(
            public_id = %resource.public_id,
            format = %resource.format,
            bytes = resource.bytes,
            "Uploaded resource"
        );

        Ok(resource)
    }
}

/// Wrap un-prefixed payloads as base64 PNG data URIs.
///
/// Heuristic, not a format sniff: a base64 JPEG without its own prefix is
/// still labeled PNG here and left to the store's magic-byte detection.
fn prepare_payload(data: &str) -> String {
    if data.starts_with("data:") || data.starts_with("http") {
        data.to_string()
    } else {
        format!("{}{}", DEFAULT_DATA_PREFIX, data)
    }
}

/// Split comma-separated tags, trimming whitespace and dropping empties.
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// SHA-256 signature over the sorted signable fields plus the secret.
fn sign_request(params: &[(&str, String)], secret: &str) -> String {
    let joined = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}
