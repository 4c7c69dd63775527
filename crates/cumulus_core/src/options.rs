//! Per-operation configuration types.
//!
//! Every option is enumerated explicitly with its default; there are no
//! implicit pass-through fields.

use crate::ResourceType;
use serde::{Deserialize, Serialize};

/// Default page size for listing.
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// Largest page the store will return in one call.
pub const MAX_RESULTS_LIMIT: u32 = 500;

/// Filters for the listing operation.
///
/// # Examples
///
/// ```
/// use cumulus_core::{ListOptions, ResourceType};
///
/// let options = ListOptions {
///     folder: Some("gallery".to_string()),
///     max_results: 25,
///     ..ListOptions::default()
/// };
/// assert_eq!(options.resource_type, ResourceType::Image);
/// assert!(!options.random_selection);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Folder prefix to restrict the listing to
    pub folder: Option<String>,
    /// Media category to list
    pub resource_type: ResourceType,
    /// Tag filter passed through to the store
    pub tags: Option<String>,
    /// Page size requested from the store, clamped to 1..=500
    pub max_results: u32,
    /// Uniformly downsample the returned page to `max_results` entries
    pub random_selection: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            folder: None,
            resource_type: ResourceType::default(),
            tags: None,
            max_results: DEFAULT_MAX_RESULTS,
            random_selection: false,
        }
    }
}

impl ListOptions {
    /// The page size actually sent to the store.
    pub fn clamped_max_results(&self) -> u32 {
        self.max_results.clamp(1, MAX_RESULTS_LIMIT)
    }
}

/// Handle identifying one stored asset for content retrieval.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileRef {
    /// The asset's public id
    pub public_id: String,
    /// Media category; the store defaults to image when absent
    pub resource_type: Option<ResourceType>,
}

impl FileRef {
    /// Reference an asset by public id, with the default resource type.
    pub fn new(public_id: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            resource_type: None,
        }
    }
}

/// Options for content retrieval.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentOptions {
    /// Transform directives (crop/resize), e.g. `"w_300,h_300,c_fill"`
    pub transformation: Option<String>,
    /// Output-format override, appended as `f_<format>`
    pub format: Option<String>,
}

/// Options for the upload operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadOptions {
    /// Folder to upload into
    pub folder: Option<String>,
    /// Requested public id; sanitized before submission, and omitted when
    /// sanitization leaves nothing so the store auto-assigns
    pub public_id: Option<String>,
    /// Comma-separated tags; split and trimmed before submission
    pub tags: Option<String>,
    /// Overwrite an existing asset with the same public id
    pub overwrite: bool,
    /// Media category of the uploaded content
    pub resource_type: ResourceType,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            folder: None,
            public_id: None,
            tags: None,
            overwrite: false,
            resource_type: ResourceType::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_defaults_match_the_contract() {
        let options = ListOptions::default();
        assert_eq!(options.max_results, 100);
        assert_eq!(options.resource_type, ResourceType::Image);
        assert!(!options.random_selection);
        assert!(options.folder.is_none());
        assert!(options.tags.is_none());
    }

    #[test]
    fn max_results_is_clamped_to_store_bounds() {
        let low = ListOptions {
            max_results: 0,
            ..Default::default()
        };
        assert_eq!(low.clamped_max_results(), 1);

        let high = ListOptions {
            max_results: 9000,
            ..Default::default()
        };
        assert_eq!(high.clamped_max_results(), 500);

        let in_range = ListOptions {
            max_results: 42,
            ..Default::default()
        };
        assert_eq!(in_range.clamped_max_results(), 42);
    }
}
