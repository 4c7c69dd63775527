//! Remote resource model.

use crate::universal_id;
use serde::{Deserialize, Serialize};

/// The media category governing how the store processes and serves an
/// asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Image content (PNG, JPEG, WebP, etc.)
    #[default]
    Image,
    /// Video content
    Video,
    /// Raw (opaque) files
    Raw,
    /// Let the store detect the type
    Auto,
}

impl ResourceType {
    /// Convert to the string the store's URLs and endpoints use.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Raw => "raw",
            ResourceType::Auto => "auto",
        }
    }
}

impl std::str::FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(ResourceType::Image),
            "video" => Ok(ResourceType::Video),
            "raw" => Ok(ResourceType::Raw),
            "auto" => Ok(ResourceType::Auto),
            _ => Err(format!("Unknown resource type: {}", s)),
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One stored media asset as known to the remote store.
///
/// Created by a successful upload; read by listing and content retrieval;
/// never mutated locally. `url`/`secure_url` are derived serving locations,
/// not canonical identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteResource {
    /// Store-assigned primary key within a folder namespace
    pub public_id: String,
    /// Increases each time content at the same public id is replaced
    pub version: u64,
    /// Store-issued integrity token (opaque; can rotate without a new version)
    #[serde(default)]
    pub signature: String,
    /// Width in pixels, when the store knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels, when the store knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// File format (e.g. "jpg")
    #[serde(default)]
    pub format: String,
    /// Media category of the asset
    #[serde(default)]
    pub resource_type: ResourceType,
    /// Creation timestamp as reported by the store
    pub created_at: String,
    /// Tags attached to the asset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Content size in bytes
    #[serde(default)]
    pub bytes: u64,
    /// Access type within the store, normally "upload"
    #[serde(rename = "type", default)]
    pub access_type: String,
    /// Store-side cache validator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// HTTP serving URL
    #[serde(default)]
    pub url: String,
    /// HTTPS serving URL
    #[serde(default)]
    pub secure_url: String,
    /// Store-internal asset id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    /// Folder path the asset lives under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Deterministic cross-system identifier; computed locally, never
    /// present on the wire
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub universal_id: Option<String>,
}

impl RemoteResource {
    /// Compute and attach the universal id from this resource's identity
    /// triple (`public_id`, `version`, `created_at`).
    pub fn with_universal_id(mut self) -> Self {
        self.universal_id = Some(universal_id(
            &self.public_id,
            self.version,
            &self.created_at,
        ));
        self
    }
}
