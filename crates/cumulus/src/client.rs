//! Media store client setup.

use crate::CredentialProvider;
use cumulus_core::Credentials;
use cumulus_error::CumulusResult;
use reqwest::Client;
use tracing::debug;

pub(crate) const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";
pub(crate) const DEFAULT_DELIVERY_BASE: &str = "res.cloudinary.com";

/// Async client for the remote media store.
///
/// Holds one `reqwest::Client` plus the credential set for a single
/// account. Cloning is cheap (the HTTP client is reference-counted) and
/// clones may be used concurrently: operations share no mutable state,
/// perform no caching, and each issues exactly one request.
///
/// Each operation validates credentials before touching the network and
/// fails with a `CredentialError` when a field is missing, without
/// sending anything.
#[derive(Debug, Clone)]
pub struct MediaStore {
    pub(crate) http: Client,
    pub(crate) credentials: Credentials,
    pub(crate) api_base: String,
    pub(crate) delivery_base: String,
}

impl MediaStore {
    /// Create a client against the public store endpoints.
    pub fn new(credentials: Credentials) -> Self {
        debug!(cloud_name = %credentials.cloud_name, "Creating media store client");
        Self {
            http: Client::new(),
            credentials,
            api_base: DEFAULT_API_BASE.to_string(),
            delivery_base: DEFAULT_DELIVERY_BASE.to_string(),
        }
    }

    /// Create a client against custom hosts.
    ///
    /// `api_base` is the full origin (plus any path prefix) for API
    /// requests; `delivery_base` is the host used when templating delivery
    /// URLs. Used for tests and self-hosted mirrors.
    pub fn with_base_urls(
        credentials: Credentials,
        api_base: impl Into<String>,
        delivery_base: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            credentials,
            api_base: api_base.into(),
            delivery_base: delivery_base.into(),
        }
    }

    /// Resolve the named credential set through a provider, then build a
    /// client from it.
    ///
    /// # Errors
    ///
    /// Propagates the provider's failure to resolve the credential set.
    pub async fn for_provider(
        provider: &dyn CredentialProvider,
        name: &str,
    ) -> CumulusResult<Self> {
        let credentials = provider.get_credentials(name).await?;
        Ok(Self::new(credentials))
    }

    /// The credential set this client was built with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}
