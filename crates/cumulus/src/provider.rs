//! Credential resolution seam.

use async_trait::async_trait;
use cumulus_core::Credentials;
use cumulus_error::CumulusResult;

/// Source of media-store credentials, resolved per invocation.
///
/// The host platform owns credential storage; this trait is the narrow
/// seam the client consumes. Any backing (in-memory, vault, database)
/// satisfies the contract. Completeness of the returned fields is checked
/// by the operations themselves, so a provider may return whatever it
/// holds.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Resolve the named credential set.
    ///
    /// # Errors
    ///
    /// Implementations surface their own lookup failures through
    /// `CumulusError`.
    async fn get_credentials(&self, name: &str) -> CumulusResult<Credentials>;
}

/// In-memory provider returning the same credential set for every name.
///
/// # Examples
///
/// ```
/// use cumulus::{Credentials, CredentialProvider, StaticCredentials};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = StaticCredentials::new(Credentials::new("demo", "key", "secret"));
/// let credentials = provider.get_credentials("cloudinaryCredential").await?;
/// assert_eq!(credentials.cloud_name, "demo");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Wrap a fixed credential set.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn get_credentials(&self, _name: &str) -> CumulusResult<Credentials> {
        Ok(self.credentials.clone())
    }
}
