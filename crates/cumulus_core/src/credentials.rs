//! Credential material for the remote media store.

use cumulus_error::{CredentialError, CredentialErrorKind};
use serde::Deserialize;

/// API credentials for one media-store account.
///
/// Deserialization accepts both the snake_case and the camelCase field
/// names, matching the two casings credential providers emit
/// (`cloud_name`/`cloudName`, `api_key`/`apiKey`, `api_secret`/`apiSecret`).
///
/// Credentials are supplied per invocation and never persisted by this
/// workspace.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Credentials {
    /// Account (cloud) name identifying the tenant
    #[serde(alias = "cloudName")]
    pub cloud_name: String,
    /// API key
    #[serde(alias = "apiKey")]
    pub api_key: String,
    /// API secret
    #[serde(alias = "apiSecret")]
    pub api_secret: String,
}

impl Credentials {
    /// Create a credential set from its three fields.
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Check that every field is present and non-empty.
    ///
    /// Operations call this before touching the network; the first missing
    /// field is reported.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialError`] naming the missing field.
    pub fn validate(&self) -> Result<(), CredentialError> {
        if self.cloud_name.trim().is_empty() {
            return Err(CredentialError::new(CredentialErrorKind::MissingCloudName));
        }
        if self.api_key.trim().is_empty() {
            return Err(CredentialError::new(CredentialErrorKind::MissingApiKey));
        }
        if self.api_secret.trim().is_empty() {
            return Err(CredentialError::new(CredentialErrorKind::MissingApiSecret));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_complete_credentials() {
        let credentials = Credentials::new("demo", "key", "secret");
        assert!(credentials.validate().is_ok());
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let credentials = Credentials::new("", "key", "secret");
        let err = credentials.validate().unwrap_err();
        assert_eq!(err.kind, CredentialErrorKind::MissingCloudName);

        let credentials = Credentials::new("demo", "  ", "secret");
        let err = credentials.validate().unwrap_err();
        assert_eq!(err.kind, CredentialErrorKind::MissingApiKey);

        let credentials = Credentials::new("demo", "key", "");
        let err = credentials.validate().unwrap_err();
        assert_eq!(err.kind, CredentialErrorKind::MissingApiSecret);
    }

    #[test]
    fn deserializes_both_field_casings() {
        let snake: Credentials = serde_json::from_str(
            r#"{"cloud_name": "demo", "api_key": "key", "api_secret": "secret"}"#,
        )
        .unwrap();
        let camel: Credentials = serde_json::from_str(
            r#"{"cloudName": "demo", "apiKey": "key", "apiSecret": "secret"}"#,
        )
        .unwrap();
        assert_eq!(snake, camel);
    }
}
