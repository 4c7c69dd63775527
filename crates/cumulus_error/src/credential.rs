//! Credential completeness errors.

/// Credential error variants.
///
/// One variant per credential field that can be missing or empty. A
/// credential error means no network call was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum CredentialErrorKind {
    /// The account (cloud) name is missing or empty.
    #[display("Missing credential field: cloud_name")]
    MissingCloudName,

    /// The API key is missing or empty.
    #[display("Missing credential field: api_key")]
    MissingApiKey,

    /// The API secret is missing or empty.
    #[display("Missing credential field: api_secret")]
    MissingApiSecret,
}

/// Credential error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Credential Error: {} at {}:{}", kind, file, line)]
pub struct CredentialError {
    /// The specific error kind
    pub kind: CredentialErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CredentialError {
    /// Create a new credential error at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use cumulus_error::{CredentialError, CredentialErrorKind};
    ///
    /// let err = CredentialError::new(CredentialErrorKind::MissingApiSecret);
    /// assert_eq!(err.kind, CredentialErrorKind::MissingApiSecret);
    /// ```
    #[track_caller]
    pub fn new(kind: CredentialErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
