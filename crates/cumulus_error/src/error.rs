//! Top-level error wrapper types.

use crate::{CredentialError, StoreError, UploadError, ValidationError};

/// The foundation error enum covering every failure class in the
/// workspace.
///
/// # Examples
///
/// ```
/// use cumulus_error::{CumulusError, CredentialError, CredentialErrorKind};
///
/// let cred_err = CredentialError::new(CredentialErrorKind::MissingApiKey);
/// let err: CumulusError = cred_err.into();
/// assert!(format!("{}", err).contains("api_key"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CumulusErrorKind {
    /// Missing or incomplete credential fields
    #[from(CredentialError)]
    Credential(CredentialError),
    /// Malformed or missing operation input
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Remote store failure
    #[from(StoreError)]
    Store(StoreError),
    /// Upload failure with upload context
    #[from(UploadError)]
    Upload(UploadError),
}

/// Cumulus error with kind discrimination.
///
/// # Examples
///
/// ```
/// use cumulus_error::{CumulusResult, ValidationError, ValidationErrorKind};
///
/// fn might_fail() -> CumulusResult<()> {
///     Err(ValidationError::new(ValidationErrorKind::EmptyPayload))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Cumulus Error: {}", _0)]
pub struct CumulusError(Box<CumulusErrorKind>);

impl CumulusError {
    /// Create a new error from a kind.
    pub fn new(kind: CumulusErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CumulusErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CumulusErrorKind
impl<T> From<T> for CumulusError
where
    T: Into<CumulusErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Cumulus operations.
///
/// # Examples
///
/// ```
/// use cumulus_error::{CumulusResult, StoreError, StoreErrorKind};
///
/// fn fetch_data() -> CumulusResult<String> {
///     Err(StoreError::new(
///         "get_content",
///         StoreErrorKind::Api { status: 404, message: "Not Found".into() },
///     ))?
/// }
/// ```
pub type CumulusResult<T> = std::result::Result<T, CumulusError>;
