//! Remote store errors.

/// Remote store error variants.
///
/// The remote service rejected or failed to service a well-formed request.
/// The original message is preserved verbatim rather than translated into
/// a generic code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum StoreErrorKind {
    /// Transport-level failure before any response was received.
    #[display("Request failed: {_0}")]
    Http(String),

    /// The store answered with a non-success status (auth rejection,
    /// not-found, rate limiting).
    #[display("API error {status}: {message}")]
    Api {
        /// HTTP status code returned by the store
        status: u16,
        /// Response body as returned by the store
        message: String,
    },

    /// The response body could not be decoded.
    #[display("Failed to parse response: {_0}")]
    Parse(String),
}

/// Store error with operation context and source location.
///
/// Carries the operation name and, when known, the public id or folder
/// involved, so a failure can be traced without re-running the call.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error in {}: {} at {}:{}", operation, kind, file, line)]
pub struct StoreError {
    /// The specific error kind
    pub kind: StoreErrorKind,
    /// Name of the operation that failed ("list", "get_content", "upload")
    pub operation: &'static str,
    /// Public id or folder the operation was acting on, when known
    pub subject: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use cumulus_error::{StoreError, StoreErrorKind};
    ///
    /// let err = StoreError::new("list", StoreErrorKind::Http("timed out".into()));
    /// assert_eq!(err.operation, "list");
    /// ```
    #[track_caller]
    pub fn new(operation: &'static str, kind: StoreErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            operation,
            subject: None,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Attach the public id or folder the operation was acting on.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}
