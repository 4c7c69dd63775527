//! Operation input validation errors.

/// Validation error variants.
///
/// Raised when an operation's input is malformed or missing, before any
/// network call is issued.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Content retrieval was requested without a public id.
    #[display("A file with a non-empty public_id is required")]
    MissingPublicId,

    /// Upload was requested with an empty payload.
    #[display("Upload payload is empty (base64 or URL required)")]
    EmptyPayload,
}

/// Validation error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at {}:{}", kind, file, line)]
pub struct ValidationError {
    /// The specific error kind
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error at the caller's location.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
