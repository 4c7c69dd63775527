//! Upload-specific errors.

use crate::StoreErrorKind;

/// Upload error variants.
///
/// Wraps the underlying store failure with upload semantics; the original
/// message is preserved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::From)]
pub enum UploadErrorKind {
    /// The store rejected or failed to service the upload request.
    #[display("Failed to upload image: {_0}")]
    Store(StoreErrorKind),
}

/// Upload error with upload context and source location.
///
/// Records the public id and folder the upload targeted, after
/// sanitization, so a failed upload can be matched against store-side
/// state.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at {}:{}", kind, file, line)]
pub struct UploadError {
    /// The specific error kind
    pub kind: UploadErrorKind,
    /// Public id the upload targeted, when one was requested
    pub public_id: Option<String>,
    /// Folder the upload targeted, when one was requested
    pub folder: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl UploadError {
    /// Create a new upload error at the caller's location.
    #[track_caller]
    pub fn new(kind: impl Into<UploadErrorKind>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind: kind.into(),
            public_id: None,
            folder: None,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Attach the public id the upload targeted.
    pub fn with_public_id(mut self, public_id: impl Into<String>) -> Self {
        self.public_id = Some(public_id.into());
        self
    }

    /// Attach the folder the upload targeted.
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }
}
