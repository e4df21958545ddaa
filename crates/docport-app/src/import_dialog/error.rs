//! Import failure taxonomy

use thiserror::Error;

/// Why an import attempt did not change the document.
///
/// Every variant is recovered inside the dialog: it becomes the inline
/// error message and the user's text stays in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// Trimmed input is empty
    #[error("nothing to import")]
    EmptyInput,

    /// No editor engine is attached
    #[error("no active editor")]
    MissingEngine,

    /// JSON input could not be deserialized or was rejected as a document
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// The engine failed to apply Markdown/text input
    #[error("failed to apply content: {0}")]
    ParseFailure(String),
}

impl ImportError {
    /// Message shown under the textarea
    pub fn user_message(&self) -> &'static str {
        match self {
            ImportError::EmptyInput | ImportError::MissingEngine => "Please enter some content",
            ImportError::InvalidJson(_) => "Invalid JSON format. Please check your input.",
            ImportError::ParseFailure(_) => "Failed to parse content. Please check your input.",
        }
    }
}
