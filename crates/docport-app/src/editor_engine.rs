//! Contract with the document-editing engine.
//!
//! The engine owns the document model, its schema and Markdown interpretation.
//! docport only hands it content and asks it to take focus; see
//! [`crate::document_buffer::DocumentBuffer`] for the in-memory engine the
//! binary ships with.

use docport_core::Result;
use serde_json::Value;

/// Content passed to [`EditorEngine::set_content`]
#[derive(Debug, Clone, PartialEq)]
pub enum EditorContent {
    /// Raw string input. The engine decides whether it is Markdown.
    Text(String),
    /// A structured document tree, shaped by the engine's schema.
    Document(Value),
}

impl EditorContent {
    /// Short label for status displays
    pub fn kind_label(&self) -> &'static str {
        match self {
            EditorContent::Text(_) => "text",
            EditorContent::Document(_) => "document",
        }
    }
}

/// A document-editing engine that imported content is applied to.
///
/// Implementations must apply content atomically: `set_content` either
/// replaces the whole document or leaves it untouched and returns an error.
#[cfg_attr(test, mockall::automock)]
pub trait EditorEngine {
    /// Replace the current document.
    ///
    /// Returns [`docport_core::Error::Engine`] when the content is rejected.
    fn set_content(&mut self, content: EditorContent) -> Result<()>;

    /// Move input focus into the editor. Best effort.
    fn focus(&mut self) {}

    /// Plain-text rendering of the current document for display.
    fn text(&self) -> String;
}
