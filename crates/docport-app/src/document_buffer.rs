//! In-memory editor engine
//!
//! `DocumentBuffer` holds whatever content it was last given. It does not
//! interpret Markdown; text is kept and displayed verbatim. Structured
//! documents must have a node object at the root (`{"type": ..., ...}`),
//! anything else is rejected and the previous document stays in place.

use docport_core::prelude::*;
use serde_json::Value;

use crate::editor_engine::{EditorContent, EditorEngine};

#[derive(Debug, Default)]
pub struct DocumentBuffer {
    content: Option<EditorContent>,
    /// Cached display text, rebuilt on every successful `set_content`
    rendered: String,
    focus_count: usize,
    revision: u64,
}

impl DocumentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current document, if any content was applied
    pub fn content(&self) -> Option<&EditorContent> {
        self.content.as_ref()
    }

    /// Number of times the editor was asked to take focus
    pub fn focus_count(&self) -> usize {
        self.focus_count
    }

    /// Incremented on every successful content change
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl EditorEngine for DocumentBuffer {
    fn set_content(&mut self, content: EditorContent) -> Result<()> {
        let rendered = match &content {
            EditorContent::Text(text) => text.clone(),
            EditorContent::Document(root) => {
                validate_root(root)?;
                serde_json::to_string_pretty(root)?
            }
        };

        let content_kind = content.kind_label();
        self.rendered = rendered;
        self.content = Some(content);
        self.revision += 1;
        debug!(
            "Document replaced with {} (revision {}, {} bytes)",
            content_kind,
            self.revision,
            self.rendered.len()
        );
        Ok(())
    }

    fn focus(&mut self) {
        self.focus_count += 1;
    }

    fn text(&self) -> String {
        self.rendered.clone()
    }
}

fn validate_root(root: &Value) -> Result<()> {
    match root {
        Value::Object(map) => match map.get("type") {
            Some(Value::String(_)) => Ok(()),
            Some(_) => Err(Error::engine("node `type` must be a string")),
            None => Err(Error::engine("document root has no `type`")),
        },
        other => Err(Error::engine(format!(
            "document root must be a node object, got {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = DocumentBuffer::new();
        assert!(buffer.content().is_none());
        assert_eq!(buffer.text(), "");
        assert_eq!(buffer.revision(), 0);
    }

    #[test]
    fn test_text_content_is_kept_verbatim() {
        let mut buffer = DocumentBuffer::new();
        let markdown = "# Title\n\n- a\n- b\n";

        buffer
            .set_content(EditorContent::Text(markdown.to_string()))
            .unwrap();

        assert_eq!(buffer.text(), markdown);
        assert_eq!(
            buffer.content(),
            Some(&EditorContent::Text(markdown.to_string()))
        );
        assert_eq!(buffer.revision(), 1);
    }

    #[test]
    fn test_document_content_is_pretty_printed() {
        let mut buffer = DocumentBuffer::new();
        let doc = json!({"type": "doc", "content": []});

        buffer
            .set_content(EditorContent::Document(doc.clone()))
            .unwrap();

        assert!(buffer.text().contains("\"type\": \"doc\""));
        assert_eq!(buffer.content(), Some(&EditorContent::Document(doc)));
    }

    #[test]
    fn test_rejects_non_object_root() {
        let mut buffer = DocumentBuffer::new();

        let err = buffer
            .set_content(EditorContent::Document(json!([1, 2, 3])))
            .unwrap_err();

        assert!(matches!(err, Error::Engine { .. }));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_rejects_root_without_type() {
        let mut buffer = DocumentBuffer::new();

        let err = buffer
            .set_content(EditorContent::Document(json!({"content": []})))
            .unwrap_err();

        assert!(err.to_string().contains("no `type`"));
    }

    #[test]
    fn test_rejects_non_string_type() {
        let mut buffer = DocumentBuffer::new();

        let result = buffer.set_content(EditorContent::Document(json!({"type": 7})));

        assert!(result.is_err());
    }

    #[test]
    fn test_rejected_content_keeps_previous_document() {
        let mut buffer = DocumentBuffer::new();
        buffer
            .set_content(EditorContent::Text("keep me".to_string()))
            .unwrap();

        let _ = buffer.set_content(EditorContent::Document(json!(null)));

        assert_eq!(buffer.text(), "keep me");
        assert_eq!(buffer.revision(), 1);
    }

    #[test]
    fn test_focus_is_counted() {
        let mut buffer = DocumentBuffer::new();
        buffer.focus();
        buffer.focus();
        assert_eq!(buffer.focus_count(), 2);
    }
}
