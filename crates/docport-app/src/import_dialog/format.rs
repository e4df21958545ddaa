//! Content format selection for the import dialog

use serde::{Deserialize, Serialize};

/// Format the pasted text is interpreted as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentFormat {
    /// Handed to the engine as a string; the engine recognizes Markdown
    #[default]
    Markdown,
    /// Deserialized into a document tree before it reaches the engine
    Json,
}

impl ContentFormat {
    /// All formats in selector order
    pub const ALL: [ContentFormat; 2] = [ContentFormat::Markdown, ContentFormat::Json];

    pub fn label(&self) -> &'static str {
        match self {
            ContentFormat::Markdown => "Markdown",
            ContentFormat::Json => "JSON",
        }
    }

    /// Textarea placeholder shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            ContentFormat::Markdown => "# Heading\n\nYour markdown content here...",
            ContentFormat::Json => r#"{"type": "doc", "content": [...]}"#,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ContentFormat::Markdown => ContentFormat::Json,
            ContentFormat::Json => ContentFormat::Markdown,
        }
    }
}

impl std::fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentFormat::Markdown => write!(f, "markdown"),
            ContentFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ContentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ContentFormat::Markdown),
            "json" => Ok(ContentFormat::Json),
            other => Err(format!(
                "unknown format '{other}' (expected 'markdown' or 'json')"
            )),
        }
    }
}
