//! Configuration types for `config.toml`

use serde::{Deserialize, Serialize};

use crate::import_dialog::ContentFormat;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub import: ImportSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Import dialog settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImportSettings {
    /// Format selected when the dialog opens
    #[serde(default)]
    pub default_format: ContentFormat,

    /// Visible textarea height in rows
    #[serde(default = "default_textarea_rows")]
    pub textarea_rows: u16,

    /// Focus the editor after a successful import
    #[serde(default = "default_true")]
    pub focus_editor: bool,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            default_format: ContentFormat::default(),
            textarea_rows: default_textarea_rows(),
            focus_editor: true,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the bottom status bar
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_status_bar: true,
        }
    }
}

/// Smallest textarea the dialog will render
pub const MIN_TEXTAREA_ROWS: u16 = 3;

fn default_textarea_rows() -> u16 {
    12
}

fn default_true() -> bool {
    true
}

impl ImportSettings {
    /// Textarea rows, clamped to a usable minimum
    pub fn rows(&self) -> u16 {
        self.textarea_rows.max(MIN_TEXTAREA_ROWS)
    }
}
