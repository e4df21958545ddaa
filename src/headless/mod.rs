//! Headless mode - one import, reported as NDJSON on stdout
//!
//! Runs the same import algorithm as the dialog against an in-memory
//! document, without a terminal. Useful for scripting and for checking
//! content before pasting it.
//!
//! # Example Output
//!
//! ```json
//! {"event":"imported","format":"markdown","chars":7,"document":"# Hello","timestamp":1704700001000}
//! {"event":"import_failed","format":"json","error":"Invalid JSON format. Please check your input.","timestamp":1704700002000}
//! ```

pub mod runner;

use chrono::Utc;
use docport_app::ContentFormat;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Content was applied; `document` is the resulting editor content
    Imported {
        format: ContentFormat,
        chars: usize,
        document: serde_json::Value,
        timestamp: i64,
    },

    /// Import was rejected; `error` is the message the dialog would show
    ImportFailed {
        format: ContentFormat,
        error: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Imported { .. })
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn imported(format: ContentFormat, chars: usize, document: serde_json::Value) -> Self {
        Self::Imported {
            format,
            chars,
            document,
            timestamp: Self::now(),
        }
    }

    pub fn import_failed(format: ContentFormat, error: impl Into<String>) -> Self {
        Self::ImportFailed {
            format,
            error: error.into(),
            timestamp: Self::now(),
        }
    }
}
