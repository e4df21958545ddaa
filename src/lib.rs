//! docport
//!
//! A terminal document view with an Import Content dialog: paste Markdown
//! or a JSON document tree, pick the format, and apply it to the editor.

pub mod app;
pub mod headless;

// Re-export main entry points
pub use app::{run, run_headless, LaunchOptions};
