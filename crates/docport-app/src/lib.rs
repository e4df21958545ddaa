//! docport-app - Application state and orchestration for docport
//!
//! Implements the TEA (The Elm Architecture) pattern: [`AppState`] is the
//! model, [`Message`] the events, and [`handler::update`] the transition
//! function. The import dialog controller and the editor engine seam live
//! here so they can be driven without a terminal.

pub mod config;
pub mod document_buffer;
pub mod editor_engine;
pub mod handler;
pub mod import_dialog;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use document_buffer::DocumentBuffer;
pub use editor_engine::{EditorContent, EditorEngine};
pub use handler::UpdateResult;
pub use import_dialog::{ContentFormat, DialogPhase, ImportDialogState, ImportError};
pub use input_key::InputKey;
pub use message::{CursorMove, Message};
pub use state::{AppState, ImportRecord, UiMode};
