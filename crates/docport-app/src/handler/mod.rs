//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `import_dialog`: Import dialog handlers
//! - `scroll`: Document scroll handlers

pub(crate) mod import_dialog;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

pub use keys::handle_key;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
