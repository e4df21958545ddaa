//! Import Content dialog
//!
//! - `format`: Markdown/JSON selection and per-format placeholders
//! - `error`: import failure taxonomy and user-facing messages
//! - `state`: session state, text editing and the import algorithm
//!
//! The rendering widget lives in docport-tui's `widgets::import_dialog`.

pub mod error;
pub mod format;
pub mod state;

pub use error::ImportError;
pub use format::ContentFormat;
pub use state::{DialogPhase, ImportDialogState};
