//! Custom widget components

mod document_view;
mod import_dialog;
pub mod modal_overlay;
mod status_bar;

pub use document_view::DocumentView;
pub use import_dialog::ImportDialog;
pub use status_bar::StatusBar;
