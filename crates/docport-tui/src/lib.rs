//! docport-tui - Terminal UI for docport
//!
//! Adds terminal rendering, event polling, and widget display on top of the
//! `docport-app` state machine.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
