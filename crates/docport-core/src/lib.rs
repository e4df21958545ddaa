//! # docport-core - Core Types
//!
//! Foundation crate for docport. Provides the shared error taxonomy and the
//! logging setup used by every other crate in the workspace.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - File-based tracing subscriber, filtered by `DOCPORT_LOG`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use docport_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;

pub use error::{Error, Result, ResultExt};
