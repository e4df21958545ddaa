//! Configuration file parsing for docport
//!
//! Settings live in `<config_dir>/docport/config.toml` unless a path is
//! passed on the command line.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config, load_settings, load_settings_strict, save_settings,
};
pub use types::*;
