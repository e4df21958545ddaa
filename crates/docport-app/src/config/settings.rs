//! Settings loader for `config.toml`

use super::types::Settings;
use docport_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "docport";

const DEFAULT_CONFIG: &str = r#"# docport configuration

[import]
# Format selected when the import dialog opens: "markdown" or "json"
default_format = "markdown"
# Visible height of the import textarea
textarea_rows = 12
# Move focus into the editor after a successful import
focus_editor = true

[ui]
show_status_bar = true
"#;

/// `<config_dir>/docport/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings, falling back to defaults on any problem
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from a path the user named explicitly.
///
/// Unlike [`load_settings`], a missing or malformed file is an error.
pub fn load_settings_strict(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::config_not_found(config_path));
    }

    let content = std::fs::read_to_string(config_path)?;
    toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("{}: {}", config_path.display(), e)))
}

/// Write settings back to disk
pub fn save_settings(config_path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    std::fs::write(config_path, content)?;

    debug!("Saved settings to {:?}", config_path);
    Ok(())
}

/// Create a commented default config file if none exists.
///
/// Returns `true` when a file was written.
pub fn init_config(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG)?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}
