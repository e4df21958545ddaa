//! Startup: settings resolution, logging, and mode dispatch

use std::path::PathBuf;

use docport_app::config::{self, Settings};
use docport_app::state::AppState;
use docport_app::ContentFormat;
use docport_core::prelude::*;

use crate::headless;

/// What the command line asked for
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Overrides the configured starting format
    pub format: Option<ContentFormat>,
    /// Import source: pre-fills the dialog, or feeds headless mode
    pub input: Option<PathBuf>,
    /// Explicit config file; must exist and parse
    pub config: Option<PathBuf>,
}

/// Load settings and apply command line overrides
pub fn resolve_settings(options: &LaunchOptions) -> Result<Settings> {
    let mut settings = match &options.config {
        Some(path) => config::load_settings_strict(path)?,
        None => match config::default_config_path() {
            Some(path) => config::load_settings(&path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Settings::default()
            }
        },
    };

    if let Some(format) = options.format {
        settings.import.default_format = format;
    }
    Ok(settings)
}

/// Write the commented default config unless one exists.
///
/// Returns the path and whether a file was written.
pub fn write_default_config(options: &LaunchOptions) -> Result<(PathBuf, bool)> {
    let path = match &options.config {
        Some(path) => path.clone(),
        None => config::default_config_path()
            .ok_or_else(|| Error::config("No config directory on this platform"))?,
    };
    let written = config::init_config(&path)?;
    Ok((path, written))
}

fn init(mode: &str) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, since the TUI and headless output own stdout
    docport_core::logging::init()?;

    info!("Version {}, {} mode", env!("CARGO_PKG_VERSION"), mode);
    Ok(())
}

/// Run the interactive TUI
pub async fn run(options: LaunchOptions) -> Result<()> {
    init("tui")?;

    let settings = resolve_settings(&options)?;
    let format = settings.import.default_format;
    let mut state = AppState::with_settings(settings);

    if let Some(path) = &options.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        info!("Pre-filling import dialog from {}", path.display());
        state.open_import_dialog_with(format, text);
    }

    let result = docport_tui::run(state).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        eprintln!(
            "docport stopped with an error; see {} for details",
            docport_core::logging::log_file().display()
        );
    }

    info!("docport exiting");
    result
}

/// Run a single import without the TUI. Returns whether it succeeded.
pub fn run_headless(options: LaunchOptions) -> Result<bool> {
    init("headless")?;

    let settings = resolve_settings(&options)?;
    headless::runner::run_headless(settings.import.default_format, options.input.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_default_config_once() {
        let dir = tempdir().unwrap();
        let options = LaunchOptions {
            config: Some(dir.path().join("docport").join("config.toml")),
            ..Default::default()
        };

        let (path, written) = write_default_config(&options).unwrap();
        assert!(written);
        assert!(path.exists());
        assert!(!write_default_config(&options).unwrap().1);

        let settings = resolve_settings(&options).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempdir().unwrap();
        let options = LaunchOptions {
            config: Some(dir.path().join("missing.toml")),
            ..Default::default()
        };

        let err = resolve_settings(&options).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_format_flag_overrides_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[import]\ndefault_format = \"markdown\"\n").unwrap();

        let options = LaunchOptions {
            config: Some(path),
            format: Some(ContentFormat::Json),
            ..Default::default()
        };

        let settings = resolve_settings(&options).unwrap();
        assert_eq!(settings.import.default_format, ContentFormat::Json);
    }

    #[test]
    fn test_explicit_config_is_applied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nshow_status_bar = false\n").unwrap();

        let options = LaunchOptions {
            config: Some(path),
            ..Default::default()
        };

        let settings = resolve_settings(&options).unwrap();
        assert!(!settings.ui.show_status_bar);
        assert_eq!(settings.import.default_format, ContentFormat::Markdown);
    }
}
