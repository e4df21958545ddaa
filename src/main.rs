//! docport - import Markdown or JSON content into a terminal editor
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use docport::LaunchOptions;
use docport_app::ContentFormat;

/// Import Markdown or JSON content into a terminal editor
#[derive(Parser, Debug)]
#[command(name = "docport", version)]
#[command(about = "Import Markdown or JSON content into a terminal editor", long_about = None)]
struct Args {
    /// Starting format for the import dialog (markdown or json)
    #[arg(long, value_name = "FORMAT")]
    format: Option<ContentFormat>,

    /// File to import (opens the dialog pre-filled; headless reads stdin without it)
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Run one import without the TUI and print the result as JSON
    #[arg(long)]
    headless: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    let options = LaunchOptions {
        format: args.format,
        input: args.input,
        config: args.config,
    };

    if args.init_config {
        let (path, written) = docport::app::write_default_config(&options)?;
        if written {
            eprintln!("Created {}", path.display());
        } else {
            eprintln!("Config already exists: {}", path.display());
        }
        eprintln!(
            "Logs are written to {}",
            docport_core::logging::log_file().display()
        );
        return Ok(());
    }

    if args.headless {
        if !docport::run_headless(options)? {
            std::process::exit(1);
        }
        return Ok(());
    }

    docport::run(options).await?;
    Ok(())
}
