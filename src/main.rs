//! TeraPeek - Terabox/Terashare share link inspector
//!
//! Extracts the share id from a pasted link, asks the worker proxy for the
//! file's metadata and shows the direct download link, either in a window or
//! on the command line.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use terapeek::fetcher::MetadataFetcher;
use terapeek::gui::clipboard;
use terapeek::inspector::Inspector;
use terapeek::utils::AppSettings;
use terapeek::{app, preview};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "terapeek", version, about)]
struct Args {
    /// Inspect a share link or id without opening a window
    #[arg(long, value_name = "LINK_OR_ID")]
    inspect: Option<String>,

    /// Print the raw JSON response after the summary
    #[arg(long, requires = "inspect")]
    json: bool,

    /// Copy the direct link to the clipboard
    #[arg(long, requires = "inspect")]
    copy: bool,

    /// Write the 1200x630 preview banner to a PNG file
    #[arg(long, value_name = "PATH")]
    og_image: Option<PathBuf>,

    /// Override the worker proxy base URL
    #[arg(long, value_name = "URL")]
    worker_url: Option<String>,

    /// Settings file (defaults to <config dir>/terapeek/settings.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("terapeek=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = load_settings(&args)?;

    if let Some(path) = &args.og_image {
        preview::write_og_image(path)
            .with_context(|| format!("Failed to generate image at {}", path.display()))?;
        if args.inspect.is_none() {
            return Ok(());
        }
    }

    if let Some(input) = &args.inspect {
        // Run headless inside a temporary Tokio runtime
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(inspect_cli(input, &args, settings));
    }

    // Start the GUI application (synchronous entrypoint)
    app::run(settings)
}

fn load_settings(args: &Args) -> Result<AppSettings> {
    let path = args.config.clone().unwrap_or_else(AppSettings::default_path);
    let mut settings = AppSettings::load_from(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?
        .apply_env();

    if let Some(url) = &args.worker_url {
        settings.worker_base_url = url.clone();
    }
    settings.validate()?;
    Ok(settings)
}

async fn inspect_cli(input: &str, args: &Args, settings: AppSettings) -> Result<()> {
    let inspector = Inspector::new(Arc::new(MetadataFetcher::new(&settings)));

    let inspection = match inspector.inspect(input).await {
        Ok(inspection) => inspection,
        Err(e) => bail!("{}", e.user_message()),
    };

    println!("{}", inspection.report());
    if args.json {
        println!("{}", inspection.metadata.to_pretty_json());
    }

    if args.copy {
        let link = inspection.metadata.direct_link();
        match clipboard::set_clipboard_content_and_hold(link, clipboard::CLIPBOARD_HOLD) {
            Ok(()) => eprintln!("Copied to clipboard"),
            Err(e) => bail!("{}", e.user_message()),
        }
    }

    Ok(())
}
