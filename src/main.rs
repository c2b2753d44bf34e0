//! media-browser CLI entry point
//!
//! Loads an asset catalog (a JSON array of assets) into the in-memory
//! repository and renders the browser views as text.
//!
//! # Usage
//!
//! ```bash
//! # List every asset (default command)
//! media-browser --catalog assets.json
//!
//! # Search and filter, thumbnail layout, with a selection
//! media-browser list -s beach -t image -v thumbnail --select img-beach
//!
//! # Selected-asset and IPTC panels for one asset
//! media-browser show img-beach
//!
//! # Type filter values
//! media-browser types
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/media-browser/config.toml` on Linux) and may be overridden
//! with `MEDIA_BROWSER_*` environment variables. Log output is controlled
//! by `RUST_LOG`.

use media_browser::{
    InMemoryRepository, MediaUiError,
    cli::{Cli, Commands},
    commands,
    config::MediaBrowserConfig,
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, MediaUiError>;

/// Resolve the catalog path: `--catalog` wins over the config file
fn catalog_path(cli: &Cli, config: &MediaBrowserConfig) -> Result<PathBuf> {
    cli.catalog
        .clone()
        .or_else(|| config.catalog.clone())
        .ok_or(MediaUiError::NoCatalog)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = MediaBrowserConfig::load()?;
    let cli = Cli::parse_args();
    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();
    if matches!(command, Commands::Types) {
        commands::types(quiet);
        return Ok(());
    }

    let path = catalog_path(&cli, &config)?;
    let repository = InMemoryRepository::from_json_file(&path)?;

    match &command {
        Commands::List { .. } => {
            let params = command.list_params().unwrap_or_default();
            commands::list(
                &repository,
                &params,
                config.view_mode,
                &config.display_options(),
                quiet,
            )?;
        }
        Commands::Show { id } => commands::show(&repository, id)?,
        Commands::Types => {}
    }

    Ok(())
}
