//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **list**: Show the assets matching a search term and type filter (default)
//! - **show**: Show the selection panels for one asset
//! - **types**: Show the available type filter values
//!
//! # Examples
//!
//! ```bash
//! media-browser --catalog assets.json list --search beach --type image
//! media-browser list --view thumbnail --select img-beach
//! media-browser show img-beach
//! media-browser types
//! ```

use crate::view::ViewMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Layout selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewArg {
    /// One table row per asset
    List,
    /// Grid of thumbnail cards
    Thumbnail,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::List => Self::List,
            ViewArg::Thumbnail => Self::Thumbnail,
        }
    }
}

/// Parameters for the list command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Search term (matched against filename and label)
    pub search: Option<String>,
    /// Media type filter wire value, validated when applied
    pub media_type: Option<String>,
    /// Layout override (config default when `None`)
    pub view: Option<ViewMode>,
    /// Asset to select after loading
    pub select: Option<String>,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "media-browser")]
#[command(about = "Search, filter and browse media assets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Asset catalog (JSON array of assets); overrides config
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List assets (default)
    #[command(visible_alias = "l")]
    List {
        /// Search term matched against filename and label
        #[arg(short = 's', long = "search", value_name = "TERM")]
        search: Option<String>,

        /// Media type filter: "", video, audio, image or document
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        media_type: Option<String>,

        /// Layout to render
        #[arg(short = 'v', long = "view", value_enum)]
        view: Option<ViewArg>,

        /// Select an asset by id after loading
        #[arg(long = "select", value_name = "ID")]
        select: Option<String>,
    },

    /// Show the selected-asset and IPTC panels for one asset
    Show {
        /// Asset id
        id: String,
    },

    /// List the type filter values
    Types,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to an unfiltered list
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List {
            search: None,
            media_type: None,
            view: None,
            select: None,
        })
    }
}

impl Commands {
    /// Extract list parameters (`None` for other commands)
    #[must_use]
    pub fn list_params(&self) -> Option<ListParams> {
        match self {
            Self::List {
                search,
                media_type,
                view,
                select,
            } => Some(ListParams {
                search: search.clone(),
                media_type: media_type.clone(),
                view: view.map(ViewMode::from),
                select: select.clone(),
            }),
            Self::Show { .. } | Self::Types => None,
        }
    }
}
