//! Argument definitions and version plumbing.

use clap::{Parser, Subcommand};
use std::sync::OnceLock;

static VERSION: OnceLock<String> = OnceLock::new();

/// Version string shown by `--version`: the crate version alone for tagged
/// release builds, otherwise with the commit hash and date appended.
pub fn get_version() -> &'static str {
    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        let hash = env!("GIT_HASH");
        let date = env!("GIT_COMMIT_DATE");
        let is_release = env!("IS_RELEASE") == "true";
        if is_release || hash.is_empty() {
            version.to_string()
        } else {
            format!("{} ({} {})", version, hash, date)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "verso")]
#[command(version = get_version())]
#[command(about = "Browse static poem collections from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Collection directory or base URL (overrides the configured default)
    #[arg(short, long, global = true)]
    pub collection: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List poems as cards, newest first (default command)
    #[command(alias = "ls")]
    List {
        /// Free-text query matched against titles and bodies
        query: Option<String>,

        /// Only poems carrying exactly this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show one poem in full
    #[command(alias = "v")]
    Show {
        /// List position (1-based) or poem id
        selector: String,
    },

    /// List the collection's tags with poem counts
    Tags,

    /// Browse interactively: type to search, Tab cycles tags, Enter opens
    #[command(alias = "b")]
    Browse,

    /// Verify every manifest entry has its documents
    Check,

    /// Show or change configuration
    Config {
        /// Config key (omit to show all)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}
