use std::path::PathBuf;

use clap::Parser;

/// Interactively pick one or more options from a list
///
/// Options come from FILE (or stdin) as a JSON array of {"id", "label"}
/// objects or strings, or as plain text with one label per line. The final
/// selection is printed as JSON.
#[derive(Debug, Parser)]
#[command(name = "pickbox", version, about)]
pub struct Args {
    /// Options file; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Allow selecting more than one option
    #[arg(short, long)]
    pub multiple: bool,

    /// Label shown above the input
    #[arg(short, long, default_value = "")]
    pub label: String,

    /// Bold description line at the top
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Placeholder text of the empty input
    #[arg(short, long, default_value = "Type to search...")]
    pub placeholder: String,

    /// Rank options fuzzily instead of substring matching
    #[arg(long)]
    pub fuzzy: bool,

    /// Show each option as "label (ID: n)"
    #[arg(long)]
    pub show_ids: bool,

    /// Override the debounce delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Config file (default: <config_dir>/pickbox/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
