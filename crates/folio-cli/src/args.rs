use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Command-line interface for the folio paginated content formatter
///
/// Folio reads a JSON document (a title, an optional url and footer, and an
/// ordered list of heading/body fields) and prints it as markdown split into
/// pages of bounded length.
#[derive(Parser)]
#[command(version, about, name = "folio")]
pub struct Args {
    /// Path to a JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/folio/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Characters of heading+body content per page, overriding the config
    /// file
    #[arg(long, global = true, env = "FOLIO_PAGE_LIMIT")]
    pub page_limit: Option<usize>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the folio CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render a document as a single markdown text
    #[command(alias = "r")]
    Render(InputArgs),
    /// Print a document split into pages
    #[command(alias = "p")]
    Pages(PagesArgs),
    /// Show cumulative lengths and page assignment per field
    #[command(alias = "i")]
    Inspect(InputArgs),
    /// Show the effective configuration
    Config,
}

/// Where to read the document from
#[derive(ClapArgs)]
pub struct InputArgs {
    /// Document JSON file, or "-" to read from stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

#[derive(ClapArgs)]
pub struct PagesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Emit the pages as a JSON array of {number, total, text}
    #[arg(long)]
    pub json: bool,
}
