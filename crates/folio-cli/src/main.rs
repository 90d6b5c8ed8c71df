//! Folio CLI Application
//!
//! Command-line interface for the folio paginated content formatter.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        page_limit,
        no_color,
        command,
    } = Args::parse();

    let resolved = Cli::load_config(config.as_deref(), page_limit)?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("Folio started (page_limit={})", resolved.page_limit);

    let cli = Cli::new(resolved, config, renderer);
    match command {
        Render(args) => cli.render(&args),
        Pages(args) => cli.pages(&args),
        Inspect(args) => cli.inspect(&args),
        Config => cli.show_config(),
    }
}
