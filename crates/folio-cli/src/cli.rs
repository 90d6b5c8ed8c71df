//! Command handlers.
//!
//! Each handler reads a document, builds a paginator with the effective page
//! limit, and prints one view of it.

use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use folio_core::{Config, Document, PageLimit, Paginator};
use log::{debug, info};

use crate::{
    args::{InputArgs, PagesArgs},
    renderer::TerminalRenderer,
};

/// Runs commands against a resolved configuration.
pub struct Cli {
    config: Config,
    config_path: Option<PathBuf>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: Config, config_path: Option<PathBuf>, renderer: TerminalRenderer) -> Self {
        Self {
            config,
            config_path,
            renderer,
        }
    }

    /// Resolves configuration from the config file and an optional override.
    pub fn load_config(path: Option<&Path>, page_limit: Option<usize>) -> Result<Config> {
        let config = Config::load(path).context("Failed to load configuration")?;
        match page_limit {
            Some(limit) => {
                let limit = PageLimit::new(limit).context("Invalid page limit")?;
                debug!("Page limit overridden to {limit}");
                Ok(config.with_page_limit(limit))
            }
            None => Ok(config),
        }
    }

    pub fn render(&self, args: &InputArgs) -> Result<()> {
        let paginator = self.paginator(&args.input)?;
        self.renderer.render(&paginator.render());
        Ok(())
    }

    pub fn pages(&self, args: &PagesArgs) -> Result<()> {
        let pages = self.paginator(&args.input.input)?.pages();
        info!("Document split into {} page(s)", pages.len());

        if args.json {
            let json = serde_json::to_string_pretty(&pages).context("Failed to encode pages")?;
            println!("{json}");
        } else {
            self.renderer.render(pages.to_string().trim_end());
        }
        Ok(())
    }

    pub fn inspect(&self, args: &InputArgs) -> Result<()> {
        let layout = self.paginator(&args.input)?.layout();
        self.renderer.render(layout.to_string().trim_end());
        Ok(())
    }

    pub fn show_config(&self) -> Result<()> {
        let path = match &self.config_path {
            Some(path) => path.display().to_string(),
            None => Config::require_default_config_path()
                .map(|path| format!("{} (default)", path.display()))
                .unwrap_or_else(|e| format!("unavailable ({e})")),
        };

        let markdown = format!(
            "# Configuration\n\n- Page limit: {}\n- Config file: {path}",
            self.config.page_limit
        );
        self.renderer.render(&markdown);
        Ok(())
    }

    fn paginator(&self, input: &Path) -> Result<Paginator> {
        let paginator = read_document(input)?.into_paginator(self.config.page_limit);
        debug!(
            "Read document '{}' with {} field(s), page limit {}",
            paginator.title(),
            paginator.len(),
            paginator.limit()
        );
        Ok(paginator)
    }
}

/// Reads a document from a file, or from stdin when the path is `-`.
fn read_document(input: &Path) -> Result<Document> {
    let json = if input == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read document from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read document {}", input.display()))?
    };

    Document::from_json(&json).context("Failed to parse document")
}
