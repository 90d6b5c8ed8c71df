//! Pagination configuration.
//!
//! The only recognized option is the page budget: the number of cumulative
//! heading and body characters a page may hold before the next field rolls
//! over to a new page.
//!
//! Configuration is read from JSON. When no explicit path is given, the file
//! is looked up following the XDG Base Directory specification:
//! `$XDG_CONFIG_HOME/folio/config.json` or `~/.config/folio/config.json`.
//! A missing default file is not an error; defaults apply.

use std::{
    fmt,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Default per-page character budget.
pub const DEFAULT_PAGE_LIMIT: usize = 512;

/// A strictly positive per-page character budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageLimit(NonZeroUsize);

impl PageLimit {
    /// Creates a page limit.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::InvalidInput` if `limit` is zero.
    pub fn new(limit: usize) -> Result<Self> {
        NonZeroUsize::new(limit).map(Self).ok_or_else(|| {
            FolioError::invalid_input("page_limit").with_reason("must be greater than zero")
        })
    }

    /// Returns the budget as a plain integer.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(DEFAULT_PAGE_LIMIT - 1))
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// On-disk shape of the config file, before validation.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    page_limit: Option<usize>,
}

/// Formatter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Maximum characters of cumulative heading+body content before
    /// starting a new page
    pub page_limit: PageLimit,
}

impl Config {
    /// Loads configuration.
    ///
    /// With `Some(path)` the file must exist and parse. With `None` the XDG
    /// default location is tried, and defaults are returned if nothing is
    /// there.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::FileSystem` if the file cannot be read
    /// Returns `FolioError::Serialization` if the file is not valid config JSON
    /// Returns `FolioError::Configuration` if the page limit is zero
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path.as_ref()),
            None => match Self::default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| FolioError::file_system(path, e))?;
        let config = Self::from_json(&contents)?;
        info!("Loaded config from {} (page_limit={})", path.display(), config.page_limit);
        Ok(config)
    }

    /// Parses config JSON. Omitted keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Serialization` if the JSON is malformed
    /// Returns `FolioError::Configuration` if a value is out of range
    pub fn from_json(json: &str) -> Result<Self> {
        let ConfigFile { page_limit } = serde_json::from_str(json)?;
        let page_limit = match page_limit {
            Some(limit) => PageLimit::new(limit).map_err(|e| FolioError::Configuration {
                message: e.to_string(),
            })?,
            None => PageLimit::default(),
        };
        Ok(Self { page_limit })
    }

    /// Returns a copy with the page limit replaced.
    pub fn with_page_limit(mut self, page_limit: PageLimit) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// Returns the default config path following XDG Base Directory
    /// specification, if a home directory can be determined.
    pub fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("folio").get_config_file("config.json")
    }

    /// Like [`Config::default_config_path`], but treats an undeterminable
    /// location as an error.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::XdgDirectory` if no config directory is known.
    pub fn require_default_config_path() -> Result<PathBuf> {
        Self::default_config_path().ok_or_else(|| {
            FolioError::XdgDirectory("could not determine config directory".to_string())
        })
    }
}
