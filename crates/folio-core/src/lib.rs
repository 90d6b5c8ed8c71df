//! Core library for the folio paginated content formatter.
//!
//! Folio turns a titled list of heading/body fields into markdown text split
//! into pages of bounded length, for display surfaces that cap how much a
//! single message may hold.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): [`Field`], [`Template`] and the serialized
//!   [`Document`] input record
//! - **Paginator** ([`paginator`]): accumulates fields, assigns pages and
//!   renders
//! - **Display Wrappers** ([`display`]): the per-page split ([`Pages`]) and
//!   an inspection table ([`PageLayout`])
//! - **Configuration** ([`config`]): the page budget, loaded from JSON
//!
//! Pagination is a pure computation over the current fields. Only loading
//! configuration or parsing a document can fail.
//!
//! # Quick Start
//!
//! ```rust
//! use folio_core::{Paginator, Template};
//!
//! let mut paginator = Paginator::with_template(
//!     "Roles",
//!     Template::new().with_footer("react to join"),
//! );
//! paginator.add_field("Games", "chess, go", true);
//! paginator.add_field("Music", "jazz", true);
//!
//! assert_eq!(
//!     paginator.render(),
//!     "# Roles\n## Games\nchess, go\n\n## Music\njazz\nreact to join"
//! );
//!
//! for page in &paginator.pages() {
//!     println!("{page}");
//! }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod paginator;

// Re-export commonly used types
pub use config::{Config, PageLimit, DEFAULT_PAGE_LIMIT};
pub use display::{LayoutRow, Page, PageLayout, Pages};
pub use error::{FolioError, Result};
pub use models::{Document, Field, Template};
pub use paginator::Paginator;
