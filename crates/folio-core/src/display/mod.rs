//! Display wrapper types for paginated output.
//!
//! - [`pages`]: the per-page split of a document ([`Page`], [`Pages`])
//! - [`layout`]: a tabular view of field lengths and page assignment
//!   ([`PageLayout`])
//!
//! Everything here formats as markdown, the same as
//! [`Paginator::render`](crate::Paginator::render).

pub mod layout;
pub mod pages;

pub use layout::{LayoutRow, PageLayout};
pub use pages::{Page, Pages};
