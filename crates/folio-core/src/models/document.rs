//! Serialized input record for a paginated document.
//!
//! This is the shape callers hand over when they do not build a
//! [`Paginator`] field by field: a title, an optional link and footer, and
//! the ordered fields.

use serde::{Deserialize, Serialize};

use super::{Field, Template};
use crate::{config::PageLimit, error::Result, paginator::Paginator};

/// A complete document ready to be paginated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document title
    pub title: String,

    /// Link and footer
    #[serde(flatten)]
    pub template: Template,

    /// Fields in display order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Document {
    /// Parses a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Serialization` if the JSON does not describe a
    /// document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a paginator holding this document's fields in order.
    pub fn into_paginator(self, page_limit: PageLimit) -> Paginator {
        let mut paginator =
            Paginator::with_template(self.title, self.template).page_limit(page_limit);
        for Field {
            heading,
            body,
            inline,
        } in self.fields
        {
            paginator.add_field(heading, body, inline);
        }
        paginator
    }
}
