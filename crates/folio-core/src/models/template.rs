//! Optional title link and footer attached to a paginated document.

use serde::{Deserialize, Serialize};

/// Presentation extras surrounding the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Link the title points to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Text appended once after the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl Template {
    /// Creates an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title link.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the footer.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// The title link, treating an empty string as absent.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// The footer, treating an empty string as absent.
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref().filter(|footer| !footer.is_empty())
    }
}
