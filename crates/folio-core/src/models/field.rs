//! Field model definition.

use serde::{Deserialize, Serialize};

fn default_inline() -> bool {
    true
}

/// One heading and body content unit of a paginated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Heading rendered as a second-level markdown header
    pub heading: String,

    /// Body text rendered under the heading
    pub body: String,

    /// Layout hint for rich-message consumers; not used for pagination
    #[serde(default = "default_inline")]
    pub inline: bool,
}

impl Field {
    /// Creates a field.
    pub fn new(heading: impl Into<String>, body: impl Into<String>, inline: bool) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
            inline,
        }
    }

    /// Number of characters this field contributes to the page budget.
    ///
    /// Counts Unicode scalar values, not bytes.
    pub fn char_len(&self) -> usize {
        self.heading.chars().count() + self.body.chars().count()
    }
}
