//! The paginator: accumulates fields and assigns them to length-bounded
//! pages.
//!
//! Page assignment is recomputed from the current field list on every call.
//! Nothing derived is cached, so the paginator can keep accepting fields
//! after it has been rendered.
//!
//! # Page assignment
//!
//! ```text
//! fields          ──▶ cumulative lengths ──▶ raw pages ──▶ skip-corrected pages
//! (heading+body)      (running total)        (len / limit)  (never jumps by >1)
//! ```
//!
//! The raw page of a field is its cumulative length floor-divided by the page
//! limit. One long field can make the raw page jump by two or more, which
//! would leave page numbers unused. A left fold clamps every step to at most
//! +1 over the previously assigned page, so the assigned pages form a dense
//! range.
//!
//! # Example
//!
//! ```rust
//! use folio_core::{PageLimit, Paginator};
//!
//! let mut paginator = Paginator::new("T").page_limit(PageLimit::new(4)?);
//! paginator.add_field("H", "B", true);
//! paginator.add_field("H", "BBBBBBBBBB", true);
//! paginator.add_field("H", "B", true);
//!
//! assert_eq!(paginator.field_lengths(), vec![2, 13, 15]);
//! // raw pages would be [0, 3, 3]
//! assert_eq!(paginator.page_numbers(), vec![0, 1, 2]);
//! # Ok::<(), folio_core::FolioError>(())
//! ```

use std::collections::BTreeSet;

use log::debug;

use crate::{
    config::PageLimit,
    models::{Field, Template},
};

pub mod render;

#[cfg(test)]
mod tests;

/// Accumulates fields under a title and splits them into pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    title: String,
    template: Template,
    fields: Vec<Field>,
    page_limit: PageLimit,
}

impl Paginator {
    /// Creates an empty paginator with the default page limit.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_template(title, Template::default())
    }

    /// Creates an empty paginator with a title link and footer.
    pub fn with_template(title: impl Into<String>, template: Template) -> Self {
        Self {
            title: title.into(),
            template,
            fields: Vec::new(),
            page_limit: PageLimit::default(),
        }
    }

    /// Replaces the per-page character budget.
    pub fn page_limit(mut self, page_limit: PageLimit) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// Appends a field. Fields are never reordered or removed.
    pub fn add_field(&mut self, heading: impl Into<String>, body: impl Into<String>, inline: bool) {
        self.fields.push(Field::new(heading, body, inline));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn limit(&self) -> PageLimit {
        self.page_limit
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Running total of heading+body characters, one entry per field,
    /// inclusive of that field.
    pub fn field_lengths(&self) -> Vec<usize> {
        self.fields
            .iter()
            .scan(0, |total, field| {
                *total += field.char_len();
                Some(*total)
            })
            .collect()
    }

    /// Page number of every field.
    ///
    /// The sequence starts at the first field's raw page (zero unless that
    /// field alone exceeds the budget) and increases by at most one between
    /// neighbours.
    pub fn page_numbers(&self) -> Vec<usize> {
        let limit = self.page_limit.get();
        let mut raw = self.field_lengths().into_iter().map(|len| len / limit);

        let Some(first) = raw.next() else {
            return Vec::new();
        };

        let pages: Vec<usize> = std::iter::once(first)
            .chain(raw.scan(first, |acc, raw| {
                *acc = skip_corrected(*acc, raw);
                Some(*acc)
            }))
            .collect();

        debug!(
            "Assigned {} fields to pages {}..={} (limit {})",
            pages.len(),
            first,
            pages.last().copied().unwrap_or(first),
            limit
        );
        pages
    }

    /// Index of the first field on each page.
    pub fn new_page_indices(&self) -> BTreeSet<usize> {
        page_starts(&self.page_numbers())
    }
}

/// Combines the previously assigned page with the next raw page, clamping
/// jumps to a single page.
fn skip_corrected(acc: usize, raw: usize) -> usize {
    if raw.saturating_sub(acc) > 1 {
        acc + 1
    } else {
        raw
    }
}

/// First index of every distinct value in a non-decreasing page sequence.
pub(crate) fn page_starts(pages: &[usize]) -> BTreeSet<usize> {
    pages
        .iter()
        .enumerate()
        .filter(|&(i, page)| i == 0 || pages[i - 1] != *page)
        .map(|(i, _)| i)
        .collect()
}
