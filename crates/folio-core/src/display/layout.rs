//! Inspection view of a page assignment.

use std::{collections::BTreeSet, fmt};

use crate::config::PageLimit;

/// One field's position in the page assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRow {
    pub index: usize,
    pub heading: String,
    /// Running heading+body length through this field
    pub cumulative: usize,
    /// Assigned 0-based page
    pub page: usize,
}

/// Field lengths and page numbers side by side, rendered as a markdown table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub page_limit: PageLimit,
    pub rows: Vec<LayoutRow>,
    /// Index of the first field on each page
    pub page_starts: BTreeSet<usize>,
}

impl PageLayout {
    /// Number of distinct pages the fields occupy.
    pub fn page_count(&self) -> usize {
        self.page_starts.len()
    }
}

impl fmt::Display for PageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Page Layout")?;
        writeln!(f)?;
        writeln!(f, "- Page limit: {}", self.page_limit)?;
        writeln!(f, "- Fields: {}", self.rows.len())?;
        writeln!(f, "- Pages: {}", self.page_count())?;

        if self.rows.is_empty() {
            return writeln!(f, "\nNo fields.");
        }

        writeln!(f)?;
        writeln!(f, "| # | Heading | Cumulative | Page | Starts page |")?;
        writeln!(f, "|---|---------|------------|------|-------------|")?;
        for row in &self.rows {
            let start = if self.page_starts.contains(&row.index) { "yes" } else { "" };
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                row.index,
                row.heading.replace('|', "\\|"),
                row.cumulative,
                row.page + 1,
                start
            )?;
        }
        Ok(())
    }
}
