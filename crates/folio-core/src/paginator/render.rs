//! Text rendering of a paginator, whole or split per page.

use std::fmt;

use super::{page_starts, Paginator};
use crate::{
    display::{LayoutRow, Page, PageLayout, Pages},
    models::Field,
};

const SEPARATOR_DASHES: &str = "----------";

/// Separator line emitted before the first field of a page.
pub(crate) fn page_separator(page: usize, total: usize) -> String {
    format!("{SEPARATOR_DASHES} {page}/{total} {SEPARATOR_DASHES}")
}

fn field_block(field: &Field) -> String {
    format!("\n## {}\n{}", field.heading, field.body)
}

impl Paginator {
    fn title_line(&self) -> String {
        match self.template.url() {
            Some(url) => format!("# [{}]({url})", self.title),
            None => format!("# {}", self.title),
        }
    }

    fn footer_text(&self) -> &str {
        self.template.footer().unwrap_or("")
    }

    /// Renders the whole document as markdown.
    ///
    /// When the fields span more than one page, a `---------- n/N ----------`
    /// line precedes the first field of every page, including the first page
    /// right after the title. The footer is appended once at the end. The
    /// result is trimmed.
    pub fn render(&self) -> String {
        let pages = self.page_numbers();
        let blocks = self.fields.iter().map(field_block);

        let body = match pages.last() {
            Some(&last) if last != 0 => {
                let starts = page_starts(&pages);
                let total = last + 1;
                blocks
                    .enumerate()
                    .map(|(i, block)| {
                        if starts.contains(&i) {
                            format!("\n{}\n{block}", page_separator(pages[i] + 1, total))
                        } else {
                            block
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            _ => blocks.collect::<Vec<_>>().join("\n"),
        };

        format!("{}{body}\n{}", self.title_line(), self.footer_text())
            .trim()
            .to_string()
    }

    /// Splits the document at the computed page boundaries.
    ///
    /// The title opens the first page and the footer closes the last one. A
    /// paginator without fields still yields a single page.
    pub fn pages(&self) -> Pages {
        let numbers = self.page_numbers();
        let total = numbers.last().map_or(1, |last| last + 1);

        let mut groups: Vec<(usize, Vec<String>)> = Vec::new();
        for (field, &number) in self.fields.iter().zip(&numbers) {
            if let Some((current, blocks)) = groups.last_mut() {
                if *current == number {
                    blocks.push(field_block(field));
                    continue;
                }
            }
            groups.push((number, vec![field_block(field)]));
        }
        if groups.is_empty() {
            groups.push((0, Vec::new()));
        }

        let last = groups.len() - 1;
        let pages = groups
            .into_iter()
            .enumerate()
            .map(|(i, (number, blocks))| {
                let head = if i == 0 { self.title_line() } else { String::new() };
                let tail = if i == last { self.footer_text() } else { "" };
                Page {
                    number: number + 1,
                    total,
                    text: format!("{head}{}\n{tail}", blocks.join("\n")).trim().to_string(),
                    title_end: head.len(),
                }
            })
            .collect();

        Pages(pages)
    }

    /// Per-field lengths and page assignment, for inspection.
    pub fn layout(&self) -> PageLayout {
        let numbers = self.page_numbers();
        let rows = self
            .fields
            .iter()
            .zip(self.field_lengths())
            .zip(&numbers)
            .enumerate()
            .map(|(index, ((field, cumulative), &page))| LayoutRow {
                index,
                heading: field.heading.clone(),
                cumulative,
                page,
            })
            .collect();

        PageLayout {
            page_limit: self.page_limit,
            rows,
            page_starts: page_starts(&numbers),
        }
    }
}

impl fmt::Display for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
