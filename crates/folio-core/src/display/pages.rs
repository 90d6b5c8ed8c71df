//! Page and page collection wrapper types.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::paginator::render::page_separator;

/// One page of a split document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based page number as displayed in separators
    pub number: usize,

    /// Displayed page count
    pub total: usize,

    /// Trimmed markdown content of the page
    pub text: String,

    /// Byte offset where the title line ends; zero unless this page opens
    /// the document
    #[serde(skip)]
    pub title_end: usize,
}

impl Page {
    /// Splits the text into the title line and the field blocks after it.
    fn split_title(&self) -> (&str, &str) {
        let end = self.title_end.min(self.text.len());
        match (self.text.get(..end), self.text.get(end..)) {
            (Some(title), Some(rest)) => (title, rest),
            _ => ("", &self.text),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Newtype wrapper for the ordered pages of a document.
///
/// Displays exactly what [`Paginator::render`](crate::Paginator::render)
/// produces: when the document spans more than one page number, every page
/// is preceded by its separator line, the first one placed after the title.
///
/// # Examples
///
/// ```rust
/// use folio_core::{PageLimit, Paginator};
///
/// let mut paginator = Paginator::new("Title").page_limit(PageLimit::new(10)?);
/// paginator.add_field("One", "first", true);
/// paginator.add_field("Two", "second", true);
///
/// let pages = paginator.pages();
/// assert_eq!(pages.len(), 2);
/// assert_eq!(pages[0].text, "# Title\n## One\nfirst");
/// assert_eq!(pages[1].text, "## Two\nsecond");
/// assert_eq!(pages.to_string(), paginator.render());
/// # Ok::<(), folio_core::FolioError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pages(pub Vec<Page>);

impl Pages {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of pages in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the page at the given index.
    pub fn get(&self, index: usize) -> Option<&Page> {
        self.0.get(index)
    }

    /// Get an iterator over the pages.
    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.0.iter()
    }

    /// Page texts in order, ready to hand to a transport.
    pub fn into_texts(self) -> Vec<String> {
        self.0.into_iter().map(|page| page.text).collect()
    }
}

impl Index<usize> for Pages {
    type Output = Page;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Pages {
    type Item = Page;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pages {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Pages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbered = self.0.first().is_some_and(|page| page.total > 1);
        if !numbered {
            return self.0.iter().try_for_each(|page| write!(f, "{page}"));
        }

        for (i, page) in self.0.iter().enumerate() {
            let separator = page_separator(page.number, page.total);
            if i == 0 {
                let (title, rest) = page.split_title();
                write!(f, "{title}\n{separator}\n{rest}")?;
            } else {
                write!(f, "\n\n{separator}\n\n{page}")?;
            }
        }
        Ok(())
    }
}
