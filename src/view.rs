//! Presentation model over a ranked result.
//!
//! A [`ResultsView`] is a window over a ranked slice: the top N entries,
//! optionally re-sorted by word or count, cut into fixed-size pages. The
//! slice itself is never reordered or modified.
//!
//! ```
//! use wordtally::frequency::RankedEntry;
//! use wordtally::view::{ResultsView, SortColumn, SortDirection};
//!
//! let ranked = vec![
//!     RankedEntry::new("fox", 3),
//!     RankedEntry::new("dog", 2),
//!     RankedEntry::new("cat", 1),
//! ];
//! let view = ResultsView::new(&ranked)
//!     .with_top_n(2)
//!     .with_sort(SortColumn::Word, SortDirection::Asc);
//!
//! let words: Vec<&str> = view.rows().iter().map(|e| e.word.as_str()).collect();
//! assert_eq!(words, vec!["dog", "fox"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, DEFAULT_PAGE_SIZE, DEFAULT_TOP_N};
use crate::frequency::ranking::RankedEntry;

/// Column a view can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Word,
    Count,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Clamp a requested top N into `[1, distinct]`.
///
/// With no distinct words there is nothing to show and the result is 0.
pub fn clamp_top_n(requested: i64, distinct: usize) -> usize {
    if distinct == 0 {
        return 0;
    }
    if requested <= 0 {
        return 1;
    }
    usize::try_from(requested).map_or(distinct, |n| n.min(distinct))
}

/// One page of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a> {
    /// Zero-based page index.
    pub index: usize,
    /// Number of pages in the view.
    pub page_count: usize,
    /// One-based position of the first row within the view.
    pub first_row: usize,
    /// Rows on this page.
    pub rows: Vec<&'a RankedEntry>,
}

/// A top-N, sortable, paginated window over ranked entries.
#[derive(Debug, Clone)]
pub struct ResultsView<'a> {
    entries: &'a [RankedEntry],
    top_n: usize,
    sort: Option<(SortColumn, SortDirection)>,
    page_size: usize,
}

impl<'a> ResultsView<'a> {
    /// Create a view with the default top N (at most 100) and page size.
    pub fn new(entries: &'a [RankedEntry]) -> Self {
        ResultsView {
            entries,
            top_n: entries.len().min(DEFAULT_TOP_N),
            sort: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create a view using the top N and page size of a configuration.
    pub fn from_config(entries: &'a [RankedEntry], config: &AnalysisConfig) -> Self {
        ResultsView {
            entries,
            top_n: entries.len().min(config.default_top_n),
            sort: None,
            page_size: config.page_size.max(1),
        }
    }

    /// Show the top `requested` entries, clamped to `[1, distinct]`.
    pub fn with_top_n(mut self, requested: i64) -> Self {
        self.top_n = clamp_top_n(requested, self.entries.len());
        self
    }

    /// Re-sort the visible rows.
    pub fn with_sort(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.sort = Some((column, direction));
        self
    }

    /// Set the number of rows per page (at least one).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Number of entries shown.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Number of distinct words available.
    pub fn distinct_words(&self) -> usize {
        self.entries.len()
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The active sort, if any.
    pub fn sort(&self) -> Option<(SortColumn, SortDirection)> {
        self.sort
    }

    /// The visible rows in display order.
    pub fn rows(&self) -> Vec<&'a RankedEntry> {
        let mut rows: Vec<&'a RankedEntry> = self.entries[..self.top_n].iter().collect();

        if let Some((column, direction)) = self.sort {
            // Stable, so equal keys keep their ranked order.
            rows.sort_by(|a, b| {
                let ordering = match column {
                    SortColumn::Word => a.word.cmp(&b.word),
                    SortColumn::Count => a.count.cmp(&b.count),
                };
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        rows
    }

    /// Number of pages; an empty view still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.top_n.div_ceil(self.page_size).max(1)
    }

    /// The page at `index`, or `None` past the last page.
    pub fn page(&self, index: usize) -> Option<Page<'a>> {
        let page_count = self.page_count();
        if index >= page_count {
            return None;
        }

        let start = index * self.page_size;
        let rows: Vec<&'a RankedEntry> = self
            .rows()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        Some(Page {
            index,
            page_count,
            first_row: start + 1,
            rows,
        })
    }
}
