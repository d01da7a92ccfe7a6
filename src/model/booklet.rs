//! The collected booklet: all pages plus summary counts.

use super::Page;
use serde::Serialize;

/// A fully paginated booklet, the top-level value for JSON output.
///
/// Pagination itself is lazy; collect into a `Booklet` when the whole
/// page plan is wanted at once (typical decks are small).
#[derive(Debug, Clone, Serialize)]
pub struct Booklet {
    /// Grid columns per page
    pub columns: usize,

    /// Grid rows per page
    pub rows: usize,

    /// Front entries in the source deck
    pub front_count: usize,

    /// Back entries in the source deck
    pub back_count: usize,

    /// Cards in the deck: the longer of the two columns
    pub card_count: usize,

    /// Total pages (always even: one front and one back per block)
    pub page_count: usize,

    /// The pages, in page-number order
    pub pages: Vec<Page>,
}

impl Booklet {
    /// Pages carrying the given side.
    pub fn side_pages(&self, side: super::Side) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(move |p| p.side == side)
    }
}
