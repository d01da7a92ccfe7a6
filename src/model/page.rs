//! Page-level types emitted by the paginator.

use serde::{Deserialize, Serialize};

/// The logical side of a flashcard page.
///
/// Odd page numbers carry front text, even page numbers carry back text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Column A, rendered in natural reading order
    Front,
    /// Column B, rendered row-mirrored so a flipped sheet lines up
    Back,
}

impl Side {
    /// Diagnostic letter used in cell labels: `A` for front, `B` for back.
    pub fn letter(&self) -> char {
        match self {
            Side::Front => 'A',
            Side::Back => 'B',
        }
    }

    /// The side printed on the page with the given 1-based number.
    pub fn of_page(number: usize) -> Side {
        if number % 2 == 1 {
            Side::Front
        } else {
            Side::Back
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Front => write!(f, "Front"),
            Side::Back => write!(f, "Back"),
        }
    }
}

/// One grid position on a page, resolved to a source index or blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Row within the page grid (0-based, top to bottom)
    pub row: usize,

    /// Column within the page grid (0-based, left to right)
    pub col: usize,

    /// Index into the side's column, or `None` when the computed index
    /// falls past the end of that column (a blank cell)
    pub source: Option<usize>,

    /// Diagnostic label, e.g. `"12A"`: the 1-based input row number plus
    /// the side letter. Computed from the cell's index even for blanks.
    pub label: String,

    /// Resolved text to draw; empty for blank cells, never absent
    pub text: String,
}

impl Cell {
    /// Whether this cell renders as blank.
    pub fn is_blank(&self) -> bool {
        self.source.is_none()
    }
}

/// One page of the booklet: a side tag plus a dense cell list.
///
/// Cells are ordered row-major by grid position (row 0 left to right,
/// then row 1, and so on), regardless of which source indices they map
/// to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Sequential page number, 1-based
    pub number: usize,

    /// Which side of the cards this page carries
    pub side: Side,

    /// The block of card indices this page draws from, 0-based
    pub block: usize,

    /// Cell assignments in grid-position order
    pub cells: Vec<Cell>,
}

impl Page {
    /// Look up the cell at a grid position.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    /// Number of grid columns, derived from the dense cell list.
    pub fn columns(&self) -> usize {
        self.cells.iter().map(|c| c.col + 1).max().unwrap_or(0)
    }

    /// Number of grid rows, derived from the dense cell list.
    pub fn rows(&self) -> usize {
        self.cells.iter().map(|c| c.row + 1).max().unwrap_or(0)
    }

    /// Whether this is a front page.
    pub fn is_front(&self) -> bool {
        self.side == Side::Front
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_of_page() {
        assert_eq!(Side::of_page(1), Side::Front);
        assert_eq!(Side::of_page(2), Side::Back);
        assert_eq!(Side::of_page(37), Side::Front);
    }

    #[test]
    fn test_side_letters() {
        assert_eq!(Side::Front.letter(), 'A');
        assert_eq!(Side::Back.letter(), 'B');
    }

    #[test]
    fn test_page_cell_lookup() {
        let page = Page {
            number: 1,
            side: Side::Front,
            block: 0,
            cells: vec![
                Cell {
                    row: 0,
                    col: 0,
                    source: Some(0),
                    label: "1A".into(),
                    text: "dog".into(),
                },
                Cell {
                    row: 0,
                    col: 1,
                    source: None,
                    label: "2A".into(),
                    text: String::new(),
                },
            ],
        };

        assert_eq!(page.cell(0, 0).unwrap().text, "dog");
        assert!(page.cell(0, 1).unwrap().is_blank());
        assert!(page.cell(1, 0).is_none());
        assert_eq!(page.columns(), 2);
        assert_eq!(page.rows(), 1);
    }
}
