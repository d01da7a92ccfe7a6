//! Grid shape of a booklet page.

use crate::error::{Error, Result};
use serde::Serialize;

/// The cell grid a page is divided into.
///
/// Validated at construction: columns and rows must both be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridShape {
    columns: usize,
    rows: usize,
}

impl GridShape {
    /// Create a grid shape, rejecting degenerate dimensions.
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(Error::InvalidGrid { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cells per page (`columns * rows`), the size of one card block.
    pub fn cells_per_page(&self) -> usize {
        self.columns * self.rows
    }
}

impl Default for GridShape {
    /// The booklet layout of the printed A6 sheets: 2 columns by 5 rows.
    fn default() -> Self {
        Self {
            columns: 2,
            rows: 5,
        }
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_shape() {
        let grid = GridShape::new(2, 5).unwrap();
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cells_per_page(), 10);
    }

    #[test]
    fn test_default_is_two_by_five() {
        let grid = GridShape::default();
        assert_eq!(grid.cells_per_page(), 10);
        assert_eq!(grid.to_string(), "2x5");
    }

    #[test]
    fn test_degenerate_shapes_rejected() {
        assert!(matches!(
            GridShape::new(0, 5),
            Err(Error::InvalidGrid {
                columns: 0,
                rows: 5
            })
        ));
        assert!(matches!(GridShape::new(2, 0), Err(Error::InvalidGrid { .. })));
        assert!(matches!(GridShape::new(0, 0), Err(Error::InvalidGrid { .. })));
    }
}
