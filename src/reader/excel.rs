//! Excel workbook deck reader.

use super::{clean, into_deck, ReadOptions};
use crate::error::{Error, Result};
use crate::model::Deck;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Read a deck from the first worksheet of an Excel workbook.
///
/// Handles both `.xlsx` and legacy `.xls` files. Cells are addressed by
/// absolute sheet position, so column A stays column A even when the
/// sheet's used range starts elsewhere. Non-text cells (numbers, dates,
/// booleans) are stringified.
pub fn read_workbook<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Deck> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(Error::MissingWorksheet(0))??;

    let mut front = Vec::new();
    let mut back = Vec::new();

    let (Some((start_row, _)), Some((end_row, end_col))) = (range.start(), range.end()) else {
        return Ok(Deck::new(front, back));
    };
    let has_column_b = end_col >= 1;

    for row in start_row..=end_row {
        front.push(
            range
                .get_value((row, 0))
                .map(|cell| cell_text(cell, options))
                .unwrap_or_default(),
        );
        if has_column_b {
            back.push(
                range
                    .get_value((row, 1))
                    .map(|cell| cell_text(cell, options))
                    .unwrap_or_default(),
            );
        }
    }

    Ok(into_deck(front, back, options))
}

fn cell_text(cell: &Data, options: &ReadOptions) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => clean(s, options),
        other => clean(&other.to_string(), options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_variants() {
        let options = ReadOptions::default();
        assert_eq!(cell_text(&Data::Empty, &options), "");
        assert_eq!(cell_text(&Data::String(" dog ".into()), &options), "dog");
        assert_eq!(cell_text(&Data::Int(7), &options), "7");
        assert_eq!(cell_text(&Data::Bool(true), &options), "true");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_workbook("does/not/exist.xlsx", &ReadOptions::default());
        assert!(result.is_err());
    }
}
