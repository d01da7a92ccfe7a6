//! Tabular input readers.
//!
//! Both readers extract the first two columns of their source into a
//! [`Deck`]: column A holds front text, column B holds back text.
//! Missing or empty cells become empty strings, never gaps. A source
//! with only one column yields a deck with an empty back column.

mod csv;
mod excel;
mod options;

pub use options::{HeaderMode, ReadOptions};

pub use self::csv::{read_csv_file, read_csv_reader};
pub use self::excel::read_workbook;

use crate::detect::{detect_format_from_path, TableFormat};
use crate::error::Result;
use crate::model::Deck;
use std::path::Path;

/// Read a deck from a CSV or Excel file, dispatching on the extension.
pub fn read_file<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Deck> {
    match detect_format_from_path(&path)? {
        TableFormat::Csv => read_csv_file(path, options),
        TableFormat::Xlsx | TableFormat::Xls => read_workbook(path, options),
    }
}

/// Assemble the raw columns into a deck, applying the header rule.
fn into_deck(
    mut front: Vec<String>,
    mut back: Vec<String>,
    options: &ReadOptions,
) -> Deck {
    let skip = match options.header {
        HeaderMode::Skip => true,
        HeaderMode::Keep => false,
        HeaderMode::Auto => front
            .first()
            .is_some_and(|cell| options::is_header_marker(cell)),
    };

    if skip {
        if !front.is_empty() {
            front.remove(0);
        }
        if !back.is_empty() {
            back.remove(0);
        }
    }

    Deck::new(front, back)
}

fn clean(cell: &str, options: &ReadOptions) -> String {
    if options.trim {
        cell.trim().to_string()
    } else {
        cell.to_string()
    }
}
