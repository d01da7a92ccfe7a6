//! CSV deck reader.

use super::{clean, into_deck, ReadOptions};
use crate::error::Result;
use crate::model::Deck;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a deck from any CSV source.
///
/// Rows may be ragged; a row shorter than two fields contributes an
/// empty back cell. If no row in the whole file has a second field, the
/// back column is left empty rather than filled with blanks.
pub fn read_csv_reader<R: Read>(reader: R, options: &ReadOptions) -> Result<Deck> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut front = Vec::new();
    let mut back = Vec::new();
    let mut saw_column_b = false;

    for record in csv_reader.records() {
        let record = record?;
        front.push(clean(record.get(0).unwrap_or_default(), options));
        match record.get(1) {
            Some(cell) => {
                saw_column_b = true;
                back.push(clean(cell, options));
            }
            None => back.push(String::new()),
        }
    }

    if !saw_column_b {
        back.clear();
    }

    Ok(into_deck(front, back, options))
}

/// Read a deck from a CSV file.
pub fn read_csv_file<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Deck> {
    let file = File::open(path)?;
    read_csv_reader(file, options)
}
