//! Error types for the cardpress library.

use std::io;
use thiserror::Error;

/// Result type alias for cardpress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a booklet.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file is not a recognized tabular format.
    #[error("Unknown file format: expected .csv, .xlsx, or .xls")]
    UnknownFormat,

    /// Error parsing a CSV input file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error reading an Excel workbook.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// Error assembling or writing the output PDF.
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Grid dimensions that cannot tile a page.
    #[error("Invalid grid shape: {columns}x{rows} (columns and rows must be at least 1)")]
    InvalidGrid {
        /// Requested column count
        columns: usize,
        /// Requested row count
        rows: usize,
    },

    /// Both input columns are empty.
    #[error("No card data found in columns A and B")]
    EmptyDeck,

    /// The workbook has no worksheets to read.
    #[error("Workbook has no worksheet at index {0}")]
    MissingWorksheet(usize),

    /// Error during rendering (PDF, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
