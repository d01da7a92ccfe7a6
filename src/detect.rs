//! Input format detection for tabular files.

use crate::error::{Error, Result};
use std::path::Path;

/// Supported tabular input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values (or another single-byte delimiter)
    Csv,
    /// Office Open XML workbook (.xlsx)
    Xlsx,
    /// Legacy binary Excel workbook (.xls)
    Xls,
}

impl TableFormat {
    /// Whether this format is read through the spreadsheet backend.
    pub fn is_spreadsheet(&self) -> bool {
        matches!(self, TableFormat::Xlsx | TableFormat::Xls)
    }
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableFormat::Csv => write!(f, "CSV"),
            TableFormat::Xlsx | TableFormat::Xls => write!(f, "Excel"),
        }
    }
}

/// XLSX files are ZIP containers: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// Legacy XLS files are OLE2 compound documents.
const OLE2_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Detect the input format from a file extension.
///
/// # Arguments
/// * `path` - Path to the input file
///
/// # Returns
/// * `Ok(TableFormat)` for `.csv`, `.xlsx`, and `.xls` (case-insensitive)
/// * `Err(Error::UnknownFormat)` for anything else
///
/// # Example
/// ```
/// use cardpress::detect::{detect_format_from_path, TableFormat};
///
/// let format = detect_format_from_path("words.csv").unwrap();
/// assert_eq!(format, TableFormat::Csv);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<TableFormat> {
    let ext = path
        .as_ref()
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => Ok(TableFormat::Csv),
        "xlsx" => Ok(TableFormat::Xlsx),
        "xls" => Ok(TableFormat::Xls),
        _ => Err(Error::UnknownFormat),
    }
}

/// Check if bytes look like a ZIP container (the envelope of .xlsx files).
pub fn is_zip_container(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

/// Check if bytes look like an OLE2 compound document (legacy .xls).
pub fn is_ole2_container(data: &[u8]) -> bool {
    data.starts_with(OLE2_MAGIC)
}

/// Check if a path names a supported tabular input.
pub fn is_supported<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_csv() {
        assert_eq!(
            detect_format_from_path("deck.csv").unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            detect_format_from_path("DECK.CSV").unwrap(),
            TableFormat::Csv
        );
    }

    #[test]
    fn test_detect_excel() {
        assert_eq!(
            detect_format_from_path("deck.xlsx").unwrap(),
            TableFormat::Xlsx
        );
        assert_eq!(
            detect_format_from_path("deck.xls").unwrap(),
            TableFormat::Xls
        );
        assert!(detect_format_from_path("deck.xlsx").unwrap().is_spreadsheet());
    }

    #[test]
    fn test_detect_unsupported() {
        assert!(matches!(
            detect_format_from_path("deck.pdf"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_path("no_extension"),
            Err(Error::UnknownFormat)
        ));
        assert!(!is_supported("deck.txt"));
    }

    #[test]
    fn test_container_signatures() {
        assert!(is_zip_container(b"PK\x03\x04rest of file"));
        assert!(!is_zip_container(b"front,back\n"));
        assert!(is_ole2_container(&[
            0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0x00
        ]));
        assert!(!is_ole2_container(b"PK\x03\x04"));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(TableFormat::Csv.to_string(), "CSV");
        assert_eq!(TableFormat::Xlsx.to_string(), "Excel");
    }
}
