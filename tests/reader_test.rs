//! Integration tests for tabular input reading.

use cardpress::{detect_format_from_path, load_file, load_file_with_options};
use cardpress::{Error, ReadOptions, TableFormat};
use std::io::Write;
use tempfile::NamedTempFile;

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn reads_a_two_column_csv_file() {
    let file = csv_file("dog,Hund\ncat,Katze\nbird,Vogel\n");
    let deck = load_file(file.path()).unwrap();

    assert_eq!(deck.front(), ["dog", "cat", "bird"]);
    assert_eq!(deck.back(), ["Hund", "Katze", "Vogel"]);
    assert_eq!(deck.card_count(), 3);
}

#[test]
fn header_row_variants_are_skipped() {
    for header in ["Front,Back", "front,back", "A,B", "Column A,Column B"] {
        let file = csv_file(&format!("{header}\ndog,Hund\n"));
        let deck = load_file(file.path()).unwrap();
        assert_eq!(deck.front(), ["dog"], "header={header}");
    }
}

#[test]
fn data_that_looks_like_words_is_kept() {
    let file = csv_file("apple,Apfel\ndog,Hund\n");
    let deck = load_file(file.path()).unwrap();
    assert_eq!(deck.card_count(), 2);
}

#[test]
fn header_mode_overrides_detection() {
    let file = csv_file("apple,Apfel\ndog,Hund\n");
    let deck = load_file_with_options(file.path(), &ReadOptions::new().skip_header()).unwrap();
    assert_eq!(deck.front(), ["dog"]);

    let file = csv_file("Front,Back\ndog,Hund\n");
    let deck = load_file_with_options(file.path(), &ReadOptions::new().keep_header()).unwrap();
    assert_eq!(deck.front(), ["Front", "dog"]);
}

#[test]
fn missing_cells_become_empty_strings() {
    let file = csv_file("dog,Hund\nlonely\ncat,Katze\n");
    let deck = load_file(file.path()).unwrap();
    assert_eq!(deck.back(), ["Hund", "", "Katze"]);
}

#[test]
fn tab_delimited_input() {
    let file = csv_file("dog\tHund\ncat\tKatze\n");
    let deck =
        load_file_with_options(file.path(), &ReadOptions::new().with_delimiter(b'\t')).unwrap();
    assert_eq!(deck.front(), ["dog", "cat"]);
    assert_eq!(deck.back(), ["Hund", "Katze"]);
}

#[test]
fn unsupported_extension_is_rejected() {
    assert!(matches!(
        detect_format_from_path("words.txt"),
        Err(Error::UnknownFormat)
    ));
    assert!(matches!(load_file("words.txt"), Err(Error::UnknownFormat)));
}

#[test]
fn extension_dispatch() {
    assert_eq!(
        detect_format_from_path("words.csv").unwrap(),
        TableFormat::Csv
    );
    assert_eq!(
        detect_format_from_path("words.XLSX").unwrap(),
        TableFormat::Xlsx
    );
    assert_eq!(
        detect_format_from_path("words.xls").unwrap(),
        TableFormat::Xls
    );
}

#[test]
fn broken_workbook_is_an_error() {
    // a .xlsx that is not a ZIP container
    let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
    file.write_all(b"this is not a workbook").unwrap();
    file.flush().unwrap();

    let result = load_file(file.path());
    assert!(result.is_err());
}

#[test]
fn empty_file_loads_as_empty_deck() {
    let file = csv_file("");
    let deck = load_file(file.path()).unwrap();
    assert!(deck.is_empty());
}
