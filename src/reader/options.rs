//! Reading options and configuration.

/// Options for reading tabular input into a deck.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// CSV field delimiter (ignored for Excel input)
    pub delimiter: u8,

    /// Trim surrounding whitespace from every cell
    pub trim: bool,

    /// How to treat the first row
    pub header: HeaderMode,
}

impl ReadOptions {
    /// Create new read options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSV field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable cell trimming.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set the header mode.
    pub fn with_header(mut self, header: HeaderMode) -> Self {
        self.header = header;
        self
    }

    /// Always skip the first row.
    pub fn skip_header(mut self) -> Self {
        self.header = HeaderMode::Skip;
        self
    }

    /// Always keep the first row as card data.
    pub fn keep_header(mut self) -> Self {
        self.header = HeaderMode::Keep;
        self
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            header: HeaderMode::Auto,
        }
    }
}

/// How the first input row is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// Skip the first row iff column A's first cell, lower-cased, is one
    /// of `"column a"`, `"a"`, or `"front"`
    #[default]
    Auto,
    /// Always skip the first row
    Skip,
    /// Always treat the first row as card data
    Keep,
}

/// The auto-detection rule: header markers recognized in column A's
/// first cell.
pub(super) fn is_header_marker(cell: &str) -> bool {
    matches!(
        cell.trim().to_lowercase().as_str(),
        "column a" | "a" | "front"
    )
}
