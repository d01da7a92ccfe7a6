//! # cardpress
//!
//! Turn two-column word lists into printable flashcard booklet PDFs.
//!
//! Column A of the input becomes the front of each card, column B the
//! back. Pages are tiled with a grid of cells; odd pages carry fronts in
//! reading order and even pages carry backs with each row mirrored, so
//! that printing double-sided (or gluing sheet pairs back to back) and
//! cutting along the grid yields cards whose sides line up.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cardpress::Cardpress;
//!
//! fn main() -> cardpress::Result<()> {
//!     let booklet = Cardpress::new().load("words.csv")?;
//!     println!("{} pages", booklet.page_count());
//!     booklet.write_pdf("words.pdf")?;
//!     Ok(())
//! }
//! ```
//!
//! Or drive the pieces directly:
//!
//! ```
//! use cardpress::{layout, Deck, GridShape};
//!
//! let deck = Deck::new(
//!     vec!["dog".into(), "cat".into()],
//!     vec!["Hund".into(), "Katze".into()],
//! );
//! let grid = GridShape::default();
//! for page in layout::paginate(&deck, grid) {
//!     println!("page {} is a {} page", page.number, page.side);
//! }
//! ```

pub mod detect;
pub mod error;
pub mod layout;
pub mod model;
pub mod reader;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_path, TableFormat};
pub use error::{Error, Result};
pub use layout::{booklet, page, page_count, paginate, Paginator};
pub use model::{Booklet, Cell, Deck, GridShape, Page, Side};
pub use reader::{read_file, HeaderMode, ReadOptions};
pub use render::{JsonFormat, PaperSize, RenderOptions};

use log::info;
use std::path::Path;

/// Read a deck from a CSV or Excel file with default options.
///
/// # Example
///
/// ```no_run
/// use cardpress::load_file;
///
/// let deck = load_file("words.csv").unwrap();
/// println!("Cards: {}", deck.card_count());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Deck> {
    load_file_with_options(path, &ReadOptions::default())
}

/// Read a deck from a CSV or Excel file with custom options.
pub fn load_file_with_options<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Deck> {
    let deck = reader::read_file(&path, options)?;
    info!(
        "loaded {} front / {} back entries from {}",
        deck.front().len(),
        deck.back().len(),
        path.as_ref().display()
    );
    Ok(deck)
}

/// One-call conversion: read a word list, write the booklet PDF.
///
/// Returns the number of pages written.
///
/// # Example
///
/// ```no_run
/// use cardpress::make_pdf;
///
/// let pages = make_pdf("words.csv", "words.pdf").unwrap();
/// println!("wrote {} pages", pages);
/// ```
pub fn make_pdf<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<usize> {
    Cardpress::new().load(input)?.write_pdf(output)
}

/// Builder for reading word lists and rendering booklets.
///
/// # Example
///
/// ```no_run
/// use cardpress::{Cardpress, GridShape, PaperSize};
///
/// let booklet = Cardpress::new()
///     .with_font_size(12.0)
///     .with_paper(PaperSize::A5)
///     .with_grid(GridShape::new(2, 4)?)
///     .skip_header()
///     .load("words.xlsx")?;
/// booklet.write_pdf("words.pdf")?;
/// # Ok::<(), cardpress::Error>(())
/// ```
pub struct Cardpress {
    read_options: ReadOptions,
    render_options: RenderOptions,
    grid: GridShape,
}

impl Cardpress {
    /// Create a new builder with the stock booklet layout (A6, 2x5).
    pub fn new() -> Self {
        Self {
            read_options: ReadOptions::default(),
            render_options: RenderOptions::default(),
            grid: GridShape::default(),
        }
    }

    /// Set the page grid shape.
    pub fn with_grid(mut self, grid: GridShape) -> Self {
        self.grid = grid;
        self
    }

    /// Set the CSV field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.read_options = self.read_options.with_delimiter(delimiter);
        self
    }

    /// Always skip the first input row.
    pub fn skip_header(mut self) -> Self {
        self.read_options = self.read_options.skip_header();
        self
    }

    /// Always keep the first input row as card data.
    pub fn keep_header(mut self) -> Self {
        self.read_options = self.read_options.keep_header();
        self
    }

    /// Set the text font size in points.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.render_options = self.render_options.with_font_size(size);
        self
    }

    /// Set the output paper size.
    pub fn with_paper(mut self, paper: PaperSize) -> Self {
        self.render_options = self.render_options.with_paper(paper);
        self
    }

    /// Set the page margin in millimeters.
    pub fn with_margin_mm(mut self, margin: f32) -> Self {
        self.render_options = self.render_options.with_margin_mm(margin);
        self
    }

    /// Disable the border and cell separator lines.
    pub fn without_grid_lines(mut self) -> Self {
        self.render_options = self.render_options.with_grid_lines(false);
        self
    }

    /// Print coordinate labels in cell corners.
    pub fn with_coords(mut self) -> Self {
        self.render_options = self.render_options.with_coords(true);
        self
    }

    /// Set the PDF document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Read a word list file and return a result wrapper.
    ///
    /// Errors with [`Error::EmptyDeck`] when the file holds no card data
    /// in either column.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<CardpressResult> {
        let deck = load_file_with_options(path, &self.read_options)?;
        self.build(deck)
    }

    /// Wrap an already-parsed deck.
    pub fn build(self, deck: Deck) -> Result<CardpressResult> {
        if deck.is_empty() {
            return Err(Error::EmptyDeck);
        }
        Ok(CardpressResult {
            deck,
            grid: self.grid,
            render_options: self.render_options,
        })
    }
}

impl Default for Cardpress {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded deck bound to a grid shape and render options.
pub struct CardpressResult {
    /// The parsed deck
    pub deck: Deck,
    grid: GridShape,
    render_options: RenderOptions,
}

impl CardpressResult {
    /// Total booklet pages for this deck and grid.
    pub fn page_count(&self) -> usize {
        layout::page_count(&self.deck, self.grid)
    }

    /// Collect the full page plan.
    pub fn booklet(&self) -> Booklet {
        layout::booklet(&self.deck, self.grid)
    }

    /// Render the booklet to PDF bytes.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        render::to_pdf(layout::paginate(&self.deck, self.grid), &self.render_options)
    }

    /// Render the booklet straight to a PDF file, returning the page count.
    pub fn write_pdf<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        render::write_pdf(
            layout::paginate(&self.deck, self.grid),
            &self.render_options,
            path,
        )?;
        Ok(self.page_count())
    }

    /// Render the text proof sheet of the page plan.
    pub fn to_plan_text(&self) -> String {
        render::to_text(layout::paginate(&self.deck, self.grid))
    }

    /// Serialize the page plan to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.booklet(), format)
    }

    /// The deck behind this result.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The grid shape in effect.
    pub fn grid(&self) -> GridShape {
        self.grid
    }
}
