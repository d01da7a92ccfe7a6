//! Rendering options and configuration.

use super::mm_to_pt;

/// Options for rendering a booklet.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Output paper size
    pub paper: PaperSize,

    /// Page margin in millimeters
    pub margin_mm: f32,

    /// Text font size in points
    pub font_size: f32,

    /// Draw the page border and cell separator lines
    pub grid_lines: bool,

    /// Print each cell's coordinate label (e.g. "12A") in its corner
    pub show_coords: bool,

    /// Document title for the PDF metadata
    pub title: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paper size.
    pub fn with_paper(mut self, paper: PaperSize) -> Self {
        self.paper = paper;
        self
    }

    /// Set the page margin in millimeters.
    pub fn with_margin_mm(mut self, margin: f32) -> Self {
        self.margin_mm = margin;
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Enable or disable grid lines.
    pub fn with_grid_lines(mut self, draw: bool) -> Self {
        self.grid_lines = draw;
        self
    }

    /// Enable or disable coordinate labels.
    pub fn with_coords(mut self, show: bool) -> Self {
        self.show_coords = show;
        self
    }

    /// Set the PDF document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            paper: PaperSize::A6,
            margin_mm: 8.0,
            font_size: 10.0,
            grid_lines: true,
            show_coords: false,
            title: None,
        }
    }
}

/// Output paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSize {
    /// 210 x 297 mm
    A4,
    /// 148 x 210 mm
    A5,
    /// 105 x 148 mm, the classic pocket flashcard sheet
    #[default]
    A6,
    /// 8.5 x 11 in
    Letter,
}

impl PaperSize {
    /// Paper dimensions in millimeters, portrait orientation.
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::A6 => (105.0, 148.0),
            PaperSize::Letter => (215.9, 279.4),
        }
    }

    /// Paper dimensions in PostScript points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        (mm_to_pt(w), mm_to_pt(h))
    }
}

impl std::fmt::Display for PaperSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaperSize::A4 => write!(f, "A4"),
            PaperSize::A5 => write!(f, "A5"),
            PaperSize::A6 => write!(f, "A6"),
            PaperSize::Letter => write!(f, "Letter"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_paper(PaperSize::A5)
            .with_font_size(14.0)
            .with_grid_lines(false)
            .with_coords(true)
            .with_title("German A1");

        assert_eq!(options.paper, PaperSize::A5);
        assert_eq!(options.font_size, 14.0);
        assert!(!options.grid_lines);
        assert!(options.show_coords);
        assert_eq!(options.title.as_deref(), Some("German A1"));
    }

    #[test]
    fn test_defaults_match_the_printed_booklet() {
        let options = RenderOptions::default();
        assert_eq!(options.paper, PaperSize::A6);
        assert_eq!(options.margin_mm, 8.0);
        assert_eq!(options.font_size, 10.0);
        assert!(options.grid_lines);
        assert!(!options.show_coords);
    }

    #[test]
    fn test_paper_dimensions() {
        let (w, h) = PaperSize::A6.dimensions_pt();
        assert!((w - 297.64).abs() < 0.1);
        assert!((h - 419.53).abs() < 0.1);
        assert!(PaperSize::A4.dimensions_mm().0 > PaperSize::A5.dimensions_mm().0);
    }
}
