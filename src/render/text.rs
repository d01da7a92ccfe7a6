//! Plain-text proof sheet of a page plan.

use crate::model::Page;

/// Render the page plan as readable text, one grid per page.
///
/// Each cell shows its coordinate label and text, e.g. `[11A: dog]`;
/// blank cells show only the label. Useful for previewing the cut
/// layout before committing to paper.
pub fn to_text<I>(pages: I) -> String
where
    I: IntoIterator<Item = Page>,
{
    let mut out = String::new();

    for page in pages {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!(
            "Page {} ({}, block {})\n",
            page.number, page.side, page.block
        ));

        let columns = page.columns().max(1);
        for chunk in page.cells.chunks(columns) {
            out.push_str("  ");
            for cell in chunk {
                if cell.text.is_empty() {
                    out.push_str(&format!("[{}]", cell.label));
                } else {
                    out.push_str(&format!("[{}: {}]", cell.label, cell.text));
                }
                out.push(' ');
            }
            out.pop();
            out.push('\n');
        }
    }

    out
}
