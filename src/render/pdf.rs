//! Booklet PDF assembly.
//!
//! Consumes the paginator's page descriptors and produces the printable
//! PDF: one output page per descriptor, cell text centered with the
//! built-in Helvetica font, optional border and separator lines between
//! cells.

use log::debug;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Page;

use super::{metrics, mm_to_pt, RenderOptions};

/// Horizontal padding inside a cell, per side.
const CELL_PADDING_MM: f32 = 2.0;
/// Line spacing as a multiple of the font size.
const LEADING: f32 = 1.2;
/// Baseline sits roughly this fraction of the font size below a line's
/// visual center.
const BASELINE_DROP: f32 = 0.35;

/// Render a page sequence into PDF bytes.
///
/// Errors with [`Error::EmptyDeck`] when the sequence yields no pages;
/// a zero-page PDF is never written.
pub fn to_pdf<I>(pages: I, options: &RenderOptions) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = Page>,
{
    let (width, height) = options.paper.dimensions_pt();
    let margin = mm_to_pt(options.margin_mm);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        debug!("rendering page {} ({})", page.number, page.side);

        let content = Content {
            operations: page_operations(&page, width, height, margin, options),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    if kids.is_empty() {
        return Err(Error::EmptyDeck);
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(info_dictionary(options));
    doc.trailer.set("Info", info_id);

    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

/// Render a page sequence straight to a file.
pub fn write_pdf<I, P>(pages: I, options: &RenderOptions, path: P) -> Result<()>
where
    I: IntoIterator<Item = Page>,
    P: AsRef<Path>,
{
    let bytes = to_pdf(pages, options)?;
    fs::write(path, bytes)?;
    Ok(())
}

fn page_operations(
    page: &Page,
    width: f32,
    height: f32,
    margin: f32,
    options: &RenderOptions,
) -> Vec<Operation> {
    let columns = page.columns().max(1);
    let rows = page.rows().max(1);
    let cell_width = (width - 2.0 * margin) / columns as f32;
    let cell_height = (height - 2.0 * margin) / rows as f32;

    let mut ops = Vec::new();

    if options.grid_lines {
        grid_operations(&mut ops, width, height, margin, columns, rows);
    }

    for cell in &page.cells {
        let x0 = margin + cell.col as f32 * cell_width;
        let y_top = height - margin - cell.row as f32 * cell_height;

        if !cell.text.is_empty() {
            let max_width = cell_width - 2.0 * mm_to_pt(CELL_PADDING_MM);
            let lines = metrics::wrap(&cell.text, options.font_size, max_width);
            text_operations(
                &mut ops,
                &lines,
                options.font_size,
                x0 + cell_width / 2.0,
                y_top - cell_height / 2.0,
            );
        }

        if options.show_coords {
            let size = (options.font_size * 0.6).max(4.0);
            let inset = mm_to_pt(1.0);
            ops.push(Operation::new("BT", vec![]));
            ops.push(Operation::new("Tf", vec!["F1".into(), size.into()]));
            ops.push(Operation::new(
                "Td",
                vec![(x0 + inset).into(), (y_top - inset - size).into()],
            ));
            ops.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_text(&cell.label))],
            ));
            ops.push(Operation::new("ET", vec![]));
        }
    }

    ops
}

/// Centered text block: one BT/ET pair per wrapped line.
fn text_operations(
    ops: &mut Vec<Operation>,
    lines: &[String],
    font_size: f32,
    center_x: f32,
    center_y: f32,
) {
    let leading = font_size * LEADING;
    let top_offset = (lines.len() as f32 - 1.0) / 2.0 * leading;

    ops.push(Operation::new("rg", vec![0.into(), 0.into(), 0.into()]));
    for (i, line) in lines.iter().enumerate() {
        let x = center_x - metrics::text_width(line, font_size) / 2.0;
        let y = center_y + top_offset - i as f32 * leading - font_size * BASELINE_DROP;

        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Tf", vec!["F1".into(), font_size.into()]));
        ops.push(Operation::new("Td", vec![x.into(), y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_text(line))],
        ));
        ops.push(Operation::new("ET", vec![]));
    }
}

/// Page border plus the separator lines between cells.
fn grid_operations(
    ops: &mut Vec<Operation>,
    width: f32,
    height: f32,
    margin: f32,
    columns: usize,
    rows: usize,
) {
    let inner_width = width - 2.0 * margin;
    let inner_height = height - 2.0 * margin;
    let cell_width = inner_width / columns as f32;
    let cell_height = inner_height / rows as f32;

    ops.push(Operation::new("w", vec![0.5f32.into()]));
    ops.push(Operation::new("RG", vec![0.into(), 0.into(), 0.into()]));

    ops.push(Operation::new(
        "re",
        vec![
            margin.into(),
            margin.into(),
            inner_width.into(),
            inner_height.into(),
        ],
    ));
    ops.push(Operation::new("S", vec![]));

    for col in 1..columns {
        let x = margin + col as f32 * cell_width;
        ops.push(Operation::new("m", vec![x.into(), margin.into()]));
        ops.push(Operation::new("l", vec![x.into(), (height - margin).into()]));
        ops.push(Operation::new("S", vec![]));
    }

    for row in 1..rows {
        let y = height - margin - row as f32 * cell_height;
        ops.push(Operation::new("m", vec![margin.into(), y.into()]));
        ops.push(Operation::new("l", vec![(width - margin).into(), y.into()]));
        ops.push(Operation::new("S", vec![]));
    }
}

/// Map text to WinAnsi bytes. Latin-1 code points pass through (WinAnsi
/// agrees with Latin-1 outside the 0x80..0x9F gap); anything else
/// becomes '?'.
fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 0xFF {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}

fn info_dictionary(options: &RenderOptions) -> Dictionary {
    let mut info = Dictionary::new();
    info.set(
        "Producer",
        Object::string_literal(format!("cardpress {}", env!("CARGO_PKG_VERSION"))),
    );
    info.set(
        "CreationDate",
        Object::string_literal(format!("D:{}", chrono::Utc::now().format("%Y%m%d%H%M%SZ"))),
    );
    if let Some(ref title) = options.title {
        info.set("Title", Object::string_literal(encode_text(title)));
    }
    info
}
