//! The cell-index mapping and page-sequence generator.

use crate::model::{Booklet, Cell, Deck, GridShape, Page, Side};

/// Number of blocks needed for the deck: `ceil(card_count / cells_per_page)`.
pub fn block_count(deck: &Deck, grid: GridShape) -> usize {
    deck.card_count().div_ceil(grid.cells_per_page())
}

/// Total pages for the deck. Always even: each block emits one front
/// page and one back page drawing from the same index range.
pub fn page_count(deck: &Deck, grid: GridShape) -> usize {
    block_count(deck, grid) * 2
}

fn cell(deck: &Deck, side: Side, row: usize, col: usize, index: usize) -> Cell {
    let text = deck.text(side, index);
    Cell {
        row,
        col,
        source: text.map(|_| index),
        label: format!("{}{}", index + 1, side.letter()),
        text: text.unwrap_or_default().to_string(),
    }
}

/// The front page of block `b`: page number `2b + 1`.
///
/// Cells map in row-major order, left to right and top to bottom, so the
/// page reads like the front column itself: cell `(row, col)` draws
/// source index `b*cpp + row*columns + col`.
pub fn front_page(deck: &Deck, grid: GridShape, block: usize) -> Page {
    let cmr = block * grid.cells_per_page();
    let mut cells = Vec::with_capacity(grid.cells_per_page());

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let index = cmr + row * grid.columns() + col;
            cells.push(cell(deck, Side::Front, row, col, index));
        }
    }

    Page {
        number: 2 * block + 1,
        side: Side::Front,
        block,
        cells,
    }
}

/// The back page of block `b`: page number `2b + 2`.
///
/// Each row is mirrored relative to the front page: cell `(row, col)`
/// draws source index `b*cpp + row*columns + (columns - 1 - col)`. On
/// the standard 2-column grid this swaps the two cells of every row;
/// for wider grids the full-row mirror is the flip a physical side-edge
/// turn of the printed sheet needs.
pub fn back_page(deck: &Deck, grid: GridShape, block: usize) -> Page {
    let cmr = block * grid.cells_per_page();
    let mut cells = Vec::with_capacity(grid.cells_per_page());

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let index = cmr + row * grid.columns() + (grid.columns() - 1 - col);
            cells.push(cell(deck, Side::Back, row, col, index));
        }
    }

    Page {
        number: 2 * block + 2,
        side: Side::Back,
        block,
        cells,
    }
}

/// Compute a single page directly from its 1-based number.
///
/// Returns `None` for page 0 or any number past the end of the booklet.
/// `page(deck, grid, n)` equals the nth element of [`paginate`] without
/// generating the pages before it.
pub fn page(deck: &Deck, grid: GridShape, number: usize) -> Option<Page> {
    if number == 0 || number > page_count(deck, grid) {
        return None;
    }
    let block = (number - 1) / 2;
    Some(match Side::of_page(number) {
        Side::Front => front_page(deck, grid, block),
        Side::Back => back_page(deck, grid, block),
    })
}

/// Lazily generate the booklet's pages in page-number order.
///
/// The iterator is restartable (call again with the same inputs) and
/// terminates once the longer of the two columns is exhausted. An empty
/// deck yields no pages.
pub fn paginate(deck: &Deck, grid: GridShape) -> Paginator<'_> {
    Paginator {
        deck,
        grid,
        next: 1,
        total: page_count(deck, grid),
    }
}

/// Collect the full page plan into a [`Booklet`].
pub fn booklet(deck: &Deck, grid: GridShape) -> Booklet {
    Booklet {
        columns: grid.columns(),
        rows: grid.rows(),
        front_count: deck.front().len(),
        back_count: deck.back().len(),
        card_count: deck.card_count(),
        page_count: page_count(deck, grid),
        pages: paginate(deck, grid).collect(),
    }
}

/// Iterator over a deck's pages, front and back alternating per block.
#[derive(Debug, Clone)]
pub struct Paginator<'a> {
    deck: &'a Deck,
    grid: GridShape,
    next: usize,
    total: usize,
}

impl Iterator for Paginator<'_> {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        if self.next > self.total {
            return None;
        }
        let page = page(self.deck, self.grid, self.next);
        self.next += 1;
        page
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total + 1 - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Paginator<'_> {}

impl std::iter::FusedIterator for Paginator<'_> {}
