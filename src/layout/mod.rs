//! Booklet pagination.
//!
//! Maps a [`Deck`](crate::model::Deck) and a grid shape onto a finite
//! sequence of [`Page`](crate::model::Page) descriptors. Odd pages carry
//! front text in row-major reading order; even pages carry back text with
//! each row mirrored left-to-right, so that a sheet flipped along its
//! side edge lines each card's back up with its front.
//!
//! Every page is a pure function of its block index, so pages can be
//! generated lazily in order, or computed directly by number.

mod paginator;

pub use paginator::{
    back_page, block_count, booklet, front_page, page, page_count, paginate, Paginator,
};
