//! Deck-level types.

use super::Side;
use serde::{Deserialize, Serialize};

/// The two ordered columns of card text, front and back.
///
/// Either side may be shorter than the other; positions past the end of
/// a side render as blank cells. A deck is immutable once pagination
/// begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    front: Vec<String>,
    back: Vec<String>,
}

impl Deck {
    /// Create a deck from two parsed columns.
    pub fn new(front: Vec<String>, back: Vec<String>) -> Self {
        Self { front, back }
    }

    /// Number of cards: the longer of the two columns.
    pub fn card_count(&self) -> usize {
        self.front.len().max(self.back.len())
    }

    /// Check if both columns are empty.
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Front entries in input order.
    pub fn front(&self) -> &[String] {
        &self.front
    }

    /// Back entries in input order.
    pub fn back(&self) -> &[String] {
        &self.back
    }

    /// Entry at `index` on the given side, or `None` past the end of
    /// that column.
    pub fn text(&self, side: Side, index: usize) -> Option<&str> {
        let column = match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        };
        column.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Deck {
        Deck::new(
            vec!["dog".into(), "cat".into(), "bird".into()],
            vec!["Hund".into(), "Katze".into()],
        )
    }

    #[test]
    fn test_card_count_is_longer_column() {
        assert_eq!(sample().card_count(), 3);
        assert_eq!(Deck::new(vec![], vec!["x".into()]).card_count(), 1);
    }

    #[test]
    fn test_text_lookup() {
        let deck = sample();
        assert_eq!(deck.text(Side::Front, 0), Some("dog"));
        assert_eq!(deck.text(Side::Back, 1), Some("Katze"));
        // back column is shorter
        assert_eq!(deck.text(Side::Back, 2), None);
        assert_eq!(deck.text(Side::Front, 3), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(Deck::new(vec![], vec![]).is_empty());
        assert!(!sample().is_empty());
    }
}
