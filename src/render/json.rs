//! JSON output for the page plan.

use crate::error::{Error, Result};
use crate::model::Booklet;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Indented, human-readable
    Pretty,
    /// Single line, minimal size
    Compact,
}

/// Serialize a booklet's page plan to JSON.
pub fn to_json(booklet: &Booklet, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(booklet),
        JsonFormat::Compact => serde_json::to_string(booklet),
    };
    result.map_err(|e| Error::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::booklet;
    use crate::model::{Deck, GridShape};

    #[test]
    fn test_json_roundtrip_fields() {
        let deck = Deck::new(
            vec!["dog".into(), "cat".into()],
            vec!["Hund".into(), "Katze".into()],
        );
        let plan = booklet(&deck, GridShape::default());

        let json = to_json(&plan, JsonFormat::Compact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["card_count"], 2);
        assert_eq!(value["page_count"], 2);
        assert_eq!(value["columns"], 2);
        assert_eq!(value["pages"][0]["side"], "front");
        assert_eq!(value["pages"][0]["cells"][0]["text"], "dog");
        assert_eq!(value["pages"][1]["cells"][0]["label"], "2B");

        let pretty = to_json(&plan, JsonFormat::Pretty).unwrap();
        assert!(pretty.contains('\n'));
    }
}
