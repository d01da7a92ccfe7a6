//! Text measurement and wrapping for the built-in Helvetica font.
//!
//! Advance widths come from the standard Helvetica AFM, in 1/1000ths of
//! the font size, covering the printable ASCII range. Characters outside
//! the table fall back to an average width, which keeps centering
//! reasonable for accented Latin text.

/// Helvetica advance widths for characters 0x20..=0x7E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, // 'A'..'P'
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'Q'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, // 'a'..'p'
    556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'q'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Fallback width for characters outside the table.
const DEFAULT_WIDTH: u16 = 556;

fn char_width(c: char) -> u16 {
    let code = c as u32;
    match code {
        0x20..=0x7E => HELVETICA_WIDTHS[(code - 0x20) as usize],
        _ => DEFAULT_WIDTH,
    }
}

/// Width of a string in points at the given font size.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c) as u32).sum();
    units as f32 * font_size / 1000.0
}

/// Greedy word-wrap to a maximum line width in points.
///
/// Words that alone exceed the width are broken mid-word so no line ever
/// overflows. Returns no lines for blank input.
pub fn wrap(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if text_width(&candidate, font_size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width(word, font_size) <= max_width {
            current = word.to_string();
        } else {
            current = break_word(word, font_size, max_width, &mut lines);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split an overlong word into full lines, returning the unfinished tail.
fn break_word(word: &str, font_size: f32, max_width: f32, lines: &mut Vec<String>) -> String {
    let mut piece = String::new();
    for c in word.chars() {
        piece.push(c);
        if text_width(&piece, font_size) > max_width && piece.chars().count() > 1 {
            let tail = piece.pop().unwrap_or_default();
            lines.push(std::mem::take(&mut piece));
            piece.push(tail);
        }
    }
    piece
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        // 'i' is narrow, 'W' is wide
        assert!(text_width("i", 10.0) < text_width("W", 10.0));
        // space = 278/1000 * 10pt
        assert!((text_width(" ", 10.0) - 2.78).abs() < 1e-4);
        assert!((text_width("00", 10.0) - 11.12).abs() < 1e-3);
    }

    #[test]
    fn test_width_scales_with_font_size() {
        let narrow = text_width("hello", 10.0);
        let wide = text_width("hello", 20.0);
        assert!((wide - 2.0 * narrow).abs() < 1e-4);
    }

    #[test]
    fn test_no_wrap_needed() {
        let lines = wrap("short", 10.0, 200.0);
        assert_eq!(lines, vec!["short"]);
    }

    #[test]
    fn test_wrap_on_spaces() {
        // each word ~25pt wide at size 10, force one word per line
        let lines = wrap("alpha beta gamma", 10.0, 35.0);
        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_wrap_packs_words() {
        let lines = wrap("a b c d", 10.0, 1000.0);
        assert_eq!(lines, vec!["a b c d"]);
    }

    #[test]
    fn test_overlong_word_is_broken() {
        let lines = wrap("incomprehensibilities", 10.0, 30.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 10.0) <= 30.0 + 6.0); // one-char overshoot at most
            assert!(!line.is_empty());
        }
        let rejoined: String = lines.concat();
        assert_eq!(rejoined, "incomprehensibilities");
    }

    #[test]
    fn test_blank_input_yields_no_lines() {
        assert!(wrap("", 10.0, 100.0).is_empty());
        assert!(wrap("   ", 10.0, 100.0).is_empty());
    }
}
