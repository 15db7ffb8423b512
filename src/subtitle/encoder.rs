// Caption text to CEA-608 code words.
use super::charset::{self, FILLER_CODE};

/// Characters per caption row.
pub const ROW_WIDTH: usize = 32;

/// Preamble address codes for rows 0-3. Rows past the fourth get no
/// positional code and continue wherever the decoder's cursor is.
pub const ROW_POSITIONS: [&str; 4] = ["1340 1340", "13e0 13e0", "9440 9440", "94e0 94e0"];

/// Encode caption text as space separated 4-digit code words.
///
/// The text is cut into rows of [`ROW_WIDTH`] characters. Line breaks are not
/// treated specially: they are encoded (as unsupported characters) in place.
pub fn encode_line(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let rows: Vec<&[char]> = if chars.is_empty() {
        vec![&chars[..]]
    } else {
        chars.chunks(ROW_WIDTH).collect()
    };

    let mut words = Vec::with_capacity(rows.len() * 2);
    for (i, row) in rows.iter().enumerate() {
        if let Some(position) = ROW_POSITIONS.get(i) {
            words.push(position.to_string());
        }
        words.push(encode_chars(row));
    }

    words.join(" ").trim().to_string()
}

/// Encode one row. An even character count gets a trailing filler byte.
fn encode_chars(row: &[char]) -> String {
    let mut hex: String = row.iter().map(|&c| charset::lookup(c)).collect();
    if row.len() % 2 == 0 {
        hex.push_str(FILLER_CODE);
    }

    group_code_words(&hex)
}

fn group_code_words(hex: &str) -> String {
    let mut grouped = String::with_capacity(hex.len() + hex.len() / 4);
    for (i, c) in hex.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_even_row_gets_filler() {
        assert_eq!(encode_line("HI"), "1340 1340 c849 80");
    }

    #[test]
    fn test_encode_odd_row_has_no_filler() {
        assert_eq!(encode_line("Hi!"), "1340 1340 c8e9 a1");
        assert_eq!(encode_line("A"), "1340 1340 c1");
    }

    #[test]
    fn test_encode_empty_text() {
        assert_eq!(encode_line(""), "1340 1340 80");
    }

    #[test]
    fn test_encode_unsupported_character() {
        assert_eq!(encode_line("A€B"), "1340 1340 c17f c2");
    }

    #[test]
    fn test_encode_extended_character() {
        // two-byte codes shift the grouping
        assert_eq!(encode_line("©"), "1340 1340 92ab");
        assert_eq!(encode_line("a©"), "1340 1340 6192 ab80");
    }

    #[test]
    fn test_encode_line_break_is_encoded_inline() {
        assert_eq!(encode_line("A\r\nB"), "1340 1340 c17f 7fc2 80");
    }

    #[test]
    fn test_encode_splits_rows() {
        let text = "A".repeat(ROW_WIDTH + 1);
        let encoded = encode_line(&text);

        let first_row = format!("{} 80", vec!["c1c1"; 16].join(" "));
        assert_eq!(encoded, format!("1340 1340 {} 13e0 13e0 c1", first_row));
    }

    #[test]
    fn test_rows_past_fourth_have_no_position() {
        let text = "B".repeat(ROW_WIDTH * 4 + 1);
        let encoded = encode_line(&text);

        for position in ROW_POSITIONS {
            assert_eq!(encoded.matches(position).count(), 1);
        }
        assert!(encoded.ends_with(" 80 c2"));
    }

    #[test]
    fn test_group_code_words() {
        assert_eq!(group_code_words("c849"), "c849");
        assert_eq!(group_code_words("c84980"), "c849 80");
        assert_eq!(group_code_words(""), "");
    }
}
