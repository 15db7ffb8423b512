//! CEA-608 character codes as written in SCC files.
//!
//! Standard characters take one byte (two hex digits, odd parity applied);
//! special and extended characters take a two-byte code prefixed with the
//! channel 1 control byte (`91`, `92` or `13`).

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Code emitted for any character the table does not cover. Decodes to
/// nothing.
pub const FALLBACK_CODE: &str = "7f";

/// Padding byte used to complete a code word.
pub const FILLER_CODE: &str = "80";

/// Every code/character pair, keyed by hex code.
///
/// `7f`, `80` and `91b9` (transparent space) decode to an empty string and
/// are never produced by character lookup.
pub const CHARACTER_CODES: &[(&str, &str)] = &[
    ("20", " "),
    ("a1", "!"),
    ("a2", "\""),
    ("23", "#"),
    ("a4", "$"),
    ("25", "%"),
    ("26", "&"),
    ("a7", "'"),
    ("a8", "("),
    ("29", ")"),
    ("2a", "á"),
    ("ab", "+"),
    ("2c", ","),
    ("ad", "-"),
    ("ae", "."),
    ("2f", "/"),
    ("b0", "0"),
    ("31", "1"),
    ("32", "2"),
    ("b3", "3"),
    ("34", "4"),
    ("b5", "5"),
    ("b6", "6"),
    ("37", "7"),
    ("38", "8"),
    ("b9", "9"),
    ("ba", ":"),
    ("3b", ";"),
    ("bc", "<"),
    ("3d", "="),
    ("3e", ">"),
    ("bf", "?"),
    ("40", "@"),
    ("c1", "A"),
    ("c2", "B"),
    ("43", "C"),
    ("c4", "D"),
    ("45", "E"),
    ("46", "F"),
    ("c7", "G"),
    ("c8", "H"),
    ("49", "I"),
    ("4a", "J"),
    ("cb", "K"),
    ("4c", "L"),
    ("cd", "M"),
    ("ce", "N"),
    ("4f", "O"),
    ("d0", "P"),
    ("51", "Q"),
    ("52", "R"),
    ("d3", "S"),
    ("54", "T"),
    ("d5", "U"),
    ("d6", "V"),
    ("57", "W"),
    ("58", "X"),
    ("d9", "Y"),
    ("da", "Z"),
    ("5b", "["),
    ("dc", "é"),
    ("5d", "]"),
    ("5e", "í"),
    ("df", "ó"),
    ("e0", "ú"),
    ("61", "a"),
    ("62", "b"),
    ("e3", "c"),
    ("64", "d"),
    ("e5", "e"),
    ("e6", "f"),
    ("67", "g"),
    ("68", "h"),
    ("e9", "i"),
    ("ea", "j"),
    ("6b", "k"),
    ("ec", "l"),
    ("6d", "m"),
    ("6e", "n"),
    ("ef", "o"),
    ("70", "p"),
    ("f1", "q"),
    ("f2", "r"),
    ("73", "s"),
    ("f4", "t"),
    ("75", "u"),
    ("76", "v"),
    ("f7", "w"),
    ("f8", "x"),
    ("79", "y"),
    ("7a", "z"),
    ("fb", "ç"),
    ("7c", "÷"),
    ("fd", "Ñ"),
    ("fe", "ñ"),
    ("7f", ""),
    ("80", ""),
    ("91b0", "®"),
    ("9131", "°"),
    ("9132", "½"),
    ("91b3", "¿"),
    ("91b4", "™"),
    ("91b5", "¢"),
    ("91b6", "£"),
    ("9137", "♪"),
    ("9138", "à"),
    ("91b9", ""),
    ("91ba", "è"),
    ("913b", "â"),
    ("91bc", "ê"),
    ("913d", "î"),
    ("913e", "ô"),
    ("91bf", "û"),
    ("9220", "Á"),
    ("92a1", "É"),
    ("92a2", "Ó"),
    ("9223", "Ú"),
    ("92a4", "Ü"),
    ("9225", "ü"),
    ("9226", "‘"),
    ("92a7", "¡"),
    ("92a8", "*"),
    ("9229", "’"),
    ("922a", "—"),
    ("92ab", "©"),
    ("922c", "℠"),
    ("92ad", "•"),
    ("92ae", "“"),
    ("922f", "”"),
    ("92b0", "À"),
    ("9231", "Â"),
    ("9232", "Ç"),
    ("92b3", "È"),
    ("9234", "Ê"),
    ("92b5", "Ë"),
    ("92b6", "ë"),
    ("9237", "Î"),
    ("9238", "Ï"),
    ("92b9", "ï"),
    ("92ba", "Ô"),
    ("923b", "Ù"),
    ("92bc", "ù"),
    ("923d", "Û"),
    ("923e", "«"),
    ("92bf", "»"),
    ("1320", "Ã"),
    ("13a1", "ã"),
    ("13a2", "Í"),
    ("1323", "Ì"),
    ("13a4", "ì"),
    ("1325", "Ò"),
    ("1326", "ò"),
    ("13a7", "Õ"),
    ("13a8", "õ"),
    ("1329", "{"),
    ("132a", "}"),
    ("13ab", "\\"),
    ("132c", "^"),
    ("13ad", "_"),
    ("13ae", "¦"),
    ("132f", "~"),
    ("13b0", "Ä"),
    ("1331", "ä"),
    ("1332", "Ö"),
    ("13b3", "ö"),
    ("1334", "ß"),
    ("13b5", "¥"),
    ("13b6", "¤"),
    ("1337", "|"),
    ("1338", "Å"),
    ("13b9", "å"),
    ("13ba", "Ø"),
    ("133b", "ø"),
    ("13bc", "┌"),
    ("133d", "┐"),
    ("133e", "└"),
    ("13bf", "┘"),
];

static CODE_TO_CHAR: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CHARACTER_CODES.iter().copied().collect());

static CHAR_TO_CODE: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    CHARACTER_CODES
        .iter()
        .filter_map(|&(code, text)| {
            // Empty entries have no character to key on.
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some((c, code)),
                _ => None,
            }
        })
        .collect()
});

/// Hex code for `c`, or [`FALLBACK_CODE`] when the character is unsupported.
pub fn lookup(c: char) -> &'static str {
    CHAR_TO_CODE.get(&c).copied().unwrap_or(FALLBACK_CODE)
}

/// Character for a hex code. Codes are matched lowercase.
pub fn reverse_lookup(code: &str) -> Option<&'static str> {
    CODE_TO_CHAR.get(code.to_ascii_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_standard_characters() {
        assert_eq!(lookup(' '), "20");
        assert_eq!(lookup('H'), "c8");
        assert_eq!(lookup('I'), "49");
        assert_eq!(lookup('a'), "61");
        assert_eq!(lookup('0'), "b0");
        assert_eq!(lookup('"'), "a2");
        assert_eq!(lookup('\\'), "13ab");
    }

    #[test]
    fn test_lookup_accented_and_symbols() {
        assert_eq!(lookup('á'), "2a");
        assert_eq!(lookup('é'), "dc");
        assert_eq!(lookup('ñ'), "fe");
        assert_eq!(lookup('©'), "92ab");
        assert_eq!(lookup('™'), "91b4");
        assert_eq!(lookup('“'), "92ae");
        assert_eq!(lookup('┘'), "13bf");
        assert_eq!(lookup('♪'), "9137");
    }

    #[test]
    fn test_lookup_unsupported_falls_back() {
        assert_eq!(lookup('€'), FALLBACK_CODE);
        assert_eq!(lookup('\n'), FALLBACK_CODE);
        assert_eq!(lookup('\r'), FALLBACK_CODE);
        assert_eq!(lookup('字'), FALLBACK_CODE);
    }

    #[test]
    fn test_every_character_maps_to_its_code() {
        for &(code, text) in CHARACTER_CODES {
            let mut chars = text.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                assert_eq!(lookup(c), code, "character {:?}", c);
            }
        }
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        assert_eq!(CODE_TO_CHAR.len(), CHARACTER_CODES.len());
    }

    #[test]
    fn test_empty_entries_excluded_from_character_lookup() {
        let empty = CHARACTER_CODES.iter().filter(|(_, t)| t.is_empty()).count();
        assert_eq!(empty, 3);
        assert_eq!(CHAR_TO_CODE.len(), CHARACTER_CODES.len() - empty);
        assert!(!CHAR_TO_CODE.values().any(|&c| c == "7f" || c == "80" || c == "91b9"));
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(reverse_lookup("c8"), Some("H"));
        assert_eq!(reverse_lookup("92AB"), Some("©"));
        assert_eq!(reverse_lookup("7f"), Some(""));
        assert_eq!(reverse_lookup("80"), Some(""));
        assert_eq!(reverse_lookup("zz"), None);
    }
}
