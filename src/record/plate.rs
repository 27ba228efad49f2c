//! Plate number pattern
//!
//! Plates are `<L><3 digits><2 L><2-3 digits>` where `<L>` is one of the
//! twelve Cyrillic letters that look like Latin ones. The raw string must
//! match as-is: no case folding, no stripping of dashes or spaces.

use std::sync::LazyLock;

use regex::Regex;

/// Letters allowed in a plate number
pub const PLATE_ALPHABET: [char; 12] = ['А', 'В', 'Е', 'К', 'М', 'Н', 'О', 'Р', 'С', 'Т', 'У', 'Х'];

/// The alphabet as shown in user-facing messages
pub const PLATE_ALPHABET_DISPLAY: &str = "А, В, Е, К, М, Н, О, Р, С, Т, У, Х";

/// Full-match pattern for a plate number
pub const PLATE_PATTERN: &str = r"^[АВЕКМНОРСТУХ]\d{3}[АВЕКМНОРСТУХ]{2}\d{2,3}$";

static PLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| match Regex::new(PLATE_PATTERN) {
    Ok(re) => re,
    Err(e) => panic!("invalid plate pattern: {e}"),
});

/// Check a plate against the fixed pattern
pub fn is_valid_plate(plate: &str) -> bool {
    PLATE_REGEX.is_match(plate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_and_three_digit_regions() {
        assert!(is_valid_plate("А123ВС78"));
        assert!(is_valid_plate("Х001ОР777"));
    }

    #[test]
    fn rejects_letters_outside_alphabet() {
        assert!(!is_valid_plate("И123ВС78"));
        assert!(!is_valid_plate("А123ГД78"));
        assert!(!is_valid_plate("А123БВ78"));
    }

    #[test]
    fn rejects_latin_lookalikes_and_lowercase() {
        // Latin A, B, C
        assert!(!is_valid_plate("A123BC78"));
        assert!(!is_valid_plate("а123вс78"));
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(!is_valid_plate(""));
        assert!(!is_valid_plate("А12ВС78"));
        assert!(!is_valid_plate("А123ВС7"));
        assert!(!is_valid_plate("А123ВС7777"));
        assert!(!is_valid_plate(" А123ВС78"));
        assert!(!is_valid_plate("А-123-ВС-78"));
    }

    #[test]
    fn alphabet_constants_agree() {
        let listed: Vec<char> = PLATE_ALPHABET_DISPLAY
            .split(", ")
            .filter_map(|s| s.chars().next())
            .collect();
        assert_eq!(listed, PLATE_ALPHABET);

        for letter in PLATE_ALPHABET {
            let plate = format!("{letter}123{letter}{letter}78");
            assert!(is_valid_plate(&plate), "{plate} should match");
        }
    }
}
