//! Vocabularies that drive facet extraction from listing titles.
//!
//! Kept as plain constants so tests can enumerate them and new words can be
//! added without touching the matching code in [`crate::matchers`]. Order
//! matters where one entry is a prefix of another: longer spellings come first.

/// Units that turn a bare number into a dimension token (`"8mm"`, `"15x60cm"`).
pub const DIMENSION_UNITS: &[&str] = &["mm", "cm", "inch", "in", "ft", "m", "'", "\""];

/// Apparel letter sizes. Matched in any case as standalone words.
pub const APPAREL_SIZES: &[&str] = &[
    "XXXL", "XXL", "XXS", "2XL", "3XL", "XL", "XS", "S", "M", "L",
];

/// Units that turn a bare number into a weight or volume token (`"1L"`, `"2.5kg"`).
pub const WEIGHT_VOLUME_UNITS: &[&str] = &[
    "gallon", "gal", "liter", "litre", "kg", "ml", "g", "l",
];

/// Words introducing an explicit numbered size (`"Size 8"`, `"No. 12"`,
/// `"No 12"`). An optional dot may follow the word. `#` is handled
/// separately since it cannot sit on a word boundary.
pub const NUMBERED_SIZE_PREFIXES: &[&str] = &["size", "no"];

/// Color facet vocabulary. `stainless` and `chrome` double as materials.
pub const COLOR_WORDS: &[&str] = &[
    "black", "white", "red", "blue", "green", "yellow", "orange", "purple", "pink", "grey",
    "gray", "brown", "navy", "beige", "silver", "gold", "chrome", "stainless", "brass",
];

/// Color words stripped from the end of a title when deriving the base name.
///
/// Metallic finishes (`silver`, `chrome`, `brass`, ...) are left in place:
/// at the end of a marine product title they usually name the material of a
/// distinct product rather than a colorway.
pub const TRAILING_COLOR_WORDS: &[&str] = &[
    "black", "white", "red", "blue", "green", "yellow", "orange", "purple", "pink", "grey",
    "gray", "brown", "navy",
];

/// Material facet vocabulary. Multi-word entries match any run of whitespace
/// (or none) between their words.
pub const MATERIAL_WORDS: &[&str] = &[
    "stainless steel",
    "steel",
    "aluminum",
    "aluminium",
    "plastic",
    "nylon",
    "polyester",
    "rubber",
    "silicone",
    "leather",
    "canvas",
    "wood",
    "teak",
    "brass",
    "copper",
    "zinc",
    "chrome",
];

/// Currency symbols stripped before a price string is parsed.
pub const CURRENCY_SYMBOLS: &[char] = &['€', '$', '£', '¥', '₹'];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_colors_are_a_subset_of_colors() {
        for word in TRAILING_COLOR_WORDS {
            assert!(COLOR_WORDS.contains(word), "{word} missing from COLOR_WORDS");
        }
    }

    #[test]
    fn vocabularies_are_lowercase() {
        for word in COLOR_WORDS.iter().chain(MATERIAL_WORDS).chain(WEIGHT_VOLUME_UNITS) {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn longer_spellings_precede_their_prefixes() {
        let position = |list: &[&str], word: &str| list.iter().position(|w| *w == word).unwrap();
        assert!(position(DIMENSION_UNITS, "mm") < position(DIMENSION_UNITS, "m"));
        assert!(position(DIMENSION_UNITS, "inch") < position(DIMENSION_UNITS, "in"));
        assert!(position(WEIGHT_VOLUME_UNITS, "gallon") < position(WEIGHT_VOLUME_UNITS, "gal"));
        assert!(position(MATERIAL_WORDS, "stainless steel") < position(MATERIAL_WORDS, "steel"));
        assert!(position(APPAREL_SIZES, "XXL") < position(APPAREL_SIZES, "XL"));
    }
}
