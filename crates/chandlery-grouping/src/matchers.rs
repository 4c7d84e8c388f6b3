//! Compiled patterns and single-purpose matchers built from [`crate::vocab`].
//!
//! Each matcher inspects a title and returns at most one token. Callers pick
//! the first hit of an ordered matcher list with [`first_match_or_none`].

use std::sync::LazyLock;

use regex::Regex;

use crate::vocab::{
    APPAREL_SIZES, COLOR_WORDS, DIMENSION_UNITS, MATERIAL_WORDS, NUMBERED_SIZE_PREFIXES,
    TRAILING_COLOR_WORDS, WEIGHT_VOLUME_UNITS,
};

/// A single token extractor: `Some(token)` on a hit, `None` otherwise.
pub type Matcher = fn(&str) -> Option<String>;

/// Size token classes in priority order.
pub const SIZE_MATCHERS: [Matcher; 4] = [
    match_dimension,
    match_apparel_size,
    match_weight_volume,
    match_numbered_size,
];

/// Runs `matchers` in order and returns the first token any of them yields.
#[must_use]
pub fn first_match_or_none(matchers: &[Matcher], input: &str) -> Option<String> {
    matchers.iter().find_map(|matcher| matcher(input))
}

const NUMBER: &str = r"\d+(?:\.\d+)?";

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

/// Dimension unit in terminal position: letter units must end on a word
/// boundary (`"8mm"` but not `"8min"`), quote units need no boundary.
fn dimension_unit_end() -> String {
    let (letters, quotes): (Vec<&str>, Vec<&str>) = DIMENSION_UNITS
        .iter()
        .copied()
        .partition(|u| u.chars().all(|c| c.is_ascii_alphabetic()));
    format!(r"(?:(?:{})\b|{})", alternation(&letters), alternation(&quotes))
}

/// `"15x60cm"`, `"50mmx50m"`, `"2 x 4m"` or a single `"8mm"`. The first
/// dimension's unit is optional when a second dimension follows.
static DIMENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let inner = alternation(DIMENSION_UNITS);
    let end = dimension_unit_end();
    Regex::new(&format!(
        r"(?i)\b{NUMBER}(?:{inner})?\s*x\s*{NUMBER}{end}|\b{NUMBER}{end}"
    ))
    .expect("valid dimension regex")
});

static APPAREL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(APPAREL_SIZES)))
        .expect("valid apparel regex")
});

static WEIGHT_VOLUME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b{NUMBER}(?:{})\b",
        alternation(WEIGHT_VOLUME_UNITS)
    ))
    .expect("valid weight/volume regex")
});

static NUMBERED_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(?:\b(?:{})\.?|#)\s*\d+\b",
        alternation(NUMBERED_SIZE_PREFIXES)
    ))
    .expect("valid numbered size regex")
});

static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(COLOR_WORDS))).expect("valid color regex")
});

static MATERIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let words = MATERIAL_WORDS
        .iter()
        .map(|w| {
            w.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s*")
        })
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{words})\b")).expect("valid material regex")
});

static TRAILING_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\s+(?:{})\s*$",
        alternation(TRAILING_COLOR_WORDS)
    ))
    .expect("valid trailing color regex")
});

static TRAILING_APPAREL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\s+(?:{})\s*$", alternation(APPAREL_SIZES)))
        .expect("valid trailing apparel regex")
});

static TRAILING_WEIGHT_VOLUME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\s+{NUMBER}(?:{})\s*$",
        alternation(WEIGHT_VOLUME_UNITS)
    ))
    .expect("valid trailing weight/volume regex")
});

fn first_token(re: &Regex, input: &str) -> Option<String> {
    re.find(input).map(|m| m.as_str().to_owned())
}

#[must_use]
pub fn match_dimension(title: &str) -> Option<String> {
    first_token(&DIMENSION_RE, title)
}

/// First standalone letter size, in its original casing. A letter right
/// after an apostrophe is a possessive (`"Men's"`), not a size.
#[must_use]
pub fn match_apparel_size(title: &str) -> Option<String> {
    APPAREL_RE
        .find_iter(title)
        .find(|m| !title[..m.start()].ends_with('\''))
        .map(|m| m.as_str().to_owned())
}

#[must_use]
pub fn match_weight_volume(title: &str) -> Option<String> {
    first_token(&WEIGHT_VOLUME_RE, title)
}

/// `"Size 8"`, `"No. 12"`, `"#4"`. The whole phrase is the token.
#[must_use]
pub fn match_numbered_size(title: &str) -> Option<String> {
    first_token(&NUMBERED_SIZE_RE, title)
}

/// First color word, lowercased.
#[must_use]
pub fn match_color(title: &str) -> Option<String> {
    COLOR_RE.find(title).map(|m| m.as_str().to_lowercase())
}

/// First material word, lowercased with inner whitespace normalized
/// (`"Stainless  Steel"` → `"stainless steel"`).
#[must_use]
pub fn match_material(title: &str) -> Option<String> {
    MATERIAL_RE.find(title).map(|m| {
        let lower = m.as_str().to_lowercase();
        let squashed: String = lower.split_whitespace().collect();
        MATERIAL_WORDS
            .iter()
            .find(|w| w.split_whitespace().collect::<String>() == squashed)
            .map_or(lower, |w| (*w).to_owned())
    })
}

/// Removes every dimension token from `title`.
pub(crate) fn strip_dimensions(title: &str) -> String {
    DIMENSION_RE.replace_all(title, "").into_owned()
}

pub(crate) fn strip_trailing_color(title: &str) -> String {
    TRAILING_COLOR_RE.replace(title, "").into_owned()
}

pub(crate) fn strip_trailing_apparel_size(title: &str) -> String {
    TRAILING_APPAREL_RE.replace(title, "").into_owned()
}

pub(crate) fn strip_trailing_weight_volume(title: &str) -> String {
    TRAILING_WEIGHT_VOLUME_RE.replace(title, "").into_owned()
}
