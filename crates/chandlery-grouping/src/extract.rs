//! Variant facet extraction from free-text listing titles.
//!
//! Composes the matchers in [`crate::matchers`] into one pass per title.

use serde::{Deserialize, Serialize};

use crate::matchers::{
    first_match_or_none, match_color, match_material, strip_dimensions, strip_trailing_apparel_size,
    strip_trailing_color, strip_trailing_weight_volume, SIZE_MATCHERS,
};

/// Facets isolated from one title, plus what remains once the structural
/// variant noise is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantInfo {
    /// Title with dimension tokens and a trailing color, apparel size and
    /// weight/volume removed. Empty only when the title was nothing but
    /// variant tokens.
    pub base_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

/// Extracts size, color, material and the base name from a listing title.
///
/// - **Size**: first hit of dimension → apparel letter → weight/volume →
///   numbered phrase. At most one size is recorded.
/// - **Color** / **material**: first vocabulary hit, lowercased. The two
///   passes are independent, so `"Stainless Steel ..."` yields both
///   `color = "stainless"` and `material = "stainless steel"`.
/// - **Base name**: all dimension tokens are removed, then one trailing
///   color word, one trailing apparel size and one trailing weight/volume
///   token, in that order; whitespace is collapsed. Color or material words
///   mid-title are kept since they are often part of the product's name.
///
/// Pure function of `title`.
#[must_use]
pub fn extract_variant_info(title: &str) -> VariantInfo {
    let size = first_match_or_none(&SIZE_MATCHERS, title);
    let color = match_color(title);
    let material = match_material(title);

    VariantInfo {
        base_name: derive_base_name(title),
        size,
        color,
        material,
    }
}

fn derive_base_name(title: &str) -> String {
    let stripped = strip_dimensions(title);
    let stripped = strip_trailing_color(&stripped);
    let stripped = strip_trailing_apparel_size(&stripped);
    let stripped = strip_trailing_weight_volume(&stripped);
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
