use serde::{Deserialize, Serialize};

/// One scraped product occurrence, as delivered by the catalog scraper.
///
/// The same physical product may appear many times across categories and
/// pages, and sibling variants ("8mm Black", "10mm White") arrive as
/// unrelated listings. `id` is scraper-assigned and may change between runs,
/// so nothing downstream may use it as a grouping identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub id: String,
    /// Free-text product name, e.g. `"Anchor Chain 8mm Black Stainless"`.
    pub title: String,
    /// Currency-formatted price exactly as scraped, e.g. `"€45.00"` or `"1.234,56"`.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Size facet. Absent on scraped input; set on grouped variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Stock flag read back from stored rows. Scraped input leaves it unset,
    /// which catalog filtering treats as available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl Listing {
    /// Builds a bare listing with no image, link, or facets.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: price.into(),
            image: None,
            link: None,
            description: None,
            category: None,
            size: None,
            color: None,
            material: None,
            in_stock: None,
        }
    }
}

/// Distinct facet values observed across a group, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,
}

impl VariantOptions {
    /// Unions one variant's facets into the option sets. Absent values are ignored.
    pub fn record(&mut self, size: Option<&str>, color: Option<&str>, material: Option<&str>) {
        push_unique(&mut self.sizes, size);
        push_unique(&mut self.colors, color);
        push_unique(&mut self.materials, material);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty() && self.colors.is_empty() && self.materials.is_empty()
    }
}

fn push_unique(values: &mut Vec<String>, value: Option<&str>) {
    if let Some(v) = value {
        if !values.iter().any(|existing| existing == v) {
            values.push(v.to_owned());
        }
    }
}

/// Lowest and highest positive prices in a multi-variant group.
///
/// `min`/`max` carry the original price strings of the first variant that
/// achieves each numeric extreme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min: String,
    pub max: String,
    pub min_numeric: f64,
    pub max_numeric: f64,
}

/// A product family: every listing in a batch whose base name normalizes to
/// the same group key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGroup {
    pub group_id: String,
    /// Base name of the first listing that produced `group_id`.
    pub base_name: String,
    /// Cheapest variant, or the first one when no variant has a positive price.
    pub representative: Listing,
    /// Every listing in the group, facet-tagged, in encounter order.
    pub variants: Vec<Listing>,
    pub variant_count: usize,
    pub variant_options: VariantOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
}

impl ProductGroup {
    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.variant_count > 1
    }
}

/// One-row-per-group projection consumed by catalog and search callers: the
/// representative listing plus group metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedProduct {
    #[serde(flatten)]
    pub listing: Listing,
    pub group_id: String,
    pub variant_count: usize,
    pub has_variants: bool,
    pub variant_options: VariantOptions,
}

impl From<ProductGroup> for GroupedProduct {
    fn from(group: ProductGroup) -> Self {
        Self {
            has_variants: group.has_variants(),
            listing: group.representative,
            group_id: group.group_id,
            variant_count: group.variant_count,
            variant_options: group.variant_options,
        }
    }
}
