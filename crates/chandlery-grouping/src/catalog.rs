//! In-memory catalog query over a listing batch: text and category search,
//! price bounds, sorting, pagination and facet summaries.
//!
//! ## Category matching
//!
//! Both the requested category and each listing's category are resolved
//! against the taxonomy (exact name, alias contained in the label, name
//! contained in the label). A listing matches when its resolved category
//! equals, contains, or is contained in the requested one, so the scraper's
//! breadcrumb labels (`"Anchoring & Docking"`) land in `anchors`.

use std::str::FromStr;

use chandlery_core::{CategoriesFile, GroupedProduct, Listing};
use serde::{Deserialize, Serialize};

use crate::aggregate::deduplicate_products;
use crate::error::GroupingError;
use crate::extract::extract_variant_info;
use crate::price::{parse_price, positive_price};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Scrape order, which the catalog treats as newest first.
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Name,
}

impl FromStr for SortOrder {
    type Err = GroupingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            "name" => Ok(SortOrder::Name),
            other => Err(GroupingError::InvalidQuery {
                reason: format!(
                    "unknown sort '{other}'; expected newest, price-asc, price-desc or name"
                ),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    /// Keep only listings whose stock flag equals this. Unset flags count as in stock.
    pub in_stock: Option<bool>,
    pub sort: SortOrder,
    /// 1-based.
    pub page: usize,
    pub per_page: usize,
    /// Also return the page collapsed into product families.
    pub deduplicate: bool,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            q: None,
            category: None,
            price_min: None,
            price_max: None,
            in_stock: None,
            sort: SortOrder::Newest,
            page: 1,
            per_page: 20,
            deduplicate: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub max_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub products: Vec<Listing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouped: Option<Vec<GroupedProduct>>,
    pub page: usize,
    pub per_page: usize,
    /// Listings matching the filters, before pagination.
    pub total: usize,
    pub has_more: bool,
    pub facets: Facets,
}

/// Resolves a free-form category to a taxonomy name, or to its lowercased,
/// whitespace-collapsed form when nothing in the taxonomy matches.
#[must_use]
pub fn normalize_category(raw: &str, categories: &CategoriesFile) -> String {
    let lower = raw
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    categories
        .categories
        .iter()
        .find(|c| c.matches(&lower))
        .map_or(lower, |c| c.name.clone())
}

/// Runs `query` against `listings`.
///
/// `per_page` is clamped to `1..=max_per_page`.
///
/// # Errors
///
/// Returns [`GroupingError::InvalidQuery`] if `page` is zero or
/// `price_min` exceeds `price_max`.
pub fn search(
    listings: &[Listing],
    query: &CatalogQuery,
    categories: &CategoriesFile,
    max_per_page: usize,
) -> Result<CatalogPage, GroupingError> {
    validate(query)?;

    let needle = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);
    let target = query
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(|c| normalize_category(c, categories));

    let mut matched: Vec<&Listing> = listings
        .iter()
        .filter(|l| needle.as_deref().is_none_or(|n| matches_text(l, n)))
        .filter(|l| {
            target
                .as_deref()
                .is_none_or(|t| matches_category(l, t, categories))
        })
        .filter(|l| within_price(l, query.price_min, query.price_max))
        .filter(|l| {
            query
                .in_stock
                .is_none_or(|wanted| l.in_stock.unwrap_or(true) == wanted)
        })
        .collect();

    sort_listings(&mut matched, query.sort);

    let facets = build_facets(&matched);
    let total = matched.len();
    let per_page = query.per_page.clamp(1, max_per_page.max(1));
    let start = (query.page - 1).saturating_mul(per_page);

    let products: Vec<Listing> = matched
        .iter()
        .skip(start)
        .take(per_page)
        .map(|l| (*l).clone())
        .collect();
    let has_more = total > start.saturating_add(per_page);
    let grouped = query.deduplicate.then(|| deduplicate_products(&products));

    tracing::debug!(
        total,
        page = query.page,
        per_page,
        returned = products.len(),
        "catalog search"
    );

    Ok(CatalogPage {
        products,
        grouped,
        page: query.page,
        per_page,
        total,
        has_more,
        facets,
    })
}

fn validate(query: &CatalogQuery) -> Result<(), GroupingError> {
    if query.page == 0 {
        return Err(GroupingError::InvalidQuery {
            reason: "page must be at least 1".to_string(),
        });
    }
    if let (Some(min), Some(max)) = (query.price_min, query.price_max) {
        if min > max {
            return Err(GroupingError::InvalidQuery {
                reason: format!("price_min {min} exceeds price_max {max}"),
            });
        }
    }
    Ok(())
}

fn matches_text(listing: &Listing, needle: &str) -> bool {
    let contains = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(needle));
    contains(Some(listing.title.as_str()))
        || contains(listing.description.as_deref())
        || contains(listing.category.as_deref())
}

fn matches_category(listing: &Listing, target: &str, categories: &CategoriesFile) -> bool {
    let Some(category) = listing.category.as_deref().filter(|c| !c.trim().is_empty()) else {
        return false;
    };
    let category = normalize_category(category, categories);
    category == target || category.contains(target) || target.contains(category.as_str())
}

fn within_price(listing: &Listing, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let price = parse_price(&listing.price);
    min.is_none_or(|m| price >= m) && max.is_none_or(|m| price <= m)
}

fn sort_listings(listings: &mut [&Listing], sort: SortOrder) {
    match sort {
        SortOrder::Newest => {}
        SortOrder::PriceAsc => {
            listings.sort_by(|a, b| parse_price(&a.price).total_cmp(&parse_price(&b.price)));
        }
        SortOrder::PriceDesc => {
            listings.sort_by(|a, b| parse_price(&b.price).total_cmp(&parse_price(&a.price)));
        }
        SortOrder::Name => {
            listings.sort_by_cached_key(|l| l.title.to_lowercase());
        }
    }
}

fn build_facets(listings: &[&Listing]) -> Facets {
    let mut facets = Facets::default();
    for listing in listings {
        let info = extract_variant_info(&listing.title);
        if let Some(color) = listing.color.clone().or(info.color) {
            if !facets.colors.contains(&color) {
                facets.colors.push(color);
            }
        }
        if let Some(size) = listing.size.clone().or(info.size) {
            if !facets.sizes.contains(&size) {
                facets.sizes.push(size);
            }
        }
        if let Some(price) = positive_price(&listing.price) {
            facets.max_price = Some(facets.max_price.map_or(price, |m| m.max(price)));
        }
    }
    facets
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
