//! Batch grouping of scraped listings into product families.
//!
//! One pass buckets listings by [`key_of`] over their extracted base name,
//! a second pass picks each bucket's representative and price range. Buckets
//! keep first-seen order. Nothing is cached between calls.

use std::collections::HashMap;

use chandlery_core::{GroupedProduct, Listing, PriceRange, ProductGroup, VariantOptions};

use crate::extract::{extract_variant_info, VariantInfo};
use crate::group_key::key_of;
use crate::price::positive_price;

/// Groups a batch of listings into product families.
///
/// Each variant in the output carries the size/color/material extracted from
/// its title. Never fails; an empty batch yields no groups.
#[must_use]
pub fn group_products(listings: &[Listing]) -> Vec<ProductGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ProductGroup> = Vec::new();

    for listing in listings {
        let info = extract_variant_info(&listing.title);
        let group_id = key_of(&info.base_name);
        if group_id.is_empty() {
            tracing::warn!(
                title = %listing.title,
                "base name collapsed to an empty group key; listing shares the empty-key group"
            );
        }

        let variant = tag_variant(listing, &info);

        if let Some(&slot) = index.get(&group_id) {
            let group = &mut groups[slot];
            group.variant_options.record(
                variant.size.as_deref(),
                variant.color.as_deref(),
                variant.material.as_deref(),
            );
            group.variants.push(variant);
            group.variant_count += 1;
        } else {
            let mut variant_options = VariantOptions::default();
            variant_options.record(
                variant.size.as_deref(),
                variant.color.as_deref(),
                variant.material.as_deref(),
            );
            index.insert(group_id.clone(), groups.len());
            groups.push(ProductGroup {
                group_id,
                base_name: info.base_name,
                representative: variant.clone(),
                variants: vec![variant],
                variant_count: 1,
                variant_options,
                price_range: None,
            });
        }
    }

    for group in &mut groups {
        finalize_group(group);
    }

    tracing::debug!(
        listings = listings.len(),
        groups = groups.len(),
        "grouped listings into product families"
    );

    groups
}

/// One row per product family: the representative listing plus group metadata.
#[must_use]
pub fn deduplicate_products(listings: &[Listing]) -> Vec<GroupedProduct> {
    group_products(listings)
        .into_iter()
        .map(GroupedProduct::from)
        .collect()
}

/// Full family (with every variant) for a previously computed `group_id`.
#[must_use]
pub fn find_product_group(listings: &[Listing], group_id: &str) -> Option<ProductGroup> {
    group_products(listings)
        .into_iter()
        .find(|group| group.group_id == group_id)
}

/// Listings that share a family with the listing whose id is `product_id`,
/// including that listing, in input order. Empty when the id is unknown.
#[must_use]
pub fn get_variants_for_product(listings: &[Listing], product_id: &str) -> Vec<Listing> {
    let Some(product) = listings.iter().find(|l| l.id == product_id) else {
        return Vec::new();
    };
    let group_id = title_group_key(&product.title);

    listings
        .iter()
        .filter(|l| title_group_key(&l.title) == group_id)
        .cloned()
        .collect()
}

/// Grouping key for a raw title.
#[must_use]
pub fn title_group_key(title: &str) -> String {
    key_of(&extract_variant_info(title).base_name)
}

fn tag_variant(listing: &Listing, info: &VariantInfo) -> Listing {
    Listing {
        size: info.size.clone(),
        color: info.color.clone(),
        material: info.material.clone(),
        ..listing.clone()
    }
}

/// Sets the representative to the cheapest variant and fills the price range.
///
/// Only multi-variant groups with at least one positive price are touched;
/// ties resolve to the earliest variant.
fn finalize_group(group: &mut ProductGroup) {
    if group.variants.len() < 2 {
        return;
    }

    let mut min: Option<(usize, f64)> = None;
    let mut max: Option<(usize, f64)> = None;

    let priced = group
        .variants
        .iter()
        .enumerate()
        .filter_map(|(idx, v)| positive_price(&v.price).map(|p| (idx, p)));
    for (idx, price) in priced {
        if min.is_none_or(|(_, m)| price < m) {
            min = Some((idx, price));
        }
        if max.is_none_or(|(_, m)| price > m) {
            max = Some((idx, price));
        }
    }

    let (Some((min_idx, min_numeric)), Some((max_idx, max_numeric))) = (min, max) else {
        return;
    };

    group.price_range = Some(PriceRange {
        min: group.variants[min_idx].price.clone(),
        max: group.variants[max_idx].price.clone(),
        min_numeric,
        max_numeric,
    });
    group.representative = group.variants[min_idx].clone();
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
