//! Conversion between the grouping engine and the catalog store's row shapes.
//!
//! The sync path turns scraped listings into [`StoredProduct`] rows that carry
//! their grouping key, so rows from a later partial re-scrape can be
//! re-associated with an existing family without regrouping the whole catalog.

use chandlery_core::{GroupedRow, Listing, ProductGroup, StoredProduct};
use chrono::Utc;

use crate::error::GroupingError;
use crate::extract::extract_variant_info;
use crate::group_key::{key_of, storage_key};
use crate::price::positive_price;

/// Rows ready to upsert, plus how many listings were rejected.
#[derive(Debug, Default)]
pub struct SyncBatch {
    pub rows: Vec<StoredProduct>,
    pub skipped: usize,
}

/// Converts one scraped listing into a store row with grouping metadata.
///
/// # Errors
///
/// Returns [`GroupingError::EmptyTitle`] if the title is empty or whitespace.
pub fn prepare_for_storage(listing: Listing, source: &str) -> Result<StoredProduct, GroupingError> {
    if listing.title.trim().is_empty() {
        return Err(GroupingError::EmptyTitle {
            listing_id: listing.id,
        });
    }

    let info = extract_variant_info(&listing.title);
    let price_numeric = positive_price(&listing.price);

    Ok(StoredProduct {
        group_id: Some(key_of(&info.base_name)),
        storage_key: Some(storage_key(&info.base_name)),
        base_name: Some(info.base_name),
        size: info.size,
        color: info.color,
        material: info.material,
        price_numeric,
        id: listing.id,
        title: listing.title,
        price: listing.price,
        image: listing.image.filter(|s| !s.is_empty()),
        link: listing.link.filter(|s| !s.is_empty()),
        description: listing.description.filter(|s| !s.is_empty()),
        category: listing.category.filter(|s| !s.is_empty()),
        source: source.to_owned(),
        in_stock: listing.in_stock.unwrap_or(true),
        updated_at: Some(Utc::now()),
    })
}

/// Converts a batch, logging and skipping listings that cannot be stored.
#[must_use]
pub fn prepare_batch(listings: Vec<Listing>, source: &str) -> SyncBatch {
    let mut batch = SyncBatch::default();
    for listing in listings {
        match prepare_for_storage(listing, source) {
            Ok(row) => batch.rows.push(row),
            Err(e) => {
                tracing::warn!(error = %e, "skipping listing during sync");
                batch.skipped += 1;
            }
        }
    }
    tracing::debug!(
        rows = batch.rows.len(),
        skipped = batch.skipped,
        "prepared listings for storage"
    );
    batch
}

/// Fills `group_id`, `storage_key` and `base_name` on rows missing any of
/// them, returning how many rows changed. Rows already carrying all three are
/// left alone so stored keys stay stable.
pub fn assign_missing_groups(rows: &mut [StoredProduct]) -> usize {
    let mut updated = 0;
    for row in rows
        .iter_mut()
        .filter(|r| r.group_id.is_none() || r.storage_key.is_none() || r.base_name.is_none())
    {
        let info = extract_variant_info(&row.title);
        row.group_id = Some(key_of(&info.base_name));
        row.storage_key = Some(storage_key(&info.base_name));
        row.base_name = Some(info.base_name);
        row.size = row.size.take().or(info.size);
        row.color = row.color.take().or(info.color);
        row.material = row.material.take().or(info.material);
        row.updated_at = Some(Utc::now());
        updated += 1;
    }
    updated
}

/// Reads stored rows back into the engine's input representation.
#[must_use]
pub fn listings_from_rows(rows: Vec<StoredProduct>) -> Vec<Listing> {
    rows.into_iter().map(Listing::from).collect()
}

/// One catalog-view row per family. Singletons report their own price as
/// both bounds.
#[must_use]
pub fn grouped_rows(groups: &[ProductGroup]) -> Vec<GroupedRow> {
    groups.iter().map(grouped_row).collect()
}

fn grouped_row(group: &ProductGroup) -> GroupedRow {
    let rep = &group.representative;
    let own_price = positive_price(&rep.price);
    let (min_price, max_price) = group
        .price_range
        .as_ref()
        .map_or((own_price, own_price), |r| {
            (Some(r.min_numeric), Some(r.max_numeric))
        });

    GroupedRow {
        id: rep.id.clone(),
        title: rep.title.clone(),
        price: rep.price.clone(),
        price_numeric: own_price,
        image: rep.image.clone(),
        link: rep.link.clone(),
        category: rep.category.clone(),
        group_id: group.group_id.clone(),
        base_name: group.base_name.clone(),
        variant_count: group.variant_count,
        min_price,
        max_price,
        available_sizes: group.variant_options.sizes.clone(),
        available_colors: group.variant_options.colors.clone(),
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
