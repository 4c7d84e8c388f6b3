//! Command handlers for the CLI.
//!
//! Each handler reads the listing batch from disk, runs one grouping
//! operation, and prints the result as pretty JSON on stdout. Logs go to
//! stderr so the output stays pipeable.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use chandlery_core::{AppConfig, CategoriesFile, Listing};
use chandlery_grouping::CatalogQuery;

/// Read a JSON array of listings.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// listings.
pub(crate) async fn load_listings(path: &Path) -> anyhow::Result<Vec<Listing>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read listings from {}", path.display()))?;
    let listings: Vec<Listing> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse listings in {}", path.display()))?;
    tracing::info!(path = %path.display(), count = listings.len(), "loaded listings");
    Ok(listings)
}

/// The configured taxonomy, or the built-in one when no file is set.
pub(crate) fn load_taxonomy(config: &AppConfig) -> anyhow::Result<CategoriesFile> {
    match &config.categories_path {
        Some(path) => chandlery_core::load_categories(path)
            .with_context(|| format!("failed to load categories from {}", path.display())),
        None => Ok(chandlery_core::default_categories()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_extract(title: &str) -> anyhow::Result<()> {
    print_json(&chandlery_grouping::extract_variant_info(title))
}

/// Print every product family, or only `group_id`.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or `group_id` matches no
/// family in the batch.
pub(crate) async fn run_group(input: &Path, group_id: Option<&str>) -> anyhow::Result<()> {
    let listings = load_listings(input).await?;
    match group_id {
        Some(id) => {
            let group = chandlery_grouping::find_product_group(&listings, id)
                .ok_or_else(|| anyhow::anyhow!("group '{id}' not found"))?;
            print_json(&group)
        }
        None => print_json(&chandlery_grouping::group_products(&listings)),
    }
}

pub(crate) async fn run_dedupe(input: &Path) -> anyhow::Result<()> {
    let listings = load_listings(input).await?;
    print_json(&chandlery_grouping::deduplicate_products(&listings))
}

/// Print the listings sharing a family with `product_id`.
///
/// An unknown id prints an empty array and logs a warning.
pub(crate) async fn run_variants(input: &Path, product_id: &str) -> anyhow::Result<()> {
    let listings = load_listings(input).await?;
    let variants = chandlery_grouping::get_variants_for_product(&listings, product_id);
    if variants.is_empty() {
        tracing::warn!(product_id, "no listing with this id in the batch");
    }
    print_json(&variants)
}

/// Print store rows for the batch, or the grouped catalog view when
/// `grouped` is set.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded. Listings that cannot be
/// stored are logged and skipped, not propagated.
pub(crate) async fn run_sync(input: &Path, config: &AppConfig, grouped: bool) -> anyhow::Result<()> {
    let listings = load_listings(input).await?;

    if grouped {
        let groups = chandlery_grouping::group_products(&listings);
        return print_json(&chandlery_grouping::grouped_rows(&groups));
    }

    let batch = chandlery_grouping::prepare_batch(listings, &config.source);
    if batch.skipped > 0 {
        tracing::warn!(skipped = batch.skipped, "some listings were not synced");
    }
    print_json(&batch.rows)
}

/// Run a catalog query against the batch.
///
/// # Errors
///
/// Returns an error if the input or taxonomy cannot be loaded, or the query
/// is invalid.
pub(crate) async fn run_search(
    input: &Path,
    config: &AppConfig,
    query: &CatalogQuery,
) -> anyhow::Result<()> {
    let listings = load_listings(input).await?;
    let categories = load_taxonomy(config)?;
    let page = chandlery_grouping::search(&listings, query, &categories, config.max_per_page)?;
    print_json(&page)
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
