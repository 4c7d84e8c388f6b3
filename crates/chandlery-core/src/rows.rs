//! Row shapes exchanged with the relational catalog store.
//!
//! The store itself is external; these types only describe what the sync path
//! writes and what the database-backed catalog reads back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::Listing;

/// One persisted listing, annotated with its grouping metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProduct {
    pub id: String,
    pub title: String,
    pub price: String,
    /// Parsed price; `None` when the price string has no positive value.
    #[serde(default)]
    pub price_numeric: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Slug group key, identical to the key the grouping engine computes, so
    /// rows from a partial re-scrape re-associate with their existing family.
    #[serde(default)]
    pub group_id: Option<String>,
    /// Hash-based surrogate (`grp_<16 hex>`). Storage-only; never used to group.
    #[serde(default)]
    pub storage_key: Option<String>,
    #[serde(default)]
    pub base_name: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The scraper never reports stock, so rows without the column are assumed available.
fn default_in_stock() -> bool {
    true
}

impl From<StoredProduct> for Listing {
    fn from(row: StoredProduct) -> Self {
        Listing {
            id: row.id,
            title: row.title,
            price: row.price,
            image: row.image,
            link: row.link,
            description: row.description,
            category: row.category,
            size: row.size,
            color: row.color,
            material: row.material,
            in_stock: Some(row.in_stock),
        }
    }
}

/// One row per product family for the database-backed catalog view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedRow {
    pub id: String,
    pub title: String,
    pub price: String,
    #[serde(default)]
    pub price_numeric: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub group_id: String,
    pub base_name: String,
    pub variant_count: usize,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub available_sizes: Vec<String>,
    #[serde(default)]
    pub available_colors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_product_defaults_in_stock_when_absent() {
        let row: StoredProduct = serde_json::from_str(
            r#"{"id":"p1","title":"Teak Oil 1L","price":"€28.00"}"#,
        )
        .expect("deserialization failed");
        assert!(row.in_stock);
        assert!(row.group_id.is_none());
        assert!(row.updated_at.is_none());
    }

    #[test]
    fn stored_product_converts_back_to_listing() {
        let row = StoredProduct {
            id: "p1".to_string(),
            title: "Anchor Swivel 8mm Black".to_string(),
            price: "€20.00".to_string(),
            price_numeric: Some(20.0),
            image: Some("https://cdn.example/swivel.jpg".to_string()),
            link: None,
            description: None,
            category: Some("anchors".to_string()),
            group_id: Some("anchor-swivel".to_string()),
            storage_key: Some("grp_0123456789abcdef".to_string()),
            base_name: Some("Anchor Swivel".to_string()),
            size: Some("8mm".to_string()),
            color: Some("black".to_string()),
            material: None,
            source: "nautichandler".to_string(),
            in_stock: true,
            updated_at: None,
        };
        let listing = Listing::from(row);
        assert_eq!(listing.id, "p1");
        assert_eq!(listing.title, "Anchor Swivel 8mm Black");
        assert_eq!(listing.category.as_deref(), Some("anchors"));
        assert_eq!(listing.size.as_deref(), Some("8mm"));
        assert_eq!(listing.color.as_deref(), Some("black"));
        assert_eq!(listing.in_stock, Some(true));
    }
}
