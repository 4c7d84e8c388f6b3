pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod extract;
pub mod group_key;
pub mod matchers;
pub mod price;
pub mod storage;
pub mod vocab;

pub use aggregate::{
    deduplicate_products, find_product_group, get_variants_for_product, group_products,
    title_group_key,
};
pub use catalog::{normalize_category, search, CatalogPage, CatalogQuery, Facets, SortOrder};
pub use error::GroupingError;
pub use extract::{extract_variant_info, VariantInfo};
pub use group_key::{key_of, storage_key};
pub use price::{parse_price, positive_price};
pub use storage::{
    assign_missing_groups, grouped_rows, listings_from_rows, prepare_batch, prepare_for_storage,
    SyncBatch,
};
