use chandlery_core::default_categories;

use super::*;

fn listing(id: &str, title: &str, price: &str, category: Option<&str>) -> Listing {
    let mut l = Listing::new(id, title, price);
    l.category = category.map(str::to_string);
    l
}

fn catalog() -> Vec<Listing> {
    let mut teak = listing("l3", "Teak Oil 1L", "€28.00", Some("Maintenance & Cleaning"));
    teak.description = Some("Restores weathered teak decks".to_string());
    vec![
        listing("l1", "Anchor Swivel 8mm Black", "€20.00", Some("Anchoring & Docking")),
        listing("l2", "Anchor Swivel 10mm White", "€25.00", Some("Anchoring & Docking")),
        teak,
        listing("l4", "Dock Line 12mm Blue", "€15,50", Some("Ropes")),
        listing("l5", "Mystery Item", "", None),
    ]
}

fn ids(page: &CatalogPage) -> Vec<&str> {
    page.products.iter().map(|l| l.id.as_str()).collect()
}

fn run(query: &CatalogQuery) -> CatalogPage {
    search(&catalog(), query, &default_categories(), 100).expect("query should be valid")
}

// -----------------------------------------------------------------------
// normalize_category
// -----------------------------------------------------------------------

#[test]
fn normalize_category_resolves_aliases() {
    let categories = default_categories();
    assert_eq!(normalize_category("Anchor", &categories), "anchors");
    assert_eq!(normalize_category("Anchoring & Docking", &categories), "anchors");
    assert_eq!(normalize_category("  Maintenance   & Cleaning ", &categories), "maintenance");
    assert_eq!(normalize_category("ROPES", &categories), "ropes");
}

#[test]
fn normalize_category_falls_back_to_collapsed_input() {
    assert_eq!(
        normalize_category("  Galley   Supplies ", &default_categories()),
        "galley supplies"
    );
}

// -----------------------------------------------------------------------
// filters
// -----------------------------------------------------------------------

#[test]
fn default_query_returns_everything_in_scrape_order() {
    let page = run(&CatalogQuery::default());
    assert_eq!(ids(&page), vec!["l1", "l2", "l3", "l4", "l5"]);
    assert_eq!(page.total, 5);
    assert!(!page.has_more);
    assert!(page.grouped.is_none());
}

#[test]
fn text_search_covers_title_description_and_category() {
    let by_title = run(&CatalogQuery {
        q: Some("SWIVEL".to_string()),
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&by_title), vec!["l1", "l2"]);

    let by_description = run(&CatalogQuery {
        q: Some("decks".to_string()),
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&by_description), vec!["l3"]);

    let by_category = run(&CatalogQuery {
        q: Some("ropes".to_string()),
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&by_category), vec!["l4"]);
}

#[test]
fn blank_text_search_is_ignored() {
    let page = run(&CatalogQuery {
        q: Some("   ".to_string()),
        ..CatalogQuery::default()
    });
    assert_eq!(page.total, 5);
}

#[test]
fn category_filter_matches_breadcrumb_labels() {
    let page = run(&CatalogQuery {
        category: Some("anchors".to_string()),
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&page), vec!["l1", "l2"]);
}

#[test]
fn category_filter_never_matches_uncategorized_listings() {
    let page = run(&CatalogQuery {
        category: Some("mystery".to_string()),
        ..CatalogQuery::default()
    });
    assert!(page.products.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn price_bounds_are_inclusive() {
    let page = run(&CatalogQuery {
        price_min: Some(20.0),
        price_max: Some(25.0),
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&page), vec!["l1", "l2"]);
}

#[test]
fn price_min_alone_drops_unpriced_listings() {
    let page = run(&CatalogQuery {
        price_min: Some(0.01),
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&page), vec!["l1", "l2", "l3", "l4"]);
}

#[test]
fn in_stock_filter_treats_unset_flag_as_available() {
    let mut listings = catalog();
    listings[1].in_stock = Some(false);
    listings[2].in_stock = Some(true);
    let categories = default_categories();

    let available = search(
        &listings,
        &CatalogQuery {
            in_stock: Some(true),
            ..CatalogQuery::default()
        },
        &categories,
        100,
    )
    .unwrap();
    assert_eq!(ids(&available), vec!["l1", "l3", "l4", "l5"]);

    let sold_out = search(
        &listings,
        &CatalogQuery {
            in_stock: Some(false),
            ..CatalogQuery::default()
        },
        &categories,
        100,
    )
    .unwrap();
    assert_eq!(ids(&sold_out), vec!["l2"]);
}

// -----------------------------------------------------------------------
// sorting
// -----------------------------------------------------------------------

#[test]
fn sorts_by_price_in_both_directions() {
    let asc = run(&CatalogQuery {
        sort: SortOrder::PriceAsc,
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&asc), vec!["l5", "l4", "l1", "l2", "l3"]);

    let desc = run(&CatalogQuery {
        sort: SortOrder::PriceDesc,
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&desc), vec!["l3", "l2", "l1", "l4", "l5"]);
}

#[test]
fn sorts_by_case_insensitive_title() {
    let page = run(&CatalogQuery {
        sort: SortOrder::Name,
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&page), vec!["l2", "l1", "l4", "l5", "l3"]);
}

#[test]
fn sort_order_parses_kebab_case() {
    assert_eq!("price-asc".parse::<SortOrder>().unwrap(), SortOrder::PriceAsc);
    assert_eq!("price-desc".parse::<SortOrder>().unwrap(), SortOrder::PriceDesc);
    assert_eq!("name".parse::<SortOrder>().unwrap(), SortOrder::Name);
    assert_eq!("newest".parse::<SortOrder>().unwrap(), SortOrder::Newest);
    assert!(matches!(
        "cheapest".parse::<SortOrder>(),
        Err(GroupingError::InvalidQuery { .. })
    ));
}

// -----------------------------------------------------------------------
// pagination
// -----------------------------------------------------------------------

#[test]
fn paginates_with_has_more() {
    let second = run(&CatalogQuery {
        page: 2,
        per_page: 2,
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&second), vec!["l3", "l4"]);
    assert_eq!(second.total, 5);
    assert!(second.has_more);

    let last = run(&CatalogQuery {
        page: 3,
        per_page: 2,
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&last), vec!["l5"]);
    assert!(!last.has_more);
}

#[test]
fn page_past_the_end_is_empty() {
    let page = run(&CatalogQuery {
        page: 10,
        per_page: 2,
        ..CatalogQuery::default()
    });
    assert!(page.products.is_empty());
    assert_eq!(page.total, 5);
    assert!(!page.has_more);
}

#[test]
fn per_page_is_clamped() {
    let tiny = run(&CatalogQuery {
        per_page: 0,
        ..CatalogQuery::default()
    });
    assert_eq!(tiny.per_page, 1);
    assert_eq!(ids(&tiny), vec!["l1"]);
    assert!(tiny.has_more);

    let huge = search(
        &catalog(),
        &CatalogQuery {
            per_page: 500,
            ..CatalogQuery::default()
        },
        &default_categories(),
        3,
    )
    .unwrap();
    assert_eq!(huge.per_page, 3);
    assert_eq!(huge.products.len(), 3);
}

#[test]
fn rejects_page_zero_and_inverted_price_bounds() {
    let categories = default_categories();
    let zero = CatalogQuery {
        page: 0,
        ..CatalogQuery::default()
    };
    assert!(matches!(
        search(&catalog(), &zero, &categories, 100),
        Err(GroupingError::InvalidQuery { .. })
    ));

    let inverted = CatalogQuery {
        price_min: Some(30.0),
        price_max: Some(10.0),
        ..CatalogQuery::default()
    };
    assert!(matches!(
        search(&catalog(), &inverted, &categories, 100),
        Err(GroupingError::InvalidQuery { .. })
    ));
}

// -----------------------------------------------------------------------
// facets and deduplication
// -----------------------------------------------------------------------

#[test]
fn facets_summarize_the_filtered_set() {
    let page = run(&CatalogQuery::default());
    assert_eq!(page.facets.colors, vec!["black", "white", "blue"]);
    assert_eq!(page.facets.sizes, vec!["8mm", "10mm", "1L", "12mm"]);
    assert_eq!(page.facets.max_price, Some(28.0));
}

#[test]
fn facets_ignore_pagination() {
    let page = run(&CatalogQuery {
        per_page: 1,
        ..CatalogQuery::default()
    });
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.facets.colors.len(), 3);
}

#[test]
fn facets_of_unpriced_results_have_no_max_price() {
    let page = run(&CatalogQuery {
        q: Some("mystery".to_string()),
        ..CatalogQuery::default()
    });
    assert_eq!(page.facets.max_price, None);
    assert!(page.facets.colors.is_empty());
}

#[test]
fn deduplicate_collapses_the_page_into_families() {
    let page = run(&CatalogQuery {
        deduplicate: true,
        ..CatalogQuery::default()
    });
    let grouped = page.grouped.expect("deduplicated page");
    let group_ids: Vec<&str> = grouped.iter().map(|g| g.group_id.as_str()).collect();
    assert_eq!(group_ids, vec!["anchor-swivel", "teak-oil", "dock-line", "mystery-item"]);
    assert_eq!(grouped[0].listing.id, "l1");
    assert_eq!(grouped[0].variant_count, 2);
    assert_eq!(page.products.len(), 5);
}

#[test]
fn catalog_page_serializes_camel_case() {
    let page = run(&CatalogQuery {
        per_page: 2,
        ..CatalogQuery::default()
    });
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["perPage"], 2);
    assert_eq!(json["hasMore"], true);
    assert_eq!(json["facets"]["maxPrice"], 28.0);
    assert!(json.get("grouped").is_none());
}
