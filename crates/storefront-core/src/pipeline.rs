//! Catalog Pipeline
//!
//! Derives the visible product page from the catalog:
//! category filter → text filter → sort → paginate.
//! Everything here is pure; identical inputs give identical output.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Category value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Keep catalog order
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    /// Highest average rating first
    Rating,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Default,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::Rating,
    ];

    /// Form value used by the sort `<select>`
    pub fn value(self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::Rating => "rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Default => "Default",
            SortMode::PriceAsc => "Price: Low → High",
            SortMode::PriceDesc => "Price: High → Low",
            SortMode::Rating => "Top Rated",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.value() == value)
    }
}

/// User-controlled filter state
///
/// Search and category changes restart paging at 1; sort changes keep the page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    text: String,
    category: String,
    sort: SortMode,
    page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort: SortMode::Default,
            page: 1,
        }
    }
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.page = 1;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    /// Jump to a page; 0 is treated as 1
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self, page_count: usize) {
        self.page = (self.page + 1).min(page_count.max(1));
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Reset to page 1 when the page fell off the end of the result set.
    /// Returns whether the page changed.
    pub fn clamp_to(&mut self, page_count: usize) -> bool {
        let page = effective_page(self.page, page_count);
        let changed = page != self.page;
        self.page = page;
        changed
    }
}

/// One derived page of the catalog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogPage {
    /// Products on the current page, in display order
    pub items: Vec<Product>,
    /// Number of products surviving the filters
    pub total: usize,
    /// Page actually shown (1-based)
    pub page: usize,
    pub page_count: usize,
}

/// Apply category and text filters, then sort
pub fn filter_and_sort<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    let mut list: Vec<&Product> = products.iter().collect();

    if query.category != ALL_CATEGORIES {
        list.retain(|p| p.category == query.category);
    }

    if !query.text.trim().is_empty() {
        let needle = query.text.to_lowercase();
        list.retain(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description().to_lowercase().contains(&needle)
        });
    }

    // sort_by is stable
    match query.sort {
        SortMode::Default => {}
        SortMode::PriceAsc => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => list.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::Rating => list.sort_by(|a, b| b.rating_rate().total_cmp(&a.rating_rate())),
    }

    list
}

/// Number of pages for `total` results, never less than 1
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Page to display: out-of-range pages fall back to 1
pub fn effective_page(page: usize, page_count: usize) -> usize {
    if page == 0 || page > page_count {
        1
    } else {
        page
    }
}

/// Full pipeline: filter, sort, and cut out the requested page
pub fn paginate(products: &[Product], query: &CatalogQuery, page_size: usize) -> CatalogPage {
    let filtered = filter_and_sort(products, query);
    let page_size = page_size.max(1);
    let total = filtered.len();
    let page_count = page_count(total, page_size);
    let page = effective_page(query.page, page_count);

    let items = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    CatalogPage { items, total, page, page_count }
}

/// Category options: "all" followed by distinct categories in first-seen order
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !out[1..].iter().any(|c| *c == product.category) {
            out.push(product.category.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{product, rated};
    use proptest::prelude::*;

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Backpack", "bags", 109.95),
            product(2, "Slim Fit T-Shirt", "men's clothing", 22.3),
            product(3, "Cotton Jacket", "men's clothing", 55.99),
            product(4, "Gold Ring", "jewelery", 9.99),
            product(5, "Tote", "bags", 15.0),
        ]
    }

    fn ids(list: &[&Product]) -> Vec<u32> {
        list.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_category_keeps_everything() {
        let products = catalog();
        let result = filter_and_sort(&products, &CatalogQuery::new());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let products = catalog();
        let mut query = CatalogQuery::new();
        query.set_category("bags");
        assert_eq!(ids(&filter_and_sort(&products, &query)), vec![1, 5]);

        query.set_category("Bags");
        assert!(filter_and_sort(&products, &query).is_empty());

        query.set_category("clothing");
        assert!(filter_and_sort(&products, &query).is_empty());
    }

    #[test]
    fn test_text_matches_title_or_description_case_insensitive() {
        let mut products = catalog();
        products[3].description = Some("Satisfaction GUARANTEED".to_string());
        products[4].description = None;

        let mut query = CatalogQuery::new();
        query.set_text("JACKET");
        assert_eq!(ids(&filter_and_sort(&products, &query)), vec![3]);

        query.set_text("guaranteed");
        assert_eq!(ids(&filter_and_sort(&products, &query)), vec![4]);

        query.set_text("description of tote");
        assert!(filter_and_sort(&products, &query).is_empty());
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let products = catalog();
        let mut query = CatalogQuery::new();
        query.set_text("   ");
        assert_eq!(filter_and_sort(&products, &query).len(), products.len());
    }

    #[test]
    fn test_category_then_text() {
        let products = catalog();
        let mut query = CatalogQuery::new();
        query.set_category("men's clothing");
        query.set_text("shirt");
        assert_eq!(ids(&filter_and_sort(&products, &query)), vec![2]);
    }

    #[test]
    fn test_price_sorts() {
        let products = catalog();
        let mut query = CatalogQuery::new();
        query.set_sort(SortMode::PriceAsc);
        assert_eq!(ids(&filter_and_sort(&products, &query)), vec![4, 5, 2, 3, 1]);
        query.set_sort(SortMode::PriceDesc);
        assert_eq!(ids(&filter_and_sort(&products, &query)), vec![1, 3, 2, 5, 4]);
    }

    #[test]
    fn test_rating_sort_treats_missing_as_zero_and_is_stable() {
        let products = vec![
            product(1, "Unrated", "misc", 1.0),
            rated(2, 1.0, 4.5),
            rated(3, 1.0, 2.0),
            rated(4, 1.0, 4.5),
            rated(5, 1.0, 0.0),
        ];
        let mut query = CatalogQuery::new();
        query.set_sort(SortMode::Rating);
        assert_eq!(ids(&filter_and_sort(&products, &query)), vec![2, 4, 3, 1, 5]);
    }

    #[test]
    fn test_sort_mode_values() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from_value(mode.value()), Some(mode));
        }
        assert_eq!(SortMode::from_value("price-asc"), Some(SortMode::PriceAsc));
        assert_eq!(SortMode::from_value("cheapest"), None);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 12), 1);
        assert_eq!(page_count(12, 12), 1);
        assert_eq!(page_count(13, 12), 2);
        assert_eq!(page_count(25, 12), 3);
    }

    #[test]
    fn test_paginate_slices_pages() {
        let products: Vec<Product> = (1..=25).map(|i| rated(i, i as f64, 0.0)).collect();
        let mut query = CatalogQuery::new();
        query.set_page(3);
        let page = paginate(&products, &query, 12);
        assert_eq!(page.total, 25);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.iter().map(|p| p.id).collect::<Vec<_>>(), vec![25]);

        query.set_page(2);
        let page = paginate(&products, &query, 12);
        assert_eq!(page.items.first().map(|p| p.id), Some(13));
        assert_eq!(page.items.len(), 12);
    }

    #[test]
    fn test_out_of_range_page_resets_to_first() {
        let products: Vec<Product> = (1..=25).map(|i| rated(i, 1.0, 0.0)).collect();
        let mut query = CatalogQuery::new();
        query.set_page(5);
        let page = paginate(&products, &query, 12);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.first().map(|p| p.id), Some(1));

        assert!(query.clamp_to(page.page_count));
        assert_eq!(query.page(), 1);
        assert!(!query.clamp_to(page.page_count));
    }

    #[test]
    fn test_empty_catalog_has_one_page() {
        let page = paginate(&[], &CatalogQuery::new(), 12);
        assert_eq!(page, CatalogPage { items: vec![], total: 0, page: 1, page_count: 1 });
    }

    #[test]
    fn test_filter_changes_reset_page_but_sort_does_not() {
        let mut query = CatalogQuery::new();
        query.set_page(3);
        query.set_sort(SortMode::PriceDesc);
        assert_eq!(query.page(), 3);
        query.set_text("bag");
        assert_eq!(query.page(), 1);
        query.set_page(2);
        query.set_category("bags");
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_prev_next_are_clamped() {
        let mut query = CatalogQuery::new();
        query.prev_page();
        assert_eq!(query.page(), 1);
        query.next_page(2);
        query.next_page(2);
        assert_eq!(query.page(), 2);
        query.next_page(0);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(
            categories(&catalog()),
            vec!["all", "bags", "men's clothing", "jewelery"]
        );
        assert_eq!(categories(&[]), vec!["all"]);
    }

    fn arb_products() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec(
            (0.0f64..500.0, prop::option::of(0.0f64..5.0), 0usize..3, "[a-c]{0,4}"),
            0..40,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (price, rate, cat, title))| {
                    let mut p = product(i as u32, &title, ["a", "b", "c"][cat], price);
                    p.rating = rate.map(|rate| crate::models::Rating { rate, count: 1 });
                    p
                })
                .collect()
        })
    }

    fn arb_query() -> impl Strategy<Value = CatalogQuery> {
        (
            "[a-c ]{0,3}",
            prop::sample::select(vec!["all", "a", "b", "c", "z"]),
            prop::sample::select(SortMode::ALL.to_vec()),
            0usize..6,
        )
            .prop_map(|(text, category, sort, page)| {
                let mut query = CatalogQuery::new();
                query.set_text(text);
                query.set_category(category);
                query.set_sort(sort);
                query.set_page(page);
                query
            })
    }

    proptest! {
        #[test]
        fn prop_output_is_subset_without_duplicates(products in arb_products(), query in arb_query()) {
            let page = paginate(&products, &query, 12);
            let mut seen = std::collections::HashSet::new();
            for item in &page.items {
                prop_assert!(products.contains(item));
                prop_assert!(seen.insert(item.id));
            }
            prop_assert!(page.items.len() <= 12);
            prop_assert!(page.page >= 1 && page.page <= page.page_count);
        }

        #[test]
        fn prop_price_sort_monotonic_over_whole_set(products in arb_products(), query in arb_query()) {
            let mut query = query;
            query.set_sort(SortMode::PriceAsc);
            let asc = filter_and_sort(&products, &query);
            prop_assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

            query.set_sort(SortMode::PriceDesc);
            let desc = filter_and_sort(&products, &query);
            prop_assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
        }

        #[test]
        fn prop_pipeline_is_idempotent(products in arb_products(), query in arb_query()) {
            prop_assert_eq!(paginate(&products, &query, 12), paginate(&products, &query, 12));
        }

        #[test]
        fn prop_default_sort_preserves_catalog_order(products in arb_products(), query in arb_query()) {
            let mut query = query;
            query.set_sort(SortMode::Default);
            let ids: Vec<u32> = filter_and_sort(&products, &query).iter().map(|p| p.id).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
