use std::collections::HashSet;

use chrono::Utc;
use shoestore_api::locale::LocalizedText;
use shoestore_api::models::{Category, ColorOption, Product, SizeOption};
use shoestore_api::search::{
    self, CatalogSnapshot, FilterPanel, FilterSelection, FixedCatalog, PriceBucket, SearchSession,
    apply_selection,
};
use uuid::Uuid;

fn product(name: &str, category: &str, sizes: &[&str], colors: &[&str]) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: LocalizedText::plain(name),
        category: category.to_string(),
        description: None,
        price: 10000,
        selling_price: 10000,
        sale: None,
        sizes: sizes.iter().map(|s| s.to_string()).collect(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
        images: vec![],
        stock: 10,
        is_active: None,
        is_new: false,
        parents_id: None,
        created_at: Utc::now(),
    }
}

fn inactive(mut product: Product) -> Product {
    product.is_active = Some(false);
    product
}

fn priced(mut product: Product, selling_price: i64) -> Product {
    product.selling_price = selling_price;
    product
}

fn category(name: &str) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: LocalizedText::plain(name),
        slug: name.to_lowercase(),
        is_active: None,
        created_at: Utc::now(),
    }
}

fn size(value: &str) -> SizeOption {
    SizeOption {
        id: Uuid::new_v4(),
        value: value.to_string(),
        is_active: None,
        created_at: Utc::now(),
    }
}

fn color(name: &str) -> ColorOption {
    ColorOption {
        id: Uuid::new_v4(),
        name: name.to_string(),
        code: "#000000".to_string(),
        is_active: None,
        created_at: Utc::now(),
    }
}

fn catalog(
    products: Vec<Product>,
    categories: Vec<Category>,
    sizes: Vec<SizeOption>,
    colors: Vec<ColorOption>,
) -> FixedCatalog {
    FixedCatalog::new(CatalogSnapshot {
        products,
        categories,
        sizes,
        colors,
    })
}

fn product_ids(products: &[Product]) -> HashSet<Uuid> {
    products.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn blank_query_is_the_empty_result() {
    let source = catalog(
        vec![product("Shoe", "Sneakers", &[], &["Red"])],
        vec![category("Sneakers")],
        vec![size("42")],
        vec![color("Red")],
    );

    for raw in ["", "   ", "\t\n"] {
        let outcome = search::search(&source, raw).await.unwrap();
        assert!(outcome.products.is_empty());
        assert!(outcome.categories.is_empty());
        assert!(outcome.sizes.is_empty());
        assert!(outcome.colors.is_empty());
    }
}

#[tokio::test]
async fn color_query_returns_the_color_and_its_products() {
    let p1 = product("Shoe", "Sneakers", &[], &["Red"]);
    let p1_id = p1.id;
    let source = catalog(vec![p1], vec![], vec![], vec![color("Red")]);

    let outcome = search::search(&source, "red").await.unwrap();
    assert_eq!(outcome.colors.len(), 1);
    assert_eq!(outcome.colors[0].name, "Red");
    assert!(product_ids(&outcome.products).contains(&p1_id));
}

#[tokio::test]
async fn inactive_products_never_appear() {
    let hidden = inactive(product("Red Sneaker", "Sneakers", &["42"], &["Red"]));
    let source = catalog(
        vec![hidden],
        vec![category("Sneakers")],
        vec![size("42")],
        vec![color("Red")],
    );

    for raw in ["red", "sneaker", "42"] {
        let outcome = search::search(&source, raw).await.unwrap();
        assert!(outcome.products.is_empty(), "query {raw:?} leaked a hidden product");
    }
}

#[tokio::test]
async fn unmatched_query_returns_four_empty_sequences() {
    let source = catalog(
        vec![product("Shoe", "Sneakers", &["42"], &["Red"])],
        vec![category("Sneakers")],
        vec![size("42")],
        vec![color("Red")],
    );

    let outcome = search::search(&source, "zzz-no-match").await.unwrap();
    assert!(outcome.products.is_empty());
    assert!(outcome.categories.is_empty());
    assert!(outcome.sizes.is_empty());
    assert!(outcome.colors.is_empty());
}

#[tokio::test]
async fn category_match_pulls_in_its_products_and_direct_name_matches() {
    let by_category = product("Beach Walker", "Sandals", &[], &[]);
    let by_name = product("Sandals Edition", "Sneakers", &[], &[]);
    let (id_a, id_b) = (by_category.id, by_name.id);

    let source = catalog(
        vec![by_category, by_name],
        vec![category("Sandals")],
        vec![],
        vec![],
    );

    let outcome = search::search(&source, "sandals").await.unwrap();
    assert_eq!(outcome.categories.len(), 1);
    let ids = product_ids(&outcome.products);
    assert!(ids.contains(&id_a), "category expansion missed");
    assert!(ids.contains(&id_b), "direct name match missed");
}

#[tokio::test]
async fn products_are_deduplicated_across_match_paths() {
    // Direct name match, color expansion and category expansion all hit the
    // same product.
    let p = product("Red Runner", "Red Carpet Collection", &[], &["Red"]);
    let p_id = p.id;
    let source = catalog(
        vec![p],
        vec![category("Red Carpet Collection")],
        vec![],
        vec![color("Red")],
    );

    let outcome = search::search(&source, "red").await.unwrap();
    assert_eq!(outcome.products.len(), 1);
    assert_eq!(outcome.products[0].id, p_id);
}

#[tokio::test]
async fn same_snapshot_and_query_is_idempotent() {
    let source = catalog(
        vec![
            product("City Runner", "Sneakers", &["41", "42"], &["Black"]),
            product("Strap Sandal", "Sandals", &["40"], &["White"]),
        ],
        vec![category("Sneakers"), category("Sandals")],
        vec![size("40"), size("41"), size("42")],
        vec![color("Black"), color("White")],
    );

    let first = search::search(&source, "sneakers").await.unwrap();
    let second = search::search(&source, "sneakers").await.unwrap();
    assert_eq!(product_ids(&first.products), product_ids(&second.products));
    assert_eq!(first.categories.len(), second.categories.len());
}

#[tokio::test]
async fn query_is_trimmed_and_case_folded() {
    let p = product("Shoe", "Sneakers", &[], &["Red"]);
    let p_id = p.id;
    let source = catalog(vec![p], vec![], vec![], vec![color("Red")]);

    let outcome = search::search(&source, "  RED ").await.unwrap();
    assert!(product_ids(&outcome.products).contains(&p_id));
    assert_eq!(outcome.colors.len(), 1);
}

#[tokio::test]
async fn localized_names_match_in_any_language() {
    let mut p = product("placeholder", "Sneakers", &[], &[]);
    p.name = LocalizedText::Map(
        [
            ("az".to_string(), "İdman ayaqqabısı".to_string()),
            ("en".to_string(), "City Runner".to_string()),
        ]
        .into_iter()
        .collect(),
    );
    let p_id = p.id;
    let source = catalog(vec![p], vec![], vec![], vec![]);

    let outcome = search::search(&source, "runner").await.unwrap();
    assert!(product_ids(&outcome.products).contains(&p_id));

    let outcome = search::search(&source, "ayaqqabı").await.unwrap();
    assert!(product_ids(&outcome.products).contains(&p_id));
}

#[tokio::test]
async fn inactive_facets_do_not_match_or_expand() {
    let p = product("Shoe", "Sneakers", &[], &["Red"]);
    let mut red = color("Red");
    red.is_active = Some(false);
    let source = catalog(vec![p], vec![], vec![], vec![red]);

    let outcome = search::search(&source, "red").await.unwrap();
    assert!(outcome.colors.is_empty());
    // The product still direct-matches on its own colors list.
    assert_eq!(outcome.products.len(), 1);
}

#[tokio::test]
async fn direct_matches_precede_facet_implied_products() {
    // The implied product stores its category in another locale, so only the
    // category expansion through the localized category name can reach it.
    let direct = product("Sandals Edition", "Sneakers", &[], &[]);
    let implied = product("Beach Walker", "Səndəllər", &[], &[]);
    let (direct_id, implied_id) = (direct.id, implied.id);

    let mut sandals = category("Sandals");
    sandals.name = LocalizedText::Map(
        [
            ("az".to_string(), "Səndəllər".to_string()),
            ("en".to_string(), "Sandals".to_string()),
        ]
        .into_iter()
        .collect(),
    );

    let source = catalog(vec![implied, direct], vec![sandals], vec![], vec![]);

    let outcome = search::search(&source, "sandals").await.unwrap();
    let ids: Vec<Uuid> = outcome.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![direct_id, implied_id]);
}

#[tokio::test]
async fn session_returns_the_outcome_of_a_single_run() {
    let p = product("Shoe", "Sneakers", &[], &["Red"]);
    let session = SearchSession::new(catalog(vec![p], vec![], vec![], vec![color("Red")]));

    let outcome = session.run("red").await.unwrap();
    assert_eq!(outcome.products.len(), 1);

    let outcome = session.run("").await.unwrap();
    assert!(outcome.products.is_empty());
}

#[test]
fn filter_panel_accumulates_toggles_until_cleared() {
    let mut panel = FilterPanel::new();
    panel.toggle_color("Red");
    panel.toggle_color("Black");
    panel.toggle_size("42");
    panel.toggle_category("Sneakers");
    panel.toggle_price_bucket(PriceBucket {
        min: 0,
        max: Some(15000),
    });

    // Toggling an already-selected value removes it.
    panel.toggle_color("Black");

    let selection = panel.apply();
    assert_eq!(selection.colors, vec!["Red".to_string()]);
    assert_eq!(selection.sizes, vec!["42".to_string()]);
    assert_eq!(selection.categories, vec!["Sneakers".to_string()]);
    assert_eq!(selection.price_buckets.len(), 1);

    panel.clear();
    assert!(panel.apply().is_empty());
}

#[test]
fn selection_is_or_within_a_facet_and_and_across_facets() {
    let red_42 = product("A", "Sneakers", &["42"], &["Red"]);
    let black_42 = product("B", "Sneakers", &["42"], &["Black"]);
    let red_40 = product("C", "Sneakers", &["40"], &["Red"]);
    let sandal = product("D", "Sandals", &["42"], &["Red"]);
    let ids = (red_42.id, black_42.id, red_40.id, sandal.id);
    let products = vec![red_42, black_42, red_40, sandal];

    let selection = FilterSelection {
        colors: vec!["red".into(), "black".into()],
        sizes: vec!["42".into()],
        price_buckets: vec![],
        categories: vec!["Sneakers".into()],
    };

    let matched = apply_selection(&products, &selection);
    let matched_ids = product_ids(&matched);
    assert!(matched_ids.contains(&ids.0));
    assert!(matched_ids.contains(&ids.1));
    assert!(!matched_ids.contains(&ids.2), "size facet must AND");
    assert!(!matched_ids.contains(&ids.3), "category facet must AND");
}

#[test]
fn empty_selection_keeps_all_live_products() {
    let live = product("A", "Sneakers", &[], &[]);
    let hidden = inactive(product("B", "Sneakers", &[], &[]));
    let live_id = live.id;

    let matched = apply_selection(&[live, hidden], &FilterSelection::default());
    assert_eq!(product_ids(&matched), HashSet::from([live_id]));
}

#[test]
fn price_buckets_bound_the_selling_price_inclusively() {
    let cheap = priced(product("A", "Sneakers", &[], &[]), 5000);
    let exact = priced(product("B", "Sneakers", &[], &[]), 15000);
    let expensive = priced(product("C", "Sneakers", &[], &[]), 30000);
    let ids = (cheap.id, exact.id, expensive.id);
    let products = vec![cheap, exact, expensive];

    let selection = FilterSelection {
        price_buckets: vec![PriceBucket {
            min: 5000,
            max: Some(15000),
        }],
        ..FilterSelection::default()
    };

    let matched_ids = product_ids(&apply_selection(&products, &selection));
    assert!(matched_ids.contains(&ids.0));
    assert!(matched_ids.contains(&ids.1));
    assert!(!matched_ids.contains(&ids.2));

    let open_ended = FilterSelection {
        price_buckets: vec![PriceBucket {
            min: 20000,
            max: None,
        }],
        ..FilterSelection::default()
    };
    let matched_ids = product_ids(&apply_selection(&products, &open_ended));
    assert_eq!(matched_ids, HashSet::from([ids.2]));
}
