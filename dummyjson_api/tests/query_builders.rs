use std::str::FromStr;

use dummyjson_api::{ProductQuery, ProductSortBy, Query, SortDirection};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/products").unwrap()
}

#[test]
fn product_query_defaults_add_nothing() {
    let url = ProductQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
    assert_eq!(url.as_str(), "https://example.com/products");
}

#[test]
fn product_query_pagination() {
    let url = ProductQuery::default()
        .with_limit(0)
        .with_skip(30)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("limit=0"));
    assert!(query.contains("skip=30"));
    assert!(!query.contains("sortBy"));
}

#[test]
fn product_query_sort_variants() {
    let url = ProductQuery::default()
        .with_sort_by(ProductSortBy::Title)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("sortBy=title"));
    assert!(query.contains("order=asc"));

    let url = ProductQuery::default()
        .with_sort_by(ProductSortBy::Rating)
        .with_sort_direction(SortDirection::Desc)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("sortBy=rating"));
    assert!(query.contains("order=desc"));
}

#[test]
fn sort_by_from_str() {
    assert_eq!(ProductSortBy::from_str("price"), Ok(ProductSortBy::Price));
    assert_eq!(
        ProductSortBy::from_str("discount"),
        Ok(ProductSortBy::DiscountPercentage)
    );
    assert_eq!(ProductSortBy::from_str("popularity"), Err(()));
    assert_eq!(SortDirection::from_str("desc"), Ok(SortDirection::Desc));
    assert_eq!(SortDirection::from_str("down"), Err(()));
}
