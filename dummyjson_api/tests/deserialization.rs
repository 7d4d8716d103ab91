use chrono::{Datelike, Timelike};
use dummyjson_api::types::{Category, Product, ProductList};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_product_list_full() {
    let json = load_fixture("products.json");
    let resp: ProductList = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.products.len(), 4);
    assert_eq!(resp.total, 194);
    assert_eq!(resp.skip, 0);
    assert_eq!(resp.limit, 30);

    let mascara = &resp.products[0];
    assert_eq!(mascara.id, 1);
    assert_eq!(mascara.price, 9.99);
    assert_eq!(mascara.discount_percentage, 7.17);
    assert_eq!(mascara.rating, 4.94);
    assert_eq!(mascara.stock, 5);
    assert_eq!(mascara.brand.as_deref(), Some("Essence"));
    assert_eq!(mascara.category, "beauty");
    assert_eq!(mascara.tags, vec!["beauty", "mascara"]);
    assert_eq!(mascara.availability_status.as_deref(), Some("Low Stock"));
    assert_eq!(mascara.images.len(), 1);
}

#[test]
fn deserialize_product_without_brand() {
    let json = load_fixture("products.json");
    let resp: ProductList = serde_json::from_str(&json).unwrap();
    let apple = resp.products.iter().find(|p| p.id == 16).unwrap();
    assert_eq!(apple.brand, None);
    assert_eq!(apple.sku, None);
    assert_eq!(apple.meta, None);
    assert_eq!(apple.discount_percentage, 10.0);
}

#[test]
fn deserialize_single_product_meta() {
    let json = load_fixture("product.json");
    let product: Product = serde_json::from_str(&json).unwrap();
    let meta = product.meta.unwrap();
    let created = meta.created_at.unwrap();
    assert_eq!(created.year(), 2024);
    assert_eq!(created.month(), 5);
    assert_eq!(created.hour(), 8);
    assert_eq!(meta.barcode.as_deref(), Some("9164035109868"));
}

#[test]
fn deserialize_categories_guarded() {
    let json = load_fixture("categories.json");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = value.as_array().unwrap();
    let categories: Vec<Category> = entries.iter().filter_map(Category::from_entry).collect();
    let slugs: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["beauty", "fragrances", "smartphones"]);
}

#[test]
fn deserialize_category_struct_requires_slug() {
    let ok: Category = serde_json::from_str(r#"{"slug": "tops"}"#).unwrap();
    assert_eq!(ok.slug, "tops");
    assert_eq!(ok.name, None);

    let missing = serde_json::from_str::<Category>(r#"{"name": "Tops"}"#);
    assert!(missing.is_err());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"products": not valid json}"#;
    let result = serde_json::from_str::<ProductList>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_partial_product_uses_empty_values() {
    let json = r#"{"products": [{"id": 1, "discountPercentage": 5}, {"id": 2, "discountPercentage": 15, "title": "Only a title"}]}"#;
    let resp: ProductList = serde_json::from_str(json).unwrap();
    assert_eq!(resp.products.len(), 2);
    assert_eq!(resp.total, 0);

    let bare = &resp.products[0];
    assert_eq!(bare.title, "");
    assert_eq!(bare.price, 0.0);
    assert_eq!(bare.stock, 0);
    assert!(bare.images.is_empty());
    assert_eq!(bare.thumbnail, "");
    assert_eq!(resp.products[1].title, "Only a title");
    assert_eq!(resp.products[1].discount_percentage, 15.0);
}

#[test]
fn deserialize_product_without_id_or_discount_returns_error() {
    let no_discount = serde_json::from_str::<Product>(r#"{"id": 1, "title": "Mascara"}"#);
    assert!(no_discount.is_err());

    let no_id = serde_json::from_str::<Product>(r#"{"discountPercentage": 12.5}"#);
    assert!(no_id.is_err());
}
