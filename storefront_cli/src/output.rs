use anyhow::Result;
use dummyjson_api::types::{Category, Product, Testimonial};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct ProductRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Brand")]
    #[serde(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Discount")]
    #[serde(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Rating")]
    #[serde(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Stock")]
    #[serde(rename = "Stock")]
    stock: i64,
}

#[derive(Tabled, Serialize)]
struct CategoryRow {
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

#[derive(Tabled, Serialize)]
struct SlugRow {
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    slug: String,
}

#[derive(Tabled, Serialize)]
struct TestimonialRow {
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
    #[tabled(rename = "Testimonial")]
    #[serde(rename = "Testimonial")]
    text: String,
}

// -- Row builders --

fn build_product_rows(products: &[Product]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            id: p.id,
            title: p.title.clone(),
            category: p.category.clone(),
            brand: p.brand.clone().unwrap_or_else(|| "-".to_string()),
            price: format_price(p.price),
            discount: format_discount(p.discount_percentage),
            rating: format!("{:.2}", p.rating),
            stock: p.stock,
        })
        .collect()
}

fn build_category_rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            slug: c.slug.clone(),
            name: c.name.clone().unwrap_or_default(),
            url: c.url.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_slug_rows(slugs: &[String]) -> Vec<SlugRow> {
    slugs
        .iter()
        .map(|slug| SlugRow { slug: slug.clone() })
        .collect()
}

fn build_testimonial_rows(testimonials: &[Testimonial]) -> Vec<TestimonialRow> {
    testimonials
        .iter()
        .map(|t| TestimonialRow {
            source: t.source.clone(),
            text: t.text.clone(),
        })
        .collect()
}

// -- Printers --

pub fn print_products(products: &[Product], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&products),
        _ => print_rows(build_product_rows(products), format)?,
    }
    Ok(())
}

pub fn print_categories(categories: &[Category], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&categories),
        _ => print_rows(build_category_rows(categories), format)?,
    }
    Ok(())
}

pub fn print_category_slugs(slugs: &[String], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&slugs),
        _ => print_rows(build_slug_rows(slugs), format)?,
    }
    Ok(())
}

pub fn print_testimonials(testimonials: &[Testimonial], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&testimonials),
        _ => print_rows(build_testimonial_rows(testimonials), format)?,
    }
    Ok(())
}

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    println!("{}", render_rows(rows, format)?.trim_end());
    Ok(())
}

/// Renders rows as CSV, a markdown table or a plain table. JSON is handled by
/// the callers, which serialize the library types directly.
fn render_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            for row in rows {
                wtr.serialize(row)?;
            }
            let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
            String::from_utf8(bytes)?
        }
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            table.to_string()
        }
        _ => Table::new(rows).to_string(),
    };
    Ok(rendered)
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

fn format_discount(discount_percentage: f64) -> String {
    format!("{:.1}%", discount_percentage)
}
