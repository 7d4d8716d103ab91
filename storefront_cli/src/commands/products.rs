use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use clap::Args;
use dummyjson_api::{Client, ProductQuery, ProductSortBy, Query, SortDirection};

use crate::output::{print_json, print_products, OutputFormat};

#[derive(Args)]
pub struct ProductsArgs {
    /// Only list products in this category slug (e.g. smartphones, beauty)
    #[arg(long)]
    pub category: Option<String>,

    /// Results per page (0 returns every product)
    #[arg(long)]
    pub limit: Option<i64>,

    /// Number of products to skip
    #[arg(long)]
    pub skip: Option<i64>,

    /// Sort field: title, price, rating, stock, discount
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,
}

#[derive(Args)]
pub struct ProductArgs {
    /// Product ID
    pub id: String,
}

pub async fn run(args: &ProductsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = ProductQuery::default();

    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }
    if let Some(skip) = args.skip {
        query = query.with_skip(skip);
    }
    if let Some(sort_by) = &args.sort_by {
        let s = ProductSortBy::from_str(sort_by).map_err(|_| {
            anyhow!(
                "Unknown sort field '{}'. Expected one of: title, price, rating, stock, discount",
                sort_by
            )
        })?;
        query = query.with_sort_by(s);
    }
    if args.desc {
        query = query.with_sort_direction(SortDirection::Desc);
    }

    let Some(list) = client
        .fetch_product_page(args.category.as_deref(), &query)
        .await?
    else {
        match &args.category {
            Some(category) => bail!("No product listing found for category '{}'", category),
            None => bail!("No product listing found"),
        }
    };

    match format {
        OutputFormat::Json => print_json(&list),
        _ => {
            print_products(&list.products, format)?;
            if *format == OutputFormat::Table {
                eprintln!(
                    "Showing {} of {} products (skipped {})",
                    list.products.len(),
                    list.total,
                    list.skip
                );
            }
        }
    }

    Ok(())
}

pub async fn run_sales(client: &Client, format: &OutputFormat) -> Result<()> {
    let products = client.fetch_sales_products().await?;
    print_products(&products, format)
}

pub async fn run_product(args: &ProductArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let Some(product) = client.fetch_product(&args.id).await? else {
        bail!("Product {} not found", args.id);
    };

    match format {
        OutputFormat::Json => print_json(&product),
        _ => {
            print_products(std::slice::from_ref(&product), format)?;
            if *format == OutputFormat::Table {
                println!("{}", product.description);
                println!("Thumbnail: {}", product.thumbnail);
            }
        }
    }

    Ok(())
}
