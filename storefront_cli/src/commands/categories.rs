use anyhow::Result;
use clap::Args;
use dummyjson_api::Client;

use crate::output::{print_categories, print_category_slugs, print_json, OutputFormat};

#[derive(Args)]
pub struct CategoriesArgs {
    /// Show display names and URLs alongside slugs
    #[arg(long)]
    pub detailed: bool,
}

#[derive(Args)]
pub struct CategoryImageArgs {
    /// Category slug (e.g. smartphones)
    pub category: String,
}

pub async fn run(args: &CategoriesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    // Category listing failures are logged by the client and come back empty.
    if args.detailed {
        let categories = client.fetch_category_entries().await;
        print_categories(&categories, format)
    } else {
        let slugs = client.fetch_categories().await;
        print_category_slugs(&slugs, format)
    }
}

pub async fn run_image(
    args: &CategoryImageArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let thumbnail = client.fetch_category_image(&args.category).await?;
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "category": args.category,
            "thumbnail": thumbnail,
        })),
        _ => println!("{}", thumbnail),
    }
    Ok(())
}
