mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dummyjson_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the storefront catalog served by dummyjson")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL, overriding DUMMYJSON_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally within one category
    Products(commands::products::ProductsArgs),
    /// List products discounted by more than 10%
    Sales,
    /// List product categories
    Categories(commands::categories::CategoriesArgs),
    /// Show a single product by ID
    Product(commands::products::ProductArgs),
    /// Print the image URL representing a category
    CategoryImage(commands::categories::CategoryImageArgs),
    /// Show customer testimonials
    Testimonials,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("storefront=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    tracing::debug!("Using catalog API at {}", config.base_url);
    let client = Client::from_config(&config)?;

    match &cli.command {
        Commands::Products(args) => commands::products::run(args, &client, &format).await?,
        Commands::Sales => commands::products::run_sales(&client, &format).await?,
        Commands::Categories(args) => commands::categories::run(args, &client, &format).await?,
        Commands::Product(args) => commands::products::run_product(args, &client, &format).await?,
        Commands::CategoryImage(args) => {
            commands::categories::run_image(args, &client, &format).await?
        }
        Commands::Testimonials => commands::testimonials::run(&client, &format).await?,
    }

    Ok(())
}
