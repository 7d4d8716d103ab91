use anyhow::Result;
use dummyjson_api::Client;

use crate::output::{print_testimonials, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let testimonials = client.fetch_testimonials().await;
    print_testimonials(&testimonials, format)
}
