//! HTTP client for the dummyjson catalog API.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    query::{ProductQuery, Query},
    report::{Reporter, TracingReporter},
    testimonials::testimonials,
    types::{Category, Product, ProductList, Testimonial},
    Error,
};

/// Products with a discount strictly above this percentage are on sale.
pub const SALE_DISCOUNT_THRESHOLD: f64 = 10.0;

/// HTTP client for the dummyjson product catalog.
///
/// Remote reads follow two different failure policies:
///
/// * product reads return `Ok(None)` when the server answers 404 and try to
///   decode every other response, whatever its status;
/// * category reads never fail outward. Failures go to the [`Reporter`] and
///   the caller gets an empty list.
///
/// The `try_` variant of the category read exposes the underlying outcome.
pub struct Client {
    /// Base URL for the API. Defaults to `https://dummyjson.com`.
    base_api_url: Url,
    http: reqwest::Client,
    reporter: Arc<dyn Reporter>,
}

impl Client {
    /// Creates a new client pointing at the production dummyjson API.
    pub fn new() -> Result<Self, Error> {
        Self::from_config(&ClientConfig::default())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::from_config(&ClientConfig::default().with_base_url(base_url))
    }

    /// Creates a client from explicit settings, reporting through `tracing`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let base_api_url = Url::parse(&config.base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", config.base_url, e);
            Error::InvalidBaseUrl(config.base_url.clone())
        })?;
        if base_api_url.cannot_be_a_base() {
            tracing::error!("Base URL {} cannot hold a path", config.base_url);
            return Err(Error::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::ClientBuild(e)
        })?;

        Ok(Self {
            base_api_url,
            http,
            reporter: Arc::new(TracingReporter),
        })
    }

    /// Replaces the sink that receives swallowed failures.
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    fn get_url<Q: Query>(&self, segments: &[&str], query: Option<&Q>) -> Result<Url, Error> {
        let mut url = self.base_api_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(self.base_api_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn send(&self, url: Url) -> Result<reqwest::Response, Error> {
        tracing::debug!("GET {}", url);
        self.http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(Error::RequestFailed)
    }

    /// Sends the request and decodes the body. 404 becomes `Ok(None)`; any
    /// other status is decoded as if it succeeded.
    async fn get_optional<T>(&self, url: Url) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
    {
        let resp = self.send(url).await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Resource not found");
            return Ok(None);
        }
        let body = resp.text().await.map_err(Error::RequestFailed)?;
        parse_body(status, &body).map(Some)
    }

    /// Fetches the product listing, scoped to `category` when one is given.
    ///
    /// An empty category string is treated as no category.
    pub async fn fetch_products(
        &self,
        category: Option<&str>,
    ) -> Result<Option<ProductList>, Error> {
        self.fetch_product_page(category, &ProductQuery::default())
            .await
    }

    /// Fetches one page of the product listing with explicit pagination and sorting.
    pub async fn fetch_product_page(
        &self,
        category: Option<&str>,
        query: &ProductQuery,
    ) -> Result<Option<ProductList>, Error> {
        let url = match category.filter(|c| !c.is_empty()) {
            Some(category) => self.get_url(&["products", "category", category], Some(query))?,
            None => self.get_url(&["products"], Some(query))?,
        };
        self.get_optional::<ProductList>(url).await.inspect_err(|e| {
            tracing::error!("Failed to fetch products: {}", e);
        })
    }

    /// Fetches the unscoped listing and keeps products discounted by more than
    /// [`SALE_DISCOUNT_THRESHOLD`] percent.
    ///
    /// A 404 for the listing is returned as [`Error::ProductListMissing`].
    /// Storefront pages assume the listing always exists and crash on this
    /// path, so callers should handle the error explicitly.
    pub async fn fetch_sales_products(&self) -> Result<Vec<Product>, Error> {
        let list = self.fetch_products(None).await?.ok_or_else(|| {
            tracing::error!("Product listing not found, no sales to select");
            Error::ProductListMissing
        })?;
        Ok(list
            .products
            .into_iter()
            .filter(|p| p.is_discounted_over(SALE_DISCOUNT_THRESHOLD))
            .collect())
    }

    /// Fetches the category slugs. Never fails: problems are reported and an
    /// empty list is returned.
    pub async fn fetch_categories(&self) -> Vec<String> {
        self.fetch_category_entries()
            .await
            .into_iter()
            .map(|category| category.slug)
            .collect()
    }

    /// Fetches the category records. Never fails, like [`Client::fetch_categories`].
    pub async fn fetch_category_entries(&self) -> Vec<Category> {
        match self.try_fetch_category_entries().await {
            Ok(categories) => categories,
            Err(e) => {
                self.reporter.error(&category_failure_message(&e));
                Vec::new()
            }
        }
    }

    /// Fetches the category records, returning every failure to the caller.
    ///
    /// Elements that are not objects with a string `slug` are skipped.
    pub async fn try_fetch_category_entries(&self) -> Result<Vec<Category>, Error> {
        let url = self.get_url::<ProductQuery>(&["products", "categories"], None)?;
        let resp = self.send(url).await?;
        let status = resp.status();
        if !status.is_success() {
            // The status alone decides the outcome; a body that fails to arrive is dropped.
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }
        let body = resp.text().await.map_err(Error::RequestFailed)?;

        let Value::Array(entries) = parse_body::<Value>(status, &body)? else {
            return Err(Error::UnexpectedShape {
                expected: "an array of categories",
                body: truncate_body(&body),
            });
        };
        let categories: Vec<Category> = entries.iter().filter_map(Category::from_entry).collect();
        if categories.len() < entries.len() {
            tracing::debug!(
                "Skipped {} malformed category entries",
                entries.len() - categories.len()
            );
        }
        Ok(categories)
    }

    /// Fetches a single product by its id.
    pub async fn fetch_product(&self, id: &str) -> Result<Option<Product>, Error> {
        let url = self.get_url::<ProductQuery>(&["products", id], None)?;
        self.get_optional::<Product>(url).await.inspect_err(|e| {
            tracing::error!("Failed to fetch product {}: {}", id, e);
        })
    }

    /// Returns the thumbnail of the first product in `category`.
    ///
    /// A missing listing is [`Error::ProductListMissing`] and a listing with
    /// no products is [`Error::EmptyCategory`]. Storefront pages assume
    /// neither can happen.
    pub async fn fetch_category_image(&self, category: &str) -> Result<String, Error> {
        let list = self.fetch_products(Some(category)).await?.ok_or_else(|| {
            tracing::error!("Product listing for {} not found", category);
            Error::ProductListMissing
        })?;
        list.products
            .into_iter()
            .next()
            .map(|product| product.thumbnail)
            .ok_or_else(|| {
                tracing::error!("Category {} has no products", category);
                Error::EmptyCategory {
                    category: category.to_string(),
                }
            })
    }

    /// Returns the fixed storefront testimonials. Performs no I/O.
    pub async fn fetch_testimonials(&self) -> Vec<Testimonial> {
        testimonials()
    }
}

fn parse_body<T>(status: StatusCode, body: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(body).map_err(|source| Error::Parse {
        status: status.as_u16(),
        body: truncate_body(body),
        source,
    })
}

fn category_failure_message(error: &Error) -> String {
    match error {
        Error::HttpStatus { status, .. } => {
            let reason = StatusCode::from_u16(*status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("");
            format!("Fetch failed with status {}: {}", status, reason)
        }
        Error::UnexpectedShape { body, .. } => format!("Unexpected data format: {}", body),
        other => format!("Error fetching category slugs: {}", other),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
