//! Typed client for the dummyjson product catalog used by the storefront.

mod client;
mod config;
mod errors;
mod query;
mod report;
mod testimonials;
pub mod types;
pub use self::client::{Client, SALE_DISCOUNT_THRESHOLD};
pub use self::config::{ClientConfig, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{ProductQuery, ProductSortBy, Query, QueryCommon, SortDirection};
pub use self::report::{RecordingReporter, Reporter, TracingReporter};
pub use self::testimonials::testimonials;
