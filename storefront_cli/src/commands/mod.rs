//! CLI subcommand implementations.

pub mod categories;
pub mod products;
pub mod testimonials;
