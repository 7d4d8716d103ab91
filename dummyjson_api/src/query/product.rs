use std::str::FromStr;

use url::Url;

use super::common::{Query, QueryCommon};

/// Pagination and sorting for product listings.
///
/// The default query adds no parameters, which yields the plain listing.
#[derive(Default, Debug, Clone)]
pub struct ProductQuery {
    pub common: QueryCommon,
    pub sort_by: Option<ProductSortBy>,
}

impl Query for ProductQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(sort_by) = self.sort_by {
            url.query_pairs_mut()
                .append_pair("sortBy", sort_by.to_string().as_str())
                .append_pair("order", self.common.sort_direction.to_string().as_str());
        }
        url
    }
}

impl ProductQuery {
    pub fn with_sort_by(mut self, sort_by: ProductSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

/// Product fields the server can sort on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductSortBy {
    Title,
    Price,
    Rating,
    Stock,
    DiscountPercentage,
}
impl std::fmt::Display for ProductSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProductSortBy::Title => "title",
                ProductSortBy::Price => "price",
                ProductSortBy::Rating => "rating",
                ProductSortBy::Stock => "stock",
                ProductSortBy::DiscountPercentage => "discountPercentage",
            }
        )?;
        Ok(())
    }
}
impl FromStr for ProductSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(ProductSortBy::Title),
            "price" => Ok(ProductSortBy::Price),
            "rating" => Ok(ProductSortBy::Rating),
            "stock" => Ok(ProductSortBy::Stock),
            "discount" | "discountPercentage" => Ok(ProductSortBy::DiscountPercentage),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{ProductQuery, ProductSortBy, Query, SortDirection};

    #[test]
    fn test_product_query() {
        let url = Url::parse("https://example.com/products").unwrap();

        insta::assert_snapshot!(
            ProductQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/products"
        );

        insta::assert_snapshot!(
            ProductQuery::default()
                .with_limit(10)
                .with_skip(20)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/products?limit=10&skip=20"
        );

        insta::assert_snapshot!(
            ProductQuery::default()
                .with_sort_by(ProductSortBy::DiscountPercentage)
                .with_sort_direction(SortDirection::Desc)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/products?sortBy=discountPercentage&order=desc"
        );
    }

    #[test]
    fn sort_direction_without_field_is_ignored() {
        let url = Url::parse("https://example.com/products").unwrap();
        let url = ProductQuery::default()
            .with_sort_direction(SortDirection::Desc)
            .add_to_url(&url);
        assert_eq!(url.query(), None);
    }
}
