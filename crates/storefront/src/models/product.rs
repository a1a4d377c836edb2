//! Product catalog with per-retailer pricing.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use auro_core::{HealthPreference, Price, ProductId};

/// A product's price at one retailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailerPrice {
    pub retailer: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Discount in whole percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: f64,
    pub health_tags: Vec<HealthPreference>,
    pub prices: Vec<RetailerPrice>,
    #[serde(default)]
    pub best_value: bool,
}

impl Product {
    /// The cheapest listed price, if any retailer lists one.
    #[must_use]
    pub fn lowest_price(&self) -> Option<Price> {
        self.prices.iter().map(|p| p.price).min()
    }

    /// The retailer offering the lowest price.
    #[must_use]
    pub fn cheapest_offer(&self) -> Option<&RetailerPrice> {
        self.prices.iter().min_by_key(|p| p.price)
    }

    /// Largest discount offered by any retailer, 0 when none.
    #[must_use]
    pub fn best_discount(&self) -> u32 {
        self.prices
            .iter()
            .filter_map(|p| p.discount)
            .max()
            .unwrap_or(0)
    }

    /// Whether the lowest price lies in `[min, max]`. Products with no
    /// prices never match.
    #[must_use]
    pub fn lowest_price_within(&self, min: Decimal, max: Decimal) -> bool {
        self.lowest_price()
            .is_some_and(|p| p.amount >= min && p.amount <= max)
    }

    pub(crate) fn matches_terms(&self, terms: &[String]) -> bool {
        let tags = self
            .health_tags
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let haystack = format!(
            "{} {} {} {tags}",
            self.name, self.description, self.category
        )
        .to_lowercase();
        terms.iter().all(|term| haystack.contains(term.as_str()))
    }
}

/// Sort key for product listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    #[default]
    Price,
    Rating,
    Discount,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Product listing filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilters {
    /// Exact category name.
    pub category: Option<String>,
    /// Keep products carrying any of these tags.
    pub health_tags: Vec<HealthPreference>,
    /// Inclusive bounds on the lowest listed price.
    pub price_range: Option<(Decimal, Decimal)>,
    pub sort_by: ProductSort,
    pub sort_order: SortOrder,
}

impl ProductFilters {
    /// Whether `product` passes the category, tag, and price filters.
    #[must_use]
    pub fn accepts(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|c| &product.category == c);
        let tags_ok = self.health_tags.is_empty()
            || self
                .health_tags
                .iter()
                .any(|t| product.health_tags.contains(t));
        let price_ok = self
            .price_range
            .is_none_or(|(min, max)| product.lowest_price_within(min, max));

        category_ok && tags_ok && price_ok
    }

    /// Ordering of two products under this filter's sort settings.
    #[must_use]
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ascending = match self.sort_by {
            ProductSort::Price => a.lowest_price().cmp(&b.lowest_price()),
            ProductSort::Rating => a.rating.total_cmp(&b.rating),
            ProductSort::Discount => a.best_discount().cmp(&b.best_discount()),
        };
        match self.sort_order {
            SortOrder::Asc => ascending,
            SortOrder::Desc => ascending.reverse(),
        }
    }
}
