//! Product catalog route handlers.

use std::str::FromStr;

use axum::{
    Json,
    extract::{Query, State},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use auro_core::HealthPreference;

use super::{SearchQuery, csv};
use crate::error::{AppError, Result};
use crate::models::{Product, ProductFilters, ProductSort, SortOrder};
use crate::state::AppState;

/// Listing filters as query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductQuery {
    pub category: Option<String>,
    /// Comma-separated health tags, any of which may match.
    pub health_tags: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort_by: ProductSort,
    pub sort_order: SortOrder,
}

impl TryFrom<ProductQuery> for ProductFilters {
    type Error = AppError;

    fn try_from(query: ProductQuery) -> Result<Self> {
        let health_tags = csv(query.health_tags.as_deref())
            .iter()
            .map(|tag| HealthPreference::from_str(tag).map_err(AppError::BadRequest))
            .collect::<Result<Vec<_>>>()?;

        let price_range = match (query.min_price, query.max_price) {
            (None, None) => None,
            (min, max) => {
                let min = min.unwrap_or(Decimal::ZERO);
                let max = max.unwrap_or(Decimal::MAX);
                if min > max {
                    return Err(AppError::BadRequest(
                        "minPrice must not exceed maxPrice".to_string(),
                    ));
                }
                Some((min, max))
            }
        };

        Ok(Self {
            category: query.category.filter(|c| !c.trim().is_empty()),
            health_tags,
            price_range,
            sort_by: query.sort_by,
            sort_order: query.sort_order,
        })
    }
}

/// GET /products
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>> {
    let filters = ProductFilters::try_from(query)?;
    Ok(Json(state.products().filter_products(&filters).await))
}

/// GET /products/search?q=
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Product>> {
    Json(state.products().search_products(&query.q).await)
}
