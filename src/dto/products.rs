use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{middleware::query::lenient_bool, models::Product};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// One of necklaces, bracelets, earrings, rings.
    pub category: Option<String>,
    /// Case-insensitive substring of the product name.
    pub search: Option<String>,
    /// true/false, 1/0, yes/no or on/off.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub new_arrival: Option<bool>,
    /// name_asc | name_desc | price_asc | price_desc | new
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    Newest,
}

impl ProductSort {
    /// Unknown keys fall back to storage order.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name_asc" => Some(ProductSort::NameAsc),
            "name_desc" => Some(ProductSort::NameDesc),
            "price_asc" => Some(ProductSort::PriceAsc),
            "price_desc" => Some(ProductSort::PriceDesc),
            "new" => Some(ProductSort::Newest),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub items: Vec<Product>,
    pub count: usize,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeedQuery {
    /// Replace the catalog even when it already has products.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub force: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeedReport {
    /// `exists` when nothing was written, `seeded` otherwise.
    pub status: String,
    pub count: u64,
}
