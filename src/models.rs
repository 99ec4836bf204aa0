use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Necklaces,
    Bracelets,
    Earrings,
    Rings,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Necklaces => "necklaces",
            Category::Bracelets => "bracelets",
            Category::Earrings => "earrings",
            Category::Rings => "rings",
        }
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "necklaces" => Ok(Category::Necklaces),
            "bracelets" => Ok(Category::Bracelets),
            "earrings" => Ok(Category::Earrings),
            "rings" => Ok(Category::Rings),
            other => Err(anyhow::anyhow!("unknown category {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    #[serde(rename = "Pending COD")]
    PendingCod,
    Pending,
    Confirmed,
    #[serde(rename = "On Delivery")]
    OnDelivery,
    Delivered,
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::PendingCod,
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::OnDelivery,
        OrderStatus::Delivered,
        OrderStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::PendingCod => "Pending COD",
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::OnDelivery => "On Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Invalid status")]
pub struct InvalidStatus;

impl FromStr for OrderStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(InvalidStatus)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Phone must be in Syrian format starting with +963 or 09")]
pub struct InvalidPhone;

/// A phone number in `+963` international form.
///
/// Accepts `+963` followed by 8 or 9 characters as-is, and rewrites local
/// `09XXXXXXXX` numbers to `+9639XXXXXXXX`. Surrounding whitespace is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, InvalidPhone> {
        let value = raw.trim();
        let len = value.chars().count();
        if value.starts_with("+963") && (len == 12 || len == 13) {
            return Ok(Self(value.to_string()));
        }
        if value.starts_with("09") && len == 10 {
            return Ok(Self(format!("+963{}", &value[1..])));
        }
        Err(InvalidPhone)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = InvalidPhone;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    #[serde(default)]
    pub id: Option<String>,
    pub full_name: String,
    #[schema(value_type = String, example = "+963912345678")]
    pub phone: Phone,
    pub city: String,
    pub street: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Address {
    /// Addresses are considered the same when phone and street match.
    pub fn same_destination(&self, other: &Address) -> bool {
        self.phone == other.phone && self.street == other.street
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub phone: String,
    pub name: String,
    pub addresses: Vec<Address>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub price_syp: i64,
    pub price_usd: f64,
    pub images: Vec<String>,
    pub featured: bool,
    pub new_arrival: bool,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product fields as accepted for insertion into the catalog.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    #[validate(range(min = 0))]
    pub price_syp: i64,
    #[validate(range(min = 0.0))]
    pub price_usd: f64,
    pub images: Vec<String>,
    pub featured: bool,
    pub new_arrival: bool,
    pub in_stock: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub name: String,
    pub category: Category,
    pub quantity: i32,
    pub price_syp: i64,
    pub price_usd: f64,
    pub image: Option<String>,
}

impl OrderItem {
    /// Freeze the product's current name, category, prices and cover image.
    pub fn snapshot(product: &Product, quantity: i32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            category: product.category,
            quantity,
            price_syp: product.price_syp,
            price_usd: product.price_usd,
            image: product.images.first().cloned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub user_phone: String,
    pub user_name: String,
    pub items: Vec<OrderItem>,
    pub address: Address,
    pub city: String,
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub admin_note: Option<String>,
    pub expected_delivery_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
