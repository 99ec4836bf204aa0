use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Order, OrderStatus, Phone};

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct OrderItemRequest {
    pub product_id: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateOrderRequest {
    pub full_name: String,
    #[schema(value_type = String, example = "0912345678")]
    pub phone: Phone,
    pub city: String,
    pub street: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// Accepted for client compatibility; the address is rebuilt from the fields above.
    #[serde(default)]
    pub address_id: Option<String>,
    #[validate(nested)]
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderResponse {
    pub id: Uuid,
    pub status: OrderStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PhoneQuery {
    /// Syrian phone, `+963…` or `09…`. Send the plus sign as `%2B`.
    pub phone: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
    #[serde(default)]
    pub admin_note: Option<String>,
    #[serde(default)]
    pub expected_delivery_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeliveryNotice {
    pub on_delivery: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery_date: Option<NaiveDate>,
}

impl DeliveryNotice {
    pub fn none() -> Self {
        Self {
            on_delivery: false,
            order_id: None,
            expected_delivery_date: None,
        }
    }
}
