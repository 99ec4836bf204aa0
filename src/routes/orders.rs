use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};

use crate::{
    dto::orders::{
        CreateOrderRequest, CreateOrderResponse, DeliveryNotice, OrderList, PhoneQuery,
        UpdateOrderStatusRequest,
    },
    error::AppResult,
    middleware::{
        json::{AppJson, ValidatedJson},
        query::AppQuery,
    },
    models::Order,
    response::ErrorBody,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/notifications", get(delivery_notice))
        .route("/{id}/status", patch(update_order_status))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = CreateOrderResponse),
        (status = 400, description = "Invalid body or unknown product", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> AppResult<Json<CreateOrderResponse>> {
    let resp = order_service::create_order(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(PhoneQuery),
    responses(
        (status = 200, description = "Orders for a phone, newest first", body = OrderList),
        (status = 400, description = "Missing or invalid phone", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PhoneQuery>,
) -> AppResult<Json<OrderList>> {
    let resp = order_service::list_orders(&state, &query.phone).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Updated order", body = Order),
        (status = 400, description = "Invalid status", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateOrderStatusRequest>,
) -> AppResult<Json<Order>> {
    let resp = order_service::update_order_status(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/notifications",
    params(PhoneQuery),
    responses(
        (status = 200, description = "Whether an order is out for delivery", body = DeliveryNotice),
        (status = 400, description = "Missing or invalid phone", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn delivery_notice(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PhoneQuery>,
) -> AppResult<Json<DeliveryNotice>> {
    let resp = order_service::delivery_notice(&state, &query.phone).await?;
    Ok(Json(resp))
}
