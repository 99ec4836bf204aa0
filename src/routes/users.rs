use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::users::AddressList,
    error::AppResult,
    middleware::json::AppJson,
    models::Address,
    response::{Ack, ErrorBody},
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{phone}/addresses", get(list_addresses).post(add_address))
}

#[utoipa::path(
    get,
    path = "/api/user/{phone}/addresses",
    params(
        ("phone" = String, Path, description = "Customer phone, +963 or 09 format")
    ),
    responses(
        (status = 200, description = "Saved addresses, empty for unknown customers", body = AddressList),
        (status = 400, description = "Invalid phone", body = ErrorBody),
    ),
    tag = "Users"
)]
pub async fn list_addresses(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> AppResult<Json<AddressList>> {
    let resp = user_service::list_addresses(&state, &phone).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/user/{phone}/addresses",
    params(
        ("phone" = String, Path, description = "Customer phone, +963 or 09 format")
    ),
    request_body = Address,
    responses(
        (status = 200, description = "Address saved or already present", body = Ack),
        (status = 400, description = "Invalid address", body = ErrorBody),
    ),
    tag = "Users"
)]
pub async fn add_address(
    State(state): State<AppState>,
    Path(phone): Path<String>,
    AppJson(payload): AppJson<Address>,
) -> AppResult<Json<Ack>> {
    let resp = user_service::add_address(&state, &phone, payload).await?;
    Ok(Json(resp))
}
