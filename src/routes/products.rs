use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::products::{ProductList, ProductQuery, SeedQuery, SeedReport},
    error::AppResult,
    middleware::query::AppQuery,
    models::Product,
    response::ErrorBody,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductQuery),
    responses(
        (status = 200, description = "List products", body = ProductList),
        (status = 400, description = "Malformed query string", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ProductQuery>,
) -> AppResult<Json<ProductList>> {
    let resp = product_service::list_products(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let resp = product_service::get_product(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/seed",
    params(SeedQuery),
    responses(
        (status = 200, description = "Seed the demonstration catalog", body = SeedReport)
    ),
    tag = "Products"
)]
pub async fn seed_products(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SeedQuery>,
) -> AppResult<Json<SeedReport>> {
    let resp = product_service::seed_products(&state, query.force.unwrap_or(false)).await?;
    Ok(Json(resp))
}
