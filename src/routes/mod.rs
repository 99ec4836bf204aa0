use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{response::ErrorBody, state::AppState};

pub mod doc;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .route("/seed", post(products::seed_products))
        .nest("/user", users::router())
        .nest("/orders", orders::router())
}

/// Full application: service routes, `/api`, docs, JSON 404 fallback and open CORS.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::service_info))
        .route("/test", get(health::connection_status))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    let body = ErrorBody {
        detail: format!("Not Found: {}", uri.path()),
    };
    (StatusCode::NOT_FOUND, Json(body))
}
