use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use crate::error::AppError;

/// Query string whose deserialization failures are reported as `400 Bad Request`.
#[derive(Debug, Clone)]
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Read an optional flag written as true/false, 1/0, yes/no or on/off.
///
/// An empty value counts as absent. Use with `#[serde(default)]`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    parse_flag(value)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("`{value}` is not a boolean flag")))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;
    use crate::dto::products::{ProductQuery, SeedQuery};

    async fn extract<T: DeserializeOwned>(uri: &str) -> Result<T, AppError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        AppQuery::<T>::from_request_parts(&mut parts, &())
            .await
            .map(|AppQuery(value)| value)
    }

    #[tokio::test]
    async fn product_flags_accept_common_spellings() {
        let query: ProductQuery = extract("/api/products?featured=yes&new_arrival=0")
            .await
            .unwrap();
        assert_eq!(query.featured, Some(true));
        assert_eq!(query.new_arrival, Some(false));

        let query: ProductQuery = extract("/api/products?featured=ON&new_arrival=off")
            .await
            .unwrap();
        assert_eq!(query.featured, Some(true));
        assert_eq!(query.new_arrival, Some(false));

        let query: ProductQuery = extract("/api/products?featured=&category=rings")
            .await
            .unwrap();
        assert_eq!(query.featured, None);
        assert_eq!(query.new_arrival, None);
        assert_eq!(query.category.as_deref(), Some("rings"));
    }

    #[tokio::test]
    async fn unknown_flag_is_bad_request() {
        let err = extract::<ProductQuery>("/api/products?featured=maybe")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("maybe")));
    }

    #[tokio::test]
    async fn seed_force_accepts_numeric_flag() {
        let query: SeedQuery = extract("/api/seed?force=1").await.unwrap();
        assert_eq!(query.force, Some(true));
        let query: SeedQuery = extract("/api/seed").await.unwrap();
        assert_eq!(query.force, None);
    }
}
