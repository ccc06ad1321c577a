//! Body extractors that report decode failures as `ApiError` (400).

use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::ApiError;

/// A body decoded as JSON when `Content-Type` is `application/json` (or any
/// `application/*+json`), and as an urlencoded form otherwise
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

/// An urlencoded form body
#[derive(Debug, Clone)]
pub struct FormBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::invalid_field("body", rejection.body_text()))?;
            Ok(Self(value))
        } else {
            let FormBody(value) = FormBody::<T>::from_request(req, state).await?;
            Ok(Self(value))
        }
    }
}

impl<S, T> FromRequest<S> for FormBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_field("body", rejection.body_text()))?;
        Ok(Self(value))
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(is_json_content_type)
        .unwrap_or(false)
}

/// Media types are case-insensitive; parameters after `;` are ignored
fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}
