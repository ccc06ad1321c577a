/**
 * Welcome Handlers
 *
 * # Routes
 *
 * - `GET /` - plain-text greeting
 * - `GET /super-simple` - JSON greeting
 * - `GET /not-found` - always 404 (also the router fallback)
 * - `GET /parameters?name=&age=` - age gate over the query string
 * - `GET /url-variables/{name}/{age}` - age gate over the path
 *
 * `/parameters` reads its values by hand from the raw key/value pairs, taking
 * the first occurrence of a repeated key, and reports a missing or
 * non-integer value as a `ParameterError` (500). `/url-variables` relies on
 * typed path extraction, so a non-integer age never reaches the handler and
 * is answered 400 by axum.
 */
use axum::{
    extract::{Path, Query},
    response::Json,
};
use crate::backend::error::{ApiError, ParameterError};
use crate::backend::welcome::age_gate::{check_age, AgeVerdict};
use crate::shared::MessageResponse;

pub const HELLO: &str = "Hello World!";
pub const SUPER_SIMPLE: &str = "Hello from the Planetary API.";
pub const RESOURCE_NOT_FOUND: &str = "That resource was not found";

/// Raw `/parameters` query string
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AgeQuery {
    pub name: Option<String>,
    pub age: Option<String>,
}

impl AgeQuery {
    /// Collect `name` and `age` from decoded query pairs; the first occurrence wins
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "age" => &mut query.age,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Validate the query into a name and an integer age
    pub fn parse(self) -> Result<(String, i32), ParameterError> {
        let name = self.name.ok_or(ParameterError::Missing("name"))?;
        let raw_age = self.age.ok_or(ParameterError::Missing("age"))?;
        let age = raw_age
            .trim()
            .parse::<i32>()
            .map_err(|_| ParameterError::Invalid {
                name: "age",
                value: raw_age.clone(),
            })?;
        Ok((name, age))
    }
}

pub async fn home() -> &'static str {
    HELLO
}

pub async fn super_simple() -> Json<MessageResponse> {
    Json(MessageResponse::new(SUPER_SIMPLE))
}

/// Always 404; also mounted as the router fallback
pub async fn not_found() -> ApiError {
    ApiError::not_found(RESOURCE_NOT_FOUND)
}

/// Age gate over `?name=&age=`
///
/// # Errors
///
/// * `500 Internal Server Error` - `name` or `age` missing, or `age` not an integer
pub async fn parameters(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<AgeVerdict, ApiError> {
    let (name, age) = AgeQuery::from_pairs(pairs).parse().map_err(|e| {
        tracing::warn!("Rejected /parameters query: {}", e);
        e
    })?;
    Ok(check_age(&name, age))
}

/// Age gate over `/url-variables/{name}/{age}`
pub async fn url_variables(Path((name, age)): Path<(String, i32)>) -> AgeVerdict {
    check_age(&name, age)
}
