//! Custom Axum extractors
//!
//! Each one turns axum's own rejection into an [`ApiError`] so malformed
//! input always gets the JSON error shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::Deserialize;

use super::error::ApiError;
use crate::models::{parse_id, ValidationError};

/// Extract and parse a numeric id from path
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidId {
                    value: String::new(),
                })
            })?;

        Ok(Self(parse_id(&raw)?))
    }
}

/// JSON body whose decode failures become 400 `invalid body`
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(reason = %rejection.body_text(), "rejected request body");
            ApiError::Validation(ValidationError::InvalidBody {
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}

#[derive(Deserialize)]
struct ReportQuery {
    id: Option<String>,
}

/// Optional `?id=` filter of the product count report.
///
/// Missing or empty means every warehouse and yields `0`.
pub struct ReportFilter(pub i64);

impl<S> FromRequestParts<S> for ReportFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ReportQuery>::try_from_uri(&parts.uri).map_err(|_| {
            ApiError::Validation(ValidationError::InvalidId {
                value: parts.uri.query().unwrap_or_default().to_owned(),
            })
        })?;

        match query.id.as_deref() {
            None | Some("") => Ok(Self(0)),
            Some(raw) => Ok(Self(parse_id(raw)?)),
        }
    }
}
