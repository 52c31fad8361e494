// src/presentation/http/extractors.rs
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::{error::HttpError, validation::Validate};

/// Positive integer taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub i64);

pub(crate) fn parse_positive_id(raw: &str) -> Result<i64, HttpError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(HttpError::bad_request(format!(
            "id must be a positive integer, got {raw:?}"
        ))),
    }
}

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
        parse_positive_id(&raw).map(Self)
    }
}

/// JSON body that has passed its [`Validate`] rules.
///
/// Malformed JSON and rule violations are both rejected with 400 before the
/// handler runs.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;

        let violations = value.validate();
        if !violations.is_empty() {
            return Err(HttpError::validation(
                violations.iter().map(ToString::to_string).collect(),
            ));
        }
        Ok(Self(value))
    }
}
