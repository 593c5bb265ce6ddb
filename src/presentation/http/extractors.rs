// src/presentation/http/extractors.rs
use crate::{application::dto::AuthenticatedUser, domain::user::UserId};
use axum::{
    extract::FromRequestParts,
    http::{HeaderName, HeaderValue, request::Parts},
};
use headers::{Header, HeaderMapExt};

use super::error::HttpError;

static X_USER_ID: HeaderName = HeaderName::from_static("x-user-id");

/// `x-user-id`: positive numeric id of the caller, set by the upstream
/// identity proxy and trusted as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XUserId(pub i64);

impl Header for XUserId {
    fn name() -> &'static HeaderName {
        &X_USER_ID
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        value
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or_else(headers::Error::invalid)
    }

    fn encode<E>(&self, values: &mut E)
    where
        E: Extend<HeaderValue>,
    {
        values.extend(std::iter::once(HeaderValue::from(self.0)));
    }
}

fn identity(parts: &Parts) -> Result<Option<AuthenticatedUser>, HttpError> {
    match parts.headers.typed_try_get::<XUserId>() {
        Ok(Some(XUserId(raw))) => UserId::new(raw)
            .map(|id| Some(AuthenticatedUser::new(id)))
            .map_err(|_| HttpError::unauthorized("invalid x-user-id header")),
        Ok(None) => Ok(None),
        Err(_) => Err(HttpError::unauthorized("invalid x-user-id header")),
    }
}

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        identity(parts)?
            .map(Self)
            .ok_or_else(|| HttpError::unauthorized("missing x-user-id header"))
    }
}
