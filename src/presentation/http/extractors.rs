// src/presentation/http/extractors.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::Deserialize;
use std::{
    convert::Infallible,
    net::{IpAddr, SocketAddr},
};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

async fn app_state(parts: &mut Parts) -> Result<HttpState, HttpError> {
    Extension::<HttpState>::from_request_parts(parts, &())
        .await
        .map(|Extension(state)| state)
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })
}

async fn resolve_bearer(parts: &mut Parts) -> Result<Option<AuthenticatedUser>, HttpError> {
    let state = app_state(parts).await?;
    let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() else {
        return Ok(None);
    };

    state
        .services
        .authenticate(header.token())
        .await
        .map(Some)
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve_bearer(parts).await?.map(Self).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(
                "missing Authorization header",
            ))
        })
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve_bearer(parts).await.map(Self)
    }
}

/// Peer address of the connection, when the server recorded one.
#[derive(Debug, Clone, Copy)]
pub struct ClientIp(pub Option<IpAddr>);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());
        Ok(Self(ip))
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawListingParams {
    page: Option<String>,
    s: Option<String>,
}

/// `page` and `s` query parameters of listing routes, kept raw so each route
/// decides how an unusable page number is reported.
#[derive(Debug, Clone, Default)]
pub struct ListingParams {
    page: Option<String>,
    search: Option<String>,
}

impl ListingParams {
    pub fn parse(query: Option<&str>) -> Result<Self, HttpError> {
        let raw: RawListingParams = match query {
            Some(query) => serde_urlencoded::from_str(query)
                .map_err(|err| HttpError::bad_request(err.to_string()))?,
            None => RawListingParams::default(),
        };
        Ok(Self {
            page: raw.page,
            search: raw.s,
        })
    }

    /// A missing page means the first one; anything that is not an integer is
    /// an invalid page.
    pub fn page(&self) -> ApplicationResult<i64> {
        match self.page.as_deref().map(str::trim) {
            None => Ok(1),
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                ApplicationError::invalid_page(format!("'{raw}' is not a page number"))
            }),
        }
    }

    pub fn search_text(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for ListingParams
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::parse(parts.uri.query())
    }
}
