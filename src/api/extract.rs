//! Request input extraction
//!
//! Create and update endpoints take their scalar fields either from the query
//! string or from a JSON body. `Input<T>` reads the body when the request has
//! a JSON content type and a non-empty body, and the query string otherwise.
//! Every failure becomes `Error::InvalidInput`, rendered as 400.

use axum::{
    extract::{FromRequest, Query, Request},
    http::{header::CONTENT_TYPE, HeaderMap, Uri},
};
use bytes::Bytes;
use std::num::IntErrorKind;
use serde::de::DeserializeOwned;

use crate::types::{Error, Result};

/// Typed request input from a JSON body or the query string
pub struct Input<T>(pub T);

impl<T, S> FromRequest<S> for Input<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let uri = req.uri().clone();
        let json_body = has_json_content_type(req.headers());
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| Error::invalid_input(format!("Failed to read request body: {}", e)))?;

        if json_body && !body.is_empty() {
            return serde_json::from_slice(&body)
                .map(Input)
                .map_err(|e| Error::invalid_input(format!("Invalid JSON body: {}", e)));
        }

        query(&uri).map(Input)
    }
}

/// Deserialize the query string of `uri`
pub fn query<T: DeserializeOwned>(uri: &Uri) -> Result<T> {
    Query::<T>::try_from_uri(uri)
        .map(|Query(value)| value)
        .map_err(|e| Error::invalid_input(e.body_text()))
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let mime = value.split(';').next().unwrap_or_default().trim();
            mime.eq_ignore_ascii_case("application/json")
                || mime
                    .rsplit_once('+')
                    .is_some_and(|(_, suffix)| suffix.eq_ignore_ascii_case("json"))
        })
        .unwrap_or(false)
}

/// Parse the integer key of a board post from its path segment
///
/// An integer too large for a board key parses to `None`: no post can live
/// there, so the caller answers 404 rather than 400.
pub fn parse_board_id(raw: &str) -> Result<Option<i64>> {
    match raw.parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(Error::invalid_input(format!(
            "Post id must be an integer, got {:?}",
            raw
        ))),
    }
}
