//! Custom request extractors

use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// The final path segment exactly as it appeared in the request URI.
///
/// axum's `Path` extractor percent-decodes captures. Channel names are
/// decoded by the registry, so handlers take the raw segment instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedChannelName(pub String);

impl<S> FromRequestParts<S> for EncodedChannelName
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let segment = parts
            .uri
            .path()
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();

        Ok(EncodedChannelName(segment.to_string()))
    }
}
