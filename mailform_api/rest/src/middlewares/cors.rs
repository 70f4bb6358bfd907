//! Echo the request's `Origin` back to allow-listed browser origins.
//!
//! The headers are attached to every response, including errors, so that
//! permitted origins can read validation messages.

use std::{collections::HashSet, sync::Arc};

use axum::{
    extract::{Request, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN, VARY},
        HeaderMap, HeaderValue,
    },
    middleware::{from_fn_with_state, Next},
    response::Response,
    Router,
};

pub fn add(router: Router<()>, allowed_origins: Arc<AllowedOrigins>) -> Router<()> {
    router.layer(from_fn_with_state(allowed_origins, middleware))
}

async fn middleware(
    State(allowed_origins): State<Arc<AllowedOrigins>>,
    request: Request,
    next: Next,
) -> Response {
    let headers = allow_origin_headers(request.headers().get(ORIGIN), &allowed_origins);
    let mut response = next.run(request).await;
    response.headers_mut().extend(headers);
    response
}

/// Headers granting `origin` access, or no headers at all if it is missing or
/// not exactly equal to one of the allowed origins.
pub fn allow_origin_headers(
    origin: Option<&HeaderValue>,
    allowed_origins: &AllowedOrigins,
) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(origin) = origin.filter(|origin| allowed_origins.contains(origin)) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        headers.insert(VARY, HeaderValue::from_static("Origin"));
    }
    headers
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedOrigins(HashSet<String>);

impl AllowedOrigins {
    /// Parse a comma separated list of origins, e.g.
    /// `https://example.com, http://localhost:3000`.
    pub fn parse(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .is_ok_and(|origin| self.0.contains(origin))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for AllowedOrigins {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
