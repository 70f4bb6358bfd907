use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::Response,
    routing, Router,
};
use mailform_core_contact_contracts::{ContactService, ContactSubmitError};
use tracing::debug;

use super::{error, ok};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    let method_router = routing::post(submit)
        .options(preflight)
        .fallback(method_not_allowed);

    Router::new()
        .route("/", method_router.clone())
        .route("/contact", method_router)
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactService>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(err) => {
            debug!(%err, "failed to read contact form body");
            return error(StatusCode::BAD_REQUEST, "Bad Request");
        }
    };

    let Ok(body) = String::from_utf8(body.into()) else {
        return error(StatusCode::BAD_REQUEST, "Invalid JSON");
    };

    match service.submit(body).await {
        Ok(()) => ok(),
        Err(ContactSubmitError::BadRequest) => error(StatusCode::BAD_REQUEST, "Bad Request"),
        Err(ContactSubmitError::Invalid(reason)) => {
            error(StatusCode::BAD_REQUEST, reason.to_string())
        }
        Err(ContactSubmitError::Send) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Mail send failed")
        }
    }
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn method_not_allowed() -> Response {
    error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
