use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiResponse;

pub mod contact;

pub async fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Not Found")
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

fn ok() -> Response {
    Json(ApiResponse {
        ok: true,
        message: None,
    })
    .into_response()
}

fn error(code: StatusCode, message: impl Into<Cow<'static, str>>) -> Response {
    let body = ApiResponse {
        ok: false,
        message: Some(message.into()),
    };
    (code, Json(body)).into_response()
}
