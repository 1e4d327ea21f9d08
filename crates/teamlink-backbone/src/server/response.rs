use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::error;

pub(crate) fn handle_internal_server_error<E: std::error::Error>(e: E) -> impl IntoResponse {
    error!(error = %e, "unhandled error occurred.");
    (StatusCode::INTERNAL_SERVER_ERROR, error_payload("Internal server error"))
}

#[derive(Serialize, Debug)]
pub(crate) struct ErrorPayload<'a> {
    error: &'a str,
}

pub fn error_payload(error: &str) -> Json<ErrorPayload<'_>> {
    Json(ErrorPayload { error })
}
