use axum::{http::StatusCode, response::IntoResponse};

use crate::{
    application::teams::Error,
    server::response::{error_payload, handle_internal_server_error},
};

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::MissingAccessToken { user: true } => {
                (StatusCode::UNAUTHORIZED, error_payload("Missing user access token")).into_response()
            }
            Error::MissingAccessToken { user: false } => {
                (StatusCode::UNAUTHORIZED, error_payload("Missing access token")).into_response()
            }
            Error::Graph(e) => handle_internal_server_error(e).into_response(),
        }
    }
}
