use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use agrireg_producers::{ProfileUpdateError, RegistrationError, StoreError};

const INTERNAL_MESSAGE: &str = "internal server error";

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 500 with a generic body; the detail only goes to the log.
fn internal_error(detail: &dyn std::fmt::Display) -> axum::response::Response {
    tracing::error!(error = %detail, "request failed with an internal error");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", INTERNAL_MESSAGE)
}

pub fn registration_error_to_response(err: RegistrationError) -> axum::response::Response {
    match err {
        RegistrationError::InvalidName => {
            json_error(StatusCode::BAD_REQUEST, "invalid_name", err.to_string())
        }
        RegistrationError::InvalidDocument => {
            json_error(StatusCode::BAD_REQUEST, "invalid_document", err.to_string())
        }
        RegistrationError::AlreadyExists => {
            json_error(StatusCode::CONFLICT, "conflict", err.to_string())
        }
        RegistrationError::Unexpected(e) => internal_error(&e),
    }
}

pub fn profile_update_error_to_response(err: ProfileUpdateError) -> axum::response::Response {
    match err {
        ProfileUpdateError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        ProfileUpdateError::InvalidName => {
            json_error(StatusCode::BAD_REQUEST, "invalid_name", err.to_string())
        }
        ProfileUpdateError::InvalidCountry => {
            json_error(StatusCode::BAD_REQUEST, "invalid_country", err.to_string())
        }
        ProfileUpdateError::InvalidDocument => {
            json_error(StatusCode::BAD_REQUEST, "invalid_document", err.to_string())
        }
        ProfileUpdateError::AlreadyExists => {
            json_error(StatusCode::CONFLICT, "conflict", err.to_string())
        }
        ProfileUpdateError::Unexpected(e) => internal_error(&e),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        StoreError::InvalidArgument(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_argument", msg),
        StoreError::AlreadyExists => json_error(StatusCode::CONFLICT, "conflict", err.to_string()),
        StoreError::Inconsistent(_) => internal_error(&err),
    }
}

pub fn invalid_body(detail: impl std::fmt::Display) -> axum::response::Response {
    json_error(
        StatusCode::BAD_REQUEST,
        "invalid_body",
        format!("Invalid request body: {detail}"),
    )
}
