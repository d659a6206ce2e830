pub mod health;
pub mod memos;


use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder};
use serde::Serialize;

pub(crate) const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Serialize `value` into a response with the given status and an explicit
/// utf-8 JSON content type.
pub(crate) fn json_response<T: Serialize>(status: StatusCode, value: &T) -> HttpResponse {
    match serde_json::to_string(value) {
        Ok(body) => HttpResponseBuilder::new(status)
            .content_type(JSON_CONTENT_TYPE)
            .body(body),
        Err(e) => {
            log::error!("Failed to serialize response body: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

pub(crate) fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    json_response(status, &serde_json::json!({ "error": message }))
}

/// Shape JSON body decode failures into the standard 400 error body. The
/// decoder message names the missing or invalid field.
pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {}", err);
    let response = error_response(StatusCode::BAD_REQUEST, &message);
    InternalError::from_response(err, response).into()
}

/// Fallback for paths no route matches.
pub(crate) async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
