//! Memo API handlers.

use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse, Responder, web};

use super::{error_response, json_response};
use crate::AppState;
use crate::db::tables::memos::CreateMemoRequest;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/memos")
            .route(web::get().to(list_memos))
            .route(web::post().to(create_memo))
            .default_service(web::route().to(method_not_allowed)),
    );
    // Method filtering for /memos/{id} lives in the handler itself.
    cfg.service(web::resource("/memos/{id}").route(web::route().to(get_memo)));
}

/// Create a new memo
async fn create_memo(
    data: web::Data<AppState>,
    body: web::Json<CreateMemoRequest>,
) -> impl Responder {
    let request = body.into_inner();

    if request.title.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Title is required");
    }
    if request.content.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Content is required");
    }

    match data.db.create_memo(&request) {
        Ok(memo) => json_response(StatusCode::CREATED, &memo),
        Err(e) => {
            log::error!("Failed to create memo: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create memo")
        }
    }
}

/// Get all memos, newest first
async fn list_memos(data: web::Data<AppState>) -> impl Responder {
    match data.db.list_memos() {
        Ok(memos) => json_response(StatusCode::OK, &memos),
        Err(e) => {
            log::error!("Failed to get memos: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to get memos")
        }
    }
}

/// Get a single memo by id
async fn get_memo(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if req.method() != Method::GET {
        return error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }

    // The id segment is an unsigned integer; anything else is a client error,
    // not a routing miss.
    let id = match path.into_inner().parse::<u32>() {
        Ok(id) => i64::from(id),
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Invalid memo ID"),
    };

    match data.db.get_memo(id) {
        Ok(Some(memo)) => json_response(StatusCode::OK, &memo),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Memo not found"),
        Err(e) => {
            log::error!("Failed to get memo: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to get memo")
        }
    }
}

async fn method_not_allowed() -> HttpResponse {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
