use actix_web::http::StatusCode;
use actix_web::{Responder, web};

use super::json_response;

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health_check)));
}

async fn health_check() -> impl Responder {
    json_response(
        StatusCode::OK,
        &serde_json::json!({ "status": "ok", "version": VERSION }),
    )
}
