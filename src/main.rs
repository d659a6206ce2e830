use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod middleware;

use config::Config;
use db::Database;
use middleware::{Cors, Recovery, RequestLogger};

pub struct AppState {
    pub db: Arc<Database>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("Initializing database at {}", config.database_url);
    let db = Database::new(&config.database_url).expect("Failed to initialize database");
    let db = Arc::new(db);

    log::info!("Starting memo server on port {}", port);
    log::info!("Middleware enabled: CORS, Recovery, Logging");
    log::info!("Available endpoints:");
    log::info!("  GET    /health");
    log::info!("  GET    /memos");
    log::info!("  POST   /memos");
    log::info!("  GET    /memos/{{id}}");

    HttpServer::new(move || {
        // Wraps apply last-registered outermost: CORS > Recovery > Logging > router.
        App::new()
            .app_data(web::Data::new(AppState {
                db: Arc::clone(&db),
            }))
            .app_data(web::JsonConfig::default().error_handler(controllers::json_error_handler))
            .wrap(NormalizePath::trim())
            .wrap(RequestLogger)
            .wrap(Recovery)
            .wrap(Cors)
            .configure(controllers::health::config)
            .configure(controllers::memos::config)
            .default_service(web::route().to(controllers::not_found))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
