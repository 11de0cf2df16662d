//! Simple Notes API — CRUD over text notes kept in process memory.
//!
//! Default: http://0.0.0.0:5000/

use actix_cors::Cors;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod error;
mod notes;

use config::Config;
use notes::NoteStore;

pub struct AppState {
    /// Shared by every worker; lives for the whole process
    pub notes: Arc<NoteStore>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let notes = Arc::new(NoteStore::new());

    log::info!(
        "Simple Notes API listening on http://{}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                notes: Arc::clone(&notes),
            }))
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
