pub mod health;
pub mod notes;

use actix_web::web;

/// Register every route the service exposes
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::config_routes(cfg);
    notes::config(cfg);
}
