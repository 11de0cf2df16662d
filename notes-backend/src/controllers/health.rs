use actix_web::{web, HttpResponse, Responder};
use notes_types::{HealthStatus, ServiceInfo};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(service_info)));
    cfg.service(web::resource("/health").route(web::get().to(health_check)));
}

async fn service_info() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo::current())
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus::ok())
}
