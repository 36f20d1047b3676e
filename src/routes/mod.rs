mod cpf_routes;

use actix_cors::Cors;
use actix_web::{web, HttpResponse};
use log::info;

use crate::config::ServerConfig;

pub use cpf_routes::configure as configure_cpf_routes;

pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_cpf_routes(cfg);
    cfg.route("/health", web::get().to(|| async {
        info!("Health check");
        HttpResponse::Ok().body("OK")
    }));
}

/// Cross-origin requests are accepted from anywhere
pub fn cors(config: &ServerConfig) -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .expose_headers(vec!["content-type", "content-length", "accept"])
        .max_age(config.cors_max_age)
}

/// JSON extractor limits for request bodies
pub fn json_config(config: &ServerConfig) -> web::JsonConfig {
    web::JsonConfig::default().limit(config.json_body_limit)
}
