use actix_web::web;
use crate::handlers::cpf_handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(cpf_handlers::home));
    cfg.service(
        web::scope("/validar")
            .route("", web::post().to(cpf_handlers::validate_cpf_body))
            .route("/lote", web::post().to(cpf_handlers::validate_cpf_batch))
            .route("/{cpf}", web::get().to(cpf_handlers::validate_cpf_path))
    );
}
