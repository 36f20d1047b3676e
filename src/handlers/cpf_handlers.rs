use actix_web::{error::JsonPayloadError, web, HttpResponse};
use log::{info, warn};
use serde_json::json;

use crate::models::{ApiError, BatchReport, CpfValidation, ValidateBatchRequest, ValidateCpfRequest};

/// Static description of the service and its endpoints
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "API de Validação de CPF",
        "endpoints": {
            "validar": "/validar/{cpf}",
            "validar_post": "/validar (POST)",
            "validar_lote": "/validar/lote (POST)",
            "exemplo": "/validar/11144477735"
        }
    }))
}

/// Unwraps a JSON body, treating anything unreadable as absent.
/// Oversized bodies keep their own error (413).
fn accept_body<T>(
    payload: Result<web::Json<T>, actix_web::Error>,
) -> Result<Option<T>, actix_web::Error> {
    match payload {
        Ok(body) => Ok(Some(body.into_inner())),
        Err(e) => {
            let oversized = matches!(
                e.as_error::<JsonPayloadError>(),
                Some(JsonPayloadError::Overflow { .. })
                    | Some(JsonPayloadError::OverflowKnownLength { .. })
            );
            if oversized {
                warn!("Rejected oversized request body: {}", e);
                return Err(e);
            }
            Ok(None)
        }
    }
}

/// Validate a CPF given as a path segment
pub async fn validate_cpf_path(cpf: web::Path<String>) -> HttpResponse {
    let result = CpfValidation::from_raw(&cpf);
    info!("GET validation of {:?}: valid={}", result.cpf, result.valido);

    HttpResponse::Ok().json(result)
}

/// Validate a CPF sent as `{"cpf": "..."}`
pub async fn validate_cpf_body(
    payload: Result<web::Json<ValidateCpfRequest>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let raw = match accept_body(payload)?.and_then(|req| req.cpf) {
        Some(raw) => raw,
        None => {
            warn!("Rejected validation request without a cpf field");
            return Err(ApiError::MissingCpf.into());
        }
    };

    let result = CpfValidation::from_raw(&raw);
    info!("POST validation of {:?}: valid={}", result.cpf, result.valido);

    Ok(HttpResponse::Ok().json(result))
}

/// Validate a list of CPFs sent as `{"cpfs": [...]}`
pub async fn validate_cpf_batch(
    payload: Result<web::Json<ValidateBatchRequest>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let cpfs = match accept_body(payload)?.and_then(|req| req.cpfs) {
        Some(cpfs) => cpfs,
        None => {
            warn!("Rejected batch request without a cpfs field");
            return Err(ApiError::MissingCpfList.into());
        }
    };

    let report = BatchReport::from_inputs(&cpfs);
    info!(
        "Batch validation of {} CPFs: {} valid, {} invalid",
        report.total, report.validos, report.invalidos
    );

    Ok(HttpResponse::Ok().json(report))
}
