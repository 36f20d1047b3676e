use serde::Serialize;
use serde_json::{json, Value};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub erro: String,
    pub exemplo: Value,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("CPF não fornecido")]
    MissingCpf,

    #[error("Lista de CPFs não fornecida")]
    MissingCpfList,
}

impl ApiError {
    /// Body shape the caller should have sent
    pub fn example(&self) -> Value {
        match self {
            ApiError::MissingCpf => json!({ "cpf": "111.444.777-35" }),
            ApiError::MissingCpfList => json!({ "cpfs": ["111.444.777-35", "123.456.789-10"] }),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            erro: self.to_string(),
            exemplo: self.example(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_missing_cpf_response() {
        let resp = ApiError::MissingCpf.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["erro"], "CPF não fornecido");
        assert_eq!(value["exemplo"]["cpf"], "111.444.777-35");
    }

    #[actix_web::test]
    async fn test_missing_list_response() {
        let resp = ApiError::MissingCpfList.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["erro"], "Lista de CPFs não fornecida");
        assert_eq!(value["exemplo"]["cpfs"].as_array().map(Vec::len), Some(2));
    }
}
