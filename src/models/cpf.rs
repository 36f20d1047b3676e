use serde::{Deserialize, Serialize};
use crate::utils::cpf;

pub const VALID_MESSAGE: &str = "CPF válido";
pub const INVALID_MESSAGE: &str = "CPF inválido";

#[derive(Debug, Deserialize)]
pub struct ValidateCpfRequest {
    #[serde(default)]
    pub cpf: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateBatchRequest {
    #[serde(default)]
    pub cpfs: Option<Vec<String>>,
}

/// Result of validating a single CPF
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CpfValidation {
    pub cpf: String,
    pub cpf_limpo: String,
    pub valido: bool,
    pub formatado: Option<String>,
    pub mensagem: String,
}

impl CpfValidation {
    pub fn from_raw(raw: &str) -> Self {
        let cpf_limpo = cpf::normalize(raw);
        let valido = cpf::validate(&cpf_limpo);

        Self {
            cpf: raw.to_string(),
            cpf_limpo,
            valido,
            formatado: valido.then(|| cpf::format(raw)),
            mensagem: if valido { VALID_MESSAGE } else { INVALID_MESSAGE }.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BatchItem {
    pub cpf: String,
    pub valido: bool,
    pub formatado: Option<String>,
}

impl BatchItem {
    pub fn from_raw(raw: &str) -> Self {
        let valido = cpf::validate(raw);

        Self {
            cpf: raw.to_string(),
            valido,
            formatado: valido.then(|| cpf::format(raw)),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BatchReport {
    pub total: usize,
    pub validos: usize,
    pub invalidos: usize,
    pub resultados: Vec<BatchItem>,
}

impl BatchReport {
    /// Validates every input, keeping request order
    pub fn from_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let resultados: Vec<BatchItem> = inputs
            .into_iter()
            .map(|raw| BatchItem::from_raw(raw.as_ref()))
            .collect();
        let validos = resultados.iter().filter(|r| r.valido).count();

        Self {
            total: resultados.len(),
            validos,
            invalidos: resultados.len() - validos,
            resultados,
        }
    }
}
