//! Contrato con el backend: tipos del wire, interpretación de respuestas y
//! el transporte HTTP para cada plataforma.

pub mod config;
pub mod error;
pub mod remote;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ledger::AnswerLedger;
use crate::model::QuizQuestion;

pub use config::ApiConfig;
pub use error::{AnalysisError, UploadError};

pub const UPLOAD_PATH: &str = "/upload";
pub const ANALYZE_PATH: &str = "/analyze";
pub const UPLOAD_FIELD: &str = "pdf";
pub const PDF_MIME: &str = "application/pdf";

/// Cuerpo 2xx de `/upload`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadPayload {
    pub summary: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeRequest {
    pub questions: Vec<QuizQuestion>,
    #[serde(rename = "userAnswers")]
    pub user_answers: BTreeMap<String, String>,
}

impl AnalyzeRequest {
    pub fn new(questions: &[QuizQuestion], ledger: &AnswerLedger) -> Self {
        Self {
            questions: questions.to_vec(),
            user_answers: ledger.to_wire(),
        }
    }
}

/// Todos los campos son opcionales; lo que falte se completa con la
/// corrección local.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub strong_areas: Option<Vec<String>>,
    #[serde(default)]
    pub weak_areas: Option<Vec<String>>,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

pub fn interpret_upload(status: u16, body: &str) -> Result<UploadPayload, UploadError> {
    if !is_success(status) {
        return Err(UploadError::Status {
            status,
            message: server_message(body),
        });
    }
    Ok(serde_json::from_str(body)?)
}

pub fn interpret_analysis(status: u16, body: &str) -> Result<AnalyzeResponse, AnalysisError> {
    if !is_success(status) {
        return Err(AnalysisError::Status {
            status,
            message: server_message(body),
        });
    }
    Ok(serde_json::from_str(body)?)
}
