use thiserror::Error;

pub const GENERIC_UPLOAD_MESSAGE: &str = "Failed to process PDF. Please try again.";
pub const GENERIC_ANALYSIS_MESSAGE: &str =
    "Could not get detailed feedback right now. Your score is shown below.";

/// Fallos de `/upload`. Devuelven la sesión a la pantalla de subida.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UploadError {
    #[error("upload request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upload failed with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("invalid upload response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl UploadError {
    /// El mensaje del servidor si lo hay; si no, uno genérico.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_UPLOAD_MESSAGE.to_string(),
        }
    }
}

/// Fallos de `/analyze`. Nunca impiden ver el informe.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("analysis request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("analysis failed with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("invalid analysis response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Status {
                message: Some(message),
                ..
            } => format!("Feedback unavailable: {message}"),
            _ => GENERIC_ANALYSIS_MESSAGE.to_string(),
        }
    }
}
