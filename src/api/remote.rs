use super::{
    ANALYZE_PATH, AnalysisError, AnalyzeRequest, AnalyzeResponse, ApiConfig, PDF_MIME,
    UPLOAD_FIELD, UPLOAD_PATH, UploadError, UploadPayload, interpret_analysis, interpret_upload,
};
use crate::model::UploadArtifact;

// Sin timeout propio: generar el resumen puede tardar bastante.
#[cfg(not(target_arch = "wasm32"))]
fn blocking_client() -> Result<reqwest::blocking::Client, reqwest::Error> {
    reqwest::blocking::Client::builder()
        .timeout(None::<std::time::Duration>)
        .build()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn upload(config: &ApiConfig, artifact: &UploadArtifact) -> Result<UploadPayload, UploadError> {
    use reqwest::blocking::multipart::{Form, Part};

    let url = config.endpoint(UPLOAD_PATH);
    log::info!("POST {url} ({}, {} bytes)", artifact.name, artifact.bytes.len());

    let part = Part::bytes(artifact.bytes.clone())
        .file_name(artifact.name.clone())
        .mime_str(PDF_MIME)?;
    let form = Form::new().part(UPLOAD_FIELD, part);

    let response = blocking_client()?.post(&url).multipart(form).send()?;
    let status = response.status().as_u16();
    let body = response.text()?;
    interpret_upload(status, &body)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn analyze(config: &ApiConfig, request: &AnalyzeRequest) -> Result<AnalyzeResponse, AnalysisError> {
    let url = config.endpoint(ANALYZE_PATH);
    log::info!("POST {url} ({} questions)", request.questions.len());

    let response = blocking_client()?.post(&url).json(request).send()?;
    let status = response.status().as_u16();
    let body = response.text()?;
    interpret_analysis(status, &body)
}

#[cfg(target_arch = "wasm32")]
pub async fn upload(
    config: &ApiConfig,
    artifact: &UploadArtifact,
) -> Result<UploadPayload, UploadError> {
    use reqwest::multipart::{Form, Part};

    let url = config.endpoint(UPLOAD_PATH);
    log::info!("POST {url} ({}, {} bytes)", artifact.name, artifact.bytes.len());

    let part = Part::bytes(artifact.bytes.clone())
        .file_name(artifact.name.clone())
        .mime_str(PDF_MIME)?;
    let form = Form::new().part(UPLOAD_FIELD, part);

    let response = reqwest::Client::new()
        .post(&url)
        .multipart(form)
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    interpret_upload(status, &body)
}

#[cfg(target_arch = "wasm32")]
pub async fn analyze(
    config: &ApiConfig,
    request: &AnalyzeRequest,
) -> Result<AnalyzeResponse, AnalysisError> {
    let url = config.endpoint(ANALYZE_PATH);
    log::info!("POST {url} ({} questions)", request.questions.len());

    let response = reqwest::Client::new()
        .post(&url)
        .json(request)
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    interpret_analysis(status, &body)
}
