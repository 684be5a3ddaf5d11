#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_BASE: &str = "http://127.0.0.1:5000";
#[cfg(not(target_arch = "wasm32"))]
const BASE_ENV_VAR: &str = "PDF_QUIZZER_API_URL";

/// Dónde viven `/upload` y `/analyze`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolve() -> Self {
        let base = std::env::var(BASE_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NATIVE_BASE.to_string());
        log::info!("backend base url: {base}");
        Self::new(base)
    }

    /// Query string, luego `<meta>`, luego el propio origen de la página.
    #[cfg(target_arch = "wasm32")]
    pub fn resolve() -> Self {
        let base = base_from_querystring()
            .or_else(base_from_meta)
            .or_else(page_origin)
            .unwrap_or_default();
        log::info!("backend base url: {base}");
        Self::new(base)
    }
}

#[cfg(target_arch = "wasm32")]
fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn base_from_querystring() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("api_base").as_deref().and_then(normalize)
}

#[cfg(target_arch = "wasm32")]
fn base_from_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='pdf-quizzer-api-base']")
        .ok()??;
    meta.get_attribute("content").as_deref().and_then(normalize)
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new(" http://localhost:5000/ ");
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.endpoint("/upload"), "http://localhost:5000/upload");
        assert_eq!(config.endpoint("analyze"), "http://localhost:5000/analyze");
    }

    #[test]
    fn empty_base_yields_relative_paths() {
        assert_eq!(ApiConfig::new("").endpoint("upload"), "/upload");
    }
}
