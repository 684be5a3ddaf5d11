use crate::api::AnalyzeResponse;
use crate::model::ScoreReport;

/// Mezcla el análisis remoto en el informe local. Cada campo que llegue vacío
/// o ausente conserva el valor de la corrección local.
pub fn apply_analysis(report: &mut ScoreReport, response: AnalyzeResponse) {
    if let Some(strong) = non_empty_list(response.strong_areas) {
        report.strong_topics = strong;
    }
    if let Some(weak) = non_empty_list(response.weak_areas) {
        report.weak_topics = weak;
    }
    if let Some(text) = response.feedback.filter(|t| !t.trim().is_empty()) {
        report.feedback_text = text.trim().to_string();
    }
}

fn non_empty_list(list: Option<Vec<String>>) -> Option<Vec<String>> {
    let cleaned: Vec<String> = list?
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}
