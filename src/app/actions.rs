use super::QuizApp;
use crate::model::UploadArtifact;
use crate::session::NoticeLevel;

pub const NOT_A_PDF_MESSAGE: &str = "Only PDF files are supported.";

fn looks_like_pdf(name: &str, mime: &str) -> bool {
    mime == crate::api::PDF_MIME || name.to_ascii_lowercase().ends_with(".pdf")
}

impl QuizApp {
    pub fn select_file(&mut self, artifact: UploadArtifact) {
        self.select_checked_file(artifact, "");
    }

    /// Solo se rechaza si ni el nombre ni el MIME dicen PDF.
    fn select_checked_file(&mut self, artifact: UploadArtifact, mime: &str) {
        if !looks_like_pdf(&artifact.name, mime) {
            self.session.notify(NoticeLevel::Warning, NOT_A_PDF_MESSAGE);
            return;
        }
        self.session.select_file(artifact);
    }

    /// Archivos soltados sobre la ventana. En web llegan con bytes; en nativo
    /// con ruta.
    pub fn accept_dropped_files(&mut self, files: Vec<egui::DroppedFile>) {
        let Some(file) = files
            .into_iter()
            .find(|f| looks_like_pdf(&display_name(f), &f.mime))
        else {
            self.session.notify(NoticeLevel::Warning, NOT_A_PDF_MESSAGE);
            return;
        };

        let name = display_name(&file);
        if let Some(bytes) = file.bytes {
            self.select_checked_file(UploadArtifact::new(name, bytes.to_vec()), &file.mime);
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = file.path {
            self.path_input = path.display().to_string();
            self.load_path_input();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_path_input(&mut self) {
        let raw = self.path_input.trim().to_string();
        if raw.is_empty() {
            self.session
                .notify(NoticeLevel::Blocking, crate::session::MISSING_FILE_MESSAGE);
            return;
        }

        let path = std::path::Path::new(&raw);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| raw.clone());

        match std::fs::read(path) {
            Ok(bytes) => self.select_file(UploadArtifact::new(name, bytes)),
            Err(err) => {
                log::warn!("could not read {raw}: {err}");
                self.session
                    .notify(NoticeLevel::Warning, format!("Could not read {raw}: {err}"));
            }
        }
    }

    pub fn submit_upload(&mut self) {
        if let Some(effect) = self.session.submit_upload() {
            self.dispatch(effect);
        }
    }

    pub fn record_answer(&mut self, index: usize, option: &str) {
        self.session.record_answer(index, option);
    }

    pub fn submit_quiz(&mut self) {
        if let Some(effect) = self.session.submit_quiz() {
            self.dispatch(effect);
        }
    }

    pub fn reset(&mut self) {
        if self.session.reset() {
            self.path_input.clear();
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.session.dismiss_notice();
    }

    /// Escribe `summary.pdf` en el directorio de trabajo.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_summary(&mut self) {
        self.export_summary_to(std::path::Path::new("summary.pdf"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_summary_to(&mut self, path: &std::path::Path) {
        let bytes = crate::export::export_summary_pdf("Summary", self.session.summary());
        match std::fs::write(path, bytes) {
            Ok(()) => {
                let mut text = format!("Summary saved to {}", path.display());
                if crate::export::needs_substitution(self.session.summary()) {
                    text.push_str(&format!(" ({})", crate::export::SUBSTITUTION_NOTE));
                }
                self.session.notify(NoticeLevel::Info, text);
            }
            Err(err) => {
                log::warn!("export failed: {err}");
                self.session
                    .notify(NoticeLevel::Warning, format!("Could not save the summary: {err}"));
            }
        }
    }
}

fn display_name(file: &egui::DroppedFile) -> String {
    if !file.name.is_empty() {
        return file.name.clone();
    }
    file.path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::Sender;

    use super::*;
    use crate::api::{AnalysisError, AnalyzeResponse, ApiConfig, UploadError, UploadPayload};
    use crate::app::{Dispatcher, RemoteEvent};
    use crate::model::{AppState, QuizQuestion};
    use crate::session::Effect;

    /// Responde al instante con resultados fijos.
    struct Scripted {
        fail_upload: bool,
        fail_analysis: bool,
    }

    impl Dispatcher for Scripted {
        fn dispatch(&self, effect: Effect, events: Sender<RemoteEvent>, _: Option<egui::Context>) {
            let event = match effect {
                Effect::Upload { ticket, .. } => RemoteEvent::Uploaded {
                    ticket,
                    result: if self.fail_upload {
                        Err(UploadError::Status {
                            status: 500,
                            message: Some("Failed to parse structured JSON from AI".into()),
                        })
                    } else {
                        Ok(UploadPayload {
                            summary: "Summary text".into(),
                            questions: vec![
                                QuizQuestion::new("Q1", &["a", "b"], "a"),
                                QuizQuestion::new("Q2", &["a", "b"], "b"),
                            ],
                        })
                    },
                },
                Effect::Analyze { ticket, .. } => RemoteEvent::Analyzed {
                    ticket,
                    result: if self.fail_analysis {
                        Err(AnalysisError::Status {
                            status: 500,
                            message: None,
                        })
                    } else {
                        Ok(AnalyzeResponse {
                            strong_areas: Some(vec!["Topic A".into()]),
                            weak_areas: Some(vec!["Topic B".into()]),
                            feedback: Some("Nice work".into()),
                        })
                    },
                },
            };
            events.send(event).unwrap();
        }
    }

    fn app(fail_upload: bool, fail_analysis: bool) -> QuizApp {
        QuizApp::with_dispatcher(
            ApiConfig::new("http://test"),
            Box::new(Scripted {
                fail_upload,
                fail_analysis,
            }),
        )
    }

    fn pdf() -> UploadArtifact {
        UploadArtifact::new("notes.pdf", vec![0x25, 0x50])
    }

    #[test]
    fn full_round_trip_through_the_channel() {
        let mut app = app(false, false);
        app.select_file(pdf());
        app.submit_upload();
        assert_eq!(app.session.state(), AppState::Loading);

        assert_eq!(app.poll_remote_results(), 1);
        assert_eq!(app.session.state(), AppState::Quiz);

        app.record_answer(0, "a");
        app.record_answer(1, "a");
        app.submit_quiz();
        // el informe local ya está visible antes del análisis
        assert_eq!(app.session.state(), AppState::Report);
        assert_eq!(app.session.report().unwrap().weak_topics, vec!["Q2".to_string()]);

        app.poll_remote_results();
        let report = app.session.report().unwrap();
        assert_eq!(report.weak_topics, vec!["Topic B".to_string()]);
        assert_eq!(report.feedback_text, "Nice work");

        app.reset();
        assert_eq!(app.session.state(), AppState::Upload);
        assert!(app.session.artifact().is_none());
    }

    #[test]
    fn upload_failure_surfaces_server_message() {
        let mut app = app(true, false);
        app.select_file(pdf());
        app.submit_upload();
        app.poll_remote_results();

        assert_eq!(app.session.state(), AppState::Upload);
        assert!(app.session.artifact().is_some());
        let notice = app.session.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Blocking);
        assert_eq!(notice.text, "Failed to parse structured JSON from AI");
    }

    #[test]
    fn analysis_failure_still_shows_report() {
        let mut app = app(false, true);
        app.select_file(pdf());
        app.submit_upload();
        app.poll_remote_results();
        app.record_answer(0, "a");
        app.submit_quiz();
        app.poll_remote_results();

        assert_eq!(app.session.state(), AppState::Report);
        let report = app.session.report().unwrap();
        assert_eq!(report.correct_count, 1);
        assert!(report.feedback_text.is_empty());
        assert_eq!(report.strong_topics, vec!["Q1".to_string()]);
        assert_eq!(app.session.notice().unwrap().level, NoticeLevel::Warning);
    }

    #[test]
    fn non_pdf_files_are_rejected() {
        let mut app = app(false, false);
        app.select_file(UploadArtifact::new("notes.docx", vec![1]));
        assert!(app.session.artifact().is_none());
        assert_eq!(app.session.notice().unwrap().text, NOT_A_PDF_MESSAGE);
    }

    #[test]
    fn dropped_web_file_becomes_artifact() {
        let mut app = app(false, false);
        let file = egui::DroppedFile {
            name: "Lecture.PDF".into(),
            bytes: Some(vec![1u8, 2, 3].into()),
            ..Default::default()
        };
        app.accept_dropped_files(vec![file]);
        let artifact = app.session.artifact().unwrap();
        assert_eq!(artifact.name, "Lecture.PDF");
        assert_eq!(artifact.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn dropped_file_with_pdf_mime_but_no_extension_is_accepted() {
        let mut app = app(false, false);
        let file = egui::DroppedFile {
            name: "blob".into(),
            mime: crate::api::PDF_MIME.into(),
            bytes: Some(vec![1u8, 2, 3].into()),
            ..Default::default()
        };
        app.accept_dropped_files(vec![file]);
        let artifact = app.session.artifact().unwrap();
        assert_eq!(artifact.name, "blob");
        assert!(app.session.notice().is_none());
    }

    #[test]
    fn missing_path_is_reported() {
        let mut app = app(false, false);
        app.path_input = "/definitely/not/here.pdf".into();
        app.load_path_input();
        assert!(app.session.artifact().is_none());
        assert_eq!(app.session.notice().unwrap().level, NoticeLevel::Warning);
    }

    #[test]
    fn export_writes_a_pdf() {
        let mut app = app(false, false);
        app.select_file(pdf());
        app.submit_upload();
        app.poll_remote_results();

        let path = std::env::temp_dir().join(format!("pdf_quizzer_export_{}.pdf", std::process::id()));
        app.export_summary_to(&path);
        let bytes = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(bytes.starts_with(b"%PDF-1.4"));
        let notice = app.session.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert!(!notice.text.contains(crate::export::SUBSTITUTION_NOTE));
    }

    #[test]
    fn export_mentions_replaced_characters() {
        let mut app = app(false, false);
        app.session.select_file(pdf());
        let effect = app.session.submit_upload();
        let Some(Effect::Upload { ticket, .. }) = effect else {
            panic!("expected an upload effect");
        };
        assert!(app.session.upload_succeeded(
            ticket,
            UploadPayload {
                summary: "Resumen de la lección".into(),
                questions: vec![QuizQuestion::new("Q1", &["a", "b"], "a")],
            },
        ));

        let path = std::env::temp_dir().join(format!("pdf_quizzer_export_nonascii_{}.pdf", std::process::id()));
        app.export_summary_to(&path);
        let _ = std::fs::remove_file(&path);
        let notice = app.session.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert!(notice.text.contains(crate::export::SUBSTITUTION_NOTE));
    }

    #[test]
    fn export_notice_does_not_follow_into_report() {
        let mut app = app(false, false);
        app.select_file(pdf());
        app.submit_upload();
        app.poll_remote_results();

        let path = std::env::temp_dir().join(format!("pdf_quizzer_export_report_{}.pdf", std::process::id()));
        app.export_summary_to(&path);
        let _ = std::fs::remove_file(&path);
        assert!(app.session.notice().is_some());

        app.submit_quiz();
        assert_eq!(app.session.state(), AppState::Report);
        assert!(app.session.notice().is_none());
    }
}
