//! Máquina de estados de la sesión: Upload → Loading → Quiz → Report → Upload.
//!
//! `Session` es el único dueño del estado. Cada intención del usuario es un
//! método; las que necesitan red devuelven un [`Effect`] que el shell ejecuta
//! fuera del hilo de UI. Los resultados vuelven con el [`Ticket`] con el que
//! salieron y se descartan si ya no corresponden a la sesión actual.

use crate::api::{AnalyzeRequest, AnalyzeResponse, UploadPayload};
use crate::feedback::apply_analysis;
use crate::ledger::AnswerLedger;
use crate::model::{AppState, QuizQuestion, ScoreReport, UploadArtifact};
use crate::scoring;

pub const MISSING_FILE_MESSAGE: &str = "Please select a PDF file first.";

/// Identidad de una llamada asíncrona: sesión (`epoch`) y envío.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
    submission: u64,
}

#[derive(Debug)]
pub enum Effect {
    Upload {
        ticket: Ticket,
        artifact: UploadArtifact,
    },
    Analyze {
        ticket: Ticket,
        request: AnalyzeRequest,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Requiere que el usuario lo cierre.
    Blocking,
    Warning,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Pending,
    Done,
    Failed,
}

#[derive(Debug, Default)]
pub struct Session {
    state: AppState,
    artifact: Option<UploadArtifact>,
    summary: String,
    questions: Vec<QuizQuestion>,
    ledger: AnswerLedger,
    report: Option<ScoreReport>,
    analysis: AnalysisStatus,
    notice: Option<Notice>,
    epoch: u64,
    submissions: u64,
    in_flight: Option<Ticket>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // Consultas

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn artifact(&self) -> Option<&UploadArtifact> {
        self.artifact.as_ref()
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    pub fn report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    pub fn analysis(&self) -> AnalysisStatus {
        self.analysis
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn has_pending_call(&self) -> bool {
        self.in_flight.is_some()
    }

    // Intenciones

    pub fn select_file(&mut self, artifact: UploadArtifact) -> bool {
        if self.state != AppState::Upload {
            log::debug!("select_file ignored in {:?}", self.state);
            return false;
        }
        log::info!("selected {artifact:?}");
        self.artifact = Some(artifact);
        self.notice = None;
        true
    }

    pub fn submit_upload(&mut self) -> Option<Effect> {
        if self.state != AppState::Upload {
            log::debug!("submit_upload ignored in {:?}", self.state);
            return None;
        }
        let Some(artifact) = self.artifact.clone() else {
            self.notify(NoticeLevel::Blocking, MISSING_FILE_MESSAGE);
            return None;
        };

        let ticket = self.issue_ticket();
        self.state = AppState::Loading;
        self.notice = None;
        log::info!("Upload -> Loading ({})", artifact.name);
        Some(Effect::Upload { ticket, artifact })
    }

    pub fn upload_succeeded(&mut self, ticket: Ticket, payload: UploadPayload) -> bool {
        if !self.accepts(ticket, AppState::Loading) {
            log::debug!("stale upload result dropped: {ticket:?}");
            return false;
        }
        self.in_flight = None;

        for (i, q) in payload.questions.iter().enumerate() {
            if !q.is_well_formed() {
                log::warn!(
                    "question {} is malformed (answer {:?} not among {} options); it can never score",
                    i + 1,
                    q.correct_option,
                    q.options.len()
                );
            }
        }

        log::info!("Loading -> Quiz ({} questions)", payload.questions.len());
        self.summary = payload.summary;
        self.questions = payload.questions;
        self.ledger.clear();
        self.report = None;
        self.analysis = AnalysisStatus::Idle;
        self.state = AppState::Quiz;
        true
    }

    /// Vuelve a Upload conservando el PDF para poder reintentar.
    pub fn upload_failed(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        if !self.accepts(ticket, AppState::Loading) {
            log::debug!("stale upload failure dropped: {ticket:?}");
            return false;
        }
        self.in_flight = None;
        let message = message.into();
        log::warn!("Loading -> Upload: {message}");
        self.state = AppState::Upload;
        self.notify(NoticeLevel::Blocking, message);
        true
    }

    pub fn record_answer(&mut self, index: usize, option: impl Into<String>) -> bool {
        if self.state != AppState::Quiz {
            log::debug!("record_answer ignored in {:?}", self.state);
            return false;
        }
        if index >= self.questions.len() {
            log::warn!("answer for unknown question index {index} ignored");
            return false;
        }
        self.ledger.record(index, option);
        true
    }

    /// Corrige en local, pasa a Report y pide el análisis remoto.
    pub fn submit_quiz(&mut self) -> Option<Effect> {
        if self.state != AppState::Quiz {
            log::debug!("submit_quiz ignored in {:?}", self.state);
            return None;
        }

        let report = scoring::score(&self.questions, &self.ledger);
        log::info!(
            "Quiz -> Report: {}/{} ({:.2}%, {})",
            report.correct_count,
            report.total,
            report.accuracy_percent,
            report.mastery_tier.label()
        );
        self.report = Some(report);
        self.state = AppState::Report;
        self.analysis = AnalysisStatus::Pending;
        self.notice = None;

        let ticket = self.issue_ticket();
        let request = AnalyzeRequest::new(&self.questions, &self.ledger);
        Some(Effect::Analyze { ticket, request })
    }

    pub fn analysis_succeeded(&mut self, ticket: Ticket, response: AnalyzeResponse) -> bool {
        if !self.accepts(ticket, AppState::Report) {
            log::debug!("stale analysis dropped: {ticket:?}");
            return false;
        }
        self.in_flight = None;
        if let Some(report) = self.report.as_mut() {
            apply_analysis(report, response);
        }
        self.analysis = AnalysisStatus::Done;
        log::info!("analysis applied");
        true
    }

    /// El informe local se queda tal cual; sólo se avisa.
    pub fn analysis_failed(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        if !self.accepts(ticket, AppState::Report) {
            log::debug!("stale analysis failure dropped: {ticket:?}");
            return false;
        }
        self.in_flight = None;
        let message = message.into();
        log::warn!("analysis failed: {message}");
        self.analysis = AnalysisStatus::Failed;
        self.notify(NoticeLevel::Warning, message);
        true
    }

    /// Report → Upload. Descarta todo y cambia de `epoch`, así que cualquier
    /// respuesta pendiente de la sesión anterior se ignorará.
    pub fn reset(&mut self) -> bool {
        if self.state != AppState::Report {
            log::debug!("reset ignored in {:?}", self.state);
            return false;
        }
        log::info!("Report -> Upload (reset)");
        *self = Session {
            epoch: self.epoch + 1,
            submissions: self.submissions,
            ..Session::default()
        };
        true
    }

    pub fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            text: text.into(),
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // Motores internos

    fn issue_ticket(&mut self) -> Ticket {
        self.submissions += 1;
        let ticket = Ticket {
            epoch: self.epoch,
            submission: self.submissions,
        };
        self.in_flight = Some(ticket);
        ticket
    }

    fn accepts(&self, ticket: Ticket, expected: AppState) -> bool {
        self.state == expected && self.in_flight == Some(ticket)
    }
}
