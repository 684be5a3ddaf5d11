use std::sync::mpsc::{self, Receiver, Sender};

use super::QuizApp;
use crate::api::remote as http;
use crate::api::{AnalysisError, AnalyzeResponse, ApiConfig, UploadError, UploadPayload};
use crate::session::{Effect, Ticket};

/// Resultado de una llamada remota, etiquetado con su ticket.
#[derive(Debug)]
pub enum RemoteEvent {
    Uploaded {
        ticket: Ticket,
        result: Result<UploadPayload, UploadError>,
    },
    Analyzed {
        ticket: Ticket,
        result: Result<AnalyzeResponse, AnalysisError>,
    },
}

/// Ejecuta un `Effect` fuera del hilo de UI y deja el resultado en `events`.
pub trait Dispatcher {
    fn dispatch(&self, effect: Effect, events: Sender<RemoteEvent>, repaint: Option<egui::Context>);
}

pub struct RemoteLink {
    tx: Sender<RemoteEvent>,
    rx: Receiver<RemoteEvent>,
    repaint: Option<egui::Context>,
}

impl RemoteLink {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            repaint: None,
        }
    }

    pub fn sender(&self) -> Sender<RemoteEvent> {
        self.tx.clone()
    }
}

impl Default for RemoteLink {
    fn default() -> Self {
        Self::new()
    }
}

fn deliver(events: &Sender<RemoteEvent>, repaint: Option<&egui::Context>, event: RemoteEvent) {
    if events.send(event).is_err() {
        log::debug!("remote result arrived after the app closed");
    }
    if let Some(ctx) = repaint {
        ctx.request_repaint();
    }
}

pub struct HttpDispatcher {
    config: ApiConfig,
}

impl HttpDispatcher {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl Dispatcher for HttpDispatcher {
    #[cfg(not(target_arch = "wasm32"))]
    fn dispatch(&self, effect: Effect, events: Sender<RemoteEvent>, repaint: Option<egui::Context>) {
        let config = self.config.clone();
        std::thread::spawn(move || {
            let event = match effect {
                Effect::Upload { ticket, artifact } => RemoteEvent::Uploaded {
                    ticket,
                    result: http::upload(&config, &artifact),
                },
                Effect::Analyze { ticket, request } => RemoteEvent::Analyzed {
                    ticket,
                    result: http::analyze(&config, &request),
                },
            };
            deliver(&events, repaint.as_ref(), event);
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn dispatch(&self, effect: Effect, events: Sender<RemoteEvent>, repaint: Option<egui::Context>) {
        let config = self.config.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let event = match effect {
                Effect::Upload { ticket, artifact } => RemoteEvent::Uploaded {
                    ticket,
                    result: http::upload(&config, &artifact).await,
                },
                Effect::Analyze { ticket, request } => RemoteEvent::Analyzed {
                    ticket,
                    result: http::analyze(&config, &request).await,
                },
            };
            deliver(&events, repaint.as_ref(), event);
        });
    }
}

impl QuizApp {
    pub(crate) fn dispatch(&mut self, effect: Effect) {
        self.dispatcher
            .dispatch(effect, self.remote.sender(), self.remote.repaint.clone());
    }

    /// El worker pide repintado al terminar; sin contexto (tests) no hace falta.
    pub fn attach_repaint(&mut self, ctx: &egui::Context) {
        if self.remote.repaint.is_none() {
            self.remote.repaint = Some(ctx.clone());
        }
    }

    /// Se llama en cada frame. Devuelve cuántos resultados se procesaron.
    pub fn poll_remote_results(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.remote.rx.try_recv() {
            self.apply_remote_event(event);
            handled += 1;
        }
        handled
    }

    pub fn apply_remote_event(&mut self, event: RemoteEvent) {
        match event {
            RemoteEvent::Uploaded { ticket, result } => match result {
                Ok(payload) => {
                    self.session.upload_succeeded(ticket, payload);
                }
                Err(err) => {
                    log::warn!("upload error: {err}");
                    self.session.upload_failed(ticket, err.user_message());
                }
            },
            RemoteEvent::Analyzed { ticket, result } => match result {
                Ok(response) => {
                    self.session.analysis_succeeded(ticket, response);
                }
                Err(err) => {
                    log::warn!("analysis error: {err}");
                    self.session.analysis_failed(ticket, err.user_message());
                }
            },
        }
    }
}
