use crate::api::ApiConfig;
use crate::session::Session;

// Submódulos
pub mod actions;
pub mod remote;
pub mod view_models;

pub use remote::{Dispatcher, HttpDispatcher, RemoteEvent, RemoteLink};
pub use view_models::ReviewRow;

pub const APP_TITLE: &str = "PDF Quizzer v2";

/// Shell de la aplicación: la sesión, el canal de resultados remotos y el
/// poco estado de UI que no pertenece a la sesión.
pub struct QuizApp {
    pub session: Session,
    pub config: ApiConfig,
    /// Ruta escrita a mano en el selector nativo.
    pub path_input: String,
    pub(crate) remote: RemoteLink,
    dispatcher: Box<dyn Dispatcher>,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_config(ApiConfig::resolve())
    }

    pub fn with_config(config: ApiConfig) -> Self {
        let dispatcher = Box::new(HttpDispatcher::new(config.clone()));
        Self::with_dispatcher(config, dispatcher)
    }

    pub fn with_dispatcher(config: ApiConfig, dispatcher: Box<dyn Dispatcher>) -> Self {
        Self {
            session: Session::new(),
            config,
            path_input: String::new(),
            remote: RemoteLink::new(),
            dispatcher,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
