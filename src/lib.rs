pub mod api;
pub mod app;
pub mod export;
pub mod feedback;
pub mod ledger;
pub mod model;
pub mod scoring;
pub mod session;
pub mod ui;

pub use app::QuizApp;
pub use session::Session;
