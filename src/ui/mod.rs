mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.attach_repaint(ctx);

        // Resultados de /upload y /analyze que hayan llegado desde el último frame
        self.poll_remote_results();

        top_panel(ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado
        match self.session.state() {
            AppState::Upload => views::upload::ui_upload(self, ctx),
            AppState::Loading => views::loading::ui_loading(ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Report => views::report::ui_report(self, ctx),
        }

        helpers::blocking_notice(self, ctx);
    }
}
