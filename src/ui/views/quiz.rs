use egui::{Context, RichText};

use crate::QuizApp;
use crate::ui::helpers::{inline_notice, wide_button};
use crate::ui::layout::scroll_panel;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    scroll_panel(ctx, 760.0, |ui| {
        ui.heading("Summary");
        ui.add_space(6.0);
        ui.label(app.session.summary());

        #[cfg(not(target_arch = "wasm32"))]
        {
            ui.add_space(6.0);
            if ui.button("📥 Export summary as PDF").clicked() {
                app.export_summary();
            }
        }
        inline_notice(app, ui);

        ui.add_space(16.0);
        ui.separator();
        ui.heading("Quiz");
        ui.add_space(6.0);

        // Primero se recoge el clic y después se aplica, para no pedir
        // `&mut app` mientras se recorren sus preguntas.
        let mut picked: Option<(usize, String)> = None;
        for (q_idx, q) in app.session.questions().iter().enumerate() {
            let selected = app.session.ledger().get(q_idx);
            ui.add_space(8.0);
            ui.label(RichText::new(format!("{}. {}", q_idx + 1, q.prompt)).strong());
            ui.indent(("options", q_idx), |ui| {
                for option in &q.options {
                    let checked = selected == Some(option.as_str());
                    if ui.radio(checked, option).clicked() {
                        picked = Some((q_idx, option.clone()));
                    }
                }
            });
        }
        if let Some((q_idx, option)) = picked {
            app.record_answer(q_idx, &option);
        }

        ui.add_space(16.0);
        let answered = app.session.ledger().len();
        let total = app.session.questions().len();
        ui.label(format!("Answered {answered} of {total}"));
        ui.add_space(6.0);
        if wide_button(ui, "Submit Quiz", 200.0, true) {
            app.submit_quiz();
        }
    });
}
