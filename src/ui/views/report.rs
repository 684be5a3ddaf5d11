use egui::{Context, ProgressBar, RichText};

use crate::QuizApp;
use crate::app::view_models::tier_copy;
use crate::session::AnalysisStatus;
use crate::ui::helpers::{CORRECT_COLOR, INCORRECT_COLOR, inline_notice, topic_list, wide_button};
use crate::ui::layout::scroll_panel;

pub fn ui_report(app: &mut QuizApp, ctx: &Context) {
    let Some(report) = app.session.report().cloned() else {
        // Report sin informe no debería ocurrir; se vuelve a empezar.
        log::warn!("report view without a score report");
        app.reset();
        return;
    };
    let rows = app.review_rows();
    let analysis = app.session.analysis();

    scroll_panel(ctx, 760.0, |ui| {
        ui.heading("Your Performance Report");
        ui.add_space(8.0);
        if let Some(line) = app.score_line() {
            ui.label(RichText::new(line).size(18.0).strong());
        }

        ui.add_space(6.0);
        ui.add(
            ProgressBar::new((report.accuracy_percent / 100.0) as f32)
                .text(format!("Accuracy: {:.2}%", report.accuracy_percent)),
        );

        ui.add_space(8.0);
        ui.label(RichText::new(format!("Mastery: {}", report.mastery_tier.label())).strong());
        ui.label(tier_copy(report.mastery_tier));

        ui.add_space(12.0);
        ui.columns(2, |cols| {
            topic_list(&mut cols[0], "Strong topics", &report.strong_topics, CORRECT_COLOR);
            topic_list(&mut cols[1], "Weak topics", &report.weak_topics, INCORRECT_COLOR);
        });

        ui.add_space(12.0);
        ui.label(RichText::new("Feedback").strong());
        match analysis {
            AnalysisStatus::Pending => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Analyzing your answers...");
                });
            }
            _ if !report.feedback_text.is_empty() => {
                ui.label(&report.feedback_text);
            }
            _ => {
                ui.label("No detailed feedback available.");
            }
        }
        inline_notice(app, ui);

        ui.add_space(16.0);
        ui.separator();
        ui.label(RichText::new("Review Your Answers:").strong());
        for row in &rows {
            ui.add_space(6.0);
            ui.label(RichText::new(format!("{}. {}", row.number, row.prompt)).strong());
            let color = if row.correct { CORRECT_COLOR } else { INCORRECT_COLOR };
            let mark = if row.correct { "✅" } else { "❌" };
            ui.label(RichText::new(format!("{mark} Your answer: {}", row.given_label())).color(color));
            if !row.correct {
                ui.label(
                    RichText::new(format!("Correct answer: {}", row.expected)).color(CORRECT_COLOR),
                );
            }
        }

        ui.add_space(20.0);
        if wide_button(ui, "Try Another PDF", 200.0, true) {
            app.reset();
        }
    });
}
