// src/ui/helpers.rs
use egui::{Align2, Button, Color32, Context, RichText, Ui, Vec2};

use crate::app::QuizApp;
use crate::session::NoticeLevel;

pub const CORRECT_COLOR: Color32 = Color32::from_rgb(46, 160, 67);
pub const INCORRECT_COLOR: Color32 = Color32::from_rgb(218, 54, 51);
pub const WARNING_COLOR: Color32 = Color32::from_rgb(210, 153, 34);

pub fn wide_button(ui: &mut Ui, label: &str, width: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, 36.0)))
        .clicked()
}

/// Avisos bloqueantes como ventana modal con "OK".
pub fn blocking_notice(app: &mut QuizApp, ctx: &Context) {
    let Some(text) = app
        .session
        .notice()
        .filter(|n| n.level == NoticeLevel::Blocking)
        .map(|n| n.text.clone())
    else {
        return;
    };

    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(text);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    app.dismiss_notice();
                }
            });
        });
}

/// Avisos no bloqueantes, en línea dentro de la vista.
pub fn inline_notice(app: &mut QuizApp, ui: &mut Ui) {
    let Some(notice) = app.session.notice().cloned() else {
        return;
    };
    let color = match notice.level {
        NoticeLevel::Blocking => return,
        NoticeLevel::Warning => WARNING_COLOR,
        NoticeLevel::Info => ui.visuals().text_color(),
    };
    ui.horizontal(|ui| {
        ui.label(RichText::new(&notice.text).color(color));
        if ui.small_button("✖").clicked() {
            app.dismiss_notice();
        }
    });
}

pub fn topic_list(ui: &mut Ui, title: &str, topics: &[String], color: Color32) {
    ui.label(RichText::new(title).strong().color(color));
    if topics.is_empty() {
        ui.label("None");
    }
    for topic in topics {
        ui.label(format!("• {topic}"));
    }
}
