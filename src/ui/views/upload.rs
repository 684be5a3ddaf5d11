use egui::{Context, RichText};

use crate::QuizApp;
use crate::ui::helpers::{inline_notice, wide_button};
use crate::ui::layout::centered_panel;

pub fn ui_upload(app: &mut QuizApp, ctx: &Context) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    if !dropped.is_empty() {
        app.accept_dropped_files(dropped);
    }

    centered_panel(ctx, 260.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label("Upload a PDF document to get a summary and a 10-question quiz.");
            ui.add_space(12.0);
            ui.label(RichText::new("Drop a PDF file onto this window").italics());

            #[cfg(not(target_arch = "wasm32"))]
            {
                ui.add_space(6.0);
                ui.label("or type its path:");
                ui.horizontal(|ui| {
                    let response = ui.text_edit_singleline(&mut app.path_input);
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Load").clicked() || submitted {
                        app.load_path_input();
                    }
                });
            }

            ui.add_space(12.0);
            match app.session.artifact() {
                Some(artifact) => {
                    ui.label(format!("📄 {} ({} KB)", artifact.name, artifact.bytes.len() / 1024));
                }
                None => {
                    ui.label("No file selected");
                }
            }

            ui.add_space(12.0);
            let has_file = app.session.artifact().is_some();
            if wide_button(ui, "Generate Quiz", 200.0, has_file) {
                app.submit_upload();
            }

            ui.add_space(8.0);
            inline_notice(app, ui);
        });
    });
}
