use egui::{Context, Spinner};

use crate::ui::layout::centered_panel;

pub fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 140.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Processing your PDF...");
            ui.add_space(12.0);
            ui.add(Spinner::new().size(36.0));
            ui.add_space(12.0);
            ui.label("This may take a moment. 🤖");
        });
    });
}
