use crate::SketchApp;

/// Bottom bar: the prompt/error message and the typed-entry field.
pub fn dialog_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("dialog_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let (message, color) = app.dialog_message();
            ui.colored_label(color, message);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(app.entry_mut())
                        .desired_width(120.0)
                        .hint_text("size / Y / N"),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    app.submit_entry();
                    response.request_focus();
                }
            });
        });
    });
}
