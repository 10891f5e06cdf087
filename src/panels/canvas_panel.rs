use crate::SketchApp;

pub fn canvas_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_rect = ui.available_rect_before_wrap();

        // Handle input before painting so this frame's ghost follows
        // this frame's pointer.
        app.handle_canvas_input(ctx, canvas_rect);

        app.paint_canvas(ui.painter(), canvas_rect);

        // Ghost previews track the mouse continuously.
        ctx.request_repaint();
    });
}
