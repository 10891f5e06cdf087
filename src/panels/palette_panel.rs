use crate::SketchApp;
use crate::palette::ActionType;

pub fn palette_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("palette_panel")
        .resizable(true)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Palette");

            let selected = app.palette().selected();
            for action in ActionType::ALL {
                if ui
                    .selectable_label(selected == action, action.label())
                    .clicked()
                {
                    log::info!("palette button clicked: {}", action.label());
                    app.select_action(action);
                }
            }

            ui.separator();

            if ui.button("Save sketch").clicked() {
                app.save_sketch();
            }
            ui.label("Drop a saved .json to load it");

            ui.separator();

            // Compound summary
            let compound = app.canvas().compound();
            if app.canvas().main_committed() {
                let shape = if compound.main().is_cyclo() {
                    "ring"
                } else {
                    "chain"
                };
                ui.label(format!(
                    "Main: {} carbons ({})",
                    compound.main().size(),
                    shape
                ));
                ui.label(format!("Side chains: {}", compound.sides().len()));
                if compound.max_bond_order() > 1 {
                    ui.label(format!("Highest bond order: {}", compound.max_bond_order()));
                }
            } else {
                ui.label("No main chain yet");
            }
        });
}
