#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("chemsketch"),
        ..Default::default()
    };
    eframe::run_native(
        "chemsketch",
        options,
        Box::new(|cc| Ok(Box::new(chemsketch::SketchApp::new(cc)))),
    )
}
