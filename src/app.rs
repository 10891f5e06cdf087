use std::path::Path;

use egui::Color32;

use crate::canvas::{Canvas, SideStep, render};
use crate::input::{InputEvent, InputHandler};
use crate::palette::{ActionType, Palette};
use crate::panels;
use crate::persistence::SketchSnapshot;

const SKETCH_FILE: &str = "chemsketch-sketch.json";

/// The application: palette on the left, dialog bar at the bottom,
/// canvas in the middle.
pub struct SketchApp {
    canvas: Canvas,
    palette: Palette,
    input: InputHandler,
    entry: String,
    error: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(),
            palette: Palette::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
            entry: String::new(),
            error: None,
        }
    }
}

impl SketchApp {
    /// Called once before the first frame. Restores the previous sketch
    /// from eframe storage if there is one.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        if let Some(storage) = cc.storage {
            if let Some(snapshot) = eframe::get_value::<SketchSnapshot>(storage, eframe::APP_KEY) {
                app.canvas.restore(&snapshot);
                log::info!("restored sketch from previous session");
            }
        }
        app
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn entry_mut(&mut self) -> &mut String {
        &mut self.entry
    }

    /// The dialog bar contents: the latest input error (red) or the
    /// current prompt (green).
    pub fn dialog_message(&self) -> (String, Color32) {
        if let Some(err) = &self.error {
            (err.clone(), Color32::from_rgb(200, 40, 40))
        } else {
            let prompt = self.canvas.prompt().unwrap_or("");
            (prompt.to_owned(), Color32::from_rgb(0, 150, 60))
        }
    }

    /// A palette button was clicked. Errors (e.g. no main chain yet)
    /// leave the selection unchanged and go to the dialog bar.
    pub fn select_action(&mut self, action: ActionType) {
        match self.canvas.select_action(action) {
            Ok(()) => {
                self.palette.set_selected(action);
                self.error = None;
                self.entry.clear();
            }
            Err(err) => {
                log::warn!("cannot start {:?}: {}", action, err);
                self.error = Some(err.to_string());
            }
        }
    }

    /// Enter was pressed in the dialog field. The field is cleared only
    /// when the entry is accepted, so a typo stays editable.
    pub fn submit_entry(&mut self) {
        if self.entry.trim().is_empty() {
            return;
        }
        match self.canvas.submit_entry(&self.entry) {
            Ok(()) => {
                self.entry.clear();
                self.error = None;
            }
            Err(err) => {
                log::warn!("rejected entry {:?}: {}", self.entry, err);
                self.error = Some(err.to_string());
            }
        }
    }

    /// Route this frame's pointer/keyboard input to the canvas.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            match event {
                InputEvent::PointerMove {
                    pos,
                    in_canvas: true,
                } => self.canvas.pointer_moved(pos),
                InputEvent::PointerDown {
                    pos,
                    button: egui::PointerButton::Primary,
                    in_canvas: true,
                } => self.canvas.primary_click(pos),
                InputEvent::PointerDown {
                    button: egui::PointerButton::Secondary,
                    in_canvas: true,
                    ..
                } => self.maybe_cycle_direction(),
                InputEvent::KeyDown { key: egui::Key::R } => self.maybe_cycle_direction(),
                _ => {}
            }
        }
    }

    // Direction cycling only applies while placing a side chain, so a
    // stray R typed into the dialog field does nothing.
    fn maybe_cycle_direction(&mut self) {
        if self.canvas.side_step() == SideStep::ChooseLocation {
            self.canvas.cycle_ghost_direction();
        }
    }

    /// Write the current sketch next to the working directory.
    pub fn save_sketch(&mut self) {
        if let Err(err) = self.canvas.snapshot().save_to(Path::new(SKETCH_FILE)) {
            log::error!("saving sketch failed: {}", err);
            self.error = Some(err.to_string());
        } else {
            self.error = None;
        }
    }

    /// Restore a sketch from a dropped `.json` file.
    fn check_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<egui::DroppedFile> = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            let Some(path) = &file.path else {
                continue;
            };
            if path.extension().is_none_or(|ext| ext != "json") {
                log::warn!("dropped file is not a sketch: {}", path.display());
                continue;
            }
            match SketchSnapshot::load_from(path) {
                Ok(snapshot) => {
                    self.canvas.restore(&snapshot);
                    self.error = None;
                }
                Err(err) => {
                    log::error!("loading dropped sketch failed: {}", err);
                    self.error = Some(err.to_string());
                }
            }
        }
    }

    pub(crate) fn paint_canvas(&self, painter: &egui::Painter, rect: egui::Rect) {
        render::paint(&self.canvas, painter, rect);
    }
}


impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.canvas.snapshot());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_dropped_files(ctx);

        panels::palette_panel(self, ctx);
        panels::dialog_panel(self, ctx);
        panels::canvas_panel(self, ctx);
    }
}
