mod canvas_panel;
mod dialog_panel;
mod palette_panel;

pub use canvas_panel::canvas_panel;
pub use dialog_panel::dialog_panel;
pub use palette_panel::palette_panel;
