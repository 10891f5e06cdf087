use egui::Color32;

// Canvas color table. Ghost colors are translucent so committed work
// stays readable underneath previews.

pub const BACKGROUND: Color32 = Color32::from_rgb(224, 255, 253);
pub const CHAIN: Color32 = Color32::BLACK;

pub const GHOST_GREY: Color32 = Color32::from_rgba_premultiplied(47, 47, 47, 100);
pub const GHOST_BLUE: Color32 = Color32::from_rgba_premultiplied(0, 43, 110, 110);
pub const GHOST_YELLOW: Color32 = Color32::from_rgba_premultiplied(110, 86, 0, 110);
pub const GHOST_RED: Color32 = Color32::from_rgba_premultiplied(110, 30, 30, 110);

/// Fill for main-chain nodes offered for clicking.
pub const NODE_HIGHLIGHT: Color32 = Color32::from_rgba_premultiplied(132, 127, 83, 140);

pub const CHAIN_WIDTH: f32 = 15.0;
pub const BOND_WIDTH: f32 = 10.0;
/// Vertical offset of the extra double/triple bond lines.
pub const BOND_OFFSET: f32 = 30.0;
