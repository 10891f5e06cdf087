#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod compound;
pub mod error;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod panels;
pub mod persistence;

pub use app::SketchApp;
pub use canvas::Canvas;
pub use compound::{Chain, Compound};
pub use error::InputError;
pub use geometry::{DrawDirection, Node};
pub use input::{InputEvent, InputHandler};
pub use palette::{ActionType, Palette};
pub use persistence::SketchSnapshot;
