use egui::{Context, Key, PointerButton, Pos2, Rect};

/// Domain-level input events the canvas consumes.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Pointer moved to a new position.
    PointerMove { pos: Pos2, in_canvas: bool },
    /// Mouse button was pressed.
    PointerDown {
        pos: Pos2,
        button: PointerButton,
        in_canvas: bool,
    },
    /// Key was pressed.
    KeyDown { key: Key },
}

/// Converts raw egui input into our domain-specific [`InputEvent`]s,
/// tagging pointer events with whether they fall inside the canvas.
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Process raw egui input and generate events for this frame.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            // Track pointer position
            if let Some(pos) = input.pointer.hover_pos() {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        pos,
                        in_canvas: self.canvas_rect.contains(pos),
                    });
                }
                self.last_pointer_pos = Some(pos);
            } else {
                self.last_pointer_pos = None;
            }

            // Button presses
            for button in [PointerButton::Primary, PointerButton::Secondary] {
                if input.pointer.button_pressed(button) {
                    if let Some(pos) = input.pointer.interact_pos() {
                        events.push(InputEvent::PointerDown {
                            pos,
                            button,
                            in_canvas: self.canvas_rect.contains(pos),
                        });
                    }
                }
            }

            // Key presses
            for event in &input.raw.events {
                if let egui::Event::Key {
                    key, pressed: true, ..
                } = event
                {
                    events.push(InputEvent::KeyDown { key: *key });
                }
            }
        });

        events
    }
}
