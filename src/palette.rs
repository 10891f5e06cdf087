use serde::{Deserialize, Serialize};

/// The feature the user is currently adding to the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    #[default]
    Clear,
    Main,
    Side,
    Bond,
}

impl ActionType {
    pub const ALL: [ActionType; 4] = [Self::Main, Self::Side, Self::Bond, Self::Clear];

    /// Button label in the palette panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Main => "Main chain",
            Self::Side => "Side chain",
            Self::Bond => "Bond",
        }
    }
}

/// Holds which palette button is selected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Palette {
    selected: ActionType,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> ActionType {
        self.selected
    }

    pub fn set_selected(&mut self, action: ActionType) {
        self.selected = action;
    }
}
