//! Popup record

use serde::{Deserialize, Serialize};
use tabflow_ui::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupState {
    Open,
    #[default]
    Closed,
}

impl PopupState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PopupState::Open => "open",
            PopupState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for PopupState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    /// Registry name, also the element name in the host tree
    pub name: String,
    pub element: Option<ElementId>,
    /// Button that opens this popup
    pub trigger: Option<ElementId>,
    pub state: PopupState,
}

impl Popup {
    pub fn new(name: String, element: Option<ElementId>, trigger: Option<ElementId>) -> Self {
        Self {
            name,
            element,
            trigger,
            state: PopupState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == PopupState::Open
    }
}
