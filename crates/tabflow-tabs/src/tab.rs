//! Tab and nav-button records
//!
//! Both are created once when the switcher attaches and live for the whole
//! session. Element handles are optional: a slot whose element is missing
//! keeps its index but has no visuals to drive.

use serde::{Deserialize, Serialize};
use tabflow_ui::{ElementId, UiTree};

use crate::state::TabState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Position in the container, 0-based
    pub index: usize,
    /// Panel element, if the host tree has it
    pub element: Option<ElementId>,
    pub state: TabState,
}

impl Tab {
    pub fn new(index: usize, element: Option<ElementId>) -> Self {
        Self {
            index,
            element,
            state: TabState::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn activate<U: UiTree>(&mut self, ui: &mut U, active_class: &str) {
        self.state = TabState::Active;
        if let Some(element) = self.element {
            ui.add_class(element, active_class);
        }
    }

    pub fn deactivate<U: UiTree>(&mut self, ui: &mut U, active_class: &str) {
        self.state = TabState::Inactive;
        if let Some(element) = self.element {
            ui.remove_class(element, active_class);
        }
    }
}

/// Bottom-bar button paired with the tab of the same index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavButton {
    pub index: usize,
    pub button: Option<ElementId>,
    /// First child of the button; the part that lifts
    pub icon: Option<ElementId>,
}

impl NavButton {
    pub fn new(index: usize, button: Option<ElementId>, icon: Option<ElementId>) -> Self {
        Self {
            index,
            button,
            icon,
        }
    }
}
