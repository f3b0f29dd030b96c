//! Popup Controller
//!
//! At most one popup is open. Opening always closes everything first, and a
//! closed popup is hidden, made non-interactive and pushed far outside the
//! visible area, since some hosts still hit-test hidden elements that sit
//! on screen.

use serde::{Deserialize, Serialize};
use tabflow_tween::{Easing, Motion, Tweener};
use tabflow_ui::{ElementId, PickingMode, StyleTarget, UiTree, Vec2};

use crate::popup::{Popup, PopupState};

/// A popup and the name of the button that opens it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupEntry {
    pub name: String,
    pub trigger: String,
}

impl PopupEntry {
    pub fn new(name: &str, trigger: &str) -> Self {
        Self {
            name: name.to_string(),
            trigger: trigger.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PopupSettings {
    pub close_button: String,
    /// Path from the root to the element holding the trigger buttons
    pub trigger_scope: Vec<String>,
    pub popups: Vec<PopupEntry>,
    /// Scale-in from 0 to 1
    pub motion: Motion,
    /// Vertical offset that parks a closed popup out of bounds
    pub offscreen_offset: f32,
    pub active_class: String,
    pub hidden_class: String,
}

impl Default for PopupSettings {
    fn default() -> Self {
        Self {
            close_button: "xButton".to_string(),
            trigger_scope: vec![
                "TabsContainer".to_string(),
                "tab3".to_string(),
                "topbar".to_string(),
            ],
            popups: vec![
                PopupEntry::new("Settings", "settings"),
                PopupEntry::new("Profile", "profile"),
                PopupEntry::new("Money", "money"),
                PopupEntry::new("Lives", "lives"),
                PopupEntry::new("Stars", "stars"),
            ],
            motion: Motion::from_secs(0.25, Easing::EaseInOut),
            offscreen_offset: -3000.0,
            active_class: "active".to_string(),
            hidden_class: "hidden".to_string(),
        }
    }
}

pub struct PopupController {
    popups: Vec<Popup>,
    close_button: Option<ElementId>,
    open: Option<usize>,
    motion: Motion,
    offscreen_offset: f32,
    active_class: String,
    hidden_class: String,
}

impl PopupController {
    /// Resolve the close button, each popup and its trigger. Nothing is
    /// changed in the tree until `close_all` or `open` runs.
    pub fn attach<U: UiTree>(ui: &U, settings: PopupSettings) -> Self {
        let root = ui.root();
        let close_button = ui.query(root, &settings.close_button);
        let scope = ui.query_path(root, &settings.trigger_scope);

        let popups = settings
            .popups
            .into_iter()
            .map(|entry| {
                let element = ui.query(root, &entry.name);
                let trigger = scope.and_then(|s| ui.query(s, &entry.trigger));
                Popup::new(entry.name, element, trigger)
            })
            .collect();

        Self {
            popups,
            close_button,
            open: None,
            motion: settings.motion,
            offscreen_offset: settings.offscreen_offset,
            active_class: settings.active_class,
            hidden_class: settings.hidden_class,
        }
    }

    /// Open the popup registered as `name`, closing any other first.
    ///
    /// Returns `false` without touching anything when the name is absent,
    /// unknown, or its element is not in the tree. Opening the popup that is
    /// already open restarts its scale-in.
    pub fn open<U: UiTree>(
        &mut self,
        ui: &mut U,
        tweens: &mut Tweener<StyleTarget>,
        name: Option<&str>,
    ) -> bool {
        let Some(name) = name else {
            return false;
        };
        let Some(index) = self.popups.iter().position(|p| p.name == name) else {
            return false;
        };
        let Some(element) = self.popups[index].element.filter(|e| ui.contains(*e)) else {
            return false;
        };

        self.close_all(ui, tweens);

        if let Some(close) = self.close_button {
            ui.remove_class(close, &self.hidden_class);
        }

        ui.remove_class(element, &self.hidden_class);
        ui.add_class(element, &self.active_class);
        ui.set_picking(element, PickingMode::Position);
        ui.set_translate(element, Vec2::ZERO);
        ui.set_scale(element, 0.0);
        tweens.start(StyleTarget::scale(element), self.motion.tween(0.0, 1.0));

        self.popups[index].state = PopupState::Open;
        self.open = Some(index);

        tracing::debug!(popup = %name, element = %element, "Opened popup");

        true
    }

    /// Close every registered popup and hide the close button. Idempotent.
    pub fn close_all<U: UiTree>(&mut self, ui: &mut U, tweens: &mut Tweener<StyleTarget>) {
        if let Some(close) = self.close_button {
            ui.add_class(close, &self.hidden_class);
        }

        for popup in &mut self.popups {
            popup.state = PopupState::Closed;

            let Some(element) = popup.element else {
                continue;
            };
            tweens.cancel(&StyleTarget::scale(element));
            ui.remove_class(element, &self.active_class);
            ui.add_class(element, &self.hidden_class);
            ui.set_picking(element, PickingMode::Ignore);
            ui.set_translate(element, Vec2::new(0.0, self.offscreen_offset));
        }

        if let Some(index) = self.open.take() {
            tracing::debug!(popup = %self.popups[index].name, "Closed all popups");
        }
    }

    pub fn open_popup(&self) -> Option<&Popup> {
        self.open.and_then(|i| self.popups.get(i))
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open_popup().is_some_and(|p| p.name == name)
    }

    pub fn popups(&self) -> &[Popup] {
        &self.popups
    }

    pub fn popup(&self, name: &str) -> Option<&Popup> {
        self.popups.iter().find(|p| p.name == name)
    }

    pub fn close_button(&self) -> Option<ElementId> {
        self.close_button
    }

    /// Name of the popup opened by the trigger button `element`.
    pub fn popup_for_trigger(&self, element: ElementId) -> Option<&str> {
        self.popups
            .iter()
            .find(|p| p.trigger == Some(element))
            .map(|p| p.name.as_str())
    }
}
