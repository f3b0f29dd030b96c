//! Click bindings
//!
//! Built once at startup: each clickable element maps to the ordered list of
//! actions it triggers. Indices and popup names are stored by value, so
//! every button carries its own action.

use std::collections::HashMap;

use tabflow_popups::PopupController;
use tabflow_tabs::TabSwitcher;
use tabflow_ui::ElementId;

use crate::bounce::BounceFeedback;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SwitchTab(usize),
    OpenPopup(String),
    CloseAllPopups,
    Bounce,
}

#[derive(Debug, Clone, Default)]
pub struct Bindings {
    table: HashMap<ElementId, Vec<Action>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind in startup order: nav buttons, close button, popup triggers,
    /// then the press bounce on every button.
    pub fn build(tabs: &TabSwitcher, popups: &PopupController, bounce: &BounceFeedback) -> Self {
        let mut bindings = Self::new();

        for nav in tabs.nav_buttons() {
            if let Some(button) = nav.button {
                bindings.bind(button, Action::SwitchTab(nav.index));
            }
        }

        if let Some(close) = popups.close_button() {
            bindings.bind(close, Action::CloseAllPopups);
        }

        for popup in popups.popups() {
            if let Some(trigger) = popup.trigger {
                bindings.bind(trigger, Action::OpenPopup(popup.name.clone()));
            }
        }

        for button in bounce.buttons() {
            bindings.bind(*button, Action::Bounce);
        }

        bindings
    }

    pub fn bind(&mut self, element: ElementId, action: Action) {
        self.table.entry(element).or_default().push(action);
    }

    pub fn actions(&self, element: ElementId) -> &[Action] {
        self.table.get(&element).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of bound elements
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabflow_ui::MemoryTree;

    #[test]
    fn test_actions_keep_bind_order() {
        let mut bindings = Bindings::new();
        let button = ElementId(3);
        bindings.bind(button, Action::SwitchTab(1));
        bindings.bind(button, Action::Bounce);

        assert_eq!(
            bindings.actions(button),
            &[Action::SwitchTab(1), Action::Bounce]
        );
        assert!(bindings.actions(ElementId(99)).is_empty());
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn test_build_from_scene() {
        let config = crate::Config::default();
        let mut tree: MemoryTree = crate::scene::build_scene(&config);

        let tabs = TabSwitcher::attach(&mut tree, config.tab_settings());
        let popups = PopupController::attach(&tree, config.popup_settings());
        let bounce = BounceFeedback::attach(&tree, config.bounce_settings());
        let bindings = Bindings::build(&tabs, &popups, &bounce);

        for (i, nav) in tabs.nav_buttons().iter().enumerate() {
            assert_eq!(
                bindings.actions(nav.button.unwrap()),
                &[Action::SwitchTab(i), Action::Bounce]
            );
        }

        let close = popups.close_button().unwrap();
        assert_eq!(
            bindings.actions(close),
            &[Action::CloseAllPopups, Action::Bounce]
        );

        for popup in popups.popups() {
            assert_eq!(
                bindings.actions(popup.trigger.unwrap()),
                &[Action::OpenPopup(popup.name.clone()), Action::Bounce]
            );
        }

        // 5 nav buttons, 5 triggers, close button
        assert_eq!(bindings.len(), 11);
    }
}
