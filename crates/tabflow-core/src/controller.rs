//! Tab controller
//!
//! Owns all transition state for one document: the active tab, the open
//! popup, and every running tween. The host forwards clicks and frame ticks;
//! nothing here is global.

use std::time::Duration;

use tabflow_popups::PopupController;
use tabflow_tabs::{SwitchOutcome, TabSwitcher};
use tabflow_tween::Tweener;
use tabflow_ui::{ElementId, StyleTarget, UiTree};

use crate::binding::{Action, Bindings};
use crate::bounce::BounceFeedback;
use crate::config::Config;

pub struct TabController {
    config: Config,
    tweens: Tweener<StyleTarget>,
    tabs: TabSwitcher,
    popups: PopupController,
    bounce: BounceFeedback,
    bindings: Bindings,
}

impl TabController {
    /// Attach to `ui` and establish the initial state: tabs laid out for the
    /// initial index, all popups closed, click bindings built.
    pub fn new<U: UiTree>(config: Config, ui: &mut U) -> Self {
        let tabs = TabSwitcher::attach(ui, config.tab_settings());
        let popups = PopupController::attach(&*ui, config.popup_settings());
        let bounce = BounceFeedback::attach(&*ui, config.bounce_settings());
        let bindings = Bindings::build(&tabs, &popups, &bounce);

        let mut controller = Self {
            config,
            tweens: Tweener::new(),
            tabs,
            popups,
            bounce,
            bindings,
        };
        controller.close_all_popups(ui);

        tracing::info!(
            tabs = controller.tabs.len(),
            popups = controller.popups.popups().len(),
            buttons = controller.bounce.buttons().len(),
            initial_tab = controller.tabs.current(),
            "Tab controller initialized"
        );

        controller
    }

    /// Run every action bound to `element`, in bind order. Returns how many
    /// ran; unbound elements are ignored.
    pub fn click<U: UiTree>(&mut self, ui: &mut U, element: ElementId) -> usize {
        let actions = self.bindings.actions(element).to_vec();
        for action in &actions {
            match action {
                Action::SwitchTab(index) => {
                    self.switch_tab(ui, *index);
                }
                Action::OpenPopup(name) => {
                    self.open_popup(ui, Some(name));
                }
                Action::CloseAllPopups => self.close_all_popups(ui),
                Action::Bounce => {
                    self.bounce.press(&mut self.tweens, element);
                }
            }
        }
        actions.len()
    }

    /// Advance every running tween by one frame.
    pub fn tick<U: UiTree>(&mut self, ui: &mut U, dt: Duration) {
        self.tweens.tick(dt, |target, value| target.write(ui, value));
    }

    pub fn switch_tab<U: UiTree>(&mut self, ui: &mut U, index: usize) -> SwitchOutcome {
        self.tabs.switch_to(ui, &mut self.tweens, index)
    }

    pub fn open_popup<U: UiTree>(&mut self, ui: &mut U, name: Option<&str>) -> bool {
        self.popups.open(ui, &mut self.tweens, name)
    }

    pub fn close_all_popups<U: UiTree>(&mut self, ui: &mut U) {
        self.popups.close_all(ui, &mut self.tweens);
    }

    pub fn press<U: UiTree>(&mut self, ui: &U, button: ElementId) -> bool {
        ui.contains(button) && self.bounce.press(&mut self.tweens, button)
    }

    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    pub fn current_tab(&self) -> usize {
        self.tabs.current()
    }

    pub fn open_popup_name(&self) -> Option<&str> {
        self.popups.open_popup().map(|p| p.name.as_str())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tabs(&self) -> &TabSwitcher {
        &self.tabs
    }

    pub fn popups(&self) -> &PopupController {
        &self.popups
    }

    pub fn bounce(&self) -> &BounceFeedback {
        &self.bounce
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn tweens(&self) -> &Tweener<StyleTarget> {
        &self.tweens
    }
}
