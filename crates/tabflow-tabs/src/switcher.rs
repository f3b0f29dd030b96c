//! Tab Switcher
//!
//! Tracks the single active tab and drives the two transitions of a switch:
//! the content container slides horizontally and the nav-bar icons lift or
//! settle. Both start from wherever the element currently is, so switching
//! again mid-slide continues smoothly instead of snapping.

use tabflow_tween::{Easing, Motion, Tweener};
use tabflow_ui::{ElementId, StyleTarget, UiTree, Vec2};

use crate::tab::{NavButton, Tab};

/// Linear mapping from tab index to container offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideLayout {
    pub base_offset: f32,
    /// Distance between adjacent tabs
    pub step: f32,
}

impl SlideLayout {
    pub fn offset(&self, index: usize) -> f32 {
        self.base_offset - self.step * index as f32
    }
}

impl Default for SlideLayout {
    fn default() -> Self {
        Self {
            base_offset: 200.0,
            step: 100.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabSettings {
    /// Element holding the tab panels
    pub container: String,
    /// Element holding the nav buttons
    pub nav_bar: String,
    pub tabs: Vec<String>,
    pub nav_buttons: Vec<String>,
    /// Clamped into range on attach
    pub initial_tab: usize,
    pub layout: SlideLayout,
    pub slide: Motion,
    pub icon: Motion,
    pub icon_raised: f32,
    pub icon_rest: f32,
    pub active_class: String,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            container: "TabsContainer".to_string(),
            nav_bar: "TabSwitcher".to_string(),
            tabs: (1..=5).map(|i| format!("tab{}", i)).collect(),
            nav_buttons: (1..=5).map(|i| format!("btn{}", i)).collect(),
            initial_tab: 2,
            layout: SlideLayout::default(),
            slide: Motion::from_secs(0.3, Easing::EaseInOut),
            icon: Motion::from_secs(0.3, Easing::EaseInOut),
            icon_raised: -80.0,
            icon_rest: 0.0,
            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Switched { from: usize, to: usize },
    /// Requested tab is already the current one
    AlreadyActive,
    OutOfRange,
}

impl SwitchOutcome {
    pub fn is_switched(&self) -> bool {
        matches!(self, SwitchOutcome::Switched { .. })
    }
}

pub struct TabSwitcher {
    tabs: Vec<Tab>,
    nav: Vec<NavButton>,
    container: Option<ElementId>,
    current: usize,
    layout: SlideLayout,
    slide: Motion,
    icon: Motion,
    icon_raised: f32,
    icon_rest: f32,
    active_class: String,
}

impl TabSwitcher {
    /// Discover tabs and nav buttons and lay them out for the initial tab
    /// without animating.
    pub fn attach<U: UiTree>(ui: &mut U, settings: TabSettings) -> Self {
        let root = ui.root();
        let container = ui.query(root, &settings.container);

        let tabs = settings
            .tabs
            .iter()
            .enumerate()
            .map(|(index, name)| Tab::new(index, container.and_then(|c| ui.query(c, name))))
            .collect::<Vec<_>>();

        let nav_bar = ui.query(root, &settings.nav_bar);
        let nav = settings
            .nav_buttons
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let button = nav_bar.and_then(|bar| ui.query(bar, name));
                let icon = button.and_then(|b| ui.first_child(b));
                NavButton::new(index, button, icon)
            })
            .collect();

        let current = settings.initial_tab.min(tabs.len().saturating_sub(1));

        let mut switcher = Self {
            tabs,
            nav,
            container,
            current,
            layout: settings.layout,
            slide: settings.slide,
            icon: settings.icon,
            icon_raised: settings.icon_raised,
            icon_rest: settings.icon_rest,
            active_class: settings.active_class,
        };
        switcher.place_instant(ui);
        switcher
    }

    /// Switch to `index`, animating from the current on-screen positions.
    pub fn switch_to<U: UiTree>(
        &mut self,
        ui: &mut U,
        tweens: &mut Tweener<StyleTarget>,
        index: usize,
    ) -> SwitchOutcome {
        if index == self.current {
            return SwitchOutcome::AlreadyActive;
        }
        if index >= self.tabs.len() {
            return SwitchOutcome::OutOfRange;
        }

        for tab in &mut self.tabs {
            tab.deactivate(ui, &self.active_class);
        }
        self.tabs[index].activate(ui, &self.active_class);

        self.slide_container(&*ui, tweens, index);
        self.lift_icons(&*ui, tweens, index);

        let from = self.current;
        self.current = index;

        tracing::debug!(
            from = from,
            to = index,
            offset = self.layout.offset(index),
            "Tab switch"
        );

        SwitchOutcome::Switched { from, to: index }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn nav_buttons(&self) -> &[NavButton] {
        &self.nav
    }

    pub fn nav_button(&self, index: usize) -> Option<&NavButton> {
        self.nav.get(index)
    }

    /// Index of the nav button backed by `element`.
    pub fn button_index(&self, element: ElementId) -> Option<usize> {
        self.nav
            .iter()
            .find(|n| n.button == Some(element))
            .map(|n| n.index)
    }

    pub fn container(&self) -> Option<ElementId> {
        self.container
    }

    pub fn container_offset(&self, index: usize) -> f32 {
        self.layout.offset(index)
    }

    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    fn icon_offset(&self, nav_index: usize, active: usize) -> f32 {
        if nav_index == active {
            self.icon_raised
        } else {
            self.icon_rest
        }
    }

    fn place_instant<U: UiTree>(&mut self, ui: &mut U) {
        if let Some(container) = self.container {
            ui.set_translate(container, Vec2::new(self.layout.offset(self.current), 0.0));
        }

        let current = self.current;
        for tab in &mut self.tabs {
            if tab.index == current {
                tab.activate(ui, &self.active_class);
            } else {
                tab.deactivate(ui, &self.active_class);
            }
        }

        for nav in &self.nav {
            if let Some(icon) = nav.icon {
                StyleTarget::translate_y(icon).write(ui, self.icon_offset(nav.index, current));
            }
        }
    }

    fn slide_container<U: UiTree>(
        &self,
        ui: &U,
        tweens: &mut Tweener<StyleTarget>,
        index: usize,
    ) {
        let Some(container) = self.container else {
            return;
        };
        let target = StyleTarget::translate_x(container);
        if let Some(from) = target.read(ui) {
            tweens.start(target, self.slide.tween(from, self.layout.offset(index)));
        }
    }

    fn lift_icons<U: UiTree>(&self, ui: &U, tweens: &mut Tweener<StyleTarget>, index: usize) {
        for nav in &self.nav {
            let Some(icon) = nav.icon else {
                continue;
            };
            let target = StyleTarget::translate_y(icon);
            if let Some(from) = target.read(ui) {
                let to = self.icon_offset(nav.index, index);
                tweens.start(target, self.icon.tween(from, to));
            }
        }
    }
}
