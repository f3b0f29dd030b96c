//! Button press feedback
//!
//! Every button found at startup pulses its scale when clicked. The pulse is
//! a single tween whose envelope is `sin(eased * PI)`, so it rises to the
//! peak and returns to rest without chaining two animations.

use tabflow_tween::{Easing, Motion, Tweener};
use tabflow_ui::{ElementId, StyleTarget, UiTree};

const REST_SCALE: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct BounceSettings {
    pub motion: Motion,
    pub peak_scale: f32,
}

impl Default for BounceSettings {
    fn default() -> Self {
        Self {
            motion: Motion::from_secs(0.25, Easing::EaseInOut),
            peak_scale: 1.2,
        }
    }
}

pub struct BounceFeedback {
    buttons: Vec<ElementId>,
    motion: Motion,
    peak_scale: f32,
}

impl BounceFeedback {
    pub fn attach<U: UiTree>(ui: &U, settings: BounceSettings) -> Self {
        Self {
            buttons: ui.buttons(ui.root()),
            motion: settings.motion,
            peak_scale: settings.peak_scale,
        }
    }

    /// Start a pulse on `button`, replacing one already running there.
    pub fn press(&self, tweens: &mut Tweener<StyleTarget>, button: ElementId) -> bool {
        if !self.is_registered(button) {
            return false;
        }

        tweens.start(
            StyleTarget::scale(button),
            self.motion.pulse(REST_SCALE, self.peak_scale),
        );
        tracing::trace!(button = %button, "Button bounce");
        true
    }

    pub fn is_registered(&self, button: ElementId) -> bool {
        self.buttons.contains(&button)
    }

    pub fn buttons(&self) -> &[ElementId] {
        &self.buttons
    }
}
