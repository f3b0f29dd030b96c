//! Tabflow Core
//!
//! Wires tab switching, popups and press feedback into one controller that
//! owns every piece of transition state. The host forwards clicks and frame
//! ticks; the controller writes styles back through `UiTree`.

mod binding;
mod bounce;
mod config;
mod controller;
mod error;
pub mod scene;

pub use binding::{Action, Bindings};
pub use bounce::{BounceFeedback, BounceSettings};
pub use config::{AnimationSettings, Config, MAX_DURATION_SECS};
pub use controller::TabController;
pub use error::CoreError;

// Re-export components
pub use tabflow_popups::{Popup, PopupController, PopupEntry, PopupSettings, PopupState};
pub use tabflow_tabs::{
    NavButton, SlideLayout, SwitchOutcome, Tab, TabSettings, TabState, TabSwitcher,
};
pub use tabflow_tween::{Curve, Easing, Keyframe, Motion, Tween, Tweener};
pub use tabflow_ui::{
    ElementId, ElementKind, ElementSnapshot, MemoryTree, PickingMode, StyleProperty, StyleTarget,
    UiTree, Vec2,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
