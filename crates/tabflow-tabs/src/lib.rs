//! Tabflow Tab Switching
//!
//! A fixed row of content panels with a bottom navigation bar. Exactly one
//! tab is active; switching slides the container and lifts the matching
//! nav icon.

mod state;
mod switcher;
mod tab;

pub use state::TabState;
pub use switcher::{SlideLayout, SwitchOutcome, TabSettings, TabSwitcher};
pub use tab::{NavButton, Tab};
