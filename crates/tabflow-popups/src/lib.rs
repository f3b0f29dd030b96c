//! Tabflow Popups
//!
//! A fixed registry of named overlays opened from trigger buttons, with one
//! shared close button. At most one popup is open at a time.

mod controller;
mod popup;

pub use controller::{PopupController, PopupEntry, PopupSettings};
pub use popup::{Popup, PopupState};
