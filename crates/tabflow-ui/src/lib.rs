//! Tabflow UI interface
//!
//! The controllers drive a host UI toolkit through the `UiTree` trait only:
//! lookup by name, class toggling, translate/scale styles and pointer
//! picking. `MemoryTree` implements it without any rendering.

mod memory;
mod style;
mod tree;

pub use memory::{ElementSnapshot, MemoryTree};
pub use style::{StyleProperty, StyleTarget};
pub use tree::{ElementId, ElementKind, PickingMode, UiTree, Vec2};
