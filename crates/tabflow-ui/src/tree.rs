//! The host toolkit interface
//!
//! Everything the controllers need from a UI toolkit. Lookups return
//! `Option` and writes to a missing or detached element are ignored, so
//! callers never have to fail on an absent element.

use serde::{Deserialize, Serialize};

/// Opaque handle to an element in the host tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Whether an element receives pointer hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickingMode {
    #[default]
    Position,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Element,
    Button,
}

pub trait UiTree {
    fn root(&self) -> ElementId;

    /// First element named `name` in `scope` or its descendants, depth first.
    fn query(&self, scope: ElementId, name: &str) -> Option<ElementId>;

    /// Every button in `scope` or its descendants, in document order.
    fn buttons(&self, scope: ElementId) -> Vec<ElementId>;

    fn first_child(&self, id: ElementId) -> Option<ElementId>;

    /// True while `id` is attached to the tree.
    fn contains(&self, id: ElementId) -> bool;

    fn add_class(&mut self, id: ElementId, class: &str);
    fn remove_class(&mut self, id: ElementId, class: &str);
    fn has_class(&self, id: ElementId, class: &str) -> bool;

    fn translate(&self, id: ElementId) -> Option<Vec2>;
    fn set_translate(&mut self, id: ElementId, translate: Vec2);

    fn scale(&self, id: ElementId) -> Option<f32>;
    fn set_scale(&mut self, id: ElementId, scale: f32);

    fn picking(&self, id: ElementId) -> Option<PickingMode>;
    fn set_picking(&mut self, id: ElementId, mode: PickingMode);

    /// Resolve a path of names, each looked up inside the previous match.
    fn query_path(&self, scope: ElementId, path: &[String]) -> Option<ElementId> {
        path.iter()
            .try_fold(scope, |current, name| self.query(current, name))
    }
}
