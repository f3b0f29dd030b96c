//! Animatable style channels
//!
//! A `StyleTarget` names one scalar on one element. It is the key tweens are
//! scheduled under, so two tweens can never race on the same property.

use serde::{Deserialize, Serialize};

use crate::tree::{ElementId, UiTree, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    TranslateX,
    TranslateY,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleTarget {
    pub element: ElementId,
    pub property: StyleProperty,
}

impl StyleTarget {
    pub fn new(element: ElementId, property: StyleProperty) -> Self {
        Self { element, property }
    }

    pub fn translate_x(element: ElementId) -> Self {
        Self::new(element, StyleProperty::TranslateX)
    }

    pub fn translate_y(element: ElementId) -> Self {
        Self::new(element, StyleProperty::TranslateY)
    }

    pub fn scale(element: ElementId) -> Self {
        Self::new(element, StyleProperty::Scale)
    }

    /// Current value, or `None` once the element has left the tree.
    pub fn read<T: UiTree + ?Sized>(&self, ui: &T) -> Option<f32> {
        match self.property {
            StyleProperty::TranslateX => ui.translate(self.element).map(|t| t.x),
            StyleProperty::TranslateY => ui.translate(self.element).map(|t| t.y),
            StyleProperty::Scale => ui.scale(self.element),
        }
    }

    /// Write `value`, leaving the other translate axis alone.
    pub fn write<T: UiTree + ?Sized>(&self, ui: &mut T, value: f32) {
        match self.property {
            StyleProperty::TranslateX => {
                if let Some(current) = ui.translate(self.element) {
                    ui.set_translate(self.element, Vec2::new(value, current.y));
                }
            }
            StyleProperty::TranslateY => {
                if let Some(current) = ui.translate(self.element) {
                    ui.set_translate(self.element, Vec2::new(current.x, value));
                }
            }
            StyleProperty::Scale => ui.set_scale(self.element, value),
        }
    }
}
