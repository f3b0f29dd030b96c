//! Easing curves
//!
//! Maps linear progress in [0, 1] to eased progress. Presets cover the common
//! shapes; `Curve` carries an author-time keyframe curve.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Cubic, accelerating
    EaseIn,
    /// Cubic, decelerating
    EaseOut,
    /// Flat-tangent Hermite S-curve (smoothstep)
    #[default]
    EaseInOut,
    Curve(Curve),
}

impl Easing {
    /// Evaluate the curve. The input is clamped to [0, 1] first.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
            Easing::Curve(curve) => curve.evaluate(t),
        }
    }
}
