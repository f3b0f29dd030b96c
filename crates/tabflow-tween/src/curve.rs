//! Keyframe curves
//!
//! A curve is a list of keyframes joined by cubic Hermite segments. Tangents
//! are slopes in value-per-time, so a key with zero tangents flattens the
//! curve as it passes through that key.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    #[serde(default)]
    pub in_tangent: f32,
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    pub fn with_tangents(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

/// Keys are kept sorted by time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct Curve {
    keys: Vec<Keyframe>,
}

impl Curve {
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.retain(|k| k.time.is_finite() && k.value.is_finite());
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// Straight line from `(t0, v0)` to `(t1, v1)`.
    pub fn linear(t0: f32, v0: f32, t1: f32, v1: f32) -> Self {
        let span = t1 - t0;
        let slope = if span != 0.0 { (v1 - v0) / span } else { 0.0 };
        Self::new(vec![
            Keyframe::with_tangents(t0, v0, 0.0, slope),
            Keyframe::with_tangents(t1, v1, slope, 0.0),
        ])
    }

    /// S-curve from `(t0, v0)` to `(t1, v1)` with flat tangents at both ends.
    pub fn ease_in_out(t0: f32, v0: f32, t1: f32, v1: f32) -> Self {
        Self::new(vec![Keyframe::new(t0, v0), Keyframe::new(t1, v1)])
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Evaluate the curve at `t`. Outside the key range the nearest end key
    /// is held. An empty curve is the identity.
    pub fn evaluate(&self, t: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return t,
        };

        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // First key strictly after t; the range checks above guarantee 1..len.
        let upper = self.keys.partition_point(|k| k.time <= t);
        let k0 = &self.keys[upper - 1];
        let k1 = &self.keys[upper];
        hermite(k0, k1, t)
    }
}

impl From<Vec<Keyframe>> for Curve {
    fn from(keys: Vec<Keyframe>) -> Self {
        Self::new(keys)
    }
}

impl From<Curve> for Vec<Keyframe> {
    fn from(curve: Curve) -> Self {
        curve.keys
    }
}

fn hermite(k0: &Keyframe, k1: &Keyframe, t: f32) -> f32 {
    let span = k1.time - k0.time;
    if span <= 0.0 {
        return k1.value;
    }

    let s = (t - k0.time) / span;
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * k0.value + h10 * k0.out_tangent * span + h01 * k1.value + h11 * k1.in_tangent * span
}
