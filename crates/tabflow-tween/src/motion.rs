//! Duration + easing pair shared by every animated transition

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::easing::Easing;
use crate::tween::Tween;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Motion {
    pub duration: Duration,
    pub easing: Easing,
}

impl Motion {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Negative, non-finite or unrepresentable lengths collapse to an
    /// instant transition.
    pub fn from_secs(secs: f32, easing: Easing) -> Self {
        let duration = Duration::try_from_secs_f32(secs).unwrap_or(Duration::ZERO);
        Self::new(duration, easing)
    }

    pub fn tween(&self, from: f32, to: f32) -> Tween {
        Tween::new(from, to, self.duration, self.easing.clone())
    }

    pub fn pulse(&self, rest: f32, peak: f32) -> Tween {
        Tween::pulse(rest, peak, self.duration, self.easing.clone())
    }
}
