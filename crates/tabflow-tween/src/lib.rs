//! Tabflow Tween Engine
//!
//! Time-driven interpolation for UI transitions:
//! - `Tween`: start value, end value, duration, easing, elapsed time
//! - `Tweener`: one tween per target, advanced on a shared frame tick
//! - `Easing` / `Curve`: preset and keyframe easing curves
//! - `Motion`: the duration and easing of one kind of transition
//!
//! A tween always finishes on exactly its end value, however large the last
//! tick was.

mod curve;
mod easing;
mod motion;
mod tween;
mod tweener;

pub use curve::{Curve, Keyframe};
pub use easing::Easing;
pub use motion::Motion;
pub use tween::{lerp, Shape, Step, Tween};
pub use tweener::Tweener;
