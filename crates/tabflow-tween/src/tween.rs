//! A single time-bounded interpolation

use std::time::Duration;

use crate::easing::Easing;

/// How eased progress turns into a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// `lerp(from, to, eased)`, settling on `to`
    Lerp,
    /// `lerp(from, to, sin(eased * PI))`, rising to `to` and settling back on `from`
    Pulse,
}

/// Result of advancing a tween by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Running(f32),
    Finished(f32),
}

impl Step {
    pub fn value(self) -> f32 {
        match self {
            Step::Running(v) | Step::Finished(v) => v,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Step::Finished(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    shape: Shape,
    elapsed: Duration,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            shape: Shape::Lerp,
            elapsed: Duration::ZERO,
        }
    }

    /// Up-and-back pulse from `rest` to `peak` driven by one monotonic tween.
    pub fn pulse(rest: f32, peak: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            shape: Shape::Pulse,
            ..Self::new(rest, peak, duration, easing)
        }
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Linear progress clamped to [0, 1]. Zero-length tweens are always complete.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// The value the target holds once the tween completes.
    pub fn end_value(&self) -> f32 {
        match self.shape {
            Shape::Lerp => self.to,
            Shape::Pulse => self.from,
        }
    }

    /// Current value. Exactly `end_value()` once complete.
    pub fn value(&self) -> f32 {
        if self.is_complete() {
            return self.end_value();
        }

        let eased = self.easing.evaluate(self.progress());
        match self.shape {
            Shape::Lerp => lerp(self.from, self.to, eased),
            Shape::Pulse => lerp(self.from, self.to, (eased * std::f32::consts::PI).sin()),
        }
    }

    pub fn advance(&mut self, dt: Duration) -> Step {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.is_complete() {
            Step::Finished(self.end_value())
        } else {
            Step::Running(self.value())
        }
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_linear_midpoint() {
        let mut tween = Tween::new(0.0, 100.0, ms(200), Easing::Linear);
        let step = tween.advance(ms(100));
        assert_eq!(step, Step::Running(50.0));
        assert_eq!(tween.progress(), 0.5);
    }

    #[test]
    fn test_overshooting_tick_snaps_to_end() {
        let mut tween = Tween::new(0.0, -200.0, ms(300), Easing::EaseInOut);
        tween.advance(ms(290));
        let step = tween.advance(ms(16));
        assert_eq!(step, Step::Finished(-200.0));
        assert_eq!(tween.value(), -200.0);
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn test_exact_duration_finishes() {
        let mut tween = Tween::new(3.0, 7.0, ms(100), Easing::EaseOut);
        assert!(tween.advance(ms(100)).is_finished());
    }

    #[test]
    fn test_zero_duration_finishes_on_first_tick() {
        let mut tween = Tween::new(0.0, 1.0, Duration::ZERO, Easing::Linear);
        assert!(tween.is_complete());
        assert_eq!(tween.advance(Duration::ZERO), Step::Finished(1.0));
    }

    #[test]
    fn test_zero_tick_keeps_start_value() {
        let mut tween = Tween::new(5.0, 10.0, ms(100), Easing::EaseInOut);
        assert_eq!(tween.advance(Duration::ZERO), Step::Running(5.0));
    }

    #[test]
    fn test_pulse_peaks_midway_and_returns() {
        let mut tween = Tween::pulse(1.0, 1.2, ms(250), Easing::Linear);
        assert_eq!(tween.end_value(), 1.0);

        let mid = tween.advance(ms(125)).value();
        assert!((mid - 1.2).abs() < 1e-5);

        let late = tween.advance(ms(100)).value();
        assert!(late > 1.0 && late < 1.2);

        assert_eq!(tween.advance(ms(100)), Step::Finished(1.0));
    }
}
