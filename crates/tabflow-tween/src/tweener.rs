//! Tween scheduler
//!
//! Holds at most one tween per target and advances them all on a shared
//! frame tick, in the order they were started.

use std::time::Duration;

use crate::tween::{Step, Tween};

pub struct Tweener<K> {
    active: Vec<(K, Tween)>,
}

impl<K: PartialEq> Tweener<K> {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Start a tween on `target`, cancelling the one already running there.
    pub fn start(&mut self, target: K, tween: Tween) -> Option<Tween> {
        let cancelled = self.cancel(&target);
        self.active.push((target, tween));
        cancelled
    }

    /// Stop the tween on `target` without touching the target's value.
    pub fn cancel(&mut self, target: &K) -> Option<Tween> {
        let pos = self.active.iter().position(|(k, _)| k == target)?;
        Some(self.active.remove(pos).1)
    }

    pub fn get(&self, target: &K) -> Option<&Tween> {
        self.active
            .iter()
            .find(|(k, _)| k == target)
            .map(|(_, tween)| tween)
    }

    pub fn is_animating(&self, target: &K) -> bool {
        self.get(target).is_some()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn targets(&self) -> impl Iterator<Item = &K> {
        self.active.iter().map(|(k, _)| k)
    }

    /// Advance every tween by `dt` and hand each new value to `apply`.
    ///
    /// Finished tweens get their exact end value and are dropped.
    pub fn tick<F>(&mut self, dt: Duration, mut apply: F)
    where
        F: FnMut(&K, f32),
    {
        self.active.retain_mut(|(target, tween)| {
            let step = tween.advance(dt);
            apply(target, step.value());
            !matches!(step, Step::Finished(_))
        });
    }
}

impl<K: PartialEq> Default for Tweener<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn linear(from: f32, to: f32, millis: u64) -> Tween {
        Tween::new(from, to, ms(millis), Easing::Linear)
    }

    #[test]
    fn test_one_tween_per_target() {
        let mut tweens = Tweener::new();
        assert!(tweens.start("a", linear(0.0, 1.0, 100)).is_none());

        let replaced = tweens.start("a", linear(5.0, 6.0, 100)).unwrap();
        assert_eq!(replaced.from(), 0.0);
        assert_eq!(tweens.len(), 1);
        assert_eq!(tweens.get(&"a").unwrap().from(), 5.0);
    }

    #[test]
    fn test_tick_applies_in_start_order() {
        let mut tweens = Tweener::new();
        tweens.start("b", linear(0.0, 1.0, 100));
        tweens.start("a", linear(0.0, 1.0, 100));
        tweens.start("c", linear(0.0, 1.0, 100));

        let mut seen = Vec::new();
        tweens.tick(ms(10), |k, _| seen.push(*k));
        assert_eq!(seen, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_restart_moves_target_to_back() {
        let mut tweens = Tweener::new();
        tweens.start("a", linear(0.0, 1.0, 100));
        tweens.start("b", linear(0.0, 1.0, 100));
        tweens.start("a", linear(0.0, 1.0, 100));

        assert_eq!(tweens.targets().copied().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_finished_tweens_apply_end_and_drop() {
        let mut tweens = Tweener::new();
        tweens.start("short", linear(0.0, 10.0, 50));
        tweens.start("long", linear(0.0, 10.0, 500));

        let mut last = Vec::new();
        tweens.tick(ms(60), |k, v| last.push((*k, v)));
        assert_eq!(last[0], ("short", 10.0));
        assert!(!tweens.is_animating(&"short"));
        assert!(tweens.is_animating(&"long"));

        let mut writes = 0;
        for _ in 0..100 {
            tweens.tick(ms(16), |_, _| writes += 1);
        }
        assert!(tweens.is_empty());
        // 440ms remaining at 16ms per tick
        assert_eq!(writes, 28);
    }

    #[test]
    fn test_cancel_stops_writes() {
        let mut tweens = Tweener::new();
        tweens.start("a", linear(0.0, 1.0, 100));
        assert!(tweens.cancel(&"a").is_some());
        assert!(tweens.cancel(&"a").is_none());

        let mut writes = 0;
        tweens.tick(ms(16), |_, _| writes += 1);
        assert_eq!(writes, 0);
    }

    #[test]
    fn test_sampled_after_duration_is_exact() {
        let mut tweens = Tweener::new();
        tweens.start("x", Tween::new(0.3, 0.7, ms(300), Easing::EaseInOut));

        let mut value = 0.0;
        for _ in 0..7 {
            tweens.tick(Duration::from_secs_f32(1.0 / 60.0), |_, v| value = v);
        }
        for _ in 0..20 {
            tweens.tick(Duration::from_secs_f32(1.0 / 60.0), |_, v| value = v);
        }
        assert_eq!(value, 0.7);
        assert!(tweens.is_empty());
    }
}
