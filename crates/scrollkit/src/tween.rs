//! Time-driven smooth scrolling
//!
//! A [`ScrollTween`] samples [`ease`] over a fixed duration. The caller owns
//! the clock and passes elapsed milliseconds on every frame.

use crate::easing::ease;
use crate::keys::ScrollKey;

/// A scroll from `from` by `change` over `duration_ms`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    pub from: f64,
    pub change: f64,
    pub duration_ms: f64,
}

impl ScrollTween {
    pub fn new(from: f64, change: f64, duration_ms: f64) -> Self {
        Self {
            from,
            change,
            duration_ms,
        }
    }

    /// Tween from `from` to the absolute position `to`
    pub fn to_target(from: f64, to: f64, duration_ms: f64) -> Self {
        Self::new(from, to - from, duration_ms)
    }

    /// Tween by the delta `key` produces; End and Home use `full_height`
    pub fn for_key(key: ScrollKey, from: f64, full_height: f64, duration_ms: f64) -> Self {
        Self::new(from, key.delta(full_height), duration_ms)
    }

    pub fn target(&self) -> f64 {
        self.from + self.change
    }

    /// Complete once `elapsed_ms` reaches the duration; a non-positive
    /// duration is complete immediately
    #[inline]
    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms
    }

    /// Position after `elapsed_ms`, exactly the target once done
    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        if self.is_done(elapsed_ms) {
            return self.target();
        }
        ease(elapsed_ms.max(0.0), self.from, self.change, self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_endpoints() {
        let tween = ScrollTween::new(100.0, 700.0, 300.0);
        assert_eq!(tween.sample(0.0), 100.0);
        assert_eq!(tween.sample(300.0), 800.0);
        assert_eq!(tween.sample(10_000.0), 800.0);
        assert!(!tween.is_done(299.0));
        assert!(tween.is_done(300.0));
    }

    #[test]
    fn test_negative_elapsed_clamps_to_start() {
        let tween = ScrollTween::new(40.0, 60.0, 100.0);
        assert_eq!(tween.sample(-5.0), 40.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let tween = ScrollTween::to_target(10.0, 250.0, 0.0);
        assert!(tween.is_done(0.0));
        assert_eq!(tween.sample(0.0), 250.0);
    }

    #[test]
    fn test_for_key() {
        let up = ScrollTween::for_key(ScrollKey::ArrowUp, 500.0, 2000.0, 100.0);
        assert_eq!(up.target(), 450.0);

        let home = ScrollTween::for_key(ScrollKey::Home, 1200.0, 1200.0, 100.0);
        assert_eq!(home.target(), 0.0);
    }

    #[test]
    fn test_midpoint() {
        let tween = ScrollTween::to_target(0.0, 100.0, 200.0);
        assert!((tween.sample(100.0) - 50.0).abs() < 1e-9);
    }
}
