//! Quadratic ease-in-out

/// Quadratic ease-in-out: accelerates through the first half of `duration`
/// and decelerates through the second.
///
/// # Arguments
/// * `time` - Elapsed time
/// * `start` - Value at `time == 0`
/// * `change` - Total change reached at `time == duration`
/// * `duration` - Total duration, in the same unit as `time`
///
/// A zero `duration` divides by zero and yields NaN or infinity; callers
/// must not pass one.
#[inline]
pub fn ease(time: f64, start: f64, change: f64, duration: f64) -> f64 {
    let t = time / (duration / 2.0);
    if t < 1.0 {
        return start + change / 2.0 * t * t;
    }

    let t = t - 1.0;
    start + change / 2.0 * -(t * (t - 2.0) - 1.0)
}
