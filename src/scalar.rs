//! Free-standing scalar helpers.

use crate::{MinMax, Number, Real};

/// Linearly interpolates between `a` and `b`.
///
/// `t = 0` yields `a`, `t = 1` yields `b`. Values of `t` outside `[0, 1]` extrapolate.
///
/// # Examples
///
/// ```
/// # use linalg64::*;
/// assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
/// assert_eq!(lerp(2.0, 4.0, -1.0), 0.0);
/// ```
pub fn lerp<T: Number>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Clamps `value` into the range `[min, max]`.
///
/// # Examples
///
/// ```
/// # use linalg64::*;
/// assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-3, 0, 9), 0);
/// ```
pub fn clamp<T: MinMax>(value: T, min: T, max: T) -> T {
    MinMax::clamp(value, min, max)
}

/// Hermite-smoothed interpolation between two edges.
///
/// Returns 0 for `x <= edge0`, 1 for `x >= edge1`, and `3t² - 2t³` of the normalized position in
/// between.
///
/// # Examples
///
/// ```
/// # use linalg64::*;
/// assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
/// assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
/// assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
/// ```
pub fn smoothstep<T: Real>(edge0: T, edge1: T, x: T) -> T {
    let one = T::ONE;
    let two = one + one;
    let three = two + one;
    let t = MinMax::clamp((x - edge0) / (edge1 - edge0), T::ZERO, one);
    t * t * (three - two * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(1.0, 9.0, 0.0), 1.0);
        assert_eq!(lerp(1.0, 9.0, 1.0), 9.0);
        assert_eq!(lerp(1.0, 9.0, 0.5), 5.0);
    }

    #[test]
    fn smoothstep_monotonic() {
        let mut prev = 0.0;
        for i in 0..=10 {
            let v = smoothstep(0.0, 1.0, i as f64 / 10.0);
            assert!(v >= prev);
            prev = v;
        }
        assert_eq!(prev, 1.0);
    }
}
