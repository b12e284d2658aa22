use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::{approx::ApproxEq, traits::Real};

/// An angle with [`f32`] precision.
pub type Anglef = Angle<f32>;
/// An angle with [`f64`] precision.
pub type Angled = Angle<f64>;

/// A plane angle, stored in radians.
///
/// The stored value is *not* normalized: adding angles can leave the full-turn range, and
/// [`Angle::wrapped`] or [`Angle::wrapped_signed`] can be used to normalize the result on demand.
///
/// # Examples
///
/// ```
/// # use linalg64::*;
/// let total = Angle::from_degrees(270.0) + Angle::from_degrees(180.0);
/// assert_approx_eq!(total.degrees(), 450.0).abs(1e-9);
/// assert_approx_eq!(total.wrapped().degrees(), 90.0).abs(1e-9);
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd, Default, Debug)]
#[repr(transparent)]
pub struct Angle<T> {
    radians: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Angle<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Angle<T> {}

impl<T: Real> Angle<T> {
    /// The zero angle.
    pub const ZERO: Self = Self { radians: T::ZERO };
    /// Half a turn (τ/2 radians, 180°).
    pub const HALF_TURN: Self = Self { radians: T::PI };
    /// A full turn (τ radians, 360°).
    pub const FULL_TURN: Self = Self { radians: T::TAU };

    /// Creates an [`Angle`] from a value in radians.
    #[inline]
    pub const fn from_radians(radians: T) -> Self {
        Self { radians }
    }

    /// Creates an [`Angle`] from a value in degrees.
    #[inline]
    pub fn from_degrees(degrees: T) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// Returns the angle in radians.
    #[inline]
    pub fn radians(self) -> T {
        self.radians
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> T {
        self.radians.to_degrees()
    }

    /// Returns this angle, wrapped into the range `[0, τ)`.
    pub fn wrapped(self) -> Self {
        let turns = (self.radians / T::TAU).floor();
        Self {
            radians: self.radians - turns * T::TAU,
        }
    }

    /// Returns this angle, wrapped into the range `(-τ/2, τ/2]`.
    pub fn wrapped_signed(self) -> Self {
        let wrapped = self.wrapped().radians;
        Self {
            radians: if wrapped > T::PI {
                wrapped - T::TAU
            } else {
                wrapped
            },
        }
    }

    /// Computes the sine of this angle.
    #[inline]
    pub fn sin(self) -> T {
        self.radians.sin()
    }

    /// Computes the cosine of this angle.
    #[inline]
    pub fn cos(self) -> T {
        self.radians.cos()
    }

    /// Computes the tangent of this angle.
    #[inline]
    pub fn tan(self) -> T {
        self.radians.tan()
    }

    /// Computes the sine and cosine of this angle at once.
    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        self.radians.sin_cos()
    }
}

impl<T: Real> Add for Angle<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            radians: self.radians + rhs.radians,
        }
    }
}

impl<T: Real> AddAssign for Angle<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.radians = self.radians + rhs.radians;
    }
}

impl<T: Real> Sub for Angle<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            radians: self.radians - rhs.radians,
        }
    }
}

impl<T: Real> SubAssign for Angle<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.radians = self.radians - rhs.radians;
    }
}

impl<T: Real> Neg for Angle<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            radians: -self.radians,
        }
    }
}

/// Scales the angle.
impl<T: Real> Mul<T> for Angle<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            radians: self.radians * rhs,
        }
    }
}

/// Scales the angle.
impl<T: Real> Div<T> for Angle<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self {
            radians: self.radians / rhs,
        }
    }
}

impl<T: ApproxEq> ApproxEq for Angle<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.radians.abs_diff_eq(&other.radians, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.radians.rel_diff_eq(&other.radians, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.radians.ulps_diff_eq(&other.radians, ulps_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{PI, TAU};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn degree_conversion() {
        assert_approx_eq!(Angle::from_degrees(180.0).radians(), PI).abs(1e-12);
        assert_approx_eq!(Angle::from_radians(PI).degrees(), 180.0).abs(1e-9);
        assert_eq!(Angled::ZERO.radians(), 0.0);
        assert_approx_eq!(Angled::FULL_TURN.degrees(), 360.0).abs(1e-9);
    }

    #[test]
    fn wrapping() {
        assert_approx_eq!(Angle::from_radians(TAU + 1.0).wrapped().radians(), 1.0).abs(1e-12);
        assert_approx_eq!(Angle::from_radians(-1.0).wrapped().radians(), TAU - 1.0).abs(1e-12);
        assert_approx_eq!(Angle::from_radians(3.0 * TAU + 0.5).wrapped().radians(), 0.5)
            .abs(1e-12);
        assert_eq!(Angle::from_radians(0.0).wrapped().radians(), 0.0);
    }

    #[test]
    fn signed_wrapping() {
        assert_approx_eq!(Angle::from_degrees(270.0).wrapped_signed().degrees(), -90.0).abs(1e-9);
        assert_approx_eq!(Angle::from_degrees(90.0).wrapped_signed().degrees(), 90.0).abs(1e-9);
        // Exactly half a turn stays positive.
        assert_eq!(Angle::from_radians(PI).wrapped_signed().radians(), PI);
        assert_approx_eq!(Angle::from_degrees(-450.0).wrapped_signed().degrees(), -90.0)
            .abs(1e-9);
    }

    #[test]
    fn arithmetic() {
        let sum = Angle::from_degrees(90.0) + Angle::from_degrees(45.0);
        assert_approx_eq!(sum.degrees(), 135.0).abs(1e-9);
        assert_approx_eq!((sum * 2.0).degrees(), 270.0).abs(1e-9);
        assert_approx_eq!((-Angle::from_degrees(30.0)).degrees(), -30.0).abs(1e-9);
        assert_approx_eq!(Angled::HALF_TURN.sin(), 0.0).abs(1e-12);
        assert_approx_eq!(Angled::HALF_TURN.cos(), -1.0);
    }
}
