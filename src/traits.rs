use std::ops;

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    /// Computes the sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Sized;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}
macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, i8, i16, i32, i64);
impl MinMax for f32 {
    fn min(self, other: Self) -> Self {
        self.min(other)
    }

    fn max(self, other: Self) -> Self {
        self.max(other)
    }
}
impl MinMax for f64 {
    fn min(self, other: Self) -> Self {
        self.min(other)
    }

    fn max(self, other: Self) -> Self {
        self.max(other)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point scalars.
///
/// This is the bound used by every operation that only makes sense over the reals: normalization,
/// interpolation, decomposition, and angle handling. Plain element-wise arithmetic stays on
/// [`Number`], which integers satisfy too.
pub trait Real: Number + Trig + Sqrt + MinMax + PartialOrd {
    /// Magnitudes at or below this value are treated as zero by the degenerate-input guards in
    /// this crate (zero-length normalization, decomposition, pivot selection).
    const ZERO_TOLERANCE: Self;
    const PI: Self;
    const TAU: Self;
    const HALF: Self;

    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn to_degrees(self) -> Self;
    fn to_radians(self) -> Self;

    /// Whether `self` is within [`ZERO_TOLERANCE`][Self::ZERO_TOLERANCE] of zero.
    fn nearly_zero(self) -> bool {
        self.abs() <= Self::ZERO_TOLERANCE
    }

    /// Whether `self` and `other` differ by at most [`ZERO_TOLERANCE`][Self::ZERO_TOLERANCE].
    fn nearly_equal(self, other: Self) -> bool {
        (self - other).abs() <= Self::ZERO_TOLERANCE
    }
}

impl Zero for f32 {
    const ZERO: Self = 0.0;
}
impl Zero for f64 {
    const ZERO: Self = 0.0;
}
impl Zero for u8 {
    const ZERO: Self = 0;
}
impl Zero for u16 {
    const ZERO: Self = 0;
}
impl Zero for u32 {
    const ZERO: Self = 0;
}
impl Zero for u64 {
    const ZERO: Self = 0;
}
impl Zero for i8 {
    const ZERO: Self = 0;
}
impl Zero for i16 {
    const ZERO: Self = 0;
}
impl Zero for i32 {
    const ZERO: Self = 0;
}
impl Zero for i64 {
    const ZERO: Self = 0;
}

impl One for f32 {
    const ONE: Self = 1.0;
}
impl One for f64 {
    const ONE: Self = 1.0;
}
impl One for u8 {
    const ONE: Self = 1;
}
impl One for u16 {
    const ONE: Self = 1;
}
impl One for u32 {
    const ONE: Self = 1;
}
impl One for u64 {
    const ONE: Self = 1;
}
impl One for i8 {
    const ONE: Self = 1;
}
impl One for i16 {
    const ONE: Self = 1;
}
impl One for i32 {
    const ONE: Self = 1;
}
impl One for i64 {
    const ONE: Self = 1;
}

impl Trig for f32 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn tan(self) -> Self {
        self.tan()
    }

    fn asin(self) -> Self {
        self.asin()
    }

    fn acos(self) -> Self {
        self.acos()
    }

    fn atan(self) -> Self {
        self.atan()
    }

    fn atan2(self, other: Self) -> Self {
        self.atan2(other)
    }

    fn sin_cos(self) -> (Self, Self) {
        self.sin_cos()
    }
}

impl Trig for f64 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn tan(self) -> Self {
        self.tan()
    }

    fn asin(self) -> Self {
        self.asin()
    }

    fn acos(self) -> Self {
        self.acos()
    }

    fn atan(self) -> Self {
        self.atan()
    }

    fn atan2(self, other: Self) -> Self {
        self.atan2(other)
    }

    fn sin_cos(self) -> (Self, Self) {
        self.sin_cos()
    }
}

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

impl Real for f32 {
    const ZERO_TOLERANCE: Self = 1e-6;
    const PI: Self = std::f32::consts::PI;
    const TAU: Self = std::f32::consts::TAU;
    const HALF: Self = 0.5;

    fn abs(self) -> Self {
        self.abs()
    }

    fn floor(self) -> Self {
        self.floor()
    }

    fn to_degrees(self) -> Self {
        self.to_degrees()
    }

    fn to_radians(self) -> Self {
        self.to_radians()
    }
}

impl Real for f64 {
    const ZERO_TOLERANCE: Self = 1e-9;
    const PI: Self = std::f64::consts::PI;
    const TAU: Self = std::f64::consts::TAU;
    const HALF: Self = 0.5;

    fn abs(self) -> Self {
        self.abs()
    }

    fn floor(self) -> Self {
        self.floor()
    }

    fn to_degrees(self) -> Self {
        self.to_degrees()
    }

    fn to_radians(self) -> Self {
        self.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_zero() {
        assert!(0.0f64.nearly_zero());
        assert!((-1e-10f64).nearly_zero());
        assert!(!1e-6f64.nearly_zero());

        assert!(0.0f32.nearly_zero());
        assert!(!1e-3f32.nearly_zero());
    }

    #[test]
    fn nearly_equal() {
        assert!(1.0f64.nearly_equal(1.0 + 1e-12));
        assert!(!1.0f64.nearly_equal(1.0 + 1e-6));
    }
}
