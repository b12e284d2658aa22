//! Implementations of `std::ops`.

use std::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

use crate::{approx::ApproxEq, traits::Number, vec3, Quat, Vector};

// More general `PartialEq` impl than what the derive generates.
impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T> ApproxEq for Quat<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.vec.ulps_diff_eq(&other.vec, ulps_tolerance)
    }
}

/// Quaternion composition.
///
/// `a * b` is the rotation that applies `a` first, then `b`, mirroring the matrix product
/// `a.to_mat3() * b.to_mat3()`.
impl<T: Number> Mul for Quat<T> {
    type Output = Quat<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        let [ax, ay, az, aw] = self.vec.into_array();
        let [bx, by, bz, bw] = rhs.vec.into_array();
        Quat::from_components(
            bw * ax + bx * aw + by * az - bz * ay,
            bw * ay + by * aw + bz * ax - bx * az,
            bw * az + bz * aw + bx * ay - by * ax,
            bw * aw - bx * ax - by * ay - bz * az,
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector by a unit quaternion.
impl<T: Number> Mul<Quat<T>> for Vector<T, 3> {
    type Output = Vector<T, 3>;

    fn mul(self, rhs: Quat<T>) -> Self::Output {
        let two = T::ONE + T::ONE;
        let [x, y, z, w] = rhs.vec.into_array();
        let im = vec3(x, y, z);
        let t = im.cross(self) * two;
        self + t * w + im.cross(t)
    }
}

/// Component-wise negation.
///
/// For unit quaternions, `-q` encodes the same rotation as `q`.
impl<T: Number> Neg for Quat<T> {
    type Output = Quat<T>;

    fn neg(self) -> Self::Output {
        Quat { vec: -self.vec }
    }
}

/// Component-wise addition.
impl<T: Number> Add for Quat<T> {
    type Output = Quat<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Quat {
            vec: self.vec + rhs.vec,
        }
    }
}

/// Component-wise subtraction.
impl<T: Number> Sub for Quat<T> {
    type Output = Quat<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Quat {
            vec: self.vec - rhs.vec,
        }
    }
}

/// Quaternion-Scalar multiplication.
impl<T: Number> Mul<T> for Quat<T> {
    type Output = Quat<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Quat {
            vec: self.vec * rhs,
        }
    }
}

/// Quaternion-Scalar division.
impl<T: Number> Div<T> for Quat<T> {
    type Output = Quat<T>;

    fn div(self, rhs: T) -> Self::Output {
        Quat {
            vec: self.vec / rhs,
        }
    }
}
