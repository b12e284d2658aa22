mod ops;
mod view;

use std::fmt;

use crate::{traits::Real, vec3, vec4, Mat3, Mat4, Number, One, Sqrt, Trig, Vec3, Vector, Zero};

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component.
///
/// Quaternion multiplication follows the same convention as matrix multiplication in this crate:
/// `a * b` is the rotation that applies `a` first, then `b`, and `v * q` rotates a vector. The
/// matrix produced by [`Quat::to_mat3`] performs the identical rotation on row vectors.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: [x, y, z, w].into(),
        }
    }

    /// Returns the components of this quaternion as a 4-dimensional [`Vector`].
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion representing a rotation around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a quaternion representing a rotation around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a quaternion representing a rotation around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion representing a rotation around the X, Y, and Z axis, in sequence.
    #[doc(alias = "euler")]
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_rotation_x(x) * Self::from_rotation_y(y) * Self::from_rotation_z(z)
    }

    /// Creates a quaternion representing a rotation around an arbitrary axis.
    ///
    /// `axis` is expected to have unit length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// use std::f64::consts::TAU;
    ///
    /// let q = Quat::from_axis_angle(Vec3d::Y, TAU / 4.0);
    /// assert_approx_eq!(Vec3d::X * q, -Vec3d::Z);
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        let v = axis * sin;
        Self::from_components(v.x, v.y, v.z, cos)
    }

    /// Returns the rotation axis and angle (in radians) represented by this quaternion.
    ///
    /// `self` is expected to have unit length. The returned angle is in `[0, τ/2]`. For rotations
    /// within the zero tolerance of the identity, the rotation axis is arbitrary and the X axis
    /// is returned.
    pub fn to_axis_angle(self) -> (Vec3<T>, T)
    where
        T: Real,
    {
        let two = T::ONE + T::ONE;
        let w = self.vec.w.clamp(-T::ONE, T::ONE);
        let angle = two * w.acos();
        let sin = (T::ONE - w * w).sqrt();
        if sin.nearly_zero() {
            (Vec3::X, angle)
        } else {
            (vec3(self.vec.x, self.vec.y, self.vec.z) / sin, angle)
        }
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it. When using quaternions to model rotations, it
    /// is advisable to ensure that quaternions are always of length one.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// Quaternions whose length is within the zero tolerance of 0 are returned unchanged.
    pub fn normalize(self) -> Self
    where
        T: Real,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    ///
    /// For unit quaternions, the dot product is the cosine of half the angle between the two
    /// rotations. `q` and `-q` encode the same rotation but have opposing dot products.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the conjugate of this quaternion (the imaginary components negated).
    ///
    /// For unit quaternions, the conjugate is the inverse rotation.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        Self::from_components(-self.vec.x, -self.vec.y, -self.vec.z, self.vec.w)
    }

    /// Returns the multiplicative inverse of this quaternion.
    ///
    /// `q * q.invert()` is the identity. The caller must ensure that `self` is not the zero
    /// quaternion, which has no inverse.
    pub fn invert(self) -> Self
    where
        T: Number,
    {
        let conj = self.conjugate();
        Self {
            vec: conj.vec / self.length2(),
        }
    }

    /// Linearly interpolates the components of `self` and `other`.
    ///
    /// The result is generally not a unit quaternion; see [`Quat::nlerp`] for the normalized
    /// variant.
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        Self {
            vec: self.vec.lerp(other.vec, t),
        }
    }

    /// Normalized linear interpolation between `self` and `other`.
    ///
    /// Cheaper than [`Quat::slerp`], and a good approximation for nearby rotations, but does not
    /// interpolate with constant angular velocity.
    pub fn nlerp(self, other: Self, t: T) -> Self
    where
        T: Real,
    {
        self.lerp(other, t).normalize()
    }

    /// Spherical linear interpolation between the rotations `self` and `other`.
    ///
    /// Both inputs are expected to have unit length. The interpolation takes the shorter of the
    /// two great-circle arcs between the rotations, and falls back to [`Quat::nlerp`] when the
    /// inputs are (nearly) identical.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// use std::f64::consts::TAU;
    ///
    /// let a = Quat::from_rotation_z(0.0);
    /// let b = Quat::from_rotation_z(TAU / 4.0);
    /// let mid = a.slerp(b, 0.5);
    /// assert_approx_eq!(mid.dot(Quat::from_rotation_z(TAU / 8.0)).abs(), 1.0).abs(1e-12);
    /// ```
    pub fn slerp(self, other: Self, t: T) -> Self
    where
        T: Real,
    {
        let mut other = other;
        let mut cos = self.dot(other);
        // Take the short way around.
        if cos < T::ZERO {
            other = -other;
            cos = -cos;
        }

        if (T::ONE - cos).nearly_zero() {
            return self.nlerp(other, t);
        }

        let theta = cos.acos();
        let sin = theta.sin();
        let w1 = ((T::ONE - t) * theta).sin() / sin;
        let w2 = (t * theta).sin() / sin;
        Self {
            vec: self.vec * w1 + other.vec * w2,
        }
    }

    /// Creates a quaternion from a 3x3 rotation matrix.
    ///
    /// `mat` is expected to be a proper rotation matrix (orthonormal rows, determinant 1). The
    /// result is a unit quaternion; note that `q` and `-q` encode the same rotation, so a
    /// round-trip through [`Quat::to_mat3`] may flip every component's sign.
    pub fn from_rotation_matrix(mat: Mat3<T>) -> Self
    where
        T: Real,
    {
        let half = Self::one_half();
        let trace = mat.trace();
        if trace > T::ZERO {
            let s = (trace + T::ONE).sqrt();
            let w = s * half;
            let s = half / s;
            Self::from_components(
                (mat[(1, 2)] - mat[(2, 1)]) * s,
                (mat[(2, 0)] - mat[(0, 2)]) * s,
                (mat[(0, 1)] - mat[(1, 0)]) * s,
                w,
            )
        } else if mat[(0, 0)] >= mat[(1, 1)] && mat[(0, 0)] >= mat[(2, 2)] {
            let s = (T::ONE + mat[(0, 0)] - mat[(1, 1)] - mat[(2, 2)]).sqrt();
            let inv = half / s;
            Self::from_components(
                s * half,
                (mat[(0, 1)] + mat[(1, 0)]) * inv,
                (mat[(0, 2)] + mat[(2, 0)]) * inv,
                (mat[(1, 2)] - mat[(2, 1)]) * inv,
            )
        } else if mat[(1, 1)] > mat[(2, 2)] {
            let s = (T::ONE + mat[(1, 1)] - mat[(0, 0)] - mat[(2, 2)]).sqrt();
            let inv = half / s;
            Self::from_components(
                (mat[(1, 0)] + mat[(0, 1)]) * inv,
                s * half,
                (mat[(2, 1)] + mat[(1, 2)]) * inv,
                (mat[(2, 0)] - mat[(0, 2)]) * inv,
            )
        } else {
            let s = (T::ONE + mat[(2, 2)] - mat[(0, 0)] - mat[(1, 1)]).sqrt();
            let inv = half / s;
            Self::from_components(
                (mat[(2, 0)] + mat[(0, 2)]) * inv,
                (mat[(2, 1)] + mat[(1, 2)]) * inv,
                s * half,
                (mat[(0, 1)] - mat[(1, 0)]) * inv,
            )
        }
    }

    /// Converts this unit quaternion to the equivalent 3x3 rotation matrix.
    ///
    /// The resulting matrix rotates row vectors: `v * q.to_mat3()` equals `v * q`.
    pub fn to_mat3(self) -> Mat3<T>
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        let [x, y, z, w] = self.vec.into_array();
        Mat3::from_rows([
            [
                T::ONE - two * (y * y + z * z),
                two * (x * y + z * w),
                two * (x * z - y * w),
            ],
            [
                two * (x * y - z * w),
                T::ONE - two * (x * x + z * z),
                two * (y * z + x * w),
            ],
            [
                two * (x * z + y * w),
                two * (y * z - x * w),
                T::ONE - two * (x * x + y * y),
            ],
        ])
    }

    /// Converts this unit quaternion to the equivalent homogeneous 4x4 rotation matrix.
    pub fn to_mat4(self) -> Mat4<T>
    where
        T: Number,
    {
        self.to_mat3().to_homogeneous()
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quat")
            .field(&self.vec.x)
            .field(&self.vec.y)
            .field(&self.vec.z)
            .field(&self.vec.w)
            .finish()
    }
}

impl<T: Zero + One> Default for Quat<T> {
    /// Returns [`Quat::IDENTITY`].
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use crate::{assert_approx_eq, vec3, Mat3, Vec3d};

    use super::*;

    #[test]
    fn identity() {
        // Pin the component layout: zero imaginary parts, real part 1.
        assert_eq!(Quatd::IDENTITY.into_vec(), vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quatd::default(), Quatd::IDENTITY);

        let q = Quat::from_rotation_xyz(0.4, -1.0, 2.2);
        assert_approx_eq!(Quat::IDENTITY * q, q);
        assert_approx_eq!(q * Quat::IDENTITY, q);
        assert_approx_eq!(Vec3d::X * Quatd::IDENTITY, Vec3d::X);
    }

    #[test]
    fn rotate_vector() {
        let quarter = TAU / 4.0;
        assert_approx_eq!(Vec3d::X * Quat::from_rotation_z(quarter), Vec3d::Y);
        assert_approx_eq!(Vec3d::Y * Quat::from_rotation_x(quarter), Vec3d::Z);
        assert_approx_eq!(Vec3d::Z * Quat::from_rotation_y(quarter), Vec3d::X);
    }

    #[test]
    fn mul_applies_left_first() {
        let quarter = TAU / 4.0;
        let q = Quat::from_rotation_z(quarter) * Quat::from_rotation_x(quarter);
        // X rotates onto Y around Z, then onto Z around X.
        assert_approx_eq!(Vec3d::X * q, Vec3d::Z).abs(1e-12);
    }

    #[test]
    fn matches_matrix_composition() {
        let a = Quat::from_rotation_xyz(0.3, -1.2, 2.2);
        let b = Quat::from_rotation_xyz(-0.5, 0.4, 1.0);
        assert_approx_eq!((a * b).to_mat3(), a.to_mat3() * b.to_mat3()).abs(1e-12);

        let v = vec3(1.0, -2.0, 0.5);
        assert_approx_eq!(v * a, v * a.to_mat3()).abs(1e-12);
    }

    #[test]
    fn conjugate_inverts_rotation() {
        let q = Quat::from_rotation_xyz(0.3, -1.2, 2.2);
        assert_approx_eq!(q * q.conjugate(), Quatd::IDENTITY).abs(1e-12);
        assert_approx_eq!(q * q.invert(), Quatd::IDENTITY).abs(1e-12);

        let double = Quat::from_vec(q.into_vec() * 2.0);
        assert_approx_eq!(double * double.invert(), Quatd::IDENTITY).abs(1e-12);
    }

    #[test]
    fn axis_angle_round_trip() {
        let axis = vec3(1.0, 2.0, -0.5).normalize();
        let angle = 1.25;
        let (axis2, angle2) = Quat::from_axis_angle(axis, angle).to_axis_angle();
        assert_approx_eq!(axis2, axis).abs(1e-12);
        assert_approx_eq!(angle2, angle).abs(1e-12);

        let (axis, angle) = Quatd::IDENTITY.to_axis_angle();
        assert_eq!(axis, Vec3d::X);
        assert_approx_eq!(angle, 0.0);
    }

    #[test]
    fn slerp_endpoints() {
        let a = Quat::from_rotation_z(0.0);
        let b = Quat::from_rotation_z(TAU / 4.0);
        assert_approx_eq!(a.slerp(b, 0.0), a);
        assert_approx_eq!(a.slerp(b, 1.0), b);

        let mid = a.slerp(b, 0.5);
        assert_approx_eq!(mid.dot(Quat::from_rotation_z(TAU / 8.0)).abs(), 1.0).abs(1e-12);

        // Nearly identical inputs take the nlerp path.
        let c = Quat::from_rotation_z(1e-12);
        assert_approx_eq!(a.slerp(c, 0.5).length(), 1.0);
    }

    #[test]
    fn slerp_takes_short_way() {
        let a = Quat::from_rotation_z(0.1);
        let b = -Quat::from_rotation_z(0.2);
        let mid = a.slerp(b, 0.5);
        assert_approx_eq!(mid.dot(Quat::from_rotation_z(0.15)).abs(), 1.0).abs(1e-12);
    }

    #[test]
    fn rotation_matrix_round_trip() {
        let mut rng = fastrand::Rng::with_seed(0x51_0b_ad_c0_ff_ee);
        for _ in 0..200 {
            let q = Quat::from_components(
                rng.f64() * 2.0 - 1.0,
                rng.f64() * 2.0 - 1.0,
                rng.f64() * 2.0 - 1.0,
                rng.f64() * 2.0 - 1.0,
            );
            if q.length() < 0.1 {
                continue;
            }
            let q = q.normalize();

            let restored = Quat::from_rotation_matrix(q.to_mat3());
            // `q` and `-q` encode the same rotation.
            assert_approx_eq!(restored.dot(q).abs(), 1.0).abs(1e-9);
            assert_approx_eq!(restored.to_mat3(), q.to_mat3()).abs(1e-9);
        }
    }

    #[test]
    fn from_rotation_matrix_branches() {
        // Half-turns around each axis have a non-positive trace and exercise the three
        // off-diagonal branches.
        for mat in [
            Mat3::rotation_x(TAU / 2.0),
            Mat3::rotation_y(TAU / 2.0),
            Mat3::rotation_z(TAU / 2.0),
        ] {
            let q = Quat::from_rotation_matrix(mat);
            assert_approx_eq!(q.length(), 1.0);
            assert_approx_eq!(q.to_mat3(), mat).abs(1e-12);
        }
    }
}
