use std::{array, fmt};

use crate::{
    traits::{Number, Real, Sqrt},
    Mat2, Mat3, Mat4, MinMax, One, Trig, Zero,
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element row vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, [`Vector::ONE`] contains all-ones.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` can
///   be used to obtain unit vectors pointing in the given direction.
///
/// # Element Access
///
/// Vector elements can be accessed and inspected in a few different ways:
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - The [`AsRef`] and [`AsMut`] impls can be used to access the underlying elements as a slice or
///   array.
/// - A [`From`] impl allows conversion from a [`Vector`] to an array of the same length.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] allow the same
///   operations without requiring type annotations.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Transformation
///
/// Vectors are *row* vectors: they are transformed by multiplying with a matrix on the right
/// (`v * m`), and transform chains read left to right.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 1.
    ///
    /// This uses [`T::ONE`][One::ONE] as the value for all elements.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Returns a [`Vector`] that borrows each element of `self`.
    #[inline]
    pub fn as_ref(&self) -> Vector<&T, N> {
        Vector::from_fn(|i| &self[i])
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let z = Vec3d::Z;
    /// assert_eq!(z.length(), 1.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// Vectors whose length is within the zero tolerance of 0 are returned unchanged, so there is
    /// no input for which this produces NaN elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vec3d::ZERO.normalize(), Vec3d::ZERO);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Real,
    {
        let length = self.length();
        if length.nearly_zero() {
            self
        } else {
            self / length
        }
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Also see [`Vector::abs_angle_to`] for computing the exact angle between them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (self - other).length()
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (self - other).length2()
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let v = vec2(0.0, 10.0).lerp(vec2(10.0, 20.0), 0.5);
    /// assert_eq!(v, vec2(5.0, 15.0));
    /// ```
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (other - self) * t
    }

    /// Reflects `self` at a surface with the given normal.
    ///
    /// `normal` is expected to have unit length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let v = vec2(1.0, -1.0).reflect(Vec2d::Y);
    /// assert_eq!(v, vec2(1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        self - normal * (two * self.dot(normal))
    }

    /// Interpolates along a Hermite spline defined by two positions and their tangents.
    ///
    /// `amount = 0` yields `value1`, `amount = 1` yields `value2`, and the curve leaves the
    /// endpoints along `tangent1` and `tangent2`.
    pub fn hermite(value1: Self, tangent1: Self, value2: Self, tangent2: Self, amount: T) -> Self
    where
        T: Number,
    {
        let one = T::ONE;
        let two = one + one;
        let three = two + one;
        let t2 = amount * amount;
        let t3 = t2 * amount;

        let w1 = two * t3 - three * t2 + one;
        let w2 = t3 - two * t2 + amount;
        let w3 = -two * t3 + three * t2;
        let w4 = t3 - t2;
        value1 * w1 + tangent1 * w2 + value2 * w3 + tangent2 * w4
    }

    /// Interpolates along a Catmull-Rom spline through `value2` and `value3`.
    ///
    /// `value1` and `value4` are the neighboring control points that shape the curve; `amount = 0`
    /// yields `value2` and `amount = 1` yields `value3`.
    pub fn catmull_rom(value1: Self, value2: Self, value3: Self, value4: Self, amount: T) -> Self
    where
        T: Real,
    {
        let one = T::ONE;
        let two = one + one;
        let three = two + one;
        let four = three + one;
        let five = four + one;
        let t2 = amount * amount;
        let t3 = t2 * amount;

        (value2 * two
            + (value3 - value1) * amount
            + (value1 * two - value2 * five + value3 * four - value4) * t2
            + (value2 * three - value1 - value3 * three + value4) * t3)
            * T::HALF
    }

    /// Returns the point with the given barycentric coordinates in the triangle `v1`, `v2`, `v3`.
    ///
    /// `b2` is the weight of `v2` and `b3` the weight of `v3`; the weight of `v1` is
    /// `1 - b2 - b3`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let centroid = Vector::barycentric(
    ///     vec2(0.0, 0.0),
    ///     vec2(3.0, 0.0),
    ///     vec2(0.0, 3.0),
    ///     1.0 / 3.0,
    ///     1.0 / 3.0,
    /// );
    /// assert_approx_eq!(centroid, vec2(1.0, 1.0));
    /// ```
    pub fn barycentric(v1: Self, v2: Self, v3: Self, b2: T, b3: T) -> Self
    where
        T: Number,
    {
        v1 + (v2 - v1) * b2 + (v3 - v1) * b3
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// use std::f64::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2d::Y.rotate_clockwise(TAU / 4.0), Vec2d::X);
    /// assert_approx_eq!(Vec2d::Y.rotate_clockwise(TAU / 2.0), -Vec2d::Y);
    /// ```
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        self * Mat2::rotation_clockwise(radians)
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// use std::f64::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2d::Y.rotate_counterclockwise(TAU / 4.0), -Vec2d::X);
    /// assert_approx_eq!(Vec2d::X.rotate_counterclockwise(TAU / 4.0), Vec2d::Y);
    /// ```
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        self * Mat2::rotation_counterclockwise(radians)
    }

    /// Computes the (signed) clockwise rotation in radians needed to align `self` with `other`.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right. If the
    /// Y axis points *down*, swap the arguments to make the method work correctly.
    ///
    /// Also see [`Vector::abs_angle_to`] for a more general way of getting the unsigned angle
    /// between vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// use std::f64::consts::TAU;
    ///
    /// // The Y axis can be aligned with the X axis by rotating it clockwise by a quarter turn.
    /// assert_approx_eq!(Vec2d::Y.signed_angle_to(Vec2d::X), TAU / 4.0);
    ///
    /// // The X axis can be aligned with the Y axis by rotating it counterclockwise by a quarter turn.
    /// assert_approx_eq!(Vec2d::X.signed_angle_to(Vec2d::Y), -TAU / 4.0);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is equivalent to the Z coordinate of the cross product of `self` and `other`
    /// (extended with Z=0 in the third dimension). Since the Z coordinates of both inputs are 0,
    /// the Z coordinate is the only non-zero coordinate of the cross product.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let x = Vec2d::X;
    /// let y = Vec2d::Y;
    /// assert_eq!(x.perp_dot(y), 1.0);
    /// assert_eq!(y.perp_dot(x), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.extend(T::ZERO).cross(other.extend(T::ZERO)).z
    }

    /// Transforms the point `self` by an affine 2D transformation matrix.
    ///
    /// The point is extended with `1` in the homogeneous coordinate, so the matrix translation
    /// applies.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let m = Mat3::translation_2d(10.0, 20.0);
    /// assert_eq!(vec2(1.0, 2.0).transform_point(m), vec2(11.0, 22.0));
    /// ```
    pub fn transform_point(self, mat: Mat3<T>) -> Self
    where
        T: Number,
    {
        (self.extend(T::ONE) * mat).truncate()
    }

    /// Transforms the direction `self` by an affine 2D transformation matrix.
    ///
    /// The homogeneous coordinate is `0`, so the matrix translation does not apply.
    pub fn transform_vector(self, mat: Mat3<T>) -> Self
    where
        T: Number,
    {
        (self.extend(T::ZERO) * mat).truncate()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let x = Vec3d::X;
    /// let y = Vec3d::Y;
    /// let z = Vec3d::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// use std::f64::consts::TAU;
    ///
    /// let a = Vec3d::Y;
    /// let b = Vec3d::X;
    /// assert_approx_eq!(a.abs_angle_to(b), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(a.abs_angle_to(-a), TAU / 2.0); // half a turn
    /// ```
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        let dot = self.dot(other);
        (dot / (self.length() * other.length())).acos()
    }

    /// Transforms the point `self` by a 4x4 transformation matrix, including the perspective
    /// divide.
    ///
    /// The point is extended with `1` in the homogeneous coordinate. After the multiplication, the
    /// result is divided by its `w` coordinate, unless `w` is within the zero tolerance of 0 (in
    /// which case the division is skipped).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let m = Mat4::translation(10.0, 20.0, 30.0);
    /// assert_eq!(vec3(1.0, 2.0, 3.0).transform_point(m), vec3(11.0, 22.0, 33.0));
    /// ```
    pub fn transform_point(self, mat: Mat4<T>) -> Self
    where
        T: Real,
    {
        let h = self.extend(T::ONE) * mat;
        let w = h.w;
        if w.nearly_zero() {
            h.truncate()
        } else {
            h.truncate() / w
        }
    }

    /// Transforms the direction `self` by a 4x4 transformation matrix.
    ///
    /// The homogeneous coordinate is `0`, so the matrix translation does not apply and no
    /// perspective divide takes place.
    pub fn transform_vector(self, mat: Mat4<T>) -> Self
    where
        T: Number,
    {
        (self.extend(T::ZERO) * mat).truncate()
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 99.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3d::X.x, 1.0);
        assert_eq!(Vec3d::X[0], 1.0);
        assert_eq!(Vec3d::X[1], 0.0);
        assert_eq!(Vec3d::X[2], 0.0);
        assert_eq!(Vec3d::X.y, 0.0);
        assert_eq!(Vec3d::Y.y, 1.0);
        assert_eq!(Vec3d::Y.z, 0.0);
        assert_eq!(Vec4d::W.w, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        v.x = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);
        assert_eq!(v[1], 1);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn rotate() {
        assert_approx_eq!(Vec2d::Y.rotate_clockwise(TAU / 4.0), Vec2d::X);
        assert_approx_eq!(Vec2d::Y.rotate_clockwise(TAU / 2.0), -Vec2d::Y);
        assert_approx_eq!(Vec2d::X.rotate_clockwise(TAU / 2.0), -Vec2d::X);
        assert_approx_eq!(Vec2d::X.rotate_counterclockwise(TAU / 4.0), Vec2d::Y);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2d::X.dot(Vec2d::X), 1.0);
        assert_eq!(Vec2d::X.dot(Vec2d::Y), 0.0);
    }

    #[test]
    fn abs_angle() {
        assert_approx_eq!(Vec3d::Y.abs_angle_to(Vec3d::X), TAU / 4.0);
        assert_approx_eq!(Vec3d::X.abs_angle_to(Vec3d::Y), TAU / 4.0);

        assert_approx_eq!(Vec3d::Y.abs_angle_to(Vec3d::Y), 0.0);
        assert_approx_eq!(Vec3d::Y.abs_angle_to(-Vec3d::Y), TAU / 2.0);
        assert_approx_eq!(Vec3d::Y.abs_angle_to(-Vec3d::X), TAU / 4.0);
    }

    #[test]
    fn signed_angle() {
        assert_approx_eq!(Vec2d::Y.signed_angle_to(Vec2d::X), TAU / 4.0);
        assert_approx_eq!(Vec2d::X.signed_angle_to(Vec2d::Y), -TAU / 4.0);
        assert_approx_eq!(Vec2d::Y.signed_angle_to(Vec2d::Y), 0.0);
        assert_approx_eq!(Vec2d::Y.signed_angle_to(-Vec2d::Y), -TAU / 2.0);
    }

    #[test]
    fn normalize_zero_is_noop() {
        assert_eq!(Vec3d::ZERO.normalize(), Vec3d::ZERO);
        assert_eq!(vec2(1e-12, -1e-12).normalize(), vec2(1e-12, -1e-12));
        assert_approx_eq!(vec3(0.0, 3.0, 4.0).normalize(), vec3(0.0, 0.6, 0.8));
    }

    #[test]
    fn reflect() {
        assert_eq!(vec3(1.0, -2.0, 3.0).reflect(Vec3d::Y), vec3(1.0, 2.0, 3.0));
        assert_eq!(vec2(-1.0, 0.0).reflect(Vec2d::X), vec2(1.0, 0.0));
    }

    #[test]
    fn hermite_endpoints() {
        let v1 = vec2(0.0, 0.0);
        let t1 = vec2(1.0, 0.0);
        let v2 = vec2(4.0, 2.0);
        let t2 = vec2(0.0, 1.0);
        assert_approx_eq!(Vector::hermite(v1, t1, v2, t2, 0.0), v1);
        assert_approx_eq!(Vector::hermite(v1, t1, v2, t2, 1.0), v2);
    }

    #[test]
    fn catmull_rom_endpoints() {
        let p0 = vec2(-1.0, 0.0);
        let p1 = vec2(0.0, 1.0);
        let p2 = vec2(1.0, 2.0);
        let p3 = vec2(2.0, 0.0);
        assert_approx_eq!(Vector::catmull_rom(p0, p1, p2, p3, 0.0), p1);
        assert_approx_eq!(Vector::catmull_rom(p0, p1, p2, p3, 1.0), p2);
    }

    #[test]
    fn barycentric_corners() {
        let v1 = vec3(1.0, 0.0, 0.0);
        let v2 = vec3(0.0, 1.0, 0.0);
        let v3 = vec3(0.0, 0.0, 1.0);
        assert_eq!(Vector::barycentric(v1, v2, v3, 0.0, 0.0), v1);
        assert_eq!(Vector::barycentric(v1, v2, v3, 1.0, 0.0), v2);
        assert_eq!(Vector::barycentric(v1, v2, v3, 0.0, 1.0), v3);
    }

    #[test]
    fn distance() {
        assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
        assert_eq!(vec2(1.0, 1.0).distance2(vec2(4.0, 5.0)), 25.0);
    }
}
