//! Transformation matrix constructors.
//!
//! All constructors build matrices for the row-vector convention (`v * m`): translation lives in
//! the last row, and chains compose left to right.

use crate::{
    traits::{Number, Real, Trig},
    Mat2, Mat3, Mat4, Matrix, Quat, Vec2, Vec3,
};

impl<T: Number + Trig> Mat2<T> {
    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([[cos, sin], [-sin, cos]])
    }
}

impl<T: Number> Mat3<T> {
    /// Creates a 3x3 matrix that scales by the given factor along each axis.
    pub fn scaling(x: T, y: T, z: T) -> Self {
        Self::from_diagonal([x, y, z])
    }

    /// Creates a homogeneous 2D scaling matrix.
    pub fn scaling_2d(x: T, y: T) -> Self {
        Self::from_diagonal([x, y, T::ONE])
    }

    /// Creates a homogeneous 2D translation matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let m = Mat3::translation_2d(10.0, 20.0);
    /// assert_eq!(vec2(1.0, 2.0).transform_point(m), vec2(11.0, 22.0));
    /// ```
    pub fn translation_2d(x: T, y: T) -> Self {
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, T::ONE, T::ZERO],
            [x, y, T::ONE],
        ])
    }

    /// Creates a homogeneous 2D rotation matrix for a counterclockwise rotation.
    pub fn rotation_2d(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([
            [cos, sin, T::ZERO],
            [-sin, cos, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a 3x3 rotation matrix around the X axis.
    pub fn rotation_x(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, cos, sin],
            [T::ZERO, -sin, cos],
        ])
    }

    /// Creates a 3x3 rotation matrix around the Y axis.
    pub fn rotation_y(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([
            [cos, T::ZERO, -sin],
            [T::ZERO, T::ONE, T::ZERO],
            [sin, T::ZERO, cos],
        ])
    }

    /// Creates a 3x3 rotation matrix around the Z axis.
    pub fn rotation_z(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([
            [cos, sin, T::ZERO],
            [-sin, cos, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a 3x3 rotation matrix around an arbitrary axis.
    ///
    /// `axis` is expected to have unit length.
    pub fn rotation_axis(axis: Vec3<T>, radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        let t = T::ONE - cos;
        let [x, y, z] = axis.into_array();
        Self::from_rows([
            [
                cos + x * x * t,
                x * y * t + z * sin,
                x * z * t - y * sin,
            ],
            [
                x * y * t - z * sin,
                cos + y * y * t,
                y * z * t + x * sin,
            ],
            [
                x * z * t + y * sin,
                y * z * t - x * sin,
                cos + z * z * t,
            ],
        ])
    }

    /// Creates the 3x3 rotation matrix equivalent to a unit quaternion.
    pub fn from_rotation(rotation: Quat<T>) -> Self {
        rotation.to_mat3()
    }

    /// Builds a homogeneous 2D transformation that scales, then rotates counterclockwise, then
    /// translates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// use std::f64::consts::TAU;
    ///
    /// let m = Mat3::transformation_2d(vec2(2.0, 2.0), TAU / 4.0, vec2(5.0, 6.0));
    /// assert_approx_eq!(vec2(1.0, 0.0).transform_point(m), vec2(5.0, 8.0));
    /// ```
    pub fn transformation_2d(scale: Vec2<T>, radians: T, translation: Vec2<T>) -> Self
    where
        T: Trig,
    {
        Self::scaling_2d(scale.x, scale.y)
            * Self::rotation_2d(radians)
            * Self::translation_2d(translation.x, translation.y)
    }
}

impl<T: Number> Mat4<T> {
    /// Creates a 4x4 matrix that scales by the given factor along each axis.
    pub fn scaling(x: T, y: T, z: T) -> Self {
        Self::from_diagonal([x, y, z, T::ONE])
    }

    /// Creates a 4x4 translation matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let m = Mat4::translation(10.0, 20.0, 30.0);
    /// assert_eq!(vec3(1.0, 2.0, 3.0).transform_point(m), vec3(11.0, 22.0, 33.0));
    /// ```
    pub fn translation(x: T, y: T, z: T) -> Self {
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE, T::ZERO],
            [x, y, z, T::ONE],
        ])
    }

    /// Creates a 4x4 rotation matrix around the X axis.
    pub fn rotation_x(radians: T) -> Self
    where
        T: Trig,
    {
        Mat3::rotation_x(radians).to_homogeneous()
    }

    /// Creates a 4x4 rotation matrix around the Y axis.
    pub fn rotation_y(radians: T) -> Self
    where
        T: Trig,
    {
        Mat3::rotation_y(radians).to_homogeneous()
    }

    /// Creates a 4x4 rotation matrix around the Z axis.
    pub fn rotation_z(radians: T) -> Self
    where
        T: Trig,
    {
        Mat3::rotation_z(radians).to_homogeneous()
    }

    /// Creates a 4x4 rotation matrix around an arbitrary axis.
    ///
    /// `axis` is expected to have unit length.
    pub fn rotation_axis(axis: Vec3<T>, radians: T) -> Self
    where
        T: Trig,
    {
        Mat3::rotation_axis(axis, radians).to_homogeneous()
    }

    /// Creates the 4x4 rotation matrix equivalent to a unit quaternion.
    pub fn from_rotation(rotation: Quat<T>) -> Self {
        rotation.to_mat4()
    }

    /// Builds an affine transformation that scales, then rotates, then translates.
    ///
    /// [`decompose`][Mat4::decompose] is the inverse of this operation.
    pub fn affine_transformation(scale: Vec3<T>, rotation: Quat<T>, translation: Vec3<T>) -> Self {
        Self::scaling(scale.x, scale.y, scale.z)
            * rotation.to_mat4()
            * Self::translation(translation.x, translation.y, translation.z)
    }

    /// Creates a left-handed view matrix looking from `eye` towards `target`.
    pub fn look_at_lh(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self
    where
        T: Real,
    {
        let zaxis = (target - eye).normalize();
        let xaxis = up.cross(zaxis).normalize();
        let yaxis = zaxis.cross(xaxis);
        Self::from_rows([
            [xaxis.x, yaxis.x, zaxis.x, T::ZERO],
            [xaxis.y, yaxis.y, zaxis.y, T::ZERO],
            [xaxis.z, yaxis.z, zaxis.z, T::ZERO],
            [-xaxis.dot(eye), -yaxis.dot(eye), -zaxis.dot(eye), T::ONE],
        ])
    }

    /// Creates a right-handed view matrix looking from `eye` towards `target`.
    pub fn look_at_rh(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self
    where
        T: Real,
    {
        let zaxis = (eye - target).normalize();
        let xaxis = up.cross(zaxis).normalize();
        let yaxis = zaxis.cross(xaxis);
        Self::from_rows([
            [xaxis.x, yaxis.x, zaxis.x, T::ZERO],
            [xaxis.y, yaxis.y, zaxis.y, T::ZERO],
            [xaxis.z, yaxis.z, zaxis.z, T::ZERO],
            [-xaxis.dot(eye), -yaxis.dot(eye), -zaxis.dot(eye), T::ONE],
        ])
    }

    /// Creates a left-handed perspective projection matrix from a vertical field of view.
    ///
    /// Points at `z_near` project to depth 0, points at `z_far` to depth 1.
    pub fn perspective_fov_lh(fov_y: T, aspect: T, z_near: T, z_far: T) -> Self
    where
        T: Real,
    {
        let height = T::ONE / (fov_y * T::HALF).tan();
        let width = height / aspect;
        let q = z_far / (z_far - z_near);
        Self::from_rows([
            [width, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, height, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, q, T::ONE],
            [T::ZERO, T::ZERO, -z_near * q, T::ZERO],
        ])
    }

    /// Creates a right-handed perspective projection matrix from a vertical field of view.
    ///
    /// The view looks down the negative Z axis; points at `-z_near` project to depth 0, points at
    /// `-z_far` to depth 1.
    pub fn perspective_fov_rh(fov_y: T, aspect: T, z_near: T, z_far: T) -> Self
    where
        T: Real,
    {
        let height = T::ONE / (fov_y * T::HALF).tan();
        let width = height / aspect;
        let q = z_far / (z_near - z_far);
        Self::from_rows([
            [width, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, height, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, q, -T::ONE],
            [T::ZERO, T::ZERO, z_near * q, T::ZERO],
        ])
    }

    /// Creates a left-handed perspective projection matrix from the near-plane extents of the
    /// view volume.
    pub fn perspective_off_center_lh(
        left: T,
        right: T,
        bottom: T,
        top: T,
        z_near: T,
        z_far: T,
    ) -> Self {
        let two = T::ONE + T::ONE;
        Self::from_rows([
            [two * z_near / (right - left), T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, two * z_near / (top - bottom), T::ZERO, T::ZERO],
            [
                (left + right) / (left - right),
                (top + bottom) / (bottom - top),
                z_far / (z_far - z_near),
                T::ONE,
            ],
            [
                T::ZERO,
                T::ZERO,
                z_near * z_far / (z_near - z_far),
                T::ZERO,
            ],
        ])
    }

    /// Creates a right-handed perspective projection matrix from the near-plane extents of the
    /// view volume.
    pub fn perspective_off_center_rh(
        left: T,
        right: T,
        bottom: T,
        top: T,
        z_near: T,
        z_far: T,
    ) -> Self {
        let two = T::ONE + T::ONE;
        Self::from_rows([
            [two * z_near / (right - left), T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, two * z_near / (top - bottom), T::ZERO, T::ZERO],
            [
                (left + right) / (right - left),
                (top + bottom) / (top - bottom),
                z_far / (z_near - z_far),
                -T::ONE,
            ],
            [
                T::ZERO,
                T::ZERO,
                z_near * z_far / (z_near - z_far),
                T::ZERO,
            ],
        ])
    }

    /// Creates a left-handed orthographic projection matrix from the view volume dimensions.
    pub fn orthographic_lh(width: T, height: T, z_near: T, z_far: T) -> Self {
        let two = T::ONE + T::ONE;
        Self::from_rows([
            [two / width, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, two / height, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE / (z_far - z_near), T::ZERO],
            [T::ZERO, T::ZERO, z_near / (z_near - z_far), T::ONE],
        ])
    }

    /// Creates a right-handed orthographic projection matrix from the view volume dimensions.
    pub fn orthographic_rh(width: T, height: T, z_near: T, z_far: T) -> Self {
        let two = T::ONE + T::ONE;
        Self::from_rows([
            [two / width, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, two / height, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE / (z_near - z_far), T::ZERO],
            [T::ZERO, T::ZERO, z_near / (z_near - z_far), T::ONE],
        ])
    }

    /// Creates a left-handed orthographic projection matrix from an off-center view volume.
    pub fn orthographic_off_center_lh(
        left: T,
        right: T,
        bottom: T,
        top: T,
        z_near: T,
        z_far: T,
    ) -> Self {
        let two = T::ONE + T::ONE;
        Self::from_rows([
            [two / (right - left), T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, two / (top - bottom), T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE / (z_far - z_near), T::ZERO],
            [
                (left + right) / (left - right),
                (top + bottom) / (bottom - top),
                z_near / (z_near - z_far),
                T::ONE,
            ],
        ])
    }

    /// Creates a right-handed orthographic projection matrix from an off-center view volume.
    pub fn orthographic_off_center_rh(
        left: T,
        right: T,
        bottom: T,
        top: T,
        z_near: T,
        z_far: T,
    ) -> Self {
        let two = T::ONE + T::ONE;
        Self::from_rows([
            [two / (right - left), T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, two / (top - bottom), T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE / (z_near - z_far), T::ZERO],
            [
                (left + right) / (left - right),
                (top + bottom) / (bottom - top),
                z_near / (z_near - z_far),
                T::ONE,
            ],
        ])
    }

    /// Creates a world matrix for a billboard that faces the camera.
    ///
    /// `camera_forward` is used as the facing direction when the object sits on top of the camera
    /// position.
    pub fn billboard(
        object: Vec3<T>,
        camera: Vec3<T>,
        camera_up: Vec3<T>,
        camera_forward: Vec3<T>,
    ) -> Self
    where
        T: Real,
    {
        let mut forward = object - camera;
        if forward.length2().nearly_zero() {
            forward = -camera_forward;
        } else {
            forward = forward.normalize();
        }

        let right = camera_up.cross(forward).normalize();
        let up = forward.cross(right);
        Self::from_rows([
            right.extend(T::ZERO),
            up.extend(T::ZERO),
            forward.extend(T::ZERO),
            object.extend(T::ONE),
        ])
    }

    /// Creates a matrix that skews points along `direction` based on their distance from the
    /// plane through the origin with the given `normal`.
    ///
    /// Both `direction` and `normal` are expected to have unit length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// use std::f64::consts::TAU;
    ///
    /// let m = Mat4::skew(TAU / 8.0, Vec3d::X, Vec3d::Y);
    /// assert_approx_eq!(vec3(0.0, 1.0, 0.0).transform_point(m), vec3(1.0, 1.0, 0.0));
    /// ```
    pub fn skew(radians: T, direction: Vec3<T>, normal: Vec3<T>) -> Self
    where
        T: Trig,
    {
        let tan = radians.tan();
        Matrix::from_fn(|row, col| {
            let base = if row == col { T::ONE } else { T::ZERO };
            if row < 3 && col < 3 {
                base + tan * normal[row] * direction[col]
            } else {
                base
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use crate::{assert_approx_eq, vec2, vec3, Mat3d, Mat4d, Vec3d};

    use super::*;

    #[test]
    fn rotation_2x2() {
        let cw = Mat2::rotation_clockwise(TAU / 4.0);
        let ccw = Mat2::rotation_counterclockwise(TAU / 4.0);
        assert_approx_eq!(cw * ccw, Mat2::IDENTITY);
        assert_approx_eq!(vec2(1.0, 0.0) * ccw, vec2(0.0, 1.0));
    }

    #[test]
    fn axis_rotations() {
        let quarter = TAU / 4.0;
        assert_approx_eq!(Vec3d::Y * Mat3::rotation_x(quarter), Vec3d::Z);
        assert_approx_eq!(Vec3d::Z * Mat3::rotation_y(quarter), Vec3d::X);
        assert_approx_eq!(Vec3d::X * Mat3::rotation_z(quarter), Vec3d::Y);

        assert_approx_eq!(
            Vec3d::X.transform_point(Mat4::rotation_z(quarter)),
            Vec3d::Y
        );
    }

    #[test]
    fn rotation_axis_matches_fixed_axes() {
        let angle = 1.1;
        assert_approx_eq!(Mat3::rotation_axis(Vec3d::X, angle), Mat3::rotation_x(angle));
        assert_approx_eq!(Mat3::rotation_axis(Vec3d::Y, angle), Mat3::rotation_y(angle));
        assert_approx_eq!(Mat3::rotation_axis(Vec3d::Z, angle), Mat3::rotation_z(angle));
    }

    #[test]
    fn look_at_identity() {
        let view = Mat4::look_at_lh(Vec3d::ZERO, Vec3d::Z, Vec3d::Y);
        assert_approx_eq!(view, Mat4d::IDENTITY);

        let view = Mat4::look_at_rh(Vec3d::ZERO, -Vec3d::Z, Vec3d::Y);
        assert_approx_eq!(view, Mat4d::IDENTITY);
    }

    #[test]
    fn look_at_translates_eye_to_origin() {
        let eye = vec3(1.0, 2.0, 3.0);
        let view = Mat4::look_at_lh(eye, vec3(1.0, 2.0, 10.0), Vec3d::Y);
        assert_approx_eq!(eye.transform_point(view), Vec3d::ZERO);
    }

    #[test]
    fn perspective_depth_range() {
        let proj = Mat4::perspective_fov_lh(TAU / 6.0, 16.0 / 9.0, 0.1, 100.0);
        assert_approx_eq!(vec3(0.0, 0.0, 0.1).transform_point(proj).z, 0.0).abs(1e-12);
        assert_approx_eq!(vec3(0.0, 0.0, 100.0).transform_point(proj).z, 1.0).abs(1e-12);

        let proj = Mat4::perspective_fov_rh(TAU / 6.0, 16.0 / 9.0, 0.1, 100.0);
        assert_approx_eq!(vec3(0.0, 0.0, -0.1).transform_point(proj).z, 0.0).abs(1e-12);
        assert_approx_eq!(vec3(0.0, 0.0, -100.0).transform_point(proj).z, 1.0).abs(1e-12);
    }

    #[test]
    fn orthographic_depth_range() {
        let proj = Mat4::orthographic_lh(8.0, 6.0, 1.0, 11.0);
        assert_approx_eq!(vec3(0.0, 0.0, 1.0).transform_point(proj).z, 0.0);
        assert_approx_eq!(vec3(0.0, 0.0, 11.0).transform_point(proj).z, 1.0);
        assert_approx_eq!(vec3(4.0, -3.0, 1.0).transform_point(proj).truncate(), vec2(1.0, -1.0));

        let off_center = Mat4::orthographic_off_center_lh(-4.0, 4.0, -3.0, 3.0, 1.0, 11.0);
        assert_approx_eq!(off_center, proj);
    }

    #[test]
    fn off_center_matches_fov() {
        // A symmetric frustum expressed through its near-plane extents equals the fov form.
        let fov_y = TAU / 6.0;
        let aspect = 16.0 / 9.0;
        let (z_near, z_far) = (0.1, 100.0);
        let top = z_near * (fov_y / 2.0).tan();
        let right = top * aspect;

        let a = Mat4::perspective_fov_lh(fov_y, aspect, z_near, z_far);
        let b = Mat4::perspective_off_center_lh(-right, right, -top, top, z_near, z_far);
        assert_approx_eq!(a, b).abs(1e-12);

        let a = Mat4::perspective_fov_rh(fov_y, aspect, z_near, z_far);
        let b = Mat4::perspective_off_center_rh(-right, right, -top, top, z_near, z_far);
        assert_approx_eq!(a, b).abs(1e-12);
    }

    #[test]
    fn billboard_faces_camera() {
        let object = vec3(0.0, 0.0, 5.0);
        let m = Mat4::billboard(object, Vec3d::ZERO, Vec3d::Y, Vec3d::Z);
        assert_approx_eq!(vec3(1.0, 0.0, 0.0).transform_point(m), vec3(1.0, 0.0, 5.0));

        // Object on top of the camera: fall back to the camera's forward vector.
        let m = Mat4::billboard(Vec3d::ZERO, Vec3d::ZERO, Vec3d::Y, Vec3d::Z);
        assert_approx_eq!(m.row(2).truncate(), -Vec3d::Z);
    }

    #[test]
    fn affine_transformation_composes_in_order() {
        let scale = vec3(2.0, 3.0, 4.0);
        let rotation = Quat::from_rotation_y(TAU / 4.0);
        let translation = vec3(1.0, -2.0, 3.0);
        let m = Mat4::affine_transformation(scale, rotation, translation);

        let expected = Mat4::scaling(2.0, 3.0, 4.0)
            * Mat4::from_rotation(rotation)
            * Mat4::translation(1.0, -2.0, 3.0);
        assert_approx_eq!(m, expected).abs(1e-12);

        // X is scaled by 2, rotated onto -Z, then translated.
        assert_approx_eq!(
            Vec3d::X.transform_point(m),
            vec3(0.0, 0.0, -2.0) + translation
        )
        .abs(1e-12);
    }

    #[test]
    fn from_rotation_matches_quat() {
        let q = Quat::from_rotation_xyz(0.3, -1.2, 2.2);
        assert_approx_eq!(Mat3d::from_rotation(q), q.to_mat3());
        assert_approx_eq!(Mat4d::from_rotation(q), q.to_mat4());
    }
}
