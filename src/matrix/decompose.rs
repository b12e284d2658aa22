//! Orthogonalization and matrix decompositions.

use crate::{traits::Real, Matrix, Quat, Vec3};

impl<T: Real, const N: usize> Matrix<T, N, N> {
    /// Makes the rows of the matrix mutually orthogonal, without changing their lengths'
    /// magnitudes.
    ///
    /// This performs the modified Gram-Schmidt process on the rows, in order: the first row is
    /// kept as-is, and every following row has its projection onto the preceding rows removed.
    /// Rows that end up with (nearly) zero length are left as they are, so linearly dependent
    /// inputs produce zero rows instead of NaNs.
    pub fn orthogonalize(self) -> Self {
        let mut rows = self.rows();
        for i in 0..N {
            for j in 0..i {
                let denom = rows[j].length2();
                if !denom.nearly_zero() {
                    let proj = rows[j] * (rows[i].dot(rows[j]) / denom);
                    rows[i] = rows[i] - proj;
                }
            }
        }
        Matrix::from_rows(rows)
    }

    /// Makes the rows of the matrix mutually orthogonal unit vectors.
    ///
    /// Like [`orthogonalize`][Self::orthogonalize], but each row is also normalized. Rows that
    /// degenerate to (nearly) zero length stay zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let skewed = Matrix::from_rows([
    ///     [2.0, 0.0],
    ///     [1.0, 1.0],
    /// ]);
    /// let ortho = skewed.orthonormalize();
    /// assert_approx_eq!(ortho, Mat2d::IDENTITY);
    /// ```
    pub fn orthonormalize(self) -> Self {
        let mut rows = self.rows();
        for i in 0..N {
            for j in 0..i {
                let proj = rows[j] * rows[i].dot(rows[j]);
                rows[i] = rows[i] - proj;
            }
            rows[i] = rows[i].normalize();
        }
        Matrix::from_rows(rows)
    }

    /// Decomposes the matrix into an orthogonal matrix `q` and an upper triangular matrix `r`
    /// such that `q * r` equals `self`.
    pub fn decompose_qr(self) -> (Self, Self) {
        // Orthonormalization works on rows; QR needs orthonormal columns.
        let q = self.transpose().orthonormalize().transpose();
        let r = Matrix::from_fn(|i, j| {
            if j >= i {
                q.column(i).dot(self.column(j))
            } else {
                T::ZERO
            }
        });
        (q, r)
    }

    /// Decomposes the matrix into a lower triangular matrix `l` and an orthogonal matrix `q`
    /// such that `l * q` equals `self`.
    pub fn decompose_lq(self) -> (Self, Self) {
        let q = self.orthonormalize();
        let l = Matrix::from_fn(|i, j| {
            if j <= i {
                self.row(i).dot(q.row(j))
            } else {
                T::ZERO
            }
        });
        (l, q)
    }
}

impl<T: Real> Matrix<T, 3, 3> {
    /// Decomposes a scale-rotation matrix into its per-axis scale and a rotation quaternion.
    ///
    /// Returns [`None`] if any scale factor is within the zero tolerance of 0; the rotation is
    /// not meaningful in that case. If the matrix has a negative determinant, the X scale carries
    /// the sign.
    pub fn decompose(&self) -> Option<(Vec3<T>, Quat<T>)> {
        let [r0, r1, r2] = self.rows();
        let mut scale = crate::vec3(r0.length(), r1.length(), r2.length());
        if self.determinant() < T::ZERO {
            scale.x = -scale.x;
        }
        if scale.x.nearly_zero() || scale.y.nearly_zero() || scale.z.nearly_zero() {
            return None;
        }

        let rotation = Matrix::from_rows([r0 / scale.x, r1 / scale.y, r2 / scale.z]);
        Some((scale, Quat::from_rotation_matrix(rotation)))
    }
}

impl<T: Real> Matrix<T, 4, 4> {
    /// Decomposes an affine transformation matrix into scale, rotation, and translation.
    ///
    /// This is the inverse of [`Mat4::affine_transformation`][Self::affine_transformation].
    /// Returns [`None`] if any scale factor is within the zero tolerance of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let m = Mat4::translation(1.0, 2.0, 3.0);
    /// let (scale, rotation, translation) = m.decompose().unwrap();
    /// assert_approx_eq!(scale, Vec3d::ONE);
    /// assert_approx_eq!(translation, vec3(1.0, 2.0, 3.0));
    /// assert_approx_eq!(rotation.dot(Quat::IDENTITY).abs(), 1.0);
    /// ```
    pub fn decompose(&self) -> Option<(Vec3<T>, Quat<T>, Vec3<T>)> {
        let translation = self.row(3).truncate();
        let linear: Matrix<T, 3, 3> = Matrix::from_fn(|row, col| self[(row, col)]);
        let (scale, rotation) = linear.decompose()?;
        Some((scale, rotation, translation))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use crate::{assert_approx_eq, vec3, Mat3, Mat3d, Mat4, Mat4d};

    use super::*;

    fn assert_orthonormal_rows<const N: usize>(mat: Matrix<f64, N, N>) {
        let rows = mat.rows();
        for i in 0..N {
            assert_approx_eq!(rows[i].length(), 1.0).abs(1e-12);
            for j in 0..i {
                assert_approx_eq!(rows[i].dot(rows[j]), 0.0).abs(1e-12);
            }
        }
    }

    #[test]
    fn orthogonalize_keeps_first_row() {
        let mat = Matrix::from_rows([[2.0, 0.0, 0.0], [1.0, 3.0, 0.0], [1.0, 1.0, 4.0]]);
        let ortho = mat.orthogonalize();
        assert_eq!(ortho.row(0), vec3(2.0, 0.0, 0.0));
        for i in 0..3 {
            for j in 0..i {
                assert_approx_eq!(ortho.row(i).dot(ortho.row(j)), 0.0).abs(1e-12);
            }
        }
    }

    #[test]
    fn orthonormalize_rows() {
        let mat = Matrix::from_rows([[2.0, 0.0, 0.0], [1.0, 3.0, 0.0], [1.0, 1.0, 4.0]]);
        assert_orthonormal_rows(mat.orthonormalize());

        let mat = Matrix::from_rows([
            [2.0, 0.0, 0.0, 1.0],
            [1.0, 3.0, 0.0, 0.0],
            [1.0, 1.0, 4.0, 0.0],
            [0.0, 1.0, 1.0, 5.0],
        ]);
        assert_orthonormal_rows(mat.orthonormalize());
    }

    #[test]
    fn orthonormalize_is_idempotent() {
        let mat = Matrix::from_rows([[2.0, 0.0, 0.0], [1.0, 3.0, 0.0], [1.0, 1.0, 4.0]]);
        let once = mat.orthonormalize();
        assert_approx_eq!(once.orthonormalize(), once).abs(1e-12);

        let rotation = Mat3::rotation_y(TAU / 8.0);
        assert_approx_eq!(rotation.orthonormalize(), rotation).abs(1e-12);
    }

    #[test]
    fn orthonormalize_error_grows_towards_later_rows() {
        // Nearly parallel rows force heavy cancellation. The first row is taken as-is, and
        // each following row inherits the round-off of all rows before it, so the residual
        // non-orthogonality grows with the row index.
        let eps = 1e-8;
        let mat = Matrix::from_rows([
            [1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0 + eps],
            [1.0, 1.0 + eps, 1.0],
        ]);
        let rows = mat.orthonormalize().rows();

        let early = rows[1].dot(rows[0]).abs();
        let late = rows[2].dot(rows[1]).abs();
        assert!(late >= early, "late residual {late} < early residual {early}");

        for row in rows {
            assert_approx_eq!(row.length(), 1.0).abs(1e-6);
        }
    }

    #[test]
    fn qr_reconstructs() {
        let mat = Matrix::from_rows([[2.0, 1.0, 1.0], [0.0, 3.0, 1.0], [1.0, 0.0, 4.0]]);
        let (q, r) = mat.decompose_qr();

        assert_approx_eq!(q * r, mat).abs(1e-12);
        assert_approx_eq!(q * q.transpose(), Mat3d::IDENTITY).abs(1e-12);
        for i in 0..3 {
            for j in 0..i {
                assert_eq!(r[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn lq_reconstructs() {
        let mat = Matrix::from_rows([[2.0, 1.0, 1.0], [0.0, 3.0, 1.0], [1.0, 0.0, 4.0]]);
        let (l, q) = mat.decompose_lq();

        assert_approx_eq!(l * q, mat).abs(1e-12);
        assert_approx_eq!(q * q.transpose(), Mat3d::IDENTITY).abs(1e-12);
        for i in 0..3 {
            for j in i + 1..3 {
                assert_eq!(l[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn decompose_3x3_round_trip() {
        let scale = vec3(2.0, 3.0, 4.0);
        let rotation = crate::Quat::from_rotation_y(TAU / 4.0);
        let mat = Mat3::scaling(scale.x, scale.y, scale.z) * rotation.to_mat3();

        let (s, q) = mat.decompose().unwrap();
        assert_approx_eq!(s, scale).abs(1e-12);
        // A quaternion and its negation encode the same rotation.
        assert_approx_eq!(q.dot(rotation).abs(), 1.0).abs(1e-9);
    }

    #[test]
    fn decompose_4x4_round_trip() {
        let scale = vec3(2.0, 3.0, 4.0);
        let rotation = crate::Quat::from_rotation_y(TAU / 4.0);
        let translation = vec3(1.0, 2.0, 3.0);
        let mat = Mat4::affine_transformation(scale, rotation, translation);

        let (s, q, t) = mat.decompose().unwrap();
        assert_approx_eq!(s, scale).abs(1e-12);
        assert_approx_eq!(t, translation).abs(1e-12);
        assert_approx_eq!(q.dot(rotation).abs(), 1.0).abs(1e-9);
        assert_approx_eq!(Mat4::affine_transformation(s, q, t), mat).abs(1e-9);
    }

    #[test]
    fn decompose_negative_determinant() {
        let mat = Mat3::scaling(-2.0, 3.0, 4.0);
        let (s, _) = mat.decompose().unwrap();
        assert_approx_eq!(s, vec3(-2.0, 3.0, 4.0)).abs(1e-12);
    }

    #[test]
    fn decompose_degenerate_scale() {
        assert!(Mat3d::ZERO.decompose().is_none());
        assert!(Mat3::scaling(1.0, 0.0, 1.0).decompose().is_none());
        assert!(Mat4d::ZERO.decompose().is_none());
        assert!(Mat4::scaling(1.0, 1.0, 1e-12).decompose().is_none());
    }
}
