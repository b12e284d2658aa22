use std::{array, fmt};

use crate::{Number, One, Vector, Zero};

mod decompose;
mod ops;
mod reduce;
mod transform;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`] can be used to create a
///   matrix with a specified diagonal and zero outside of its diagonal.
/// - [`Mat3`] and [`Mat4`] have a family of transformation constructors (scaling, rotation,
///   translation, view and projection matrices).
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] is a square matrix with 1 on its diagonal and 0 everywhere else.
///
/// # Transformation convention
///
/// Vectors are *row* vectors and are transformed by multiplying on the left of a matrix
/// (`v * m`). Consequently, translation lives in the last *row* of a homogeneous transformation
/// matrix, and `a * b` is the transformation that applies `a` first, then `b`.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use linalg64::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(|v| f(v))))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns the row at `index` as a [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.row(1), vec3(3, 4, 5));
    /// ```
    #[inline]
    pub fn row(&self, index: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[index].into()
    }

    /// Replaces the row at `index`.
    #[inline]
    pub fn set_row<U: Into<Vector<T, C>>>(&mut self, index: usize, row: U) {
        self.0[index] = row.into().into_array();
    }

    /// Returns the column at `index` as a [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.column(1), vec2(1, 4));
    /// ```
    #[inline]
    pub fn column(&self, index: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][index])
    }

    /// Returns all rows of the matrix as an array of [`Vector`]s.
    pub fn rows(&self) -> [Vector<T, C>; R]
    where
        T: Copy,
    {
        array::from_fn(|row| self.row(row))
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    // `[T::ZERO; C]` is allowed without `T: Copy` because `T::ZERO` is a constant; repeating the
    // resulting row requires routing it through a constant as well.
    const ZERO_ROW: [T; C] = [T::ZERO; C];

    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Self::ZERO_ROW; R]);

    /// Grows or shrinks the matrix to a different size.
    ///
    /// Overlapping elements are kept, elements outside the old bounds are set to 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use linalg64::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.resize::<1, 3>(), Matrix::from_rows([
    ///     [1, 2, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                self.0[row][col]
            } else {
                T::ZERO
            }
        })
    }
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut elems = Self::ZERO.0;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            elems[i][i] = T::ONE;
            i += 1;
        }
        Self(elems)
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        array::from_fn(|i| self[(i, i)]).into()
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let mut iter = diag.into().into_array().into_iter();
        let mut this = Self::ZERO;
        for i in 0..N {
            this[(i, i)] = iter.next().unwrap();
        }
        this
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3d::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }

    /// Transposes the square matrix in place.
    ///
    /// Unlike [`Matrix::transpose`], this mutates `self` and avoids building a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let mut mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// mat.transpose_in_place();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 2],
    ///     [1, 3],
    /// ]));
    /// ```
    pub fn transpose_in_place(&mut self)
    where
        T: Copy,
    {
        for row in 0..N {
            for col in row + 1..N {
                let tmp = self.0[row][col];
                self.0[row][col] = self.0[col][row];
                self.0[col][row] = tmp;
            }
        }
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Inverts this 2x2 matrix.
    ///
    /// If `self` is not invertible (its [`determinant()`] is zero), [`Matrix::ZERO`] is returned.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// assert_eq!(Mat2d::IDENTITY.invert(), Mat2d::IDENTITY);
    /// assert_eq!(Mat2d::ZERO.invert(), Mat2d::ZERO);
    /// ```
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            return Self::ZERO;
        }

        let [[a, b], [c, d]] = self.0;
        Matrix::from_rows([[d, -b], [-c, a]]) * (T::ONE / det)
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Inverts this 3x3 matrix.
    ///
    /// If `self` is not invertible (its [`determinant()`] is zero), [`Matrix::ZERO`] is returned.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// assert_eq!(Mat3d::IDENTITY.invert(), Mat3d::IDENTITY);
    /// assert_eq!(Mat3d::ZERO.invert(), Mat3d::ZERO);
    /// ```
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            return Self::ZERO;
        }

        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        let adjugate = Matrix::from_rows([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ]);
        adjugate * (T::ONE / det)
    }

    /// Extends this 3x3 matrix to a 4x4 matrix.
    ///
    /// The 3x3 part is copied verbatim; the new row and column are taken from the identity
    /// matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// assert_eq!(Mat3d::IDENTITY.to_homogeneous(), Mat4d::IDENTITY);
    /// ```
    pub fn to_homogeneous(&self) -> Matrix<T, 4, 4> {
        Matrix::from_fn(|row, col| {
            if row < 3 && col < 3 {
                self[(row, col)]
            } else if row == col {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let m = &self.0;
        let s0 = m[0][0] * m[1][1] - m[1][0] * m[0][1];
        let s1 = m[0][0] * m[1][2] - m[1][0] * m[0][2];
        let s2 = m[0][0] * m[1][3] - m[1][0] * m[0][3];
        let s3 = m[0][1] * m[1][2] - m[1][1] * m[0][2];
        let s4 = m[0][1] * m[1][3] - m[1][1] * m[0][3];
        let s5 = m[0][2] * m[1][3] - m[1][2] * m[0][3];

        let c5 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let c4 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let c3 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let c2 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let c1 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let c0 = m[2][0] * m[3][1] - m[3][0] * m[2][1];

        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Inverts this 4x4 matrix.
    ///
    /// If `self` is not invertible (its [`determinant()`] is zero), [`Matrix::ZERO`] is returned.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// assert_eq!(Mat4d::IDENTITY.invert(), Mat4d::IDENTITY);
    /// assert_eq!(Mat4d::ZERO.invert(), Mat4d::ZERO);
    ///
    /// let m = Mat4::translation(1.0, 2.0, 3.0);
    /// assert_eq!(m.invert(), Mat4::translation(-1.0, -2.0, -3.0));
    /// ```
    pub fn invert(&self) -> Self {
        let m = &self.0;
        // 2x2 minors of the top and bottom halves; the determinant and every cofactor are built
        // from these.
        let s0 = m[0][0] * m[1][1] - m[1][0] * m[0][1];
        let s1 = m[0][0] * m[1][2] - m[1][0] * m[0][2];
        let s2 = m[0][0] * m[1][3] - m[1][0] * m[0][3];
        let s3 = m[0][1] * m[1][2] - m[1][1] * m[0][2];
        let s4 = m[0][1] * m[1][3] - m[1][1] * m[0][3];
        let s5 = m[0][2] * m[1][3] - m[1][2] * m[0][3];

        let c5 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let c4 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let c3 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let c2 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let c1 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let c0 = m[2][0] * m[3][1] - m[3][0] * m[2][1];

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if det == T::ZERO {
            return Self::ZERO;
        }
        let inv_det = T::ONE / det;

        Matrix::from_rows([
            [
                (m[1][1] * c5 - m[1][2] * c4 + m[1][3] * c3) * inv_det,
                (-m[0][1] * c5 + m[0][2] * c4 - m[0][3] * c3) * inv_det,
                (m[3][1] * s5 - m[3][2] * s4 + m[3][3] * s3) * inv_det,
                (-m[2][1] * s5 + m[2][2] * s4 - m[2][3] * s3) * inv_det,
            ],
            [
                (-m[1][0] * c5 + m[1][2] * c2 - m[1][3] * c1) * inv_det,
                (m[0][0] * c5 - m[0][2] * c2 + m[0][3] * c1) * inv_det,
                (-m[3][0] * s5 + m[3][2] * s2 - m[3][3] * s1) * inv_det,
                (m[2][0] * s5 - m[2][2] * s2 + m[2][3] * s1) * inv_det,
            ],
            [
                (m[1][0] * c4 - m[1][1] * c2 + m[1][3] * c0) * inv_det,
                (-m[0][0] * c4 + m[0][1] * c2 - m[0][3] * c0) * inv_det,
                (m[3][0] * s4 - m[3][1] * s2 + m[3][3] * s0) * inv_det,
                (-m[2][0] * s4 + m[2][1] * s2 - m[2][3] * s0) * inv_det,
            ],
            [
                (-m[1][0] * c3 + m[1][1] * c1 - m[1][2] * c0) * inv_det,
                (m[0][0] * c3 - m[0][1] * c1 + m[0][2] * c0) * inv_det,
                (-m[3][0] * s3 + m[3][1] * s1 - m[3][2] * s0) * inv_det,
                (m[2][0] * s3 - m[2][1] * s1 + m[2][2] * s0) * inv_det,
            ],
        ])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use crate::{assert_approx_eq, vec2, vec4};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::<i32, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::<i32, 2, 3>::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 0],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
    }

    #[test]
    fn row_column_access() {
        let mat = Matrix::from_rows([[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mat.row(0), [0, 1, 2]);
        assert_eq!(mat.row(1), [3, 4, 5]);
        assert_eq!(mat.column(2), vec2(2, 5));
        assert_eq!(mat.rows(), [mat.row(0), mat.row(1)]);

        let mut mat = mat;
        mat.set_row(0, [7, 8, 9]);
        assert_eq!(mat.row(0), [7, 8, 9]);
    }

    #[test]
    fn vec_mat_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = vec * mat;
        assert_eq!(out, [4 * 0 + 5 * 2, 4 * 1 + 5 * 3]);

        assert_eq!(vec * Mat2::IDENTITY, vec);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2d::ZERO.determinant(), 0.0);
        assert_eq!(Mat3d::ZERO.determinant(), 0.0);
        assert_eq!(Mat4d::ZERO.determinant(), 0.0);
        assert_eq!(Mat2d::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3d::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4d::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        assert_eq!(Matrix::from_diagonal([1.0, 2.0, 3.0, 4.0]).determinant(), 24.0);
        assert_approx_eq!(Mat4d::rotation_y(TAU / 8.0).determinant(), 1.0);
        assert_eq!(Mat4::translation(5.0, -3.0, 2.0).determinant(), 1.0);
    }

    #[test]
    fn invert_round_trip() {
        #[rustfmt::skip]
        let m2 = Matrix::from_rows([
            [3.0, 1.0],
            [2.0, 4.0],
        ]);
        assert_approx_eq!(m2 * m2.invert(), Mat2d::IDENTITY).abs(1e-12);

        #[rustfmt::skip]
        let m3 = Matrix::from_rows([
            [-2.0, -1.0,  2.0],
            [ 2.0,  1.0,  4.0],
            [-3.0,  3.0, -1.0],
        ]);
        assert_approx_eq!(m3 * m3.invert(), Mat3d::IDENTITY).abs(1e-12);
        assert_approx_eq!(m3.invert() * m3, Mat3d::IDENTITY).abs(1e-12);

        let m4 = Mat4::scaling(2.0, 3.0, 4.0)
            * Mat4::rotation_z(TAU / 6.0)
            * Mat4::translation(1.0, -2.0, 3.0);
        assert_approx_eq!(m4 * m4.invert(), Mat4d::IDENTITY).abs(1e-12);
        assert_approx_eq!(m4.invert() * m4, Mat4d::IDENTITY).abs(1e-12);
    }

    #[test]
    fn invert_singular_yields_zero() {
        #[rustfmt::skip]
        let singular = Matrix::from_rows([
            [1.0, 2.0],
            [2.0, 4.0],
        ]);
        assert_eq!(singular.invert(), Mat2d::ZERO);

        #[rustfmt::skip]
        let singular = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0],
            [0.0, 1.0, 0.0],
        ]);
        assert_eq!(singular.invert(), Mat3d::ZERO);

        let singular = Mat4d::from_diagonal(vec4(1.0, 2.0, 0.0, 3.0));
        assert_eq!(singular.invert(), Mat4d::ZERO);
    }

    #[test]
    fn transpose_in_place() {
        let mut mat = Matrix::from_rows([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        let transposed = mat.transpose();
        mat.transpose_in_place();
        assert_eq!(mat, transposed);
        mat.transpose_in_place();
        mat.transpose_in_place();
        assert_eq!(mat, transposed);
    }

    #[test]
    fn homogeneous() {
        let mat = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let h = mat.to_homogeneous();
        assert_eq!(h.row(0), vec4(1.0, 2.0, 3.0, 0.0));
        assert_eq!(h.row(3), vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Mat3d::IDENTITY.to_homogeneous(), Mat4d::IDENTITY);
    }
}
