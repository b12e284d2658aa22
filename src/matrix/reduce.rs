//! Gaussian elimination and row reduction.
//!
//! All operations in this module use the zero tolerance of the element type for pivot selection
//! and return the partially reduced matrix when they run out of usable pivot columns, rather than
//! panicking on singular input.

use crate::{traits::Real, Matrix};

impl<T: Real, const N: usize> Matrix<T, N, N> {
    /// Reduces the matrix to an upper triangular form by eliminating elements below the pivots.
    ///
    /// Rows are swapped as needed but not rescaled, so the pivots keep their original magnitude.
    pub fn upper_triangular_form(self) -> Self {
        let mut mat = self;
        let mut lead = 0;
        for r in 0..N {
            if lead == N {
                return mat;
            }
            let mut i = r;
            while mat.0[i][lead].nearly_zero() {
                i += 1;
                if i == N {
                    i = r;
                    lead += 1;
                    if lead == N {
                        return mat;
                    }
                }
            }
            mat.0.swap(i, r);

            let pivot = mat.0[r][lead];
            for below in r + 1..N {
                let factor = mat.0[below][lead] / pivot;
                for c in 0..N {
                    mat.0[below][c] = mat.0[below][c] - factor * mat.0[r][c];
                }
            }
            lead += 1;
        }
        mat
    }

    /// Reduces the matrix to a lower triangular form by eliminating elements above the pivots.
    ///
    /// This is the mirror image of [`upper_triangular_form`][Self::upper_triangular_form]: it
    /// walks the rows and columns from the bottom right corner towards the top left.
    pub fn lower_triangular_form(self) -> Self {
        let mut mat = self;
        // `lead` is one past the active column so that the index never underflows.
        let mut lead = N;
        for row in 0..N {
            let r = N - 1 - row;
            if lead == 0 {
                return mat;
            }
            let mut col = lead - 1;
            let mut i = r;
            while mat.0[i][col].nearly_zero() {
                if i == 0 {
                    i = r;
                    lead -= 1;
                    if lead == 0 {
                        return mat;
                    }
                    col = lead - 1;
                } else {
                    i -= 1;
                }
            }
            mat.0.swap(i, r);

            let pivot = mat.0[r][col];
            for above in 0..r {
                let factor = mat.0[above][col] / pivot;
                for c in 0..N {
                    mat.0[above][c] = mat.0[above][c] - factor * mat.0[r][c];
                }
            }
            lead -= 1;
        }
        mat
    }

    /// Reduces the matrix to row echelon form.
    ///
    /// Pivot rows are scaled so every leading element is 1, and elements below the pivots are
    /// eliminated. Singular matrices yield a partial result with trailing all-zero rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg64::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 4.0],
    ///     [1.0, 3.0],
    /// ]);
    /// assert_approx_eq!(mat.row_echelon_form(), Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [0.0, 1.0],
    /// ]));
    /// ```
    pub fn row_echelon_form(self) -> Self {
        self.reduce(false)
    }

    /// Reduces the matrix to reduced row echelon form.
    ///
    /// Like [`row_echelon_form`][Self::row_echelon_form], but elements *above* the pivots are
    /// eliminated as well. Invertible matrices reduce to the identity.
    pub fn reduced_row_echelon_form(self) -> Self {
        self.reduce(true)
    }

    fn reduce(self, eliminate_above: bool) -> Self {
        let mut mat = self;
        let mut lead = 0;
        for r in 0..N {
            if lead == N {
                return mat;
            }
            let mut i = r;
            while mat.0[i][lead].nearly_zero() {
                i += 1;
                if i == N {
                    i = r;
                    lead += 1;
                    if lead == N {
                        return mat;
                    }
                }
            }
            mat.0.swap(i, r);

            let pivot = mat.0[r][lead];
            for c in 0..N {
                mat.0[r][c] = mat.0[r][c] / pivot;
            }
            for other in 0..N {
                if other == r || (!eliminate_above && other < r) {
                    continue;
                }
                let factor = mat.0[other][lead];
                for c in 0..N {
                    mat.0[other][c] = mat.0[other][c] - factor * mat.0[r][c];
                }
            }
            lead += 1;
        }
        mat
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, Mat3d, Matrix};

    #[test]
    fn ref_partial_result_on_singular_input() {
        let mat = Matrix::from_rows([
            [2.0, 4.0, 6.0, 8.0],
            [1.0, 3.0, 5.0, 7.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 2.0],
        ]);
        let expected = Matrix::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [0.0, 1.0, 2.0, 3.0],
            [0.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        assert_approx_eq!(mat.row_echelon_form(), expected);
    }

    #[test]
    fn rref_of_invertible_is_identity() {
        let mat = Matrix::from_rows([[2.0, 1.0, 1.0], [0.0, 3.0, 1.0], [1.0, 0.0, 4.0]]);
        assert_approx_eq!(mat.reduced_row_echelon_form(), Mat3d::IDENTITY).abs(1e-12);
    }

    #[test]
    fn ref_leading_ones() {
        let mat = Matrix::from_rows([[2.0, 1.0, 1.0], [4.0, 3.0, 1.0], [1.0, 0.0, 4.0]]);
        let reduced = mat.row_echelon_form();
        for i in 0..3 {
            assert_approx_eq!(reduced[(i, i)], 1.0).abs(1e-12);
            for j in 0..i {
                assert_approx_eq!(reduced[(i, j)], 0.0).abs(1e-12);
            }
        }
    }

    #[test]
    fn upper_triangular() {
        let mat = Matrix::from_rows([[2.0, 1.0, 1.0], [4.0, 3.0, 1.0], [2.0, 2.0, 5.0]]);
        let upper = mat.upper_triangular_form();
        for i in 0..3 {
            for j in 0..i {
                assert_approx_eq!(upper[(i, j)], 0.0).abs(1e-12);
            }
        }
        // Elimination without scaling preserves the determinant (no swaps were needed here).
        assert_approx_eq!(upper.determinant(), mat.determinant()).abs(1e-9);
    }

    #[test]
    fn lower_triangular() {
        let mat = Matrix::from_rows([[2.0, 1.0, 1.0], [4.0, 3.0, 1.0], [2.0, 2.0, 5.0]]);
        let lower = mat.lower_triangular_form();
        for i in 0..3 {
            for j in i + 1..3 {
                assert_approx_eq!(lower[(i, j)], 0.0).abs(1e-12);
            }
        }
        assert_approx_eq!(lower.determinant(), mat.determinant()).abs(1e-9);
    }

    #[test]
    fn reduction_needs_row_swap() {
        let mat = Matrix::from_rows([[0.0, 1.0], [1.0, 0.0]]);
        assert_approx_eq!(mat.reduced_row_echelon_form(), Matrix::IDENTITY);
        let upper = mat.upper_triangular_form();
        assert_approx_eq!(upper[(1, 0)], 0.0);
    }
}
