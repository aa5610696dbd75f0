//! Square matrices for homogeneous transforms
//!
//! Matrices are row-major and act on row vectors: `v' = v * M`. The last row of
//! an affine matrix holds the translation. Coefficients are laid out in the order
//! a GPU expects when uploading with `transpose = false` into a column-major
//! shader matrix, so `coefficients()` can be uploaded without shuffling.

use crate::{Vector3, Vector4};

/// Square `N`x`N` matrix (row-major, row-vector convention)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<const N: usize> {
    rows: [[f64; N]; N],
}

/// Matrix acting on 3D homogeneous positions
pub type Matrix4 = Matrix<4>;
/// Matrix acting on 4D homogeneous positions
pub type Matrix5 = Matrix<5>;

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> Matrix<N> {
    /// Identity matrix
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { 1.0 } else { 0.0 })
    }

    /// Build from explicit rows
    pub const fn from_rows(rows: [[f64; N]; N]) -> Self {
        Self { rows }
    }

    /// Build by evaluating `f(row, col)` for every coefficient
    pub fn from_fn(f: impl Fn(usize, usize) -> f64) -> Self {
        let mut rows = [[0.0; N]; N];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, coefficient) in row.iter_mut().enumerate() {
                *coefficient = f(r, c);
            }
        }
        Self { rows }
    }

    /// All coefficients, row after row
    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        self.rows.as_flattened()
    }

    /// One row as an array
    #[inline]
    pub fn row(&self, row: usize) -> [f64; N] {
        self.rows[row]
    }

    /// Swap rows and columns
    pub fn transposed(&self) -> Self {
        Self::from_fn(|row, col| self.rows[col][row])
    }

    /// Coefficient-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.coefficients()
            .iter()
            .zip(other.coefficients())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Matrix4 {
    /// Flat single-precision coefficients ready for a uniform upload
    pub fn to_uniform(&self) -> [f32; 16] {
        let mut out = [0.0f32; 16];
        for (dst, src) in out.iter_mut().zip(self.coefficients()) {
            *dst = *src as f32;
        }
        out
    }
}

impl<const N: usize> std::ops::Index<(usize, usize)> for Matrix<N> {
    type Output = f64;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.rows[row][col]
    }
}

impl<const N: usize> std::ops::IndexMut<(usize, usize)> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.rows[row][col]
    }
}

/// Multiply two matrices: `result = a * b`
///
/// With row vectors `v * (a * b)` applies `a` first, then `b`.
impl<const N: usize> std::ops::Mul for Matrix<N> {
    type Output = Self;

    #[allow(clippy::needless_range_loop)]
    fn mul(self, rhs: Self) -> Self {
        let mut rows = [[0.0f64; N]; N];
        for i in 0..N {
            for j in 0..N {
                let mut sum = 0.0;
                for k in 0..N {
                    sum += self.rows[i][k] * rhs.rows[k][j];
                }
                rows[i][j] = sum;
            }
        }
        Self { rows }
    }
}

/// Row-vector times square matrix for a vector of the same arity
fn mul_row<const N: usize>(v: [f64; N], m: &Matrix<N>) -> [f64; N] {
    let mut out = [0.0; N];
    for (col, dst) in out.iter_mut().enumerate() {
        *dst = v.iter().enumerate().map(|(row, c)| c * m.rows[row][col]).sum();
    }
    out
}

/// Affine transform of a 4D position
///
/// The position is extended by a homogeneous 1 so the last matrix row acts as a
/// translation. The resulting homogeneous component is dropped without a divide.
impl std::ops::Mul<Matrix5> for Vector4 {
    type Output = Vector4;

    fn mul(self, m: Matrix5) -> Vector4 {
        let [x, y, z, q] = self.to_array();
        let [x, y, z, q, _] = mul_row([x, y, z, q, 1.0], &m);
        Vector4::new(x, y, z, q)
    }
}

/// Linear transform of a homogeneous 3D position, no divide
impl std::ops::Mul<Matrix4> for Vector4 {
    type Output = Vector4;

    fn mul(self, m: Matrix4) -> Vector4 {
        Vector4::from_array(mul_row(self.to_array(), &m))
    }
}

/// Projective transform of a 3D point
///
/// The point is extended by w = 1 and the result is divided by the resulting w.
impl std::ops::Mul<Matrix4> for Vector3 {
    type Output = Vector3;

    fn mul(self, m: Matrix4) -> Vector3 {
        let [x, y, z] = self.to_array();
        let [x, y, z, w] = mul_row([x, y, z, 1.0], &m);
        Vector3::new(x / w, y / w, z / w)
    }
}
