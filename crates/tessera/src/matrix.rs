//! Square matrix storage, checked accessors, elementary row operations and
//! arithmetic shared by [`Mat3`](crate::Mat3) and [`Mat4`](crate::Mat4).
//!
//! # Layout
//!
//! Storage is column-major: the element at logical `(row, col)` lives at
//! linear index `col * N + row` (see [`Matrix::linear_index`]). This is the
//! order graphics APIs expect, so [`Matrix::as_slice`] and
//! [`Matrix::float_buffer`] hand out the backing memory without a transpose.
//! Nothing outside this module addresses storage directly.
//!
//! # Dual API
//!
//! Every mutating operation comes in two forms: a pure method returning a new
//! matrix (`scale_row`, `add_mat`, `mul_mat`, ...) and an `_in_place` method that
//! overwrites `self` and returns it for chaining. Checked variants return
//! `Result<_, MatError>` and validate every index before touching storage.

use crate::error::check_index;
use crate::{MatError, Scalar};
use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub};

/// `N`x`N` matrix, column-major storage.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct Matrix<S, const N: usize> {
    cols: [[S; N]; N],
}

impl<S: Scalar, const N: usize> Matrix<S, N> {
    /// Number of rows (and columns).
    pub const SIZE: usize = N;

    /// Linear storage index of logical `(row, col)`.
    #[inline]
    pub const fn linear_index(row: usize, col: usize) -> usize {
        col * N + row
    }

    #[inline]
    pub fn identity() -> Self {
        let mut cols = [[S::ZERO; N]; N];
        for (i, col) in cols.iter_mut().enumerate() {
            col[i] = S::ONE;
        }
        Self { cols }
    }

    #[inline]
    pub fn zero() -> Self {
        Self { cols: [[S::ZERO; N]; N] }
    }

    /// Diagonal matrix with `d` on the main diagonal.
    pub fn from_diagonal(d: [S; N]) -> Self {
        let mut m = Self::zero();
        for (i, v) in d.into_iter().enumerate() {
            m.cols[i][i] = v;
        }
        m
    }

    /// Construct from column arrays, `cols[c][r]`.
    #[inline]
    pub const fn from_cols_array(cols: [[S; N]; N]) -> Self {
        Self { cols }
    }

    /// Construct from row arrays, `rows[r][c]`.
    pub fn from_rows(rows: [[S; N]; N]) -> Self {
        let mut m = Self::zero();
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                m.cols[c][r] = v;
            }
        }
        m
    }

    /// Construct from `N * N` scalars in column-major order.
    pub fn from_slice(data: &[S]) -> Result<Self, MatError> {
        if data.len() != N * N {
            return Err(MatError::LengthMismatch { expected: N * N, found: data.len() });
        }
        let mut m = Self::zero();
        m.as_mut_slice().copy_from_slice(data);
        Ok(m)
    }

    #[inline]
    pub fn to_cols_array(&self) -> [[S; N]; N] {
        self.cols
    }

    /// Backing storage, column-major.
    #[inline]
    pub fn as_slice(&self) -> &[S] {
        self.cols.as_flattened()
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [S] {
        self.cols.as_flattened_mut()
    }

    // Unchecked element access for internal loops whose indices are in range
    // by construction.
    #[inline(always)]
    pub(crate) fn at(&self, row: usize, col: usize) -> S {
        self.cols[col][row]
    }

    #[inline(always)]
    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut S {
        &mut self.cols[col][row]
    }

    // ------------------------------------------------------------------
    // Checked accessors
    // ------------------------------------------------------------------

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<S, MatError> {
        check_index("get", row, N)?;
        check_index("get", col, N)?;
        Ok(self.at(row, col))
    }

    /// Overwrite the element at `(row, col)`, returning `self` for chaining:
    ///
    /// ```
    /// # use tessera::Mat3;
    /// # fn main() -> Result<(), tessera::MatError> {
    /// let mut m = Mat3::<f32>::identity();
    /// m.set(0, 2, 5.0)?.set(1, 2, 7.0)?;
    /// assert_eq!(m.get(1, 2)?, 7.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn set(&mut self, row: usize, col: usize, value: S) -> Result<&mut Self, MatError> {
        check_index("set", row, N)?;
        check_index("set", col, N)?;
        *self.at_mut(row, col) = value;
        Ok(self)
    }

    /// Logical row `index` as a vector (`Vec3` for 3x3, `Vec4` for 4x4, or a
    /// plain array).
    pub fn row<V: From<[S; N]>>(&self, index: usize) -> Result<V, MatError> {
        check_index("row", index, N)?;
        Ok(V::from(self.row_array(index)))
    }

    /// Copy logical row `index` into `out`.
    pub fn row_into<V: From<[S; N]>>(&self, index: usize, out: &mut V) -> Result<(), MatError> {
        *out = self.row(index)?;
        Ok(())
    }

    /// Column `index` as a vector.
    pub fn col<V: From<[S; N]>>(&self, index: usize) -> Result<V, MatError> {
        check_index("col", index, N)?;
        Ok(V::from(self.cols[index]))
    }

    #[inline]
    fn row_array(&self, index: usize) -> [S; N] {
        core::array::from_fn(|c| self.cols[c][index])
    }

    #[inline]
    pub fn diagonal(&self) -> [S; N] {
        core::array::from_fn(|i| self.cols[i][i])
    }

    #[inline]
    pub fn trace(&self) -> S {
        self.diagonal().into_iter().fold(S::ZERO, |acc, v| acc + v)
    }

    // ------------------------------------------------------------------
    // Elementary row operations
    // ------------------------------------------------------------------

    /// Swap rows `r1` and `r2`. Applying it twice restores the matrix.
    pub fn exchange_rows(&self, r1: usize, r2: usize) -> Result<Self, MatError> {
        let mut out = *self;
        out.exchange_rows_in_place(r1, r2)?;
        Ok(out)
    }

    pub fn exchange_rows_in_place(&mut self, r1: usize, r2: usize) -> Result<&mut Self, MatError> {
        check_index("exchange_rows", r1, N)?;
        check_index("exchange_rows", r2, N)?;
        for col in self.cols.iter_mut() {
            col.swap(r1, r2);
        }
        Ok(self)
    }

    /// Multiply every element of `row` by `factor`.
    pub fn scale_row(&self, row: usize, factor: S) -> Result<Self, MatError> {
        let mut out = *self;
        out.scale_row_in_place(row, factor)?;
        Ok(out)
    }

    pub fn scale_row_in_place(&mut self, row: usize, factor: S) -> Result<&mut Self, MatError> {
        check_index("scale_row", row, N)?;
        for col in self.cols.iter_mut() {
            col[row] *= factor;
        }
        Ok(self)
    }

    /// Row `target` of the result becomes `row(src) + factor * row(dst)`.
    ///
    /// Both source rows are read from `self` before anything is written, so
    /// `target` may coincide with either of them.
    pub fn add_row_scaled(
        &self,
        src: usize,
        dst: usize,
        target: usize,
        factor: S,
    ) -> Result<Self, MatError> {
        let mut out = *self;
        out.add_row_scaled_in_place(src, dst, target, factor)?;
        Ok(out)
    }

    pub fn add_row_scaled_in_place(
        &mut self,
        src: usize,
        dst: usize,
        target: usize,
        factor: S,
    ) -> Result<&mut Self, MatError> {
        check_index("add_row_scaled", src, N)?;
        check_index("add_row_scaled", dst, N)?;
        check_index("add_row_scaled", target, N)?;
        let a = self.row_array(src);
        let b = self.row_array(dst);
        for (c, col) in self.cols.iter_mut().enumerate() {
            col[target] = a[c] + factor * b[c];
        }
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    /// Element-wise sum.
    #[inline]
    pub fn add_mat(&self, rhs: &Self) -> Self {
        let mut out = *self;
        out.add_in_place(rhs);
        out
    }

    pub fn add_in_place(&mut self, rhs: &Self) -> &mut Self {
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a += b;
        }
        self
    }

    /// Multiply every element by `k`.
    #[inline]
    pub fn scale(&self, k: S) -> Self {
        let mut out = *self;
        out.scale_in_place(k);
        out
    }

    pub fn scale_in_place(&mut self, k: S) -> &mut Self {
        for a in self.as_mut_slice() {
            *a *= k;
        }
        self
    }

    /// Matrix product `self * rhs`.
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        let mut out = Self::zero();
        for c in 0..N {
            for r in 0..N {
                let mut sum = S::ZERO;
                for k in 0..N {
                    sum += self.at(r, k) * rhs.at(k, c);
                }
                out.cols[c][r] = sum;
            }
        }
        out
    }

    /// `self = self * rhs`, computed against a snapshot of `self`, so
    /// squaring through a copy (`let b = m; m.mul_mat_in_place(&b)`) is exact.
    pub fn mul_mat_in_place(&mut self, rhs: &Self) -> &mut Self {
        *self = self.mul_mat(rhs);
        self
    }

    /// `self = lhs * self`.
    pub fn pre_mul_mat_in_place(&mut self, lhs: &Self) -> &mut Self {
        *self = lhs.mul_mat(self);
        self
    }

    /// Matrix-vector product for a vector of matching dimension.
    pub fn mul_vec<V>(&self, v: V) -> V
    where
        V: From<[S; N]> + Into<[S; N]>,
    {
        let v: [S; N] = v.into();
        let mut out = [S::ZERO; N];
        for (c, &vc) in v.iter().enumerate() {
            for (r, o) in out.iter_mut().enumerate() {
                *o += self.cols[c][r] * vc;
            }
        }
        V::from(out)
    }

    pub fn transpose(&self) -> Self {
        let mut out = *self;
        out.transpose_in_place();
        out
    }

    pub fn transpose_in_place(&mut self) -> &mut Self {
        for r in 0..N {
            for c in (r + 1)..N {
                let upper = self.cols[c][r];
                self.cols[c][r] = self.cols[r][c];
                self.cols[r][c] = upper;
            }
        }
        self
    }

    // ------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------

    /// Every element within `eps` of its counterpart.
    pub fn abs_diff_eq(&self, other: &Self, eps: S) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(&a, &b)| (a - b).abs() <= eps)
    }

    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|v| v.is_finite())
    }
}

impl<S: Scalar, const N: usize> Default for Matrix<S, N> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Indexes by `(row, col)`.
///
/// # Panics
///
/// Panics if either index is `>= N`. Use [`Matrix::get`] for a checked read.
impl<S: Scalar, const N: usize> Index<(usize, usize)> for Matrix<S, N> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        assert!(row < N && col < N, "index ({row}, {col}) out of bounds for {N}x{N} matrix");
        &self.cols[col][row]
    }
}

impl<S: Scalar, const N: usize> IndexMut<(usize, usize)> for Matrix<S, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut S {
        assert!(row < N && col < N, "index ({row}, {col}) out of bounds for {N}x{N} matrix");
        &mut self.cols[col][row]
    }
}

impl<S: Scalar, const N: usize> Add for Matrix<S, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.add_mat(&rhs)
    }
}

impl<S: Scalar, const N: usize> Sub for Matrix<S, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.add_mat(&rhs.scale(-S::ONE))
    }
}

impl<S: Scalar, const N: usize> Neg for Matrix<S, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.scale(-S::ONE)
    }
}

impl<S: Scalar, const N: usize> Mul<S> for Matrix<S, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        self.scale(rhs)
    }
}

impl<S: Scalar, const N: usize> Mul for Matrix<S, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl<S: Scalar, const N: usize> AddAssign for Matrix<S, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(&rhs);
    }
}

impl<S: Scalar, const N: usize> MulAssign<S> for Matrix<S, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        self.scale_in_place(rhs);
    }
}

impl<S: Scalar, const N: usize> MulAssign for Matrix<S, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.mul_mat_in_place(&rhs);
    }
}

/// Row-major text grid, one row per line.
impl<S: Scalar, const N: usize> fmt::Display for Matrix<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            f.write_str("[")?;
            for c in 0..N {
                if c > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(&self.at(r, c), f)?;
            }
            f.write_str("]")?;
            if r + 1 < N {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Matrix;
    use crate::Scalar;
    use core::fmt;
    use core::marker::PhantomData;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // Flat column-major tuple of N * N scalars, the same order as the buffer view.
    impl<S: Scalar + Serialize, const N: usize> Serialize for Matrix<S, N> {
        fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
            let mut t = serializer.serialize_tuple(N * N)?;
            for v in self.as_slice() {
                t.serialize_element(v)?;
            }
            t.end()
        }
    }

    impl<'de, S: Scalar + Deserialize<'de>, const N: usize> Deserialize<'de> for Matrix<S, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct ColumnMajor<S, const N: usize>(PhantomData<S>);

            impl<'de, S: Scalar + Deserialize<'de>, const N: usize> Visitor<'de> for ColumnMajor<S, N> {
                type Value = Matrix<S, N>;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{} column-major scalars", N * N)
                }

                fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                    let mut m = Matrix::zero();
                    for (i, slot) in m.as_mut_slice().iter_mut().enumerate() {
                        *slot = seq
                            .next_element()?
                            .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                    }
                    Ok(m)
                }
            }

            deserializer.deserialize_tuple(N * N, ColumnMajor::<S, N>(PhantomData))
        }
    }
}
