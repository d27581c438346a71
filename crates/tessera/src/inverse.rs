//! Determinant by cofactor expansion and inversion by adjugate.
//!
//! Expansion runs along row 0. A 4x4 expands into 3x3 minors, which expand
//! into closed-form 2x2 determinants. Inversion divides the adjugate by the
//! determinant and reports a singular input as `None`; the threshold is a
//! [`Tolerance`] rather than a fixed constant.

use crate::error::check_index;
use crate::{MatError, Matrix, Scalar};

/// Sizes whose minors can be evaluated: the determinant of the submatrix
/// left after deleting one row and one column.
pub trait Minors<S> {
    /// Minor at `(row, col)`. Both indices must be `< N`.
    fn minor(&self, row: usize, col: usize) -> S;
}

/// Threshold below which `|det|` counts as zero.
///
/// A relative tolerance scales `epsilon` by the product of the matrix's row
/// absolute sums, which bounds `|det|` and tracks its N-th power growth, so
/// `diag(1e-6)` stays invertible. An absolute tolerance compares `|det|`
/// against `epsilon` directly. The default is relative at machine epsilon.
///
/// A NaN or infinite determinant is always singular.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance<S> {
    epsilon: S,
    relative: bool,
}

impl<S: Scalar> Tolerance<S> {
    /// Absolute tolerance of `|epsilon|`. A NaN epsilon becomes zero.
    #[inline]
    pub fn new(epsilon: S) -> Self {
        Self { epsilon: clamp_epsilon(epsilon), relative: false }
    }

    /// Tolerance of `|epsilon|` times the matrix's magnitude.
    #[inline]
    pub fn relative(epsilon: S) -> Self {
        Self { epsilon: clamp_epsilon(epsilon), relative: true }
    }

    /// Only an exactly zero (or non-finite) determinant is singular.
    #[inline]
    pub fn exact() -> Self {
        Self { epsilon: S::ZERO, relative: false }
    }

    #[inline]
    pub fn epsilon(&self) -> S {
        self.epsilon
    }

    #[inline]
    pub fn is_relative(&self) -> bool {
        self.relative
    }

    /// Cutoff for a determinant of a matrix whose magnitude is `scale`.
    /// `scale` is ignored by an absolute tolerance.
    #[inline]
    pub fn threshold(&self, scale: S) -> S {
        if self.relative { self.epsilon * scale } else { self.epsilon }
    }

    /// `|value| <= threshold(scale)`, or `value` is not finite.
    #[inline]
    pub fn is_negligible(&self, value: S, scale: S) -> bool {
        !value.is_finite() || !(value.abs() > self.threshold(scale))
    }
}

impl<S: Scalar> Default for Tolerance<S> {
    fn default() -> Self {
        Self::relative(S::EPSILON)
    }
}

// `Scalar::max` returns its argument when `self` is NaN.
#[inline]
fn clamp_epsilon<S: Scalar>(epsilon: S) -> S {
    epsilon.abs().max(S::ZERO)
}

impl<S: Scalar, const N: usize> Matrix<S, N>
where
    Self: Minors<S>,
{
    #[inline]
    fn cofactor_at(&self, row: usize, col: usize) -> S {
        let m = self.minor(row, col);
        if (row + col) % 2 == 0 { m } else { -m }
    }

    /// Signed minor `(-1)^(row + col) * minor(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<S, MatError> {
        check_index("cofactor", row, N)?;
        check_index("cofactor", col, N)?;
        Ok(self.cofactor_at(row, col))
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> S {
        (0..N).fold(S::ZERO, |acc, c| acc + self.at(0, c) * self.cofactor_at(0, c))
    }

    /// Product of the rows' absolute sums. Bounds `|det|` and every term of
    /// its cofactor expansion.
    pub fn magnitude(&self) -> S {
        (0..N).fold(S::ONE, |acc, r| {
            acc * (0..N).fold(S::ZERO, |sum, c| sum + self.at(r, c).abs())
        })
    }

    /// Transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let mut adj = Self::zero();
        for r in 0..N {
            for c in 0..N {
                *adj.at_mut(c, r) = self.cofactor_at(r, c);
            }
        }
        adj
    }

    #[inline]
    pub fn is_singular(&self) -> bool {
        self.is_singular_with(Tolerance::default())
    }

    #[inline]
    pub fn is_singular_with(&self, tol: Tolerance<S>) -> bool {
        tol.is_negligible(self.determinant(), self.magnitude())
    }

    /// Inverse, or `None` if the matrix is singular under the default
    /// [`Tolerance`].
    #[inline]
    pub fn try_inverse(&self) -> Option<Self> {
        self.try_inverse_with(Tolerance::default())
    }

    /// Inverse, or `None` if `|det|` is within `tol` of zero or not finite.
    pub fn try_inverse_with(&self, tol: Tolerance<S>) -> Option<Self> {
        let det = self.determinant();
        let scale = self.magnitude();
        if tol.is_negligible(det, scale) {
            tracing::trace!(
                determinant = det.to_f64(),
                threshold = tol.threshold(scale).to_f64(),
                "singular matrix"
            );
            return None;
        }
        let mut inv = self.adjugate();
        for r in 0..N {
            for c in 0..N {
                let adj = inv.at(r, c);
                *inv.at_mut(r, c) = adj / det;
            }
        }
        Some(inv)
    }

    /// Replace `self` with its inverse. On a singular matrix `self` is left
    /// untouched and `None` is returned.
    #[inline]
    pub fn invert_in_place(&mut self) -> Option<&mut Self> {
        self.invert_in_place_with(Tolerance::default())
    }

    pub fn invert_in_place_with(&mut self, tol: Tolerance<S>) -> Option<&mut Self> {
        let inv = self.try_inverse_with(tol)?;
        *self = inv;
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mat3, Mat4};

    #[test]
    fn tolerance_defaults() {
        let tol = Tolerance::<f64>::default();
        assert_eq!(tol.epsilon(), f64::EPSILON);
        assert!(tol.is_relative());
        assert_eq!(tol.threshold(4.0), 4.0 * f64::EPSILON);
        assert_eq!(Tolerance::new(-1e-3_f64).epsilon(), 1e-3);
        assert!(!Tolerance::new(1e-3_f64).is_relative());
        assert_eq!(Tolerance::new(1e-3_f64).threshold(1e9), 1e-3);
        assert!(Tolerance::<f64>::exact().is_negligible(0.0, 1.0));
        assert!(!Tolerance::<f64>::exact().is_negligible(1e-300, 1.0));
        assert!(tol.is_negligible(f64::NAN, 1.0));
        assert!(tol.is_negligible(f64::INFINITY, 1.0));
    }

    #[test]
    fn nan_epsilon_is_exact() {
        let tol = Tolerance::new(f32::NAN);
        assert_eq!(tol.epsilon(), 0.0);
        assert_eq!(Tolerance::relative(f64::NAN).epsilon(), 0.0);
        assert!(Mat3::<f32>::identity().try_inverse_with(tol).is_some());
        assert!(Mat3::<f32>::zero().try_inverse_with(tol).is_none());
    }

    #[test]
    fn magnitude_is_row_sum_product() {
        let m = Mat3::new(1.0, -2.0, 0.0, 0.0, 3.0, 0.0, 0.5, 0.5, -1.0);
        assert_eq!(m.magnitude(), 3.0 * 3.0 * 2.0);
        assert_eq!(Mat4::<f64>::identity().magnitude(), 1.0);
        assert_eq!(Mat4::<f64>::zero().magnitude(), 0.0);
    }

    #[test]
    fn cofactor_signs() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0);
        // minor(0,1) = 4*10 - 6*7 = -2, cofactor = +2
        assert_eq!(m.cofactor(0, 1).unwrap(), 2.0);
        assert_eq!(m.cofactor(0, 0).unwrap(), 2.0);
        assert!(m.cofactor(3, 0).is_err());
    }

    #[test]
    fn adjugate_times_matrix_is_det_identity() {
        let m = Mat4::new(
            2.0, 0.0, 1.0, 3.0,
            1.0, 1.0, 0.0, 2.0,
            0.0, 4.0, 1.0, 1.0,
            3.0, 1.0, 2.0, 0.0,
        );
        let det = m.determinant();
        let prod = m * m.adjugate();
        assert!(prod.abs_diff_eq(&(Mat4::<f64>::identity() * det), 1e-9));
    }

    #[test]
    fn small_entries_stay_invertible() {
        let m = Mat3::<f64>::from_diagonal([1e-6, 1e-6, 1e-6]);
        assert!(!m.is_singular());
        let inv = m.try_inverse().unwrap();
        assert!(inv.abs_diff_eq(&Mat3::from_diagonal([1e6, 1e6, 1e6]), 1e-3));

        let m = Mat3::<f32>::from_diagonal([1e-3, 1e-3, 1e-3]);
        let inv = m.try_inverse().unwrap();
        assert!(inv.abs_diff_eq(&Mat3::from_diagonal([1e3, 1e3, 1e3]), 1e-2));

        let m = Mat4::<f32>::from_diagonal([1e-3; 4]);
        let back = m.try_inverse().unwrap().try_inverse().unwrap();
        assert!(back.abs_diff_eq(&m, 1e-8));
    }

    #[test]
    fn large_entries_do_not_hide_singularity() {
        // Row 1 is row 0 over 3, up to rounding.
        let m = Mat3::<f64>::new(1e8, 3e8, 7e8, 1e8 / 3.0, 1e8, 7e8 / 3.0, 1.0, 2.0, 5.0);
        assert!(m.is_singular());
        assert!(m.try_inverse().is_none());
    }

    #[test]
    fn non_finite_determinant_is_singular() {
        let big = Mat3::<f32>::from_diagonal([1e20, 1e20, 1e20]);
        assert!(!big.determinant().is_finite());
        assert!(big.try_inverse().is_none());
        assert!(big.try_inverse_with(Tolerance::exact()).is_none());

        let mut m = Mat4::<f64>::identity();
        m.set(0, 0, f64::INFINITY).unwrap();
        let before = m;
        assert!(m.invert_in_place_with(Tolerance::new(1e-12)).is_none());
        assert_eq!(m, before);
    }

    #[test]
    fn tolerance_controls_singularity() {
        let m = Mat3::<f64>::from_diagonal([1e-3, 1e-3, 1e-3]);
        assert!(m.try_inverse().is_some());
        assert!(m.try_inverse_with(Tolerance::new(1e-6)).is_none());
        assert!(m.is_singular_with(Tolerance::new(1e-6)));
        assert!(!m.is_singular());
    }

    #[test]
    fn exact_zero_is_singular_even_with_zero_tolerance() {
        let m = Mat3::<f64>::zero();
        assert!(m.try_inverse_with(Tolerance::exact()).is_none());
    }
}
