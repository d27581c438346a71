//! Property-based tests for the matrix kernel using proptest.
//!
//! Covers: inversion round-trips, row-exchange involution, determinant
//! scaling laws, products with identity and zero.

use proptest::prelude::*;
use tessera::{Mat3, Mat4, Matrix, Tolerance, Vec2};

// ── Strategies ───────────────────────────────────────────────────────

fn any_mat3() -> impl Strategy<Value = Mat3<f64>> {
    prop::array::uniform9(-10.0f64..10.0).prop_map(|a| Matrix::from_slice(&a).unwrap())
}

fn any_mat4() -> impl Strategy<Value = Mat4<f64>> {
    prop::array::uniform16(-10.0f64..10.0).prop_map(|a| Matrix::from_slice(&a).unwrap())
}

/// Strictly diagonally dominant, so well away from singular.
fn dominant<const N: usize>(mut m: Matrix<f64, N>) -> Matrix<f64, N> {
    for i in 0..N {
        let v = m.get(i, i).unwrap();
        m.set(i, i, v + 20.0 * N as f64).unwrap();
    }
    m
}

/// Upper-triangular: determinant is the product of the diagonal.
fn upper<const N: usize>(mut m: Matrix<f64, N>) -> Matrix<f64, N> {
    for r in 0..N {
        for c in 0..r {
            m.set(r, c, 0.0).unwrap();
        }
    }
    m
}

/// Product of the rows' absolute sums: bounds every term of the cofactor
/// expansion, and so the rounding error of the determinant.
fn det_scale<const N: usize>(m: &Matrix<f64, N>) -> f64 {
    (0..N)
        .map(|r| (0..N).map(|c| m.get(r, c).unwrap().abs()).sum::<f64>())
        .product()
}

fn det_close<const N: usize>(a: f64, b: f64, ms: &[Matrix<f64, N>]) -> bool {
    let scale = ms.iter().map(det_scale).fold(1.0, f64::max);
    (a - b).abs() <= 1e-12 * scale
}

// ── Inversion ────────────────────────────────────────────────────────

proptest! {
    /// inverse(inverse(m)) == m for well-conditioned m.
    #[test]
    fn double_inverse_mat3(m in any_mat3().prop_map(dominant::<3>)) {
        let back = m.try_inverse().unwrap().try_inverse().unwrap();
        prop_assert!(back.abs_diff_eq(&m, 1e-9), "{m}\nvs\n{back}");
    }

    #[test]
    fn double_inverse_mat4(m in any_mat4().prop_map(dominant::<4>)) {
        let back = m.try_inverse().unwrap().try_inverse().unwrap();
        prop_assert!(back.abs_diff_eq(&m, 1e-9), "{m}\nvs\n{back}");
    }

    /// m * inverse(m) == I, and the in-place form agrees bit for bit.
    #[test]
    fn inverse_is_two_sided(m in any_mat4().prop_map(dominant::<4>)) {
        let inv = m.try_inverse().unwrap();
        prop_assert!((m * inv).abs_diff_eq(&Mat4::identity(), 1e-12));
        prop_assert!((inv * m).abs_diff_eq(&Mat4::identity(), 1e-12));
        let mut in_place = m;
        in_place.invert_in_place().unwrap();
        prop_assert_eq!(in_place, inv);
    }

    /// A repeated row makes the matrix singular; inversion refuses it
    /// without touching the input.
    #[test]
    fn duplicated_row_is_singular(m in any_mat3(), src in 0usize..3, dst in 0usize..3) {
        prop_assume!(src != dst);
        let mut dup = m;
        for c in 0..3 {
            let v = m.get(src, c).unwrap();
            dup.set(dst, c, v).unwrap();
        }
        let tol = Tolerance::new(1e-9);
        prop_assert!(dup.is_singular_with(tol));
        let before = dup;
        prop_assert!(dup.invert_in_place_with(tol).is_none());
        prop_assert_eq!(dup, before);
    }
}

// ── Row operations ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn exchange_rows_is_involution(m in any_mat4(), i in 0usize..4, j in 0usize..4) {
        let twice = m.exchange_rows(i, j).unwrap().exchange_rows(i, j).unwrap();
        prop_assert_eq!(twice, m);
    }

    /// Exchanging two distinct rows negates the determinant.
    #[test]
    fn exchange_rows_negates_determinant(m in any_mat3(), i in 0usize..3, j in 0usize..3) {
        prop_assume!(i != j);
        let swapped = m.exchange_rows(i, j).unwrap();
        prop_assert!(det_close(swapped.determinant(), -m.determinant(), &[m]));
    }

    #[test]
    fn scale_row_scales_determinant(m in any_mat4(), row in 0usize..4, k in -4.0f64..4.0) {
        let scaled = m.scale_row(row, k).unwrap();
        prop_assert!(det_close(scaled.determinant(), k * m.determinant(), &[m, scaled]));
    }

    /// Adding a multiple of one row to another leaves the determinant alone.
    #[test]
    fn row_addition_preserves_determinant(
        m in any_mat3(),
        src in 0usize..3,
        dst in 0usize..3,
        k in -4.0f64..4.0,
    ) {
        prop_assume!(src != dst);
        // target := row(dst) + k * row(src)
        let sheared = m.add_row_scaled(dst, src, dst, k).unwrap();
        prop_assert!(det_close(sheared.determinant(), m.determinant(), &[m, sheared]));
    }
}

// ── Determinant scaling ──────────────────────────────────────────────

proptest! {
    #[test]
    fn diagonal_entry_scales_determinant(
        m in any_mat4().prop_map(upper::<4>),
        d in 0usize..4,
        k in -4.0f64..4.0,
    ) {
        let mut scaled = m;
        let v = m.get(d, d).unwrap();
        scaled.set(d, d, v * k).unwrap();
        prop_assert!(det_close(scaled.determinant(), k * m.determinant(), &[m, scaled]));
    }

    #[test]
    fn uniform_scale_is_k_pow_n(m3 in any_mat3(), m4 in any_mat4(), k in -3.0f64..3.0) {
        let s3 = m3 * k;
        prop_assert!(det_close(s3.determinant(), k.powi(3) * m3.determinant(), &[m3, s3]));
        let s4 = m4.scale(k);
        prop_assert!(det_close(s4.determinant(), k.powi(4) * m4.determinant(), &[m4, s4]));
    }

    #[test]
    fn transpose_preserves_determinant(m in any_mat4()) {
        prop_assert!(det_close(m.transpose().determinant(), m.determinant(), &[m]));
    }
}

// ── Products ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn identity_is_neutral(m in any_mat4()) {
        prop_assert_eq!(m * Mat4::identity(), m);
        prop_assert_eq!(Mat4::<f64>::identity() * m, m);
    }

    #[test]
    fn zero_annihilates(m in any_mat3()) {
        prop_assert_eq!(m * Mat3::zero(), Mat3::zero());
        prop_assert_eq!(Mat3::<f64>::zero() * m, Mat3::zero());
    }

    /// Translations compose additively in the homogeneous column.
    #[test]
    fn translations_add(ax in -100i32..100, ay in -100i32..100, bx in -100i32..100, by in -100i32..100) {
        let a = Vec2::new(f64::from(ax), f64::from(ay));
        let b = Vec2::new(f64::from(bx), f64::from(by));
        let m = Mat3::identity().translate(a).translate(b);
        prop_assert_eq!(m, Mat3::from_translation(a + b));
    }
}
