use crate::{Matrix, Minors, Point2, Scalar, Tagged, Vec2, Vec3};
use core::ops::Mul;

/// 3x3 matrix, column-major storage.
///
/// Serves two roles: 3D linear maps (rotation, scale, cross-product) and
/// 2D homogeneous transforms, where the last column carries the translation.
pub type Mat3<S> = Matrix<S, 3>;

// The two indices of 0..3 other than `i`, ascending.
#[inline]
fn others(i: usize) -> (usize, usize) {
    match i {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}

impl<S: Scalar> Minors<S> for Matrix<S, 3> {
    /// Closed-form 2x2 determinant.
    #[inline]
    fn minor(&self, row: usize, col: usize) -> S {
        let (r0, r1) = others(row);
        let (c0, c1) = others(col);
        self.at(r0, c0) * self.at(r1, c1) - self.at(r0, c1) * self.at(r1, c0)
    }
}

impl<S: Scalar> Matrix<S, 3> {
    /// Construct from individual elements (row-major argument order for readability).
    /// ```text
    /// | m00 m01 m02 |
    /// | m10 m11 m12 |
    /// | m20 m21 m22 |
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(m00: S, m01: S, m02: S, m10: S, m11: S, m12: S, m20: S, m21: S, m22: S) -> Self {
        Self::from_cols_array([[m00, m10, m20], [m01, m11, m21], [m02, m12, m22]])
    }

    #[inline]
    pub fn from_cols(c0: Vec3<S>, c1: Vec3<S>, c2: Vec3<S>) -> Self {
        Self::from_cols_array([c0.into(), c1.into(), c2.into()])
    }

    /// Cross-product matrix `[v]x` such that `[v]x * w == v.cross(w)`.
    pub fn skew(v: Vec3<S>) -> Self {
        Self::new(
            S::ZERO, -v.z,    v.y,
            v.z,     S::ZERO, -v.x,
            -v.y,    v.x,     S::ZERO,
        )
    }

    // ------------------------------------------------------------------
    // 2D homogeneous transforms
    // ------------------------------------------------------------------

    /// Identity with `t` in rows 0 and 1 of the last column.
    pub fn from_translation(t: Vec2<S>) -> Self {
        Self::new(
            S::ONE,  S::ZERO, t.x,
            S::ZERO, S::ONE,  t.y,
            S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Homogeneous 2D scale.
    pub fn from_scale(s: Vec2<S>) -> Self {
        Self::from_diagonal([s.x, s.y, S::ONE])
    }

    /// `self * from_translation(t)`. Repeated calls accumulate: translating
    /// the identity by `(1, 2)` twice leaves `(2, 4)` in the last column.
    pub fn translate(&self, t: Vec2<S>) -> Self {
        let mut out = *self;
        out.translate_in_place(t);
        out
    }

    pub fn translate_in_place(&mut self, t: Vec2<S>) -> &mut Self {
        for r in 0..3 {
            let moved = self.at(r, 0) * t.x + self.at(r, 1) * t.y;
            *self.at_mut(r, 2) += moved;
        }
        self
    }

    /// Apply as a 2D homogeneous transform to a point (translation applies).
    #[inline]
    pub fn transform_point2(&self, p: Point2<S>) -> Point2<S> {
        let v = self.mul_vec(p.to_homogeneous());
        Point2::new(v.x, v.y)
    }

    /// Apply as a 2D homogeneous transform to a vector (w = 0, no translation).
    #[inline]
    pub fn transform_vector2(&self, v: Vec2<S>) -> Vec2<S> {
        self.mul_vec(v.extend(S::ZERO)).truncate()
    }

    // ------------------------------------------------------------------
    // 3D rotations
    // ------------------------------------------------------------------

    /// Rotation matrix about X axis
    pub fn rotation_x(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(S::ONE, S::ZERO, S::ZERO, S::ZERO, c, -s, S::ZERO, s, c)
    }

    /// Rotation matrix about Y axis
    pub fn rotation_y(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, S::ZERO, s, S::ZERO, S::ONE, S::ZERO, -s, S::ZERO, c)
    }

    /// Rotation matrix about Z axis. Also the 2D homogeneous rotation.
    pub fn rotation_z(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, S::ZERO, s, c, S::ZERO, S::ZERO, S::ZERO, S::ONE)
    }

    /// Rotation about a unit `axis` (Rodrigues' formula).
    pub fn rotation_axis(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let t = S::ONE - c;
        let Vec3 { x, y, z } = axis;
        Self::new(
            t * x * x + c,     t * x * y - s * z, t * x * z + s * y,
            t * x * y + s * z, t * y * y + c,     t * y * z - s * x,
            t * x * z - s * y, t * y * z + s * x, t * z * z + c,
        )
    }
}

// Mat3 * Vec3
impl<S: Scalar> Mul<Vec3<S>> for Matrix<S, 3> {
    type Output = Vec3<S>;
    #[inline]
    fn mul(self, rhs: Vec3<S>) -> Vec3<S> {
        self.mul_vec(rhs)
    }
}

// Mat3 * tagged Vec3 stays in the same space
impl<S: Scalar, Space> Mul<Tagged<Vec3<S>, Space>> for Matrix<S, 3> {
    type Output = Tagged<Vec3<S>, Space>;
    #[inline]
    fn mul(self, rhs: Tagged<Vec3<S>, Space>) -> Self::Output {
        rhs.map(|v| self.mul_vec(v))
    }
}
