use crate::{Mat3, Matrix, Minors, Point3, Scalar, Tagged, Vec3, Vec4};
use core::ops::Mul;

/// 4x4 matrix, column-major storage.
///
/// Used for homogeneous transforms (affine: rotation + translation + scale).
pub type Mat4<S> = Matrix<S, 4>;

// The three indices of 0..4 other than `i`, ascending.
#[inline]
fn others(i: usize) -> [usize; 3] {
    match i {
        0 => [1, 2, 3],
        1 => [0, 2, 3],
        2 => [0, 1, 3],
        _ => [0, 1, 2],
    }
}

impl<S: Scalar> Minors<S> for Matrix<S, 4> {
    /// Determinant of the 3x3 submatrix, itself expanded along its row 0.
    fn minor(&self, row: usize, col: usize) -> S {
        let rows = others(row);
        let cols = others(col);
        let sub: Mat3<S> = Matrix::from_cols_array(core::array::from_fn(|c| {
            core::array::from_fn(|r| self.at(rows[r], cols[c]))
        }));
        sub.determinant()
    }
}

impl<S: Scalar> Matrix<S, 4> {
    /// Construct from elements in row-major argument order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: S, m01: S, m02: S, m03: S,
        m10: S, m11: S, m12: S, m13: S,
        m20: S, m21: S, m22: S, m23: S,
        m30: S, m31: S, m32: S, m33: S,
    ) -> Self {
        Self::from_cols_array([
            [m00, m10, m20, m30],
            [m01, m11, m21, m31],
            [m02, m12, m22, m32],
            [m03, m13, m23, m33],
        ])
    }

    #[inline]
    pub fn from_cols(c0: Vec4<S>, c1: Vec4<S>, c2: Vec4<S>, c3: Vec4<S>) -> Self {
        Self::from_cols_array([c0.into(), c1.into(), c2.into(), c3.into()])
    }

    /// Build from rotation (3x3) and translation
    pub fn from_rotation_translation(rot: Mat3<S>, trans: Vec3<S>) -> Self {
        let col = |c: usize| -> Vec4<S> {
            Vec4::new(rot.at(0, c), rot.at(1, c), rot.at(2, c), S::ZERO)
        };
        Self::from_cols(col(0), col(1), col(2), trans.extend(S::ONE))
    }

    /// Translation matrix
    pub fn from_translation(t: Vec3<S>) -> Self {
        Self::from_rotation_translation(Mat3::identity(), t)
    }

    /// Non-uniform scale matrix
    pub fn from_scale(s: Vec3<S>) -> Self {
        Self::from_diagonal([s.x, s.y, s.z, S::ONE])
    }

    pub fn rotation_x(angle: S) -> Self {
        Self::from_rotation_translation(Mat3::rotation_x(angle), Vec3::zero())
    }

    pub fn rotation_y(angle: S) -> Self {
        Self::from_rotation_translation(Mat3::rotation_y(angle), Vec3::zero())
    }

    pub fn rotation_z(angle: S) -> Self {
        Self::from_rotation_translation(Mat3::rotation_z(angle), Vec3::zero())
    }

    /// Rotation about arbitrary axis (Rodrigues' formula)
    pub fn rotation_axis(axis: Vec3<S>, angle: S) -> Self {
        Self::from_rotation_translation(Mat3::rotation_axis(axis, angle), Vec3::zero())
    }

    /// `self * from_translation(t)`.
    pub fn translate(&self, t: Vec3<S>) -> Self {
        let mut out = *self;
        out.translate_in_place(t);
        out
    }

    pub fn translate_in_place(&mut self, t: Vec3<S>) -> &mut Self {
        for r in 0..4 {
            let moved = self.at(r, 0) * t.x + self.at(r, 1) * t.y + self.at(r, 2) * t.z;
            *self.at_mut(r, 3) += moved;
        }
        self
    }

    /// Extract the upper-left 3x3 submatrix
    pub fn upper_left_3x3(&self) -> Mat3<S> {
        Matrix::from_cols_array(core::array::from_fn(|c| {
            core::array::from_fn(|r| self.at(r, c))
        }))
    }

    /// Extract the translation column
    #[inline]
    pub fn translation_vector(&self) -> Vec3<S> {
        Vec3::new(self.at(0, 3), self.at(1, 3), self.at(2, 3))
    }

    /// Transform a point (w=1, includes translation)
    #[inline]
    pub fn transform_point(&self, p: Point3<S>) -> Point3<S> {
        Point3::from_vec(self.mul_vec(p.to_homogeneous()).truncate())
    }

    /// Transform a vector (w=0, ignores translation)
    #[inline]
    pub fn transform_vector(&self, v: Vec3<S>) -> Vec3<S> {
        self.mul_vec(v.extend(S::ZERO)).truncate()
    }

    /// Transform a normal by the inverse transpose of the upper 3x3. A
    /// degenerate linear part leaves the normal unchanged.
    pub fn transform_normal(&self, n: Vec3<S>) -> Vec3<S> {
        match self.upper_left_3x3().try_inverse() {
            Some(inv) => inv.transpose().mul_vec(n),
            None => n,
        }
    }
}

// Mat4 * Vec4
impl<S: Scalar> Mul<Vec4<S>> for Matrix<S, 4> {
    type Output = Vec4<S>;
    #[inline]
    fn mul(self, rhs: Vec4<S>) -> Vec4<S> {
        self.mul_vec(rhs)
    }
}

impl<S: Scalar, Space> Mul<Tagged<Vec4<S>, Space>> for Matrix<S, 4> {
    type Output = Tagged<Vec4<S>, Space>;
    #[inline]
    fn mul(self, rhs: Tagged<Vec4<S>, Space>) -> Self::Output {
        rhs.map(|v| self.mul_vec(v))
    }
}
