use crate::{Mat3, Mat4, Matrix, Scalar, Vec3};
use core::ops::{Mul, Neg};

/// Rotation quaternion `w + xi + yj + zk`, kept as a scalar part and a
/// vector part. Only unit quaternions describe rotations; the matrix
/// conversions assume one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<S> {
    pub v: Vec3<S>,
    pub w: S,
}

impl<S: Scalar> Quat<S> {
    #[inline]
    pub fn new(w: S, x: S, y: S, z: S) -> Self {
        Self { v: Vec3::new(x, y, z), w }
    }

    #[inline]
    pub fn identity() -> Self {
        Self { v: Vec3::zero(), w: S::ONE }
    }

    /// Rotation of `angle` radians about a unit `axis`.
    pub fn from_axis_angle(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = (angle * S::HALF).sin_cos();
        Self { v: axis * s, w: c }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> S {
        self.w * other.w + self.v.dot(other.v)
    }

    #[inline]
    pub fn norm_sq(&self) -> S {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> S {
        self.norm_sq().sqrt()
    }

    pub fn normalize(&self) -> Self {
        let inv = self.norm().recip();
        Self { v: self.v * inv, w: self.w * inv }
    }

    /// `None` for a zero (or non-finite) quaternion.
    pub fn try_normalize(&self) -> Option<Self> {
        let n = self.norm();
        if n > S::ZERO && n.is_finite() {
            Some(Self { v: self.v / n, w: self.w / n })
        } else {
            None
        }
    }

    /// Conjugate; the inverse of a unit quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self { v: -self.v, w: self.w }
    }

    /// Rotate `v`. Expanded form of `q * (0, v) * q*`.
    pub fn rotate(&self, v: Vec3<S>) -> Vec3<S> {
        let t = self.v.cross(v) * S::TWO;
        v + t * self.w + self.v.cross(t)
    }

    /// Rotation matrix of a unit quaternion.
    pub fn to_mat3(&self) -> Mat3<S> {
        let two = S::TWO;
        let Vec3 { x, y, z } = self.v;
        let w = self.w;
        Mat3::new(
            S::ONE - two * (y * y + z * z), two * (x * y - w * z),          two * (x * z + w * y),
            two * (x * y + w * z),          S::ONE - two * (x * x + z * z), two * (y * z - w * x),
            two * (x * z - w * y),          two * (y * z + w * x),          S::ONE - two * (x * x + y * y),
        )
    }

    /// Homogeneous rotation with no translation.
    #[inline]
    pub fn to_mat4(&self) -> Mat4<S> {
        Mat4::from_rotation_translation(self.to_mat3(), Vec3::zero())
    }

    /// Unit quaternion from a rotation matrix (Shepperd's method: branch on
    /// the largest of the trace and the diagonal for a well-conditioned sqrt).
    pub fn from_mat3(m: &Mat3<S>) -> Self {
        let quarter = S::HALF * S::HALF;
        let at = |r: usize, c: usize| m.at(r, c);
        let trace = m.trace();

        if trace > S::ZERO {
            let s = (trace + S::ONE).sqrt() * S::TWO;
            let inv = s.recip();
            Self::new(
                s * quarter,
                (at(2, 1) - at(1, 2)) * inv,
                (at(0, 2) - at(2, 0)) * inv,
                (at(1, 0) - at(0, 1)) * inv,
            )
        } else if at(0, 0) > at(1, 1) && at(0, 0) > at(2, 2) {
            let s = (S::ONE + at(0, 0) - at(1, 1) - at(2, 2)).sqrt() * S::TWO;
            let inv = s.recip();
            Self::new(
                (at(2, 1) - at(1, 2)) * inv,
                s * quarter,
                (at(0, 1) + at(1, 0)) * inv,
                (at(0, 2) + at(2, 0)) * inv,
            )
        } else if at(1, 1) > at(2, 2) {
            let s = (S::ONE + at(1, 1) - at(0, 0) - at(2, 2)).sqrt() * S::TWO;
            let inv = s.recip();
            Self::new(
                (at(0, 2) - at(2, 0)) * inv,
                (at(0, 1) + at(1, 0)) * inv,
                s * quarter,
                (at(1, 2) + at(2, 1)) * inv,
            )
        } else {
            let s = (S::ONE + at(2, 2) - at(0, 0) - at(1, 1)).sqrt() * S::TWO;
            let inv = s.recip();
            Self::new(
                (at(1, 0) - at(0, 1)) * inv,
                (at(0, 2) + at(2, 0)) * inv,
                (at(1, 2) + at(2, 1)) * inv,
                s * quarter,
            )
        }
    }

    /// Spherical interpolation along the shorter arc. Nearly parallel inputs
    /// fall back to a normalized lerp.
    pub fn slerp(&self, other: &Self, t: S) -> Self {
        let mut cos = self.dot(other);
        let mut end = *other;
        if cos < S::ZERO {
            end = -end;
            cos = -cos;
        }

        if cos > S::ONE - S::EPSILON {
            let lerp = Self {
                v: self.v.lerp(end.v, t),
                w: self.w + (end.w - self.w) * t,
            };
            return lerp.normalize();
        }

        let theta = cos.acos();
        let inv_sin = theta.sin().recip();
        let a = ((S::ONE - t) * theta).sin() * inv_sin;
        let b = (t * theta).sin() * inv_sin;
        Self {
            v: self.v * a + end.v * b,
            w: self.w * a + end.w * b,
        }
    }
}

impl<S: Scalar> Matrix<S, 4> {
    /// Homogeneous rotation matrix of a unit quaternion.
    #[inline]
    pub fn from_quat(q: Quat<S>) -> Self {
        q.to_mat4()
    }
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Neg for Quat<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self { v: -self.v, w: -self.w }
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`.
impl<S: Scalar> Mul for Quat<S> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self {
            v: rhs.v * self.w + self.v * rhs.w + self.v.cross(rhs.v),
            w: self.w * rhs.w - self.v.dot(rhs.v),
        }
    }
}
