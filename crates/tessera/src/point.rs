use crate::{Scalar, Vec2, Vec3, Vec4};
use core::ops::{Add, Sub};

/// A position in 2D space. Points translate; vectors do not.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<S> {
    pub x: S,
    pub y: S,
}

/// A position in 3D space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Point2<S> {
    #[inline]
    pub fn new(x: S, y: S) -> Self { Self { x, y } }

    #[inline]
    pub fn origin() -> Self { Self::new(S::ZERO, S::ZERO) }

    #[inline]
    pub fn to_vec(self) -> Vec2<S> { Vec2::new(self.x, self.y) }

    #[inline]
    pub fn from_vec(v: Vec2<S>) -> Self { Self::new(v.x, v.y) }

    /// Homogeneous form (w = 1).
    #[inline]
    pub fn to_homogeneous(self) -> Vec3<S> { Vec3::new(self.x, self.y, S::ONE) }
}

impl<S: Scalar> Point3<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S) -> Self { Self { x, y, z } }

    #[inline]
    pub fn origin() -> Self { Self::new(S::ZERO, S::ZERO, S::ZERO) }

    #[inline]
    pub fn to_vec(self) -> Vec3<S> { Vec3::new(self.x, self.y, self.z) }

    #[inline]
    pub fn from_vec(v: Vec3<S>) -> Self { Self::new(v.x, v.y, v.z) }

    /// Homogeneous form (w = 1).
    #[inline]
    pub fn to_homogeneous(self) -> Vec4<S> { Vec4::new(self.x, self.y, self.z, S::ONE) }
}

impl<S: Scalar> Default for Point2<S> {
    fn default() -> Self { Self::origin() }
}

impl<S: Scalar> Default for Point3<S> {
    fn default() -> Self { Self::origin() }
}

// Point - Point = Vec
impl<S: Scalar> Sub for Point2<S> {
    type Output = Vec2<S>;
    #[inline]
    fn sub(self, rhs: Self) -> Vec2<S> { self.to_vec() - rhs.to_vec() }
}

impl<S: Scalar> Sub for Point3<S> {
    type Output = Vec3<S>;
    #[inline]
    fn sub(self, rhs: Self) -> Vec3<S> { self.to_vec() - rhs.to_vec() }
}

// Point + Vec = Point
impl<S: Scalar> Add<Vec2<S>> for Point2<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Vec2<S>) -> Self { Self::from_vec(self.to_vec() + rhs) }
}

impl<S: Scalar> Add<Vec3<S>> for Point3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Vec3<S>) -> Self { Self::from_vec(self.to_vec() + rhs) }
}
