use crate::Scalar;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

// Shared shape of the small vector tuples: component-wise arithmetic plus
// lossless `[S; N]` conversions, which is how matrices read and write rows.
macro_rules! vector {
    ($(#[$meta:meta])* $name:ident, $n:literal, { $($field:ident),+ }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        #[repr(C)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<S> {
            $(pub $field: S,)+
        }

        impl<S: Scalar> $name<S> {
            #[inline]
            pub fn new($($field: S),+) -> Self {
                Self { $($field),+ }
            }

            #[inline]
            pub fn zero() -> Self {
                Self::splat(S::ZERO)
            }

            #[inline]
            pub fn splat(v: S) -> Self {
                Self { $($field: v),+ }
            }

            #[inline]
            pub fn dot(self, rhs: Self) -> S {
                S::ZERO $(+ self.$field * rhs.$field)+
            }

            #[inline]
            pub fn norm_sq(self) -> S {
                self.dot(self)
            }

            #[inline]
            pub fn norm(self) -> S {
                self.norm_sq().sqrt()
            }

            #[inline]
            pub fn normalize(self) -> Self {
                self / self.norm()
            }

            /// Normalized copy, or `None` for a (near) zero-length vector.
            #[inline]
            pub fn try_normalize(self) -> Option<Self> {
                let n = self.norm();
                if n > S::EPSILON { Some(self / n) } else { None }
            }

            #[inline]
            pub fn lerp(self, other: Self, t: S) -> Self {
                self * (S::ONE - t) + other * t
            }

            #[inline]
            pub fn to_array(self) -> [S; $n] {
                [$(self.$field),+]
            }
        }

        impl<S: Scalar> Default for $name<S> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<S: Scalar> From<[S; $n]> for $name<S> {
            #[inline]
            fn from(a: [S; $n]) -> Self {
                let [$($field),+] = a;
                Self { $($field),+ }
            }
        }

        impl<S: Scalar> From<$name<S>> for [S; $n] {
            #[inline]
            fn from(v: $name<S>) -> Self {
                v.to_array()
            }
        }

        impl<S: Scalar> Add for $name<S> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<S: Scalar> Sub for $name<S> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<S: Scalar> Neg for $name<S> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<S: Scalar> Mul<S> for $name<S> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: S) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<S: Scalar> Div<S> for $name<S> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: S) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<S: Scalar> AddAssign for $name<S> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl<S: Scalar> SubAssign for $name<S> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl<S: Scalar> MulAssign<S> for $name<S> {
            #[inline]
            fn mul_assign(&mut self, rhs: S) {
                $(self.$field *= rhs;)+
            }
        }
    };
}

vector!(
    /// 2D vector; also the translation argument of 3x3 homogeneous transforms.
    Vec2, 2, { x, y }
);
vector!(
    /// 3D vector.
    Vec3, 3, { x, y, z }
);
vector!(
    /// 4D vector, usually homogeneous coordinates.
    Vec4, 4, { x, y, z, w }
);

impl<S: Scalar> Vec2<S> {
    /// 2D cross product (signed area of the parallelogram).
    #[inline]
    pub fn cross(self, rhs: Self) -> S {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    pub fn extend(self, z: S) -> Vec3<S> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<S: Scalar> Vec3<S> {
    #[inline]
    pub fn x() -> Self { Self::new(S::ONE, S::ZERO, S::ZERO) }

    #[inline]
    pub fn y() -> Self { Self::new(S::ZERO, S::ONE, S::ZERO) }

    #[inline]
    pub fn z() -> Self { Self::new(S::ZERO, S::ZERO, S::ONE) }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn truncate(self) -> Vec2<S> {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn extend(self, w: S) -> Vec4<S> {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl<S: Scalar> Vec4<S> {
    /// Drop `w`.
    #[inline]
    pub fn truncate(self) -> Vec3<S> {
        Vec3::new(self.x, self.y, self.z)
    }
}
