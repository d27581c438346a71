use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point element type of every vector, matrix and quaternion.
///
/// Implemented for `f32` and `f64`. Only the operations the fixed-size
/// kernels need are part of the trait.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    /// Machine epsilon; the default singularity threshold.
    const EPSILON: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn recip(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn is_finite(self) -> bool;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
}

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("tessera needs either the `std` or the `libm` feature for float intrinsics");

// Intrinsics come from std when available, libm otherwise.
macro_rules! float_ops {
    ($( $name:ident => $std:ident, $libm32:ident, $libm64:ident; )*) => {
        #[cfg(feature = "std")]
        mod float_ops {
            ::paste::paste! {
                $(
                    #[inline(always)]
                    pub fn [<$name _f32>](x: f32) -> f32 { x.$std() }
                    #[inline(always)]
                    pub fn [<$name _f64>](x: f64) -> f64 { x.$std() }
                )*
            }

            #[inline(always)]
            pub fn atan2_f32(y: f32, x: f32) -> f32 { y.atan2(x) }
            #[inline(always)]
            pub fn atan2_f64(y: f64, x: f64) -> f64 { y.atan2(x) }
        }

        #[cfg(all(not(feature = "std"), feature = "libm"))]
        mod float_ops {
            ::paste::paste! {
                $(
                    #[inline(always)]
                    pub fn [<$name _f32>](x: f32) -> f32 { libm::$libm32(x) }
                    #[inline(always)]
                    pub fn [<$name _f64>](x: f64) -> f64 { libm::$libm64(x) }
                )*
            }

            #[inline(always)]
            pub fn atan2_f32(y: f32, x: f32) -> f32 { libm::atan2f(y, x) }
            #[inline(always)]
            pub fn atan2_f64(y: f64, x: f64) -> f64 { libm::atan2(y, x) }
        }
    };
}

float_ops! {
    sqrt => sqrt, sqrtf, sqrt;
    abs => abs, fabsf, fabs;
    sin => sin, sinf, sin;
    cos => cos, cosf, cos;
    acos => acos, acosf, acos;
}

macro_rules! impl_scalar_float {
    ($t:ty, $suffix:ident, $eps:expr) => {
        ::paste::paste! {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const EPSILON: Self = $eps;

            #[inline] fn sqrt(self) -> Self { float_ops::[<sqrt_ $suffix>](self) }
            #[inline] fn abs(self) -> Self { float_ops::[<abs_ $suffix>](self) }
            #[inline] fn sin(self) -> Self { float_ops::[<sin_ $suffix>](self) }
            #[inline] fn cos(self) -> Self { float_ops::[<cos_ $suffix>](self) }
            #[inline] fn acos(self) -> Self { float_ops::[<acos_ $suffix>](self) }
            #[inline] fn atan2(self, other: Self) -> Self { float_ops::[<atan2_ $suffix>](self, other) }
            #[inline] fn sin_cos(self) -> (Self, Self) { (self.sin(), self.cos()) }

            #[inline] fn recip(self) -> Self { 1.0 / self }
            #[inline] fn min(self, other: Self) -> Self { if self < other { self } else { other } }
            #[inline] fn max(self, other: Self) -> Self { if self > other { self } else { other } }
            #[inline] fn is_finite(self) -> bool { <$t>::is_finite(self) }

            #[inline] fn from_f64(v: f64) -> Self { v as $t }
            #[inline] fn to_f64(self) -> f64 { self as f64 }
        }
        }
    };
}

impl_scalar_float!(f32, f32, f32::EPSILON);
impl_scalar_float!(f64, f64, f64::EPSILON);
