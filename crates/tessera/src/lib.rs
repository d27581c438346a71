//! tessera: fixed-size matrix kernel for graphics and geometry
//!
//! 3x3 and 4x4 matrices stored column-major, so the backing memory can be
//! handed straight to a graphics API through a zero-copy [`FloatBuffer`].
//! Small vectors, points and quaternions come along as the values those
//! matrices act on.
//!
//! # Design principles
//! - One generic [`Matrix<S, N>`]; [`Mat3`] and [`Mat4`] are aliases with
//!   size-specific builders
//! - Every mutating operation has a pure form and an `_in_place` form
//! - Checked accessors return [`MatError`]; singular inversion returns `None`
//! - Singularity is decided by a configurable [`Tolerance`]
//! - `#[repr(C)]`/`#[repr(transparent)]` everywhere, `bytemuck::Pod` for f32/f64
//!
//! ```
//! use tessera::{Mat3, Vec2};
//!
//! let mut m = Mat3::<f32>::identity();
//! m.translate_in_place(Vec2::new(1.0, 2.0))
//!     .translate_in_place(Vec2::new(1.0, 2.0));
//! assert_eq!(m.get(0, 2), Ok(2.0));
//! assert_eq!(m.get(1, 2), Ok(4.0));
//!
//! let inv = m.try_inverse().unwrap();
//! assert_eq!(inv.get(0, 2), Ok(-2.0));
//! ```

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

mod buffer;
mod error;
mod inverse;
mod mat3;
mod mat4;
mod matrix;
mod point;
mod quat;
mod scalar;
mod space;
mod vec;

pub use buffer::FloatBuffer;
pub use error::MatError;
pub use inverse::{Minors, Tolerance};
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use matrix::Matrix;
pub use point::{Point2, Point3};
pub use quat::Quat;
pub use scalar::Scalar;
pub use space::Tagged;
pub use vec::{Vec2, Vec3, Vec4};

// Generic structs can't derive Pod; implement it for the concrete float types.
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($($t:ident),+) => {
            $(
                // SAFETY: every field is the same float type under #[repr(C)]
                // or #[repr(transparent)], so there is no padding.
                unsafe impl bytemuck::Zeroable for $t<f32> {}
                unsafe impl bytemuck::Pod for $t<f32> {}
                unsafe impl bytemuck::Zeroable for $t<f64> {}
                unsafe impl bytemuck::Pod for $t<f64> {}
            )+
        };
    }

    impl_pod!(Vec2, Vec3, Vec4, Point2, Point3, Mat3, Mat4, Quat);
}
