//! Zero-copy, read-only view over a matrix's backing storage.

use crate::error::check_index;
use crate::{MatError, Matrix, Scalar};
use core::ops::Index;
use core::slice;

/// Borrowed column-major view of a matrix, `N * N` elements long.
///
/// `view[Matrix::linear_index(row, col)] == m.get(row, col)`. The view never
/// owns storage and holds a shared borrow of its matrix, so the matrix cannot
/// be mutated or replaced while the view is alive.
///
/// Writing through the view does not compile:
///
/// ```compile_fail
/// let m = tessera::Mat3::<f32>::identity();
/// let mut view = m.float_buffer();
/// view[0] = 1.0;
/// ```
///
/// For code that only has a dynamic handle, [`FloatBuffer::try_write`] always
/// fails: with [`MatError::OutOfBounds`] for a bad index, otherwise with
/// [`MatError::ReadOnly`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatBuffer<'a, S> {
    data: &'a [S],
}

impl<S: Scalar, const N: usize> Matrix<S, N> {
    /// Read-only view of the backing storage in column-major order.
    #[inline]
    pub fn float_buffer(&self) -> FloatBuffer<'_, S> {
        FloatBuffer { data: self.as_slice() }
    }
}

impl<'a, S: Scalar> FloatBuffer<'a, S> {
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at linear (column-major) index `i`.
    pub fn get(&self, i: usize) -> Result<S, MatError> {
        check_index("float_buffer", i, self.data.len())?;
        Ok(self.data[i])
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [S] {
        self.data
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, S> {
        self.data.iter()
    }

    /// The view is immutable. A valid index returns [`MatError::ReadOnly`], an
    /// invalid one [`MatError::OutOfBounds`]; the matrix is never changed.
    pub fn try_write(&self, i: usize, value: S) -> Result<(), MatError> {
        check_index("float_buffer", i, self.data.len())?;
        tracing::debug!(index = i, value = value.to_f64(), "write through read-only buffer view");
        Err(MatError::ReadOnly)
    }
}

impl<'a, S: Scalar + bytemuck::Pod> FloatBuffer<'a, S> {
    /// Raw bytes in host-native order, `size_of::<S>() * len()` long.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.data)
    }
}

impl<S> Index<usize> for FloatBuffer<'_, S> {
    type Output = S;

    /// # Panics
    /// If `i >= len()`.
    #[inline]
    fn index(&self, i: usize) -> &S {
        &self.data[i]
    }
}

impl<'a, S> IntoIterator for FloatBuffer<'a, S> {
    type Item = &'a S;
    type IntoIter = slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
