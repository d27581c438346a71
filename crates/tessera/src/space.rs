use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Deref, Neg, Sub};

/// A value tagged with the coordinate space it lives in.
///
/// `Space` is a marker type with no runtime representation. Values tagged
/// with different spaces do not mix: `Tagged<Vec3<f32>, World>` cannot be
/// added to `Tagged<Vec3<f32>, Local>`. A matrix applied to a tagged vector
/// keeps the tag; re-tagging is explicit via [`Tagged::retag`].
#[repr(transparent)]
pub struct Tagged<V, Space> {
    value: V,
    _space: PhantomData<fn() -> Space>,
}

impl<V, Space> Tagged<V, Space> {
    #[inline]
    pub const fn new(value: V) -> Self {
        Self { value, _space: PhantomData }
    }

    #[inline]
    pub fn into_inner(self) -> V {
        self.value
    }

    /// Reinterpret the value as belonging to another space.
    #[inline]
    pub fn retag<Other>(self) -> Tagged<V, Other> {
        Tagged::new(self.value)
    }

    #[inline]
    pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Tagged<W, Space> {
        Tagged::new(f(self.value))
    }
}

// Manual impls: derives would put bounds on `Space`.
impl<V: Clone, Space> Clone for Tagged<V, Space> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<V: Copy, Space> Copy for Tagged<V, Space> {}

impl<V: PartialEq, Space> PartialEq for Tagged<V, Space> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: fmt::Debug, Space> fmt::Debug for Tagged<V, Space> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tagged<{}>({:?})", core::any::type_name::<Space>(), self.value)
    }
}

impl<V, Space> Deref for Tagged<V, Space> {
    type Target = V;
    #[inline]
    fn deref(&self) -> &V {
        &self.value
    }
}

impl<V: Add<Output = V>, Space> Add for Tagged<V, Space> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<V: Sub<Output = V>, Space> Sub for Tagged<V, Space> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<V: Neg<Output = V>, Space> Neg for Tagged<V, Space> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}
