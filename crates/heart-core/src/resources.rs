//! Scoped ownership for resources that need explicit teardown (GPU objects,
//! DOM listeners, attached elements).

/// Explicit teardown for a resource.
pub trait Release {
    fn release(&mut self);
}

/// Owning handle that releases its resource exactly once: on the first
/// [`Owned::release`] call or on drop, whichever comes first.
pub struct Owned<T: Release> {
    inner: Option<T>,
}

impl<T: Release> Owned<T> {
    pub fn new(value: T) -> Self {
        Self { inner: Some(value) }
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.inner.as_mut()
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        self.inner.is_none()
    }

    /// Give up ownership without releasing.
    pub fn into_inner(mut self) -> Option<T> {
        self.inner.take()
    }

    /// Release now; later calls are no-ops.
    pub fn release(&mut self) {
        if let Some(mut v) = self.inner.take() {
            v.release();
        }
    }
}

impl<T: Release> Drop for Owned<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl Release for crate::field::ParticleField {
    fn release(&mut self) {
        self.dispose();
    }
}
