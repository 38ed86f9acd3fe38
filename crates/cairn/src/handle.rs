//! Shared-ownership wrappers for engine resources
//!
//! The engine reference-counts its own objects; a [`Handle`] holds exactly
//! one of those references. Wrapping claims a reference the engine has
//! already handed over (constructors return owned pointers), cloning takes
//! a fresh reference, and dropping releases one, so the resource lives
//! until the last wrapper and the last engine-side reference are both
//! gone, and a double release is not expressible in safe code.

use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::trace;

use crate::error::{Error, Result};
use crate::status::Status;

/// Binds one engine object kind to its reference/destroy/status triple.
///
/// # Safety
///
/// Implementations must call the matching engine entry points for
/// `Self::Raw`, and `Raw` must be the engine's opaque type for that kind.
pub unsafe trait ForeignRefCounted {
    type Raw;
    const KIND: &'static str;

    unsafe fn reference(raw: *mut Self::Raw);
    unsafe fn destroy(raw: *mut Self::Raw);
    unsafe fn status(raw: *mut Self::Raw) -> Status;
}

/// Owns one engine-side reference to a resource of kind `K`.
pub struct Handle<K: ForeignRefCounted> {
    raw: NonNull<K::Raw>,
    _kind: PhantomData<K>,
}

impl<K: ForeignRefCounted> Handle<K> {
    /// Claims an already-held reference; does not increment the count.
    ///
    /// The engine reports constructor failure through an inert error
    /// object rather than a null pointer, so the object's status is
    /// checked here; on failure the partially-wrapped handle drops and
    /// releases the error object through the normal path.
    ///
    /// # Safety
    ///
    /// `raw` must be an owned reference to a live object of kind `K`
    /// (or null, which is reported as an error).
    pub(crate) unsafe fn wrap(raw: *mut K::Raw, call: &'static str) -> Result<Self> {
        let raw = NonNull::new(raw).ok_or(Error::Foreign {
            call,
            status: Status::NULL_POINTER,
        })?;
        let handle = Handle { raw, _kind: PhantomData };
        trace!(kind = K::KIND, ptr = ?handle.raw, "wrapped");
        handle.check(call)?;
        Ok(handle)
    }

    /// Translates the wrapped object's current status.
    pub(crate) fn check(&self, call: &'static str) -> Result<()> {
        let status = unsafe { K::status(self.raw.as_ptr()) };
        crate::error::check(call, status)
    }

    pub(crate) fn status(&self) -> Status {
        unsafe { K::status(self.raw.as_ptr()) }
    }

    /// The raw engine pointer. Escape hatch: anything done through it
    /// bypasses the wrapper's checks, and the pointer must not outlive
    /// this handle.
    pub fn as_ptr(&self) -> *mut K::Raw {
        self.raw.as_ptr()
    }
}

impl<K: ForeignRefCounted> Clone for Handle<K> {
    /// Shares the resource: takes one more engine-side reference.
    fn clone(&self) -> Self {
        unsafe { K::reference(self.raw.as_ptr()) };
        trace!(kind = K::KIND, ptr = ?self.raw, "shared");
        Handle { raw: self.raw, _kind: PhantomData }
    }
}

impl<K: ForeignRefCounted> Drop for Handle<K> {
    /// Releases this wrapper's single reference, exactly once.
    fn drop(&mut self) {
        trace!(kind = K::KIND, ptr = ?self.raw, "released");
        unsafe { K::destroy(self.raw.as_ptr()) };
    }
}

impl<K: ForeignRefCounted> std::fmt::Debug for Handle<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &K::KIND)
            .field("ptr", &self.raw)
            .finish()
    }
}
