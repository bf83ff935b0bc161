//! Heap wrapper for enforced shared allocation.
//!
//! `Heap<T>` wraps `Arc<T>` and is the ONLY way term payloads (strings,
//! lists, records) reach the heap. The constructor is `pub(crate)`, so
//! allocation happens exclusively inside the `Pattern` and `Value` factory
//! methods; downstream crates clone terms by bumping a reference count and
//! can never build a payload that bypasses the factories.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A heap-allocated term payload.
///
/// `#[repr(transparent)]` keeps the layout identical to `Arc<T>`; the
/// wrapper exists purely for the visibility firewall around allocation.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    /// Allocate a payload. Crate-private: callers go through the
    /// `Pattern`/`Value` factory methods.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}
