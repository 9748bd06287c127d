//! The null sentinel.
//!
//! Rust has no universal null reference. A value is "null" when it is in the
//! empty state of its own type: `None` for options, a null raw pointer.

use std::rc::Rc;
use std::sync::Arc;

/// A value that may be the null sentinel.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl<T: Nullable + ?Sized> Nullable for Rc<T> {
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl<T: Nullable + ?Sized> Nullable for Arc<T> {
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}
