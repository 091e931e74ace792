//! The identity function.
//!
//! `identity` takes ownership of its argument and hands it straight back.
//! Nothing is cloned, so heap-backed values come back pointing at the same
//! allocation they went in with.

/// Returns `x` unchanged.
///
/// Accepts any type, including absence markers such as `None` or
/// [`Value::Nil`](crate::Value::Nil). Cannot fail and has no side effects.
///
/// ```
/// use passthrough_foundation::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(None::<i64>), None);
/// ```
#[inline]
#[must_use]
pub const fn identity<T>(x: T) -> T {
    x
}

/// Returns the same reference it was given.
///
/// Works for unsized targets (`str`, slices) where [`identity`] would need a
/// reference type parameter anyway.
#[inline]
#[must_use]
pub const fn identity_ref<T: ?Sized>(x: &T) -> &T {
    x
}
