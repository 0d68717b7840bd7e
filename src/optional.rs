//! `Optional<T>`: zero or one value, the "next element or end" signal
//!
//! Every pull on a stream returns an `Optional`. It is a thin wrapper over
//! `Option<T>` whose accessors report a missing value as
//! [`StreamError::EmptyAccess`] instead of panicking.

use crate::error::{StreamError, StreamResult};
use std::mem;

/// Holds a value of type `T`, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// An empty optional.
    pub const fn none() -> Self {
        Optional(None)
    }

    /// An optional holding `value`.
    pub const fn some(value: T) -> Self {
        Optional(Some(value))
    }

    /// True iff a value is currently stored.
    pub fn has_value(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the stored value.
    pub fn value(&self) -> StreamResult<&T> {
        self.0.as_ref().ok_or(StreamError::EmptyAccess)
    }

    pub fn value_mut(&mut self) -> StreamResult<&mut T> {
        self.0.as_mut().ok_or(StreamError::EmptyAccess)
    }

    /// Move the stored value out.
    pub fn into_value(self) -> StreamResult<T> {
        self.0.ok_or(StreamError::EmptyAccess)
    }

    /// The stored value, or `default` when empty. Never fails.
    pub fn value_or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.0.unwrap_or_else(f)
    }

    /// Replace whatever is stored with `value`, dropping the old value first.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.0 = None;
        self.0.insert(value)
    }

    /// Drop the stored value, if any, and mark the optional empty.
    pub fn reset(&mut self) {
        self.0 = None;
    }

    /// Move the value out, leaving this optional empty.
    pub fn take(&mut self) -> Optional<T> {
        Optional(self.0.take())
    }

    /// Exchange contents with `other`; covers every presence combination.
    pub fn swap(&mut self, other: &mut Optional<T>) {
        mem::swap(&mut self.0, &mut other.0);
    }

    pub fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }

    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional(self.0.map(f))
    }

    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.0.iter()
    }
}

/// Wrap `value` in a present optional.
pub fn make_optional<T>(value: T) -> Optional<T> {
    Optional::some(value)
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

/// An optional equals a bare value iff it is present and the values match.
impl<T: PartialEq> PartialEq<T> for Optional<T> {
    fn eq(&self, other: &T) -> bool {
        matches!(&self.0, Some(v) if v == other)
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
