//! Stream constructors: make_stream, from_iter, empty, once, repeat, repeat_with
use std::marker::PhantomData;

use super::core::Stream;
use crate::optional::Optional;

// ================================
// Producer-based Constructors
// ================================

/// Stream driven by a producer closure. Each pull calls the producer once.
#[derive(Clone)]
pub struct FromFn<F> {
    pub(crate) f: F,
}

impl<T, F> Stream for FromFn<F>
where F: FnMut() -> Optional<T> {
    type Item = T;
    fn next(&mut self) -> Optional<T> {
        (self.f)()
    }
}

/// Wrap a producer returning `Optional<T>` as a stream.
///
/// The producer is not fused: a producer that returns a value after an
/// absent will be seen again by a direct `next()`. Every combinator built on
/// top latches at the first absent, and [`fuse`](super::UtilityStreamExt::fuse)
/// does the same for a bare producer.
pub fn make_stream<T, F>(f: F) -> FromFn<F>
where F: FnMut() -> Optional<T> {
    FromFn { f }
}

#[derive(Clone)]
pub struct RepeatWith<F> {
    pub(crate) f: F,
}

impl<T, F> Stream for RepeatWith<F>
where F: FnMut() -> T {
    type Item = T;
    fn next(&mut self) -> Optional<T> {
        Optional::some((self.f)())
    }
}

/// Infinite stream calling `f` for every element.
pub fn repeat_with<T, F>(f: F) -> RepeatWith<F>
where F: FnMut() -> T {
    RepeatWith { f }
}

// ================================
// Value-based Constructors
// ================================

/// Finite stream over a fixed sequence of values.
#[derive(Clone)]
pub struct Values<I> {
    pub(crate) iter: std::iter::Fuse<I>,
}

impl<I> Stream for Values<I>
where I: Iterator {
    type Item = I::Item;
    fn next(&mut self) -> Optional<I::Item> {
        self.iter.next().into()
    }
}

/// Stream that yields each element of `values` once, in order, then stays
/// exhausted.
pub fn from_iter<I>(values: I) -> Values<I::IntoIter>
where I: IntoIterator {
    Values { iter: values.into_iter().fuse() }
}

pub struct Empty<T> {
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Empty { _phantom: PhantomData }
    }
}

impl<T> Stream for Empty<T> {
    type Item = T;
    fn next(&mut self) -> Optional<T> {
        Optional::none()
    }
}

pub fn empty<T>() -> Empty<T> {
    Empty { _phantom: PhantomData }
}

#[derive(Clone)]
pub struct Once<T> {
    pub(crate) value: Optional<T>,
}

impl<T> Stream for Once<T> {
    type Item = T;
    fn next(&mut self) -> Optional<T> {
        self.value.take()
    }
}

pub fn once<T>(value: T) -> Once<T> {
    Once { value: Optional::some(value) }
}

#[derive(Clone)]
pub struct Repeat<T> {
    pub(crate) value: T,
}

impl<T: Clone> Stream for Repeat<T> {
    type Item = T;
    fn next(&mut self) -> Optional<T> {
        Optional::some(self.value.clone())
    }
}

/// Infinite stream of clones of `value`.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}
