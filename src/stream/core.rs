//! Core stream trait and the basic combinators: map, filter, reduce, take, skip
//!
//! A stream is anything that can be pulled for its next element. Each
//! combinator owns its upstream by value and pulls it on demand; nothing is
//! buffered between stages. Every stage remembers the first absent result it
//! sees and answers absent from then on, whatever its source would do.

use crate::error::StreamResult;
use crate::optional::Optional;

/// Pull-based lazy sequence
pub trait Stream {
    type Item;

    /// Pull the next element. An empty `Optional` means the stream is exhausted.
    fn next(&mut self) -> Optional<Self::Item>;
}

impl<S: Stream + ?Sized> Stream for &mut S {
    type Item = S::Item;

    fn next(&mut self) -> Optional<Self::Item> {
        (**self).next()
    }
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    type Item = S::Item;

    fn next(&mut self) -> Optional<Self::Item> {
        (**self).next()
    }
}

/// Extension trait providing the core combinators and terminal operations
pub trait StreamExt: Stream + Sized {
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where F: FnMut(Self::Item) -> U;
    fn filter<F>(self, pred: F) -> Filter<Self, F>
    where F: FnMut(&Self::Item) -> bool;
    fn reduce<B, F>(self, initial: B, f: F) -> Reduce<Self, B, F>
    where F: FnMut(B, Self::Item) -> B;
    fn take(self, n: usize) -> Take<Self>;
    fn skip(self, n: usize) -> Skip<Self>;
    /// Borrow the stream so a combinator chain can be built without consuming it
    fn by_ref(&mut self) -> &mut Self;
    /// Pull exactly once and return the element, or `EmptyAccess`.
    fn collect(&mut self) -> StreamResult<Self::Item>;
    /// Pull until exhausted, appending every element to `sink` in order.
    fn collect_into<E>(&mut self, sink: &mut E)
    where E: Extend<Self::Item>;
    fn to_vec(&mut self) -> Vec<Self::Item>;
}

impl<S: Stream + Sized> StreamExt for S {
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where F: FnMut(Self::Item) -> U,
    {
        Map { stream: self, f, done: false }
    }

    fn filter<F>(self, pred: F) -> Filter<Self, F>
    where F: FnMut(&Self::Item) -> bool,
    {
        Filter { stream: self, pred, done: false }
    }

    fn reduce<B, F>(self, initial: B, f: F) -> Reduce<Self, B, F>
    where F: FnMut(B, Self::Item) -> B,
    {
        Reduce { stream: self, initial: Some(initial), f }
    }

    fn take(self, n: usize) -> Take<Self> {
        Take { stream: self, limit: n, taken: 0, done: false }
    }

    fn skip(self, n: usize) -> Skip<Self> {
        Skip { stream: self, remaining: n, done: false }
    }

    fn by_ref(&mut self) -> &mut Self {
        self
    }

    fn collect(&mut self) -> StreamResult<Self::Item> {
        self.next().into_value()
    }

    fn collect_into<E>(&mut self, sink: &mut E)
    where E: Extend<Self::Item>,
    {
        while let Some(item) = self.next().into_option() {
            sink.extend(std::iter::once(item));
        }
    }

    fn to_vec(&mut self) -> Vec<Self::Item> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }
}

// Map
#[derive(Clone)]
pub struct Map<S, F> {
    pub(crate) stream: S,
    pub(crate) f: F,
    pub(crate) done: bool,
}

impl<S, U, F> Stream for Map<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Optional<U> {
        if self.done {
            return Optional::none();
        }
        match self.stream.next().into_option() {
            Some(item) => Optional::some((self.f)(item)),
            None => {
                self.done = true;
                Optional::none()
            }
        }
    }
}

// Filter
#[derive(Clone)]
pub struct Filter<S, F> {
    pub(crate) stream: S,
    pub(crate) pred: F,
    pub(crate) done: bool,
}

impl<S, F> Stream for Filter<S, F>
where
    S: Stream,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Optional<S::Item> {
        if self.done {
            return Optional::none();
        }
        loop {
            match self.stream.next().into_option() {
                Some(item) => {
                    if (self.pred)(&item) {
                        return Optional::some(item);
                    }
                }
                None => {
                    self.done = true;
                    return Optional::none();
                }
            }
        }
    }
}

// Reduce
/// Single-shot fold: the first pull drains the source and yields the
/// accumulated value, every later pull is absent.
#[derive(Clone)]
pub struct Reduce<S, B, F> {
    pub(crate) stream: S,
    pub(crate) initial: Option<B>,
    pub(crate) f: F,
}

impl<S, B, F> Stream for Reduce<S, B, F>
where
    S: Stream,
    F: FnMut(B, S::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Optional<B> {
        let Some(mut acc) = self.initial.take() else {
            return Optional::none();
        };
        while let Some(item) = self.stream.next().into_option() {
            acc = (self.f)(acc, item);
        }
        Optional::some(acc)
    }
}

// Take
#[derive(Clone)]
pub struct Take<S> {
    pub(crate) stream: S,
    pub(crate) limit: usize,
    pub(crate) taken: usize,
    pub(crate) done: bool,
}

impl<S> Take<S> {
    /// Elements this stage has yielded so far.
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl<S: Stream> Stream for Take<S> {
    type Item = S::Item;

    fn next(&mut self) -> Optional<S::Item> {
        // the source is never pulled once the limit is reached
        if self.done || self.taken >= self.limit {
            return Optional::none();
        }
        let item = self.stream.next();
        if item.has_value() {
            self.taken += 1;
        } else {
            self.done = true;
        }
        item
    }
}

// Skip
#[derive(Clone)]
pub struct Skip<S> {
    pub(crate) stream: S,
    pub(crate) remaining: usize,
    pub(crate) done: bool,
}

impl<S: Stream> Stream for Skip<S> {
    type Item = S::Item;

    fn next(&mut self) -> Optional<S::Item> {
        if self.done {
            return Optional::none();
        }
        while self.remaining > 0 {
            if self.stream.next().is_empty() {
                self.done = true;
                return Optional::none();
            }
            self.remaining -= 1;
        }
        let item = self.stream.next();
        if item.is_empty() {
            self.done = true;
        }
        item
    }
}
