//! Utility stream combinators: counted, fuse, inspect, trace, into_iterator
use super::core::Stream;
use crate::optional::Optional;

// Counted
/// Forwards its source and counts the elements it has yielded.
#[derive(Clone)]
pub struct Counted<S> {
    pub(crate) stream: S,
    pub(crate) count: usize,
    pub(crate) done: bool,
}

impl<S> Counted<S> {
    /// Elements yielded by this stage's own pulls.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<S: Stream> Stream for Counted<S> {
    type Item = S::Item;

    fn next(&mut self) -> Optional<S::Item> {
        if self.done {
            return Optional::none();
        }
        let item = self.stream.next();
        if item.has_value() {
            self.count = self.count.saturating_add(1);
        } else {
            self.done = true;
        }
        item
    }
}

// Fuse
#[derive(Clone)]
pub struct Fuse<S> {
    pub(crate) stream: S,
    pub(crate) done: bool,
}

impl<S> Fuse<S> {
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<S: Stream> Stream for Fuse<S> {
    type Item = S::Item;

    fn next(&mut self) -> Optional<S::Item> {
        if self.done {
            return Optional::none();
        }
        let item = self.stream.next();
        if item.is_empty() {
            self.done = true;
        }
        item
    }
}

// Inspect
#[derive(Clone)]
pub struct Inspect<S, F> {
    pub(crate) stream: S,
    pub(crate) f: F,
    pub(crate) done: bool,
}

impl<S, F> Stream for Inspect<S, F>
where
    S: Stream,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    fn next(&mut self) -> Optional<S::Item> {
        if self.done {
            return Optional::none();
        }
        let item = self.stream.next();
        match item.as_option() {
            Some(value) => (self.f)(value),
            None => self.done = true,
        }
        item
    }
}

// Trace
/// Logs every pull of its source through the `log` facade.
#[derive(Clone)]
pub struct Trace<S> {
    pub(crate) stream: S,
    pub(crate) label: String,
    pub(crate) pulls: usize,
    pub(crate) done: bool,
}

impl<S: Stream> Stream for Trace<S> {
    type Item = S::Item;

    fn next(&mut self) -> Optional<S::Item> {
        if self.done {
            return Optional::none();
        }
        self.pulls += 1;
        let item = self.stream.next();
        if item.has_value() {
            log::trace!("{}: pull #{} yielded an element", self.label, self.pulls);
        } else {
            self.done = true;
            log::debug!("{}: exhausted after {} pulls", self.label, self.pulls);
        }
        item
    }
}

// Iter
/// Adapter exposing a stream as a `std::iter::Iterator`.
#[derive(Clone)]
pub struct Iter<S> {
    pub(crate) stream: S,
}

impl<S: Stream> Iterator for Iter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.stream.next().into_option()
    }
}

pub trait UtilityStreamExt: Stream + Sized {
    /// Count the elements that pass through this stage
    fn counted(self) -> Counted<Self> {
        Counted { stream: self, count: 0, done: false }
    }

    /// Stay exhausted after the first absent pull
    fn fuse(self) -> Fuse<Self> {
        Fuse { stream: self, done: false }
    }

    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        Inspect { stream: self, f, done: false }
    }

    /// Log each pull at `trace` level and exhaustion at `debug` level
    fn trace(self, label: impl Into<String>) -> Trace<Self> {
        Trace { stream: self, label: label.into(), pulls: 0, done: false }
    }

    fn into_iterator(self) -> Iter<Self> {
        Iter { stream: self }
    }
}

impl<T> UtilityStreamExt for T where T: Stream {}
