//! Advanced stream combinators: zip, flatten, slice, slice_to_end
use super::core::{Stream, StreamExt, Take};
use crate::optional::Optional;

// ================================
// Zip
// ================================

/// Pairs elements of two streams through `f`.
///
/// Both sides are pulled on every step, even when the first one is already
/// exhausted, so side effects in either producer happen in lockstep.
#[derive(Clone)]
pub struct Zip<S1, S2, F> {
    pub(crate) s1: S1,
    pub(crate) s2: S2,
    pub(crate) f: F,
    pub(crate) done: bool,
}

impl<S1, S2, U, F> Stream for Zip<S1, S2, F>
where
    S1: Stream,
    S2: Stream,
    F: FnMut(S1::Item, S2::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Optional<U> {
        if self.done {
            return Optional::none();
        }
        let left = self.s1.next();
        let right = self.s2.next();
        match (left.into_option(), right.into_option()) {
            (Some(a), Some(b)) => Optional::some((self.f)(a, b)),
            _ => {
                self.done = true;
                Optional::none()
            }
        }
    }
}

// ================================
// Flatten
// ================================

pub struct Flatten<S>
where
    S: Stream,
    S::Item: Stream,
{
    pub(crate) stream: S,
    pub(crate) inner: Option<S::Item>,
    pub(crate) done: bool,
}

impl<S> Clone for Flatten<S>
where
    S: Stream + Clone,
    S::Item: Stream + Clone,
{
    fn clone(&self) -> Self {
        Flatten {
            stream: self.stream.clone(),
            inner: self.inner.clone(),
            done: self.done,
        }
    }
}

impl<S> Stream for Flatten<S>
where
    S: Stream,
    S::Item: Stream,
{
    type Item = <S::Item as Stream>::Item;

    fn next(&mut self) -> Optional<Self::Item> {
        if self.done {
            return Optional::none();
        }
        loop {
            if let Some(inner) = self.inner.as_mut() {
                let item = inner.next();
                if item.has_value() {
                    return item;
                }
                self.inner = None;
            }

            // outer stream is only pulled once the current inner one is spent
            match self.stream.next().into_option() {
                Some(inner) => self.inner = Some(inner),
                None => {
                    self.done = true;
                    return Optional::none();
                }
            }
        }
    }
}

// ================================
// Slicing
// ================================

/// Skips `start` elements, then yields every `step`-th element until the
/// source runs out.
#[derive(Clone)]
pub struct SliceToEnd<S> {
    pub(crate) stream: S,
    pub(crate) start: usize,
    pub(crate) step: usize,
    pub(crate) started: bool,
    pub(crate) done: bool,
}

impl<S: Stream> SliceToEnd<S> {
    fn discard(&mut self, n: usize) -> bool {
        for _ in 0..n {
            if self.stream.next().is_empty() {
                self.done = true;
                return false;
            }
        }
        true
    }
}

impl<S: Stream> Stream for SliceToEnd<S> {
    type Item = S::Item;

    fn next(&mut self) -> Optional<S::Item> {
        if self.done {
            return Optional::none();
        }
        let gap = if self.started { self.step - 1 } else { self.start };
        self.started = true;
        if !self.discard(gap) {
            return Optional::none();
        }
        let item = self.stream.next();
        if item.is_empty() {
            self.done = true;
        }
        item
    }
}

/// `slice_to_end(start, step)` bounded to the elements below index `end`.
pub type Slice<S> = Take<SliceToEnd<S>>;

/// Number of indices in `start..end` stepping by `step`.
fn slice_len(start: usize, end: usize, step: usize) -> usize {
    if end <= start {
        0
    } else {
        (end - start).div_ceil(step)
    }
}

// ================================
// Extension Trait
// ================================

pub trait AdvancedStreamExt: Stream + Sized {
    /// Combine two streams element by element through `f`
    fn zip<S2, U, F>(self, other: S2, f: F) -> Zip<Self, S2, F>
    where
        S2: Stream,
        F: FnMut(Self::Item, S2::Item) -> U,
    {
        Zip { s1: self, s2: other, f, done: false }
    }

    /// Flatten a stream of streams
    fn flatten(self) -> Flatten<Self>
    where
        Self::Item: Stream,
    {
        Flatten { stream: self, inner: None, done: false }
    }

    /// Skip `start` elements, then yield every `step`-th one. A `step` of 0
    /// is treated as 1.
    fn slice_to_end(self, start: usize, step: usize) -> SliceToEnd<Self> {
        SliceToEnd { stream: self, start, step: step.max(1), started: false, done: false }
    }

    /// Elements at indices `start, start + step, ...` strictly below `end`.
    /// A `step` of 0 is treated as 1; an `end` below `start` yields nothing.
    fn slice(self, start: usize, end: usize, step: usize) -> Slice<Self> {
        let step = step.max(1);
        let count = slice_len(start, end, step);
        self.slice_to_end(start, step).take(count)
    }
}

impl<T> AdvancedStreamExt for T where T: Stream {}
