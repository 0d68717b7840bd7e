//! Environment: a configured factory for source streams
//!
//! An `Environment` turns producers and fixed sequences into [`Source`]
//! streams that carry the environment's settings: optional pull tracing and
//! an optional cap on the number of elements each source yields.

use std::sync::Arc;

use crate::optional::Optional;
use crate::stream::{from_iter, make_stream, FromFn, Stream, Values};
use crate::stream_configuration::EnvironmentConfig;

#[derive(Debug, Clone, Default)]
pub struct Environment {
    config: EnvironmentConfig,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EnvironmentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    /// Source stream driven by `producer`.
    pub fn source<T, F>(&self, producer: F) -> Source<FromFn<F>>
    where
        F: FnMut() -> Optional<T>,
    {
        self.wrap(make_stream(producer))
    }

    /// Source stream over a fixed sequence of values.
    pub fn source_iter<I>(&self, values: I) -> Source<Values<I::IntoIter>>
    where
        I: IntoIterator,
    {
        self.wrap(from_iter(values))
    }

    fn wrap<S: Stream>(&self, stream: S) -> Source<S> {
        log::debug!(
            "{}: new source (trace_pulls={}, max_pulls_per_source={:?})",
            self.config.name,
            self.config.trace_pulls,
            self.config.max_pulls_per_source
        );
        Source {
            stream,
            label: Arc::from(self.config.name.as_str()),
            trace: self.config.trace_pulls,
            limit: self.config.max_pulls_per_source,
            pulls: 0,
            yielded: 0,
            done: false,
        }
    }
}

/// A stream created by an [`Environment`].
#[derive(Clone)]
pub struct Source<S> {
    stream: S,
    label: Arc<str>,
    trace: bool,
    limit: Option<usize>,
    pulls: usize,
    yielded: usize,
    done: bool,
}

impl<S> Source<S> {
    /// Times the underlying stream has been pulled.
    pub fn pulls(&self) -> usize {
        self.pulls
    }

    fn finish(&mut self) {
        self.done = true;
        log::debug!("{}: source exhausted after {} elements", self.label, self.yielded);
    }
}

impl<S: Stream> Stream for Source<S> {
    type Item = S::Item;

    fn next(&mut self) -> Optional<S::Item> {
        if self.done {
            return Optional::none();
        }
        if matches!(self.limit, Some(limit) if self.yielded >= limit) {
            self.finish();
            return Optional::none();
        }

        self.pulls += 1;
        let item = self.stream.next();
        if self.trace {
            log::trace!(
                "{}: pull #{} {}",
                self.label,
                self.pulls,
                if item.has_value() { "yielded an element" } else { "came back empty" }
            );
        }
        if item.has_value() {
            self.yielded += 1;
        } else {
            self.finish();
        }
        item
    }
}
