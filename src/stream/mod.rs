//! Lazy pull-based streams
//!
//! Streams are built from a producer or a fixed sequence and composed with
//! statically typed combinators. Each stage owns its upstream by value; no
//! stage runs ahead of the consumer.

pub mod core;
pub mod constructors;
pub mod advanced;
pub mod utility;

// Re-export core types
pub use self::core::{Stream, StreamExt, Map, Filter, Reduce, Take, Skip};

// Re-export constructors
pub use self::constructors::{
    make_stream, from_iter, empty, once, repeat, repeat_with,
    FromFn, Values, Empty, Once, Repeat, RepeatWith,
};

// Re-export advanced combinators
pub use self::advanced::{Zip, Flatten, SliceToEnd, Slice, AdvancedStreamExt};

// Re-export utility combinators
pub use self::utility::{Counted, Fuse, Inspect, Trace, Iter, UtilityStreamExt};
