//! plusar: lazy, composable, pull-based streams
//!
//! ```
//! use plusar::prelude::*;
//!
//! let total = from_iter([1, 2, 3, 4])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .reduce(0, |acc, x| acc + x)
//!     .collect();
//! assert_eq!(total, Ok(60));
//! ```

pub mod error;
pub mod optional;
pub mod stream;

pub mod environment;
pub mod stream_configuration;

pub use environment::{Environment, Source};
pub use error::{StreamError, StreamResult};
pub use optional::{make_optional, Optional};
pub use stream_configuration::{ConfigError, EnvironmentConfig};

/// Traits and constructors needed to build pipelines
pub mod prelude {
    pub use crate::error::{StreamError, StreamResult};
    pub use crate::optional::{make_optional, Optional};
    pub use crate::stream::{
        empty, from_iter, make_stream, once, repeat, repeat_with, AdvancedStreamExt, Stream,
        StreamExt, UtilityStreamExt,
    };
}
