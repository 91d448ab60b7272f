//! Logging shim.
//!
//! With the `tracing` feature the macros below are `tracing`'s own. Without it
//! they swallow their arguments, so geometry code can log unconditionally.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace, warn};
