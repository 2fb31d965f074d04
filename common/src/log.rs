//! Logging macros shared across the workspace.
//!
//! The macros forward to `tracing`, so the subscriber installed by the
//! binary decides how (and whether) an event is rendered. Crates depending
//! on `revip-common` do not need their own `tracing` dependency to log.

/// Target under which user-facing lines are emitted verbatim.
pub const PRINT_TARGET: &str = "revip::print";

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}
