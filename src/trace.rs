//! Optional structured logging.
//!
//! With the `tracing` feature enabled, `search_event!` forwards to
//! `tracing::debug!`; without it the macro expands to nothing and its
//! arguments are never evaluated.

#[cfg(feature = "tracing")]
macro_rules! search_event {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! search_event {
    ($($arg:tt)*) => {};
}

pub(crate) use search_event;
