//! Frame sinks.
//!
//! Sinks consume rendered frames in redraw order and are driven by `ScreenSession::run`.

/// Generic frame sink trait and built-in sinks.
pub mod sink;
