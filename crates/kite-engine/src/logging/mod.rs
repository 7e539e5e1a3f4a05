//! Logging setup.
//!
//! The engine itself only emits through the `log` facade:
//! - `trace` for per-frame pipeline and tween activity
//! - `debug` for values and bindings that were silently defaulted or disabled
//! - `warn` for scene-graph calls that were ignored
//!
//! Hosts that have no logger of their own can call [`init_logging`] early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
