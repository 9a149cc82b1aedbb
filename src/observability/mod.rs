//! Logging and diagnostics.
//!
//! The logging handle is built once in `main` from configuration and passed
//! down; library code only uses `tracing` macros and never touches global
//! subscriber state.

pub mod logging;

pub use logging::{Logging, LoggingConfig, DEFAULT_LOG_FILE};
