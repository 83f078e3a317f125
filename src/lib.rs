//! Gated, header-prefixed colorized console logging.
//!
//! This crate re-exports the logging stream from `collog-core` and the
//! color formatting service from `collog-color`.

pub use collog_color as color;
pub use collog_core as core;

pub use collog_color::{ColorMode, ColorType, Ctrl, Formatter, StyledText, Target};
pub use collog_core::{
    plain, render_progress, CollogError, CollogResult, ColorLog, GatedStream, HeaderPolicy,
    LogConfig, ProgressLine, Severity,
};

/// Install a `tracing` subscriber for the crate's internal diagnostics.
///
/// Defaults to `warn` when `RUST_LOG` is unset. Does nothing if a global
/// subscriber is already installed.
pub fn init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Version of collog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
