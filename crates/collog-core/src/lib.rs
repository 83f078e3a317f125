//! Gated, header-prefixed colorized logging stream.
//!
//! A [`ColorLog`] writes to a console sink only while enabled, prefixes each
//! logical line with a fixed header, and offers severity printers and an
//! in-place progress bar. Color rendering is delegated to `collog-color`.

pub mod config;
pub mod error;
pub mod log;
pub mod progress;
pub mod severity;
pub mod stream;

pub use crate::config::LogConfig;
pub use crate::error::{CollogError, CollogResult};
pub use crate::log::{ColorLog, HeaderPolicy};
pub use crate::progress::{render_progress, ProgressLine, FILL_GLYPH, MAX_PERCENTAGE};
pub use crate::severity::Severity;
pub use crate::stream::{plain, GatedStream, LogValue, Plain};
