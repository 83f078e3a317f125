//! Color formatting service for the collog console logger.
//!
//! Expands inline color tags such as `"{+green}OK{}"`, prints multi-segment
//! styled text, and opens the standard console streams with the right color
//! choice. Color output is controlled per [`Formatter`] value rather than by
//! process-wide state.

pub mod error;
pub mod formatter;
pub mod palette;
pub mod styled;
pub mod tags;
pub mod target;

pub use crate::error::{ColorError, ColorResult};
pub use crate::formatter::Formatter;
pub use crate::palette::{ColorType, Ctrl};
pub use crate::styled::{Segment, StyledText};
pub use crate::target::{ColorMode, Target};
