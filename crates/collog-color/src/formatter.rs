//! Writes tag-annotated text and styled buffers to a color sink

use std::io;

use termcolor::WriteColor;

use crate::palette::ColorType;
use crate::styled::StyledText;
use crate::tags::{self, Token};

/// Renders tag-annotated text and styled buffers onto a color sink.
///
/// The `enabled` flag decides whether any color codes are emitted at all.
/// When it is off, tags are stripped and only literal text reaches the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    enabled: bool,
}

impl Formatter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Expand color tags in `text` and write the result.
    ///
    /// A malformed tag is written as literal text; the well-formed tags
    /// around it are still expanded, or stripped when colors are off.
    pub fn printf<W: WriteColor + ?Sized>(&self, sink: &mut W, text: &str) -> io::Result<()> {
        for token in tags::tokenize(text) {
            match token {
                Token::Text(s) => sink.write_all(s.as_bytes())?,
                Token::Color(color) => self.set_color(sink, color)?,
                Token::Reset => self.reset(sink)?,
            }
        }
        Ok(())
    }

    /// Switch the sink's foreground color
    pub fn set_color<W: WriteColor + ?Sized>(&self, sink: &mut W, color: ColorType) -> io::Result<()> {
        if self.enabled {
            sink.set_color(&color.spec())?;
        }
        Ok(())
    }

    /// Return the sink to its default colors
    pub fn reset<W: WriteColor + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        if self.enabled {
            sink.reset()?;
        }
        Ok(())
    }

    /// Write every segment of `styled`, resetting after each colored one
    pub fn print<W: WriteColor + ?Sized>(&self, sink: &mut W, styled: &StyledText) -> io::Result<()> {
        for segment in styled.segments() {
            match segment.color {
                Some(color) => {
                    self.set_color(sink, color)?;
                    sink.write_all(segment.text.as_bytes())?;
                    self.reset(sink)?;
                }
                None => sink.write_all(segment.text.as_bytes())?,
            }
        }
        Ok(())
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(true)
    }
}
