//! Multi-segment colored text built up before printing

use std::fmt::{self, Display};

use crate::palette::ColorType;

/// A run of text with an optional foreground color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub color: Option<ColorType>,
    pub text: String,
}

/// Ordered colored segments, printed as one unit.
///
/// Segment text is literal; tags are not expanded. Each colored segment is
/// followed by a reset when printed, so color never carries past the
/// segment that asked for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    segments: Vec<Segment>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single colored segment
    pub fn colored(color: ColorType, text: impl Display) -> Self {
        let mut styled = Self::new();
        styled.push(color, text);
        styled
    }

    /// Append uncolored text
    pub fn add(&mut self, text: impl Display) -> &mut Self {
        self.append(None, text.to_string())
    }

    /// Append text in `color`
    pub fn push(&mut self, color: ColorType, text: impl Display) -> &mut Self {
        self.append(Some(color), text.to_string())
    }

    fn append(&mut self, color: Option<ColorType>, text: String) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        match self.segments.last_mut() {
            Some(last) if last.color == color => last.text.push_str(&text),
            _ => self.segments.push(Segment { color, text }),
        }
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Text with all color information dropped
    pub fn plain(&self) -> String {
        self.to_string()
    }
}

impl Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

impl std::ops::AddAssign<&str> for StyledText {
    fn add_assign(&mut self, rhs: &str) {
        self.add(rhs);
    }
}

impl std::ops::AddAssign<char> for StyledText {
    fn add_assign(&mut self, rhs: char) {
        self.add(rhs);
    }
}
