//! In-place progress bar lines
//!
//! A line looks like `[.....     ] 50%` followed by `'\r'` while the bar is
//! incomplete, so the next line overwrites it, and by `'\n'` once complete.

use collog_color::{ColorType, StyledText};
use termcolor::WriteColor;
use tracing::debug;

use crate::log::ColorLog;

/// Character used for the completed part of the bar
pub const FILL_GLYPH: char = '.';

/// Upper bound for the bar width
pub const MAX_PERCENTAGE: i32 = 100;

/// A clamped, renderable progress state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressLine {
    percentage: usize,
    max_percentage: usize,
}

/// Clamp the inputs and build a progress line.
///
/// `max_percentage` is capped at 100 and `percentage` floored at 0. Returns
/// `None`, meaning nothing should be printed, when `percentage` still
/// exceeds `max_percentage` or when `max_percentage` is zero.
pub fn render_progress(percentage: i32, max_percentage: i32) -> Option<ProgressLine> {
    let max_percentage = max_percentage.min(MAX_PERCENTAGE);
    let percentage = percentage.max(0);

    if percentage > max_percentage || max_percentage == 0 {
        return None;
    }

    Some(ProgressLine {
        percentage: percentage as usize,
        max_percentage: max_percentage as usize,
    })
}

impl ProgressLine {
    pub fn percentage(&self) -> usize {
        self.percentage
    }

    pub fn max_percentage(&self) -> usize {
        self.max_percentage
    }

    pub fn is_complete(&self) -> bool {
        self.percentage == self.max_percentage
    }

    /// Displayed percent, rounded down
    pub fn percent(&self) -> usize {
        self.percentage * 100 / self.max_percentage
    }

    /// Fill glyphs padded with spaces to `max_percentage` characters
    pub fn bar(&self) -> String {
        let mut bar = String::from(FILL_GLYPH).repeat(self.percentage);
        bar.push_str(&" ".repeat(self.max_percentage - self.percentage));
        bar
    }

    pub fn bar_color(&self) -> ColorType {
        if self.is_complete() {
            ColorType::GreenBright
        } else {
            ColorType::YellowBright
        }
    }

    pub fn terminator(&self) -> char {
        if self.is_complete() {
            '\n'
        } else {
            '\r'
        }
    }

    /// The full colored line, terminator included
    pub fn styled(&self) -> StyledText {
        let mut line = StyledText::colored(ColorType::CyanBright, "[");
        line.push(self.bar_color(), self.bar())
            .push(ColorType::CyanBright, "] ")
            .push(ColorType::WhiteBright, self.percent())
            .add('%')
            .add(self.terminator());
        line
    }
}

impl<W: WriteColor> ColorLog<W> {
    /// Print a progress line out of 100
    pub fn progress(&mut self, percentage: i32) {
        self.progress_of(percentage, MAX_PERCENTAGE);
    }

    /// Print a progress line out of `max_percentage` (capped at 100).
    ///
    /// Prints nothing when the clamped inputs cannot form a bar.
    pub fn progress_of(&mut self, percentage: i32, max_percentage: i32) {
        if !self.is_enabled() {
            return;
        }
        match render_progress(percentage, max_percentage) {
            Some(line) => self.print_styled(&line.styled()),
            None => debug!(percentage, max_percentage, "progress line skipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_half_bar() {
        let line = render_progress(50, 100).unwrap();
        assert_eq!(line.bar(), format!("{}{}", ".".repeat(50), " ".repeat(50)));
        assert_eq!(line.bar_color(), ColorType::YellowBright);
        assert_eq!(line.percent(), 50);
        assert_eq!(line.terminator(), '\r');
    }

    #[test]
    fn test_complete_bar() {
        let line = render_progress(100, 100).unwrap();
        assert_eq!(line.bar(), ".".repeat(100));
        assert_eq!(line.bar_color(), ColorType::GreenBright);
        assert_eq!(line.percent(), 100);
        assert_eq!(line.terminator(), '\n');
    }

    #[test]
    fn test_clamping() {
        assert_eq!(render_progress(-5, 100), render_progress(0, 100));
        assert_eq!(render_progress(10, 150), render_progress(10, 100));
    }

    #[test]
    fn test_skipped_lines() {
        assert_eq!(render_progress(60, 50), None);
        assert_eq!(render_progress(0, 0), None);
        assert_eq!(render_progress(0, -10), None);
    }

    #[test]
    fn test_percent_rounds_down() {
        let line = render_progress(1, 3).unwrap();
        assert_eq!(line.percent(), 33);
        assert_eq!(line.bar(), ".  ");
    }

    #[test]
    fn test_styled_plain_text() {
        let line = render_progress(2, 4).unwrap();
        assert_eq!(line.styled().plain(), "[..  ] 50%\r");
    }

    proptest! {
        #[test]
        fn prop_bar_width_matches_max(percentage in -50i32..200, max in -10i32..300) {
            if let Some(line) = render_progress(percentage, max) {
                let capped = max.min(MAX_PERCENTAGE) as usize;
                prop_assert_eq!(line.bar().chars().count(), capped);
                prop_assert_eq!(line.bar().chars().filter(|&c| c == FILL_GLYPH).count(), line.percentage());
                prop_assert!(line.percent() <= 100);
            } else {
                prop_assert!(percentage.max(0) > max.min(MAX_PERCENTAGE) || max.min(MAX_PERCENTAGE) <= 0);
            }
        }
    }
}
