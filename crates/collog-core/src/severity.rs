//! Severity-labelled printers

use std::fmt;

use collog_color::{ColorType, StyledText};
use termcolor::WriteColor;

use crate::log::ColorLog;

/// Message category, each with a fixed label and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Success,
    Info,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR: ",
            Severity::Warning => "WARNING: ",
            Severity::Success => "SUCCESS: ",
            Severity::Info => "INFO: ",
            Severity::Critical => "FATAL ERROR: ",
        }
    }

    pub fn color(self) -> ColorType {
        match self {
            Severity::Error | Severity::Critical => ColorType::RedBright,
            Severity::Warning => ColorType::YellowBright,
            Severity::Success => ColorType::GreenBright,
            Severity::Info => ColorType::CyanBright,
        }
    }

    /// Colored label followed by the message, verbatim
    pub fn styled(self, message: &str) -> StyledText {
        let mut styled = StyledText::colored(self.color(), self.label());
        styled.add(message);
        styled
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end_matches([':', ' ']))
    }
}

impl<W: WriteColor> ColorLog<W> {
    /// Header, colored severity label, then `message` as-is.
    ///
    /// No newline is appended.
    pub fn severity(&mut self, severity: Severity, message: &str) {
        if !self.is_enabled() {
            return;
        }
        self.print_styled(&severity.styled(message));
    }

    pub fn error(&mut self, message: &str) {
        self.severity(Severity::Error, message);
    }

    pub fn warning(&mut self, message: &str) {
        self.severity(Severity::Warning, message);
    }

    pub fn success(&mut self, message: &str) {
        self.severity(Severity::Success, message);
    }

    pub fn info(&mut self, message: &str) {
        self.severity(Severity::Info, message);
    }

    pub fn critical(&mut self, message: &str) {
        self.severity(Severity::Critical, message);
    }
}
