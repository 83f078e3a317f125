//! Console stream selection and color detection

use serde::{Deserialize, Serialize};
use termcolor::{ColorChoice, StandardStream};

/// Standard console stream that receives log output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Stdout,
    #[default]
    Stderr,
}

/// When color codes are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only if the target is a terminal that supports it
    #[default]
    Auto,
    Always,
    Never,
}

impl Target {
    /// Whether the attached terminal accepts color codes.
    ///
    /// Honors `CLICOLOR`/`CLICOLOR_FORCE` through `console`, and `NO_COLOR`.
    pub fn colors_supported(self) -> bool {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return false;
        }
        match self {
            Target::Stdout => console::colors_enabled(),
            Target::Stderr => console::colors_enabled_stderr(),
        }
    }

    /// Open the console stream for this target
    pub fn stream(self, mode: ColorMode) -> StandardStream {
        let choice = mode.choice();
        match self {
            Target::Stdout => StandardStream::stdout(choice),
            Target::Stderr => StandardStream::stderr(choice),
        }
    }
}

impl ColorMode {
    /// Resolve the mode to a yes/no decision for `target`
    pub fn resolve(self, target: Target) -> bool {
        match self {
            ColorMode::Auto => target.colors_supported(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}
