//! Log construction settings loaded from TOML and the environment

use std::path::Path;

use collog_color::{tags, ColorMode, Target};
use serde::{Deserialize, Serialize};

use crate::error::CollogResult;
use crate::log::HeaderPolicy;

/// Construction parameters for a [`ColorLog`](crate::ColorLog)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Text written before each logical line; may carry color tags
    pub header: String,
    /// Initial state of the gate
    pub enabled: bool,
    /// Console stream receiving the output
    pub target: Target,
    /// Which calls are headered
    pub header_policy: HeaderPolicy,
    /// When color codes are emitted
    pub color: ColorMode,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            header: String::new(),
            enabled: true,
            target: Target::default(),
            header_policy: HeaderPolicy::default(),
            color: ColorMode::default(),
        }
    }
}

impl LogConfig {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> CollogResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Create config from TOML string
    pub fn from_toml(content: &str) -> CollogResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Convert config to TOML string
    pub fn to_toml(&self) -> CollogResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CollogResult<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Apply environment overrides.
    ///
    /// `NO_COLOR` forces colors off; `COLLOG_DISABLE` set to anything but
    /// an empty string or `0` closes the gate.
    pub fn apply_env(mut self) -> Self {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.color = ColorMode::Never;
        }
        if std::env::var("COLLOG_DISABLE").is_ok_and(|v| !v.is_empty() && v != "0") {
            self.enabled = false;
        }
        self
    }

    /// Check that the header's color tags are well formed
    pub fn validate(&self) -> CollogResult<()> {
        tags::parse(&self.header)?;
        Ok(())
    }

    /// Whether color codes will be emitted on the configured target
    pub fn color_enabled(&self) -> bool {
        self.color.resolve(self.target)
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = policy;
        self
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollogError;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = LogConfig::from_toml("header = \"[build] \"").unwrap();
        assert_eq!(config.header, "[build] ");
        assert!(config.enabled);
        assert_eq!(config.target, Target::Stderr);
        assert_eq!(config.header_policy, HeaderPolicy::EveryWrite);
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = LogConfig::from_toml(
            r#"
            header = "{+cyan}svc{} "
            enabled = false
            target = "stdout"
            header_policy = "print_only"
            color = "never"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            LogConfig::new("{+cyan}svc{} ")
                .with_enabled(false)
                .with_target(Target::Stdout)
                .with_header_policy(HeaderPolicy::PrintOnly)
                .with_color(ColorMode::Never)
        );
        assert!(!config.color_enabled());
    }

    #[test]
    fn test_invalid_toml() {
        let err = LogConfig::from_toml("target = \"printer\"").unwrap_err();
        assert!(matches!(err, CollogError::Config(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collog.toml");

        let config = LogConfig::new("H ").with_color(ColorMode::Always);
        config.save(&path).unwrap();
        assert_eq!(LogConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = LogConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CollogError::Io(_)));
    }

    // All environment mutation lives in this one test so it cannot race
    #[test]
    fn test_apply_env() {
        std::env::remove_var("NO_COLOR");
        std::env::remove_var("COLLOG_DISABLE");
        let config = LogConfig::new("H ").with_color(ColorMode::Always).apply_env();
        assert!(config.enabled);
        assert_eq!(config.color, ColorMode::Always);

        std::env::set_var("COLLOG_DISABLE", "1");
        assert!(!LogConfig::new("H ").apply_env().enabled);

        std::env::set_var("COLLOG_DISABLE", "0");
        assert!(LogConfig::new("H ").apply_env().enabled);

        std::env::set_var("COLLOG_DISABLE", "");
        assert!(LogConfig::new("H ").apply_env().enabled);

        std::env::set_var("NO_COLOR", "1");
        let config = LogConfig::new("H ").with_color(ColorMode::Always).apply_env();
        assert_eq!(config.color, ColorMode::Never);
        assert!(config.enabled);

        std::env::remove_var("NO_COLOR");
        std::env::remove_var("COLLOG_DISABLE");
    }

    #[test]
    fn test_validate_header() {
        assert!(LogConfig::new("{+green}ok{} ").validate().is_ok());
        let err = LogConfig::new("{+teal}bad").validate().unwrap_err();
        assert!(matches!(err, CollogError::Color(_)));
    }
}
