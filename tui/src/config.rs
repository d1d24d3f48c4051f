//! Explicit configuration passed into the widgets at construction.
//!
//! There is no global configuration object; the host loads (or builds) a
//! [`Config`] and hands each widget the section it cares about.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Options recognized by the console widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Show the long multi-line startup banner instead of the one-line
    /// version.
    pub show_banner: bool,
    /// Light console colors; off selects the dark style.
    pub light_color: bool,
    /// Ask the kernel for the interactive plotting namespace.
    pub pylab: bool,
    /// Populate the plotting namespace automatically at startup.
    pub pylab_autoload: bool,
    /// Load the symbolic math preamble at startup.
    pub symbolic_math: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            light_color: true,
            pylab: true,
            pylab_autoload: true,
            symbolic_math: true,
        }
    }
}

/// Options recognized by the overview strip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlagStripConfig {
    pub enabled: bool,
}

impl Default for FlagStripConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shell: ShellConfig,
    pub flag_strip: FlagStripConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::parse(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_enable_everything() {
        let config = Config::default();
        assert!(config.shell.show_banner);
        assert!(config.shell.pylab);
        assert!(config.flag_strip.enabled);
    }

    #[test]
    fn partial_toml_overrides_only_named_options() {
        let config = Config::parse(
            r#"
            [shell]
            show_banner = false
            symbolic_math = false

            [flag_strip]
            enabled = false
            "#,
        )
        .unwrap();
        assert!(!config.shell.show_banner);
        assert!(!config.shell.symbolic_math);
        assert!(config.shell.pylab, "untouched options keep their defaults");
        assert!(!config.flag_strip.enabled);
    }

    #[test]
    fn unknown_tables_are_tolerated() {
        let config = Config::parse("[editor]\ntab_width = 4\n").unwrap();
        assert_eq!(config, Config::default());
    }
}
