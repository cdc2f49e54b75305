//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.rosterboard.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Render settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Image asset references.
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Hosting HTML document path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            verbose: false,
        }
    }
}

fn default_output() -> String {
    "dist/index.html".to_string()
}

/// Render settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Element id of the output region.
    #[serde(default = "default_target_id")]
    pub target_id: String,

    /// Spaces per indentation level in the rendered JSON.
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Title used when the document is created from the template.
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            target_id: default_target_id(),
            indent: default_indent(),
            title: default_title(),
        }
    }
}

fn default_target_id() -> String {
    "root".to_string()
}

fn default_indent() -> usize {
    2
}

fn default_title() -> String {
    "Rosterboard".to_string()
}

/// Image asset references embedded into the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Fingerprinted path produced by the asset pipeline.
    #[serde(default = "default_bundled")]
    pub bundled: String,

    /// Literal relative path expected next to the document.
    #[serde(default = "default_literal")]
    pub literal: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            bundled: default_bundled(),
            literal: default_literal(),
        }
    }
}

fn default_bundled() -> String {
    "static/media/x-30465_640.3f8a1c2e.png".to_string()
}

fn default_literal() -> String {
    "Nightcore-Shadows.jpg".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".rosterboard.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output) = args.output {
            self.general.output = output.display().to_string();
        }

        if let Some(ref target) = args.target {
            self.render.target_id = target.clone();
        }

        if let Some(indent) = args.indent {
            self.render.indent = indent;
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.output, "dist/index.html");
        assert_eq!(config.render.target_id, "root");
        assert_eq!(config.render.indent, 2);
        assert_eq!(config.assets.literal, "Nightcore-Shadows.jpg");
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
output = "site/index.html"
verbose = true

[render]
target_id = "app"
indent = 4

[assets]
bundled = "static/media/logo.abc123.png"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.output, "site/index.html");
        assert!(config.general.verbose);
        assert_eq!(config.render.target_id, "app");
        assert_eq!(config.render.indent, 4);
        assert_eq!(config.assets.bundled, "static/media/logo.abc123.png");
        // Unset keys keep their defaults.
        assert_eq!(config.assets.literal, "Nightcore-Shadows.jpg");
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = Config::default();
        let args = crate::cli::Args {
            output: Some(PathBuf::from("out/page.html")),
            target: Some("app".to_string()),
            roster: None,
            indent: Some(4),
            config: None,
            verbose: true,
            quiet: false,
            dry_run: false,
            init_config: false,
        };

        config.merge_with_args(&args);

        assert_eq!(config.general.output, "out/page.html");
        assert_eq!(config.render.target_id, "app");
        assert_eq!(config.render.indent, 4);
        assert!(config.general.verbose);
    }

    #[test]
    fn test_merge_keeps_config_when_args_absent() {
        let mut config = Config::default();
        config.render.target_id = "custom".to_string();

        let args = crate::cli::Args {
            output: None,
            target: None,
            roster: None,
            indent: None,
            config: None,
            verbose: false,
            quiet: false,
            dry_run: false,
            init_config: false,
        };

        config.merge_with_args(&args);
        assert_eq!(config.render.target_id, "custom");
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[render]"));
        assert!(toml_str.contains("[assets]"));
    }
}
