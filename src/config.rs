//! Configuration for styled-text.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.styled-text/config.toml`
//! - Default render mode selection (`plain`, `iso6429`, `auto`)
//! - Palette overrides for individual colors and styles
//!
//! # Configuration File
//!
//! ```toml
//! # Render mode: plain, iso6429 (or ansi), auto
//! render = "auto"
//!
//! # 256-color palette index per color name
//! [colors]
//! orange = 214
//! grey = 242
//!
//! # SGR parameter per style name
//! [styles]
//! blink = 6
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::attr::{Color, Palette, ParseError, Style};
use crate::fragment::RenderMode;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not determine config path")]
    NoHome,

    #[error("Invalid palette entry: {0}")]
    Name(#[from] ParseError),

    #[error("Palette index for {name} out of range: {code} (expected 0-255)")]
    ColorRange { name: String, code: u16 },
}

/// How the default render mode is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderSetting {
    /// Always plain text
    #[default]
    Plain,
    /// Always escape sequences
    #[serde(alias = "ansi")]
    Iso6429,
    /// Escape sequences when stdout is a terminal
    Auto,
}

impl RenderSetting {
    /// Concrete mode, given whether output goes to a terminal
    pub fn resolve(self, is_tty: bool) -> RenderMode {
        match self {
            RenderSetting::Plain => RenderMode::Plain,
            RenderSetting::Iso6429 => RenderMode::Iso6429,
            RenderSetting::Auto if is_tty => RenderMode::Iso6429,
            RenderSetting::Auto => RenderMode::Plain,
        }
    }
}

impl From<RenderMode> for RenderSetting {
    fn from(mode: RenderMode) -> Self {
        match mode {
            RenderMode::Plain => RenderSetting::Plain,
            RenderMode::Iso6429 => RenderSetting::Iso6429,
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default render mode
    pub render: RenderSetting,
    /// Color name -> palette index overrides
    pub colors: BTreeMap<String, u16>,
    /// Style name -> SGR parameter overrides
    pub styles: BTreeMap<String, u16>,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::get_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration text and validate the palette overrides
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.palette()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::get_config_path().ok_or(ConfigError::NoHome)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to a specific file, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Get config file path
    pub fn get_config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".styled-text").join("config.toml"))
    }

    /// Build the palette described by this configuration
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let mut palette = Palette::default();
        for (name, &code) in &self.colors {
            let color: Color = name.parse()?;
            if code > 255 {
                return Err(ConfigError::ColorRange {
                    name: name.clone(),
                    code,
                });
            }
            if color.is_none() {
                warn!("Palette override for 'none' has no effect");
            }
            palette.set_color_code(color, code);
        }
        for (name, &code) in &self.styles {
            let style: Style = name.parse()?;
            if style.is_empty() {
                warn!("Style override for '{}' has no effect", name);
            }
            palette.set_style_code(style, code);
        }
        Ok(palette)
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render, RenderSetting::Plain);
        assert_eq!(config.palette().unwrap(), Palette::default());
    }

    #[test]
    fn test_render_setting() {
        let config = Config::from_toml_str(r#"render = "ansi""#).unwrap();
        assert_eq!(config.render, RenderSetting::Iso6429);

        let config = Config::from_toml_str(r#"render = "auto""#).unwrap();
        assert_eq!(config.render.resolve(true), RenderMode::Iso6429);
        assert_eq!(config.render.resolve(false), RenderMode::Plain);
    }

    #[test]
    fn test_palette_overrides() {
        let config = Config::from_toml_str(
            r#"
            [colors]
            orange = 214
            deep-blue = 18

            [styles]
            blink = 6
            "#,
        )
        .unwrap();
        let palette = config.palette().unwrap();
        assert_eq!(palette.resolve_color_code(Color::Orange), 214);
        assert_eq!(palette.resolve_color_code(Color::DeepBlue), 18);
        assert_eq!(palette.resolve_color_code(Color::Blue), 20);
        assert_eq!(palette.resolve_style_codes(Style::BLINK), vec![6]);
    }

    #[test]
    fn test_unknown_color_rejected() {
        let err = Config::from_toml_str("[colors]\nteal = 30\n").unwrap_err();
        assert!(matches!(err, ConfigError::Name(ParseError::UnknownColor(_))));
    }

    #[test]
    fn test_unknown_style_rejected() {
        let err = Config::from_toml_str("[styles]\nwavy = 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Name(ParseError::UnknownStyle(_))));
    }

    #[test]
    fn test_color_out_of_range() {
        let err = Config::from_toml_str("[colors]\nred = 300\n").unwrap_err();
        assert!(matches!(err, ConfigError::ColorRange { code: 300, .. }));
    }

    #[test]
    fn test_bad_toml() {
        let err = Config::from_toml_str("render = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.render = RenderSetting::Auto;
        config.colors.insert("pink".to_string(), 205);
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_sentinel_overrides_have_no_effect() {
        let config = Config::from_toml_str("[colors]\nnone = 5\n\n[styles]\nnone = 5\n").unwrap();
        assert_eq!(config.palette().unwrap(), Palette::default());
    }

    #[test]
    fn test_render_setting_from_mode() {
        assert_eq!(RenderSetting::from(RenderMode::Plain), RenderSetting::Plain);
        assert_eq!(RenderSetting::from(RenderMode::Iso6429), RenderSetting::Iso6429);
        for mode in [RenderMode::Plain, RenderMode::Iso6429] {
            assert_eq!(RenderSetting::from(mode).resolve(false), mode);
        }
    }

    #[test]
    fn test_save_to_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.render = RenderSetting::Iso6429;
        config.styles.insert("blink".to_string(), 6);
        config.save_to(&path).unwrap();

        assert!(path.exists());
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let err = Config::default().save_to(&blocker.join("config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Write { .. }));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/styled-text.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
