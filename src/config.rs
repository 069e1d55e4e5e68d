//! Runtime configuration
//!
//! Optional `cloudhop.ron` next to the executable's working directory.
//! Every field has a default, so a partial file (or none at all) is fine.
//! The fixed simulation step is deliberately not configurable.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "cloudhop.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the settings in use came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File => write!(f, "{}", CONFIG_FILE),
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// Clear colour as RGBA in 0..1
    pub background: [f32; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Cloudhop".to_string(),
            width: 640,
            height: 480,
            background: [0.86, 0.93, 0.95, 1.0],
        }
    }
}

/// Player tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Vertical acceleration applied to the player (units/s^2, negative = down)
    pub gravity: f32,
    pub player_speed: f32,
    pub player_start: (f32, f32),
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -0.4,
            player_speed: 1.0,
            player_start: (3.75, 4.0),
        }
    }
}

/// Sprite image paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub player: String,
    pub platform: String,
    pub point: String,
    pub win: String,
    pub lose: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            player: "assets/eagle.png".to_string(),
            platform: "assets/cloud.png".to_string(),
            point: "assets/dove_of_peace.png".to_string(),
            win: "assets/win.png".to_string(),
            lose: "assets/lose.png".to_string(),
        }
    }
}

impl AssetPaths {
    fn all(&self) -> [(&'static str, &str); 5] {
        [
            ("player", &self.player),
            ("platform", &self.platform),
            ("point", &self.point),
            ("win", &self.win),
            ("lose", &self.lose),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub assets: AssetPaths,
}

impl GameConfig {
    /// Parse and validate a RON string
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. A missing file is not an error: defaults are returned.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Load `path`, falling back to defaults (with a warning) if it is broken.
    pub fn load_or_default(path: &Path) -> (Self, ConfigSource) {
        if !path.exists() {
            return (Self::default(), ConfigSource::Defaults);
        }
        match Self::load(path) {
            Ok(config) => (config, ConfigSource::File),
            Err(e) => {
                macroquad::logging::warn!(
                    "Ignoring {}: {}, using defaults",
                    path.display(),
                    e
                );
                (Self::default(), ConfigSource::Defaults)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        if !physics.gravity.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "gravity must be finite, got {}",
                physics.gravity
            )));
        }
        if !(physics.player_speed.is_finite() && physics.player_speed > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "player_speed must be positive, got {}",
                physics.player_speed
            )));
        }
        if !(physics.player_start.0.is_finite() && physics.player_start.1.is_finite()) {
            return Err(ConfigError::ValidationError(
                "player_start must be finite".to_string(),
            ));
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        for (name, path) in self.assets.all() {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "asset path '{}' is empty",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.physics.gravity, -0.4);
        assert_eq!(config.physics.player_speed, 1.0);
        assert_eq!(config.physics.player_start, (3.75, 4.0));
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shipped_file_matches_defaults() {
        let config = GameConfig::from_ron(include_str!("../cloudhop.ron")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GameConfig::from_ron("(physics: (gravity: -1.5))").unwrap();
        assert_eq!(config.physics.gravity, -1.5);
        assert_eq!(config.physics.player_speed, 1.0);
        assert_eq!(config.assets, AssetPaths::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_ron("(physics: (player_speed: 0.0))").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));

        let err = GameConfig::from_ron("(assets: (win: \"\"))").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));

        let err = GameConfig::from_ron("(window: (width: 0))").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_ron("(physics: (gravity: \"down\"))").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(
            GameConfig::load_or_default(&path),
            (GameConfig::default(), ConfigSource::Defaults)
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "(window: (title: \"Test\"), assets: (player: \"eagle.png\"))").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.window.title, "Test");
        assert_eq!(config.assets.player, "eagle.png");
        assert_eq!(config.assets.platform, "assets/cloud.png");

        let (loaded, source) = GameConfig::load_or_default(&path);
        assert_eq!(loaded, config);
        assert_eq!(source, ConfigSource::File);
        assert_eq!(source.to_string(), CONFIG_FILE);
    }

    #[test]
    fn test_broken_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not ron at all (").unwrap();

        assert!(GameConfig::load(&path).is_err());
        // A file that exists but is broken is not reported as the source
        assert_eq!(
            GameConfig::load_or_default(&path),
            (GameConfig::default(), ConfigSource::Defaults)
        );
    }
}
