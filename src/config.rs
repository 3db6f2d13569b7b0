//! Runtime settings loaded from YAML with environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming a settings file.
pub const CONFIG_ENV: &str = "RWWEB_CONFIG";

/// Geometry used by the in-memory canvas when arranging a star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Viewport width; the focal item is centered horizontally in it.
    pub viewport_width: f64,
    /// Viewport height.
    pub viewport_height: f64,
    /// Size of the focal item.
    pub center_width: f64,
    /// Size of the focal item.
    pub center_height: f64,
    /// Size of first-level friends.
    pub friend_width: f64,
    /// Size of first-level friends.
    pub friend_height: f64,
    /// Size of second-level friends.
    pub second_width: f64,
    /// Size of second-level friends.
    pub second_height: f64,
    /// Spacing between columns and between stacked items.
    pub gap: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            viewport_width: 1600.0,
            viewport_height: 900.0,
            center_width: 500.0,
            center_height: 400.0,
            friend_width: 250.0,
            friend_height: 150.0,
            second_width: 160.0,
            second_height: 100.0,
            gap: 40.0,
        }
    }
}

/// Behaviour of the navigation gestures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorSettings {
    /// Width of an item created by a drop.
    pub drop_width: f64,
    /// Height of an item created by a drop.
    pub drop_height: f64,
    /// Seed the welcome note and demo links when the canvas is initialised.
    pub seed_welcome: bool,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self { drop_width: 200.0, drop_height: 150.0, seed_welcome: true }
    }
}

/// All settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Canvas geometry.
    pub layout: LayoutSettings,
    /// Gesture behaviour.
    pub navigator: NavigatorSettings,
    /// Maximum number of auto-suggest hits.
    pub suggest_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: LayoutSettings::default(),
            navigator: NavigatorSettings::default(),
            suggest_limit: 10,
        }
    }
}

impl Settings {
    /// Parses settings from YAML; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse settings: {e}"))
    }

    /// Loads settings from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file {}: {e}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Resolves settings from an explicit path, else `RWWEB_CONFIG`, else defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a named file cannot be read or parsed.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, String> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
        match path {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "layout:\n  gap: 10\nnavigator:\n  seed_welcome: false\n";
        let settings = Settings::from_yaml(yaml).unwrap();
        assert!((settings.layout.gap - 10.0).abs() < f64::EPSILON);
        assert!((settings.layout.center_width - 500.0).abs() < f64::EPSILON);
        assert!(!settings.navigator.seed_welcome);
        assert!((settings.navigator.drop_width - 200.0).abs() < f64::EPSILON);
        assert_eq!(settings.suggest_limit, 10);
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let err = Settings::from_yaml("layout: [1, 2").unwrap_err();
        assert!(err.contains("Failed to parse settings"));
    }

    #[test]
    fn load_reads_file() {
        let dir = std::env::temp_dir().join("rwweb_settings_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rwweb.yaml");
        std::fs::write(&path, "suggest_limit: 3\n").unwrap();

        let settings = Settings::resolve(Some(&path)).unwrap();
        assert_eq!(settings.suggest_limit, 3);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Settings::load(Path::new("/nonexistent/rwweb.yaml")).unwrap_err();
        assert!(err.contains("Failed to read settings file"));
    }
}
