//! Console config: bundled default via include_str!, overridden by a local
//! file if present.

use serde::Deserialize;

/// Bundled default config so the console runs with no external files.
const DEFAULT_UI_CONFIG: &str = include_str!("../assets/ui_config.json");

#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub theme_dark: bool,
}

fn default_window_width() -> f32 {
    980.0
}

fn default_window_height() -> f32 {
    720.0
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            theme_dark: false,
        }
    }
}

impl ConsoleConfig {
    /// Load config: local `ui_config.json` (next to the manifest or under
    /// the crate dir of the working directory) if present, else the bundled
    /// default.
    pub fn load() -> Self {
        let manifest_assets = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
        let cwd_assets = std::env::current_dir()
            .ok()
            .map(|p| p.join("retort-console-egui").join("assets"));

        let path = [manifest_assets, cwd_assets.unwrap_or_default()]
            .into_iter()
            .find(|b| b.join("ui_config.json").exists())
            .map(|b| b.join("ui_config.json"));

        let s = match path {
            Some(p) => std::fs::read_to_string(&p).ok(),
            None => None,
        };
        let s = s.unwrap_or_else(|| DEFAULT_UI_CONFIG.to_string());
        serde_json::from_str(&s).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_default_parses() {
        let config: ConsoleConfig = serde_json::from_str(DEFAULT_UI_CONFIG).unwrap();
        assert!(config.window_width > 0.0);
        assert!(config.window_height > 0.0);
    }

    #[test]
    fn missing_fields_fall_back() {
        let config: ConsoleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.window_width, default_window_width());
        assert!(!config.theme_dark);
    }
}
