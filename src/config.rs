use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Preference key holding `"dark"` or `"light"`
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Event poll timeout of the main loop
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Delay before the drawer opens on its own after startup
    #[serde(default = "default_auto_open_delay_ms")]
    pub auto_open_delay_ms: u64,
    /// Fallback filter directive when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_auto_open_delay_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            auto_open_delay_ms: default_auto_open_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".design-drawer"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config, falling back to defaults when missing or unreadable
    pub fn load() -> Config {
        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }

        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Preferences
// ═══════════════════════════════════════════════════════════════════════════════

/// Key-value store for persisted user preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value and make it durable before returning
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Preferences kept in memory only
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences backed by a JSON object file
///
/// Entries this app does not understand are kept and written back untouched.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, serde_json::Value>,
}

impl FilePreferences {
    /// Open the default preferences file under the config directory
    pub fn open_default() -> anyhow::Result<Self> {
        let dir = Config::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(Self::open(dir.join("preferences.json")))
    }

    /// Read the file once; a missing or malformed file yields empty preferences
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "preferences file is not a JSON object, starting empty"
                );
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)?;

        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key)?.as_str().map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values
            .insert(key.to_string(), serde_json::Value::String(value.to_string()));
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "tick_rate_ms": 50 }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.tick_rate_ms, 50);
        assert_eq!(config.auto_open_delay_ms, 500);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_missing_or_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.json")).is_none());

        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_none());
    }

    #[test]
    fn test_file_preferences_round_trip_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut prefs = FilePreferences::open(path.clone());
        assert_eq!(prefs.get(THEME_KEY), None);
        prefs.set(THEME_KEY, "light").unwrap();

        let reopened = FilePreferences::open(path.clone());
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.get("theme").map(String::as_str), Some("light"));
    }

    #[test]
    fn test_file_preferences_keeps_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{ "theme": "light", "window": { "width": 3 } }"#).unwrap();

        let mut prefs = FilePreferences::open(path.clone());
        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(prefs.get("window"), None);
        prefs.set(THEME_KEY, "dark").unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["theme"], "dark");
        assert_eq!(parsed["window"]["width"], 3);
    }

    #[test]
    fn test_file_preferences_ignores_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "[1, 2").unwrap();
        let prefs = FilePreferences::open(path);
        assert_eq!(prefs.get(THEME_KEY), None);
    }
}
