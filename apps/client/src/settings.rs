//! Theme preference — the headless equivalent of the browser's local
//! storage. Read once at startup, written on every toggle.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::warn;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The single accessor over persisted key-value settings. Everything that
/// touches stored preferences goes through this trait so tests can
/// substitute an in-memory store.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Flat JSON string map on disk, rewritten on every set. A store that
/// cannot be read starts empty; a failed write is logged and the
/// in-memory value stands.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { path, values }
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        match serde_json::to_string_pretty(&self.values) {
            Ok(raw) => {
                if let Err(err) = fs::write(&self.path, raw) {
                    warn!("could not persist settings to {}: {err}", self.path.display());
                }
            }
            Err(err) => warn!("could not serialize settings: {err}"),
        }
    }
}

/// Owns the active theme for the session. Unknown or missing persisted
/// values fall back to `Light`.
pub struct ThemeManager<S: SettingsStore> {
    store: S,
    current: Theme,
}

impl<S: SettingsStore> ThemeManager<S> {
    pub fn new(store: S) -> Self {
        let current = store
            .get(THEME_KEY)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default();
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.store.set(THEME_KEY, theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
