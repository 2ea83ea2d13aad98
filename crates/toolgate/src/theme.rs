//! Light/dark theme and its persisted preference

use crate::error::{Error, Result};
use crate::limits::MAX_PREFERENCES_SIZE;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Preference key holding the theme flag
pub const THEME_KEY: &str = "theme";

/// Page theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Persisted representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// The other theme
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon shown on the toggle button: the sun offers a way out of dark mode
    pub const fn icon(&self) -> ThemeIcon {
        match self {
            Theme::Dark => ThemeIcon::Sun,
            Theme::Light => ThemeIcon::Moon,
        }
    }

    /// Restore the theme from the store
    ///
    /// A missing value or `"dark"` selects dark mode and writes `"dark"` back.
    /// Any other stored value selects light mode and leaves the store untouched.
    pub fn restore(store: &mut impl PreferenceStore) -> Result<Self> {
        match store.get(THEME_KEY)?.as_deref() {
            None | Some("dark") => {
                store.set(THEME_KEY, Theme::Dark.as_str())?;
                Ok(Theme::Dark)
            }
            Some(_) => Ok(Theme::Light),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Theme toggle icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    /// Inline SVG markup
    pub const fn svg(&self) -> &'static str {
        match self {
            ThemeIcon::Sun => {
                r#"<svg viewBox="0 0 24 24"><circle cx="12" cy="12" r="5"/><g><line x1="12" y1="1" x2="12" y2="3"/><line x1="12" y1="21" x2="12" y2="23"/><line x1="4.22" y1="4.22" x2="5.64" y2="5.64"/><line x1="18.36" y1="18.36" x2="19.78" y2="19.78"/><line x1="1" y1="12" x2="3" y2="12"/><line x1="21" y1="12" x2="23" y2="12"/><line x1="4.22" y1="19.78" x2="5.64" y2="18.36"/><line x1="18.36" y1="5.64" x2="19.78" y2="4.22"/></g></svg>"#
            }
            ThemeIcon::Moon => {
                r#"<svg viewBox="0 0 24 24"><path d="M21 12.79A9 9 0 0111.21 3a1 1 0 00-1.13 1.32A7 7 0 1019.68 13.92a1 1 0 00-1.32-1.13A8.93 8.93 0 0121 12.79z"></path></svg>"#
            }
        }
    }
}

/// Durable string key/value store for UI preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single value
    pub fn with(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value.into());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.into(), value.into());
        Ok(())
    }
}

/// Preference store backed by a JSON object file
///
/// The file is read once on open and rewritten on every `set`. A missing file
/// is an empty store; parent directories are created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match std::fs::read(&path) {
            Ok(bytes) => Self::parse(&path, &bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(Error::Store(format!("{}: {e}", path.display()))),
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(path: &Path, bytes: &[u8]) -> Result<Map<String, Value>> {
        if bytes.len() > MAX_PREFERENCES_SIZE {
            return Err(Error::Store(format!(
                "{}: {} bytes exceeds {MAX_PREFERENCES_SIZE}",
                path.display(),
                bytes.len()
            )));
        }

        match serde_json::from_slice(bytes) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(Error::Store(format!(
                "{}: expected a JSON object",
                path.display()
            ))),
            Err(e) => Err(Error::Store(format!("{}: {e}", path.display()))),
        }
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Store(format!("{}: {e}", parent.display())))?;
        }

        let json = serde_json::to_vec_pretty(&self.values)
            .map_err(|e| Error::Store(format!("serialize: {e}")))?;
        std::fs::write(&self.path, json)
            .map_err(|e| Error::Store(format!("{}: {e}", self.path.display())))
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .values
            .get(key)
            .and_then(Value::as_str)
            .map(ToString::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.into(), Value::from(value));
        self.flush()
    }
}
