use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemeMode,
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("folio");
        path
    })
}

pub fn get_preferences_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("preferences.toml"))
}

/// Missing or unreadable preferences fall back to the defaults.
#[must_use]
pub fn load_preferences_from(path: &Path) -> Preferences {
    if let Ok(content) = std::fs::read_to_string(path) {
        match toml::from_str::<Preferences>(&content) {
            Ok(prefs) => return prefs,
            Err(e) => tracing::warn!("Ignoring malformed preferences {}: {e}", path.display()),
        }
    }
    Preferences::default()
}

pub fn save_preferences_to(path: &Path, prefs: &Preferences) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string(prefs)?)?;
    Ok(())
}

#[must_use]
pub fn load_preferences() -> Preferences {
    get_preferences_path()
        .map(|path| load_preferences_from(&path))
        .unwrap_or_default()
}

pub fn save_theme(theme: ThemeMode) {
    let Some(path) = get_preferences_path() else {
        return;
    };
    if let Err(e) = save_preferences_to(&path, &Preferences { theme }) {
        tracing::warn!("Failed to save theme preference: {e}");
    }
}
