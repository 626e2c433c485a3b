use super::action::Action;
use crate::domain::models::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const SCROLL_STEP: u16 = 1;
const PAGE_STEP: u16 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    /// Extra bindings, key to action name, e.g. `"x" = "quit"`.
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    keys: KeyConfig,
}

impl KeyConfig {
    /// Reads the `[keys]` table of a config file. A missing or unreadable
    /// file yields the defaults.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => file.keys,
            Err(e) => {
                tracing::warn!("Ignoring malformed config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn load() -> Self {
        super::persistence::config_dir()
            .map(|dir| Self::load_from(&dir.join("config.toml")))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    /// Page-level bindings used in Browse mode.
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();

        global.insert(ch('q'), Action::Quit);
        global.insert(ch('?'), Action::ToggleHelp);
        global.insert(ch('t'), Action::ToggleTheme);
        global.insert(ch('m'), Action::ToggleMute);

        global.insert(ch('1'), Action::NavigateTo(Route::Home));
        global.insert(ch('2'), Action::NavigateTo(Route::About));
        global.insert(ch('3'), Action::NavigateTo(Route::Projects));
        global.insert(ch('4'), Action::NavigateTo(Route::Contact));
        global.insert(ch('l'), Action::NextPage);
        global.insert(key(KeyCode::Right), Action::NextPage);
        global.insert(ch('h'), Action::PrevPage);
        global.insert(key(KeyCode::Left), Action::PrevPage);

        global.insert(key(KeyCode::Down), Action::ScrollDown(SCROLL_STEP));
        global.insert(key(KeyCode::Up), Action::ScrollUp(SCROLL_STEP));
        global.insert(key(KeyCode::PageDown), Action::ScrollDown(PAGE_STEP));
        global.insert(key(KeyCode::PageUp), Action::ScrollUp(PAGE_STEP));
        global.insert(ch(' '), Action::ScrollDown(PAGE_STEP));
        global.insert(key(KeyCode::Home), Action::ScrollTop);
        global.insert(ch('g'), Action::ScrollTop);
        global.insert(key(KeyCode::End), Action::ScrollBottom);
        global.insert(ch('G'), Action::ScrollBottom);

        global.insert(key(KeyCode::Tab), Action::NextProjectTab);
        global.insert(key(KeyCode::BackTab), Action::PrevProjectTab);

        global.insert(ch('i'), Action::FocusContactForm);
        global.insert(key(KeyCode::Enter), Action::FocusContactForm);

        if config.profile == "vim" {
            global.insert(ch('j'), Action::ScrollDown(SCROLL_STEP));
            global.insert(ch('k'), Action::ScrollUp(SCROLL_STEP));
            global.insert(ctrl('d'), Action::ScrollDown(PAGE_STEP));
            global.insert(ctrl('u'), Action::ScrollUp(PAGE_STEP));
        }

        if let Some(custom) = &config.custom {
            for (binding, name) in custom {
                match (parse_key(binding), parse_action(name)) {
                    (Some(event), Some(action)) => {
                        global.insert(event, action);
                    }
                    _ => tracing::warn!("Ignoring key binding {binding:?} = {name:?}"),
                }
            }
        }

        Self { global }
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        let event = KeyEvent::new(event.code, normalize(event.code, event.modifiers));
        self.global.get(&event).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Terminals disagree on whether shifted characters carry SHIFT. The
/// key code itself already says it, so SHIFT is dropped.
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(_) | KeyCode::BackTab => {
            let mut modifiers = modifiers;
            modifiers.remove(KeyModifiers::SHIFT);
            modifiers
        }
        _ => modifiers,
    }
}

/// Parses `"x"`, `"ctrl-x"`, `"enter"`, `"pagedown"` and friends.
fn parse_key(text: &str) -> Option<KeyEvent> {
    let text = text.trim();
    let (modifiers, rest) = match text.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("ctrl-") => (KeyModifiers::CONTROL, &text[5..]),
        _ => (KeyModifiers::empty(), text),
    };

    let code = match rest.to_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };

    Some(KeyEvent::new(code, normalize(code, modifiers)))
}

fn parse_action(name: &str) -> Option<Action> {
    let action = match name.trim() {
        "quit" => Action::Quit,
        "help" => Action::ToggleHelp,
        "theme" => Action::ToggleTheme,
        "mute" => Action::ToggleMute,
        "palette" => Action::TogglePalette,
        "home" => Action::NavigateTo(Route::Home),
        "about" => Action::NavigateTo(Route::About),
        "projects" => Action::NavigateTo(Route::Projects),
        "contact" => Action::NavigateTo(Route::Contact),
        "next_page" => Action::NextPage,
        "prev_page" => Action::PrevPage,
        "scroll_down" => Action::ScrollDown(SCROLL_STEP),
        "scroll_up" => Action::ScrollUp(SCROLL_STEP),
        "page_down" => Action::ScrollDown(PAGE_STEP),
        "page_up" => Action::ScrollUp(PAGE_STEP),
        "top" => Action::ScrollTop,
        "bottom" => Action::ScrollBottom,
        "next_tab" => Action::NextProjectTab,
        "prev_tab" => Action::PrevProjectTab,
        "compose" => Action::FocusContactForm,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_bindings() {
        let map = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(map.get_action(ch('q')), Some(Action::Quit));
        assert_eq!(
            map.get_action(ch('3')),
            Some(Action::NavigateTo(Route::Projects))
        );
        assert_eq!(map.get_action(ch('j')), Some(Action::ScrollDown(1)));
        // '?' arrives with SHIFT on most terminals
        assert_eq!(
            map.get_action(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some(Action::ToggleHelp)
        );
    }

    #[test]
    fn test_non_vim_profile_drops_jk() {
        let config = KeyConfig {
            profile: "default".to_string(),
            custom: None,
        };
        let map = KeyMap::from_config(&config);
        assert_eq!(map.get_action(ch('j')), None);
        assert_eq!(map.get_action(key(KeyCode::Down)), Some(Action::ScrollDown(1)));
    }

    #[test]
    fn test_custom_bindings_override() {
        let mut custom = HashMap::new();
        custom.insert("x".to_string(), "quit".to_string());
        custom.insert("ctrl-p".to_string(), "palette".to_string());
        custom.insert("q".to_string(), "nonsense".to_string());
        let map = KeyMap::from_config(&KeyConfig {
            profile: "vim".to_string(),
            custom: Some(custom),
        });

        assert_eq!(map.get_action(ch('x')), Some(Action::Quit));
        assert_eq!(map.get_action(ctrl('p')), Some(Action::TogglePalette));
        assert_eq!(map.get_action(ch('q')), Some(Action::Quit));
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("enter"), Some(key(KeyCode::Enter)));
        assert_eq!(parse_key("Ctrl-D"), Some(ctrl('D')));
        assert_eq!(parse_key("ab"), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[keys]\nprofile = \"default\"\n[keys.custom]\nx = \"top\"").unwrap();

        let config = KeyConfig::load_from(file.path());
        assert_eq!(config.profile, "default");
        assert_eq!(
            config.custom.unwrap().get("x").map(String::as_str),
            Some("top")
        );
    }

    #[test]
    fn test_load_missing_or_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            KeyConfig::load_from(&dir.path().join("nope.toml")),
            KeyConfig::default()
        );

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "keys = [").unwrap();
        assert_eq!(KeyConfig::load_from(&path), KeyConfig::default());
    }
}
