use super::keymap::{KeyConfig, KeyMap};
use crate::domain::models::{ProjectTab, Route};
use crate::theme::{Theme, ThemeMode};
use std::sync::Arc;
use std::time::Instant;

pub mod command_palette;
pub mod contact;
pub mod error;
pub mod preloader;
pub mod theme;

// Re-exports
pub use command_palette::PaletteState;
pub use contact::{ContactField, ContactFormState};
pub use error::{ErrorSeverity, ErrorState};
pub use preloader::PreloaderState;
pub use theme::CurtainState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Preloader,   // Typing intro, any key skips
    Browse,      // Reading pages and scrolling
    ContactForm, // Keys go to the focused form field
    Help,        // Showing the help overlay
}

/// Measured by the renderer every frame so scrolling can be clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageMetrics {
    pub content_height: u16,
    pub viewport_height: u16,
}

impl PageMetrics {
    #[must_use]
    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>, // "Email copied to clipboard!"
    pub status_clear_time: Option<Instant>,

    // --- Pages ---
    pub route: Route,
    pub scroll: u16,
    pub page_metrics: PageMetrics,
    pub project_tab: ProjectTab,

    // --- Overlays ---
    pub palette: PaletteState,
    pub contact: ContactFormState<'a>,
    pub preloader: PreloaderState,
    pub curtain: Option<CurtainState>,

    // --- Sound ---
    pub muted: bool,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &KeyConfig, theme_mode: ThemeMode) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(config)),
            theme_mode,
            theme: Theme::from_mode(theme_mode),
            ..Default::default()
        }
    }

    /// Starts straight on the pages, without the typing intro.
    #[must_use]
    pub fn skip_intro(mut self) -> Self {
        self.mode = AppMode::Browse;
        self
    }

    #[must_use]
    pub fn is_curtain_active(&self) -> bool {
        self.curtain.is_some()
    }

    #[must_use]
    pub fn scroll_progress(&self) -> f64 {
        let max = self.page_metrics.max_scroll();
        if max == 0 {
            return 0.0;
        }
        f64::from(self.scroll.min(max)) / f64::from(max)
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Preloader,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            route: Route::Home,
            scroll: 0,
            page_metrics: PageMetrics::default(),
            project_tab: ProjectTab::default(),
            palette: PaletteState::default(),
            contact: ContactFormState::default(),
            preloader: PreloaderState::default(),
            curtain: None,
            muted: false,
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            theme_mode: ThemeMode::Dark,
            theme: Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress() {
        let mut state = AppState::default();
        assert_eq!(state.scroll_progress(), 0.0);

        state.page_metrics = PageMetrics {
            content_height: 60,
            viewport_height: 20,
        };
        state.scroll = 20;
        assert!((state.scroll_progress() - 0.5).abs() < f64::EPSILON);
        state.scroll = 40;
        assert!((state.scroll_progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_applies_theme_mode() {
        let state = AppState::new(&KeyConfig::default(), ThemeMode::Light);
        assert_eq!(state.theme_mode, ThemeMode::Light);
        assert_eq!(state.theme, Theme::from_mode(ThemeMode::Light));
        assert_eq!(state.mode, AppMode::Preloader);
        assert_eq!(state.skip_intro().mode, AppMode::Browse);
    }
}
