use crate::domain::content::PRELOADER_TEXT;

/// Characters revealed per tick.
pub const CHARS_PER_TICK: usize = 6;
/// Ticks the finished text stays on screen before the site appears.
pub const HOLD_TICKS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloaderState {
    pub revealed: usize,
    pub hold: u8,
}

impl Default for PreloaderState {
    fn default() -> Self {
        Self {
            revealed: 0,
            hold: HOLD_TICKS,
        }
    }
}

impl PreloaderState {
    #[must_use]
    pub fn text(&self) -> &'static str {
        let end = PRELOADER_TEXT
            .char_indices()
            .nth(self.revealed)
            .map_or(PRELOADER_TEXT.len(), |(i, _)| i);
        &PRELOADER_TEXT[..end]
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.revealed < PRELOADER_TEXT.chars().count()
    }

    /// Fraction of the loading bar to fill, 0.0..=1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = PRELOADER_TEXT.chars().count().max(1);
        (self.revealed.min(total) as f64) / (total as f64)
    }

    /// Advances the typing effect. Returns `true` once the intro is over.
    pub fn tick(&mut self) -> bool {
        if self.is_typing() {
            self.revealed += CHARS_PER_TICK;
            return false;
        }
        if self.hold == 0 {
            return true;
        }
        self.hold -= 1;
        self.hold == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preloader_finishes_after_typing_and_hold() {
        let mut preloader = PreloaderState::default();
        let typing_ticks = PRELOADER_TEXT.chars().count().div_ceil(CHARS_PER_TICK);

        for _ in 0..typing_ticks {
            assert!(!preloader.tick());
        }
        assert!(!preloader.is_typing());
        assert_eq!(preloader.text(), PRELOADER_TEXT);

        for _ in 0..HOLD_TICKS - 1 {
            assert!(!preloader.tick());
        }
        assert!(preloader.tick());
    }

    #[test]
    fn test_text_is_a_prefix() {
        let mut preloader = PreloaderState::default();
        preloader.tick();
        assert_eq!(preloader.text(), &PRELOADER_TEXT[..CHARS_PER_TICK]);
        assert!(preloader.progress() > 0.0 && preloader.progress() < 1.0);
    }
}
