use crate::theme::ThemeMode;

/// Ticks the curtain stays up.
pub const CURTAIN_TICKS: u8 = 5;
/// The palette swap happens once the curtain has covered the screen.
pub const CURTAIN_SWAP_AT: u8 = 3;

/// Full-screen overlay shown while the theme switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurtainState {
    pub target: ThemeMode,
    pub remaining: u8,
}

impl CurtainState {
    #[must_use]
    pub fn new(target: ThemeMode) -> Self {
        Self {
            target,
            remaining: CURTAIN_TICKS,
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("SYSTEM_REBOOT :: {}", self.target.label())
    }
}
