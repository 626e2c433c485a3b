use crate::app::command_palette::Effect;
use crate::domain::host::Sound;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Carry out a palette entry.
    Invoke(Effect),
    /// Open a URL built at runtime, e.g. the WhatsApp deep link.
    OpenExternal(String),
    PlaySound(Sound),
    SaveTheme(ThemeMode),
}
