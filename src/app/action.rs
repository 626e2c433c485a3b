use crate::app::command::Command;
use crate::domain::models::Route;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,
    SkipIntro, // Any key during the preloader

    // --- Pages ---
    NavigateTo(Route), // Header tabs and 1-4
    Navigate(String),  // A raw path, resolved by the router
    NextPage,
    PrevPage,
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollTop,
    ScrollBottom,
    NextProjectTab,
    PrevProjectTab,

    // --- Command Palette ---
    TogglePalette,          // Ctrl+K / Super+K, in every mode
    ClosePalette,           // Esc or a click on the backdrop
    PaletteNext,            // Down
    PalettePrev,            // Up
    PaletteSelect,          // Enter on the highlighted row
    PaletteActivate(usize), // Click on a row
    PaletteHover(usize),    // Pointer over a row
    PaletteInput(KeyEvent), // Printable chars and Backspace

    // --- Contact Form ---
    FocusContactForm,
    LeaveContactForm,
    ContactNextField,
    ContactPrevField,
    ContactInput(KeyEvent),
    SubmitContact,

    // --- UI ---
    ToggleHelp,
    ToggleTheme,
    ToggleMute,
    ShowNotice(String),    // Transient status bar message
    ErrorOccurred(String), // Modal the user must dismiss
    DismissError,
}
