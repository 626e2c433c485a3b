pub mod command_palette;
pub mod curtain;
pub mod error;
pub mod help;
pub mod helpers;

use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use command_palette::CommandPaletteModal;
use curtain::CurtainOverlay;
use error::ErrorModal;
use help::HelpModal;
use helpers::dim_area;

/// Draws every overlay in stacking order: help, error, palette, curtain.
pub struct ModalManager<'a, 's> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'s>,
}

impl Widget for ModalManager<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.app_state;

        let is_modal_active = state.mode == AppMode::Help
            || state.last_error.is_some()
            || state.palette.is_open;
        if is_modal_active {
            dim_area(buf, area);
        }

        if state.mode == AppMode::Help {
            HelpModal { theme: self.theme }.render(area, buf);
        }

        if let Some(error) = &state.last_error {
            ErrorModal {
                theme: self.theme,
                error,
            }
            .render(area, buf);
        }

        if state.palette.is_open {
            CommandPaletteModal {
                theme: self.theme,
                state: &state.palette,
            }
            .render(area, buf);
        }

        if let Some(curtain) = &state.curtain {
            CurtainOverlay {
                theme: self.theme,
                curtain,
                frame: state.frame_count,
            }
            .render(area, buf);
        }
    }
}
