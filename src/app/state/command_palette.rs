use crate::app::command_palette::{filter_actions, registry, PaletteAction};
use std::sync::Arc;

/// Next index, wrapping to the top. `count == 0` leaves the index alone.
#[must_use]
pub fn move_next(current: usize, count: usize) -> usize {
    if count == 0 {
        return current;
    }
    (current + 1) % count
}

/// Previous index, wrapping to the bottom. `count == 0` leaves the index alone.
#[must_use]
pub fn move_prev(current: usize, count: usize) -> usize {
    if count == 0 {
        return current;
    }
    (current + count - 1) % count
}

#[must_use]
pub fn reset_on_query_change() -> usize {
    0
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteState {
    pub is_open: bool,
    pub query: String,
    /// Indices into the registry, re-derived on every query change.
    pub matches: Vec<usize>,
    pub selected_index: usize,
    actions: Arc<[PaletteAction]>,
}

impl Default for PaletteState {
    fn default() -> Self {
        Self::new(registry())
    }
}

impl PaletteState {
    #[must_use]
    pub fn new(actions: Vec<PaletteAction>) -> Self {
        let actions: Arc<[PaletteAction]> = actions.into();
        Self {
            is_open: false,
            query: String::new(),
            matches: filter_actions(&actions, ""),
            selected_index: 0,
            actions,
        }
    }

    #[must_use]
    pub fn actions(&self) -> &[PaletteAction] {
        &self.actions
    }

    pub fn filtered(&self) -> impl Iterator<Item = &PaletteAction> {
        self.matches.iter().map(|&i| &self.actions[i])
    }

    #[must_use]
    pub fn filtered_action(&self, index: usize) -> Option<&PaletteAction> {
        self.matches.get(index).map(|&i| &self.actions[i])
    }

    #[must_use]
    pub fn selected(&self) -> Option<&PaletteAction> {
        self.filtered_action(self.selected_index)
    }

    /// Returns `false` when the palette was already open.
    pub fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        self.set_query(String::new());
        true
    }

    /// Returns `false` when the palette was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        true
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.matches = filter_actions(&self.actions, &self.query);
        self.selected_index = reset_on_query_change();
    }

    pub fn push_char(&mut self, c: char) {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.set_query(query);
    }

    pub fn pop_char(&mut self) {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.set_query(query);
    }

    pub fn select_next(&mut self) {
        self.selected_index = move_next(self.selected_index, self.matches.len());
    }

    pub fn select_prev(&mut self) {
        self.selected_index = move_prev(self.selected_index, self.matches.len());
    }

    /// Pointer hover. Returns `true` if the highlighted row changed.
    pub fn hover(&mut self, index: usize) -> bool {
        if index >= self.matches.len() || index == self.selected_index {
            return false;
        }
        self.selected_index = index;
        true
    }
}
