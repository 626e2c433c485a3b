use crate::domain::contact::{ContactMessage, DEFAULT_SUBJECT};
use crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    #[must_use]
    pub fn all() -> &'static [ContactField] {
        &[
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "John Doe",
            ContactField::Email => "john@example.com",
            ContactField::Subject => DEFAULT_SUBJECT,
            ContactField::Message => "Tell me about your project...",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Subject,
            ContactField::Subject => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Subject => ContactField::Email,
            ContactField::Message => ContactField::Subject,
        }
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        *self == ContactField::Message
    }
}

/// A single-line text input. `TextArea` is neither `Clone` nor `PartialEq`,
/// so those are implemented on its visible contents.
#[derive(Default)]
pub struct FormField<'a>(TextArea<'a>);

impl<'a> FormField<'a> {
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        let mut area = TextArea::default();
        area.insert_str(value);
        Self(area)
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.0.lines().join(" ")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.lines().iter().all(|l| l.is_empty())
    }

    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        self.0.cursor()
    }

    pub fn input(&mut self, key: KeyEvent) {
        self.0.input(key);
    }

    /// Hides the block cursor on fields that do not have focus.
    pub fn set_focused(&mut self, focused: bool) {
        let style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.0.set_cursor_style(style);
    }

    #[must_use]
    pub fn text_area(&self) -> &TextArea<'a> {
        &self.0
    }
}

impl Clone for FormField<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for FormField<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormField")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for FormField<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormState<'a> {
    pub name: FormField<'a>,
    pub email: FormField<'a>,
    pub subject: FormField<'a>,
    pub message: FormField<'a>,
    pub focused: ContactField,
}

impl Default for ContactFormState<'_> {
    fn default() -> Self {
        let mut form = Self {
            name: FormField::default(),
            email: FormField::default(),
            subject: FormField::with_value(DEFAULT_SUBJECT),
            message: FormField::default(),
            focused: ContactField::Name,
        };
        form.focus(ContactField::Name);
        form
    }
}

impl<'a> ContactFormState<'a> {
    #[must_use]
    pub fn field(&self, field: ContactField) -> &FormField<'a> {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut FormField<'a> {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn focus(&mut self, field: ContactField) {
        self.focused = field;
        for &f in ContactField::all() {
            self.field_mut(f).set_focused(f == field);
        }
    }

    pub fn input(&mut self, key: KeyEvent) {
        let focused = self.focused;
        self.field_mut(focused).input(key);
    }

    #[must_use]
    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.value(),
            email: self.email.value(),
            subject: self.subject.value(),
            message: self.message.value(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
