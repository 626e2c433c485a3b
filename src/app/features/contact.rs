use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, ErrorSeverity, ErrorState},
};
use crate::domain::models::Route;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FocusContactForm => {
            if state.route == Route::Contact {
                state.mode = AppMode::ContactForm;
            }
            UpdateResult::Handled(None)
        }
        Action::LeaveContactForm => {
            state.mode = AppMode::Browse;
            UpdateResult::Handled(None)
        }
        Action::ContactNextField => {
            state.contact.focus(state.contact.focused.next());
            UpdateResult::Handled(None)
        }
        Action::ContactPrevField => {
            state.contact.focus(state.contact.focused.prev());
            UpdateResult::Handled(None)
        }
        Action::ContactInput(key) => {
            state.contact.input(*key);
            UpdateResult::Handled(None)
        }
        Action::SubmitContact => UpdateResult::Handled(submit(state)),
        _ => UpdateResult::NotHandled,
    }
}

fn submit(state: &mut AppState) -> Option<Command> {
    match state.contact.to_message().validate() {
        Ok(message) => {
            tracing::info!("Contact form submitted by {}", message.email);
            let url = message.whatsapp_url();
            state.contact.reset();
            state.mode = AppMode::Browse;
            state.status_message = Some("Opening WhatsApp...".to_string());
            state.status_clear_time = Some(super::ui::notice_deadline());
            Some(Command::OpenExternal(url))
        }
        Err(e) => {
            state.last_error = Some(ErrorState::new(e.message(), ErrorSeverity::Warning));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ContactField;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn on_contact_form() -> AppState<'static> {
        let mut state = AppState::default().skip_intro();
        state.route = Route::Contact;
        update(&mut state, &Action::FocusContactForm);
        state
    }

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            update(
                state,
                &Action::ContactInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    #[test]
    fn test_focus_only_on_contact_page() {
        let mut state = AppState::default().skip_intro();
        update(&mut state, &Action::FocusContactForm);
        assert_eq!(state.mode, AppMode::Browse);

        let state = on_contact_form();
        assert_eq!(state.mode, AppMode::ContactForm);
    }

    #[test]
    fn test_submit_builds_whatsapp_link_and_resets() {
        let mut state = on_contact_form();
        type_str(&mut state, "Ada");
        update(&mut state, &Action::ContactNextField);
        type_str(&mut state, "ada@example.com");
        update(&mut state, &Action::ContactNextField);
        update(&mut state, &Action::ContactNextField);
        assert_eq!(state.contact.focused, ContactField::Message);
        type_str(&mut state, "Hi there");

        let UpdateResult::Handled(Some(Command::OpenExternal(url))) =
            update(&mut state, &Action::SubmitContact)
        else {
            panic!("expected a link to open");
        };
        assert!(url.starts_with("https://wa.me/917501795902?text="));
        assert!(url.contains("Ada"));
        assert!(url.contains("ada%40example.com"));
        assert_eq!(state.mode, AppMode::Browse);
        assert!(state.contact.name.is_empty());
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_invalid_submit_shows_error_and_keeps_input() {
        let mut state = on_contact_form();
        type_str(&mut state, "Ada");
        update(&mut state, &Action::ContactNextField);
        type_str(&mut state, "not-an-email");

        let result = update(&mut state, &Action::SubmitContact);
        assert!(matches!(result, UpdateResult::Handled(None)));
        let error = state.last_error.as_ref().unwrap();
        assert_eq!(error.severity, ErrorSeverity::Warning);
        assert!(!error.suggestions.is_empty());
        assert_eq!(state.mode, AppMode::ContactForm);
        assert_eq!(state.contact.name.value(), "Ada");
    }

    #[test]
    fn test_prev_field_wraps() {
        let mut state = on_contact_form();
        update(&mut state, &Action::ContactPrevField);
        assert_eq!(state.contact.focused, ContactField::Message);
        update(&mut state, &Action::LeaveContactForm);
        assert_eq!(state.mode, AppMode::Browse);
    }
}
