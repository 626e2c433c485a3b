use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::command_palette::Effect;
use crate::app::state::AppState;
use crate::domain::host::{HostError, MockHost, Sound};
use crossterm::event::{Event, KeyCode, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

async fn recv_within(rx: &mut mpsc::Receiver<Action>) -> Option<Action> {
    tokio::time::timeout(Duration::from_millis(500), rx.recv())
        .await
        .ok()
        .flatten()
}

#[tokio::test]
async fn test_copy_email_click_copies_and_acknowledges() {
    let mut mock = MockHost::new();
    mock.expect_copy_to_clipboard()
        .withf(|text| text == "pankoustav@gmail.com")
        .times(1)
        .returning(|_| Ok(()));
    mock.expect_play_sound()
        .with(mockall::predicate::eq(Sound::Click))
        .times(1)
        .returning(|_| Ok(()));

    let mut state = AppState::default().skip_intro();
    crate::app::reducer::update(&mut state, Action::TogglePalette);
    let command = crate::app::reducer::update(&mut state, Action::PaletteActivate(6))
        .expect("copy row emits an effect");
    assert!(!state.palette.is_open);

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(command, Arc::new(mock), tx, !state.muted).unwrap();

    let action = recv_within(&mut rx).await;
    assert_eq!(
        action,
        Some(Action::ShowNotice("Email copied to clipboard!".to_string()))
    );
}

#[tokio::test]
async fn test_copy_failure_is_silent() {
    let mut mock = MockHost::new();
    mock.expect_copy_to_clipboard()
        .returning(|_| Err(HostError::Clipboard("no display".to_string())));
    // Muted: no click either.
    mock.expect_play_sound().never();

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Invoke(Effect::CopyToClipboard {
            text: "hello@example.com",
            acknowledgment: "Email copied to clipboard!",
        }),
        Arc::new(mock),
        tx,
        false,
    )
    .unwrap();

    // The task drops its sender without sending anything.
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn test_navigate_effect_routes_back_through_reducer() {
    let mock = MockHost::new();
    let (tx, mut rx) = mpsc::channel(1);

    handle_command(
        Command::Invoke(Effect::Navigate("/projects")),
        Arc::new(mock),
        tx,
        true,
    )
    .unwrap();

    let action = recv_within(&mut rx).await.unwrap();
    assert_eq!(action, Action::Navigate("/projects".to_string()));

    let mut state = AppState::default().skip_intro();
    crate::app::reducer::update(&mut state, action);
    assert_eq!(state.route, crate::domain::models::Route::Projects);
}

#[tokio::test]
async fn test_open_url_failure_only_logs() {
    let mut mock = MockHost::new();
    mock.expect_open_url()
        .withf(|url| url == "https://github.com")
        .times(1)
        .returning(|_| Err(HostError::UnsupportedPlatform));
    mock.expect_play_sound().returning(|_| Ok(()));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Invoke(Effect::OpenUrl("https://github.com")),
        Arc::new(mock),
        tx,
        true,
    )
    .unwrap();

    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn test_open_external_failure_surfaces_error() {
    let mut mock = MockHost::new();
    mock.expect_open_url()
        .returning(|_| Err(HostError::UnsupportedPlatform));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::OpenExternal("https://wa.me/15550100?text=hi".to_string()),
        Arc::new(mock),
        tx,
        true,
    )
    .unwrap();

    match recv_within(&mut rx).await {
        Some(Action::ErrorOccurred(msg)) => assert!(msg.contains("WhatsApp")),
        other => panic!("Expected Action::ErrorOccurred, got {other:?}"),
    }
}

#[tokio::test]
async fn test_sound_failure_is_swallowed() {
    let mut mock = MockHost::new();
    mock.expect_play_sound()
        .with(mockall::predicate::eq(Sound::Hover))
        .times(1)
        .returning(|_| Err(HostError::Io(std::io::Error::other("closed"))));

    let (tx, _rx) = mpsc::channel(1);
    assert!(handle_command(Command::PlaySound(Sound::Hover), Arc::new(mock), tx, true).is_ok());
}

#[tokio::test]
async fn test_quit_key_ends_loop() {
    let mock = MockHost::new();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(10);

    event_tx
        .send(Ok(Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        ))))
        .await
        .unwrap();

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        run_loop_with_events(
            &mut terminal,
            AppState::default().skip_intro(),
            Arc::new(mock),
            event_rx,
        ),
    )
    .await;
    assert!(matches!(result, Ok(Ok(()))));
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockHost::new();
    mock.expect_open_url().returning(|_| Ok(()));
    mock.expect_copy_to_clipboard().returning(|_| Ok(()));
    mock.expect_play_sound().returning(|_| Ok(()));

    let host = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=20 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Dropping the sender closes the input stream and ends the loop.
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, host, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    use crossterm::event::KeyEvent;
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            // 't' would write the real preferences file.
            KeyCode::Char(if c.eq_ignore_ascii_case(&'t') { 'x' } else { c })
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
