use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use echo_core::{Mode, WidgetEvent};

use crate::app::{App, InputMode, Screen};
use crate::tui::AppEvent;

pub async fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => {
            app.tick_animation();
        }
    }

    // Pick up a finished request on every pass through the loop
    app.poll_request().await;
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match (app.screen, app.input_mode) {
        (Screen::Picker, _) => handle_picker(app, key),
        (Screen::Chat, InputMode::Normal) => handle_chat_normal(app, key),
        (Screen::Chat, InputMode::Editing) => handle_chat_editing(app, key),
    }
}

fn handle_picker(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        KeyCode::Left | KeyCode::Char('h') => {
            app.carousel.previous();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.carousel.next();
        }

        // Practice: persist the scenario, then switch screens
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Err(e) = app.practice() {
                tracing::error!(error = %e, "could not save scenario");
                app.status_message = Some(format!("Could not save scenario: {}", e));
            }
        }

        KeyCode::Esc | KeyCode::Char('c') => app.open_chat(),
        _ => {}
    }
}

fn handle_chat_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        KeyCode::Char('i') => app.start_editing(),
        KeyCode::Char('p') => app.open_picker(),
        KeyCode::Char('o') => app.toggle_settings(),
        KeyCode::Char('s') => app.apply(WidgetEvent::Send),

        // Rewrite styles, numbered from 1
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(mode) = Mode::rewrites().get(index) {
                app.apply(WidgetEvent::Rewrite(*mode));
            }
        }

        // Row focus
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Left | KeyCode::Char('h') => app.focus_left(),
        KeyCode::Right | KeyCode::Char('l') => app.focus_right(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),

        // Transcript scroll
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('G') | KeyCode::End => app.scroll_chat_to_bottom(),

        _ => {}
    }
}

fn handle_chat_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => app.apply(WidgetEvent::Send),
        code => {
            let draft = app.widget.draft_mut();
            match code {
                KeyCode::Backspace => draft.backspace(),
                KeyCode::Delete => draft.delete(),
                KeyCode::Left => draft.move_left(),
                KeyCode::Right => draft.move_right(),
                KeyCode::Home => draft.move_home(),
                KeyCode::End => draft.move_end(),
                KeyCode::Char(c) => draft.insert_char(c),
                _ => {}
            }
        }
    }
}
