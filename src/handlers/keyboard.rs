use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, DialogMode, ViewMode};

pub enum KeyAction {
    Continue,
    Quit,
}

pub async fn handle_key_event(app: &mut App, key: KeyEvent) -> KeyAction {
    // Handle dialogs first (highest priority)
    if app.is_dialog_open() {
        return handle_dialog_input(app, key).await;
    }

    handle_normal_mode(app, key).await
}

async fn handle_dialog_input(app: &mut App, key: KeyEvent) -> KeyAction {
    match &app.dialog {
        DialogMode::None => {}
        DialogMode::ConfirmDelete { .. } => match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.delete_from_dialog().await;
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                app.close_dialog();
            }
            _ => {}
        },
    }
    KeyAction::Continue
}

async fn handle_normal_mode(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => return KeyAction::Quit,

        // View switching
        KeyCode::Char('1') => app.switch_view(ViewMode::Library),
        KeyCode::Char('2') => app.switch_view(ViewMode::Showcase),
        KeyCode::Char('3') => app.open_detail(),
        KeyCode::Tab => {
            let next = match app.view_mode {
                ViewMode::Library => ViewMode::Showcase,
                ViewMode::Showcase => ViewMode::Library,
                ViewMode::Detail => ViewMode::Library,
            };
            app.switch_view(next);
        }

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('h') | KeyCode::Left => app.focus_left(),
        KeyCode::Char('l') | KeyCode::Right => app.focus_right(),

        KeyCode::Enter => match app.view_mode {
            ViewMode::Library | ViewMode::Showcase => app.open_detail(),
            ViewMode::Detail => {}
        },
        KeyCode::Esc => {
            if app.view_mode == ViewMode::Detail {
                app.back_to_library();
            }
        }

        // Actions
        KeyCode::Char('s') => app.play_selected_sound(),
        KeyCode::Char('d') => app.open_delete_dialog(),
        KeyCode::Char('R') => app.reload().await,
        KeyCode::Char('D') => app.show_debug = !app.show_debug,

        _ => {}
    }

    KeyAction::Continue
}
