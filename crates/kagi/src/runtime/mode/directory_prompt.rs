use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::app::chooser::resolve_directory_input;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the directory prompt overlay is open.
///
/// `Enter` opens the typed directory; `Esc` closes the prompt without
/// changing the current directory.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::DirectoryPrompt { input } = &mut app.mode else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Esc => app.mode = AppMode::Browse,
        KeyCode::Enter => submit(app),
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(character) => input.push(character),
        _ => {}
    }

    EventResult::Continue
}

fn submit(app: &mut App) {
    let AppMode::DirectoryPrompt { input } = std::mem::replace(&mut app.mode, AppMode::Browse)
    else {
        return;
    };

    let home_dir = dirs::home_dir();
    match resolve_directory_input(&input, app.working_dir(), home_dir.as_deref()) {
        Ok(directory) => app.choose_directory(directory),
        Err(error) => app.reject_directory_choice(error.to_string()),
    }
}
