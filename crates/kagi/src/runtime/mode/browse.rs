use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

const PREVIEW_PAGE_LINES: i16 = 10;

/// Handles key input while the file list has focus.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return EventResult::Quit,
        KeyCode::Char('o') => open_directory_prompt(app),
        KeyCode::Char('j') | KeyCode::Down => app.move_selection(1).await,
        KeyCode::Char('k') | KeyCode::Up => app.move_selection(-1).await,
        KeyCode::Char('J') => app.scroll_preview(1),
        KeyCode::Char('K') => app.scroll_preview(-1),
        KeyCode::PageDown => app.scroll_preview(PREVIEW_PAGE_LINES),
        KeyCode::PageUp => app.scroll_preview(-PREVIEW_PAGE_LINES),
        KeyCode::Enter => app.open_selection_in_browser(),
        KeyCode::Char('r') => app.refresh().await,
        KeyCode::Char('?') => app.mode = AppMode::Help { scroll_offset: 0 },
        _ => {}
    }

    EventResult::Continue
}

/// Opens the directory prompt pre-filled with the current directory.
fn open_directory_prompt(app: &mut App) {
    let input = app
        .current_directory()
        .map(|directory| directory.to_string_lossy().to_string())
        .unwrap_or_default();

    app.mode = AppMode::DirectoryPrompt { input };
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    use super::*;
    use crate::app::AppConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn new_test_app(temp_dir: &TempDir) -> App {
        let config = AppConfig {
            initial_directory: Some(temp_dir.path().to_path_buf()),
            ..AppConfig::default()
        };

        App::new(config, temp_dir.path().to_path_buf())
    }

    #[tokio::test]
    async fn test_handle_quit_keys_quit() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut app = new_test_app(&temp_dir);

        // Act
        let quit = handle(&mut app, key(KeyCode::Char('q'))).await;
        let escape = handle(&mut app, key(KeyCode::Esc)).await;

        // Assert
        assert!(matches!(quit, EventResult::Quit));
        assert!(matches!(escape, EventResult::Quit));
    }

    #[tokio::test]
    async fn test_handle_o_opens_prompt_with_current_directory() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut app = new_test_app(&temp_dir);

        // Act
        let result = handle(&mut app, key(KeyCode::Char('o'))).await;

        // Assert
        assert!(matches!(result, EventResult::Continue));
        assert!(matches!(
            app.mode,
            AppMode::DirectoryPrompt { ref input }
                if input == &temp_dir.path().to_string_lossy()
        ));
    }

    #[tokio::test]
    async fn test_handle_navigation_keys_move_selection() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("a.html"), "").expect("failed to write file");
        fs::write(temp_dir.path().join("b.html"), "").expect("failed to write file");
        let mut app = new_test_app(&temp_dir);

        // Act
        handle(&mut app, key(KeyCode::Char('j'))).await;
        handle(&mut app, key(KeyCode::Down)).await;
        let after_down = app.selected_index();
        handle(&mut app, key(KeyCode::Char('k'))).await;

        // Assert
        assert_eq!(after_down, Some(1));
        assert_eq!(app.selected_index(), Some(0));
    }

    #[tokio::test]
    async fn test_handle_refresh_picks_up_new_files() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut app = new_test_app(&temp_dir);
        fs::write(temp_dir.path().join("new.html"), "").expect("failed to write file");

        // Act
        handle(&mut app, key(KeyCode::Char('r'))).await;

        // Assert
        assert_eq!(app.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_handle_preview_scroll_keys() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut app = new_test_app(&temp_dir);

        // Act
        handle(&mut app, key(KeyCode::PageDown)).await;
        handle(&mut app, key(KeyCode::Char('K'))).await;

        // Assert
        assert_eq!(app.preview_scroll(), 9);
    }

    #[tokio::test]
    async fn test_handle_question_mark_opens_help() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut app = new_test_app(&temp_dir);

        // Act
        handle(&mut app, key(KeyCode::Char('?'))).await;

        // Assert
        assert!(matches!(app.mode, AppMode::Help { scroll_offset: 0 }));
    }
}
