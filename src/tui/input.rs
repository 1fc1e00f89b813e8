//! Key handling for the console input line

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::console::InputBuffer;

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Buffer contents changed
    Edited,
    /// Submit the current input
    Submit,
    /// Quit the application
    Quit,
    /// Scroll the transcript toward older entries
    ScrollUp,
    /// Scroll the transcript toward newer entries
    ScrollDown,
    /// Tab pressed (for completion)
    Tab,
    /// Escape pressed (close popup or panel)
    Escape,
    ToggleMinimize,
    ToggleTheme,
    /// Copy the newest output to the clipboard
    CopyLast,
}

/// Apply a key to the buffer and report what the app should do
pub fn handle_key(input: &mut InputBuffer, key: KeyEvent) -> InputAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => InputAction::Quit,
        KeyCode::Char('n') if ctrl => InputAction::ToggleMinimize,
        KeyCode::Char('t') if ctrl => InputAction::ToggleTheme,
        KeyCode::Char('y') if ctrl => InputAction::CopyLast,

        KeyCode::Enter => InputAction::Submit,

        // Editing
        KeyCode::Backspace => {
            input.backspace();
            InputAction::Edited
        }
        KeyCode::Delete => {
            input.delete();
            InputAction::Edited
        }
        KeyCode::Char('u') if ctrl => {
            input.clear();
            InputAction::Edited
        }
        KeyCode::Char('w') if ctrl => {
            input.delete_word();
            InputAction::Edited
        }

        // Cursor movement
        KeyCode::Left => {
            input.move_left();
            InputAction::None
        }
        KeyCode::Right => {
            input.move_right();
            InputAction::None
        }
        KeyCode::Home => {
            input.move_home();
            InputAction::None
        }
        KeyCode::Char('a') if ctrl => {
            input.move_home();
            InputAction::None
        }
        KeyCode::End => {
            input.move_end();
            InputAction::None
        }
        KeyCode::Char('e') if ctrl => {
            input.move_end();
            InputAction::None
        }

        // Recall of submitted lines
        KeyCode::Up => {
            input.recall_prev();
            InputAction::Edited
        }
        KeyCode::Down => {
            input.recall_next();
            InputAction::Edited
        }

        KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::PageDown => InputAction::ScrollDown,

        KeyCode::Tab => InputAction::Tab,
        KeyCode::Esc => InputAction::Escape,

        // Other control chords are not text
        KeyCode::Char(_) if ctrl => InputAction::None,
        KeyCode::Char(c) => {
            input.insert_char(c);
            InputAction::Edited
        }

        _ => InputAction::None,
    }
}
