//! Session input buffer
//!
//! Note: `cursor` is a CHARACTER index, not a byte index, so editing stays
//! on char boundaries for multi-byte input.

use unicode_width::UnicodeWidthChar;

/// Single-line input buffer with recall of submitted lines
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    buffer: String,
    cursor: usize,
    /// Submitted lines, oldest first
    history: Vec<String>,
    /// Position while recalling; `None` means editing the live line
    history_index: Option<usize>,
    /// Live line saved when recall starts
    saved_input: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_at_cursor();
        }
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            self.remove_at_cursor();
        }
    }

    fn remove_at_cursor(&mut self) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        if let Some(ch) = self.buffer[byte_idx..].chars().next() {
            self.buffer.replace_range(byte_idx..byte_idx + ch.len_utf8(), "");
        }
    }

    /// Delete back to the previous word boundary
    pub fn delete_word(&mut self) {
        let chars: Vec<char> = self.buffer.chars().collect();
        let mut start = self.cursor;
        while start > 0 && chars[start - 1] == ' ' {
            start -= 1;
        }
        while start > 0 && chars[start - 1] != ' ' {
            start -= 1;
        }
        let from = self.char_to_byte_index(start);
        let to = self.char_to_byte_index(self.cursor);
        self.buffer.replace_range(from..to, "");
        self.cursor = start;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Replace the contents (completion) and park the cursor at the end
    pub fn set(&mut self, content: &str) {
        self.buffer = content.to_string();
        self.cursor = self.char_count();
    }

    /// Hand out the current line, leaving the buffer empty and recording
    /// the line for recall
    pub fn take(&mut self) -> String {
        let line = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        self.history_index = None;
        self.saved_input.clear();
        if self.history.last() != Some(&line) {
            self.history.push(line.clone());
        }
        line
    }

    /// Step back to an older submitted line
    pub fn recall_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next = match self.history_index {
            None => {
                self.saved_input = self.buffer.clone();
                self.history.len() - 1
            }
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.history_index = Some(next);
        let line = self.history[next].clone();
        self.set(&line);
    }

    /// Step forward to a newer line, then back to the saved live line
    pub fn recall_next(&mut self) {
        match self.history_index {
            None => {}
            Some(i) if i + 1 < self.history.len() => {
                self.history_index = Some(i + 1);
                let line = self.history[i + 1].clone();
                self.set(&line);
            }
            Some(_) => {
                self.history_index = None;
                let saved = std::mem::take(&mut self.saved_input);
                self.set(&saved);
            }
        }
    }

    /// Terminal columns between the start of the line and the cursor
    pub fn display_width(&self) -> usize {
        self.buffer
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_ascii() {
        let mut input = InputBuffer::new();
        input.insert_char('h');
        input.insert_char('i');
        assert_eq!(input.as_str(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_unicode() {
        let mut input = InputBuffer::new();
        input.set("\u{4f60}\u{597d}");
        input.backspace();
        assert_eq!(input.as_str(), "\u{4f60}");
        assert_eq!(input.cursor(), 1);
        assert_eq!(input.display_width(), 2);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = InputBuffer::new();
        input.set("hlp");
        input.move_home();
        input.move_right();
        input.insert_char('e');
        assert_eq!(input.as_str(), "help");
        input.move_end();
        input.delete();
        assert_eq!(input.as_str(), "help");
    }

    #[test]
    fn test_delete_word() {
        let mut input = InputBuffer::new();
        input.set("show my projects  ");
        input.delete_word();
        assert_eq!(input.as_str(), "show my ");
        assert_eq!(input.cursor(), 8);
    }

    #[test]
    fn test_take_clears_and_records() {
        let mut input = InputBuffer::new();
        input.set("skills");
        assert_eq!(input.take(), "skills");
        assert_eq!(input.as_str(), "");
        assert_eq!(input.cursor(), 0);
        assert_eq!(input.history(), ["skills".to_string()]);
    }

    #[test]
    fn test_recall_walks_history_and_restores_live_line() {
        let mut input = InputBuffer::new();
        input.set("about");
        input.take();
        input.set("skills");
        input.take();
        input.set("pro");

        input.recall_prev();
        assert_eq!(input.as_str(), "skills");
        input.recall_prev();
        assert_eq!(input.as_str(), "about");
        input.recall_prev();
        assert_eq!(input.as_str(), "about");
        input.recall_next();
        assert_eq!(input.as_str(), "skills");
        input.recall_next();
        assert_eq!(input.as_str(), "pro");
        assert_eq!(input.cursor(), 3);
    }
}
