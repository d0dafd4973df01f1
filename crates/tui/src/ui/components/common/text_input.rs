//! UTF-8 safe single-line text input state with cursor management.
//!
//! Holds the editing primitives behind the prompt panel. The buffer is the
//! view's copy of the prompt; every edit is forwarded to the controller as a
//! `Msg::EditPrompt`.

use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default)]
pub struct TextInputState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor: 0,
        }
    }

    // ----- Getters -----
    pub fn input(&self) -> &str {
        &self.input
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Terminal columns occupied by the text before the cursor.
    pub fn cursor_columns(&self) -> usize {
        self.input[..self.cursor].width()
    }

    // ----- Setters -----
    /// Replaces the buffer and parks the cursor at the end.
    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        self.cursor = self.input.len();
    }

    // ----- Editing primitives (UTF-8 safe) -----

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev_len = self.input[..self.cursor].chars().last().map(|c| c.len_utf8()).unwrap_or(1);
        self.cursor = self.cursor.saturating_sub(prev_len);
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace the char immediately before the cursor.
    ///
    /// Returns `false` when there was nothing to remove.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.input[..self.cursor].chars().last().map(|c| c.len_utf8()).unwrap_or(1);
        let start = self.cursor - prev;
        self.input.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Delete the char under the cursor.
    ///
    /// Returns `false` when the cursor is already at the end.
    pub fn delete(&mut self) -> bool {
        let Some(next) = self.input[self.cursor..].chars().next() else {
            return false;
        };
        let end = self.cursor + next.len_utf8();
        self.input.drain(self.cursor..end);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_move_insert_backspace() {
        let mut st = TextInputState::new();
        st.set_input("h🙂llo"); // emoji is 4 bytes
        st.move_home();
        st.move_right(); // between h and 🙂
        st.insert_char('e');
        assert_eq!(st.input(), "he🙂llo");
        st.move_right(); // step over 🙂
        assert!(st.backspace()); // delete 🙂
        assert_eq!(st.input(), "hello");
        st.move_left();
        st.backspace();
        assert_eq!(st.input(), "ello");
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut st = TextInputState::new();
        st.set_input("chat");
        assert!(!st.delete(), "cursor parks at the end after set_input");
        st.move_home();
        assert!(st.delete());
        assert_eq!(st.input(), "hat");
        assert_eq!(st.cursor(), 0);
    }

    #[test]
    fn cursor_columns_count_display_width() {
        let mut st = TextInputState::new();
        st.set_input("a🚀b");
        st.move_left();
        assert_eq!(st.cursor_columns(), 3);
        st.move_home();
        assert_eq!(st.cursor_columns(), 0);
        assert!(!st.backspace());
    }

    #[test]
    fn whitespace_only_input_is_blank() {
        let mut st = TextInputState::new();
        st.set_input("   ");
        assert!(st.is_blank());
        st.insert_char('x');
        assert!(!st.is_blank());
    }
}
