/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// The message field: text, a character cursor, and whether it accepts input.
#[derive(Debug, Clone)]
pub struct DraftInput {
    text: String,
    cursor: usize,
    enabled: bool,
}

impl Default for DraftInput {
    fn default() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            enabled: true,
        }
    }
}

impl DraftInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the contents and park the cursor after the last character.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.enabled {
            return;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if !self.enabled || self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_pos);
    }

    pub fn delete(&mut self) {
        if !self.enabled || self.cursor >= self.char_count() {
            return;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_pos);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_edit_multibyte() {
        let mut draft = DraftInput::default();
        for c in "héllo".chars() {
            draft.insert_char(c);
        }
        draft.move_left();
        draft.move_left();
        draft.backspace();
        assert_eq!(draft.text(), "hélo");
        assert_eq!(draft.cursor(), 2);

        draft.move_home();
        draft.delete();
        assert_eq!(draft.text(), "élo");
    }

    #[test]
    fn test_set_text_places_cursor_at_end() {
        let mut draft = DraftInput::default();
        draft.set_text("Thanks, Professor — see you Monday");
        assert_eq!(draft.cursor(), draft.text().chars().count());
    }

    #[test]
    fn test_disabled_input_ignores_typing() {
        let mut draft = DraftInput::default();
        draft.set_text("hi");
        draft.set_enabled(false);
        draft.insert_char('!');
        draft.backspace();
        assert_eq!(draft.text(), "hi");
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut draft = DraftInput::default();
        draft.set_text("ab");
        draft.move_right();
        draft.move_right();
        assert_eq!(draft.cursor(), 2);
        draft.move_home();
        draft.move_left();
        assert_eq!(draft.cursor(), 0);
    }
}
