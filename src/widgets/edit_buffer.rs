//! Character-indexed text storage with a caret.
//!
//! The caret is a char index in `0..=len`. Byte offsets are only computed
//! internally when the string is spliced.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    caret: usize,
}

impl EditBuffer {
    /// Create a buffer with the caret at the start.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            caret: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Replace the whole text, keeping the caret where it was if still valid.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.caret.min(self.len());
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    /// The text as it would read after inserting `s` at the caret.
    pub fn with_insertion(&self, s: &str) -> String {
        let at = self.byte_offset(self.caret);
        let mut result = String::with_capacity(self.text.len() + s.len());
        result.push_str(&self.text[..at]);
        result.push_str(s);
        result.push_str(&self.text[at..]);
        result
    }

    /// Insert `s` at the caret and move the caret past it.
    pub fn insert_at_caret(&mut self, s: &str) {
        let at = self.byte_offset(self.caret);
        self.text.insert_str(at, s);
        self.caret += s.chars().count();
    }

    /// Backspace. Returns false when the caret is already at the start.
    pub fn remove_before_caret(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        self.remove_char(self.caret);
        true
    }

    /// Delete. Returns false when the caret is at the end.
    pub fn remove_at_caret(&mut self) -> bool {
        if self.caret >= self.len() {
            return false;
        }
        self.remove_char(self.caret);
        true
    }

    /// Move the caret by `delta` chars, clamped to the text.
    pub fn move_caret(&mut self, delta: isize) {
        let target = self.caret as isize + delta;
        self.caret = target.clamp(0, self.len() as isize) as usize;
    }

    /// Place the caret at `index`, clamped to the text.
    pub fn set_caret(&mut self, index: usize) {
        self.caret = index.min(self.len());
    }

    /// Text to render: the plain text, or one `mask` per char.
    pub fn display_text(&self, mask: Option<char>) -> String {
        match mask {
            Some(mask) => mask.to_string().repeat(self.len()),
            None => self.text.clone(),
        }
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn remove_char(&mut self, index: usize) {
        let at = self.byte_offset(index);
        if at < self.text.len() {
            self.text.remove(at);
        }
    }
}
