use crate::font::FontKey;

/// Caret blink half-period in milliseconds
pub const CARET_BLINK_MS: f64 = 500.0;

/// Appearance and editing settings shared by text boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBoxConfig {
    /// Font used for both the text and the caret glyph
    pub font: FontKey,
    /// Glyph drawn as the caret
    pub caret_glyph: char,
    /// How long the caret stays visible (and hidden) per blink
    pub caret_blink_ms: f64,
    /// Spaces inserted by the Tab key when tabs are allowed
    pub tab_spaces: usize,
    /// Character shown in place of each character of a password
    pub password_mask: char,
}

impl Default for TextBoxConfig {
    fn default() -> Self {
        Self {
            font: FontKey::default(),
            caret_glyph: '_',
            caret_blink_ms: CARET_BLINK_MS,
            tab_spaces: 4,
            password_mask: '*',
        }
    }
}

impl TextBoxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: FontKey) -> Self {
        self.font = font;
        self
    }

    pub fn caret_glyph(mut self, glyph: char) -> Self {
        self.caret_glyph = glyph;
        self
    }

    /// Set the blink half-period. A non-positive value keeps the caret solid.
    pub fn caret_blink_ms(mut self, ms: f64) -> Self {
        self.caret_blink_ms = ms;
        self
    }

    pub fn tab_spaces(mut self, spaces: usize) -> Self {
        self.tab_spaces = spaces;
        self
    }

    pub fn password_mask(mut self, mask: char) -> Self {
        self.password_mask = mask;
        self
    }
}
