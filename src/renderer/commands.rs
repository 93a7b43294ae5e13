//! Draw command definitions handed to the host's sprite batch.

use crate::font::FontKey;
use crate::gump::Hue;

/// A single draw operation in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw a run of text with a game font.
    Text {
        /// The text string to render
        text: String,
        /// Left edge in screen pixels
        x: i32,
        /// Top edge in screen pixels
        y: i32,
        /// Palette hue applied to the glyphs
        hue: Hue,
        /// Which font to rasterize with
        font: FontKey,
        /// Wrap width, for multi-line text
        max_width: Option<i32>,
    },
}

impl DrawCommand {
    /// Create a text command without wrapping.
    pub fn text(text: impl Into<String>, x: i32, y: i32, hue: Hue, font: FontKey) -> Self {
        Self::Text {
            text: text.into(),
            x,
            y,
            hue,
            font,
            max_width: None,
        }
    }
}
