use std::cell::RefCell;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};

use super::FontMetrics;
use crate::layout::Size;
use crate::widgets::Point;

/// Font family used for shaped (non-bitmap) text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
    /// Custom font by name
    Name(String),
}

impl FontFamily {
    /// Convert to cosmic-text Family type for shaping.
    pub fn to_cosmic(&self) -> Family<'_> {
        match self {
            FontFamily::SansSerif => Family::SansSerif,
            FontFamily::Serif => Family::Serif,
            FontFamily::Monospace => Family::Monospace,
            FontFamily::Name(name) => Family::Name(name),
        }
    }
}

/// Metrics for system fonts shaped with cosmic-text.
///
/// Used for the unicode chat and journal fonts when the client renders them
/// as outline fonts instead of the client bitmap sets.
pub struct CosmicFont {
    font_system: RefCell<FontSystem>,
    font_size: f32,
    line_height: f32,
    family: FontFamily,
}

impl CosmicFont {
    pub fn new(font_size: f32) -> Self {
        Self::with_font_system(FontSystem::new(), font_size)
    }

    pub fn with_font_system(font_system: FontSystem, font_size: f32) -> Self {
        Self {
            font_system: RefCell::new(font_system),
            font_size,
            line_height: (font_size * 1.2).ceil(),
            family: FontFamily::default(),
        }
    }

    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    fn shape(&self, text: &str, max_width: Option<i32>) -> Buffer {
        let mut font_system = self.font_system.borrow_mut();
        let metrics = Metrics::new(self.font_size, self.line_height);
        let mut buffer = Buffer::new(&mut font_system, metrics);

        buffer.set_size(&mut font_system, max_width.map(|w| w as f32), None);
        buffer.set_text(
            &mut font_system,
            text,
            &Attrs::new().family(self.family.to_cosmic()),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut font_system, true);
        buffer
    }
}

/// Split a char index into (line, byte offset within that line).
fn line_and_byte(text: &str, index: usize) -> (usize, usize) {
    let mut remaining = index;
    let mut line_i = 0;
    for line in text.split('\n') {
        let count = line.chars().count();
        if remaining <= count {
            let byte = line
                .char_indices()
                .nth(remaining)
                .map(|(i, _)| i)
                .unwrap_or(line.len());
            return (line_i, byte);
        }
        remaining -= count + 1;
        line_i += 1;
    }
    let last = text.rsplit('\n').next().unwrap_or("");
    (line_i.saturating_sub(1), last.len())
}

/// Inverse of [`line_and_byte`].
fn char_index(text: &str, line_i: usize, byte: usize) -> usize {
    let mut index = 0;
    for (i, line) in text.split('\n').enumerate() {
        if i == line_i {
            let byte = byte.min(line.len());
            return index + line[..byte].chars().count();
        }
        index += line.chars().count() + 1;
    }
    text.chars().count()
}

impl FontMetrics for CosmicFont {
    fn line_height(&self) -> i32 {
        self.line_height as i32
    }

    fn measure(&self, text: &str, max_width: Option<i32>) -> Size {
        let buffer = self.shape(text, max_width);

        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
        }

        // Ensure minimum height for empty text
        if height == 0.0 {
            height = self.line_height;
        }

        Size::new(width.ceil() as i32, height.ceil() as i32)
    }

    fn caret_position(&self, text: &str, index: usize, max_width: Option<i32>) -> Point {
        if index == 0 || text.is_empty() {
            return Point::new(0, 0);
        }

        let (line_i, byte) = line_and_byte(text, index);
        let buffer = self.shape(text, max_width);

        let mut line_end = None;
        for run in buffer.layout_runs().filter(|run| run.line_i == line_i) {
            if let Some(glyph) = run
                .glyphs
                .iter()
                .find(|glyph| glyph.start <= byte && byte < glyph.end)
            {
                return Point::new(glyph.x.round() as i32, run.line_top.round() as i32);
            }
            line_end = Some(Point::new(
                run.line_w.round() as i32,
                run.line_top.round() as i32,
            ));
        }

        line_end.unwrap_or_else(|| Point::new(0, line_i as i32 * self.line_height()))
    }

    fn caret_index_at(&self, text: &str, x: i32, y: i32, max_width: Option<i32>) -> usize {
        if text.is_empty() {
            return 0;
        }

        let buffer = self.shape(text, max_width);
        match buffer.hit(x as f32, y as f32) {
            Some(cursor) => char_index(text, cursor.line, cursor.index),
            None if y < 0 => 0,
            None => text.chars().count(),
        }
    }
}
