//! Font metrics used by text controls.
//!
//! Glyph rasterization belongs to the host. Controls only need to know where
//! the caret goes and which character a click lands on, so fonts are exposed
//! through the [`FontMetrics`] trait and looked up by [`FontKey`] in a
//! thread-local registry.

mod bitmap;
mod text_measurer;

pub use bitmap::BitmapFont;
pub use text_measurer::{CosmicFont, FontFamily};

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::layout::Size;
use crate::widgets::Point;

/// Identifies a game font: the font index and whether it is one of the
/// unicode fonts or the legacy ASCII set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub id: u8,
    pub unicode: bool,
}

impl FontKey {
    pub const fn unicode(id: u8) -> Self {
        Self { id, unicode: true }
    }

    pub const fn ascii(id: u8) -> Self {
        Self { id, unicode: false }
    }
}

impl Default for FontKey {
    fn default() -> Self {
        Self::unicode(1)
    }
}

/// Metrics a text control needs from a font.
///
/// Positions are in pixels relative to the top-left corner of the text block.
/// `max_width` enables wrapping; lines always break on `'\n'`.
pub trait FontMetrics {
    fn line_height(&self) -> i32;

    fn measure(&self, text: &str, max_width: Option<i32>) -> Size;

    /// Where the caret is drawn when it sits before char `index`.
    fn caret_position(&self, text: &str, index: usize, max_width: Option<i32>) -> Point;

    /// The char index closest to the point `(x, y)`.
    fn caret_index_at(&self, text: &str, x: i32, y: i32, max_width: Option<i32>) -> usize;
}

thread_local! {
    static FONTS: RefCell<HashMap<FontKey, Rc<dyn FontMetrics>>> = RefCell::new(HashMap::new());
    static MISSING_FONTS: RefCell<HashSet<FontKey>> = RefCell::new(HashSet::new());
    static FALLBACK_FONT: Rc<dyn FontMetrics> = Rc::new(BitmapFont::default());
}

/// Register the metrics for a font key, replacing any previous entry.
pub fn register_font(key: FontKey, font: Rc<dyn FontMetrics>) {
    log::debug!("registering font {:?}", key);
    FONTS.with_borrow_mut(|fonts| {
        fonts.insert(key, font);
    });
}

/// Look up a font, falling back to the default bitmap font.
pub fn font(key: FontKey) -> Rc<dyn FontMetrics> {
    if let Some(font) = FONTS.with_borrow(|fonts| fonts.get(&key).cloned()) {
        return font;
    }

    MISSING_FONTS.with_borrow_mut(|missing| {
        if missing.insert(key) {
            log::warn!("font {:?} is not registered, using fallback metrics", key);
        }
    });
    FALLBACK_FONT.with(Rc::clone)
}

/// Run `f` with the metrics registered for `key`.
pub fn with_font<R>(key: FontKey, f: impl FnOnce(&dyn FontMetrics) -> R) -> R {
    let font = font(key);
    f(font.as_ref())
}

/// Remove every registered font.
pub fn clear_fonts() {
    FONTS.with_borrow_mut(HashMap::clear);
    MISSING_FONTS.with_borrow_mut(HashSet::clear);
}
