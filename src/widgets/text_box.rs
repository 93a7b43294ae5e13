//! TextBox control for gump text entries.
//!
//! The TextBox handles:
//! - Text display and editing at a caret
//! - Caret blinking and pixel positioning
//! - Horizontal scrolling so the caret stays inside the control
//! - Password masking, numeric-only and length-limited entries
//!
//! Background art and clipping to the control's bounds are the host's job.

use crate::config::TextBoxConfig;
use crate::font::{self, FontMetrics};
use crate::gump::{Graphic, Hue, TextEntryDef};
use crate::layout::{Constraints, Size};
use crate::reactive::{
    clipboard_paste, has_focus, release_focus, request_animation_frame, request_focus,
    ChangeFlags, WidgetId,
};
use crate::renderer::PaintContext;

use super::edit_buffer::EditBuffer;
use super::impl_dirty_flags;
use super::widget::{Event, EventResponse, Key, Modifiers, MouseButton, Point, Rect, Widget};

/// Type alias for text box callbacks
type TextCallback = Box<dyn Fn(&str)>;

pub struct TextBox {
    widget_id: WidgetId,
    dirty_flags: ChangeFlags,
    bounds: Rect,
    config: TextBoxConfig,

    hue: Hue,
    graphic: Graphic,

    // Content (actual value, never masked)
    buffer: EditBuffer,
    /// Maximum characters (or maximum value for numeric entries), 0 = no limit
    max_char_count: usize,

    is_editable: bool,
    is_password: bool,
    numeric_only: bool,
    multi_line: bool,
    allow_tab: bool,
    replace_default_text: bool,

    // Caret placement relative to the text origin
    caret_position: Point,
    // Horizontal scroll, always <= 0
    offset: i32,

    // Caret blinking
    caret_visible: bool,
    blink_elapsed: f64,
    was_focused: bool,

    on_change: Option<TextCallback>,
    on_submit: Option<TextCallback>,
}

impl TextBox {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, TextBoxConfig::default())
    }

    pub fn with_config(text: impl Into<String>, config: TextBoxConfig) -> Self {
        let mut text_box = Self {
            widget_id: WidgetId::next(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            bounds: Rect::default(),
            config,
            hue: Hue::NONE,
            graphic: Graphic::default(),
            buffer: EditBuffer::new(text),
            max_char_count: 0,
            is_editable: true,
            is_password: false,
            numeric_only: false,
            multi_line: false,
            allow_tab: false,
            replace_default_text: false,
            caret_position: Point::default(),
            offset: 0,
            caret_visible: false,
            blink_elapsed: 0.0,
            was_focused: false,
            on_change: None,
            on_submit: None,
        };
        text_box.update_caret_position();
        text_box
    }

    /// Create a text box from a `textentry`/`textentrylimited` layout entry.
    pub fn from_entry(entry: &TextEntryDef) -> Self {
        let mut text_box = Self::new(entry.text.clone())
            .hue(entry.hue)
            .graphic(entry.graphic)
            .max_char_count(entry.max_char_count);
        text_box.set_bounds(entry.bounds);
        text_box
    }

    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.bounds.width = width;
        self.bounds.height = height;
        self.update_caret_position();
        self
    }

    pub fn hue(mut self, hue: Hue) -> Self {
        self.hue = hue;
        self
    }

    pub fn graphic(mut self, graphic: Graphic) -> Self {
        self.graphic = graphic;
        self
    }

    /// Limit the number of characters (0 = unlimited).
    /// For numeric-only entries this is the largest accepted value.
    pub fn max_char_count(mut self, count: usize) -> Self {
        self.max_char_count = count;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.is_editable = editable;
        self
    }

    /// Enable password mode (masks text with the configured mask char)
    pub fn password(mut self, enabled: bool) -> Self {
        self.is_password = enabled;
        self.update_caret_position();
        self
    }

    pub fn numeric_only(mut self, enabled: bool) -> Self {
        self.numeric_only = enabled;
        self
    }

    /// Allow newlines (Enter) and wrap text at the control width
    pub fn multi_line(mut self, enabled: bool) -> Self {
        self.multi_line = enabled;
        self.update_caret_position();
        self
    }

    /// Let the Tab key insert spaces instead of being passed on
    pub fn allow_tab(mut self, enabled: bool) -> Self {
        self.allow_tab = enabled;
        self
    }

    /// Wipe the initial text as soon as the user types or presses Backspace
    pub fn replace_default_text_on_first_key_press(mut self, enabled: bool) -> Self {
        self.replace_default_text = enabled;
        self
    }

    /// Set callback for user edits
    pub fn on_change<F: Fn(&str) + 'static>(mut self, callback: F) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set callback for Enter in single-line boxes
    pub fn on_submit<F: Fn(&str) + 'static>(mut self, callback: F) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    /// The plain text, never masked.
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Replace the text programmatically. Does not fire `on_change`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer.set_text(text);
        self.update_caret_position();
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        let resized = bounds.width != self.bounds.width;
        self.bounds = bounds;
        self.mark_dirty(ChangeFlags::NEEDS_LAYOUT);
        if resized {
            self.update_caret_position();
        }
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.is_editable = editable;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn set_password(&mut self, enabled: bool) {
        self.is_password = enabled;
        self.update_caret_position();
    }

    pub fn set_hue(&mut self, hue: Hue) {
        self.hue = hue;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn config(&self) -> &TextBoxConfig {
        &self.config
    }

    pub fn get_hue(&self) -> Hue {
        self.hue
    }

    pub fn get_graphic(&self) -> Graphic {
        self.graphic
    }

    pub fn get_max_char_count(&self) -> usize {
        self.max_char_count
    }

    pub fn is_editable(&self) -> bool {
        self.is_editable
    }

    pub fn is_password(&self) -> bool {
        self.is_password
    }

    pub fn is_multi_line(&self) -> bool {
        self.multi_line
    }

    /// Caret position as a char index into the text
    pub fn caret_index(&self) -> usize {
        self.buffer.caret()
    }

    /// Caret pixel position relative to the unscrolled text origin
    pub fn caret_position(&self) -> Point {
        self.caret_position
    }

    /// Horizontal scroll applied to text and caret (never positive)
    pub fn scroll_offset(&self) -> i32 {
        self.offset
    }

    pub fn is_caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// Get the display text (masked if password mode)
    pub fn display_text(&self) -> String {
        self.buffer
            .display_text(self.is_password.then_some(self.config.password_mask))
    }

    fn wrap_width(&self) -> Option<i32> {
        self.multi_line.then_some(self.bounds.width)
    }

    fn caret_width(&self, font: &dyn FontMetrics) -> i32 {
        font.measure(&self.config.caret_glyph.to_string(), None).width
    }

    /// Recompute the caret's pixel position and scroll the text so the caret
    /// stays inside the control.
    fn update_caret_position(&mut self) {
        let display = self.display_text();
        let wrap_width = self.wrap_width();
        let font = font::font(self.config.font);

        let caret = font.caret_position(&display, self.buffer.caret(), wrap_width);
        let width = self.bounds.width;
        self.caret_position = caret;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);

        // Not laid out yet
        if width <= 0 {
            self.offset = 0;
            return;
        }

        let caret_width = self.caret_width(font.as_ref());

        // Don't leave a gap after the end of the text once it is scrolled
        let content_width = font.measure(&display, wrap_width).width.max(caret.x) + caret_width;
        let mut offset = self.offset.max((width - content_width).min(0));

        if caret.x + offset < 0 {
            offset = -caret.x;
        } else if caret.x + caret_width + offset > width {
            offset = width - caret.x - caret_width;
        }

        self.offset = offset.min(0);
    }

    /// Reset caret to visible (called on input)
    fn reset_caret_blink(&mut self) {
        self.caret_visible = true;
        self.blink_elapsed = 0.0;
    }

    fn caret_moved(&mut self) {
        self.update_caret_position();
        self.reset_caret_blink();
        request_animation_frame();
    }

    /// Finish a user edit: reposition the caret and notify listeners
    fn commit_edit(&mut self) {
        self.caret_moved();
        if let Some(ref callback) = self.on_change {
            callback(self.buffer.text());
        }
    }

    /// Clear the initial text if it should be replaced. Returns true if the
    /// text changed.
    fn take_default_text(&mut self) -> bool {
        if !self.replace_default_text {
            return false;
        }
        self.replace_default_text = false;
        if self.buffer.is_empty() {
            return false;
        }
        self.buffer.clear();
        true
    }

    /// Insert at the caret if the entry's limits allow it.
    fn insert(&mut self, s: &str) -> bool {
        if self.max_char_count > 0 {
            if self.numeric_only {
                let candidate = self.buffer.with_insertion(s);
                match candidate.parse::<u64>() {
                    Ok(value) if value <= self.max_char_count as u64 => {}
                    _ => {
                        log::trace!(
                            "rejecting {:?}: {:?} exceeds {}",
                            s,
                            candidate,
                            self.max_char_count
                        );
                        return false;
                    }
                }
            } else if self.buffer.len() + s.chars().count() > self.max_char_count {
                log::trace!("rejecting {:?}: limit of {} chars", s, self.max_char_count);
                return false;
            }
        }

        self.buffer.insert_at_caret(s);
        true
    }

    fn accepts_char(&self, c: char) -> bool {
        if self.numeric_only && !c.is_numeric() {
            log::trace!("rejecting {:?}: numeric entry", c);
            return false;
        }
        true
    }

    fn on_text_input(&mut self, c: char) -> EventResponse {
        if c.is_control() {
            return EventResponse::Ignored;
        }
        if !self.accepts_char(c) {
            return EventResponse::Handled;
        }

        let cleared = self.take_default_text();
        let inserted = self.insert(c.encode_utf8(&mut [0; 4]));
        if cleared || inserted {
            self.commit_edit();
        }
        EventResponse::Handled
    }

    fn paste(&mut self) {
        let Some(text) = clipboard_paste() else {
            return;
        };

        let mut changed = self.take_default_text();
        for c in text.chars() {
            changed |= match c {
                '\n' if self.multi_line => self.insert("\n"),
                c if c.is_control() => false,
                c if self.accepts_char(c) => self.insert(c.encode_utf8(&mut [0; 4])),
                _ => false,
            };
        }
        if changed {
            self.commit_edit();
        }
    }

    fn on_mouse_click(&mut self, x: i32, y: i32) {
        let display = self.display_text();
        let index = font::with_font(self.config.font, |font| {
            font.caret_index_at(&display, x - self.offset, y, self.wrap_width())
        });

        if index != self.buffer.caret() {
            self.buffer.set_caret(index);
            self.update_caret_position();
        }
        self.reset_caret_blink();
        request_animation_frame();
    }

    /// Handle key down event
    fn handle_key(&mut self, key: &Key, modifiers: &Modifiers) -> EventResponse {
        match key {
            Key::Paste => self.paste(),
            Key::Char(c) if modifiers.ctrl && c.eq_ignore_ascii_case(&'v') => self.paste(),
            Key::Tab => {
                if !self.allow_tab {
                    return EventResponse::Ignored;
                }
                let spaces = " ".repeat(self.config.tab_spaces);
                if self.insert(&spaces) {
                    self.commit_edit();
                }
            }
            Key::Enter => {
                if self.multi_line {
                    if self.insert("\n") {
                        self.commit_edit();
                    }
                } else if let Some(ref callback) = self.on_submit {
                    log::debug!("text box {:?} submitted", self.widget_id);
                    callback(self.buffer.text());
                }
            }
            Key::Backspace => {
                if self.take_default_text() || self.buffer.remove_before_caret() {
                    self.commit_edit();
                }
            }
            Key::Delete => {
                if self.buffer.remove_at_caret() {
                    self.commit_edit();
                }
            }
            Key::Left => {
                self.buffer.move_caret(-1);
                self.caret_moved();
            }
            Key::Right => {
                self.buffer.move_caret(1);
                self.caret_moved();
            }
            Key::Home => {
                self.buffer.set_caret(0);
                self.caret_moved();
            }
            Key::End => {
                self.buffer.set_caret(self.buffer.len());
                self.caret_moved();
            }
            _ => return EventResponse::Ignored,
        }
        EventResponse::Handled
    }
}

impl Widget for TextBox {
    fn update(&mut self, _total_ms: f64, frame_ms: f64) {
        if has_focus(self.widget_id) {
            if !self.was_focused {
                self.was_focused = true;
                self.reset_caret_blink();
                self.mark_dirty(ChangeFlags::NEEDS_PAINT);
            } else if self.config.caret_blink_ms > 0.0 {
                self.blink_elapsed += frame_ms;
                while self.blink_elapsed >= self.config.caret_blink_ms {
                    self.blink_elapsed -= self.config.caret_blink_ms;
                    self.caret_visible = !self.caret_visible;
                    self.mark_dirty(ChangeFlags::NEEDS_PAINT);
                }
            }
            // Keep requesting frames for blinking
            request_animation_frame();
        } else if self.was_focused || self.caret_visible {
            self.was_focused = false;
            self.caret_visible = false;
            self.mark_dirty(ChangeFlags::NEEDS_PAINT);
        }
    }

    fn layout(&mut self, constraints: Constraints) -> Size {
        let line_height = font::with_font(self.config.font, |font| font.line_height());
        let size = constraints.constrain(Size::new(
            self.bounds.width,
            self.bounds.height.max(line_height),
        ));

        let resized = size.width != self.bounds.width;
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        if resized {
            self.update_caret_position();
        }

        size
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let display = self.display_text();
        let x = self.bounds.x + self.offset;
        let y = self.bounds.y;

        ctx.draw_text(&display, x, y, self.hue, self.config.font, self.wrap_width());

        if self.is_editable && self.caret_visible {
            ctx.draw_text(
                &self.config.caret_glyph.to_string(),
                x + self.caret_position.x,
                y + self.caret_position.y,
                self.hue,
                self.config.font,
                None,
            );
        }
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        match event {
            Event::MouseDown { x, y, button } => {
                if !self.accepts_mouse_input() || *button != MouseButton::Left {
                    return EventResponse::Ignored;
                }
                if Rect::from_size(self.bounds.size()).contains(*x, *y) {
                    request_focus(self.widget_id);
                    self.on_mouse_click(*x, *y);
                    return EventResponse::Handled;
                }
            }
            Event::KeyDown { key, modifiers } => {
                if self.accepts_keyboard_input() && has_focus(self.widget_id) {
                    return self.handle_key(key, modifiers);
                }
            }
            Event::TextInput(c) => {
                if self.accepts_keyboard_input() && has_focus(self.widget_id) {
                    return self.on_text_input(*c);
                }
            }
            Event::FocusIn => {
                if self.accepts_keyboard_input() {
                    request_focus(self.widget_id);
                    return EventResponse::Handled;
                }
            }
            Event::FocusOut => {
                if has_focus(self.widget_id) {
                    release_focus(self.widget_id);
                }
                self.was_focused = false;
                self.caret_visible = false;
                self.mark_dirty(ChangeFlags::NEEDS_PAINT);
            }
            Event::MouseMove { .. } | Event::MouseUp { .. } => {}
        }

        EventResponse::Ignored
    }

    fn set_origin(&mut self, x: i32, y: i32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn id(&self) -> WidgetId {
        self.widget_id
    }

    fn accepts_keyboard_input(&self) -> bool {
        self.is_editable
    }

    fn accepts_mouse_input(&self) -> bool {
        self.is_editable
    }

    impl_dirty_flags!();
}

/// Create a text box
///
/// ```ignore
/// text_box("default value").size(200, 18).max_char_count(16)
/// ```
pub fn text_box(text: impl Into<String>) -> TextBox {
    TextBox::new(text)
}
