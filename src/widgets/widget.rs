use crate::layout::{Constraints, Size};
use crate::reactive::{ChangeFlags, WidgetId};
use crate::renderer::PaintContext;

/// Pixel position, relative to whatever the owner says it is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0,
            y: 0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keyboard modifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub logo: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        logo: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
        logo: false,
    };
}

/// Named keys delivered through key-down events.
///
/// Printable characters normally arrive as [`Event::TextInput`]; `Char` is
/// only used for shortcuts such as Ctrl+V.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    /// Enter/Return key
    Enter,
    Tab,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    /// Dedicated paste key (some keyboards, and the platform paste action)
    Paste,
    Char(char),
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Mouse moved, in control-local coordinates
    MouseMove { x: i32, y: i32 },
    /// Mouse button pressed, in control-local coordinates
    MouseDown { x: i32, y: i32, button: MouseButton },
    /// Mouse button released, in control-local coordinates
    MouseUp { x: i32, y: i32, button: MouseButton },
    /// Key pressed
    KeyDown {
        /// The key that was pressed
        key: Key,
        /// Current modifier state
        modifiers: Modifiers,
    },
    /// A character produced by the platform's text input
    TextInput(char),
    /// Control gained keyboard focus
    FocusIn,
    /// Control lost keyboard focus
    FocusOut,
}

impl Event {
    /// Get the coordinates from this event, if any
    pub fn coords(&self) -> Option<(i32, i32)> {
        match self {
            Event::MouseMove { x, y } => Some((*x, *y)),
            Event::MouseDown { x, y, .. } => Some((*x, *y)),
            Event::MouseUp { x, y, .. } => Some((*x, *y)),
            Event::KeyDown { .. } | Event::TextInput(_) | Event::FocusIn | Event::FocusOut => {
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

/// A control hosted by a gump.
///
/// The host drives every control once per frame: `update`, then `layout`
/// when dirty, then `paint`. Input is routed through `event` only when the
/// control accepts that kind of input.
pub trait Widget {
    /// Per-frame tick. `total_ms` is the client clock, `frame_ms` the time
    /// since the previous frame.
    fn update(&mut self, total_ms: f64, frame_ms: f64) {
        let _ = (total_ms, frame_ms);
    }

    fn layout(&mut self, constraints: Constraints) -> Size;
    fn paint(&self, ctx: &mut PaintContext);
    fn event(&mut self, event: &Event) -> EventResponse {
        let _ = event;
        EventResponse::Ignored
    }

    fn set_origin(&mut self, x: i32, y: i32);
    fn bounds(&self) -> Rect;
    fn id(&self) -> WidgetId;

    fn accepts_keyboard_input(&self) -> bool {
        false
    }

    fn accepts_mouse_input(&self) -> bool {
        false
    }

    fn mark_dirty(&mut self, flags: ChangeFlags);
    fn needs_layout(&self) -> bool;
    fn needs_paint(&self) -> bool;
    fn clear_dirty(&mut self);
}

impl Widget for Box<dyn Widget> {
    fn update(&mut self, total_ms: f64, frame_ms: f64) {
        (**self).update(total_ms, frame_ms)
    }
    fn layout(&mut self, constraints: Constraints) -> Size {
        (**self).layout(constraints)
    }
    fn paint(&self, ctx: &mut PaintContext) {
        (**self).paint(ctx)
    }
    fn event(&mut self, event: &Event) -> EventResponse {
        (**self).event(event)
    }
    fn set_origin(&mut self, x: i32, y: i32) {
        (**self).set_origin(x, y)
    }
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
    fn id(&self) -> WidgetId {
        (**self).id()
    }
    fn accepts_keyboard_input(&self) -> bool {
        (**self).accepts_keyboard_input()
    }
    fn accepts_mouse_input(&self) -> bool {
        (**self).accepts_mouse_input()
    }
    fn mark_dirty(&mut self, flags: ChangeFlags) {
        (**self).mark_dirty(flags)
    }
    fn needs_layout(&self) -> bool {
        (**self).needs_layout()
    }
    fn needs_paint(&self) -> bool {
        (**self).needs_paint()
    }
    fn clear_dirty(&mut self) {
        (**self).clear_dirty()
    }
}
