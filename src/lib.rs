//! Text entry control for a game client's gump UI.
//!
//! The host client owns the frame loop, the sprite batch and the font
//! rasterizer. Each frame it calls [`Widget::update`], lays controls out when
//! they are dirty, routes input through [`Widget::event`], and paints into a
//! [`PaintContext`](renderer::PaintContext) whose draw commands it submits
//! itself.

pub mod config;
pub mod error;
pub mod font;
pub mod gump;
pub mod layout;
pub mod reactive;
pub mod renderer;
pub mod widgets;

pub use error::{GumpError, Result};

pub mod prelude {
    pub use crate::config::TextBoxConfig;
    pub use crate::error::GumpError;
    pub use crate::font::{register_font, BitmapFont, CosmicFont, FontKey, FontMetrics};
    pub use crate::gump::{Graphic, Hue, TextEntryDef, TextEntryKind};
    pub use crate::layout::{Constraints, Size};
    pub use crate::reactive::{
        clear_focus, has_focus, request_focus, set_system_clipboard, take_frame_request,
    };
    pub use crate::renderer::{DrawCommand, PaintContext};
    pub use crate::widgets::{
        text_box, Event, EventResponse, Key, Modifiers, MouseButton, Point, Rect, TextBox, Widget,
    };
}
