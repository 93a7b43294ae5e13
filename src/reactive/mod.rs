pub mod clipboard;
pub mod focus;
pub mod invalidation;

pub use clipboard::{
    clear_system_clipboard, clipboard_copy, clipboard_has_content, clipboard_paste,
    set_system_clipboard,
};
pub use focus::{clear_focus, focused_widget, has_focus, release_focus, request_focus};
pub use invalidation::{request_animation_frame, take_frame_request, ChangeFlags, WidgetId};

/// Reset all thread-local UI state.
///
/// Used when the client tears down its gumps (logout, reconnect).
pub fn reset_reactive() {
    clipboard::reset_clipboard();
    focus::clear_focus();
    invalidation::reset_invalidation();
}
