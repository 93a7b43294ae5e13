//! Keyboard focus tracking for gump controls.
//!
//! Only one control can hold keyboard focus at a time. The host's gump
//! manager decides who gets it; text boxes only ask for it when clicked and
//! poll it every frame.

use std::cell::RefCell;

use super::invalidation::{request_animation_frame, WidgetId};

thread_local! {
    /// The control that currently receives keyboard input, if any
    static FOCUSED_WIDGET: RefCell<Option<WidgetId>> = const { RefCell::new(None) };
}

/// Request keyboard focus for a control.
/// If another control has focus, it loses it.
pub fn request_focus(id: WidgetId) {
    FOCUSED_WIDGET.with(|cell| {
        let mut focused = cell.borrow_mut();
        if *focused != Some(id) {
            log::debug!("keyboard focus {:?} -> {:?}", *focused, id);
            *focused = Some(id);
            request_animation_frame();
        }
    });
}

/// Release keyboard focus from a control.
/// Only releases if the given control currently has focus.
pub fn release_focus(id: WidgetId) {
    FOCUSED_WIDGET.with(|cell| {
        let mut focused = cell.borrow_mut();
        if *focused == Some(id) {
            log::debug!("keyboard focus released by {:?}", id);
            *focused = None;
            request_animation_frame();
        }
    });
}

/// Check if a specific control has keyboard focus.
pub fn has_focus(id: WidgetId) -> bool {
    FOCUSED_WIDGET.with(|cell| *cell.borrow() == Some(id))
}

/// Get the ID of the currently focused control, if any.
pub fn focused_widget() -> Option<WidgetId> {
    FOCUSED_WIDGET.with(|cell| *cell.borrow())
}

/// Clear all focus (no control will have focus).
pub fn clear_focus() {
    FOCUSED_WIDGET.with(|cell| {
        if cell.borrow_mut().take().is_some() {
            request_animation_frame();
        }
    });
}
