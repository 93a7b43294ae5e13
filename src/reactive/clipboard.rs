//! Clipboard support for the paste key.
//!
//! Keeps a thread-local buffer for copies made inside the client. The host
//! pushes the operating system clipboard in through `set_system_clipboard`.

use std::cell::RefCell;

thread_local! {
    /// Internal clipboard buffer
    static CLIPBOARD: RefCell<Option<String>> = const { RefCell::new(None) };

    /// System clipboard contents (fed by the host)
    static SYSTEM_CLIPBOARD: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Copy text to the internal clipboard
pub fn clipboard_copy(text: &str) {
    CLIPBOARD.with(|c| {
        *c.borrow_mut() = Some(text.to_string());
    });
}

/// Paste text from the clipboard.
/// System contents take precedence over the internal buffer.
pub fn clipboard_paste() -> Option<String> {
    SYSTEM_CLIPBOARD.with(|sc| {
        if let Some(text) = sc.borrow().as_ref() {
            return Some(text.clone());
        }
        CLIPBOARD.with(|c| c.borrow().clone())
    })
}

/// Check if clipboard has content
pub fn clipboard_has_content() -> bool {
    SYSTEM_CLIPBOARD.with(|sc| sc.borrow().is_some()) || CLIPBOARD.with(|c| c.borrow().is_some())
}

/// Set system clipboard contents (called by the host on clipboard updates)
pub fn set_system_clipboard(text: String) {
    SYSTEM_CLIPBOARD.with(|sc| {
        *sc.borrow_mut() = Some(text);
    });
}

/// Clear system clipboard (called when the host loses the selection)
pub fn clear_system_clipboard() {
    SYSTEM_CLIPBOARD.with(|sc| {
        *sc.borrow_mut() = None;
    });
}

/// Reset all clipboard state.
pub fn reset_clipboard() {
    CLIPBOARD.with(|c| *c.borrow_mut() = None);
    SYSTEM_CLIPBOARD.with(|c| *c.borrow_mut() = None);
}
