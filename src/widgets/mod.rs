pub mod edit_buffer;
pub mod text_box;
pub mod widget;

/// Macro to implement common dirty flag methods for simple controls.
macro_rules! impl_dirty_flags {
    () => {
        fn mark_dirty(&mut self, flags: crate::reactive::ChangeFlags) {
            self.dirty_flags |= flags;
        }
        fn needs_layout(&self) -> bool {
            self.dirty_flags
                .contains(crate::reactive::ChangeFlags::NEEDS_LAYOUT)
        }
        fn needs_paint(&self) -> bool {
            self.dirty_flags
                .contains(crate::reactive::ChangeFlags::NEEDS_PAINT)
        }
        fn clear_dirty(&mut self) {
            self.dirty_flags = crate::reactive::ChangeFlags::empty();
        }
    };
}
pub(crate) use impl_dirty_flags;

pub use edit_buffer::EditBuffer;
pub use text_box::{text_box, TextBox};
pub use widget::{Event, EventResponse, Key, Modifiers, MouseButton, Point, Rect, Widget};
