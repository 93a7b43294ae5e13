use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;

bitflags! {
    /// Flags indicating what aspects of a control need to be refreshed
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Control needs layout recalculation (size/position may change)
        const NEEDS_LAYOUT = 0b01;
        /// Control needs redrawing (text, caret or scroll changed)
        const NEEDS_PAINT  = 0b10;
    }
}

/// Unique identifier for a gump control
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

impl WidgetId {
    /// Generate a new unique control ID
    pub fn next() -> Self {
        WidgetId(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

thread_local! {
    static FRAME_REQUESTED: Cell<bool> = const { Cell::new(false) };
}

/// Ask the host loop to draw another frame (caret blink, edits).
pub fn request_animation_frame() {
    FRAME_REQUESTED.with(|f| f.set(true));
}

/// Check if a frame has been requested and clear the flag.
pub fn take_frame_request() -> bool {
    FRAME_REQUESTED.with(|f| f.replace(false))
}

pub(crate) fn reset_invalidation() {
    FRAME_REQUESTED.with(|f| f.set(false));
}
