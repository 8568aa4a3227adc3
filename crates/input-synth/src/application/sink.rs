//! The injection sink: the OS primitives the builder consumes.
//!
//! Every method is a thin wrapper over one OS call and reports the raw
//! result; interpreting failures is the builder's job.  Implementations live
//! in `infrastructure::sink`.

use input_synth_core::{DisplayGeometry, InputRecord, ScreenSpace};

/// OS input-injection primitives.
#[cfg_attr(test, mockall::automock)]
pub trait InjectionSink: Send + Sync {
    /// Queues `records` into the OS input stream as one uninterrupted unit.
    ///
    /// Returns how many records were accepted.  Anything short of
    /// `records.len()` is a failure and [`last_error_code`](Self::last_error_code)
    /// explains why.
    fn send_input(&self, records: &[InputRecord]) -> u32;

    /// Translates a virtual-key code to a scan code using the active keyboard
    /// layout.  Returns 0 when the layout has no translation.
    fn map_virtual_key_to_scan_code(&self, virtual_key: u16) -> u16;

    /// The marker the OS uses to tag input from the current source.
    fn message_extra_info(&self) -> usize;

    /// Pixel rectangle of `space`.
    fn display_geometry(&self, space: ScreenSpace) -> DisplayGeometry;

    /// Cursor position in screen pixels, or `None` if the query failed.
    fn cursor_position(&self) -> Option<(i32, i32)>;

    /// Warps the cursor; returns `false` if the OS refused.
    fn set_cursor_position(&self, x: i32, y: i32) -> bool;

    /// The calling thread's last OS error code.
    fn last_error_code(&self) -> u32;

    /// Raw key state word: high bit set while held, low bit set while toggled on.
    fn key_state(&self, virtual_key: u16) -> i16;

    /// Blocks or unblocks physical keyboard and mouse input; returns `false`
    /// if the OS refused (typically for lack of privileges).
    fn block_input(&self, block: bool) -> bool;
}
