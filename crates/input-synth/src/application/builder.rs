//! InputBuilder: accumulates synthetic input records and submits them as one batch.
//!
//! Each builder method appends one or more wire records to an owned pending
//! batch and hands the builder back, so a script reads top to bottom:
//!
//! ```ignore
//! let mut input = InputBuilder::new(WindowsSink::new());
//! input
//!     .mouse_set(400, 300, true)?
//!     .mouse_click(MouseButton::Left)?
//!     .type_str("hello")
//!     .key_type(VirtualKey::Return);
//! input.submit()?;
//! ```
//!
//! Nothing reaches the OS until [`InputBuilder::submit`], which delivers the
//! whole batch in a single sink call.  On success the batch is cleared; on a
//! short count it is left exactly as it was so the caller can inspect it,
//! retry it, or [`clear`](InputBuilder::clear) it.

use input_synth_core::{
    button_to_flag, normalize, DisplayGeometry, InputRecord, InvalidButton, Key, KeyboardFlags,
    KeyboardPayload, MouseButton, MouseFlags, MousePayload, NormalizeError, ScreenSpace, XButton,
};
use thiserror::Error;
use tracing::{debug, warn};

use super::sink::InjectionSink;

/// One wheel notch, in the units `wheel_scroll` expects.
pub const WHEEL_DELTA: i32 = 120;

/// Error type for building and submitting input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The display geometry cannot support absolute coordinates.
    #[error("display configuration fault: {0}")]
    Configuration(#[from] NormalizeError),

    /// A discrete parameter was out of range.  Nothing was appended.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The sink accepted fewer records than were submitted.  The batch is
    /// still pending.
    #[error("injection failed: {accepted} of {expected} records accepted (os error {os_error})")]
    Injection {
        accepted: u32,
        expected: usize,
        os_error: u32,
    },

    /// An OS query or state change reported failure.
    #[error("{0} failed")]
    Query(&'static str),
}

impl From<InvalidButton> for InputError {
    fn from(err: InvalidButton) -> Self {
        InputError::InvalidArgument {
            name: "button",
            reason: err.to_string(),
        }
    }
}

/// Decoded key state word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    /// The key is currently held down.
    pub pressed: bool,
    /// The key's toggle (Caps Lock, Num Lock, …) is on.
    pub toggled: bool,
}

impl KeyState {
    fn from_raw(raw: i16) -> Self {
        Self {
            pressed: raw < 0,
            toggled: raw & 1 != 0,
        }
    }
}

/// Fluent accumulator of synthetic input records.
///
/// Not meant to be shared between threads; give each thread its own builder.
pub struct InputBuilder<S> {
    sink: S,
    pending: Vec<InputRecord>,
    screen_space: ScreenSpace,
}

impl<S: InjectionSink> InputBuilder<S> {
    /// Creates a builder whose absolute coordinates target the primary display.
    pub fn new(sink: S) -> Self {
        Self::with_screen_space(sink, ScreenSpace::Primary)
    }

    pub fn with_screen_space(sink: S, screen_space: ScreenSpace) -> Self {
        Self {
            sink,
            pending: Vec::new(),
            screen_space,
        }
    }

    pub fn screen_space(&self) -> ScreenSpace {
        self.screen_space
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Records queued for the next [`submit`](Self::submit), in injection order.
    pub fn pending(&self) -> &[InputRecord] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Discards every pending record.
    pub fn clear(&mut self) -> &mut Self {
        self.pending.clear();
        self
    }

    // ── Keyboard ──────────────────────────────────────────────────────────────

    pub fn key_down(&mut self, key: impl Into<Key>) -> &mut Self {
        self.push_key(key.into(), false)
    }

    pub fn key_up(&mut self, key: impl Into<Key>) -> &mut Self {
        self.push_key(key.into(), true)
    }

    /// Presses and releases `key`.
    pub fn key_type(&mut self, key: impl Into<Key>) -> &mut Self {
        let key = key.into();
        self.key_down(key).key_up(key)
    }

    /// Presses `keys` in order and releases them in reverse, e.g. Ctrl+Shift+Esc.
    pub fn key_chord<K: Into<Key> + Copy>(&mut self, keys: &[K]) -> &mut Self {
        for &key in keys {
            self.key_down(key);
        }
        for &key in keys.iter().rev() {
            self.key_up(key);
        }
        self
    }

    /// Presses a UTF-16 code unit without going through a physical key.
    pub fn char_down(&mut self, unit: u16) -> &mut Self {
        self.push_unicode(unit, false)
    }

    pub fn char_up(&mut self, unit: u16) -> &mut Self {
        self.push_unicode(unit, true)
    }

    /// Types `ch`: one down/up pair per UTF-16 code unit, so characters outside
    /// the Basic Multilingual Plane produce two pairs (high then low surrogate).
    pub fn type_char(&mut self, ch: char) -> &mut Self {
        let mut units = [0u16; 2];
        for &unit in ch.encode_utf16(&mut units).iter() {
            self.char_down(unit).char_up(unit);
        }
        self
    }

    /// Types every character of `text` in order.
    pub fn type_str(&mut self, text: &str) -> &mut Self {
        for ch in text.chars() {
            self.type_char(ch);
        }
        self
    }

    // ── Mouse ─────────────────────────────────────────────────────────────────

    /// Presses (`down = true`) or releases a main button.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidArgument`] for X buttons; use
    /// [`mouse_x_button`](Self::mouse_x_button) for those.
    pub fn mouse_button(
        &mut self,
        button: MouseButton,
        down: bool,
    ) -> Result<&mut Self, InputError> {
        let flags = button_to_flag(button, down)?;
        self.push_mouse(0, 0, 0, flags);
        Ok(self)
    }

    /// # Errors
    ///
    /// See [`mouse_button`](Self::mouse_button).
    pub fn mouse_click(&mut self, button: MouseButton) -> Result<&mut Self, InputError> {
        self.mouse_button(button, true)?.mouse_button(button, false)
    }

    /// Presses or releases side button `index` (1 or 2).
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidArgument`] if `index` is not 1 or 2.
    pub fn mouse_x_button(&mut self, index: u8, down: bool) -> Result<&mut Self, InputError> {
        let button = XButton::from_index(index).ok_or_else(|| InputError::InvalidArgument {
            name: "x_button",
            reason: format!("must be 1 or 2, got {index}"),
        })?;
        self.push_mouse(0, 0, button.data(), XButton::flag(down));
        Ok(self)
    }

    /// # Errors
    ///
    /// See [`mouse_x_button`](Self::mouse_x_button).
    pub fn mouse_x_click(&mut self, index: u8) -> Result<&mut Self, InputError> {
        self.mouse_x_button(index, true)?.mouse_x_button(index, false)
    }

    /// Moves the cursor by (`dx`, `dy`).
    ///
    /// With `normalized`, the pixel delta is scaled to absolute units against
    /// the primary display's extent before it is stored, whatever the screen
    /// space.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Configuration`] if `normalized` and the display
    /// is degenerate.
    pub fn mouse_move(
        &mut self,
        dx: i32,
        dy: i32,
        normalized: bool,
    ) -> Result<&mut Self, InputError> {
        let (dx, dy) = if normalized {
            self.to_absolute_units(dx, dy, false)?
        } else {
            (dx, dy)
        };
        self.push_mouse(dx, dy, 0, MouseFlags::MOVE);
        Ok(self)
    }

    /// Moves the cursor to the absolute position (`x`, `y`).
    ///
    /// With `normalized`, `x`/`y` are pixels and are scaled to absolute units;
    /// otherwise they must already be in 0..=65535.  In the virtual-desktop
    /// screen space the record is also flagged `VIRTUAL_DESK`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Configuration`] if `normalized` and the display
    /// is degenerate.
    pub fn mouse_set(&mut self, x: i32, y: i32, normalized: bool) -> Result<&mut Self, InputError> {
        let (x, y) = if normalized {
            self.to_absolute_units(x, y, true)?
        } else {
            (x, y)
        };
        let mut flags = MouseFlags::MOVE | MouseFlags::ABSOLUTE;
        if self.screen_space == ScreenSpace::VirtualDesktop {
            flags |= MouseFlags::VIRTUAL_DESK;
        }
        self.push_mouse(x, y, 0, flags);
        Ok(self)
    }

    /// Scrolls the wheel by `distance` (multiples of [`WHEEL_DELTA`] per notch;
    /// positive is away from the user / to the right).
    pub fn wheel_scroll(&mut self, distance: i32, vertical: bool) -> &mut Self {
        let flags = if vertical {
            MouseFlags::WHEEL
        } else {
            MouseFlags::HWHEEL
        };
        // The wire field is a DWORD; negative distances keep their two's-complement bits.
        self.push_mouse(0, 0, distance as u32, flags)
    }

    // ── Submission ────────────────────────────────────────────────────────────

    /// Delivers the pending batch to the sink in one call.
    ///
    /// An empty batch succeeds without touching the sink.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Injection`] if the sink accepted fewer records
    /// than were pending.  The batch is left untouched.
    pub fn submit(&mut self) -> Result<(), InputError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        debug!("submitting {} input records", self.pending.len());

        let accepted = self.sink.send_input(&self.pending);
        if accepted as usize != self.pending.len() {
            let os_error = self.sink.last_error_code();
            warn!(
                "input injection accepted {accepted} of {} records (os error {os_error})",
                self.pending.len()
            );
            return Err(InputError::Injection {
                accepted,
                expected: self.pending.len(),
                os_error,
            });
        }

        self.pending.clear();
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Current cursor position in screen pixels.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Query`] if the OS query fails.
    pub fn cursor_position(&self) -> Result<(i32, i32), InputError> {
        self.sink
            .cursor_position()
            .ok_or(InputError::Query("cursor position query"))
    }

    /// Warps the cursor immediately, bypassing the batch.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Query`] if the OS refuses.
    pub fn set_cursor_position(&self, x: i32, y: i32) -> Result<(), InputError> {
        if self.sink.set_cursor_position(x, y) {
            Ok(())
        } else {
            Err(InputError::Query("cursor warp"))
        }
    }

    pub fn key_state(&self, key: impl Into<Key>) -> KeyState {
        KeyState::from_raw(self.sink.key_state(key.into().virtual_key().code()))
    }

    /// Blocks or unblocks physical keyboard and mouse input.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Query`] if the OS refuses.
    pub fn block_input(&self, block: bool) -> Result<(), InputError> {
        if self.sink.block_input(block) {
            Ok(())
        } else {
            Err(InputError::Query("input blocking"))
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn to_absolute_units(
        &self,
        x: i32,
        y: i32,
        absolute: bool,
    ) -> Result<(i32, i32), NormalizeError> {
        let geometry = if absolute {
            self.sink.display_geometry(self.screen_space)
        } else {
            // Deltas scale against the primary display and carry no origin.
            let primary = self.sink.display_geometry(ScreenSpace::Primary);
            DisplayGeometry::sized(primary.width, primary.height)
        };
        normalize(x, y, &geometry)
    }

    fn push_key(&mut self, key: Key, up: bool) -> &mut Self {
        let virtual_key = key.virtual_key().code();
        let mut flags = KeyboardFlags::SCAN_CODE;
        if key.is_extended() {
            flags |= KeyboardFlags::EXTENDED_KEY;
        }
        if up {
            flags |= KeyboardFlags::KEY_UP;
        }
        let payload = KeyboardPayload {
            virtual_key,
            scan_code: self.sink.map_virtual_key_to_scan_code(virtual_key),
            flags,
            time: 0,
            extra_info: self.sink.message_extra_info(),
        };
        self.pending.push(InputRecord::keyboard(payload));
        self
    }

    fn push_unicode(&mut self, unit: u16, up: bool) -> &mut Self {
        let mut flags = KeyboardFlags::UNICODE;
        if up {
            flags |= KeyboardFlags::KEY_UP;
        }
        let payload = KeyboardPayload {
            virtual_key: 0,
            scan_code: unit,
            flags,
            time: 0,
            extra_info: self.sink.message_extra_info(),
        };
        self.pending.push(InputRecord::keyboard(payload));
        self
    }

    fn push_mouse(&mut self, dx: i32, dy: i32, data: u32, flags: MouseFlags) -> &mut Self {
        let payload = MousePayload {
            dx,
            dy,
            data,
            flags,
            time: 0,
            extra_info: self.sink.message_extra_info(),
        };
        self.pending.push(InputRecord::mouse(payload));
        self
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
