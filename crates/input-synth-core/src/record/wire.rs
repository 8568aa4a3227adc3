//! The injection record: a `#[repr(C)]` tagged union laid out exactly like
//! the Win32 `INPUT` structure.
//!
//! ```text
//! 64-bit                               32-bit
//! offset  field                        offset  field
//! 0       kind       u32               0       kind       u32
//! 4       (padding)                    4       payload    24 bytes
//! 8       payload    32 bytes
//! total   40                           total   28
//! ```
//!
//! The payload union is as large as its biggest member, [`MousePayload`].
//! Field order and widths inside each payload are part of the binary contract
//! with the OS; do not reorder them.
//!
//! # Invariant
//!
//! Exactly one payload variant is initialised and `kind` names it.  The fields
//! are private and the only way to build a record is through
//! [`InputRecord::keyboard`], [`InputRecord::mouse`] or
//! [`InputRecord::hardware`], so every read through the safe accessors is
//! a read of the initialised variant.

use std::fmt;
use std::mem::{offset_of, size_of};

use super::flags::{KeyboardFlags, MouseFlags};

/// Discriminant of an [`InputRecord`] (`INPUT_MOUSE`, `INPUT_KEYBOARD`, `INPUT_HARDWARE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum InputKind {
    Mouse = 0,
    Keyboard = 1,
    Hardware = 2,
}

/// Keyboard event payload (`KEYBDINPUT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct KeyboardPayload {
    /// Virtual-key code; 0 for Unicode records.
    pub virtual_key: u16,
    /// Hardware scan code, or the UTF-16 code unit when [`KeyboardFlags::UNICODE`] is set.
    pub scan_code: u16,
    pub flags: KeyboardFlags,
    /// Event timestamp in milliseconds; 0 lets the OS stamp it.
    pub time: u32,
    /// Synthetic-input marker reported by the sink.
    pub extra_info: usize,
}

/// Mouse event payload (`MOUSEINPUT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct MousePayload {
    pub dx: i32,
    pub dy: i32,
    /// Wheel distance or X-button selector, depending on `flags`.
    pub data: u32,
    pub flags: MouseFlags,
    pub time: u32,
    pub extra_info: usize,
}

/// Raw hardware message payload (`HARDWAREINPUT`).
///
/// Present so the union has the platform's shape; the builder never emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct HardwarePayload {
    pub msg: u32,
    pub param_low: u16,
    pub param_high: u16,
}

#[derive(Clone, Copy)]
#[repr(C)]
union InputPayload {
    mouse: MousePayload,
    keyboard: KeyboardPayload,
    hardware: HardwarePayload,
}

/// One synthetic hardware event, binary-compatible with Win32 `INPUT`.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct InputRecord {
    kind: InputKind,
    payload: InputPayload,
}

/// Borrowed, checked view of the populated payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRecordView<'a> {
    Keyboard(&'a KeyboardPayload),
    Mouse(&'a MousePayload),
    Hardware(&'a HardwarePayload),
}

impl InputRecord {
    pub const fn keyboard(payload: KeyboardPayload) -> Self {
        Self {
            kind: InputKind::Keyboard,
            payload: InputPayload { keyboard: payload },
        }
    }

    pub const fn mouse(payload: MousePayload) -> Self {
        Self {
            kind: InputKind::Mouse,
            payload: InputPayload { mouse: payload },
        }
    }

    pub const fn hardware(payload: HardwarePayload) -> Self {
        Self {
            kind: InputKind::Hardware,
            payload: InputPayload { hardware: payload },
        }
    }

    pub const fn kind(&self) -> InputKind {
        self.kind
    }

    /// Returns the keyboard payload, or `None` if this is not a keyboard record.
    pub fn as_keyboard(&self) -> Option<&KeyboardPayload> {
        match self.kind {
            // SAFETY: constructors initialise `keyboard` whenever kind is Keyboard.
            InputKind::Keyboard => Some(unsafe { &self.payload.keyboard }),
            _ => None,
        }
    }

    /// Returns the mouse payload, or `None` if this is not a mouse record.
    pub fn as_mouse(&self) -> Option<&MousePayload> {
        match self.kind {
            // SAFETY: constructors initialise `mouse` whenever kind is Mouse.
            InputKind::Mouse => Some(unsafe { &self.payload.mouse }),
            _ => None,
        }
    }

    /// Returns the hardware payload, or `None` if this is not a hardware record.
    pub fn as_hardware(&self) -> Option<&HardwarePayload> {
        match self.kind {
            // SAFETY: constructors initialise `hardware` whenever kind is Hardware.
            InputKind::Hardware => Some(unsafe { &self.payload.hardware }),
            _ => None,
        }
    }

    pub fn view(&self) -> InputRecordView<'_> {
        // SAFETY: each arm reads the variant its kind guarantees is initialised.
        unsafe {
            match self.kind {
                InputKind::Keyboard => InputRecordView::Keyboard(&self.payload.keyboard),
                InputKind::Mouse => InputRecordView::Mouse(&self.payload.mouse),
                InputKind::Hardware => InputRecordView::Hardware(&self.payload.hardware),
            }
        }
    }

    /// The synthetic-input marker stamped on this record (0 for hardware records).
    pub fn extra_info(&self) -> usize {
        match self.view() {
            InputRecordView::Keyboard(k) => k.extra_info,
            InputRecordView::Mouse(m) => m.extra_info,
            InputRecordView::Hardware(_) => 0,
        }
    }
}

impl fmt::Debug for InputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputRecord")
            .field("kind", &self.kind)
            .field("payload", &self.view())
            .finish()
    }
}

impl PartialEq for InputRecord {
    fn eq(&self, other: &Self) -> bool {
        self.view() == other.view()
    }
}

impl Eq for InputRecord {}

/// Size in bytes of one record, the `cbSize` argument of `SendInput`.
pub const INPUT_RECORD_SIZE: usize = size_of::<InputRecord>();

#[cfg(target_pointer_width = "64")]
const _: () = {
    assert!(size_of::<KeyboardPayload>() == 24);
    assert!(size_of::<MousePayload>() == 32);
    assert!(size_of::<InputRecord>() == 40);
    assert!(offset_of!(InputRecord, payload) == 8);
};

#[cfg(target_pointer_width = "32")]
const _: () = {
    assert!(size_of::<KeyboardPayload>() == 16);
    assert!(size_of::<MousePayload>() == 24);
    assert!(size_of::<InputRecord>() == 28);
    assert!(offset_of!(InputRecord, payload) == 4);
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key() -> KeyboardPayload {
        KeyboardPayload {
            virtual_key: 0x41,
            scan_code: 0x1E,
            flags: KeyboardFlags::SCAN_CODE,
            time: 0,
            extra_info: 0xFEED,
        }
    }

    fn sample_mouse() -> MousePayload {
        MousePayload {
            dx: 10,
            dy: -4,
            data: 0,
            flags: MouseFlags::MOVE,
            time: 0,
            extra_info: 0xBEEF,
        }
    }

    #[test]
    fn test_keyboard_record_exposes_only_keyboard_payload() {
        // Arrange
        let record = InputRecord::keyboard(sample_key());

        // Assert
        assert_eq!(record.kind(), InputKind::Keyboard);
        assert_eq!(record.as_keyboard(), Some(&sample_key()));
        assert!(record.as_mouse().is_none());
        assert!(record.as_hardware().is_none());
        assert_eq!(record.extra_info(), 0xFEED);
    }

    #[test]
    fn test_mouse_record_exposes_only_mouse_payload() {
        let record = InputRecord::mouse(sample_mouse());

        assert_eq!(record.kind(), InputKind::Mouse);
        assert_eq!(record.view(), InputRecordView::Mouse(&sample_mouse()));
        assert!(record.as_keyboard().is_none());
        assert_eq!(record.extra_info(), 0xBEEF);
    }

    #[test]
    fn test_hardware_record_has_no_marker() {
        let record = InputRecord::hardware(HardwarePayload {
            msg: 0x0100,
            param_low: 1,
            param_high: 2,
        });

        assert_eq!(record.kind(), InputKind::Hardware);
        assert_eq!(record.extra_info(), 0);
    }

    #[test]
    fn test_records_of_different_kinds_are_not_equal() {
        assert_ne!(
            InputRecord::keyboard(sample_key()),
            InputRecord::mouse(sample_mouse())
        );
        assert_eq!(
            InputRecord::keyboard(sample_key()),
            InputRecord::keyboard(sample_key())
        );
    }

    #[test]
    fn test_discriminant_values_match_platform_constants() {
        assert_eq!(InputKind::Mouse as u32, 0);
        assert_eq!(InputKind::Keyboard as u32, 1);
        assert_eq!(InputKind::Hardware as u32, 2);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_payload_field_offsets_match_win32_layout() {
        assert_eq!(offset_of!(KeyboardPayload, flags), 4);
        assert_eq!(offset_of!(KeyboardPayload, extra_info), 16);
        assert_eq!(offset_of!(MousePayload, data), 8);
        assert_eq!(offset_of!(MousePayload, flags), 12);
        assert_eq!(offset_of!(MousePayload, extra_info), 24);
        assert_eq!(INPUT_RECORD_SIZE, 40);
    }
}
