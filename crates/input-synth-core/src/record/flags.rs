//! Flag words carried by keyboard and mouse records.
//!
//! Both are thin `u32` newtypes over the Win32 `KEYEVENTF_*` / `MOUSEEVENTF_*`
//! bit values, so they can be placed directly into the wire structs.

use std::ops::{BitOr, BitOrAssign};

/// `dwFlags` of a keyboard record (`KEYEVENTF_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct KeyboardFlags(pub u32);

impl KeyboardFlags {
    /// The scan code is preceded by the 0xE0 prefix byte.
    pub const EXTENDED_KEY: Self = Self(0x0001);
    pub const KEY_UP: Self = Self(0x0002);
    /// `scan_code` holds a UTF-16 code unit and `virtual_key` must be 0.
    pub const UNICODE: Self = Self(0x0004);
    /// The receiver should use `scan_code` and ignore `virtual_key`.
    pub const SCAN_CODE: Self = Self(0x0008);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for KeyboardFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyboardFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// `dwFlags` of a mouse record (`MOUSEEVENTF_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct MouseFlags(pub u32);

impl MouseFlags {
    pub const MOVE: Self = Self(0x0001);
    pub const LEFT_DOWN: Self = Self(0x0002);
    pub const LEFT_UP: Self = Self(0x0004);
    pub const RIGHT_DOWN: Self = Self(0x0008);
    pub const RIGHT_UP: Self = Self(0x0010);
    pub const MIDDLE_DOWN: Self = Self(0x0020);
    pub const MIDDLE_UP: Self = Self(0x0040);
    /// X button press; `data` selects which X button.
    pub const X_DOWN: Self = Self(0x0080);
    pub const X_UP: Self = Self(0x0100);
    /// Vertical wheel; `data` is the signed distance.
    pub const WHEEL: Self = Self(0x0800);
    /// Horizontal wheel; `data` is the signed distance.
    pub const HWHEEL: Self = Self(0x1000);
    /// Absolute coordinates span the whole virtual desktop, not the primary display.
    pub const VIRTUAL_DESK: Self = Self(0x4000);
    /// `dx`/`dy` are absolute positions in 0..=65535 rather than pixel deltas.
    pub const ABSOLUTE: Self = Self(0x8000);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for MouseFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for MouseFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
