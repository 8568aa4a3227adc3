//! Key and button semantics: which keys are "extended", and which flag a
//! mouse button press or release maps to.
//!
//! # What is an extended key?
//!
//! The original PC/AT keyboard had no separate arrow or navigation cluster;
//! those keys shared scan codes with the numeric keypad.  When the enhanced
//! keyboard added dedicated keys, it sent them with an `0xE0` prefix byte to
//! keep them apart.  A synthesised event has to reproduce that prefix by
//! setting [`KeyboardFlags::EXTENDED_KEY`](crate::record::KeyboardFlags::EXTENDED_KEY),
//! otherwise a receiving application sees, say, keypad 8 instead of Up.

pub mod mouse;
pub mod virtual_key;

pub use mouse::{button_to_flag, InvalidButton, MouseButton, XButton};
pub use virtual_key::{UnknownVirtualKey, VirtualKey};

/// Returns `true` for keys that must be sent with the extended-key flag.
///
/// The set is: right Ctrl and right Alt, keypad Divide, the six-key
/// navigation cluster, the four arrows, both Windows keys and the
/// context-menu key, Print Screen, Num Lock and Sleep.  Keypad Enter is also
/// extended but has no virtual key of its own; see [`Key::NumpadEnter`].
pub fn is_extended_key(key: VirtualKey) -> bool {
    use VirtualKey::*;
    matches!(
        key,
        RControl
            | RMenu
            | Divide
            | Insert
            | Delete
            | Home
            | End
            | Prior
            | Next
            | Up
            | Down
            | Left
            | Right
            | LWin
            | RWin
            | Apps
            | Snapshot
            | NumLock
            | Sleep
    )
}

/// A key as the builder accepts it.
///
/// Almost every key is a plain [`VirtualKey`].  Keypad Enter is the
/// exception: it reports `VK_RETURN` like the main Enter key and differs only
/// in the extended flag, so it needs its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Vk(VirtualKey),
    NumpadEnter,
}

impl Key {
    /// The virtual-key code written into the record.
    pub fn virtual_key(self) -> VirtualKey {
        match self {
            Key::Vk(vk) => vk,
            Key::NumpadEnter => VirtualKey::Return,
        }
    }

    pub fn is_extended(self) -> bool {
        match self {
            Key::Vk(vk) => is_extended_key(vk),
            Key::NumpadEnter => true,
        }
    }
}

impl From<VirtualKey> for Key {
    fn from(vk: VirtualKey) -> Self {
        Key::Vk(vk)
    }
}
