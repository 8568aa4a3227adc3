//! Win32 virtual-key codes as a closed enum.
//!
//! Values are the `VK_*` constants from `winuser.h`.  A virtual key names a
//! *logical* key; the physical scan code that goes with it depends on the
//! active keyboard layout and is looked up by the injection sink at record
//! construction time, never here.
//!
//! Codes that `winuser.h` reserves or leaves unassigned have no variant, so
//! [`VirtualKey::try_from`] rejects them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a raw code has no [`VirtualKey`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("0x{0:04X} is not an assigned virtual-key code")]
pub struct UnknownVirtualKey(pub u16);

/// Win32 virtual-key code.
///
/// Reference: https://learn.microsoft.com/windows/win32/inputdev/virtual-key-codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum VirtualKey {
    // Mouse buttons
    LButton = 0x01, // VK_LBUTTON
    RButton = 0x02, // VK_RBUTTON
    Cancel = 0x03, // VK_CANCEL
    MButton = 0x04, // VK_MBUTTON
    XButton1 = 0x05, // VK_XBUTTON1
    XButton2 = 0x06, // VK_XBUTTON2

    // Editing and control
    Back = 0x08, // VK_BACK
    Tab = 0x09, // VK_TAB
    Clear = 0x0C, // VK_CLEAR
    Return = 0x0D, // VK_RETURN
    Shift = 0x10, // VK_SHIFT
    Control = 0x11, // VK_CONTROL
    Menu = 0x12, // VK_MENU
    Pause = 0x13, // VK_PAUSE
    Capital = 0x14, // VK_CAPITAL

    // IME
    Kana = 0x15, // VK_KANA / VK_HANGUL
    ImeOn = 0x16, // VK_IME_ON
    Junja = 0x17, // VK_JUNJA
    Final = 0x18, // VK_FINAL
    Hanja = 0x19, // VK_HANJA / VK_KANJI
    ImeOff = 0x1A, // VK_IME_OFF
    Escape = 0x1B, // VK_ESCAPE
    Convert = 0x1C, // VK_CONVERT
    NonConvert = 0x1D, // VK_NONCONVERT
    Accept = 0x1E, // VK_ACCEPT
    ModeChange = 0x1F, // VK_MODECHANGE

    // Navigation cluster
    Space = 0x20, // VK_SPACE
    Prior = 0x21, // VK_PRIOR (Page Up)
    Next = 0x22, // VK_NEXT (Page Down)
    End = 0x23, // VK_END
    Home = 0x24, // VK_HOME
    Left = 0x25, // VK_LEFT
    Up = 0x26, // VK_UP
    Right = 0x27, // VK_RIGHT
    Down = 0x28, // VK_DOWN
    Select = 0x29, // VK_SELECT
    Print = 0x2A, // VK_PRINT
    Execute = 0x2B, // VK_EXECUTE
    Snapshot = 0x2C, // VK_SNAPSHOT (Print Screen)
    Insert = 0x2D, // VK_INSERT
    Delete = 0x2E, // VK_DELETE
    Help = 0x2F, // VK_HELP

    // Digit row
    Key0 = 0x30,
    Key1 = 0x31,
    Key2 = 0x32,
    Key3 = 0x33,
    Key4 = 0x34,
    Key5 = 0x35,
    Key6 = 0x36,
    Key7 = 0x37,
    Key8 = 0x38,
    Key9 = 0x39,

    // Letters
    A = 0x41,
    B = 0x42,
    C = 0x43,
    D = 0x44,
    E = 0x45,
    F = 0x46,
    G = 0x47,
    H = 0x48,
    I = 0x49,
    J = 0x4A,
    K = 0x4B,
    L = 0x4C,
    M = 0x4D,
    N = 0x4E,
    O = 0x4F,
    P = 0x50,
    Q = 0x51,
    R = 0x52,
    S = 0x53,
    T = 0x54,
    U = 0x55,
    V = 0x56,
    W = 0x57,
    X = 0x58,
    Y = 0x59,
    Z = 0x5A,

    // System keys
    LWin = 0x5B, // VK_LWIN
    RWin = 0x5C, // VK_RWIN
    Apps = 0x5D, // VK_APPS (context menu)
    Sleep = 0x5F, // VK_SLEEP

    // Numeric keypad
    Numpad0 = 0x60,
    Numpad1 = 0x61,
    Numpad2 = 0x62,
    Numpad3 = 0x63,
    Numpad4 = 0x64,
    Numpad5 = 0x65,
    Numpad6 = 0x66,
    Numpad7 = 0x67,
    Numpad8 = 0x68,
    Numpad9 = 0x69,
    Multiply = 0x6A, // VK_MULTIPLY
    Add = 0x6B, // VK_ADD
    Separator = 0x6C, // VK_SEPARATOR
    Subtract = 0x6D, // VK_SUBTRACT
    Decimal = 0x6E, // VK_DECIMAL
    Divide = 0x6F, // VK_DIVIDE

    // Function keys
    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F4 = 0x73,
    F5 = 0x74,
    F6 = 0x75,
    F7 = 0x76,
    F8 = 0x77,
    F9 = 0x78,
    F10 = 0x79,
    F11 = 0x7A,
    F12 = 0x7B,
    F13 = 0x7C,
    F14 = 0x7D,
    F15 = 0x7E,
    F16 = 0x7F,
    F17 = 0x80,
    F18 = 0x81,
    F19 = 0x82,
    F20 = 0x83,
    F21 = 0x84,
    F22 = 0x85,
    F23 = 0x86,
    F24 = 0x87,

    // Locks
    NumLock = 0x90, // VK_NUMLOCK
    Scroll = 0x91, // VK_SCROLL

    // Left/right modifiers
    LShift = 0xA0, // VK_LSHIFT
    RShift = 0xA1, // VK_RSHIFT
    LControl = 0xA2, // VK_LCONTROL
    RControl = 0xA3, // VK_RCONTROL
    LMenu = 0xA4, // VK_LMENU (left Alt)
    RMenu = 0xA5, // VK_RMENU (right Alt)

    // Browser and media
    BrowserBack = 0xA6,
    BrowserForward = 0xA7,
    BrowserRefresh = 0xA8,
    BrowserStop = 0xA9,
    BrowserSearch = 0xAA,
    BrowserFavorites = 0xAB,
    BrowserHome = 0xAC,
    VolumeMute = 0xAD,
    VolumeDown = 0xAE,
    VolumeUp = 0xAF,
    MediaNextTrack = 0xB0,
    MediaPrevTrack = 0xB1,
    MediaStop = 0xB2,
    MediaPlayPause = 0xB3,
    LaunchMail = 0xB4,
    LaunchMediaSelect = 0xB5,
    LaunchApp1 = 0xB6,
    LaunchApp2 = 0xB7,

    // OEM keys (US layout legends)
    Oem1 = 0xBA, // ; :
    OemPlus = 0xBB, // = +
    OemComma = 0xBC, // , <
    OemMinus = 0xBD, // - _
    OemPeriod = 0xBE, // . >
    Oem2 = 0xBF, // / ?
    Oem3 = 0xC0, // ` ~
    Oem4 = 0xDB, // [ {
    Oem5 = 0xDC, // \ |
    Oem6 = 0xDD, // ] }
    Oem7 = 0xDE, // ' "
    Oem8 = 0xDF,
    Oem102 = 0xE2, // < > on 102-key boards
    ProcessKey = 0xE5, // VK_PROCESSKEY
    Packet = 0xE7, // VK_PACKET

    // Legacy terminal keys
    Attn = 0xF6,
    CrSel = 0xF7,
    ExSel = 0xF8,
    ErEof = 0xF9,
    Play = 0xFA,
    Zoom = 0xFB,
    NoName = 0xFC,
    Pa1 = 0xFD,
    OemClear = 0xFE,
}

impl VirtualKey {
    /// Every variant, in ascending code order.
    pub const ALL: &'static [VirtualKey] = &[
        VirtualKey::LButton, VirtualKey::RButton, VirtualKey::Cancel, VirtualKey::MButton,
        VirtualKey::XButton1, VirtualKey::XButton2, VirtualKey::Back, VirtualKey::Tab,
        VirtualKey::Clear, VirtualKey::Return, VirtualKey::Shift, VirtualKey::Control,
        VirtualKey::Menu, VirtualKey::Pause, VirtualKey::Capital, VirtualKey::Kana,
        VirtualKey::ImeOn, VirtualKey::Junja, VirtualKey::Final, VirtualKey::Hanja,
        VirtualKey::ImeOff, VirtualKey::Escape, VirtualKey::Convert, VirtualKey::NonConvert,
        VirtualKey::Accept, VirtualKey::ModeChange, VirtualKey::Space, VirtualKey::Prior,
        VirtualKey::Next, VirtualKey::End, VirtualKey::Home, VirtualKey::Left, VirtualKey::Up,
        VirtualKey::Right, VirtualKey::Down, VirtualKey::Select, VirtualKey::Print,
        VirtualKey::Execute, VirtualKey::Snapshot, VirtualKey::Insert, VirtualKey::Delete,
        VirtualKey::Help, VirtualKey::Key0, VirtualKey::Key1, VirtualKey::Key2,
        VirtualKey::Key3, VirtualKey::Key4, VirtualKey::Key5, VirtualKey::Key6,
        VirtualKey::Key7, VirtualKey::Key8, VirtualKey::Key9, VirtualKey::A, VirtualKey::B,
        VirtualKey::C, VirtualKey::D, VirtualKey::E, VirtualKey::F, VirtualKey::G,
        VirtualKey::H, VirtualKey::I, VirtualKey::J, VirtualKey::K, VirtualKey::L,
        VirtualKey::M, VirtualKey::N, VirtualKey::O, VirtualKey::P, VirtualKey::Q,
        VirtualKey::R, VirtualKey::S, VirtualKey::T, VirtualKey::U, VirtualKey::V,
        VirtualKey::W, VirtualKey::X, VirtualKey::Y, VirtualKey::Z, VirtualKey::LWin,
        VirtualKey::RWin, VirtualKey::Apps, VirtualKey::Sleep, VirtualKey::Numpad0,
        VirtualKey::Numpad1, VirtualKey::Numpad2, VirtualKey::Numpad3, VirtualKey::Numpad4,
        VirtualKey::Numpad5, VirtualKey::Numpad6, VirtualKey::Numpad7, VirtualKey::Numpad8,
        VirtualKey::Numpad9, VirtualKey::Multiply, VirtualKey::Add, VirtualKey::Separator,
        VirtualKey::Subtract, VirtualKey::Decimal, VirtualKey::Divide, VirtualKey::F1,
        VirtualKey::F2, VirtualKey::F3, VirtualKey::F4, VirtualKey::F5, VirtualKey::F6,
        VirtualKey::F7, VirtualKey::F8, VirtualKey::F9, VirtualKey::F10, VirtualKey::F11,
        VirtualKey::F12, VirtualKey::F13, VirtualKey::F14, VirtualKey::F15, VirtualKey::F16,
        VirtualKey::F17, VirtualKey::F18, VirtualKey::F19, VirtualKey::F20, VirtualKey::F21,
        VirtualKey::F22, VirtualKey::F23, VirtualKey::F24, VirtualKey::NumLock,
        VirtualKey::Scroll, VirtualKey::LShift, VirtualKey::RShift, VirtualKey::LControl,
        VirtualKey::RControl, VirtualKey::LMenu, VirtualKey::RMenu, VirtualKey::BrowserBack,
        VirtualKey::BrowserForward, VirtualKey::BrowserRefresh, VirtualKey::BrowserStop,
        VirtualKey::BrowserSearch, VirtualKey::BrowserFavorites, VirtualKey::BrowserHome,
        VirtualKey::VolumeMute, VirtualKey::VolumeDown, VirtualKey::VolumeUp,
        VirtualKey::MediaNextTrack, VirtualKey::MediaPrevTrack, VirtualKey::MediaStop,
        VirtualKey::MediaPlayPause, VirtualKey::LaunchMail, VirtualKey::LaunchMediaSelect,
        VirtualKey::LaunchApp1, VirtualKey::LaunchApp2, VirtualKey::Oem1, VirtualKey::OemPlus,
        VirtualKey::OemComma, VirtualKey::OemMinus, VirtualKey::OemPeriod, VirtualKey::Oem2,
        VirtualKey::Oem3, VirtualKey::Oem4, VirtualKey::Oem5, VirtualKey::Oem6,
        VirtualKey::Oem7, VirtualKey::Oem8, VirtualKey::Oem102, VirtualKey::ProcessKey,
        VirtualKey::Packet, VirtualKey::Attn, VirtualKey::CrSel, VirtualKey::ExSel,
        VirtualKey::ErEof, VirtualKey::Play, VirtualKey::Zoom, VirtualKey::NoName,
        VirtualKey::Pa1, VirtualKey::OemClear,
    ];

    /// Returns the raw `VK_*` value.
    pub const fn code(self) -> u16 {
        self as u16
    }
}

impl From<VirtualKey> for u16 {
    fn from(key: VirtualKey) -> Self {
        key.code()
    }
}

impl TryFrom<u16> for VirtualKey {
    type Error = UnknownVirtualKey;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        CODE_TO_KEY
            .get(code as usize)
            .copied()
            .flatten()
            .ok_or(UnknownVirtualKey(code))
    }
}

/// Reverse lookup indexed by VK code; `None` marks reserved/unassigned codes.
const CODE_TO_KEY: [Option<VirtualKey>; 256] = {
    let mut t = [None; 256];
    let mut i = 0;
    while i < VirtualKey::ALL.len() {
        let key = VirtualKey::ALL[i];
        t[key.code() as usize] = Some(key);
        i += 1;
    }
    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits_use_ascii_codes() {
        assert_eq!(VirtualKey::A.code(), u16::from(b'A'));
        assert_eq!(VirtualKey::Z.code(), u16::from(b'Z'));
        assert_eq!(VirtualKey::Key0.code(), u16::from(b'0'));
        assert_eq!(VirtualKey::Key9.code(), u16::from(b'9'));
    }

    #[test]
    fn test_try_from_round_trips_every_variant() {
        for &key in VirtualKey::ALL {
            assert_eq!(VirtualKey::try_from(key.code()), Ok(key));
        }
    }

    #[test]
    fn test_all_is_sorted_and_unique() {
        for pair in VirtualKey::ALL.windows(2) {
            assert!(pair[0].code() < pair[1].code(), "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_try_from_rejects_unassigned_codes() {
        for code in [0x00u16, 0x07, 0x0A, 0x3A, 0x40, 0x5E, 0x88, 0xFF, 0x100, 0xFFFF] {
            assert_eq!(VirtualKey::try_from(code), Err(UnknownVirtualKey(code)));
        }
    }

    #[test]
    fn test_well_known_codes() {
        assert_eq!(VirtualKey::Return.code(), 0x0D);
        assert_eq!(VirtualKey::Snapshot.code(), 0x2C);
        assert_eq!(VirtualKey::RMenu.code(), 0xA5);
        assert_eq!(VirtualKey::F24.code(), 0x87);
    }
}
