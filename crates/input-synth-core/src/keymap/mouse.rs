//! Mouse buttons and their record flags.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::MouseFlags;

/// Physical mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// First side button ("back").
    X1,
    /// Second side button ("forward").
    X2,
}

/// A button that has no dedicated press/release flag pair.
///
/// X buttons share `X_DOWN`/`X_UP` and are told apart by the record's `data`
/// field, so they go through the X-button path instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("mouse button {0:?} has no dedicated flag; use the X-button path")]
pub struct InvalidButton(pub MouseButton);

/// Maps a main button and direction to its flag.
///
/// # Errors
///
/// Returns [`InvalidButton`] for [`MouseButton::X1`] and [`MouseButton::X2`].
pub fn button_to_flag(button: MouseButton, down: bool) -> Result<MouseFlags, InvalidButton> {
    match (button, down) {
        (MouseButton::Left, true) => Ok(MouseFlags::LEFT_DOWN),
        (MouseButton::Left, false) => Ok(MouseFlags::LEFT_UP),
        (MouseButton::Right, true) => Ok(MouseFlags::RIGHT_DOWN),
        (MouseButton::Right, false) => Ok(MouseFlags::RIGHT_UP),
        (MouseButton::Middle, true) => Ok(MouseFlags::MIDDLE_DOWN),
        (MouseButton::Middle, false) => Ok(MouseFlags::MIDDLE_UP),
        (other, _) => Err(InvalidButton(other)),
    }
}

/// Side button selector stored in a mouse record's `data` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum XButton {
    X1 = 0x0001,
    X2 = 0x0002,
}

impl XButton {
    /// Resolves the 1-based side-button index used by callers.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(XButton::X1),
            2 => Some(XButton::X2),
            _ => None,
        }
    }

    pub const fn data(self) -> u32 {
        self as u32
    }

    pub const fn flag(down: bool) -> MouseFlags {
        if down {
            MouseFlags::X_DOWN
        } else {
            MouseFlags::X_UP
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_buttons_map_to_six_distinct_flags() {
        // Arrange
        let mut flags = Vec::new();
        for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
            for down in [true, false] {
                flags.push(button_to_flag(button, down).expect("main button"));
            }
        }

        // Assert – pairwise distinct
        for (i, a) in flags.iter().enumerate() {
            for b in &flags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_left_button_flags() {
        assert_eq!(button_to_flag(MouseButton::Left, true), Ok(MouseFlags::LEFT_DOWN));
        assert_eq!(button_to_flag(MouseButton::Left, false), Ok(MouseFlags::LEFT_UP));
    }

    #[test]
    fn test_x_buttons_are_rejected() {
        assert_eq!(
            button_to_flag(MouseButton::X1, true),
            Err(InvalidButton(MouseButton::X1))
        );
        assert_eq!(
            button_to_flag(MouseButton::X2, false),
            Err(InvalidButton(MouseButton::X2))
        );
    }

    #[test]
    fn test_x_button_index_resolution() {
        assert_eq!(XButton::from_index(1).map(XButton::data), Some(0x0001));
        assert_eq!(XButton::from_index(2).map(XButton::data), Some(0x0002));
        assert_eq!(XButton::from_index(0), None);
        assert_eq!(XButton::from_index(3), None);
    }
}
