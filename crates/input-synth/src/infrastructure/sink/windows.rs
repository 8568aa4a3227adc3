//! Windows injection sink over `SendInput` and friends.
//!
//! [`InputRecord`] is laid out exactly like the Win32 `INPUT` structure, so a
//! batch is handed to `SendInput` as-is without copying or conversion.

#![cfg(target_os = "windows")]

use std::mem::size_of;

use input_synth_core::{DisplayGeometry, InputRecord, ScreenSpace, INPUT_RECORD_SIZE};
use windows::Win32::Foundation::{GetLastError, BOOL, POINT};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    BlockInput, GetKeyState, MapVirtualKeyW, SendInput, INPUT, MAPVK_VK_TO_VSC,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetMessageExtraInfo, GetSystemMetrics, SetCursorPos, SM_CXSCREEN,
    SM_CXVIRTUALSCREEN, SM_CYSCREEN, SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN, SM_YVIRTUALSCREEN,
};

use crate::application::sink::InjectionSink;

const _: () = assert!(INPUT_RECORD_SIZE == size_of::<INPUT>());

/// [`InjectionSink`] backed by the Win32 input APIs.
pub struct WindowsSink;

impl WindowsSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsSink {
    fn default() -> Self {
        Self::new()
    }
}

impl InjectionSink for WindowsSink {
    fn send_input(&self, records: &[InputRecord]) -> u32 {
        // SAFETY: InputRecord is #[repr(C)] with the same size, alignment and
        // field layout as INPUT (asserted above and in input-synth-core), and
        // every record has its tagged payload initialised.
        let inputs =
            unsafe { std::slice::from_raw_parts(records.as_ptr().cast::<INPUT>(), records.len()) };
        // SAFETY: `inputs` is a valid slice for the duration of the call.
        unsafe { SendInput(inputs, INPUT_RECORD_SIZE as i32) }
    }

    fn map_virtual_key_to_scan_code(&self, virtual_key: u16) -> u16 {
        // SAFETY: MapVirtualKeyW has no pointer arguments.
        let scan = unsafe { MapVirtualKeyW(u32::from(virtual_key), MAPVK_VK_TO_VSC) };
        scan as u16
    }

    fn message_extra_info(&self) -> usize {
        // SAFETY: GetMessageExtraInfo only reads thread-local state.
        unsafe { GetMessageExtraInfo().0 as usize }
    }

    fn display_geometry(&self, space: ScreenSpace) -> DisplayGeometry {
        // SAFETY: GetSystemMetrics is always safe to call
        unsafe {
            match space {
                ScreenSpace::Primary => DisplayGeometry::sized(
                    GetSystemMetrics(SM_CXSCREEN),
                    GetSystemMetrics(SM_CYSCREEN),
                ),
                ScreenSpace::VirtualDesktop => DisplayGeometry {
                    origin_x: GetSystemMetrics(SM_XVIRTUALSCREEN),
                    origin_y: GetSystemMetrics(SM_YVIRTUALSCREEN),
                    width: GetSystemMetrics(SM_CXVIRTUALSCREEN),
                    height: GetSystemMetrics(SM_CYVIRTUALSCREEN),
                },
            }
        }
    }

    fn cursor_position(&self) -> Option<(i32, i32)> {
        let mut point = POINT::default();
        // SAFETY: `point` is a valid, writable POINT on the stack.
        unsafe { GetCursorPos(&mut point) }.ok()?;
        Some((point.x, point.y))
    }

    fn set_cursor_position(&self, x: i32, y: i32) -> bool {
        // SAFETY: SetCursorPos has no pointer arguments.
        unsafe { SetCursorPos(x, y) }.is_ok()
    }

    fn last_error_code(&self) -> u32 {
        // SAFETY: GetLastError only reads thread-local state.
        unsafe { GetLastError() }.0
    }

    fn key_state(&self, virtual_key: u16) -> i16 {
        // SAFETY: GetKeyState has no pointer arguments.
        unsafe { GetKeyState(i32::from(virtual_key)) }
    }

    fn block_input(&self, block: bool) -> bool {
        // SAFETY: BlockInput has no pointer arguments.
        unsafe { BlockInput(BOOL::from(block)) }.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Smoke test: needs an interactive desktop, so only the non-injecting
    /// queries are exercised.
    #[test]
    fn test_primary_display_is_not_degenerate() {
        let geometry = WindowsSink::new().display_geometry(ScreenSpace::Primary);
        assert!(geometry.width >= 2 && geometry.height >= 2, "{geometry:?}");
    }

    #[test]
    fn test_submitting_nothing_accepts_nothing() {
        assert_eq!(WindowsSink::new().send_input(&[]), 0);
    }

    #[test]
    fn test_record_size_matches_native_input() {
        assert_eq!(INPUT_RECORD_SIZE, size_of::<INPUT>());
    }

    #[test]
    fn test_letter_a_has_a_scan_code() {
        assert_ne!(WindowsSink::new().map_virtual_key_to_scan_code(0x41), 0);
    }
}
