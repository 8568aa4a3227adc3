//! Integration tests: InputBuilder → RecordingSink.
//!
//! Drives whole scripts through the public API and checks what the sink would
//! have handed to the OS, batch by batch.

use input_synth::{InputBuilder, InputError, RecordingSink, WHEEL_DELTA};
use input_synth_core::{
    DisplayGeometry, InputKind, KeyboardFlags, MouseButton, MouseFlags, ScreenSpace, VirtualKey,
};

const MARKER: usize = 0xC0FFEE;

fn sink() -> RecordingSink {
    RecordingSink::new()
        .with_extra_info(MARKER)
        .with_scan_code(VirtualKey::LControl.code(), 0x1D)
        .with_scan_code(VirtualKey::V.code(), 0x2F)
}

#[test]
fn test_script_is_delivered_in_one_batch_in_build_order() {
    // Arrange
    let mut input = InputBuilder::new(sink());
    input
        .mouse_set(960, 540, true)
        .unwrap()
        .mouse_click(MouseButton::Left)
        .unwrap()
        .key_chord(&[VirtualKey::LControl, VirtualKey::V])
        .wheel_scroll(-WHEEL_DELTA, true);

    // Act
    input.submit().expect("submit");

    // Assert
    let sink = input.into_sink();
    assert_eq!(sink.batch_count(), 1);
    let kinds: Vec<InputKind> = sink.delivered().iter().map(|r| r.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            InputKind::Mouse,
            InputKind::Mouse,
            InputKind::Mouse,
            InputKind::Keyboard,
            InputKind::Keyboard,
            InputKind::Keyboard,
            InputKind::Keyboard,
            InputKind::Mouse,
        ]
    );
    let delivered = sink.delivered();
    let target = delivered[0].as_mouse().expect("mouse");
    assert_eq!((target.dx, target.dy), (32_785, 32_798));
    let ctrl_down = delivered[3].as_keyboard().expect("keyboard");
    assert_eq!(ctrl_down.scan_code, 0x1D);
    assert!(delivered.iter().all(|r| r.extra_info() == MARKER));
}

#[test]
fn test_type_str_produces_two_records_per_character() {
    let mut input = InputBuilder::new(sink());

    input.type_str("ok").submit().unwrap();

    let delivered = input.sink().delivered();
    assert_eq!(delivered.len(), 4);
    assert!(delivered.iter().all(|r| r
        .as_keyboard()
        .is_some_and(|k| k.flags.contains(KeyboardFlags::UNICODE))));
}

#[test]
fn test_short_count_keeps_batch_for_retry() {
    // Arrange
    let mut input = InputBuilder::new(sink().with_accept_limit(2).with_error_code(5));
    input.type_str("abc");

    // Act
    let first = input.submit();

    // Assert
    assert!(matches!(
        first,
        Err(InputError::Injection { accepted: 2, expected: 6, os_error: 5 })
    ));
    assert_eq!(input.len(), 6);

    // A retry hands the same records to the sink again.
    let second = input.submit();
    assert!(second.is_err());
    let batches = input.sink().batches.lock().unwrap().clone();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0], batches[1]);
}

#[test]
fn test_empty_submit_never_reaches_sink() {
    let mut input = InputBuilder::new(sink());

    input.submit().unwrap();
    input.type_str("x").clear().submit().unwrap();

    assert_eq!(input.sink().batch_count(), 0);
}

#[test]
fn test_builder_is_reusable_after_successful_submit() {
    let mut input = InputBuilder::new(sink());

    input.key_type(VirtualKey::A).submit().unwrap();
    input.key_type(VirtualKey::B).submit().unwrap();

    assert_eq!(input.sink().batch_count(), 2);
    assert_eq!(input.sink().delivered().len(), 4);
    assert!(input.is_empty());
}

#[test]
fn test_marker_is_queried_once_per_record() {
    let mut input = InputBuilder::new(sink());

    input
        .key_type(VirtualKey::Tab)
        .mouse_x_click(1)
        .unwrap()
        .wheel_scroll(WHEEL_DELTA, false);

    assert_eq!(input.len(), 5);
    assert_eq!(input.sink().marker_queries(), 5);
}

#[test]
fn test_invalid_arguments_do_not_touch_the_batch() {
    let mut input = InputBuilder::new(sink());
    input.key_type(VirtualKey::Escape);

    assert!(input.mouse_x_button(7, true).is_err());
    assert!(input.mouse_click(MouseButton::X2).is_err());

    assert_eq!(input.len(), 2);
}

#[test]
fn test_virtual_desktop_targets_secondary_monitor() {
    // Arrange
    let desktop = DisplayGeometry {
        origin_x: -1920,
        origin_y: 0,
        width: 3840,
        height: 1080,
    };
    let mut input = InputBuilder::with_screen_space(
        sink().with_virtual_desktop(desktop),
        ScreenSpace::VirtualDesktop,
    );

    // Act
    input.mouse_set(1919, 1079, true).unwrap().submit().unwrap();

    // Assert
    let delivered = input.sink().delivered();
    let mouse = delivered[0].as_mouse().expect("mouse");
    assert_eq!((mouse.dx, mouse.dy), (65_535, 65_535));
    assert_eq!(
        mouse.flags,
        MouseFlags::MOVE | MouseFlags::ABSOLUTE | MouseFlags::VIRTUAL_DESK
    );
}

#[test]
fn test_relative_move_ignores_virtual_desktop_origin() {
    // Arrange
    let desktop = DisplayGeometry {
        origin_x: -1920,
        origin_y: 0,
        width: 3840,
        height: 1080,
    };
    let mut input = InputBuilder::with_screen_space(
        sink().with_virtual_desktop(desktop),
        ScreenSpace::VirtualDesktop,
    );

    // Act
    input.mouse_move(0, 0, true).unwrap().submit().unwrap();

    // Assert
    let delivered = input.sink().delivered();
    let mouse = delivered[0].as_mouse().expect("mouse");
    assert_eq!((mouse.dx, mouse.dy), (0, 0));
    assert_eq!(mouse.flags, MouseFlags::MOVE);
}

#[test]
fn test_far_absolute_position_does_not_panic() {
    let desktop = DisplayGeometry {
        origin_x: -1920,
        origin_y: 0,
        width: 3840,
        height: 1080,
    };
    let mut input = InputBuilder::with_screen_space(
        sink().with_virtual_desktop(desktop),
        ScreenSpace::VirtualDesktop,
    );

    input.mouse_set(i32::MAX, 0, true).unwrap();

    let mouse = *input.pending()[0].as_mouse().expect("mouse");
    assert_eq!((mouse.dx, mouse.dy), (i32::MAX, 0));
}

#[test]
fn test_degenerate_display_fails_before_append() {
    let mut input = InputBuilder::new(sink().with_display(1, 768));

    let result = input.mouse_set(0, 0, true).map(|_| ());

    assert!(matches!(result, Err(InputError::Configuration(_))));
    assert!(input.is_empty());
}

#[test]
fn test_cursor_and_blocking_queries_pass_through() {
    let input = InputBuilder::new(sink().with_key_state(VirtualKey::Shift.code(), i16::MIN));

    input.set_cursor_position(100, 200).unwrap();
    assert_eq!(input.cursor_position().unwrap(), (100, 200));
    assert!(input.key_state(VirtualKey::Shift).pressed);
    assert!(!input.key_state(VirtualKey::Shift).toggled);

    input.block_input(true).unwrap();
    assert!(*input.sink().blocked.lock().unwrap());
}

#[test]
fn test_block_input_refusal_surfaces_as_error() {
    let input = InputBuilder::new(sink().deny_block_input());

    assert!(matches!(input.block_input(true), Err(InputError::Query(_))));
}
