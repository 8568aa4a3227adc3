//! # input-synth-core
//!
//! OS-independent building blocks for synthetic keyboard and mouse input:
//! the binary record the OS consumes, the virtual-key table, key and button
//! semantics, and absolute-coordinate math.
//!
//! Nothing in this crate calls the OS.  The `input-synth` crate owns the
//! injection sink and the builder that turns intents into batches of these
//! records.
//!
//! - **`record`** – [`InputRecord`], a `#[repr(C)]` tagged union laid out
//!   exactly like the Win32 `INPUT` structure, plus its flag words.
//! - **`keymap`** – [`VirtualKey`], [`Key`], the extended-key table and the
//!   mouse button → flag mapping.
//! - **`domain`** – [`normalize`], mapping pixels onto the 0..=65535 range
//!   used by absolute mouse records.

pub mod domain;
pub mod keymap;
pub mod record;

pub use domain::screen::{normalize, DisplayGeometry, NormalizeError, ScreenSpace, ABSOLUTE_MAX};
pub use keymap::{
    button_to_flag, is_extended_key, InvalidButton, Key, MouseButton, UnknownVirtualKey,
    VirtualKey, XButton,
};
pub use record::{
    InputKind, InputRecord, InputRecordView, KeyboardFlags, KeyboardPayload, MouseFlags,
    MousePayload, INPUT_RECORD_SIZE,
};
