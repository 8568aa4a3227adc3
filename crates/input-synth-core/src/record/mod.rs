//! Wire-level input records and their flag words.
//!
//! Everything here is plain data: building a record never talks to the OS.
//! The OS-facing values a record needs (scan code, synthetic-input marker)
//! are supplied by the caller.

pub mod flags;
pub mod wire;

pub use flags::{KeyboardFlags, MouseFlags};
pub use wire::{
    HardwarePayload, InputKind, InputRecord, InputRecordView, KeyboardPayload, MousePayload,
    INPUT_RECORD_SIZE,
};
