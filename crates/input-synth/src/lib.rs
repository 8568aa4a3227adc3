//! input-synth library entry point.
//!
//! Builds batches of synthetic keyboard and mouse events with
//! [`InputBuilder`] and injects each batch atomically through an
//! [`InjectionSink`], so no physical input can interleave with it.
//!
//! ```ignore
//! use input_synth::{InputBuilder, NativeSink};
//! use input_synth_core::VirtualKey;
//!
//! let mut input = InputBuilder::new(NativeSink::default());
//! input.key_chord(&[VirtualKey::LWin, VirtualKey::R]).type_str("notepad");
//! input.key_type(VirtualKey::Return).submit()?;
//! ```

/// Application layer: the builder and the sink boundary.
pub mod application;

/// Infrastructure layer: OS sinks and configuration.
pub mod infrastructure;

pub use application::builder::{InputBuilder, InputError, KeyState, WHEEL_DELTA};
pub use application::sink::InjectionSink;
pub use infrastructure::sink::recording::RecordingSink;
pub use infrastructure::sink::NativeSink;
