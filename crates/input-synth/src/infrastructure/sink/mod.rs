//! Concrete [`InjectionSink`](crate::application::sink::InjectionSink)
//! implementations.
//!
//! | Module      | Target  | Behaviour                                        |
//! |-------------|---------|--------------------------------------------------|
//! | `windows`   | Windows | `SendInput`, `MapVirtualKeyW`, `GetSystemMetrics` |
//! | `recording` | any     | Stores batches in memory, answers fixed values   |
//!
//! The sink for the build target is re-exported as `NativeSink`.  Only
//! Windows can inject input, so every other target gets the recording sink
//! and the binary becomes a dry run there.

pub mod recording;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::WindowsSink as NativeSink;

#[cfg(not(target_os = "windows"))]
pub use recording::RecordingSink as NativeSink;
