//! Application layer: the input builder and the sink boundary it talks to.
//!
//! - **`sink`** – [`InjectionSink`](sink::InjectionSink), the only way this
//!   crate reaches the OS.  Implementations live in the infrastructure layer.
//!
//! - **`builder`** – [`InputBuilder`](builder::InputBuilder), the fluent
//!   accumulator that turns intents into wire records and submits them to a
//!   sink as one batch.

pub mod builder;
pub mod sink;
