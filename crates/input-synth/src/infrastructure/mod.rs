//! Infrastructure layer: OS adapters and configuration.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `input_synth_core`, but MUST NOT be imported by the `application` layer.
//!
//! - **`sink`** – implementations of the injection sink, with the one for the
//!   build target selected at compile time as `NativeSink`.
//!
//! - **`config`** – TOML configuration for the binary.

pub mod config;
pub mod sink;
