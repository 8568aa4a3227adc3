//! Pure screen-geometry rules for absolute mouse coordinates.
//!
//! No OS calls happen here: the current display geometry is passed in by the
//! caller, which queries it from the injection sink.

pub mod screen;
