//! miditools CLI library
//!
//! Command implementations for the `miditools` binary, exposed as a library
//! so they can be tested directly.

pub mod commands;
pub mod output;
