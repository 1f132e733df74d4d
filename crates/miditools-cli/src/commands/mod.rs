//! CLI command implementations

pub mod chord;
pub mod demo;
pub mod modes;
pub mod note;
pub mod scale;
