//! Command-line layer of the tree explorer
//!
//! Parses arguments, asks for the depth when it was not given, and prints
//! summaries. All tree work is delegated to the library modules.

pub mod commands;
pub mod output;
pub mod prompt;
