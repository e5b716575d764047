//! IO Module - interactive prompting

pub mod prompt;

pub use prompt::*;
