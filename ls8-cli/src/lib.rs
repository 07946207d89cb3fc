//! LS-8 command line front end.
//!
//! The binary in `main.rs` only dispatches; the commands and the logging
//! backend live here.

pub mod commands;
pub mod logger;
