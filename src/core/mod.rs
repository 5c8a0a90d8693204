//! Core shell logic.
//!
//! This module provides:
//! - [`suggest`] and [`hint`] autocomplete resolution
//! - [`execute_line`] built-in dispatch and external execution
//! - [`Session`] owned working-directory state

pub mod autocomplete;
pub mod commands;
pub mod error;
pub mod filesystem;
pub mod session;

pub use autocomplete::{hint, suggest};
pub use commands::execute_line;
pub use error::ShellError;
pub use session::Session;
