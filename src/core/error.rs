//! Custom error types for the shell.
//!
//! A single [`ShellError`] enum covers the dispatcher's failure taxonomy:
//! usage errors, OS errors from directory operations, and spawn failures
//! for external commands. Every error is reported to the user and the loop
//! continues; none of them terminate the shell.
//!
//! Autocomplete resolution has no error type at all; its failures degrade
//! to an empty suggestion list.

use std::io;

use thiserror::Error;

/// Errors produced by the dispatcher and the session state.
#[derive(Debug, Error)]
pub enum ShellError {
    /// `cd` was invoked without a target path.
    #[error("path required")]
    PathRequired,

    /// The home directory could not be determined for `~` expansion.
    #[error("cannot determine home directory")]
    HomeNotFound,

    /// Changing the working directory failed.
    #[error("cd: {path}: {source}")]
    ChangeDir { path: String, source: io::Error },

    /// Launching an external command failed (not found, not executable).
    #[error("{command}: {source}")]
    Spawn { command: String, source: io::Error },

    /// The terminal interaction layer failed.
    #[error("readline: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
