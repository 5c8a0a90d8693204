//! Working-directory state for the shell session.
//!
//! The working directory is the only mutable state the shell keeps across
//! input lines. It lives in a single owned cell: the dispatcher and the
//! autocomplete resolver borrow it, and [`Session::change_dir`] is the one
//! writer. The process-global working directory is never mutated; external
//! commands receive the cell's value at spawn time.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::ShellError;
use crate::core::filesystem::{clean_path, expand_tilde};

/// Shell session state: the current working directory.
#[derive(Debug)]
pub struct Session {
    cwd: PathBuf,
}

impl Session {
    /// Create a session rooted at the process's starting directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            cwd: env::current_dir()?,
        })
    }

    /// Create a session rooted at a specific directory.
    #[cfg(test)]
    pub fn at(dir: &Path) -> Self {
        Self {
            cwd: dir.to_path_buf(),
        }
    }

    /// The current working directory.
    ///
    /// Absolute and existing as long as every mutation went through
    /// [`Session::change_dir`].
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Change the working directory.
    ///
    /// Expands a leading `~`, resolves a relative target against the current
    /// directory, lexically cleans the result, then canonicalizes through
    /// the OS, which verifies existence and yields an absolute path. The
    /// cell is updated only after the target is confirmed to be a directory,
    /// so a failed change leaves it untouched.
    pub fn change_dir(&mut self, target: &str) -> Result<(), ShellError> {
        let expanded = expand_tilde(target)?;
        let resolved = if expanded.is_absolute() {
            clean_path(&expanded)
        } else {
            clean_path(&self.cwd.join(&expanded))
        };

        let os_error = |source| ShellError::ChangeDir {
            path: target.to_string(),
            source,
        };

        let canonical = fs::canonicalize(&resolved).map_err(os_error)?;
        let metadata = fs::metadata(&canonical).map_err(os_error)?;
        if !metadata.is_dir() {
            return Err(os_error(io::Error::from(io::ErrorKind::NotADirectory)));
        }

        debug!(from = %self.cwd.display(), to = %canonical.display(), "working directory changed");
        self.cwd = canonical;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
