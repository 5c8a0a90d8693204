//! Built-in dispatch and external command execution.
//!
//! An input line is tokenized on whitespace; the first token either names
//! one of the four built-ins (`cd`, `pwd`, `clear`, `exit`) or an external
//! program. External commands inherit the shell's standard streams, run in
//! the session's working directory, and are waited on to completion; a
//! non-zero exit status is not a dispatcher-level failure; the child's own
//! stderr is the user's signal.

use std::io::{self, Write};
use std::process::{self, Command};

use tracing::debug;

use crate::config::{CLEAR_SCREEN, FAREWELL};
use crate::core::error::ShellError;
use crate::core::session::Session;

// =============================================================================
// Command Table
// =============================================================================

/// Frequently used Unix commands offered as first-token autocomplete
/// candidates.
///
/// Purely suggestion data: execution is not restricted to this set, and any
/// first token outside it is still spawned as an external program.
pub const COMMON_COMMANDS: &[&str] = &[
    "ls", "cd", "pwd", "mkdir", "rmdir", "rm", "cp", "mv", "cat", "less", "more", "grep", "find",
    "which", "man", "ps", "kill", "top", "df", "du", "free", "git", "vim", "nano", "curl", "wget",
    "ssh", "scp", "tar", "gzip", "unzip", "chmod", "chown", "sudo", "history", "clear", "exit",
];

// =============================================================================
// Built-ins
// =============================================================================

/// Verbs interpreted by the dispatcher itself rather than the OS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Pwd,
    Clear,
    Exit,
}

impl Builtin {
    /// Recognize a built-in by exact, case-sensitive first token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "cd" => Some(Self::Cd),
            "pwd" => Some(Self::Pwd),
            "clear" => Some(Self::Clear),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Execute one input line against the session.
///
/// Empty (or all-whitespace) lines are a no-op. Errors are returned for the
/// caller to report; none of them terminate the loop. `exit` terminates the
/// whole process with status 0 and does not return.
pub fn execute_line(line: &str, session: &mut Session) -> Result<(), ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(());
    };

    match Builtin::from_token(name) {
        Some(Builtin::Cd) => {
            let target = args.first().ok_or(ShellError::PathRequired)?;
            session.change_dir(target)
        }
        Some(Builtin::Pwd) => {
            println!("{}", session.cwd().display());
            Ok(())
        }
        Some(Builtin::Clear) => {
            print!("{CLEAR_SCREEN}");
            io::stdout().flush().ok();
            Ok(())
        }
        Some(Builtin::Exit) => {
            println!("{FAREWELL}");
            process::exit(0);
        }
        None => run_external(name, args, session),
    }
}

/// Spawn an external program with inherited standard streams and wait for it.
fn run_external(name: &str, args: &[&str], session: &Session) -> Result<(), ShellError> {
    debug!(command = name, ?args, "spawning external command");
    let status = Command::new(name)
        .args(args)
        .current_dir(session.cwd())
        .status()
        .map_err(|source| ShellError::Spawn {
            command: name.to_string(),
            source,
        })?;
    debug!(command = name, code = ?status.code(), "external command finished");
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn session_in_tempdir() -> (tempfile::TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        (dir, Session::at(&root))
    }

    #[test]
    fn test_builtin_recognition_is_exact() {
        assert_eq!(Builtin::from_token("cd"), Some(Builtin::Cd));
        assert_eq!(Builtin::from_token("pwd"), Some(Builtin::Pwd));
        assert_eq!(Builtin::from_token("clear"), Some(Builtin::Clear));
        assert_eq!(Builtin::from_token("exit"), Some(Builtin::Exit));
        assert_eq!(Builtin::from_token("CD"), None);
        assert_eq!(Builtin::from_token("cdd"), None);
        assert_eq!(Builtin::from_token(""), None);
    }

    #[test]
    fn test_empty_line_is_a_noop() {
        let (_dir, mut session) = session_in_tempdir();
        let before = session.cwd().to_path_buf();

        execute_line("", &mut session).unwrap();
        execute_line("   \t  ", &mut session).unwrap();
        assert_eq!(session.cwd(), before);
    }

    #[test]
    fn test_cd_without_path_fails() {
        let (_dir, mut session) = session_in_tempdir();
        let before = session.cwd().to_path_buf();

        let err = execute_line("cd", &mut session).unwrap_err();
        assert!(matches!(err, ShellError::PathRequired));
        assert_eq!(session.cwd(), before);
    }

    #[test]
    fn test_cd_changes_working_directory() {
        let (dir, mut session) = session_in_tempdir();
        fs::create_dir(dir.path().join("projects")).unwrap();

        execute_line("cd projects", &mut session).unwrap();
        assert!(session.cwd().ends_with("projects"));
    }

    #[test]
    fn test_cd_failure_reports_and_keeps_cwd() {
        let (_dir, mut session) = session_in_tempdir();
        let before = session.cwd().to_path_buf();

        let err = execute_line("cd nowhere", &mut session).unwrap_err();
        assert!(matches!(err, ShellError::ChangeDir { .. }));
        assert_eq!(session.cwd(), before);
    }

    #[test]
    fn test_external_command_runs() {
        let (_dir, mut session) = session_in_tempdir();
        execute_line("true", &mut session).unwrap();
    }

    #[test]
    fn test_external_nonzero_exit_is_not_an_error() {
        let (_dir, mut session) = session_in_tempdir();
        execute_line("false", &mut session).unwrap();
    }

    #[test]
    fn test_external_spawn_failure_is_reported() {
        let (_dir, mut session) = session_in_tempdir();
        let err = execute_line("definitely-not-a-real-command", &mut session).unwrap_err();
        assert!(matches!(err, ShellError::Spawn { .. }));
    }

    #[test]
    fn test_command_table_contains_builtins() {
        for builtin in ["cd", "pwd", "clear", "exit"] {
            assert!(COMMON_COMMANDS.contains(&builtin));
        }
        assert_eq!(COMMON_COMMANDS.first(), Some(&"ls"));
    }

    #[test]
    fn test_external_runs_in_session_directory() {
        let (dir, mut session) = session_in_tempdir();
        execute_line("touch marker.txt", &mut session).unwrap();
        assert!(dir.path().join("marker.txt").exists());
    }
}
