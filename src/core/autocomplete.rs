//! Autocomplete resolution for commands and filesystem paths.
//!
//! Given the text before the cursor, this module decides whether the user is
//! completing a command name (first token) or a path (any later token) and
//! produces an ordered candidate list:
//!
//! - command candidates in command-table order;
//! - path candidates in directory-entry name order, hidden entries skipped
//!   unless the typed prefix itself starts with `.`.
//!
//! Resolution is total: unreadable directories, bad paths, and missing home
//! directories all degrade to an empty suggestion list, never an error.

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::core::commands::COMMON_COMMANDS;
use crate::core::filesystem::{describe_file, resolve_search_dir};

// =============================================================================
// Suggestion Type
// =============================================================================

/// A single completion candidate: the text to insert and a category label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// Replacement text for the word being completed.
    pub text: String,
    /// Human-readable category shown next to the candidate.
    pub label: &'static str,
}

impl Suggestion {
    fn new(text: impl Into<String>, label: &'static str) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Produce suggestions for the text before the cursor.
///
/// With zero or one whitespace-delimited word typed, the user is still on
/// the command position and the command table is matched. Any later word is
/// completed against the filesystem, relative to `cwd`.
pub fn suggest(text: &str, cwd: &Path) -> Vec<Suggestion> {
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.len() <= 1 {
        return command_suggestions(words.first().copied().unwrap_or(""));
    }

    file_suggestions(current_word(text), cwd)
}

/// Ghost-text hint: the suffix that would complete the current word with the
/// first candidate that strictly extends it.
pub fn hint(text: &str, cwd: &Path) -> Option<String> {
    if text.is_empty() || text.ends_with(char::is_whitespace) {
        return None;
    }

    let word = current_word(text);
    suggest(text, cwd)
        .into_iter()
        .find(|s| s.text.len() > word.len() && s.text.starts_with(word))
        .map(|s| s.text[word.len()..].to_string())
}

/// The word currently being typed: everything after the last whitespace
/// character. Trailing whitespace means a fresh, empty word.
fn current_word(text: &str) -> &str {
    text.rsplit(char::is_whitespace).next().unwrap_or(text)
}

// =============================================================================
// Command Completion
// =============================================================================

/// Match the partial word against the command table, order preserved.
fn command_suggestions(prefix: &str) -> Vec<Suggestion> {
    COMMON_COMMANDS
        .iter()
        .filter(|cmd| cmd.starts_with(prefix))
        .map(|cmd| Suggestion::new(*cmd, "Command"))
        .collect()
}

// =============================================================================
// Path Completion
// =============================================================================

/// Suggest directory entries matching the partial path word.
fn file_suggestions(word: &str, cwd: &Path) -> Vec<Suggestion> {
    let (dir_part, prefix) = split_word(word);
    let search_dir = if dir_part.is_empty() {
        cwd.to_path_buf()
    } else {
        resolve_search_dir(dir_part, cwd)
    };

    let Ok(entries) = fs::read_dir(&search_dir) else {
        trace!(dir = %search_dir.display(), "search directory unreadable");
        return Vec::new();
    };

    let mut names: Vec<(String, bool)> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            let is_dir = entry.file_type().ok()?.is_dir();
            Some((name, is_dir))
        })
        .collect();
    names.sort();

    let mut suggestions = Vec::new();
    for (name, is_dir) in names {
        // Hidden entries only surface when the prefix itself is dotted.
        if name.starts_with('.') && !prefix.starts_with('.') {
            continue;
        }
        if !name.starts_with(prefix) {
            continue;
        }

        if is_dir {
            suggestions.push(Suggestion::new(format!("{dir_part}{name}/"), "Directory"));
        } else {
            let label = describe_file(&search_dir.join(&name));
            suggestions.push(Suggestion::new(format!("{dir_part}{name}"), label));
        }
    }

    trace!(word, count = suggestions.len(), "path suggestions");
    suggestions
}

/// Split a word at its last separator into the directory portion as typed
/// (trailing separator included) and the name prefix to match.
fn split_word(word: &str) -> (&str, &str) {
    match word.rfind('/') {
        Some(idx) => (&word[..=idx], &word[idx + 1..]),
        None => ("", word),
    }
}

// =============================================================================
// Tests
// =============================================================================
