//! Interactive read-eval-print loop built on rustyline.
//!
//! The editor owns a [`ShellHelper`] that forwards the text before the
//! cursor to the autocomplete resolver on Tab and surfaces ghost-text hints
//! while typing. The session cell is shared with the helper through
//! `Rc<RefCell<..>>`; execution is single-threaded, so borrows never
//! overlap.

use std::cell::RefCell;
use std::rc::Rc;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, EditMode, Editor, Helper};
use tracing::debug;

use crate::config::{MAX_COMMAND_HISTORY, PROMPT};
use crate::core::{Session, ShellError, execute_line, hint, suggest};

// =============================================================================
// Editor Helper
// =============================================================================

/// rustyline helper wiring Tab completion and hints to the resolver.
pub struct ShellHelper {
    session: Rc<RefCell<Session>>,
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let text = &line[..pos];
        let session = self.session.borrow();
        let pairs = suggest(text, session.cwd())
            .into_iter()
            .map(|s| Pair {
                display: format!("{}  ({})", s.text, s.label),
                replacement: s.text,
            })
            .collect();
        Ok((word_start(text), pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        // Hints only at the end of the line; mid-line edits get none.
        if pos < line.len() {
            return None;
        }
        let session = self.session.borrow();
        hint(line, session.cwd())
    }
}

impl Highlighter for ShellHelper {}
impl Validator for ShellHelper {}
impl Helper for ShellHelper {}

/// Byte offset where the word being completed starts: one past the last
/// whitespace character before the cursor.
fn word_start(text: &str) -> usize {
    text.char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(0)
}

// =============================================================================
// Loop
// =============================================================================

/// Run the interactive loop.
///
/// Dispatcher errors are printed to stderr and the loop continues. Ctrl-C
/// returns to a fresh prompt; end-of-input from the editor ends the loop
/// gracefully. The `exit` built-in terminates the process from inside the
/// dispatcher.
pub fn run(session: Session) -> Result<(), ShellError> {
    let session = Rc::new(RefCell::new(session));

    let config = Config::builder()
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .max_history_size(MAX_COMMAND_HISTORY)?
        .build();
    let mut editor: Editor<ShellHelper, DefaultHistory> = Editor::with_config(config)?;
    editor.set_helper(Some(ShellHelper {
        session: Rc::clone(&session),
    }));

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                if let Err(err) = execute_line(&line, &mut session.borrow_mut()) {
                    eprintln!("Error: {err}");
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                debug!("end of input, leaving loop");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_start() {
        assert_eq!(word_start(""), 0);
        assert_eq!(word_start("cat"), 0);
        assert_eq!(word_start("cat ma"), 4);
        assert_eq!(word_start("cat src/ma"), 4);
        assert_eq!(word_start("cat  "), 5);
        assert_eq!(word_start("a\tb"), 2);
    }
}
