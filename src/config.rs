//! Application configuration.
//!
//! Centralizes the compile-time constants used throughout the shell.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the startup banner and error prefixes.
pub const APP_NAME: &str = "hostsh";

/// Tagline printed next to the application name at startup.
pub const BANNER_TAGLINE: &str = "Enhanced Unix Shell Wrapper";

/// Usage hint printed at startup.
pub const BANNER_HINT: &str = "Type 'exit' to quit, use Tab for autocomplete";

/// Rule line separating the banner from the first prompt.
pub const BANNER_RULE: &str = "----------------------------------------";

/// Farewell message printed by the `exit` built-in.
pub const FAREWELL: &str = "Goodbye!";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Prompt string displayed before each input line.
pub const PROMPT: &str = "> ";

/// ANSI sequence emitted by the `clear` built-in: erase display, home cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;
