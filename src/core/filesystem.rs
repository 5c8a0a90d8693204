//! Filesystem helpers: tilde expansion, lexical path cleaning, and entry
//! classification for suggestion labels.
//!
//! Everything here is either purely lexical or read-only. The two tilde
//! expanders differ deliberately: [`expand_tilde`] is used by `cd` and
//! reports a missing home directory as an error, while
//! [`resolve_search_dir`] is used by the autocomplete resolver and treats
//! an unresolvable `~` as literal text.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::core::error::ShellError;

// =============================================================================
// Path Expansion
// =============================================================================

/// Expand a leading `~` to the user's home directory.
///
/// Inputs without a leading `~` pass through unchanged. A missing home
/// directory is an error; this is the `cd` contract.
pub fn expand_tilde(raw: &str) -> Result<PathBuf, ShellError> {
    match raw.strip_prefix('~') {
        Some(rest) => {
            let home = dirs::home_dir().ok_or(ShellError::HomeNotFound)?;
            let rest = rest.trim_start_matches('/');
            if rest.is_empty() {
                Ok(home)
            } else {
                Ok(home.join(rest))
            }
        }
        None => Ok(PathBuf::from(raw)),
    }
}

/// Resolve the directory portion of a partially typed word into the
/// directory to scan for completions.
///
/// Absolute portions are used as-is, `~/`-prefixed portions substitute the
/// home directory, anything else is relative to `cwd`. The result is
/// lexically cleaned. Never fails: an unresolvable home leaves the portion
/// literal, and nonexistent results simply list as empty later.
pub fn resolve_search_dir(dir_part: &str, cwd: &Path) -> PathBuf {
    let path = Path::new(dir_part);
    if path.is_absolute() {
        clean_path(path)
    } else if let Some(rest) = dir_part.strip_prefix("~/") {
        match dirs::home_dir() {
            Some(home) => clean_path(&home.join(rest)),
            None => clean_path(path),
        }
    } else {
        clean_path(&cwd.join(dir_part))
    }
}

/// Lexically normalize a path: drop `.` components, fold `..` into the
/// preceding component, and discard `..` at the root. No filesystem access.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

// =============================================================================
// Entry Classification
// =============================================================================

/// Describe a file for suggestion labeling.
///
/// Any execute permission bit wins over the extension table; a failed stat
/// falls back to the generic label.
pub fn describe_file(path: &Path) -> &'static str {
    let Ok(metadata) = fs::metadata(path) else {
        return "File";
    };

    if is_executable(&metadata) {
        return "Executable";
    }

    extension_label(path)
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    false
}

/// Map a file extension (case-insensitive) to a human-readable label.
fn extension_label(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "File";
    };

    match ext.to_ascii_lowercase().as_str() {
        "go" => "Go source",
        "js" | "ts" => "JavaScript/TypeScript",
        "py" => "Python script",
        "md" => "Markdown",
        "txt" => "Text file",
        "json" => "JSON file",
        "yaml" | "yml" => "YAML file",
        "xml" => "XML file",
        "html" | "htm" => "HTML file",
        "css" => "CSS file",
        "sh" => "Shell script",
        "zip" | "tar" | "gz" => "Archive",
        "jpg" | "jpeg" | "png" | "gif" => "Image",
        _ => "File",
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    #[test]
    fn test_clean_path_parent_components() {
        assert_eq!(clean_path(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(clean_path(Path::new("/a/b/../../c")), PathBuf::from("/c"));
        assert_eq!(clean_path(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_clean_path_cur_dir_and_slashes() {
        assert_eq!(clean_path(Path::new("/a/./b")), PathBuf::from("/a/b"));
        assert_eq!(clean_path(Path::new("/a//b/")), PathBuf::from("/a/b"));
        assert_eq!(clean_path(Path::new("a/./b")), PathBuf::from("a/b"));
    }

    #[test]
    fn test_clean_path_degenerate() {
        assert_eq!(clean_path(Path::new("")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new(".")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(clean_path(Path::new("../a")), PathBuf::from("../a"));
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        assert_eq!(
            expand_tilde("/usr/local").unwrap(),
            PathBuf::from("/usr/local")
        );
        assert_eq!(expand_tilde("projects").unwrap(), PathBuf::from("projects"));
    }

    #[test]
    fn test_expand_tilde_home() {
        // Only meaningful where a home directory exists (always true in CI).
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~").unwrap(), home);
            assert_eq!(expand_tilde("~/projects").unwrap(), home.join("projects"));
        }
    }

    #[test]
    fn test_resolve_search_dir_relative() {
        let cwd = Path::new("/home/user");
        assert_eq!(
            resolve_search_dir("src/", cwd),
            PathBuf::from("/home/user/src")
        );
        assert_eq!(
            resolve_search_dir("../etc/", cwd),
            PathBuf::from("/home/etc")
        );
    }

    #[test]
    fn test_resolve_search_dir_absolute() {
        let cwd = Path::new("/home/user");
        assert_eq!(resolve_search_dir("/etc/", cwd), PathBuf::from("/etc"));
    }

    #[test]
    fn test_extension_label_case_insensitive() {
        assert_eq!(extension_label(Path::new("a.py")), "Python script");
        assert_eq!(extension_label(Path::new("a.PY")), "Python script");
        assert_eq!(extension_label(Path::new("a.Md")), "Markdown");
    }

    #[test]
    fn test_extension_label_unknown() {
        assert_eq!(extension_label(Path::new("a.rs")), "File");
        assert_eq!(extension_label(Path::new("Makefile")), "File");
        assert_eq!(extension_label(Path::new(".profile")), "File");
    }

    #[test]
    fn test_describe_file_missing_stat() {
        assert_eq!(describe_file(Path::new("/no/such/file.py")), "File");
    }

    #[cfg(unix)]
    #[test]
    fn test_describe_file_executable_precedence() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.sh");
        File::create(&path).unwrap();

        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o644);
        fs::set_permissions(&path, perms.clone()).unwrap();
        assert_eq!(describe_file(&path), "Shell script");

        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        assert_eq!(describe_file(&path), "Executable");
    }
}
