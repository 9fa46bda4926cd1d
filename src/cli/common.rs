//! Common utilities shared across CLI commands.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Whether `path` is the `-` placeholder for stdin.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read all of stdin into a string.
pub fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut content)
        .context("failed to read stdin")?;
    Ok(content)
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        return read_stdin();
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_stdin() {
        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("./-")));
        assert!(!is_stdin(Path::new("posts.json")));
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(read_input(&path).unwrap(), "{}");

        let err = read_input(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
