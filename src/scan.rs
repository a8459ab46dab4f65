//! Directory listing for note files.

use std::io;
use std::path::Path;

/// Lists the regular files in `dir` whose name ends in one of `suffixes`
/// (given with the leading dot, e.g. `".md"`).
///
/// Names come back verbatim from the filesystem, sorted so a run's
/// ordering is deterministic. Non-UTF-8 names are skipped with a warning.
pub fn list_notes(dir: &Path, suffixes: &[&str]) -> io::Result<Vec<String>> {
    let mut notes = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                log::warn!("skipping note with non-UTF-8 name: {:?}", raw);
                continue;
            }
        };

        if suffixes.iter().any(|suffix| has_suffix(&name, suffix)) {
            notes.push(name);
        }
    }

    notes.sort();
    Ok(notes)
}

/// True when `name` carries `suffix` as its extension. A bare dotfile like
/// `".md"` has no extension and does not match.
fn has_suffix(name: &str, suffix: &str) -> bool {
    name.len() > suffix.len() && name.ends_with(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_lists_only_matching_suffixes() {
        let dir = tempdir().unwrap();
        for name in ["a.md", "b.md", "c.txt", "notes.json"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let notes = list_notes(dir.path(), &[".md"]).unwrap();
        assert_eq!(notes, ["a.md", "b.md"]);
    }

    #[test]
    fn test_multiple_suffixes() {
        let dir = tempdir().unwrap();
        for name in ["a.md", "b.txt", "c.rst"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let notes = list_notes(dir.path(), &[".md", ".txt"]).unwrap();
        assert_eq!(notes, ["a.md", "b.txt"]);
    }

    #[test]
    fn test_directories_are_ignored() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "x").unwrap();
        fs::create_dir(dir.path().join("subfolder.md")).unwrap();

        let notes = list_notes(dir.path(), &[".md"]).unwrap();
        assert_eq!(notes, ["a.md"]);
    }

    #[test]
    fn test_output_is_sorted() {
        let dir = tempdir().unwrap();
        for name in ["zz.md", "aa.md", "mm.md"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let notes = list_notes(dir.path(), &[".md"]).unwrap();
        assert_eq!(notes, ["aa.md", "mm.md", "zz.md"]);
    }

    #[test]
    fn test_bare_dotfile_does_not_match() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".md"), "x").unwrap();
        fs::write(dir.path().join("real.md"), "x").unwrap();

        let notes = list_notes(dir.path(), &[".md"]).unwrap();
        assert_eq!(notes, ["real.md"]);
    }
}
