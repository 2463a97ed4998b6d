//! Name loading from a directory of text files

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{GreetError, Result};

/// A first name and the file it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    /// First whitespace token of the file's first line
    pub name: String,
    /// Source file
    pub source: PathBuf,
}

/// Reads one first name per matching file under a directory
#[derive(Debug, Clone)]
pub struct NameLoader {
    dir: PathBuf,
    pattern: String,
}

impl NameLoader {
    /// Loader for `dir` using the default `*.txt` pattern
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            pattern: crate::DEFAULT_PATTERN.to_string(),
        }
    }

    /// Replace the file name pattern
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Load a record for every matching file, sorted by path
    pub fn load(&self) -> Result<Vec<NameRecord>> {
        let meta = fs::metadata(&self.dir).map_err(|source| GreetError::Path {
            path: self.dir.clone(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(GreetError::NotADirectory { path: self.dir.clone() });
        }
        let pattern = glob::Pattern::new(&self.pattern).map_err(|source| GreetError::Pattern {
            pattern: self.pattern.clone(),
            source,
        })?;
        let path_err = |source: std::io::Error| GreetError::Path {
            path: self.dir.clone(),
            source,
        };

        // Only entries directly under dir; the pattern matches file names, never paths
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(path_err)? {
            let entry = entry.map_err(path_err)?;
            if pattern.matches(&entry.file_name().to_string_lossy()) {
                paths.push(entry.path());
            }
        }
        paths.sort();

        let mut records = Vec::new();
        for path in paths {
            if !path.is_file() {
                debug!("Skipping non-file entry: {}", path.display());
                continue;
            }
            let name = read_first_name(&path)?;
            debug!("Loaded name {} from {}", name, path.display());
            records.push(NameRecord { name, source: path });
        }

        info!("Loaded {} names from {}", records.len(), self.dir.display());
        Ok(records)
    }

    /// Load just the names
    pub fn load_names(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_iter().map(|r| r.name).collect())
    }
}

/// First whitespace-delimited token of `line`, if any
pub fn first_name(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

fn read_first_name(path: &Path) -> Result<String> {
    let read_err = |reason: String| GreetError::Read {
        path: path.to_path_buf(),
        reason,
    };

    let file = fs::File::open(path).map_err(|e| read_err(e.to_string()))?;
    let mut line = String::new();
    let n = BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| read_err(e.to_string()))?;
    if n == 0 {
        return Err(read_err("file is empty".to_string()));
    }

    first_name(line.strip_prefix('\u{feff}').unwrap_or(&line))
        .map(str::to_string)
        .ok_or_else(|| read_err("first line is blank".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, file: &str, content: &str) {
        fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("Alice Smith\n"), Some("Alice"));
        assert_eq!(first_name("  \tBob  "), Some("Bob"));
        assert_eq!(first_name("Cher"), Some("Cher"));
        assert_eq!(first_name("   \n"), None);
        assert_eq!(first_name(""), None);
    }

    #[test]
    fn test_load_first_tokens() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.txt", "Alice Smith\nsecond line\n");
        write(temp.path(), "b.txt", "Bob Jones\n");

        let names = NameLoader::new(temp.path()).load_names().unwrap();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_load_records_sources() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "carol.txt", "Carol");

        let records = NameLoader::new(temp.path()).load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Carol");
        assert_eq!(records[0].source.file_name().unwrap(), "carol.txt");
    }

    #[test]
    fn test_empty_dir_is_ok() {
        let temp = TempDir::new().unwrap();
        let names = NameLoader::new(temp.path()).load_names().unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_missing_dir_is_path_error() {
        let temp = TempDir::new().unwrap();
        let err = NameLoader::new(temp.path().join("nope")).load().unwrap_err();
        assert!(matches!(err, GreetError::Path { .. }));
    }

    #[test]
    fn test_file_as_dir_is_rejected() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.txt", "Alice");
        let err = NameLoader::new(temp.path().join("a.txt")).load().unwrap_err();
        assert!(matches!(err, GreetError::NotADirectory { .. }));
    }

    #[test]
    fn test_empty_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "empty.txt", "");
        let err = NameLoader::new(temp.path()).load().unwrap_err();
        match err {
            GreetError::Read { path, .. } => assert!(path.ends_with("empty.txt")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_first_line_is_read_error() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "blank.txt", "   \nAlice\n");
        let err = NameLoader::new(temp.path()).load().unwrap_err();
        assert!(matches!(err, GreetError::Read { .. }));
    }

    #[test]
    fn test_pattern_filters_files() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.txt", "Alice");
        write(temp.path(), "notes.md", "Ignored");
        write(temp.path(), "b.name", "Bob");

        let names = NameLoader::new(temp.path()).load_names().unwrap();
        assert_eq!(names, vec!["Alice"]);

        let names = NameLoader::new(temp.path()).with_pattern("*.name").load_names().unwrap();
        assert_eq!(names, vec!["Bob"]);
    }

    #[test]
    fn test_subdirectories_skipped() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.txt", "Alice");
        fs::create_dir(temp.path().join("dir.txt")).unwrap();
        write(&temp.path().join("dir.txt"), "inner.txt", "Nested");

        let names = NameLoader::new(temp.path()).load_names().unwrap();
        assert_eq!(names, vec!["Alice"]);
    }

    #[test]
    fn test_pattern_cannot_reach_into_subdirectories() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.txt", "Alice");
        fs::create_dir(temp.path().join("sub")).unwrap();
        write(&temp.path().join("sub"), "x.txt", "Nested");

        for pattern in ["*/*.txt", "**/*.txt", "sub/x.txt", "../*.txt"] {
            let names = NameLoader::new(temp.path()).with_pattern(pattern).load_names().unwrap();
            assert!(!names.contains(&"Nested".to_string()), "pattern {pattern} matched {names:?}");
        }
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.txt", "\u{feff}Alice Smith\n");

        let names = NameLoader::new(temp.path()).load_names().unwrap();
        assert_eq!(names, vec!["Alice"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "1.txt", "Sam Smith");
        write(temp.path(), "2.txt", "Sam Jones");

        let names = NameLoader::new(temp.path()).load_names().unwrap();
        assert_eq!(names, vec!["Sam", "Sam"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let temp = TempDir::new().unwrap();
        let err = NameLoader::new(temp.path()).with_pattern("[").load().unwrap_err();
        assert!(matches!(err, GreetError::Pattern { .. }));
    }
}
