use crate::app::error::ScanError;
use crate::app::host::FileSystem;
use crate::app::models::DirectoryEntry;
use std::path::PathBuf;

pub struct Scanner {
    root: PathBuf,
    keyword: String,
}

impl Scanner {
    pub fn new(root: PathBuf, keyword: &str) -> Self {
        Self {
            root,
            keyword: keyword.to_string(),
        }
    }

    /// Lists the immediate subdirectories of the root whose names contain the
    /// keyword, in the order the listing yields them. That order is platform
    /// dependent, so callers must not rely on it.
    pub fn scan(&self, fs: &dyn FileSystem) -> Result<Vec<DirectoryEntry>, ScanError> {
        let children = fs.list_dir(&self.root).map_err(|source| ScanError {
            path: self.root.clone(),
            source,
        })?;

        let matches = children
            .into_iter()
            .filter(|path| fs.is_dir(path))
            .map(DirectoryEntry::new)
            .filter(|entry| self.matches(&entry.name))
            .inspect(|entry| log::debug!("Matched folder: {}", entry.name))
            .collect();

        Ok(matches)
    }

    fn matches(&self, name: &str) -> bool {
        contains_keyword(name, &self.keyword)
    }
}

/// Case-insensitive substring test. Only ASCII letters are folded; other
/// characters must match exactly.
pub fn contains_keyword(folder_name: &str, keyword: &str) -> bool {
    folder_name
        .to_ascii_lowercase()
        .contains(&keyword.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::host::fake::FakeFileSystem;
    use std::path::Path;

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        let mut names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        names.sort();
        names
    }

    #[test]
    fn matching_ignores_ascii_case() {
        assert!(contains_keyword("Temp_Project", "temp"));
        assert!(contains_keyword("temp_project", "TEMP"));
        assert!(contains_keyword("OLD", "old"));
        assert!(!contains_keyword("project", "temp"));
    }

    #[test]
    fn matching_is_symmetric_under_case_changes() {
        for (name, kw) in [("Old_Backup", "bAck"), ("release-2024", "SE-2"), ("abc", "abcd")] {
            let expected = contains_keyword(name, kw);
            assert_eq!(contains_keyword(&name.to_uppercase(), &kw.to_uppercase()), expected);
            assert_eq!(contains_keyword(&name.to_lowercase(), &kw.to_uppercase()), expected);
        }
    }

    #[test]
    fn non_ascii_characters_must_match_exactly() {
        assert!(contains_keyword("Übung_temp", "Übung"));
        assert!(!contains_keyword("Übung_temp", "übung"));
    }

    #[test]
    fn scan_returns_only_matching_directories() {
        let root = Path::new("/work");
        let fs = FakeFileSystem::with_dirs(root, &["old_temp", "old_backup", "current", "OLDER"]);
        fs.add_file(root.join("old_notes.txt"));
        fs.add_file(Path::new("/work/current/old_nested").to_path_buf());

        let found = Scanner::new(root.to_path_buf(), "old").scan(&fs).unwrap();
        assert_eq!(names(&found), vec!["OLDER", "old_backup", "old_temp"]);
    }

    #[test]
    fn scan_with_no_matches_is_empty() {
        let root = Path::new("/work");
        let fs = FakeFileSystem::with_dirs(root, &["alpha", "beta"]);
        let found = Scanner::new(root.to_path_buf(), "xyz").scan(&fs).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn unlistable_root_is_a_scan_error() {
        let fs = FakeFileSystem::unlistable();
        let err = Scanner::new(PathBuf::from("/locked"), "x")
            .scan(&fs)
            .unwrap_err();
        assert_eq!(err.path, PathBuf::from("/locked"));
    }
}
