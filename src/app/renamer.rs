use crate::app::host::FileSystem;
use crate::app::models::{DirectoryEntry, RunOutcome};
use std::path::{Path, PathBuf};

pub const TARGET_EXISTS: &str = "target exists";

/// Applies the single-match rule: nothing to do for zero matches, refuse
/// to guess between several, and rename only when exactly one folder
/// matched and the target name is free.
pub struct Renamer<'a> {
    fs: &'a dyn FileSystem,
    root: PathBuf,
}

impl<'a> Renamer<'a> {
    pub fn new(fs: &'a dyn FileSystem, root: &Path) -> Self {
        Self {
            fs,
            root: root.to_path_buf(),
        }
    }

    pub fn execute(&self, matches: &[DirectoryEntry], new_name: &str) -> RunOutcome {
        let entry = match matches {
            [] => return RunOutcome::NoMatch,
            [entry] => entry,
            _ => return RunOutcome::AmbiguousMatch(matches.len()),
        };

        let target = self.root.join(new_name);
        if self.fs.exists(&target) {
            log::debug!("Target {} already exists", target.display());
            return RunOutcome::RenameFailed(TARGET_EXISTS.to_string());
        }

        match self.fs.rename(&entry.path, &target) {
            Ok(()) => RunOutcome::Renamed {
                old: entry.name.clone(),
                new: new_name.to_string(),
            },
            Err(err) => RunOutcome::RenameFailed(err.to_string()),
        }
    }
}
