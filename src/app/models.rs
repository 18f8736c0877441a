use std::path::PathBuf;

/// Validated settings for a single run. A follow-up command runs only
/// when `command` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub keyword: String,
    pub new_name: String,
    pub command: Option<String>,
    pub verbose: bool,
}

impl Config {
    /// Serializes back into the argument list that produced this config.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "-k".to_string(),
            self.keyword.clone(),
            "-n".to_string(),
            self.new_name.clone(),
        ];
        if let Some(command) = &self.command {
            args.push("-c".to_string());
            args.push(command.clone());
        }
        if self.verbose {
            args.push("-v".to_string());
        }
        args
    }
}

/// A directory found directly under the scanned root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
}

impl DirectoryEntry {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// Terminal result of one run. Drives the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NoMatch,
    AmbiguousMatch(usize),
    Renamed { old: String, new: String },
    RenameFailed(String),
    /// The rename went through but the follow-up command did not succeed.
    /// `None` means the command ended without an exit code.
    CommandFailed(Option<i32>),
}

impl RunOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::NoMatch | RunOutcome::Renamed { .. } => 0,
            RunOutcome::AmbiguousMatch(_)
            | RunOutcome::RenameFailed(_)
            | RunOutcome::CommandFailed(_) => 1,
        }
    }
}
