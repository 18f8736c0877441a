//! Narrow views of the host the driver works against: the filesystem and
//! the command interpreter. Production code uses [`OsFileSystem`] and
//! [`SystemShell`]; tests substitute in-memory fakes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::app::error::CommandError;

pub trait FileSystem {
    /// Immediate children of `dir`, in listing order.
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
    fn is_dir(&self, path: &Path) -> bool;
    fn exists(&self, path: &Path) -> bool;
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

pub trait Shell {
    /// Runs `cmdline` to completion. `Ok(None)` means no exit code was
    /// reported (terminated by a signal).
    fn execute(&self, cmdline: &str) -> Result<Option<i32>, CommandError>;
}

pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            match entry {
                Ok(entry) => paths.push(entry.path()),
                Err(err) => log::warn!("Error reading entry in {}: {}", dir.display(), err),
            }
        }
        Ok(paths)
    }

    // Follows symlinks: a link to a directory is treated as a directory.
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    // Does not follow symlinks, so a dangling link still occupies the name.
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

/// The platform command interpreter, or an override from the config file.
pub struct SystemShell {
    program: String,
}

impl SystemShell {
    pub fn new(program: Option<String>) -> Self {
        Self {
            program: program.unwrap_or_else(|| default_shell().to_string()),
        }
    }
}

impl Shell for SystemShell {
    fn execute(&self, cmdline: &str) -> Result<Option<i32>, CommandError> {
        log::debug!("Spawning {} {} {:?}", self.program, command_flag(), cmdline);
        let mut command = Command::new(&self.program);
        command.arg(command_flag());
        push_cmdline(&mut command, cmdline);
        let status = command
            .status()
            .map_err(|source| CommandError::Spawn {
                shell: self.program.clone(),
                source,
            })?;
        Ok(status.code())
    }
}

#[cfg(windows)]
fn default_shell() -> &'static str {
    "cmd"
}

#[cfg(not(windows))]
fn default_shell() -> &'static str {
    "sh"
}

#[cfg(windows)]
fn command_flag() -> &'static str {
    "/C"
}

#[cfg(not(windows))]
fn command_flag() -> &'static str {
    "-c"
}

// cmd.exe parses its own command line, so the text is passed unquoted.
#[cfg(windows)]
fn push_cmdline(command: &mut Command, cmdline: &str) {
    use std::os::windows::process::CommandExt;
    command.raw_arg(cmdline);
}

#[cfg(not(windows))]
fn push_cmdline(command: &mut Command, cmdline: &str) {
    command.arg(cmdline);
}


#[cfg(all(test, windows))]
mod windows_tests {
    use super::*;

    #[test]
    fn quotes_reach_cmd_unchanged() {
        let shell = SystemShell::new(None);
        let cmdline = r#"if "a b"=="a b" (exit 0) else (exit 7)"#;
        assert_eq!(shell.execute(cmdline).unwrap(), Some(0));
    }
}
