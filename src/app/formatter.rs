use crate::app::models::{Config, DirectoryEntry, RunOutcome};

pub struct Messages;

impl Messages {
    pub fn preamble(config: &Config) -> String {
        let mut out = String::from("Starting...\n");
        out.push_str(&format!("Keyword: {}\n", config.keyword));
        out.push_str(&format!("New name: {}\n", config.new_name));
        if let Some(command) = &config.command {
            out.push_str(&format!("Follow-up command: {}\n", command));
        }
        out.push_str("------------------------");
        out
    }

    pub fn found(entry: &DirectoryEntry) -> String {
        format!("Found matching folder: {}", entry.name)
    }

    pub fn no_match(keyword: &str) -> String {
        format!("No folder containing keyword \"{}\" was found", keyword)
    }

    pub fn ambiguous(count: usize) -> String {
        format!(
            "Warning: found {} matching folders, but only one can be renamed per run\n\
             Please use a more specific keyword",
            count
        )
    }

    pub fn renamed(old: &str, new: &str) -> String {
        format!("Renamed: {} -> {}", old, new)
    }

    pub fn rename_failed(new_name: &str, reason: &str) -> String {
        if reason == crate::app::renamer::TARGET_EXISTS {
            format!("Error: target name \"{}\" already exists", new_name)
        } else {
            format!("Error: failed to rename to \"{}\": {}", new_name, reason)
        }
    }

    pub fn running_command() -> &'static str {
        "\nRunning follow-up command..."
    }

    pub fn executing(command: &str) -> String {
        format!("Executing: {}", command)
    }

    pub fn command_succeeded() -> &'static str {
        "Command succeeded"
    }

    pub fn command_failed(code: Option<i32>) -> String {
        match code {
            Some(code) => format!("Command failed (exit code: {})", code),
            None => "Command failed (terminated without an exit code)".to_string(),
        }
    }

    pub fn done() -> &'static str {
        "\nDone!"
    }

    /// One-line summary of an outcome, used for debug logging.
    pub fn summary(outcome: &RunOutcome) -> String {
        match outcome {
            RunOutcome::NoMatch => "no match".to_string(),
            RunOutcome::AmbiguousMatch(n) => format!("ambiguous ({} matches)", n),
            RunOutcome::Renamed { old, new } => format!("renamed {} -> {}", old, new),
            RunOutcome::RenameFailed(reason) => format!("rename failed: {}", reason),
            RunOutcome::CommandFailed(code) => format!("command failed: {:?}", code),
        }
    }
}
