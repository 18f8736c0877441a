use crate::app::formatter::Messages;
use crate::app::host::Shell;
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failed(Option<i32>),
}

/// Runs the follow-up command through the shell and blocks until it ends.
/// Its output streams are inherited, never captured.
pub fn run(
    shell: &dyn Shell,
    command: &str,
    verbose: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<CommandStatus> {
    if verbose {
        writeln!(out, "{}", Messages::executing(command))?;
        out.flush()?;
    }

    let code = shell.execute(command)?;

    if code == Some(0) {
        if verbose {
            writeln!(out, "{}", Messages::command_succeeded())?;
        }
        Ok(CommandStatus::Success)
    } else {
        writeln!(err, "{}", Messages::command_failed(code))?;
        Ok(CommandStatus::Failed(code))
    }
}
