// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod host;
pub mod models;
pub mod renamer;
pub mod runner;
pub mod scanner;

use anyhow::{Context, Result};
use std::env;
use std::io::{self, Write};
use std::path::Path;

use self::cli::Parsed;
use self::config::{load_defaults, resolve_config};
use self::error::ParseError;
use self::formatter::Messages;
use self::host::{FileSystem, OsFileSystem, Shell, SystemShell};
use self::models::{Config, RunOutcome};
use self::renamer::Renamer;
use self::runner::CommandStatus;
use self::scanner::Scanner;

/// Parses arguments, wires up the host and runs once. Returns the process
/// exit code.
pub fn run() -> Result<u8> {
    // 1. Parse Args
    let cli = match cli::parse(env::args_os()) {
        Ok(Parsed::Run(cli)) => cli,
        Ok(Parsed::Help(text)) => {
            print!("{}", text);
            return Ok(0);
        }
        Err(err) => {
            report_parse_error(&err);
            return Ok(1);
        }
    };

    // 2. Resolve Configuration
    let defaults = load_defaults()?;
    let config = resolve_config(cli, &defaults);
    init_logging(config.verbose);
    log::debug!(
        "Resolved arguments: {:?} (shell override: {:?})",
        config.to_args(),
        defaults.shell
    );

    // 3. Scan, rename and follow up
    let root = env::current_dir().context("Failed to get current directory")?;
    let shell = SystemShell::new(defaults.shell);
    let outcome = execute(
        &config,
        &root,
        &OsFileSystem,
        &shell,
        &mut io::stdout(),
        &mut io::stderr(),
    )?;

    log::debug!("Outcome: {}", Messages::summary(&outcome));
    Ok(outcome.exit_code())
}

fn report_parse_error(err: &ParseError) {
    match err {
        ParseError::Invalid(rendered) => eprintln!("{}", rendered),
        ParseError::RequiredMissing => {
            eprintln!("Error: {}", err);
            eprintln!("{}", cli::usage());
        }
        _ => eprintln!("Error: {}", err),
    }
}

/// One-time console setup. `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,folder_rename=debug"
    } else {
        "warn"
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

/// Scans `root` for the keyword, applies the single-match rule and runs the
/// follow-up command after a successful rename. A failed command never
/// undoes the rename.
pub fn execute(
    config: &Config,
    root: &Path,
    fs: &dyn FileSystem,
    shell: &dyn Shell,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<RunOutcome> {
    if config.verbose {
        writeln!(out, "{}", Messages::preamble(config))?;
    }

    let matches = Scanner::new(root.to_path_buf(), &config.keyword).scan(fs)?;
    if config.verbose {
        for entry in &matches {
            writeln!(out, "{}", Messages::found(entry))?;
        }
    }

    let outcome = Renamer::new(fs, root).execute(&matches, &config.new_name);
    match &outcome {
        RunOutcome::NoMatch => {
            writeln!(out, "{}", Messages::no_match(&config.keyword))?;
            return Ok(outcome);
        }
        RunOutcome::AmbiguousMatch(count) => {
            writeln!(out, "{}", Messages::ambiguous(*count))?;
            return Ok(outcome);
        }
        RunOutcome::RenameFailed(reason) => {
            writeln!(err, "{}", Messages::rename_failed(&config.new_name, reason))?;
            return Ok(outcome);
        }
        RunOutcome::Renamed { old, new } => writeln!(out, "{}", Messages::renamed(old, new))?,
        RunOutcome::CommandFailed(_) => return Ok(outcome),
    }

    if let Some(command) = config.command.as_deref() {
        writeln!(out, "{}", Messages::running_command())?;
        if let CommandStatus::Failed(code) = runner::run(shell, command, config.verbose, out, err)? {
            return Ok(RunOutcome::CommandFailed(code));
        }
    }

    if config.verbose {
        writeln!(out, "{}", Messages::done())?;
    }

    Ok(outcome)
}
