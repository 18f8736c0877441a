use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::ffi::OsString;

use crate::app::error::ParseError;

#[derive(Parser, Debug)]
#[command(
    name = "folder_rename",
    author,
    about = "Rename the single folder in the current directory whose name contains a keyword",
    args_override_self = true,
    after_help = "Examples:\n  folder_rename -k \"old\" -n \"new\"\n  folder_rename -k \"temp\" -n \"final\" -c \"echo done\""
)]
pub struct Cli {
    /// Keyword to search for in folder names (required)
    #[arg(short, long, value_name = "KEYWORD", allow_hyphen_values = true)]
    pub keyword: Option<String>,

    /// Target name for the rename (required)
    #[arg(short = 'n', long = "newname", value_name = "NEW_NAME", allow_hyphen_values = true)]
    pub new_name: Option<String>,

    /// Shell command to run after a successful rename
    #[arg(short, long, value_name = "COMMAND", allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Show progress and diagnostic output
    #[arg(short, long)]
    pub verbose: bool,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Parsed {
    Run(Cli),
    /// Help text, already rendered.
    Help(String),
}

/// Parses raw arguments (program name first). Help is a successful parse;
/// everything clap rejects is turned into a `ParseError`.
pub fn parse<I, T>(args: I) -> Result<Parsed, ParseError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    check_tokens(&args)?;

    match Cli::try_parse_from(args) {
        Ok(cli) => {
            let missing = |v: &Option<String>| v.as_deref().map_or(true, str::is_empty);
            if missing(&cli.keyword) || missing(&cli.new_name) {
                return Err(ParseError::RequiredMissing);
            }
            Ok(Parsed::Run(cli))
        }
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp => Ok(Parsed::Help(err.render().to_string())),
            ErrorKind::UnknownArgument => Err(ParseError::UnknownOption(invalid_arg(&err))),
            ErrorKind::InvalidValue if err.get(ContextKind::InvalidValue).is_some_and(is_empty) => {
                Err(ParseError::MissingValue(invalid_arg(&err)))
            }
            _ => Err(ParseError::Invalid(err.render().to_string().trim_end().to_string())),
        },
    }
}

/// Rejects anything clap would accept that is not one of the exact option
/// spellings: attached values (`-ktemp`, `--keyword=temp`), bundled short
/// flags (`-vk`) and stray positionals. Stops at the first help flag.
fn check_tokens(args: &[OsString]) -> Result<(), ParseError> {
    let mut tokens = args.iter().skip(1);
    while let Some(token) = tokens.next() {
        match token.to_string_lossy().as_ref() {
            "-h" | "--help" => return Ok(()),
            "-v" | "--verbose" => {}
            "-k" | "--keyword" | "-n" | "--newname" | "-c" | "--command" => {
                tokens.next();
            }
            other => return Err(ParseError::UnknownOption(other.to_string())),
        }
    }
    Ok(())
}

/// Help text printed next to parse errors.
pub fn usage() -> String {
    use clap::CommandFactory;
    Cli::command().render_help().to_string()
}

fn invalid_arg(err: &clap::Error) -> String {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn is_empty(value: &ContextValue) -> bool {
    matches!(value, ContextValue::String(s) if s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<Cli, ParseError> {
        let argv = std::iter::once("folder_rename").chain(args.iter().copied());
        match parse(argv)? {
            Parsed::Run(cli) => Ok(cli),
            Parsed::Help(_) => panic!("unexpected help"),
        }
    }

    #[test]
    fn parses_short_and_long_forms() {
        let cli = run(&["-k", "temp", "--newname", "final", "--command", "echo hi", "-v"]).unwrap();
        assert_eq!(cli.keyword.as_deref(), Some("temp"));
        assert_eq!(cli.new_name.as_deref(), Some("final"));
        assert_eq!(cli.command.as_deref(), Some("echo hi"));
        assert!(cli.verbose);
    }

    #[test]
    fn help_short_circuits() {
        let argv = ["folder_rename", "-k", "x", "--help", "--bogus"];
        assert!(matches!(parse(argv), Ok(Parsed::Help(text)) if text.contains("--newname")));
    }

    #[test]
    fn missing_value_names_the_option() {
        let err = run(&["-n", "final", "-k"]).unwrap_err();
        assert!(matches!(err, ParseError::MissingValue(ref opt) if opt.contains("--keyword")));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let err = run(&["-k", "a", "-n", "b", "--frobnicate"]).unwrap_err();
        assert!(matches!(err, ParseError::UnknownOption(ref opt) if opt == "--frobnicate"));
    }

    #[test]
    fn required_fields_are_enforced() {
        assert_eq!(run(&["-k", "temp"]).unwrap_err(), ParseError::RequiredMissing);
        assert_eq!(run(&["-n", "final"]).unwrap_err(), ParseError::RequiredMissing);
        assert_eq!(run(&["-k", "", "-n", "final"]).unwrap_err(), ParseError::RequiredMissing);
    }

    #[test]
    fn last_occurrence_wins() {
        let cli = run(&["-k", "one", "-k", "two", "-n", "x"]).unwrap();
        assert_eq!(cli.keyword.as_deref(), Some("two"));
    }

    #[test]
    fn attached_values_are_rejected() {
        let err = run(&["-ktemp", "-n", "final"]).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("-ktemp".into()));

        let err = run(&["--keyword=temp", "-n", "final"]).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("--keyword=temp".into()));
    }

    #[test]
    fn bundled_short_flags_are_rejected() {
        let err = run(&["-vk", "temp", "-n", "final"]).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("-vk".into()));
    }

    #[test]
    fn stray_positional_is_rejected() {
        let err = run(&["-k", "temp", "final"]).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("final".into()));
    }

    #[test]
    fn values_may_start_with_a_dash() {
        let cli = run(&["-k", "-old", "-n", "new"]).unwrap();
        assert_eq!(cli.keyword.as_deref(), Some("-old"));
    }
}
