//! Top-level CLI parsing and help output.

use crate::runtime::error::{XtaskError, XtaskResult};

/// Top-level `xtask` command families.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelCommand {
    Verify(Vec<String>),
    Playground(Vec<String>),
    Help,
}

/// Parse raw command-line arguments into a top-level command selection.
pub fn parse(args: Vec<String>) -> XtaskResult<TopLevelCommand> {
    let Some(cmd) = args.first().cloned() else {
        return Ok(TopLevelCommand::Help);
    };

    let rest = args[1..].to_vec();
    match cmd.as_str() {
        "verify" => Ok(TopLevelCommand::Verify(rest)),
        "playground" => Ok(TopLevelCommand::Playground(rest)),
        "help" | "--help" | "-h" => Ok(TopLevelCommand::Help),
        other => Err(XtaskError::validation(format!(
            "unknown xtask command: {other}"
        ))),
    }
}

const USAGE: &str = "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           verify [fast|full] [--package <name>]... [--profile <name>]\n\
                              Run formatting, lint, and test checks (default: full)\n\
           playground [--out <dir>] [--stories <file>]\n\
                              Export the component playground as static HTML + JSON manifest\n";

/// Print the top-level usage text.
pub fn print_usage() {
    eprintln!("{USAGE}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_show_help() {
        assert_eq!(parse(Vec::new()).expect("parse"), TopLevelCommand::Help);
    }

    #[test]
    fn known_commands_keep_their_arguments() {
        assert_eq!(
            parse(vec!["verify".into(), "fast".into()]).expect("parse"),
            TopLevelCommand::Verify(vec!["fast".into()])
        );
        assert_eq!(
            parse(vec!["playground".into()]).expect("parse"),
            TopLevelCommand::Playground(Vec::new())
        );
    }

    #[test]
    fn unknown_commands_are_validation_errors() {
        let err = parse(vec!["deploy".into()]).unwrap_err();
        assert!(err.to_string().contains("unknown xtask command: deploy"));
    }

    #[test]
    fn usage_lists_every_verify_option() {
        for flag in ["fast|full", "--package <name>", "--profile <name>"] {
            assert!(USAGE.contains(flag), "{flag}");
        }
    }
}
