//! Shared process execution helpers.

use crate::runtime::error::{XtaskError, XtaskResult};
use std::env;
use std::path::Path;
use std::process::{Command, Stdio};

/// Shared process runner used by command modules.
///
/// Commands are echoed as `+ program args` before they run, inherit the terminal stdio
/// streams, and have their failures mapped onto [`XtaskError`] categories.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a process runner.
    pub fn new() -> Self {
        Self
    }

    /// Return whether the given program answers `--version`.
    pub fn command_available(&self, program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Require a command to exist.
    pub fn ensure_command(&self, program: &str, hint: &str) -> XtaskResult<()> {
        if self.command_available(program) {
            Ok(())
        } else {
            Err(XtaskError::environment(format!(
                "required command `{program}` not found"
            ))
            .with_hint(hint))
        }
    }

    /// Run a process with owned string arguments.
    ///
    /// Non-zero exits become
    /// [`XtaskError::process_exit`](crate::runtime::error::XtaskError::process_exit).
    pub fn run_owned(&self, root: &Path, program: &str, args: Vec<String>) -> XtaskResult<()> {
        self.print_command(program, &args);
        let mut cmd = Command::new(program);
        cmd.current_dir(root).args(&args);
        if let Some(value) = normalized_no_color_value(env::var("NO_COLOR").ok().as_deref()) {
            cmd.env("NO_COLOR", value);
        }

        let status = cmd.status().map_err(|err| {
            XtaskError::process_launch(format!("failed to start `{program}`: {err}"))
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(XtaskError::process_exit(format!(
                "`{program}` exited with status {status}"
            )))
        }
    }

    /// Print a process invocation in a stable format.
    pub fn print_command(&self, program: &str, args: &[String]) {
        println!("{}", format_command(program, args));
    }
}

fn format_command(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        format!("+ {program}")
    } else {
        format!("+ {program} {}", args.join(" "))
    }
}

/// Cargo rejects `NO_COLOR=1`-style numeric values in some subcommands; map them to `true`.
fn normalized_no_color_value(raw: Option<&str>) -> Option<&'static str> {
    match raw {
        Some("1") => Some("true"),
        _ => None,
    }
}
