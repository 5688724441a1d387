use super::config::VerifyMode;
use crate::runtime::context::CommandContext;
use crate::runtime::error::XtaskResult;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct VerifyStep {
    pub(super) label: &'static str,
    pub(super) args: Vec<String>,
}

fn step(label: &'static str, args: Vec<String>) -> VerifyStep {
    VerifyStep { label, args }
}

fn package_scope(packages: &[String]) -> Vec<String> {
    if packages.is_empty() {
        return vec!["--workspace".to_string()];
    }
    packages
        .iter()
        .flat_map(|package| ["-p".to_string(), package.clone()])
        .collect()
}

fn cargo_args(head: &[&str], scope: &[String], tail: &[&str]) -> Vec<String> {
    head.iter()
        .map(ToString::to_string)
        .chain(scope.iter().cloned())
        .chain(tail.iter().map(ToString::to_string))
        .collect()
}

pub(super) fn verify_steps(mode: VerifyMode, packages: &[String]) -> Vec<VerifyStep> {
    let scope = package_scope(packages);
    let mut steps = vec![step(
        "Format check",
        cargo_args(&["fmt", "--all"], &[], &["--", "--check"]),
    )];
    if mode == VerifyMode::Full {
        steps.push(step(
            "Clippy",
            cargo_args(&["clippy"], &scope, &["--all-targets", "--", "-D", "warnings"]),
        ));
    }
    steps.push(step("Tests", cargo_args(&["test"], &scope, &[])));
    if mode == VerifyMode::Full {
        steps.push(step(
            "Rustdoc",
            cargo_args(&["doc"], &scope, &["--no-deps"]),
        ));
    }
    steps
}

pub(super) fn run_verify(
    ctx: &CommandContext,
    mode: VerifyMode,
    packages: &[String],
) -> XtaskResult<()> {
    ctx.process()
        .ensure_command("cargo", "install a Rust toolchain with rustup")?;

    for step in verify_steps(mode, packages) {
        println!("\n==> {}", step.label);
        ctx.process()
            .run_owned(ctx.root(), "cargo", step.args)
            .map_err(|err| err.with_operation(format!("verify {}", step.label)))?;
    }

    println!("\n==> verify {} passed", mode.label());
    Ok(())
}
