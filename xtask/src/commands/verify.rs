//! Formatting, lint, and test verification workflow.

mod config;
mod run;

use crate::runtime::context::CommandContext;
use crate::runtime::error::XtaskResult;
use crate::XtaskCommand;
use config::{
    load_verify_profiles, parse_verify_options, print_verify_usage,
    resolve_verify_options_from_profile, VerifyOptions,
};
use run::run_verify;

/// `cargo xtask verify`
pub struct VerifyCommand;

impl XtaskCommand for VerifyCommand {
    type Options = VerifyOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        parse_verify_options(args.to_vec())
    }

    fn run(ctx: &CommandContext, mut options: Self::Options) -> XtaskResult<()> {
        if options.show_help {
            let profiles = load_verify_profiles(ctx).ok();
            print_verify_usage(profiles.as_ref());
            return Ok(());
        }

        if options.profile.is_some() {
            let profiles = load_verify_profiles(ctx)?;
            options = resolve_verify_options_from_profile(options, &profiles)?;
        }
        run_verify(ctx, options.mode, &options.packages)
    }
}
