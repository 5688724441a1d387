use crate::runtime::config::ConfigLoader;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use serde::Deserialize;
use std::collections::BTreeMap;

pub(super) const VERIFY_PROFILES_FILE: &str = "tools/automation/verify_profiles.toml";

#[derive(Clone, Debug, Deserialize)]
struct VerifyProfilesFile {
    profile: BTreeMap<String, VerifyProfileSpec>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct VerifyProfileSpec {
    pub(super) mode: String,
    #[serde(default)]
    pub(super) packages: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum VerifyMode {
    Fast,
    Full,
}

impl VerifyMode {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Full => "full",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyOptions {
    pub(crate) mode: VerifyMode,
    pub(crate) explicit_mode: bool,
    pub(crate) packages: Vec<String>,
    pub(crate) profile: Option<String>,
    pub(crate) show_help: bool,
}

pub(super) fn load_verify_profiles(
    ctx: &CommandContext,
) -> XtaskResult<BTreeMap<String, VerifyProfileSpec>> {
    let loader = ConfigLoader::<VerifyProfilesFile>::new(ctx.root(), VERIFY_PROFILES_FILE);
    let parsed = loader.load()?;
    if parsed.profile.is_empty() {
        return Err(
            XtaskError::config("verify profile file does not define any profiles")
                .with_path(loader.path()),
        );
    }
    Ok(parsed.profile)
}

fn resolve_verify_profile(
    profile_name: &str,
    profiles: &BTreeMap<String, VerifyProfileSpec>,
) -> XtaskResult<(VerifyMode, Vec<String>)> {
    let Some(profile) = profiles.get(profile_name) else {
        return Err(XtaskError::config(format!(
            "unknown verify profile `{profile_name}` (known: {})",
            verify_profile_names(profiles)
        )));
    };

    let mode = match profile.mode.as_str() {
        "fast" => VerifyMode::Fast,
        "full" => VerifyMode::Full,
        other => {
            return Err(XtaskError::config(format!(
                "verify profile `{profile_name}` has invalid mode `{other}` (expected `fast` or `full`)"
            )))
        }
    };

    Ok((mode, profile.packages.clone()))
}

pub(super) fn resolve_verify_options_from_profile(
    mut options: VerifyOptions,
    profiles: &BTreeMap<String, VerifyProfileSpec>,
) -> XtaskResult<VerifyOptions> {
    let Some(profile_name) = options.profile.clone() else {
        return Ok(options);
    };
    if options.explicit_mode {
        return Err(XtaskError::validation(
            "`--profile` cannot be combined with `fast`/`full` positional mode",
        ));
    }
    if !options.packages.is_empty() {
        return Err(XtaskError::validation(
            "`--profile` cannot be combined with `--package`",
        ));
    }
    let (mode, packages) = resolve_verify_profile(&profile_name, profiles)?;
    println!(
        "\n==> Verify profile selected: `{profile_name}` (mode={}, packages={})",
        mode.label(),
        if packages.is_empty() {
            "workspace".to_string()
        } else {
            packages.join(",")
        }
    );
    options.mode = mode;
    options.packages = packages;
    Ok(options)
}

fn verify_profile_names(profiles: &BTreeMap<String, VerifyProfileSpec>) -> String {
    profiles.keys().cloned().collect::<Vec<_>>().join(", ")
}

pub(super) fn print_verify_usage(profiles: Option<&BTreeMap<String, VerifyProfileSpec>>) {
    let profile_list = profiles
        .map(verify_profile_names)
        .unwrap_or_else(|| "<unavailable>".to_string());
    eprintln!(
        "Usage: cargo xtask verify [fast|full] [--package <name>]... [--profile <name>]\n\
         \n\
         Modes:\n\
           fast                fmt check + tests\n\
           full                fmt check + clippy + tests + docs (default)\n\
         \n\
         Profiles ({VERIFY_PROFILES_FILE}):\n\
           {profile_list}\n\
         \n\
         Notes:\n\
           - `--profile` cannot be combined with an explicit mode or `--package`.\n"
    );
}

pub(super) fn parse_verify_options(args: Vec<String>) -> XtaskResult<VerifyOptions> {
    let mut options = VerifyOptions {
        mode: VerifyMode::Full,
        explicit_mode: false,
        packages: Vec::new(),
        profile: None,
        show_help: false,
    };
    let mut i = 0usize;

    if let Some(first) = args.first().map(String::as_str) {
        match first {
            "fast" => {
                options.mode = VerifyMode::Fast;
                options.explicit_mode = true;
                i = 1;
            }
            "full" => {
                options.mode = VerifyMode::Full;
                options.explicit_mode = true;
                i = 1;
            }
            _ => {}
        }
    }

    while i < args.len() {
        match args[i].as_str() {
            "--package" | "-p" => {
                let Some(package) = args.get(i + 1) else {
                    return Err(XtaskError::validation("missing value for `--package`"));
                };
                options.packages.push(package.clone());
                i += 2;
            }
            "--profile" => {
                let Some(profile) = args.get(i + 1) else {
                    return Err(XtaskError::validation("missing value for `--profile`"));
                };
                options.profile = Some(profile.clone());
                i += 2;
            }
            "help" | "--help" | "-h" => {
                options.show_help = true;
                i += 1;
            }
            other => {
                return Err(XtaskError::validation(format!(
                    "unsupported `cargo xtask verify` argument `{other}` (expected `fast`, `full`, `--package`, `--profile`)"
                )));
            }
        }
    }

    Ok(options)
}
