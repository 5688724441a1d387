//! Static export of the component playground.

use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;
use control_playground::{catalog, export_html, export_manifest, load_stories, Story};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OUT_DIR: &str = "target/playground";

/// Options for `cargo xtask playground`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PlaygroundOptions {
    out_dir: Option<PathBuf>,
    stories: Option<PathBuf>,
    show_help: bool,
}

/// `cargo xtask playground`
pub struct PlaygroundCommand;

impl XtaskCommand for PlaygroundCommand {
    type Options = PlaygroundOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        let mut options = PlaygroundOptions::default();
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--out" => {
                    let Some(dir) = args.get(i + 1) else {
                        return Err(XtaskError::validation("missing value for `--out`"));
                    };
                    options.out_dir = Some(PathBuf::from(dir));
                    i += 2;
                }
                "--stories" => {
                    let Some(file) = args.get(i + 1) else {
                        return Err(XtaskError::validation("missing value for `--stories`"));
                    };
                    options.stories = Some(PathBuf::from(file));
                    i += 2;
                }
                "help" | "--help" | "-h" => {
                    options.show_help = true;
                    i += 1;
                }
                other => {
                    return Err(XtaskError::validation(format!(
                        "unsupported `cargo xtask playground` argument `{other}` (expected `--out`, `--stories`)"
                    )));
                }
            }
        }
        Ok(options)
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        if options.show_help {
            print_playground_usage();
            return Ok(());
        }

        let stories = match &options.stories {
            Some(path) => read_stories(&ctx.root().join(path))?,
            None => catalog(),
        };
        let out_dir = ctx
            .root()
            .join(options.out_dir.as_deref().unwrap_or(Path::new(DEFAULT_OUT_DIR)));

        println!("\n==> Exporting {} playground stories", stories.len());
        write_artifact(&out_dir, "index.html", &export_html(&stories))?;
        write_artifact(&out_dir, "catalog.json", &export_manifest(&stories)?)?;
        println!("==> Playground written to {}", out_dir.display());
        Ok(())
    }
}

fn read_stories(path: &Path) -> XtaskResult<Vec<Story>> {
    let body = fs::read_to_string(path).map_err(|err| {
        XtaskError::io(format!("failed to read stories: {err}")).with_path(path)
    })?;
    load_stories(&body).map_err(|err| {
        XtaskError::from(err)
            .with_path(path)
            .with_operation("load playground stories")
    })
}

fn write_artifact(dir: &Path, name: &str, body: &str) -> XtaskResult<()> {
    fs::create_dir_all(dir).map_err(|err| {
        XtaskError::io(format!("failed to create output directory: {err}")).with_path(dir)
    })?;
    let path = dir.join(name);
    fs::write(&path, body).map_err(|err| {
        XtaskError::io(format!("failed to write artifact: {err}")).with_path(&path)
    })?;
    println!("    wrote {}", path.display());
    Ok(())
}

fn print_playground_usage() {
    eprintln!(
        "Usage: cargo xtask playground [--out <dir>] [--stories <file>]\n\
         \n\
         Options:\n\
           --out <dir>        Output directory, workspace-relative (default: {DEFAULT_OUT_DIR})\n\
           --stories <file>   JSON array of stories to render instead of the built-in catalog\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::error::XtaskErrorCategory;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_root(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-playground-{label}-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn parse_reads_out_dir_and_story_file() {
        let options = PlaygroundCommand::parse(&[
            "--out".into(),
            "dist/playground".into(),
            "--stories".into(),
            "stories.json".into(),
        ])
        .expect("parse");
        assert_eq!(options.out_dir, Some(PathBuf::from("dist/playground")));
        assert_eq!(options.stories, Some(PathBuf::from("stories.json")));
    }

    #[test]
    fn parse_rejects_missing_values_and_unknown_flags() {
        assert!(PlaygroundCommand::parse(&["--out".into()]).is_err());
        assert!(PlaygroundCommand::parse(&["--watch".into()]).is_err());
    }

    #[test]
    fn run_writes_html_and_manifest_for_story_file() {
        let root = scratch_root("export");
        fs::create_dir_all(&root).expect("create root");
        fs::write(
            root.join("stories.json"),
            r#"[{"name": "save", "label": "Save", "args": {"isLoading": true}}]"#,
        )
        .expect("write stories");

        let ctx = CommandContext::with_root(root.clone());
        PlaygroundCommand::run(
            &ctx,
            PlaygroundOptions {
                out_dir: Some(PathBuf::from("out")),
                stories: Some(PathBuf::from("stories.json")),
                show_help: false,
            },
        )
        .expect("export playground");

        let html = fs::read_to_string(root.join("out/index.html")).expect("read html");
        assert!(html.contains("data-story=\"save\""));
        assert!(html.contains("data-ui-slot=\"busy-indicator\""));
        let manifest = fs::read_to_string(root.join("out/catalog.json")).expect("read manifest");
        assert!(manifest.contains("\"disabled\": true"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn invalid_story_files_surface_validation_errors_with_target() {
        let root = scratch_root("invalid");
        fs::create_dir_all(&root).expect("create root");
        fs::write(
            root.join("stories.json"),
            r#"[{"name": "bad", "label": "x", "args": {"variant": "neon"}}]"#,
        )
        .expect("write stories");

        let err = read_stories(&root.join("stories.json")).unwrap_err();
        assert_eq!(err.category, XtaskErrorCategory::Validation);
        assert!(err.to_string().contains("invalid variant `neon`"));
        assert!(err.to_string().contains("stories.json"));

        let _ = fs::remove_dir_all(root);
    }
}
