//! Typed TOML configuration loading.

use crate::runtime::error::{XtaskError, XtaskResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// TOML-backed loader for a workspace-relative config file.
///
/// Only filesystem access and deserialization happen here; commands validate the loaded
/// values themselves.
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Create a loader for the given workspace-relative path.
    pub fn new(root: &Path, relative_path: &str) -> Self {
        Self {
            path: root.join(relative_path),
            _marker: PhantomData,
        }
    }

    /// Load and deserialize the file.
    ///
    /// Read and parse failures are both reported as
    /// [`XtaskErrorCategory::Config`](crate::runtime::error::XtaskErrorCategory::Config)
    /// targeting the config path.
    pub fn load(&self) -> XtaskResult<T> {
        let body = fs::read_to_string(&self.path).map_err(|err| {
            XtaskError::config(format!("failed to read config: {err}")).with_path(&self.path)
        })?;
        toml::from_str(&body).map_err(|err| {
            XtaskError::config(format!("failed to parse config: {err}")).with_path(&self.path)
        })
    }

    /// Config path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::error::XtaskErrorCategory;
    use serde::Deserialize;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct PresetFile {
        mode: String,
        packages: Vec<String>,
    }

    fn scratch_root(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-config-{label}-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn load_reads_workspace_relative_toml() {
        let root = scratch_root("ok");
        let dir = root.join("tools/automation");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(
            dir.join("preset.toml"),
            "mode = \"fast\"\npackages = [\"control_ui\"]\n",
        )
        .expect("write config");

        let loaded = ConfigLoader::<PresetFile>::new(&root, "tools/automation/preset.toml")
            .load()
            .expect("load config");
        assert_eq!(
            loaded,
            PresetFile {
                mode: "fast".into(),
                packages: vec!["control_ui".into()],
            }
        );

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn missing_and_malformed_files_are_config_errors() {
        let root = scratch_root("bad");
        fs::create_dir_all(&root).expect("create root");
        fs::write(root.join("broken.toml"), "mode = [").expect("write broken config");

        let missing = ConfigLoader::<PresetFile>::new(&root, "missing.toml")
            .load()
            .expect_err("missing config");
        assert_eq!(missing.category, XtaskErrorCategory::Config);
        assert!(missing.to_string().contains("missing.toml"));

        let broken = ConfigLoader::<PresetFile>::new(&root, "broken.toml")
            .load()
            .expect_err("broken config");
        assert_eq!(broken.category, XtaskErrorCategory::Config);
        assert!(broken.to_string().contains("failed to parse config"));

        let _ = fs::remove_dir_all(root);
    }
}
