//! Enumerated argument combinations rendered by the playground.

use std::collections::BTreeSet;

use control_ui::{render_control, ButtonSize, ButtonVariant, ControlProps, RenderedControl};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures while loading or exporting a story catalog.
pub enum PlaygroundError {
    /// The story file is not valid JSON of the expected shape.
    #[error("failed to parse stories: {0}")]
    Parse(String),
    /// A story carries props the control rejects.
    #[error("story `{story}` has invalid args: {source}")]
    InvalidArgs {
        /// Offending story.
        story: String,
        /// Underlying control error.
        #[source]
        source: control_ui::ControlError,
    },
    /// Two stories share a name.
    #[error("duplicate story name `{0}`")]
    DuplicateStory(String),
    /// The catalog has no stories.
    #[error("story catalog is empty")]
    Empty,
    /// The manifest could not be serialized.
    #[error("failed to serialize manifest: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One named argument combination.
pub struct Story {
    /// Unique story name.
    pub name: String,
    /// Short description shown next to the rendered control.
    #[serde(default)]
    pub description: String,
    /// Construction parameters.
    #[serde(default)]
    pub args: ControlProps,
    /// Label content.
    pub label: String,
}

impl Story {
    fn new(name: impl Into<String>, description: impl Into<String>, args: ControlProps) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            args,
            label: "Button".to_string(),
        }
    }

    fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Render the story through the control core.
    pub fn render(&self) -> RenderedControl<String> {
        render_control(self.args.clone(), self.label.clone())
    }
}

/// One story per variant and size pair, variants outermost.
pub fn variant_matrix() -> Vec<Story> {
    ButtonVariant::ALL
        .into_iter()
        .flat_map(|variant| {
            ButtonSize::ALL.into_iter().map(move |size| {
                Story::new(
                    format!("{variant}-{size}"),
                    format!("{variant} intent at {size} size"),
                    ControlProps::new().with_variant(variant).with_size(size),
                )
                .labelled(capitalize(variant.token()))
            })
        })
        .collect()
}

/// Stories covering busy, disabled, override, and pass-through states.
pub fn state_stories() -> Vec<Story> {
    vec![
        Story::new(
            "loading",
            "busy control shows its indicator and ignores activation",
            ControlProps::new().loading(true),
        )
        .labelled("Saving"),
        Story::new(
            "disabled",
            "explicitly disabled control",
            ControlProps::new().disabled(true),
        ),
        Story::new(
            "loading-disabled",
            "busy and disabled at once",
            ControlProps::new().loading(true).disabled(true),
        )
        .labelled("Saving"),
        Story::new(
            "class-override",
            "caller tokens are appended after variant and size",
            ControlProps::new().with_class_name("w-full uppercase"),
        ),
        Story::new(
            "pass-through",
            "host attributes are forwarded verbatim",
            ControlProps::new()
                .with_variant(ButtonVariant::Outline)
                .with_attribute("aria-label", "Open settings")
                .with_attribute("data-testid", "settings-button"),
        )
        .labelled("Settings"),
    ]
}

/// Full built-in catalog.
pub fn catalog() -> Vec<Story> {
    let mut stories = variant_matrix();
    stories.extend(state_stories());
    stories
}

#[derive(Deserialize)]
struct RawStory {
    name: String,
    #[serde(default)]
    description: String,
    label: String,
    #[serde(default)]
    args: Value,
}

/// Load a story catalog from a JSON array.
///
/// Args are decoded with the control's own rules, so an out-of-set variant or size is reported
/// against the story that carries it.
pub fn load_stories(raw: &str) -> Result<Vec<Story>, PlaygroundError> {
    let raw_stories = serde_json::from_str::<Vec<RawStory>>(raw)
        .map_err(|err| PlaygroundError::Parse(err.to_string()))?;
    if raw_stories.is_empty() {
        return Err(PlaygroundError::Empty);
    }

    let mut seen = BTreeSet::new();
    let mut stories = Vec::with_capacity(raw_stories.len());
    for story in raw_stories {
        if !seen.insert(story.name.clone()) {
            return Err(PlaygroundError::DuplicateStory(story.name));
        }
        let args = match story.args {
            Value::Null => ControlProps::default(),
            value => ControlProps::from_value(value).map_err(|source| {
                PlaygroundError::InvalidArgs {
                    story: story.name.clone(),
                    source,
                }
            })?,
        };
        stories.push(Story {
            name: story.name,
            description: story.description,
            args,
            label: story.label,
        });
    }
    Ok(stories)
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use control_ui::ControlError;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn matrix_covers_every_variant_and_size_once() {
        let matrix = variant_matrix();
        assert_eq!(
            matrix.len(),
            ButtonVariant::ALL.len() * ButtonSize::ALL.len()
        );
        assert_eq!(matrix[0].name, "primary-small");
        assert_eq!(matrix[0].label, "Primary");
        assert_eq!(matrix[14].name, "ghost-large");

        let names = matrix.iter().map(|story| &story.name).collect::<BTreeSet<_>>();
        assert_eq!(names.len(), matrix.len());
    }

    #[test]
    fn catalog_names_are_unique() {
        let stories = catalog();
        let names = stories.iter().map(|story| &story.name).collect::<BTreeSet<_>>();
        assert_eq!(names.len(), stories.len());
    }

    #[test]
    fn loading_story_renders_disabled_with_indicator() {
        let story = state_stories()
            .into_iter()
            .find(|story| story.name == "loading")
            .expect("loading story");
        let rendered = story.render();
        assert!(rendered.disabled);
        assert!(rendered.busy_indicator.is_some());
        assert_eq!(rendered.children, "Saving");
    }

    #[test]
    fn load_stories_applies_defaults_for_missing_args() {
        let stories = load_stories(
            r#"[
                {"name": "plain", "label": "Plain"},
                {"name": "danger", "label": "Drop", "args": {"variant": "destructive", "isLoading": true}}
            ]"#,
        )
        .expect("load stories");

        assert_eq!(stories[0].args, ControlProps::default());
        assert_eq!(
            stories[1].args,
            ControlProps::new()
                .with_variant(ButtonVariant::Destructive)
                .loading(true)
        );
    }

    #[test]
    fn load_stories_reports_invalid_args_against_the_story() {
        let err = load_stories(r#"[{"name": "bad", "label": "x", "args": {"size": "jumbo"}}]"#)
            .expect_err("reject size");
        match err {
            PlaygroundError::InvalidArgs { story, source } => {
                assert_eq!(story, "bad");
                assert_eq!(
                    source,
                    ControlError::InvalidSize {
                        value: "jumbo".into()
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_stories_rejects_duplicates_and_empty_catalogs() {
        assert!(matches!(
            load_stories(r#"[{"name": "a", "label": "x"}, {"name": "a", "label": "y"}]"#),
            Err(PlaygroundError::DuplicateStory(name)) if name == "a"
        ));
        assert!(matches!(load_stories("[]"), Err(PlaygroundError::Empty)));
        assert!(matches!(load_stories("{}"), Err(PlaygroundError::Parse(_))));
    }
}
