//! Static catalog export: a standalone HTML page and a JSON manifest.

use control_ui::{escape_html, ControlProps};
use serde::Serialize;

use crate::stories::{PlaygroundError, Story};

#[derive(Debug, Serialize)]
struct ManifestEntry<'a> {
    name: &'a str,
    description: &'a str,
    label: &'a str,
    args: &'a ControlProps,
    class: String,
    disabled: bool,
    busy: bool,
}

/// Render every story into one standalone HTML page.
pub fn export_html(stories: &[Story]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Control playground</title>\n</head>\n\
         <body data-ui-kind=\"playground\">\n<main>\n",
    );
    for story in stories {
        page.push_str(&format!(
            "<figure data-story=\"{name}\">\n{control}\n<figcaption><strong>{name}</strong> {description}</figcaption>\n</figure>\n",
            name = escape_html(&story.name),
            control = story.render().to_html(),
            description = escape_html(&story.description),
        ));
    }
    page.push_str("</main>\n</body>\n</html>\n");
    page
}

/// Describe every story and its composed output as pretty-printed JSON.
pub fn export_manifest(stories: &[Story]) -> Result<String, PlaygroundError> {
    if stories.is_empty() {
        return Err(PlaygroundError::Empty);
    }
    let entries = stories
        .iter()
        .map(|story| {
            let rendered = story.render();
            ManifestEntry {
                name: &story.name,
                description: &story.description,
                label: &story.label,
                args: &story.args,
                class: rendered.class.class_string(),
                disabled: rendered.disabled,
                busy: rendered.busy,
            }
        })
        .collect::<Vec<_>>();
    serde_json::to_string_pretty(&entries)
        .map_err(|err| PlaygroundError::Serialize(err.to_string()))
}
