//! Interactive playground for the shared control component.
//!
//! The playground renders the enumerated story catalog (every variant and size pair plus the
//! busy, disabled, override, and pass-through states) through the real [`Button`] so visual
//! review happens against production markup. Knobs drive a live preview whose activation
//! counter makes the interaction guard observable. The same catalog can be exported as static
//! HTML and a JSON manifest without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod export;
mod stories;

use control_ui::prelude::*;
use leptos::ev::MouseEvent;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use export::{export_html, export_manifest};
pub use stories::{catalog, load_stories, state_stories, variant_matrix, PlaygroundError, Story};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct KnobState {
    props: ControlProps,
    label: String,
}

impl Default for KnobState {
    fn default() -> Self {
        Self {
            props: ControlProps::default(),
            label: "Button".to_string(),
        }
    }
}

#[component]
/// Playground page: knobs, live preview, and the story matrix.
pub fn Playground(
    /// Previously saved knob state.
    #[prop(optional)]
    restored_state: Option<Value>,
) -> impl IntoView {
    let knobs = create_rw_signal(KnobState::default());
    let activations = create_rw_signal(0_u32);

    if let Some(restored_state) = restored_state {
        match serde_json::from_value::<KnobState>(restored_state) {
            Ok(restored) => knobs.set(restored),
            Err(err) => logging::warn!("playground knob restore failed: {err}"),
        }
    }

    let on_activate = Callback::new(move |_: MouseEvent| activations.update(|count| *count += 1));

    view! {
        <main class="playground" data-ui-kind="playground">
            <section data-ui-slot="knobs">
                <label>
                    "variant"
                    <select
                        prop:value=move || knobs.get().props.variant.token()
                        on:change=move |ev| {
                            match event_target_value(&ev).parse::<ButtonVariant>() {
                                Ok(variant) => knobs.update(|state| state.props.variant = variant),
                                Err(err) => logging::warn!("{err}"),
                            }
                        }
                    >
                        {ButtonVariant::ALL
                            .into_iter()
                            .map(|variant| view! { <option value=variant.token()>{variant.token()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "size"
                    <select
                        prop:value=move || knobs.get().props.size.token()
                        on:change=move |ev| {
                            match event_target_value(&ev).parse::<ButtonSize>() {
                                Ok(size) => knobs.update(|state| state.props.size = size),
                                Err(err) => logging::warn!("{err}"),
                            }
                        }
                    >
                        {ButtonSize::ALL
                            .into_iter()
                            .map(|size| view! { <option value=size.token()>{size.token()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || knobs.get().props.is_loading
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            knobs.update(|state| state.props.is_loading = checked);
                        }
                    />
                    "isLoading"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || knobs.get().props.disabled
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            knobs.update(|state| state.props.disabled = checked);
                        }
                    />
                    "disabled"
                </label>
                <label>
                    "className"
                    <input
                        type="text"
                        prop:value=move || knobs.get().props.class_name
                        on:input=move |ev| {
                            let class_name = event_target_value(&ev);
                            knobs.update(|state| state.props.class_name = class_name);
                        }
                    />
                </label>
                <label>
                    "label"
                    <input
                        type="text"
                        prop:value=move || knobs.get().label
                        on:input=move |ev| {
                            let label = event_target_value(&ev);
                            knobs.update(|state| state.label = label);
                        }
                    />
                </label>
            </section>

            <section data-ui-slot="preview">
                {move || {
                    let KnobState { props, label } = knobs.get();
                    view! {
                        <Button
                            variant=props.variant
                            size=props.size
                            is_loading=props.is_loading
                            disabled=props.disabled
                            class_name=props.class_name
                            extra_attributes=props.attributes
                            on_click=on_activate
                        >
                            {label}
                        </Button>
                    }
                }}
                <p data-ui-slot="activations">
                    {move || format!("Activations: {}", activations.get())}
                </p>
                <pre data-ui-slot="composed-class">
                    {move || {
                        let KnobState { props, label } = knobs.get();
                        render_control(props, label).class.class_string()
                    }}
                </pre>
            </section>

            <section data-ui-slot="matrix">
                {catalog()
                    .into_iter()
                    .map(|story| {
                        let Story { name, description, args, label } = story;
                        view! {
                            <figure data-story=name.clone()>
                                <Button
                                    variant=args.variant
                                    size=args.size
                                    is_loading=args.is_loading
                                    disabled=args.disabled
                                    class_name=args.class_name
                                    extra_attributes=args.attributes
                                >
                                    {label}
                                </Button>
                                <figcaption>
                                    <strong>{name}</strong>
                                    " "
                                    {description}
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn knob_state_restores_partial_payloads_with_defaults() {
        let restored: KnobState =
            serde_json::from_value(json!({ "props": { "variant": "ghost" } })).expect("restore");
        assert_eq!(restored.label, "Button");
        assert_eq!(restored.props.variant, ButtonVariant::Ghost);
        assert_eq!(restored.props.size, ButtonSize::Medium);
    }

    #[test]
    fn knob_state_rejects_out_of_set_variants() {
        let restored =
            serde_json::from_value::<KnobState>(json!({ "props": { "variant": "neon" } }));
        assert!(restored.is_err());
    }

    #[test]
    fn pass_through_story_attributes_reach_the_button() {
        let story = catalog()
            .into_iter()
            .find(|story| story.name == "pass-through")
            .expect("pass-through story");
        let forwarded = story
            .args
            .attributes
            .keys()
            .filter(|name| control_ui::forwards_attribute(name))
            .map(String::as_str)
            .collect::<Vec<_>>();
        assert_eq!(forwarded, vec!["aria-label", "data-testid"]);
    }

    #[test]
    fn knob_state_keeps_attributes_across_save_and_restore() {
        let mut state = KnobState::default();
        state.props = state.props.with_attribute("aria-label", "Preview");
        let saved = serde_json::to_value(&state).expect("save");
        let restored: KnobState = serde_json::from_value(saved).expect("restore");
        assert_eq!(restored, state);
    }
}
