use std::cell::Cell;

use control_ui::{
    base_fragment, compose, render_control, resolve_size, resolve_variant, ActivationGuard,
    ButtonSize, ButtonVariant, ControlProps, StyleFragment,
};
use pretty_assertions::assert_eq;

fn expected_class(variant: ButtonVariant, size: ButtonSize, overrides: &str) -> StyleFragment {
    compose(
        &base_fragment(),
        &resolve_variant(variant),
        &resolve_size(size),
        &StyleFragment::parse(overrides),
    )
}

fn activations(props: ControlProps, events: usize) -> usize {
    let rendered = render_control(props, "Label");
    let calls = Cell::new(0);
    let on_activate: &dyn Fn(()) = &|_| calls.set(calls.get() + 1);
    let guard = ActivationGuard::new(rendered.disabled, Some(on_activate));
    for _ in 0..events {
        guard.dispatch(());
    }
    calls.get()
}

#[test]
fn default_render_uses_primary_medium_and_is_enabled() {
    let rendered = render_control(ControlProps::default(), "Submit");

    assert_eq!(
        rendered.class,
        expected_class(ButtonVariant::Primary, ButtonSize::Medium, "")
    );
    assert!(!rendered.disabled);
    assert!(rendered.busy_indicator.is_none());
    assert_eq!(rendered.children, "Submit");
}

#[test]
fn destructive_large_render_composes_matching_fragments() {
    let rendered = render_control(
        ControlProps::new()
            .with_variant(ButtonVariant::Destructive)
            .with_size(ButtonSize::Large),
        "Delete",
    );

    assert_eq!(
        rendered.class,
        expected_class(ButtonVariant::Destructive, ButtonSize::Large, "")
    );
}

#[test]
fn loading_render_is_disabled_shows_indicator_and_swallows_activation() {
    let props = ControlProps::new().loading(true);
    let rendered = render_control(props.clone(), "Saving");

    assert!(rendered.disabled);
    assert!(rendered.busy_indicator.is_some());
    assert!(rendered.to_html().contains("data-ui-slot=\"busy-indicator\""));
    assert_eq!(activations(props, 3), 0);
}

#[test]
fn disabled_render_never_activates() {
    assert_eq!(activations(ControlProps::new().disabled(true), 1), 0);
    assert_eq!(activations(ControlProps::new().disabled(true), 10), 0);
}

#[test]
fn enabled_render_activates_once_per_event() {
    assert_eq!(activations(ControlProps::default(), 1), 1);
    assert_eq!(activations(ControlProps::default(), 4), 4);
}

#[test]
fn class_name_override_is_the_last_token() {
    let rendered = render_control(ControlProps::new().with_class_name("extra-token"), "Go");
    assert_eq!(rendered.class.last(), Some("extra-token"));
}

#[test]
fn override_tokens_always_follow_variant_and_size_tokens() {
    for variant in ButtonVariant::ALL {
        for size in ButtonSize::ALL {
            let rendered = render_control(
                ControlProps::new()
                    .with_variant(variant)
                    .with_size(size)
                    .with_class_name("mt-4 w-full"),
                "x",
            );
            let tokens = rendered.class.tokens().collect::<Vec<_>>();
            let prefix =
                base_fragment().len() + resolve_variant(variant).len() + resolve_size(size).len();

            assert_eq!(tokens.len(), prefix + 2);
            assert_eq!(&tokens[prefix..], &["mt-4", "w-full"]);
        }
    }
}

#[test]
fn busy_indicator_presence_matches_busy_flag_for_every_state() {
    for busy in [false, true] {
        for disabled in [false, true] {
            let rendered = render_control(
                ControlProps::new().loading(busy).disabled(disabled),
                "x",
            );
            assert_eq!(rendered.busy_indicator.is_some(), busy);
            assert_eq!(rendered.disabled, busy || disabled);
        }
    }
}

#[test]
fn json_props_render_the_same_as_typed_props() {
    let decoded = ControlProps::from_json(
        r#"{"variant":"ghost","size":"small","className":"extra-token","aria-label":"More"}"#,
    )
    .expect("decode props");
    let typed = ControlProps::new()
        .with_variant(ButtonVariant::Ghost)
        .with_size(ButtonSize::Small)
        .with_class_name("extra-token")
        .with_attribute("aria-label", "More");

    assert_eq!(
        render_control(decoded, "…").to_html(),
        render_control(typed, "…").to_html()
    );
}
