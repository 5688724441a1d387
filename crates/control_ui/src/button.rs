//! Leptos binding for the control core.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::control::{effective_disabled, forwards_attribute, present, BusyIndicator};
use crate::guard::ActivationGuard;
use crate::props::{AttrValue, ExtraAttributes};
use crate::style::{base_fragment, compose, StyleFragment};
use crate::tokens::{resolve_size, resolve_variant, ButtonSize, ButtonVariant};

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Click handler that routes each event through the [`ActivationGuard`] for the current
/// effective disabled flag.
fn guarded_activation<E: 'static>(
    inactive: Signal<bool>,
    on_click: Option<Callback<E>>,
) -> impl Fn(E) + 'static {
    move |event: E| {
        let forward = on_click.map(|on_click| move |event: E| on_click.call(event));
        let on_activate = forward.as_ref().map(|forward| forward as &dyn Fn(E));
        ActivationGuard::new(inactive.get_untracked(), on_activate).dispatch(event);
    }
}

#[component]
/// Clickable control with variant/size styling, a busy state, and attribute pass-through.
///
/// Extra attributes given as `attr:name=value` or through `extra_attributes` are applied to the
/// `<button>` unless they collide with an attribute the control renders itself or are not
/// valid attribute names.
pub fn Button(
    /// Semantic intent.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Semantic size.
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Busy flag; also disables activation.
    #[prop(optional, into)]
    is_loading: MaybeSignal<bool>,
    /// Explicit disabled flag.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Free-form override tokens appended after the variant and size tokens.
    #[prop(optional, into)]
    class_name: Option<String>,
    /// Activation callback, skipped while effectively disabled.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// String-keyed host attributes, typically [`ControlProps::attributes`](crate::ControlProps).
    #[prop(optional)]
    extra_attributes: ExtraAttributes,
    /// Uninterpreted host attributes.
    #[prop(attrs)]
    attributes: Vec<(&'static str, Attribute)>,
    /// Label content.
    children: Children,
) -> impl IntoView {
    let class = compose(
        &base_fragment(),
        &resolve_variant(variant),
        &resolve_size(size),
        &StyleFragment::parse(class_name.as_deref().unwrap_or_default()),
    )
    .class_string();
    let inactive = Signal::derive(move || effective_disabled(disabled.get(), is_loading.get()));
    let attributes = attributes
        .into_iter()
        .filter(|(name, _)| forwards_attribute(name))
        .collect::<Vec<_>>();

    let button = view! {
        <button
            type="button"
            class=class
            disabled=move || inactive.get()
            aria-busy=move || bool_token(is_loading.get())
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-busy=move || bool_token(is_loading.get())
            data-ui-disabled=move || bool_token(inactive.get())
            on:click=guarded_activation(inactive, on_click)
            {..attributes}
        >
            {move || {
                present(is_loading.get()).map(|indicator| {
                    view! {
                        <span
                            class=indicator.class().class_string()
                            aria-hidden="true"
                            data-ui-slot=BusyIndicator::SLOT
                        ></span>
                    }
                })
            }}
            {children()}
        </button>
    };

    extra_attributes
        .into_iter()
        .filter(|(name, _)| forwards_attribute(name))
        .fold(button, |button, (name, value)| match value {
            AttrValue::Flag(flag) => button.attr(name, flag),
            AttrValue::Text(text) => button.attr(name, text),
        })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn click_handler_follows_the_effective_disabled_signal() {
        let runtime = create_runtime();
        let calls = Rc::new(Cell::new(0));
        let disabled = create_rw_signal(false);
        let busy = create_rw_signal(false);
        let inactive = Signal::derive(move || effective_disabled(disabled.get(), busy.get()));
        let on_click = Callback::new({
            let calls = Rc::clone(&calls);
            move |_: ()| calls.set(calls.get() + 1)
        });
        let handler = guarded_activation(inactive, Some(on_click));

        handler(());
        assert_eq!(calls.get(), 1);

        busy.set(true);
        handler(());
        handler(());
        assert_eq!(calls.get(), 1);

        busy.set(false);
        disabled.set(true);
        handler(());
        assert_eq!(calls.get(), 1);

        disabled.set(false);
        handler(());
        handler(());
        assert_eq!(calls.get(), 3);

        runtime.dispose();
    }

    #[test]
    fn click_handler_without_callback_is_a_no_op() {
        let runtime = create_runtime();
        let handler = guarded_activation::<()>(Signal::derive(|| false), None);
        handler(());
        runtime.dispose();
    }
}
