//! Per-render control state, the busy indicator, and the rendered node description.

use std::fmt::{Display, Write as _};

use crate::props::{AttrValue, ControlProps, ExtraAttributes};
use crate::style::{base_fragment, compose, StyleFragment};
use crate::tokens::{resolve_size, resolve_variant, ButtonSize, ButtonVariant};

const BUSY_INDICATOR_TOKENS: &[&str] = &[
    "mr-2",
    "h-4",
    "w-4",
    "animate-spin",
    "rounded-full",
    "border-2",
    "border-current",
    "border-t-transparent",
];

/// Attribute names owned by the control. Pass-through attributes with these names are dropped.
pub const CONTROLLED_ATTRIBUTES: &[&str] = &[
    "type",
    "class",
    "disabled",
    "aria-busy",
    "data-ui-primitive",
    "data-ui-kind",
    "data-ui-variant",
    "data-ui-size",
    "data-ui-busy",
    "data-ui-disabled",
];

/// Whether `name` is rendered by the control itself.
pub fn is_controlled_attribute(name: &str) -> bool {
    CONTROLLED_ATTRIBUTES
        .iter()
        .any(|controlled| controlled.eq_ignore_ascii_case(name))
}

/// Whether `name` can be written as a single HTML attribute name.
///
/// Rejects empty names and any name containing ASCII whitespace, control characters, quotes,
/// `<`, `>`, `/`, or `=`.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|ch| {
            !ch.is_whitespace()
                && !ch.is_control()
                && !matches!(ch, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Whether a pass-through attribute named `name` reaches the rendered element.
pub fn forwards_attribute(name: &str) -> bool {
    is_valid_attribute_name(name) && !is_controlled_attribute(name)
}

/// The single condition gating activation.
pub fn effective_disabled(disabled: bool, busy: bool) -> bool {
    disabled || busy
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Snapshot derived from props for one render pass.
pub struct ControlState {
    /// Resolved variant.
    pub variant: ButtonVariant,
    /// Resolved size.
    pub size: ButtonSize,
    /// Busy flag.
    pub busy: bool,
    /// Explicit disabled flag.
    pub disabled: bool,
}

impl ControlState {
    /// Derive the snapshot from construction parameters.
    pub fn from_props(props: &ControlProps) -> Self {
        Self {
            variant: props.variant,
            size: props.size,
            busy: props.is_loading,
            disabled: props.disabled,
        }
    }

    /// `disabled || busy`.
    pub fn effective_disabled(&self) -> bool {
        effective_disabled(self.disabled, self.busy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decorative, non-interactive marker shown while a control is busy.
///
/// Motion is left entirely to the style engine via the `animate-spin` token.
pub struct BusyIndicator {
    class: StyleFragment,
}

impl BusyIndicator {
    /// Slot name emitted as `data-ui-slot`.
    pub const SLOT: &'static str = "busy-indicator";

    fn new() -> Self {
        Self {
            class: StyleFragment::from_static(BUSY_INDICATOR_TOKENS),
        }
    }

    /// Indicator style tokens.
    pub fn class(&self) -> &StyleFragment {
        &self.class
    }

    /// Static markup for the indicator.
    pub fn to_html(&self) -> String {
        format!(
            "<span class=\"{}\" aria-hidden=\"true\" data-ui-slot=\"{}\"></span>",
            escape_html(&self.class.class_string()),
            Self::SLOT
        )
    }
}

/// Busy indicator: present exactly when `busy` is set.
pub fn present(busy: bool) -> Option<BusyIndicator> {
    busy.then(BusyIndicator::new)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Description of the rendered clickable element.
pub struct RenderedControl<C> {
    /// Composed style tokens.
    pub class: StyleFragment,
    /// Effective disabled flag.
    pub disabled: bool,
    /// Busy flag.
    pub busy: bool,
    /// Indicator fragment, `Some` iff `busy`.
    pub busy_indicator: Option<BusyIndicator>,
    /// Variant used for the `data-ui-variant` hook.
    pub variant: ButtonVariant,
    /// Size used for the `data-ui-size` hook.
    pub size: ButtonSize,
    /// Pass-through attributes, unmodified.
    pub attributes: ExtraAttributes,
    /// Label content, unmodified.
    pub children: C,
}

/// Render a control: `props → style → node` in one pure pass.
pub fn render_control<C>(props: ControlProps, children: C) -> RenderedControl<C> {
    let state = ControlState::from_props(&props);
    let class = compose(
        &base_fragment(),
        &resolve_variant(state.variant),
        &resolve_size(state.size),
        &StyleFragment::parse(&props.class_name),
    );

    RenderedControl {
        class,
        disabled: state.effective_disabled(),
        busy: state.busy,
        busy_indicator: present(state.busy),
        variant: state.variant,
        size: state.size,
        attributes: props.attributes,
        children,
    }
}

impl<C> RenderedControl<C> {
    /// Pass-through attributes that survive [`forwards_attribute`], in key order.
    pub fn forwarded_attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> + '_ {
        self.attributes
            .iter()
            .filter(|(name, _)| forwards_attribute(name))
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<C: Display> RenderedControl<C> {
    /// Serialize the node as static markup.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<button type=\"button\"");
        let _ = write!(
            html,
            " class=\"{}\"",
            escape_html(&self.class.class_string())
        );
        if self.disabled {
            html.push_str(" disabled");
        }
        let _ = write!(
            html,
            " aria-busy=\"{busy}\" data-ui-primitive=\"true\" data-ui-kind=\"button\" \
             data-ui-variant=\"{variant}\" data-ui-size=\"{size}\" data-ui-busy=\"{busy}\" \
             data-ui-disabled=\"{disabled}\"",
            busy = self.busy,
            variant = self.variant.token(),
            size = self.size.token(),
            disabled = self.disabled,
        );
        for (name, value) in self.forwarded_attributes() {
            match value {
                AttrValue::Flag(true) => {
                    let _ = write!(html, " {name}");
                }
                AttrValue::Flag(false) => {}
                AttrValue::Text(text) => {
                    let _ = write!(html, " {name}=\"{}\"", escape_html(text));
                }
            }
        }
        html.push('>');
        if let Some(indicator) = &self.busy_indicator {
            html.push_str(&indicator.to_html());
        }
        html.push_str(&escape_html(&self.children.to_string()));
        html.push_str("</button>");
        html
    }
}

/// Escape text for use in markup content or a double-quoted attribute.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
