//! Presentational control component for Leptos applications.
//!
//! The crate is split into a pure core and a thin host binding. The core maps construction
//! parameters to a composed style fragment, an effective disabled flag, and an optional busy
//! indicator in a single deterministic pass ([`render_control`]). The [`Button`] component
//! reuses those same functions inside the Leptos render cycle and routes clicks through the
//! interaction guard.
//!
//! Every render emits the stable `data-ui-*` DOM contract (`data-ui-kind`, `data-ui-variant`,
//! `data-ui-size`, `data-ui-busy`, `data-ui-disabled`) alongside the composed `class` tokens.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button;
mod control;
mod error;
mod guard;
mod props;
mod style;
mod tokens;

pub use button::Button;
pub use control::{
    effective_disabled, escape_html, forwards_attribute, is_controlled_attribute,
    is_valid_attribute_name, present, render_control, BusyIndicator, ControlState,
    RenderedControl, CONTROLLED_ATTRIBUTES,
};
pub use error::ControlError;
pub use guard::{should_activate, ActivationGuard};
pub use props::{is_prop_name, AttrValue, ControlProps, ExtraAttributes, PROP_NAMES};
pub use style::{base_fragment, compose, StyleFragment};
pub use tokens::{resolve_size, resolve_variant, ButtonSize, ButtonVariant};

/// Convenience imports for crates rendering controls.
pub mod prelude {
    pub use crate::{
        render_control, Button, ButtonSize, ButtonVariant, ControlProps, RenderedControl,
        StyleFragment,
    };
}
