//! Construction parameters with explicit defaults and attribute pass-through.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::ControlError;
use crate::tokens::{ButtonSize, ButtonVariant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Pass-through attribute value.
pub enum AttrValue {
    /// Boolean attribute; `true` renders bare, `false` is omitted.
    Flag(bool),
    /// Text attribute.
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Host attributes forwarded verbatim to the rendered element, keyed by attribute name.
pub type ExtraAttributes = BTreeMap<String, AttrValue>;

/// Public names of the recognized props. Pass-through attributes may not reuse them.
pub const PROP_NAMES: &[&str] = &["variant", "size", "isLoading", "disabled", "className"];

/// Whether `name` is a recognized prop name rather than a pass-through attribute.
pub fn is_prop_name(name: &str) -> bool {
    PROP_NAMES.contains(&name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Recognized construction parameters for a control.
///
/// Defaults are applied here, before any resolver runs. Keys not listed below are captured in
/// [`attributes`](Self::attributes) when decoding from JSON. Serialization skips attribute
/// entries named like a recognized prop, so the output always decodes back.
pub struct ControlProps {
    /// Semantic intent.
    pub variant: ButtonVariant,
    /// Semantic size.
    pub size: ButtonSize,
    /// Busy flag.
    pub is_loading: bool,
    /// Explicit disabled flag.
    pub disabled: bool,
    /// Free-form override tokens, appended last.
    pub class_name: String,
    /// Uninterpreted host attributes.
    #[serde(flatten)]
    pub attributes: ExtraAttributes,
}

impl ControlProps {
    /// Props with every default applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variant.
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the busy flag.
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Set the explicit disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the override class string.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Add a pass-through attribute. Names in [`PROP_NAMES`] are ignored.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let name = name.into();
        if !is_prop_name(&name) {
            self.attributes.insert(name, value.into());
        }
        self
    }

    /// Decode props from a JSON object using the public camelCase names.
    pub fn from_json(raw: &str) -> Result<Self, ControlError> {
        let value = serde_json::from_str::<Value>(raw)
            .map_err(|err| ControlError::InvalidProps(err.to_string()))?;
        Self::from_value(value)
    }

    /// Decode props from an already-parsed JSON value.
    ///
    /// Enumeration names are checked first so an out-of-set variant or size reports its own
    /// error instead of a generic decode failure.
    pub fn from_value(value: Value) -> Result<Self, ControlError> {
        if let Some(raw) = value.get("variant").and_then(Value::as_str) {
            raw.parse::<ButtonVariant>()?;
        }
        if let Some(raw) = value.get("size").and_then(Value::as_str) {
            raw.parse::<ButtonSize>()?;
        }
        serde_json::from_value(value).map_err(|err| ControlError::InvalidProps(err.to_string()))
    }
}

impl Serialize for ControlProps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("variant", &self.variant)?;
        map.serialize_entry("size", &self.size)?;
        map.serialize_entry("isLoading", &self.is_loading)?;
        map.serialize_entry("disabled", &self.disabled)?;
        map.serialize_entry("className", &self.class_name)?;
        for (name, value) in &self.attributes {
            if !is_prop_name(name) {
                map.serialize_entry(name, value)?;
            }
        }
        map.end()
    }
}
