//! Closed variant and size sets with their style tables.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ControlError;
use crate::style::StyleFragment;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
/// Semantic intent of a control.
pub enum ButtonVariant {
    /// Primary emphasized action.
    #[default]
    Primary,
    /// Secondary action.
    Secondary,
    /// Destructive action.
    Destructive,
    /// Bordered, transparent action.
    Outline,
    /// Borderless, background-free action.
    Ghost,
}

impl ButtonVariant {
    /// Every variant in declaration order.
    pub const ALL: [ButtonVariant; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Destructive,
        Self::Outline,
        Self::Ghost,
    ];

    /// Stable lowercase name, also used for the `data-ui-variant` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }

    fn style_tokens(self) -> &'static [&'static str] {
        match self {
            Self::Primary => &[
                "bg-primary",
                "text-primary-foreground",
                "hover:bg-primary/90",
            ],
            Self::Secondary => &[
                "bg-secondary",
                "text-secondary-foreground",
                "hover:bg-secondary/80",
            ],
            Self::Destructive => &[
                "bg-destructive",
                "text-destructive-foreground",
                "hover:bg-destructive/90",
            ],
            Self::Outline => &[
                "border",
                "border-input",
                "bg-background",
                "hover:bg-accent",
                "hover:text-accent-foreground",
            ],
            Self::Ghost => &["hover:bg-accent", "hover:text-accent-foreground"],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
/// Semantic size of a control.
pub enum ButtonSize {
    /// Dense control.
    Small,
    /// Default control.
    #[default]
    Medium,
    /// Large control.
    Large,
}

impl ButtonSize {
    /// Every size in declaration order.
    pub const ALL: [ButtonSize; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Stable lowercase name, also used for the `data-ui-size` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    fn style_tokens(self) -> &'static [&'static str] {
        match self {
            Self::Small => &["h-9", "rounded-md", "px-3", "text-xs"],
            Self::Medium => &["h-10", "px-4", "py-2", "text-sm"],
            Self::Large => &["h-11", "rounded-md", "px-8", "text-base"],
        }
    }
}

/// Variant resolver: total lookup from intent to style fragment.
pub fn resolve_variant(variant: ButtonVariant) -> StyleFragment {
    StyleFragment::from_static(variant.style_tokens())
}

/// Size resolver: total lookup from size to style fragment.
pub fn resolve_size(size: ButtonSize) -> StyleFragment {
    StyleFragment::from_static(size.style_tokens())
}

impl Display for ButtonVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Display for ButtonSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ButtonVariant {
    type Err = ControlError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.token() == raw)
            .ok_or_else(|| ControlError::InvalidVariant {
                value: raw.to_string(),
            })
    }
}

impl FromStr for ButtonSize {
    type Err = ControlError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == raw)
            .ok_or_else(|| ControlError::InvalidSize {
                value: raw.to_string(),
            })
    }
}

impl TryFrom<String> for ButtonVariant {
    type Error = ControlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for ButtonSize {
    type Error = ControlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ButtonVariant> for &'static str {
    fn from(value: ButtonVariant) -> Self {
        value.token()
    }
}

impl From<ButtonSize> for &'static str {
    fn from(value: ButtonSize) -> Self {
        value.token()
    }
}
