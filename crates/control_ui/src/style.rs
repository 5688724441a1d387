//! Style fragments and the fixed-order state composer.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

const BASE_TOKENS: &[&str] = &[
    "inline-flex",
    "items-center",
    "justify-center",
    "rounded-md",
    "font-medium",
    "transition-colors",
    "focus-visible:outline-none",
    "focus-visible:ring-2",
    "disabled:pointer-events-none",
    "disabled:opacity-50",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// Ordered set of opaque presentation tokens (class names).
///
/// Tokens are never interpreted here. Ordering is preserved exactly as supplied so the
/// consuming style engine can apply its own last-token-wins cascade.
pub struct StyleFragment {
    tokens: Vec<Cow<'static, str>>,
}

impl StyleFragment {
    /// Fragment with no tokens.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fragment borrowing a static token table.
    pub fn from_static(tokens: &'static [&'static str]) -> Self {
        Self {
            tokens: tokens.iter().map(|token| Cow::Borrowed(*token)).collect(),
        }
    }

    /// Split a free-form class string on ASCII whitespace.
    pub fn parse(raw: &str) -> Self {
        Self {
            tokens: raw
                .split_ascii_whitespace()
                .map(|token| Cow::Owned(token.to_string()))
                .collect(),
        }
    }

    /// Tokens in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(|token| token.as_ref())
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the fragment carries no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Last token, i.e. the one that wins a cascade conflict.
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(|token| token.as_ref())
    }

    /// Whether `token` appears anywhere in the fragment.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens().any(|candidate| candidate == token)
    }

    /// Position of the first occurrence of `token`.
    pub fn position(&self, token: &str) -> Option<usize> {
        self.tokens().position(|candidate| candidate == token)
    }

    /// Tokens joined by a single space, ready for a `class` attribute.
    pub fn class_string(&self) -> String {
        self.tokens().collect::<Vec<_>>().join(" ")
    }

    fn append(&mut self, other: &StyleFragment) {
        self.tokens.extend(other.tokens.iter().cloned());
    }
}

impl Display for StyleFragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_string())
    }
}

/// Tokens applied to every control regardless of variant or size.
pub fn base_fragment() -> StyleFragment {
    StyleFragment::from_static(BASE_TOKENS)
}

/// Concatenate `base ⧺ variant ⧺ size ⧺ overrides` in that fixed order.
///
/// No deduplication happens: conflicting tokens are left for the cascade to settle.
pub fn compose(
    base: &StyleFragment,
    variant: &StyleFragment,
    size: &StyleFragment,
    overrides: &StyleFragment,
) -> StyleFragment {
    let mut composed = StyleFragment {
        tokens: Vec::with_capacity(base.len() + variant.len() + size.len() + overrides.len()),
    };
    composed.append(base);
    composed.append(variant);
    composed.append(size);
    composed.append(overrides);
    composed
}
