//! Pill badge component and its size scale.

use std::str::FromStr;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classes shared by every badge regardless of size or tone.
pub const BADGE_BASE_CLASSES: &str =
    "inline-flex items-center gap-1 font-medium rounded-full whitespace-nowrap";

/// Badge size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeSize {
    /// Compact badge for dense lists (default).
    #[default]
    #[serde(alias = "sm")]
    Small,
    /// Larger badge for detail views.
    #[serde(alias = "md")]
    Medium,
}

impl BadgeSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Small => "text-[10px] px-2 py-0.5",
            Self::Medium => "text-xs px-2.5 py-1",
        }
    }

    /// Canonical name, as accepted by `FromStr` and serde.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid badge size {0:?}, expected one of: small, sm, medium, md")]
pub struct InvalidBadgeSize(pub String);

impl FromStr for BadgeSize {
    type Err = InvalidBadgeSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "sm" => Ok(Self::Small),
            "medium" | "md" => Ok(Self::Medium),
            _ => Err(InvalidBadgeSize(s.to_string())),
        }
    }
}

/// Join the base, tone and size classes into one `class` attribute value.
#[must_use]
pub fn badge_classes(tone: &str, size: BadgeSize) -> String {
    [BADGE_BASE_CLASSES, tone, size.classes()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rounded pill for short labels.
///
/// The `class` token selects the tone; colors are resolved by the stylesheet.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge class="status-accepted" size=BadgeSize::Medium>"Accepted"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge size.
    #[prop(optional)]
    size: BadgeSize,
    /// Tone class token.
    #[prop(into, optional)]
    class: String,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = badge_classes(&class, size);

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_is_small() {
        assert_eq!(BadgeSize::default(), BadgeSize::Small);
        assert_eq!(BadgeSize::default().classes(), "text-[10px] px-2 py-0.5");
    }

    #[test]
    fn parses_long_and_short_names() {
        assert_eq!("small".parse::<BadgeSize>(), Ok(BadgeSize::Small));
        assert_eq!("sm".parse::<BadgeSize>(), Ok(BadgeSize::Small));
        assert_eq!("Medium".parse::<BadgeSize>(), Ok(BadgeSize::Medium));
        assert_eq!(" md ".parse::<BadgeSize>(), Ok(BadgeSize::Medium));
        assert_eq!(
            "large".parse::<BadgeSize>(),
            Err(InvalidBadgeSize("large".to_string()))
        );
    }

    #[test]
    fn deserializes_aliases() {
        let size: BadgeSize = serde_json::from_str("\"md\"").unwrap();
        assert_eq!(size, BadgeSize::Medium);
        let size: BadgeSize = serde_json::from_str("\"small\"").unwrap();
        assert_eq!(size, BadgeSize::Small);
        assert!(serde_json::from_str::<BadgeSize>("\"lg\"").is_err());
    }

    #[test]
    fn classes_skip_empty_tone() {
        assert_eq!(
            badge_classes("", BadgeSize::Medium),
            format!("{BADGE_BASE_CLASSES} text-xs px-2.5 py-1")
        );
        assert_eq!(
            badge_classes("status-pending", BadgeSize::Small),
            format!("{BADGE_BASE_CLASSES} status-pending text-[10px] px-2 py-0.5")
        );
    }
}
