//! Order status badge: icon, label and tone for each lifecycle stage.

use std::borrow::Cow;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::badge::{Badge, BadgeSize, badge_classes};
use crate::order::{OrderStatus, StatusValue};

/// Style token used when a status has no entry of its own.
pub const FALLBACK_STYLE_CLASS: &str = "status-pending";

/// Icon used when a status has no entry of its own.
pub const FALLBACK_ICON: &str = "•";

/// How a status is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    /// Human-readable text.
    pub label: Cow<'static, str>,
    /// Style-class token resolved by the stylesheet.
    pub style_class: &'static str,
    /// Short glyph shown before the label.
    pub icon: &'static str,
}

impl StatusDisplay {
    const fn entry(label: &'static str, style_class: &'static str, icon: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            style_class,
            icon,
        }
    }

    /// Table entry for a known status.
    #[must_use]
    pub const fn of(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => Self::entry("Pending", "status-pending", "⏳"),
            OrderStatus::Accepted => Self::entry("Accepted", "status-accepted", "✅"),
            OrderStatus::PickedUp => Self::entry("On the Way", "status-pickedUp", "🛵"),
            OrderStatus::Delivered => Self::entry("Delivered", "status-delivered", "🎉"),
            OrderStatus::Cancelled => Self::entry("Cancelled", "status-cancelled", "❌"),
        }
    }

    #[must_use]
    pub fn lookup(status: &StatusValue) -> Option<Self> {
        status.known().map(Self::of)
    }

    /// Generic display for text outside the known set: the raw text as label.
    #[must_use]
    pub fn fallback(raw: &str) -> Self {
        Self {
            label: Cow::Owned(raw.to_string()),
            style_class: FALLBACK_STYLE_CLASS,
            icon: FALLBACK_ICON,
        }
    }

    /// Display for any status value. Total: unknown values degrade to
    /// [`StatusDisplay::fallback`].
    #[must_use]
    pub fn resolve(status: &StatusValue) -> Self {
        Self::lookup(status).unwrap_or_else(|| Self::fallback(status.as_str()))
    }

    /// Badge text content, `"{icon} {label}"`.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

/// Full class list for a status badge at the given size.
#[must_use]
pub fn status_badge_classes(display: &StatusDisplay, size: BadgeSize) -> String {
    badge_classes(display.style_class, size)
}

/// Inline badge showing an order's lifecycle stage.
///
/// Accepts anything convertible into a [`StatusValue`]; values outside the
/// known set render with the generic fallback instead of failing.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <StatusBadge status=OrderStatus::Delivered/>
///     <StatusBadge status="pickedUp" size=BadgeSize::Medium/>
/// }
/// ```
#[component]
pub fn StatusBadge(
    /// Order status to display.
    #[prop(into)]
    status: StatusValue,
    /// Badge size, small when omitted.
    #[prop(optional)]
    size: BadgeSize,
) -> impl IntoView {
    let display = StatusDisplay::resolve(&status);
    let text = display.text();

    view! {
        <Badge size=size class=display.style_class>
            {text}
        </Badge>
    }
}

/// Render a status badge to an HTML fragment.
pub fn render_status_badge(status: impl Into<StatusValue>, size: BadgeSize) -> String {
    let status = status.into();
    view! { <StatusBadge status=status size=size/> }.to_html()
}
