//! Reusable badge components.
//!
//! # Components
//!
//! - [`Badge`]: Rounded pill with a size scale
//! - [`StatusBadge`]: Order lifecycle badge built on [`Badge`]

mod badge;
mod status_badge;

pub use badge::{BADGE_BASE_CLASSES, Badge, BadgeSize, InvalidBadgeSize, badge_classes};
pub use status_badge::{
    FALLBACK_ICON, FALLBACK_STYLE_CLASS, StatusBadge, StatusDisplay, render_status_badge,
    status_badge_classes,
};
