//! Order Status Badge
//!
//! Server-rendered status indicator for a delivery order's lifecycle stage.
//! Each status maps to a label, an emoji icon and a style-class token, and is
//! rendered as an inline pill badge in one of two sizes.
//!
//! # Architecture
//!
//! - **UI**: Leptos SSR components rendered to HTML strings
//! - **Server**: Axum service returning badge fragments for HTMX swaps
//!
//! # Modules
//!
//! - [`order`]: Order lifecycle status types
//! - [`ui`]: Badge components and preview page
//! - [`server`]: HTTP routes
//! - [`config`]: Layered configuration

pub mod config;
pub mod order;
pub mod server;
pub mod ui;

use crate::config::AppConfig;

use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }
}
