//! UI components and pages.
//!
//! Leptos SSR components rendered to HTML strings on the server.
//!
//! # Structure
//!
//! - [`app`]: Badge preview page
//! - [`components`]: Reusable badge components

pub mod app;
pub mod components;
