//! Integration test suite for showoff
//!
//! End-to-end checks of the public API: building slides, parsing directives,
//! and rendering through real templates on disk.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **config_rendering**: renderers built from `showoff.toml`
//! - **rendering**: full slide to HTML rendering with custom views
//! - **slide_lifecycle**: building, mutating, and re-rendering slides

mod config_rendering;
mod rendering;
mod slide_lifecycle;
