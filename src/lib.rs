//! showoff - slides for markdown presentations
//!
//! This crate models a single presentation slide and renders it to HTML. A
//! slide aggregates raw markdown text, per-slide display metadata parsed from
//! a directive line, and its position (sequence and section). Rendering runs
//! the markdown through a [`markdown::MarkdownRenderer`] and embeds the result,
//! with the slide's classes, transition, id and reference, into a Tera view
//! template.
//!
//! # Architecture Overview
//!
//! - [`slide`] - the [`Slide`](slide::Slide) entity, its initializer, the
//!   section registry, and the [`SlideRenderer`](slide::SlideRenderer) pipeline
//! - [`metadata`] - directive parsing (`transition=fade one two #id three`)
//! - [`markdown`] - the markdown capability and its `pulldown-cmark` engine
//! - [`templating`] - view template loading, caching, and rendering with Tera
//! - [`config`] - `showoff.toml` rendering settings
//! - [`core`] - error types and user-facing error reporting
//!
//! Deck assembly, numbering across slides, and loading presentations from
//! disk belong to the caller.
//!
//! # Example
//!
//! ```rust
//! use showoff::slide::{SectionRegistry, Slide};
//!
//! # fn main() -> Result<(), showoff::core::SlideError> {
//! let mut sections = SectionRegistry::new();
//! let intro = sections.register("Intro");
//!
//! let mut slide = Slide::new();
//! slide.set_metadata("!SLIDE transition=fade center #welcome");
//! slide.set_content("# Welcome");
//! slide <<= "";
//! slide <<= "Slides from ~~PowerPoint~~ markdown.";
//! slide.set_section(Some(intro));
//! slide.set_sequence(1);
//!
//! let html = slide.to_html(&sections)?;
//! assert!(html.contains(r#"id="welcome""#));
//! assert!(html.contains("<del>PowerPoint</del>"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod core;
pub mod markdown;
pub mod metadata;
pub mod slide;
pub mod templating;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
