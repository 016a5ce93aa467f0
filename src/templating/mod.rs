//! View templates for slides.
//!
//! A slide is rendered by embedding its markdown output and display attributes
//! into the `slide.html` template found in a views directory. Templates use
//! [Tera](https://keats.github.io/tera/) syntax and see a [`SlideContext`]:
//!
//! ```text
//! <div id="{{ id }}" class="slide {{ classes }}" data-transition="{{ transition }}">
//!   <div class="content {{ classes }}" ref="{{ reference }}">
//!     {{ content_as_html | safe }}
//!   </div>
//! </div>
//! ```
//!
//! Auto-escaping is on for `.html` templates, so every attribute is escaped
//! and the markdown output has to be marked `safe`.

pub mod cache;
pub mod context;
pub mod error;
pub mod renderer;


pub use cache::TemplateCache;
pub use context::SlideContext;
pub use error::TemplateError;
pub use renderer::TemplateRenderer;
