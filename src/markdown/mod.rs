//! Markdown to HTML conversion for slide content.
//!
//! Slides never talk to a markdown engine directly. They go through the
//! [`MarkdownRenderer`] capability, which any engine honoring the
//! [`MarkdownOptions`] table can implement. [`CmarkRenderer`] is the engine
//! shipped with the crate, built on `pulldown-cmark`.
//!
//! # Options
//!
//! | option | effect |
//! |---|---|
//! | `fenced_code_blocks` | ```` ``` ```` fences produce `<pre><code>` |
//! | `no_intra_emphasis` | no emphasis opened inside a word (`snake*case*d` stays literal) |
//! | `autolink` | bare `http://`, `https://`, `ftp://` and `www.` URLs become links |
//! | `strikethrough` | `~~text~~` renders as `<del>` |
//! | `lax_html_blocks` | permissive raw-HTML blocks (CommonMark already is) |
//! | `superscript` | `^word` and `^(a few words)` render as `<sup>` |
//! | `hard_wrap` | single newlines become `<br />` |
//! | `tables` | pipe tables |
//! | `xhtml` | void elements are self-closing (`<br />` rather than `<br>`) |
//!
//! The default enables every option, which is the configuration slides are
//! rendered with unless a [`crate::config::ShowoffConfig`] says otherwise.
//!
//! # Examples
//!
//! ```rust
//! use showoff::markdown::{CmarkRenderer, MarkdownRenderer};
//!
//! let renderer = CmarkRenderer::default();
//! let html = renderer.render("# Title\n\nSee https://example.com\n");
//! assert!(html.contains("<h1>Title</h1>"));
//! assert!(html.contains(r#"<a href="https://example.com">"#));
//! ```

mod cmark;

pub use cmark::CmarkRenderer;

use pulldown_cmark::Options;
use serde::{Deserialize, Serialize};

/// Feature switches understood by a [`MarkdownRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownOptions {
    pub fenced_code_blocks: bool,
    pub no_intra_emphasis: bool,
    pub autolink: bool,
    pub strikethrough: bool,
    pub lax_html_blocks: bool,
    pub superscript: bool,
    pub hard_wrap: bool,
    pub tables: bool,
    pub xhtml: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            fenced_code_blocks: true,
            no_intra_emphasis: true,
            autolink: true,
            strikethrough: true,
            lax_html_blocks: true,
            superscript: true,
            hard_wrap: true,
            tables: true,
            xhtml: true,
        }
    }
}

impl MarkdownOptions {
    /// Every option switched off: plain CommonMark with HTML-style void tags.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            fenced_code_blocks: false,
            no_intra_emphasis: false,
            autolink: false,
            strikethrough: false,
            lax_html_blocks: false,
            superscript: false,
            hard_wrap: false,
            tables: false,
            xhtml: false,
        }
    }

    /// Parser-level extensions for `pulldown-cmark`.
    ///
    /// The remaining options are applied as event rewrites by [`CmarkRenderer`].
    pub(crate) fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        options
    }
}

/// Converts raw markdown text into an HTML fragment.
///
/// Implementations must be deterministic: the same text under the same
/// options always yields the same HTML.
pub trait MarkdownRenderer: Send + Sync {
    /// Render `text` to HTML.
    fn render(&self, text: &str) -> String;

    /// The option set this renderer honors.
    fn options(&self) -> &MarkdownOptions;
}
