//! The slide: one unit of a presentation.
//!
//! A [`Slide`] aggregates raw markdown text, display [`Metadata`] parsed from
//! a directive line, and its position (sequence and section). From those it
//! derives the values a slide template needs and renders itself to HTML.
//!
//! # Content
//!
//! Every write terminates the written text with a newline. Setting replaces
//! the content, appending adds to it; neither collapses newlines:
//!
//! ```rust
//! use showoff::slide::Slide;
//!
//! let mut slide = Slide::new();
//! assert!(slide.is_empty());
//!
//! slide.set_content("a");
//! slide <<= "b";
//! assert_eq!(slide.content(), "a\nb\n");
//! ```
//!
//! # Derived values
//!
//! ```rust
//! use showoff::slide::{SectionRegistry, Slide};
//!
//! let mut sections = SectionRegistry::new();
//! let intro = sections.register("Intro");
//!
//! let mut slide = Slide::new();
//! slide.set_metadata("transition=fade one two #id3 three");
//! slide.set_sequence(2);
//! assert_eq!(slide.classes(), "one two three");
//! assert_eq!(slide.transition(), "fade");
//! assert_eq!(slide.id(), "id3");
//! assert_eq!(slide.reference(&sections), "slide/2");
//!
//! slide.set_section(Some(intro));
//! assert_eq!(slide.reference(&sections), "Intro/2");
//! ```
//!
//! # Rendering
//!
//! [`Slide::to_html`] renders with a fresh default [`SlideRenderer`], which
//! reads the template from disk on every call. Hold a [`SlideRenderer`] built
//! from a [`ShowoffConfig`](crate::config::ShowoffConfig) to choose the views
//! directory, markdown options, and template caching. Rendering never
//! changes the slide.

mod params;
mod render;
mod section;

#[cfg(test)]
mod slide_tests;

pub use params::SlideParams;
pub use render::SlideRenderer;
pub use section::{Section, SectionId, SectionRegistry};

use std::ops::ShlAssign;

use serde_json::Value;

use crate::constants::{DEFAULT_SECTION_LABEL, DEFAULT_TRANSITION};
use crate::core::SlideError;
use crate::markdown::{CmarkRenderer, MarkdownRenderer};
use crate::metadata::Metadata;
use crate::templating::SlideContext;

/// A single slide of a presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    content: String,
    metadata: Metadata,
    sequence: u32,
    section: Option<SectionId>,
}

impl Slide {
    /// An empty slide: no content, empty metadata, sequence 0, no section.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slide initialized from explicit params.
    pub fn with_params(params: SlideParams) -> Self {
        let mut slide = Self::new();
        slide.apply(params);
        slide
    }

    /// A slide initialized from loosely typed name/value pairs.
    ///
    /// # Errors
    ///
    /// Unknown names and mistyped values are rejected, see
    /// [`SlideParams::from_fields`].
    pub fn from_fields<I, K>(fields: I) -> Result<Self, SlideError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        Ok(Self::with_params(SlideParams::from_fields(fields)?))
    }

    /// Run every present field of `params` through its setter.
    pub fn apply(&mut self, params: SlideParams) {
        let SlideParams {
            content,
            metadata,
            sequence,
            section,
        } = params;

        if let Some(content) = content {
            self.set_content(&content);
        }
        if let Some(metadata) = metadata {
            self.set_metadata(&metadata);
        }
        if let Some(sequence) = sequence {
            self.set_sequence(sequence);
        }
        if section.is_some() {
            self.set_section(section);
        }
    }

    /// The raw markdown accumulated so far.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content with `value` plus a newline.
    pub fn set_content(&mut self, value: &str) {
        self.content.clear();
        self.append(value);
    }

    /// Append `value` plus a newline to the content.
    pub fn append(&mut self, value: &str) {
        self.content.push_str(value);
        self.content.push('\n');
    }

    /// True when the content is only whitespace. Metadata is not considered.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Parse `directive` and store the result, replacing earlier metadata.
    ///
    /// Malformed tokens are logged and skipped; the rest of the directive
    /// still applies.
    pub fn set_metadata(&mut self, directive: &str) {
        self.metadata = Metadata::parse(directive);
    }

    /// Strict form of [`set_metadata`](Self::set_metadata).
    ///
    /// # Errors
    ///
    /// Returns [`SlideError::Metadata`] for a malformed directive and leaves
    /// the current metadata untouched.
    pub fn try_set_metadata(&mut self, directive: &str) -> Result<(), SlideError> {
        self.metadata = Metadata::try_parse(directive)?;
        Ok(())
    }

    /// The slide's metadata, empty if none was ever set.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// CSS classes joined by spaces, in directive order.
    pub fn classes(&self) -> String {
        self.metadata.classes().join(" ")
    }

    /// The transition name, `"none"` when unset.
    pub fn transition(&self) -> &str {
        self.metadata.transition().unwrap_or(DEFAULT_TRANSITION)
    }

    /// The slide id, empty when unset.
    pub fn id(&self) -> &str {
        self.metadata.id().unwrap_or_default()
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Set the position within the section. Numbering is the caller's policy.
    pub fn set_sequence(&mut self, sequence: u32) {
        self.sequence = sequence;
    }

    pub fn section(&self) -> Option<SectionId> {
        self.section
    }

    pub fn set_section(&mut self, section: Option<SectionId>) {
        self.section = section;
    }

    /// Title of the slide's section, looked up in `sections`.
    pub fn section_title<'a>(&self, sections: &'a SectionRegistry) -> Option<&'a str> {
        let id = self.section?;
        let title = sections.title(id);
        if title.is_none() {
            tracing::warn!("Slide refers to unknown section {}", id.index());
        }
        title
    }

    /// `"{section title}/{sequence}"`, or `"slide/{sequence}"` without a section.
    pub fn reference(&self, sections: &SectionRegistry) -> String {
        let label = self.section_title(sections).unwrap_or(DEFAULT_SECTION_LABEL);
        format!("{}/{}", label, self.sequence)
    }

    /// The content rendered with the default markdown options.
    pub fn content_as_html(&self) -> String {
        self.content_as_html_with(&CmarkRenderer::default())
    }

    /// The content rendered by `markdown`.
    pub fn content_as_html_with(&self, markdown: &dyn MarkdownRenderer) -> String {
        markdown.render(&self.content)
    }

    /// Everything the slide template can see.
    pub fn render_context(
        &self,
        markdown: &dyn MarkdownRenderer,
        sections: &SectionRegistry,
    ) -> SlideContext {
        SlideContext {
            content_as_html: self.content_as_html_with(markdown),
            classes: self.classes(),
            transition: self.transition().to_string(),
            id: self.id().to_string(),
            reference: self.reference(sections),
            sequence: self.sequence,
            section: self.section_title(sections).map(str::to_string),
            empty: self.is_empty(),
        }
    }

    /// Render the slide into the default `slide.html` template.
    ///
    /// # Errors
    ///
    /// Returns [`SlideError::Template`] if the template is missing, unreadable
    /// or broken.
    pub fn to_html(&self, sections: &SectionRegistry) -> Result<String, SlideError> {
        SlideRenderer::default().render(self, sections)
    }
}

/// `slide <<= "more"` appends a line, like [`Slide::append`].
impl ShlAssign<&str> for Slide {
    fn shl_assign(&mut self, value: &str) {
        self.append(value);
    }
}
