//! Slide to HTML rendering pipeline.

use super::{SectionRegistry, Slide};
use crate::config::ShowoffConfig;
use crate::constants::SLIDE_TEMPLATE_NAME;
use crate::core::SlideError;
use crate::markdown::{CmarkRenderer, MarkdownRenderer};
use crate::templating::TemplateRenderer;

/// Renders slides: markdown first, then the `slide.html` template.
///
/// A renderer can be reused for any number of slides. With template caching
/// enabled it parses the template once per distinct file content.
///
/// # Examples
///
/// ```rust,no_run
/// use showoff::config::ShowoffConfig;
/// use showoff::slide::{SectionRegistry, Slide, SlideRenderer};
///
/// # fn example() -> anyhow::Result<()> {
/// let config = ShowoffConfig::load_or_default("showoff.toml".as_ref())?;
/// let mut renderer = SlideRenderer::from_config(&config);
///
/// let mut slide = Slide::new();
/// slide.set_content("# Welcome");
/// let html = renderer.render(&slide, &SectionRegistry::new())?;
/// # Ok(())
/// # }
/// ```
pub struct SlideRenderer {
    markdown: Box<dyn MarkdownRenderer>,
    templates: TemplateRenderer,
}

impl SlideRenderer {
    pub fn new(markdown: Box<dyn MarkdownRenderer>, templates: TemplateRenderer) -> Self {
        Self {
            markdown,
            templates,
        }
    }

    /// A renderer using the configured views directory, caching and markdown options.
    pub fn from_config(config: &ShowoffConfig) -> Self {
        Self::new(
            Box::new(CmarkRenderer::new(config.markdown)),
            TemplateRenderer::new(config.resolved_views_dir(), config.cache_templates),
        )
    }

    pub fn markdown(&self) -> &dyn MarkdownRenderer {
        self.markdown.as_ref()
    }

    pub fn templates(&self) -> &TemplateRenderer {
        &self.templates
    }

    pub fn templates_mut(&mut self) -> &mut TemplateRenderer {
        &mut self.templates
    }

    /// Render `slide` to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`SlideError::Template`] when the slide template cannot be
    /// loaded, parsed or rendered.
    pub fn render(&mut self, slide: &Slide, sections: &SectionRegistry) -> Result<String, SlideError> {
        let context = slide.render_context(self.markdown.as_ref(), sections);

        tracing::debug!("Rendering slide {}", context.reference);
        context.log_as_kv();

        let html = self.templates.render(SLIDE_TEMPLATE_NAME, &context)?;
        tracing::debug!("Rendered slide {} ({} bytes)", context.reference, html.len());
        Ok(html)
    }
}

/// Default markdown options, the crate's `views` directory, no template cache.
impl Default for SlideRenderer {
    fn default() -> Self {
        Self::new(
            Box::new(CmarkRenderer::default()),
            TemplateRenderer::new(TemplateRenderer::default_views_dir(), false),
        )
    }
}

impl std::fmt::Debug for SlideRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideRenderer")
            .field("markdown", self.markdown.options())
            .field("templates", &self.templates)
            .finish()
    }
}
