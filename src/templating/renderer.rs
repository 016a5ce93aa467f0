//! Template rendering engine with Tera.
//!
//! This module provides the [`TemplateRenderer`] that loads view templates from
//! a views directory and renders them with Tera.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context as TeraContext, Tera};

use super::cache::{TemplateCache, content_hash};
use super::error::{TemplateError, format_tera_error};
use crate::constants::VIEWS_DIR_NAME;

/// Loads templates from a views directory and renders them.
///
/// Templates are read from storage on every [`render`](Self::render) call.
/// With caching enabled the parsed template is reused as long as the file
/// bytes are unchanged, which skips the parse without changing the output.
///
/// # Examples
///
/// ```rust,no_run
/// use showoff::templating::{SlideContext, TemplateRenderer};
///
/// # fn example(context: &SlideContext) -> Result<(), showoff::templating::TemplateError> {
/// let mut renderer = TemplateRenderer::new(TemplateRenderer::default_views_dir(), true);
/// let html = renderer.render("slide.html", context)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TemplateRenderer {
    views_dir: PathBuf,
    cache_enabled: bool,
    cache: TemplateCache,
}

impl TemplateRenderer {
    pub fn new(views_dir: impl Into<PathBuf>, cache_enabled: bool) -> Self {
        Self {
            views_dir: views_dir.into(),
            cache_enabled,
            cache: TemplateCache::new(),
        }
    }

    /// The `views` directory shipped next to this crate's sources.
    pub fn default_views_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(VIEWS_DIR_NAME)
    }

    pub fn views_dir(&self) -> &Path {
        &self.views_dir
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    /// Full path of the template called `name`.
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.views_dir.join(name)
    }

    /// Render the template called `name` with `context`.
    ///
    /// # Errors
    ///
    /// - [`TemplateError::NotFound`] if the template file does not exist
    /// - [`TemplateError::Read`] if it cannot be read
    /// - [`TemplateError::Syntax`] if Tera cannot parse it
    /// - [`TemplateError::Render`] if rendering the context fails
    pub fn render<C: Serialize>(
        &mut self,
        name: &str,
        context: &C,
    ) -> Result<String, TemplateError> {
        let path = self.template_path(name);
        let source = Self::load(&path)?;
        let hash = content_hash(&source);

        let tera_context =
            TeraContext::from_serialize(context).map_err(|e| TemplateError::Render {
                path: path.clone(),
                message: format_tera_error(&e),
            })?;

        if self.cache_enabled {
            if let Some(tera) = self.cache.get(&path, hash) {
                tracing::trace!("Template cache hit for {}", path.display());
                return Self::render_parsed(tera, name, &tera_context, &path);
            }
        }

        tracing::debug!("Parsing template {} ({} bytes)", path.display(), source.len());
        let mut tera = Tera::default();
        tera.set_escape_fn(escape_markup);
        tera.add_raw_template(name, &source).map_err(|e| TemplateError::Syntax {
            path: path.clone(),
            message: format_tera_error(&e),
        })?;

        let rendered = Self::render_parsed(&tera, name, &tera_context, &path)?;
        if self.cache_enabled {
            self.cache.insert(path, hash, tera);
        }
        Ok(rendered)
    }

    /// Cache statistics as `(hits, misses)`.
    pub fn cache_stats(&self) -> (usize, usize) {
        self.cache.stats()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn load(path: &Path) -> Result<String, TemplateError> {
        std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                TemplateError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                TemplateError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })
    }

    fn render_parsed(
        tera: &Tera,
        name: &str,
        context: &TeraContext,
        path: &Path,
    ) -> Result<String, TemplateError> {
        tera.render(name, context).map_err(|e| TemplateError::Render {
            path: path.to_path_buf(),
            message: format_tera_error(&e),
        })
    }
}

/// Auto-escape for `.html` templates.
///
/// Same as Tera's default except that `/` is left alone, so values such as a
/// slide reference (`Intro/1`) read the same in the markup as in the context.
fn escape_markup(input: &str) -> String {
    let mut output = String::with_capacity(input.len() + input.len() / 4);
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(c),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_views_dir_points_at_crate_views() {
        let dir = TemplateRenderer::default_views_dir();
        assert!(dir.ends_with(VIEWS_DIR_NAME));
        assert!(dir.join("slide.html").is_file());
    }

    #[test]
    fn test_template_path_joins_views_dir() {
        let renderer = TemplateRenderer::new("/tmp/views", false);
        assert_eq!(renderer.template_path("slide.html"), PathBuf::from("/tmp/views/slide.html"));
        assert!(!renderer.cache_enabled());
    }

    #[test]
    fn test_tera_escapes_html_templates() {
        let mut tera = Tera::default();
        tera.add_raw_template("t.html", "{{ raw }}|{{ raw | safe }}").unwrap();
        let context = TeraContext::from_serialize(json!({ "raw": "<b>" })).unwrap();
        assert_eq!(tera.render("t.html", &context).unwrap(), "&lt;b&gt;|<b>");
    }

    #[test]
    fn test_escape_markup_keeps_slashes() {
        assert_eq!(escape_markup("Intro/1"), "Intro/1");
        assert_eq!(
            escape_markup(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }
}
