//! Temporary views directories for rendering tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::constants::SLIDE_TEMPLATE_NAME;
use crate::markdown::CmarkRenderer;
use crate::slide::SlideRenderer;
use crate::templating::TemplateRenderer;

/// A throwaway views directory. Removed when dropped.
#[derive(Debug)]
pub struct ViewsFixture {
    dir: TempDir,
}

impl ViewsFixture {
    /// An empty views directory (no `slide.html`).
    pub fn empty() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temporary views directory")?;
        Ok(Self {
            dir,
        })
    }

    /// A views directory holding a copy of the crate's own `slide.html`.
    pub fn with_default_template() -> Result<Self> {
        let source = TemplateRenderer::default_views_dir().join(SLIDE_TEMPLATE_NAME);
        let template = fs::read_to_string(&source)
            .with_context(|| format!("Failed to read {}", source.display()))?;
        Self::with_slide_template(&template)
    }

    /// A views directory whose `slide.html` is `template`.
    pub fn with_slide_template(template: &str) -> Result<Self> {
        let fixture = Self::empty()?;
        fixture.write_slide_template(template)?;
        Ok(fixture)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn slide_template_path(&self) -> PathBuf {
        self.dir.path().join(SLIDE_TEMPLATE_NAME)
    }

    /// Overwrite `slide.html`.
    pub fn write_slide_template(&self, template: &str) -> Result<()> {
        let path = self.slide_template_path();
        fs::write(&path, template).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// A slide renderer reading templates from this directory.
    pub fn renderer(&self, cache_templates: bool) -> SlideRenderer {
        SlideRenderer::new(
            Box::new(CmarkRenderer::default()),
            TemplateRenderer::new(self.path(), cache_templates),
        )
    }
}
