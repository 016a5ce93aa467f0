//! Rendering configuration.
//!
//! A `showoff.toml` file tunes how slides are turned into HTML:
//!
//! ```toml
//! # Directory holding slide.html (relative paths are resolved against
//! # the directory of this file)
//! views_dir = "theme/views"
//!
//! # Reuse parsed templates while the file on disk is unchanged
//! cache_templates = true
//!
//! [markdown]
//! hard_wrap = false
//! superscript = false
//! ```
//!
//! Every key is optional; omitted keys keep their defaults (default views,
//! caching on, every markdown option on). Unknown keys are rejected so typos
//! surface instead of being silently ignored.
//!
//! The `SHOWOFF_VIEWS_DIR` environment variable overrides `views_dir`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::VIEWS_DIR_ENV;
use crate::markdown::MarkdownOptions;
use crate::templating::TemplateRenderer;

/// Settings for rendering slides.
///
/// # Examples
///
/// ```rust
/// use showoff::config::ShowoffConfig;
///
/// let config = ShowoffConfig::from_toml_str("[markdown]\nhard_wrap = false\n")?;
/// assert!(config.cache_templates);
/// assert!(!config.markdown.hard_wrap);
/// assert!(config.markdown.tables);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowoffConfig {
    /// Directory containing the view templates.
    ///
    /// `None` uses the `views` directory shipped with the crate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views_dir: Option<PathBuf>,

    /// Whether a renderer reuses parsed templates whose bytes are unchanged.
    pub cache_templates: bool,

    /// Markdown engine options.
    pub markdown: MarkdownOptions,
}

impl Default for ShowoffConfig {
    fn default() -> Self {
        Self {
            views_dir: None,
            cache_templates: true,
            markdown: MarkdownOptions::default(),
        }
    }
}

impl ShowoffConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML, unknown keys, or values of the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse showoff configuration")
    }

    /// Load configuration from a file.
    ///
    /// A relative `views_dir` is resolved against the directory containing
    /// the file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_toml_str(&source)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        if let (Some(views_dir), Some(base)) = (&config.views_dir, path.parent()) {
            if views_dir.is_relative() {
                config.views_dir = Some(base.join(views_dir));
            }
        }

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a file, or fall back to defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Fails only if the file exists and cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize showoff configuration")
    }

    /// The views directory to use, honoring `SHOWOFF_VIEWS_DIR`.
    pub fn resolved_views_dir(&self) -> PathBuf {
        let env_override = std::env::var_os(VIEWS_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.views_dir_with_override(env_override)
    }

    fn views_dir_with_override(&self, env_override: Option<PathBuf>) -> PathBuf {
        env_override
            .or_else(|| self.views_dir.clone())
            .unwrap_or_else(TemplateRenderer::default_views_dir)
    }
}
