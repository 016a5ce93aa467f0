//! Template loading and rendering errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or rendering a view template.
///
/// Loading failures ([`TemplateError::NotFound`], [`TemplateError::Read`])
/// are kept apart from failures inside the template itself
/// ([`TemplateError::Syntax`], [`TemplateError::Render`]) so callers can tell
/// a broken install from a broken template.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template file does not exist.
    #[error("Template not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The template file exists but could not be read.
    #[error("Failed to read template {}: {source}", path.display())]
    Read {
        /// Path of the template
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Tera rejected the template source.
    #[error("Template syntax error in {}: {message}", path.display())]
    Syntax {
        /// Path of the template
        path: PathBuf,
        /// Cleaned-up Tera message
        message: String,
    },

    /// The template parsed but failed while rendering the slide context.
    #[error("Failed to render template {}: {message}", path.display())]
    Render {
        /// Path of the template
        path: PathBuf,
        /// Cleaned-up Tera message
        message: String,
    },
}

impl TemplateError {
    /// Path of the template this error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound {
                path,
            }
            | Self::Read {
                path,
                ..
            }
            | Self::Syntax {
                path,
                ..
            }
            | Self::Render {
                path,
                ..
            } => path.as_path(),
        }
    }

    /// True when the template could not be loaded at all.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Read { .. })
    }
}

/// Flatten a Tera error chain into a single readable message.
///
/// Tera nests the interesting cause several levels deep behind generic
/// "Failed to render" wrappers; every level is collected and the generic
/// wrappers are dropped.
pub(crate) fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut messages = vec![error.to_string()];
    let mut current: Option<&dyn Error> = error.source();
    while let Some(err) = current {
        messages.push(err.to_string());
        current = err.source();
    }

    let useful: Vec<String> = messages
        .into_iter()
        .map(|msg| msg.replace("'__tera_one_off'", "template").trim().to_string())
        .filter(|msg| {
            !msg.is_empty() && !msg.starts_with("Failed to render") && !msg.starts_with("Failed to parse")
        })
        .collect();

    if useful.is_empty() {
        error.to_string()
    } else {
        useful.join("\n  -> ")
    }
}
