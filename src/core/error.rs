//! Error handling for showoff
//!
//! Two layers, as elsewhere in the crate:
//! - [`SlideError`] - strongly-typed failures for code that handles errors
//! - [`ErrorContext`] - a wrapper adding details and a suggestion for people
//!
//! # Error Categories
//!
//! [`SlideError`] separates the three ways building or rendering a slide can
//! go wrong:
//! - **Initializer**: [`SlideError::UnknownField`], [`SlideError::InvalidField`]
//! - **Directive text**: [`SlideError::Metadata`]
//! - **Template resource**: [`SlideError::Template`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use showoff::core::user_friendly_error;
//! use showoff::slide::{SectionRegistry, Slide};
//!
//! let slide = Slide::new();
//! if let Err(e) = slide.to_html(&SectionRegistry::new()) {
//!     user_friendly_error(e.into()).display();
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::metadata::MetadataError;
use crate::templating::TemplateError;

/// The main error type for slide operations.
#[derive(Error, Debug)]
pub enum SlideError {
    /// A dynamic initializer named a field slides do not have.
    #[error("Unknown slide field '{field}'")]
    UnknownField {
        /// The field name as given
        field: String,
        /// Closest known field name, if any is close enough
        suggestion: Option<String>,
    },

    /// A dynamic initializer gave a known field a value of the wrong type.
    #[error("Invalid value for slide field '{field}': expected {expected}")]
    InvalidField {
        /// The field name
        field: String,
        /// Human description of the accepted value type
        expected: &'static str,
    },

    /// A metadata directive was rejected by the strict parser.
    #[error("Invalid slide directive: {0}")]
    Metadata(#[from] MetadataError),

    /// The slide template could not be loaded or rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Any other failure, carried as text.
    #[error("{message}")]
    Other {
        /// Description of the failure
        message: String,
    },
}

/// An error with optional details and a suggestion for resolving it.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SlideError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: SlideError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

impl From<SlideError> for ErrorContext {
    fn from(error: SlideError) -> Self {
        match error {
            SlideError::UnknownField {
                ref field,
                ref suggestion,
            } => {
                let hint = match suggestion {
                    Some(known) => format!("Did you mean '{known}'?"),
                    None => "Remove the field from the slide initializer".to_string(),
                };
                let details = format!(
                    "'{field}' is not one of: {}",
                    crate::slide::SlideParams::FIELDS.join(", ")
                );
                Self::new(error).with_suggestion(hint).with_details(details)
            }
            SlideError::InvalidField {
                ..
            } => Self::new(error)
                .with_suggestion("Check the value type of the field in the slide initializer"),
            SlideError::Metadata(_) => Self::new(error)
                .with_details("Directives look like 'transition=fade one two #id three'")
                .with_suggestion("Remove the malformed token or give it a name and value"),
            SlideError::Template(ref template) => {
                let suggestion = if template.is_load_failure() {
                    format!(
                        "Make sure {} exists and is readable, or point views_dir at the right directory",
                        template.path().display()
                    )
                } else {
                    format!("Fix the template syntax in {}", template.path().display())
                };
                Self::new(error).with_suggestion(suggestion)
            }
            SlideError::Other {
                ..
            } => Self::new(error),
        }
    }
}

/// Turn any error into an [`ErrorContext`] for display.
///
/// Slide errors get their tailored suggestion. Anything else is reported as
/// [`SlideError::Other`] with its full context chain as details.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    match error.downcast::<SlideError>() {
        Ok(slide_error) => ErrorContext::from(slide_error),
        Err(other) => {
            tracing::debug!("Unclassified error: {:?}", other);
            ErrorContext::new(SlideError::Other {
                message: other.to_string(),
            })
            .with_details(format!("{other:#}"))
        }
    }
}
