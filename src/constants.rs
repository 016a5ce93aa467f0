//! Global constants used throughout the showoff codebase.
//!
//! Names of on-disk resources, fallback labels, and environment variables
//! live here so the slide, templating, and config modules agree on them.

/// Name of the directory holding the HTML templates, relative to the crate root.
pub const VIEWS_DIR_NAME: &str = "views";

/// File name of the template every slide is rendered into.
///
/// The `.html` suffix turns on Tera's auto-escaping for this template, so
/// attribute values such as classes and ids are escaped while the rendered
/// markdown is explicitly marked safe inside the template.
pub const SLIDE_TEMPLATE_NAME: &str = "slide.html";

/// Transition reported by a slide whose metadata names none.
pub const DEFAULT_TRANSITION: &str = "none";

/// Label used in a slide reference when the slide belongs to no section.
pub const DEFAULT_SECTION_LABEL: &str = "slide";

/// Marker that may prefix a metadata directive line (`!SLIDE fade #intro`).
pub const SLIDE_DIRECTIVE_MARKER: &str = "!SLIDE";

/// Environment variable overriding the configured views directory.
pub const VIEWS_DIR_ENV: &str = "SHOWOFF_VIEWS_DIR";

/// Maximum Levenshtein distance for "did you mean" field suggestions.
pub const MAX_SUGGESTION_DISTANCE: usize = 3;
