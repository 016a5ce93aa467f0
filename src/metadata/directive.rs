//! Directive parsing into [`Metadata`].

use std::collections::BTreeMap;

use thiserror::Error;

use crate::constants::SLIDE_DIRECTIVE_MARKER;

/// Attribute key lifted into [`Metadata::transition`].
const TRANSITION_KEY: &str = "transition";

/// Errors raised by [`Metadata::try_parse`] for malformed directive tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// A `key=value` token with nothing before the `=`.
    #[error("directive token '{token}' has an empty attribute name")]
    EmptyKey {
        /// The offending token as written
        token: String,
    },

    /// A `key=value` token with nothing after the `=`.
    #[error("directive attribute '{key}' has an empty value")]
    EmptyValue {
        /// Attribute name
        key: String,
    },

    /// A bare `#` token.
    #[error("directive contains '#' without an id")]
    EmptyId,

    /// More than one `#id` token in the same directive.
    #[error("directive sets the id twice ('{first}' and '{second}')")]
    DuplicateId {
        /// The id seen first
        first: String,
        /// The conflicting id
        second: String,
    },
}

/// Structured display attributes of a single slide.
///
/// The [`Default`] value is the empty metadata every slide without a
/// directive reports: no classes, no transition, no id.
///
/// # Examples
///
/// ```rust
/// use showoff::metadata::Metadata;
///
/// let meta = Metadata::parse("transition=fade one two #id3 three");
/// assert_eq!(meta.classes(), ["one", "two", "three"]);
/// assert_eq!(meta.transition(), Some("fade"));
/// assert_eq!(meta.id(), Some("id3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    classes: Vec<String>,
    transition: Option<String>,
    id: Option<String>,
    attributes: BTreeMap<String, String>,
}

impl Metadata {
    /// Parse a directive, skipping malformed tokens.
    ///
    /// This never fails: each token [`Metadata::try_parse`] would reject is
    /// logged and dropped, and the remaining tokens are kept. For a repeated
    /// `#id` the first id wins.
    pub fn parse(directive: &str) -> Self {
        let parsed = Self::parse_tokens(directive, |e| {
            tracing::warn!(
                "Ignoring malformed token in slide directive '{}': {}",
                directive.trim(),
                e
            );
            Ok(())
        });
        // the callback above never returns an error
        parsed.unwrap_or_default()
    }

    /// Parse a directive, reporting the first malformed token.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] for empty attribute names or values, a bare
    /// `#`, or a second `#id` token.
    pub fn try_parse(directive: &str) -> Result<Self, MetadataError> {
        Self::parse_tokens(directive, Err)
    }

    /// Shared token loop. `on_error` decides whether a malformed token aborts
    /// the parse or is skipped.
    fn parse_tokens<F>(directive: &str, mut on_error: F) -> Result<Self, MetadataError>
    where
        F: FnMut(MetadataError) -> Result<(), MetadataError>,
    {
        let mut metadata = Self::default();
        let mut tokens = directive.split_whitespace().peekable();

        if tokens.peek().is_some_and(|t| t.eq_ignore_ascii_case(SLIDE_DIRECTIVE_MARKER)) {
            tokens.next();
        }

        for token in tokens {
            if let Err(e) = metadata.apply_token(token) {
                on_error(e)?;
            }
        }

        tracing::trace!(
            "Parsed directive: {} class(es), transition={:?}, id={:?}",
            metadata.classes.len(),
            metadata.transition,
            metadata.id
        );

        Ok(metadata)
    }

    /// Fold one token into `self`. A rejected token leaves `self` unchanged.
    fn apply_token(&mut self, token: &str) -> Result<(), MetadataError> {
        if let Some(id) = token.strip_prefix('#') {
            if id.is_empty() {
                return Err(MetadataError::EmptyId);
            }
            if let Some(first) = &self.id {
                return Err(MetadataError::DuplicateId {
                    first: first.clone(),
                    second: id.to_string(),
                });
            }
            self.id = Some(id.to_string());
        } else if let Some((key, value)) = token.split_once('=') {
            if key.is_empty() {
                return Err(MetadataError::EmptyKey {
                    token: token.to_string(),
                });
            }
            if value.is_empty() {
                return Err(MetadataError::EmptyValue {
                    key: key.to_string(),
                });
            }
            if key == TRANSITION_KEY {
                self.transition = Some(value.to_string());
            } else {
                self.attributes.insert(key.to_string(), value.to_string());
            }
        } else if !self.classes.iter().any(|c| c == token) {
            self.classes.push(token.to_string());
        }
        Ok(())
    }

    /// CSS classes in the order they first appeared.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn transition(&self) -> Option<&str> {
        self.transition.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Look up a named `key=value` attribute other than `transition`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// All named attributes other than `transition`, sorted by key.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// True when the metadata carries nothing at all.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
            && self.transition.is_none()
            && self.id.is_none()
            && self.attributes.is_empty()
    }
}
