//! Explicit slide initializer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strsim::levenshtein;

use super::SectionId;
use crate::constants::MAX_SUGGESTION_DISTANCE;
use crate::core::SlideError;

/// Initial field values for a [`Slide`](super::Slide).
///
/// Every field is optional; absent fields keep the slide defaults. Applying
/// params runs each present value through the matching setter, so `content`
/// gains its trailing newline and `metadata` is parsed as a directive.
///
/// # Examples
///
/// ```rust
/// use showoff::slide::{Slide, SlideParams};
///
/// let slide = Slide::with_params(SlideParams {
///     content: Some("# Hello".to_string()),
///     metadata: Some("center #hello".to_string()),
///     sequence: Some(3),
///     ..SlideParams::default()
/// });
/// assert_eq!(slide.content(), "# Hello\n");
/// assert_eq!(slide.id(), "hello");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideParams {
    pub content: Option<String>,
    pub metadata: Option<String>,
    pub sequence: Option<u32>,
    pub section: Option<SectionId>,
}

impl SlideParams {
    /// Names accepted by [`SlideParams::from_fields`].
    pub const FIELDS: &'static [&'static str] = &["content", "metadata", "sequence", "section"];

    /// Build params from loosely typed name/value pairs.
    ///
    /// `null` leaves a field unset. Later pairs for the same name win.
    ///
    /// # Errors
    ///
    /// - [`SlideError::UnknownField`] for a name outside [`SlideParams::FIELDS`],
    ///   with the closest known name as suggestion
    /// - [`SlideError::InvalidField`] for a value of the wrong type
    pub fn from_fields<I, K>(fields: I) -> Result<Self, SlideError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut params = Self::default();

        for (key, value) in fields {
            let key = key.as_ref();
            if value.is_null() {
                if !Self::FIELDS.contains(&key) {
                    return Err(unknown_field(key));
                }
                continue;
            }

            match key {
                "content" => params.content = Some(expect_string(key, value)?),
                "metadata" => params.metadata = Some(expect_string(key, value)?),
                "sequence" => {
                    let sequence = value
                        .as_u64()
                        .and_then(|n| u32::try_from(n).ok())
                        .ok_or_else(|| invalid(key, "a non-negative integer"))?;
                    params.sequence = Some(sequence);
                }
                "section" => {
                    let index = value
                        .as_u64()
                        .and_then(|n| usize::try_from(n).ok())
                        .ok_or_else(|| invalid(key, "a section index"))?;
                    params.section = Some(SectionId::new(index));
                }
                other => return Err(unknown_field(other)),
            }
        }

        Ok(params)
    }
}

fn expect_string(field: &str, value: Value) -> Result<String, SlideError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(invalid(field, "a string")),
    }
}

fn invalid(field: &str, expected: &'static str) -> SlideError {
    SlideError::InvalidField {
        field: field.to_string(),
        expected,
    }
}

fn unknown_field(field: &str) -> SlideError {
    tracing::warn!("Rejecting unknown slide field '{}'", field);
    SlideError::UnknownField {
        field: field.to_string(),
        suggestion: closest_field(field),
    }
}

/// Closest known field name within [`MAX_SUGGESTION_DISTANCE`] edits.
fn closest_field(field: &str) -> Option<String> {
    SlideParams::FIELDS
        .iter()
        .map(|known| (levenshtein(field, known), *known))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known.to_string())
}
