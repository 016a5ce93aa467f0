//! The read-only view of a slide handed to the slide template.

use serde::Serialize;

/// Values a slide template can reference.
///
/// | field | meaning |
/// |---|---|
/// | `content_as_html` | rendered markdown; mark it `safe` in the template |
/// | `classes` | space-joined CSS classes, possibly empty |
/// | `transition` | transition name, `none` by default |
/// | `id` | slide id, possibly empty |
/// | `reference` | `section/sequence` locator |
/// | `sequence` | position within the section |
/// | `section` | section title, absent for loose slides |
/// | `empty` | whether the slide has no visible content |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideContext {
    pub content_as_html: String,
    pub classes: String,
    pub transition: String,
    pub id: String,
    pub reference: String,
    pub sequence: u32,
    pub section: Option<String>,
    pub empty: bool,
}

impl SlideContext {
    /// Log every field at debug level, truncating long values.
    pub(crate) fn log_as_kv(&self) {
        let Ok(serde_json::Value::Object(map)) = serde_json::to_value(self) else {
            return;
        };
        for (key, value) in map {
            match value {
                serde_json::Value::String(s) if s.chars().count() > 100 => {
                    let head: String = s.chars().take(97).collect();
                    tracing::debug!("  {}: \"{}...\" ({} chars)", key, head, s.chars().count());
                }
                other => tracing::debug!("  {}: {}", key, other),
            }
        }
    }
}
