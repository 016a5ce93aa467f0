//! Per-slide display metadata parsed from a directive line.
//!
//! A directive is a single space-separated line such as
//!
//! ```text
//! !SLIDE transition=fade one two #intro three
//! ```
//!
//! - `#name` sets the slide id
//! - `key=value` sets a named attribute (`transition` is lifted into its own field)
//! - every other token is a CSS class, kept in first-seen order
//!
//! The leading `!SLIDE` marker is optional.

pub mod directive;

pub use directive::{Metadata, MetadataError};
