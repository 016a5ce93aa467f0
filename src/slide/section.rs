//! Sections a slide can belong to.
//!
//! Slides do not hold their section. They hold a [`SectionId`] into a
//! [`SectionRegistry`] owned by whatever assembles the presentation, so slides
//! can be reordered and sections rebuilt or renamed without touching slides.

use serde::{Deserialize, Serialize};

/// Index of a section inside a [`SectionRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(usize);

impl SectionId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// A titled group of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: String,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Owner of every section of a presentation.
///
/// # Examples
///
/// ```rust
/// use showoff::slide::SectionRegistry;
///
/// let mut sections = SectionRegistry::new();
/// let intro = sections.register("Intro");
/// assert_eq!(sections.title(intro), Some("Intro"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section and return its id.
    pub fn register(&mut self, title: impl Into<String>) -> SectionId {
        self.sections.push(Section::new(title));
        SectionId(self.sections.len() - 1)
    }

    pub fn get(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id.0)
    }

    pub fn title(&self, id: SectionId) -> Option<&str> {
        self.get(id).map(Section::title)
    }

    /// Change a section's title. Returns `false` for an unknown id.
    pub fn rename(&mut self, id: SectionId, title: impl Into<String>) -> bool {
        match self.sections.get_mut(id.0) {
            Some(section) => {
                section.title = title.into();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &Section)> {
        self.sections.iter().enumerate().map(|(i, s)| (SectionId(i), s))
    }
}
