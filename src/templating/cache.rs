//! Parsed-template cache.
//!
//! Parsing a template is the only expensive step of a slide render. The cache
//! keeps the parsed [`Tera`] instance per template path together with a hash of
//! the bytes it was parsed from. The renderer still reads the file on every
//! call and only reuses the parsed form when the bytes are unchanged, so edits
//! on disk are always picked up.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use tera::Tera;

/// Hash of a template's source text.
pub(crate) fn content_hash(source: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug)]
struct CachedTemplate {
    content_hash: u64,
    tera: Tera,
}

/// Cache of parsed templates keyed by path, validated by content hash.
#[derive(Debug, Default)]
pub struct TemplateCache {
    entries: HashMap<PathBuf, CachedTemplate>,
    hits: usize,
    misses: usize,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the parsed template for `path` if it was parsed from the same bytes.
    pub(crate) fn get(&mut self, path: &Path, content_hash: u64) -> Option<&Tera> {
        match self.entries.get(path) {
            Some(entry) if entry.content_hash == content_hash => {
                self.hits += 1;
                Some(&entry.tera)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a parsed template, replacing any stale entry for the same path.
    pub(crate) fn insert(&mut self, path: PathBuf, content_hash: u64, tera: Tera) {
        self.entries.insert(
            path,
            CachedTemplate {
                content_hash,
                tera,
            },
        );
    }

    /// Number of cached templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached template and reset the statistics.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Cache statistics as `(hits, misses)`.
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }

    /// Hit rate as a percentage.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}
