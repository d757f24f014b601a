//! Immutable waypoint catalog: names plus cached unit embeddings.
//!
//! A `Catalog` is built in full from a provider batch and never modified.
//! Replacing the waypoint set means building a new catalog and swapping it
//! in (see `WaypointMatcher::set_waypoints`).

use std::collections::HashSet;

use crate::embedding::normalize;
use crate::error::{MatchError, MatcherResult};

/// One named waypoint and its unit embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub vector: Vec<f32>,
}

/// Ordered set of waypoints sharing one embedding dimensionality.
///
/// Duplicate names are kept as separate entries, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from names and their raw embeddings (same order).
    ///
    /// Every vector is normalized. Fails if the counts differ, a vector is
    /// degenerate, or dimensionalities disagree.
    pub fn from_vectors(names: Vec<String>, vectors: Vec<Vec<f32>>) -> MatcherResult<Self> {
        if names.len() != vectors.len() {
            return Err(MatchError::BatchSize {
                expected: names.len(),
                actual: vectors.len(),
            });
        }

        let mut entries: Vec<CatalogEntry> = Vec::with_capacity(names.len());
        let mut seen = HashSet::new();

        for (name, raw) in names.into_iter().zip(vectors) {
            if let Some(first) = entries.first() {
                let expected = first.vector.len();
                if raw.len() != expected {
                    return Err(MatchError::InconsistentDimension {
                        name,
                        expected,
                        actual: raw.len(),
                    });
                }
            }

            let Some(vector) = normalize(raw) else {
                return Err(MatchError::DegenerateEmbedding { name });
            };

            if !seen.insert(name.clone()) {
                tracing::warn!(waypoint = %name, "duplicate waypoint name kept as separate entry");
            }
            entries.push(CatalogEntry { name, vector });
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shared embedding dimensionality, `None` when empty.
    pub fn dimension(&self) -> Option<usize> {
        self.entries.first().map(|e| e.vector.len())
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Waypoint names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}
