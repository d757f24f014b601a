//! The waypoint disambiguation engine.
//!
//! Owns the current catalog snapshot and the injected embedding provider.
//! The snapshot lives behind a `RwLock<Arc<Catalog>>`: `set_waypoints`
//! builds the replacement without holding the lock and only takes the write
//! lock to swap it in, while matching clones the `Arc` under the read lock.
//! Readers therefore see either the old catalog or the new one, never a mix.

use std::sync::{Arc, PoisonError, RwLock};

use wpt_protocol::matching::MatchResult;

use crate::catalog::Catalog;
use crate::embedding::{EmbeddingProvider, normalize};
use crate::error::{MatchError, MatcherResult};
use crate::policy::{self, MatchParams};
use crate::rank;

/// Matches free-text place references against a catalog of named waypoints.
pub struct WaypointMatcher {
    provider: Arc<dyn EmbeddingProvider>,
    catalog: RwLock<Arc<Catalog>>,
}

impl WaypointMatcher {
    /// Create an engine with an empty catalog.
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            provider,
            catalog: RwLock::new(Arc::new(Catalog::empty())),
        }
    }

    /// Replace the whole catalog.
    ///
    /// All names are embedded in one batched provider call. On any error the
    /// previous catalog stays in place. An empty list clears the catalog
    /// without calling the provider.
    pub async fn set_waypoints<I, S>(&self, names: I) -> MatcherResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let next = if names.is_empty() {
            Catalog::empty()
        } else {
            let vectors = self.provider.embed_batch(&names).await.map_err(|e| {
                tracing::warn!(
                    error = %e,
                    provider = self.provider.name(),
                    "waypoint embedding failed, keeping previous catalog"
                );
                MatchError::from(e)
            })?;
            Catalog::from_vectors(names, vectors)?
        };

        tracing::info!(
            count = next.len(),
            dimension = next.dimension().unwrap_or(0),
            "waypoint catalog replaced"
        );
        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(next);
        Ok(())
    }

    /// Current catalog snapshot.
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Match a unit query vector against the catalog.
    ///
    /// A query that is not unit length is rejected with `NonUnitQuery`
    /// rather than scored, since the gates assume cosine scores.
    pub fn match_vector(&self, query: &[f32], params: &MatchParams) -> MatcherResult<MatchResult> {
        params.validate()?;
        let catalog = self.catalog();
        let ranking = rank::rank(&catalog, query)?;
        Ok(policy::decide(ranking, params))
    }

    /// Embed `text` with the injected provider, then match it.
    ///
    /// Against an empty catalog this returns the no-candidates result
    /// without calling the provider.
    pub async fn match_text(&self, text: &str, params: &MatchParams) -> MatcherResult<MatchResult> {
        params.validate()?;
        if self.catalog().is_empty() {
            return Ok(MatchResult::no_candidates());
        }

        let raw = self.provider.embed(text).await?;
        let query = normalize(raw).ok_or(MatchError::DegenerateQuery)?;
        self.match_vector(&query, params)
    }
}
