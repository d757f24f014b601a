//! Similarity ranking of the catalog against a query vector.

use std::cmp::Ordering;

use wpt_protocol::matching::RankedCandidate;

use crate::catalog::Catalog;
use crate::embedding::{NORM_EPSILON, dot, norm};
use crate::error::{MatchError, MatcherResult};

/// Allowed deviation of the query norm from 1.0.
pub const UNIT_TOLERANCE: f32 = 1e-3;

/// Rank every catalog entry by similarity to `query`, best first.
///
/// `query` must be unit length: a zero or non-finite query is
/// `DegenerateQuery`, any other norm outside `1 ± UNIT_TOLERANCE` is
/// `NonUnitQuery`. Equal scores keep catalog order. An empty catalog yields
/// an empty ranking for any query.
pub fn rank(catalog: &Catalog, query: &[f32]) -> MatcherResult<Vec<RankedCandidate>> {
    let Some(expected) = catalog.dimension() else {
        return Ok(Vec::new());
    };
    if query.len() != expected {
        return Err(MatchError::DimensionMismatch {
            expected,
            actual: query.len(),
        });
    }
    if query.iter().any(|x| !x.is_finite()) {
        return Err(MatchError::DegenerateQuery);
    }
    let n = norm(query);
    if n < NORM_EPSILON {
        return Err(MatchError::DegenerateQuery);
    }
    if (n - 1.0).abs() > UNIT_TOLERANCE {
        return Err(MatchError::NonUnitQuery { norm: n });
    }

    let mut ranked: Vec<RankedCandidate> = catalog
        .entries()
        .iter()
        .map(|e| RankedCandidate::new(e.name.clone(), dot(&e.vector, query)))
        .collect();

    // sort_by is stable: ties stay in catalog order
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    Ok(ranked)
}
