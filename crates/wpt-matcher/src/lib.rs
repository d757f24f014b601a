//! Waypoint disambiguation engine.
//!
//! Holds a catalog of named waypoints with cached unit embeddings, ranks the
//! catalog against a query vector by cosine similarity, and applies a
//! two-gate clarification policy (absolute score floor, then rank-1/rank-2
//! margin) to decide between auto-selecting a waypoint and asking the user.
//!
//! The embedding backend is injected through [`EmbeddingProvider`]; tests use
//! [`MockEmbedder`] with synthetic vectors.

pub mod catalog;
pub mod embedding;
pub mod error;
pub mod matcher;
pub mod mock;
pub mod policy;
pub mod rank;

// Re-export key types for convenience
pub use catalog::{Catalog, CatalogEntry};
pub use embedding::EmbeddingProvider;
pub use error::{EmbedError, EmbedResult, MatchError, MatcherResult};
pub use matcher::WaypointMatcher;
pub use mock::MockEmbedder;
pub use policy::MatchParams;
