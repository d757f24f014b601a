//! Embedding provider abstraction and vector helpers.
//!
//! `EmbeddingProvider` turns text into fixed-length vectors. Two impls ship
//! in this workspace:
//! - `MockEmbedder`: fixed vectors keyed by text (in `mock.rs`)
//! - `OllamaEmbedder`: HTTP client for a local Ollama server (`wpt-interpreter`)
//!
//! Providers are expected to return unit vectors, but the engine normalizes
//! everything it caches or queries with, so a provider that does not is
//! still usable.

use async_trait::async_trait;

use crate::error::{EmbedError, EmbedResult};

/// Norm below which a vector is treated as zero.
pub(crate) const NORM_EPSILON: f32 = 1e-12;

/// Trait for text embedding backends.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of texts. Output order matches input order.
    async fn embed_batch(&self, texts: &[String]) -> EmbedResult<Vec<Vec<f32>>>;

    /// Embed a single text.
    async fn embed(&self, text: &str) -> EmbedResult<Vec<f32>> {
        let mut vectors = self.embed_batch(&[text.to_string()]).await?;
        vectors
            .pop()
            .ok_or_else(|| EmbedError::Response("empty embedding batch".into()))
    }

    /// Name of this backend (for logging).
    fn name(&self) -> &str;
}

/// Dot product of two equal-length vectors.
///
/// For unit vectors this is the cosine similarity.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean length of `v`.
pub fn norm(v: &[f32]) -> f32 {
    dot(v, v).sqrt()
}

/// Scale `v` to unit length.
///
/// Returns `None` for zero-length, empty, or non-finite vectors.
pub fn normalize(mut v: Vec<f32>) -> Option<Vec<f32>> {
    if v.is_empty() || v.iter().any(|x| !x.is_finite()) {
        return None;
    }
    let n = norm(&v);
    if n < NORM_EPSILON || !n.is_finite() {
        return None;
    }
    for x in &mut v {
        *x /= n;
    }
    Some(v)
}
