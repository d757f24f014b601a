//! Mock embedding provider for testing.
//!
//! Serves fixed vectors keyed by exact text and records every batch request,
//! so tests can pin similarity scores without a real model.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::embedding::EmbeddingProvider;
use crate::error::{EmbedError, EmbedResult};

/// Mock embedder with fixed vectors and request recording.
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    /// Every batch passed to `embed_batch` (for test assertions).
    requests: Mutex<Vec<Vec<String>>>,
    /// When set, every request fails with this message.
    failure: Option<String>,
}

impl MockEmbedder {
    /// Create a mock with no known texts.
    pub fn new() -> Self {
        Self {
            vectors: HashMap::new(),
            requests: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Create a mock whose every request fails.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Register the vector returned for `text`.
    pub fn insert(&mut self, text: impl Into<String>, vector: Vec<f32>) {
        self.vectors.insert(text.into(), vector);
    }

    /// Builder form of [`MockEmbedder::insert`].
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.insert(text, vector);
        self
    }

    /// Build a mock where `query` has exactly the given similarity to each target.
    ///
    /// The query is the first basis vector; target `i` is
    /// `score * e0 + sqrt(1 - score²) * e(i+1)`, so every vector is unit
    /// length and `dot(query, target_i) == score`. Scores must lie in [-1, 1].
    pub fn scored(query: &str, targets: &[(&str, f32)]) -> Self {
        let dim = targets.len() + 1;
        let mut mock = Self::new();

        let mut q = vec![0.0; dim];
        q[0] = 1.0;
        mock.insert(query, q);

        for (i, (name, score)) in targets.iter().enumerate() {
            let mut v = vec![0.0; dim];
            v[0] = *score;
            v[i + 1] = (1.0 - score * score).max(0.0).sqrt();
            mock.insert(*name, v);
        }
        mock
    }

    /// Copies of all batch requests made so far.
    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of `embed_batch` calls made so far.
    pub fn batch_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> EmbedResult<Vec<Vec<f32>>> {
        self.requests.lock().unwrap().push(texts.to_vec());

        if let Some(message) = &self.failure {
            return Err(EmbedError::Request(message.clone()));
        }

        texts
            .iter()
            .map(|t| {
                self.vectors
                    .get(t)
                    .cloned()
                    .ok_or_else(|| EmbedError::Response(format!("no mock vector for {t:?}")))
            })
            .collect()
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::dot;

    #[tokio::test]
    async fn returns_registered_vectors() {
        let mock = MockEmbedder::new().with_vector("roof", vec![0.0, 1.0]);
        let v = mock.embed("roof").await.unwrap();
        assert_eq!(v, vec![0.0, 1.0]);
    }

    #[tokio::test]
    async fn unknown_text_is_an_error() {
        let mock = MockEmbedder::new();
        let result = mock.embed("nowhere").await;
        assert!(matches!(result, Err(EmbedError::Response(_))));
    }

    #[tokio::test]
    async fn records_batches() {
        let mock = MockEmbedder::scored("q", &[("a", 0.5), ("b", 0.1)]);
        mock.embed_batch(&["a".into(), "b".into()]).await.unwrap();
        mock.embed("q").await.unwrap();

        assert_eq!(mock.batch_calls(), 2);
        assert_eq!(mock.requests()[0], vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn scored_vectors_hit_target_similarity() {
        let mock = MockEmbedder::scored("q", &[("a", 0.9), ("b", -0.3)]);
        let q = mock.embed("q").await.unwrap();
        let a = mock.embed("a").await.unwrap();
        let b = mock.embed("b").await.unwrap();
        assert!((dot(&q, &a) - 0.9).abs() < 1e-6);
        assert!((dot(&q, &b) + 0.3).abs() < 1e-6);
    }

    #[tokio::test]
    async fn failing_mock_errors() {
        let mock = MockEmbedder::failing("model offline");
        let result = mock.embed_batch(&["a".into()]).await;
        assert!(matches!(result, Err(EmbedError::Request(m)) if m == "model offline"));
        assert_eq!(mock.batch_calls(), 1);
    }
}
