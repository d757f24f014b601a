//! Ollama embedding client for on-device text embeddings.
//!
//! Calls the local Ollama HTTP API (`/api/embed`) with a sentence-embedding
//! model (MiniLM by default). One request carries the whole batch, so the
//! waypoint catalog is embedded in a single round trip.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wpt_matcher::{EmbedError, EmbedResult, EmbeddingProvider};

/// Configuration for the local Ollama embedding endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    /// Ollama HTTP API base URL.
    #[serde(default = "default_host")]
    pub host: String,
    /// Embedding model to use.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "http://localhost:11434".into()
}
fn default_model() -> String {
    "all-minilm".into()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Ollama embed API request body.
#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

/// Ollama embed API response (only fields we need).
#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

/// Embedding provider backed by a local Ollama server.
pub struct OllamaEmbedder {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaEmbedder {
    pub fn new(config: OllamaConfig) -> EmbedResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EmbedError::Other(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> EmbedResult<Vec<Vec<f32>>> {
        let url = format!("{}/api/embed", self.config.host.trim_end_matches('/'));
        let body = EmbedRequest {
            model: &self.config.model,
            input: texts,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "ollama embed request failed");
                EmbedError::Request(e.to_string())
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "ollama returned non-200");
            return Err(EmbedError::Request(format!(
                "ollama returned status {}",
                response.status()
            )));
        }

        let parsed: EmbedResponse = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to parse ollama embed response");
            EmbedError::Response(e.to_string())
        })?;

        if parsed.embeddings.len() != texts.len() {
            return Err(EmbedError::Response(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                parsed.embeddings.len()
            )));
        }

        tracing::debug!(
            count = texts.len(),
            model = %self.config.model,
            "ollama embeddings received"
        );
        Ok(parsed.embeddings)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Build an OllamaEmbedder pointed at the mock server.
    fn embedder_for(server: &MockServer) -> OllamaEmbedder {
        OllamaEmbedder::new(OllamaConfig {
            host: server.uri(),
            model: "all-minilm".into(),
            timeout_secs: 2,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn embeds_batch_in_one_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/embed"))
            .and(body_partial_json(serde_json::json!({
                "model": "all-minilm",
                "input": ["Kitchen", "Roof"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "all-minilm",
                "embeddings": [[1.0, 0.0], [0.0, 1.0]]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let embedder = embedder_for(&server);
        let vectors = embedder
            .embed_batch(&["Kitchen".into(), "Roof".into()])
            .await
            .unwrap();
        assert_eq!(vectors, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[tokio::test]
    async fn trailing_slash_in_host_is_ignored() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/embed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "embeddings": [[1.0, 0.0]]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let embedder = OllamaEmbedder::new(OllamaConfig {
            host: format!("{}/", server.uri()),
            model: "all-minilm".into(),
            timeout_secs: 2,
        })
        .unwrap();
        let v = embedder.embed("roof vent").await.unwrap();
        assert_eq!(v, vec![1.0, 0.0]);
    }

    #[tokio::test]
    async fn single_embed_uses_batch_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/embed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "embeddings": [[0.6, 0.8]]
            })))
            .mount(&server)
            .await;

        let v = embedder_for(&server).embed("stairs").await.unwrap();
        assert_eq!(v, vec![0.6, 0.8]);
    }

    #[tokio::test]
    async fn server_error_is_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/embed"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = embedder_for(&server).embed("roof").await;
        assert!(matches!(result, Err(EmbedError::Request(_))));
    }

    #[tokio::test]
    async fn wrong_count_is_response_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/embed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "embeddings": [[1.0, 0.0]]
            })))
            .mount(&server)
            .await;

        let result = embedder_for(&server)
            .embed_batch(&["a".into(), "b".into()])
            .await;
        assert!(matches!(result, Err(EmbedError::Response(_))));
    }

    #[tokio::test]
    async fn garbage_body_is_response_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/embed"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = embedder_for(&server).embed("roof").await;
        assert!(matches!(result, Err(EmbedError::Response(_))));
    }

    #[tokio::test]
    async fn timeout_is_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/embed"))
            .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(10)))
            .mount(&server)
            .await;

        // Client timeout is 2s, mock delays 10s → timeout
        let result = embedder_for(&server).embed("roof").await;
        assert!(matches!(result, Err(EmbedError::Request(_))));
    }

    #[test]
    fn config_defaults() {
        let config = OllamaConfig::default();
        assert_eq!(config.host, "http://localhost:11434");
        assert_eq!(config.model, "all-minilm");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn config_from_toml() {
        let toml_str = r#"
host = "http://192.168.1.50:11434"
model = "nomic-embed-text"
timeout_secs = 3
"#;
        let config: OllamaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "http://192.168.1.50:11434");
        assert_eq!(config.model, "nomic-embed-text");
        assert_eq!(config.timeout_secs, 3);
    }
}
