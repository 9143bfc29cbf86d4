//! Ollama API client for local LLM inference.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::GenConfig;
use crate::prompt::PROBE_PROMPT;

/// Default Ollama server URL.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Non-200 response bodies are truncated to this many characters before
/// being carried in the error, to keep failure payloads bounded.
pub const ERROR_BODY_LIMIT: usize = 200;

/// Classified inference failures. Every variant renders as a message the UI
/// can show in place of the model's answer; none is retried automatically.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Endpoint unreachable (connection refused or similar).
    #[error("could not connect to Ollama at {0}. Make sure Ollama is running locally on port 11434")]
    Connection(String),

    /// The configured timeout elapsed before a response arrived.
    #[error("request timed out after {0:?}. The model may be overloaded or the question too complex; try a simpler question or wait for the model to load")]
    Timeout(Duration),

    /// Non-200 status; `body` is truncated to [`ERROR_BODY_LIMIT`] chars.
    #[error("Ollama returned status {status}: {body}")]
    Http { status: u16, body: String },

    /// Any other transport or parse failure, including a 200 response with
    /// a missing or malformed body.
    #[error("unexpected inference failure: {0}")]
    Other(String),
}

/// Request to the Ollama generate API. Streaming is always off; the caller
/// gets the complete text or a classified failure.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerateOptions>,
}

/// Generation-limiting options.
#[derive(Debug, Serialize)]
struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Response from the Ollama generate API.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the local Ollama `/api/generate` endpoint.
pub struct OllamaClient {
    client: reqwest::Client,
    config: GenConfig,
}

impl OllamaClient {
    /// Create a client for the given configuration.
    pub fn new(config: GenConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// The configured server base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Send a prompt and return the generated text.
    ///
    /// One POST, no retries; a failed call surfaces immediately and retry is
    /// a user action.
    pub async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        let options = if self.config.num_predict.is_none() && self.config.temperature.is_none() {
            None
        } else {
            Some(GenerateOptions {
                num_predict: self.config.num_predict,
                temperature: self.config.temperature,
            })
        };

        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options,
        };

        let url = format!("{}/api/generate", self.config.base_url);
        debug!("POST {} (model {})", url, self.config.model);

        let response = self
            .client
            .post(&url)
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Http {
                status: status.as_u16(),
                body: truncate(&body, ERROR_BODY_LIMIT),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_transport(e))?;
        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| InferenceError::Other(format!("malformed response body: {e}")))?;

        if let Some(error) = parsed.error {
            return Err(InferenceError::Other(error));
        }

        parsed
            .response
            .ok_or_else(|| InferenceError::Other("response field missing from body".to_string()))
    }

    /// Connectivity probe: send the fixed trivial prompt through the same
    /// path and classification as a real question.
    pub async fn ping(&self) -> Result<String, InferenceError> {
        self.generate(PROBE_PROMPT).await
    }

    fn classify_transport(&self, e: reqwest::Error) -> InferenceError {
        if e.is_timeout() {
            InferenceError::Timeout(self.config.timeout)
        } else if e.is_connect() {
            InferenceError::Connection(self.config.base_url.clone())
        } else {
            InferenceError::Other(e.to_string())
        }
    }
}

fn truncate(body: &str, limit: usize) -> String {
    body.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Instant;

    fn client_for(url: String) -> OllamaClient {
        OllamaClient::new(GenConfig::builder().base_url(url).build())
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            model: "gemma2:2b",
            prompt: "hi",
            stream: false,
            options: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gemma2:2b");
        assert_eq!(json["stream"], false);
        assert!(json.get("options").is_none());

        let request = GenerateRequest {
            model: "gemma3:1b",
            prompt: "hi",
            stream: false,
            options: Some(GenerateOptions {
                num_predict: Some(100),
                temperature: Some(0.1),
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["options"]["num_predict"], 100);
    }

    #[tokio::test]
    async fn test_generate_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/generate");
                then.status(200)
                    .json_body(serde_json::json!({"response": "X", "done": true}));
            })
            .await;

        let client = client_for(server.base_url());
        let text = client.generate("any prompt").await.unwrap();

        assert_eq!(text, "X");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/generate");
                then.status(200).body("definitely not json");
            })
            .await;

        let client = client_for(server.base_url());
        let err = client.generate("q").await.unwrap_err();
        assert!(matches!(err, InferenceError::Other(_)));
    }

    #[tokio::test]
    async fn test_generate_missing_response_field() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/generate");
                then.status(200).json_body(serde_json::json!({"done": true}));
            })
            .await;

        let client = client_for(server.base_url());
        let err = client.generate("q").await.unwrap_err();
        assert!(matches!(err, InferenceError::Other(_)));
    }

    #[tokio::test]
    async fn test_generate_api_error_on_200() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/generate");
                then.status(200)
                    .json_body(serde_json::json!({"error": "model not loaded"}));
            })
            .await;

        let client = client_for(server.base_url());
        match client.generate("q").await.unwrap_err() {
            InferenceError::Other(msg) => assert_eq!(msg, "model not loaded"),
            other => panic!("expected Other, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_http_error_body_is_truncated() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/generate");
                then.status(500).body("x".repeat(500));
            })
            .await;

        let client = client_for(server.base_url());
        match client.generate("q").await.unwrap_err() {
            InferenceError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body.chars().count(), ERROR_BODY_LIMIT);
            }
            other => panic!("expected Http, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind then drop a listener so the port is free but nothing accepts.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{addr}"));
        let err = client.generate("q").await.unwrap_err();
        assert!(matches!(err, InferenceError::Connection(_)));
    }

    #[tokio::test]
    async fn test_timeout_elapses_then_fails() {
        // Accept connections but never respond.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept() {
                held.push(stream);
            }
        });

        let timeout = Duration::from_millis(250);
        let client = OllamaClient::new(
            GenConfig::builder()
                .base_url(format!("http://{addr}"))
                .timeout(timeout)
                .build(),
        );

        let start = Instant::now();
        let err = client.generate("q").await.unwrap_err();
        let elapsed = start.elapsed();

        assert!(matches!(err, InferenceError::Timeout(_)));
        // Fails after roughly the configured duration, not instantly and
        // not indefinitely.
        assert!(elapsed >= timeout);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_ping_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/generate");
                then.status(200)
                    .json_body(serde_json::json!({"response": "AI is working!", "done": true}));
            })
            .await;

        let client = client_for(server.base_url());
        let text = client.ping().await.unwrap();
        assert_eq!(text, "AI is working!");
        mock.assert_async().await;
    }
}
