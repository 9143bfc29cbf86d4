//! Generation configuration and presets.

use std::time::Duration;

/// Which prompt template to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Full technical analysis, no length constraint.
    Verbose,
    /// 2-3 sentence answers for resource-constrained hardware; pairs with
    /// capped `num_predict` and low temperature.
    Concise,
}

/// Configuration for one inference flow.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Base URL of the Ollama server.
    pub base_url: String,
    /// Model identifier (e.g. `gemma2:2b`).
    pub model: String,
    /// Per-request timeout; the only bound on call duration.
    pub timeout: Duration,
    /// Prompt template variant.
    pub style: PromptStyle,
    /// Cap on generated tokens, if any.
    pub num_predict: Option<i32>,
    /// Sampling temperature, if overridden.
    pub temperature: Option<f32>,
}

impl GenConfig {
    /// The uncapped preset: full answers, default sampling, 30 s timeout.
    pub fn verbose() -> Self {
        Self {
            base_url: crate::DEFAULT_OLLAMA_URL.to_string(),
            model: "gemma2:2b".to_string(),
            timeout: Duration::from_secs(30),
            style: PromptStyle::Verbose,
            num_predict: None,
            temperature: None,
        }
    }

    /// The capped preset for slower hardware: short answers, ~100 generated
    /// tokens, low temperature, and a 2 minute timeout ceiling.
    pub fn concise() -> Self {
        Self {
            base_url: crate::DEFAULT_OLLAMA_URL.to_string(),
            model: "gemma3:1b".to_string(),
            timeout: Duration::from_secs(120),
            style: PromptStyle::Concise,
            num_predict: Some(100),
            temperature: Some(0.1),
        }
    }

    /// Apply environment overrides on top of this config.
    ///
    /// Recognized variables: `WINDLAB_URL`, `WINDLAB_MODEL`,
    /// `WINDLAB_TIMEOUT_SECS`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("WINDLAB_URL") {
            self.base_url = url;
        }
        if let Ok(model) = std::env::var("WINDLAB_MODEL") {
            self.model = model;
        }
        if let Some(secs) = std::env::var("WINDLAB_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }

    /// Create a builder seeded with the verbose preset.
    pub fn builder() -> GenConfigBuilder {
        GenConfigBuilder::default()
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self::verbose()
    }
}

/// Builder for [`GenConfig`].
#[derive(Debug, Default)]
pub struct GenConfigBuilder {
    config: GenConfig,
}

impl GenConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn style(mut self, style: PromptStyle) -> Self {
        self.config.style = style;
        self
    }

    pub fn num_predict(mut self, tokens: i32) -> Self {
        self.config.num_predict = Some(tokens);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = Some(temperature);
        self
    }

    pub fn build(self) -> GenConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let verbose = GenConfig::verbose();
        assert_eq!(verbose.model, "gemma2:2b");
        assert_eq!(verbose.timeout, Duration::from_secs(30));
        assert_eq!(verbose.style, PromptStyle::Verbose);
        assert!(verbose.num_predict.is_none());

        let concise = GenConfig::concise();
        assert_eq!(concise.model, "gemma3:1b");
        assert_eq!(concise.timeout, Duration::from_secs(120));
        assert_eq!(concise.style, PromptStyle::Concise);
        assert_eq!(concise.num_predict, Some(100));
        assert_eq!(concise.temperature, Some(0.1));
    }

    #[test]
    fn test_builder() {
        let config = GenConfig::builder()
            .base_url("http://myserver:11434")
            .model("llama3:8b")
            .timeout(Duration::from_secs(5))
            .build();
        assert_eq!(config.base_url, "http://myserver:11434");
        assert_eq!(config.model, "llama3:8b");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
