//! Minimal blocking client for a locally hosted Ollama model.
//!
//! One POST per call, hard timeout, no retry. Callers decide how to surface
//! a failure; nothing in here prints or panics.

use crate::config::Config;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct OllamaClient {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.to_string(),
            model: model.to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.ollama_url, &cfg.ai_model, cfg.ai_timeout_secs)
    }

    /// Send one prompt to `/api/generate` and return the model's text.
    pub fn generate(&self, prompt: &str) -> AppResult<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let resp = client
            .post(&self.base_url)
            .json(&body)
            .send()?
            .error_for_status()?;

        let parsed: GenerateResponse = resp.json()?;

        if parsed.response.is_empty() {
            Ok("(no response)".to_string())
        } else {
            Ok(parsed.response)
        }
    }
}
