use crate::errors::GenerateError;
use crate::textgen::TextService;
use reqwest::blocking::Client;
use serde::Deserialize;

pub struct OllamaTextService {
    host: String,
    model: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaTextService {
    pub fn new(host: String, model: String) -> Self {
        Self {
            host,
            model,
            client: Client::new(),
        }
    }
}

impl TextService for OllamaTextService {
    fn backend(&self) -> &'static str {
        "ollama"
    }

    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = format!("{}/api/generate", self.host.trim_end_matches('/'));
        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "options": { "temperature": 0.2, "top_p": 0.9 },
            "stream": false,
        });

        // Single attempt: a failed call is reported to the caller as-is.
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| GenerateError::Http(format!("connect {}: {}", self.host, e)))?;
        if !resp.status().is_success() {
            return Err(GenerateError::Http(format!(
                "status {} from {}",
                resp.status(),
                self.host
            )));
        }
        let parsed: GenerateResponse = resp
            .json()
            .map_err(|e| GenerateError::Http(format!("decode response: {e}")))?;
        Ok(parsed.response)
    }
}
