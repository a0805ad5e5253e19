//! Google Gemini `generateContent` backend.

use crate::errors::GenerateError;
use crate::textgen::TextService;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

pub struct GeminiTextService {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiTextService {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            base_url,
            api_key,
            model,
            client: Client::new(),
        }
    }
}

impl TextService for GeminiTextService {
    fn backend(&self) -> &'static str {
        "gemini"
    }

    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| GenerateError::Http(format!("gemini request failed: {e}")))?;
        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().unwrap_or_default();
            return Err(GenerateError::Http(format!("gemini status {status}: {detail}")));
        }
        let parsed: GeminiResponse = resp
            .json()
            .map_err(|e| GenerateError::Http(format!("decode response: {e}")))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| GenerateError::Other("no candidates in gemini response".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textgen::testing::serve_once;

    #[test]
    fn returns_first_candidate_text() {
        let (host, handle) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"./docs"}]}},{"content":{"parts":[{"text":"./src"}]}}]}"#,
        );
        let s = GeminiTextService::new(host, "secret".into(), "gemini-pro".into());
        assert_eq!(s.generate("pick a folder").unwrap(), "./docs");

        let request = handle.join().unwrap();
        assert!(request.starts_with("POST /gemini-pro:generateContent?key=secret"));
        assert!(request.contains("\"text\":\"pick a folder\""));
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let (host, handle) = serve_once("200 OK", r#"{"candidates":[]}"#);
        let s = GeminiTextService::new(host, "k".into(), "gemini-pro".into());
        assert!(matches!(s.generate("x"), Err(GenerateError::Other(_))));
        let _ = handle.join();
    }

    #[test]
    fn error_status_includes_body() {
        let (host, handle) = serve_once("403 Forbidden", r#"{"error":"bad key"}"#);
        let s = GeminiTextService::new(host, "k".into(), "gemini-pro".into());
        match s.generate("x").unwrap_err() {
            GenerateError::Http(msg) => {
                assert!(msg.contains("403"));
                assert!(msg.contains("bad key"));
            }
            other => panic!("expected http error, got {other:?}"),
        }
        let _ = handle.join();
    }
}
