use crate::config::{AppConfig, Backend};
use crate::errors::GenerateError;
use std::sync::Arc;

/// Opaque text-generation service: one prompt in, one completion out.
pub trait TextService: Send + Sync {
    fn backend(&self) -> &'static str;
    fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

mod command;
mod extractive;
#[cfg(feature = "backend-gemini")]
mod gemini;
mod ollama;

const DEFAULT_OLLAMA_MODEL: &str = "llama3.2:3b-instruct";
#[cfg(feature = "backend-gemini")]
const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

/// Builds the configured backend. HTTP backends hold a blocking client, so
/// call this from a blocking context (e.g. `spawn_blocking`).
pub fn build_text_service(cfg: &AppConfig) -> Arc<dyn TextService> {
    match cfg.backend {
        Backend::Ollama => Arc::new(ollama::OllamaTextService::new(
            cfg.ollama_host.clone(),
            cfg.model
                .clone()
                .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
        )),
        #[cfg(feature = "backend-gemini")]
        Backend::Gemini => Arc::new(gemini::GeminiTextService::new(
            cfg.gemini_base_url.clone(),
            cfg.gemini_api_key.clone().unwrap_or_default(),
            cfg.model
                .clone()
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
        )),
        #[cfg(not(feature = "backend-gemini"))]
        Backend::Gemini => {
            tracing::warn!("gemini backend not compiled in, using extractive backend");
            Arc::new(extractive::ExtractiveTextService::default())
        }
        Backend::Command => Arc::new(command::CommandTextService::new(
            cfg.command_path.clone(),
            cfg.command_args.clone(),
        )),
        Backend::Extractive => Arc::new(extractive::ExtractiveTextService::default()),
    }
}

/// Runs one request on the blocking pool and waits for it. Only one request
/// is ever outstanding per caller.
pub async fn generate(
    service: &Arc<dyn TextService>,
    prompt: String,
) -> Result<String, GenerateError> {
    let service = Arc::clone(service);
    let backend = service.backend();
    tracing::debug!(backend, prompt_bytes = prompt.len(), "text generation request");
    let text = tokio::task::spawn_blocking(move || service.generate(&prompt))
        .await
        .map_err(|e| GenerateError::Other(format!("text service task failed: {e}")))??;
    tracing::debug!(backend, response_bytes = text.len(), "text generation response");
    Ok(text)
}
