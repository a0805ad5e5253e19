use crate::config::{AppConfig, Backend};
use std::path::PathBuf;

/// Resolves `bin` on `PATH` (or as given, when it is a path).
pub fn check_command(bin: &str) -> Option<PathBuf> {
    if bin.trim().is_empty() {
        return None;
    }
    which::which(bin).ok()
}

pub fn check_ollama(host: &str) -> bool {
    let url = format!("{}/api/tags", host.trim_end_matches('/'));
    reqwest::blocking::Client::new()
        .get(url)
        .send()
        .map(|r| r.status().is_success())
        .unwrap_or(false)
}

pub fn check_gemini(api_key: Option<&str>) -> bool {
    api_key.map_or(false, |k| !k.trim().is_empty())
}

/// Best-effort reachability of the configured backend. Blocking.
pub fn check_backend(cfg: &AppConfig) -> bool {
    match cfg.backend {
        Backend::Ollama => check_ollama(&cfg.ollama_host),
        Backend::Gemini => check_gemini(cfg.gemini_api_key.as_deref()),
        Backend::Command => check_command(&cfg.command_path).is_some(),
        Backend::Extractive => true,
    }
}
