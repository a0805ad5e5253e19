use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Local Ollama server
    Ollama,
    /// Google Gemini API
    Gemini,
    /// External command reading the prompt on stdin
    Command,
    /// Offline sentence extraction, no model involved
    Extractive,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "readme-agent")]
#[command(about = "Finds the folder a request talks about and writes a README.md for it", long_about = None)]
pub struct AppConfig {
    /// Root of the source tree
    #[arg(long, env = "README_AGENT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Free-text request naming the folder, e.g. an issue title
    #[arg(long, env = "README_AGENT_REQUEST")]
    pub request: Option<String>,

    /// File holding more request text, e.g. an issue body
    #[arg(long)]
    pub request_file: Option<PathBuf>,

    /// Summarize this folder (relative to --root) instead of asking the model
    #[arg(long)]
    pub folder: Option<PathBuf>,

    /// Names never offered as candidate folders
    #[arg(long, env = "README_AGENT_IGNORE", value_delimiter = ',', default_value = ".git,node_modules")]
    pub ignore: Vec<String>,

    #[arg(long, env = "TEXT_BACKEND", value_enum, default_value = "ollama")]
    pub backend: Backend,

    /// Model name; each backend has its own default
    #[arg(long, env = "TEXT_MODEL")]
    pub model: Option<String>,

    #[arg(long, env = "OLLAMA_HOST", default_value = "http://127.0.0.1:11434")]
    pub ollama_host: String,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta/models"
    )]
    pub gemini_base_url: String,

    #[arg(long, env = "TEXT_COMMAND", default_value = "llm")]
    pub command_path: String,

    /// Extra argument for the command backend (repeatable)
    #[arg(long = "command-arg", allow_hyphen_values = true)]
    pub command_args: Vec<String>,

    /// Markdown file rewritten after every progress update
    #[arg(long, env = "PROGRESS_FILE")]
    pub progress_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env_and_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.folder.is_none() && self.request.is_none() && self.request_file.is_none() {
            return Err("either --folder or a request (--request / --request-file) is required".into());
        }
        match self.backend {
            Backend::Ollama => {
                url::Url::parse(&self.ollama_host)
                    .map_err(|_| "Invalid OLLAMA_HOST URL format".to_string())?;
            }
            Backend::Gemini => {
                if self.gemini_api_key.as_deref().map_or(true, str::is_empty) {
                    return Err("GEMINI_API_KEY is required for the gemini backend".into());
                }
                url::Url::parse(&self.gemini_base_url)
                    .map_err(|_| "Invalid GEMINI_BASE_URL format".to_string())?;
            }
            Backend::Command => {
                if self.command_path.trim().is_empty() {
                    return Err("TEXT_COMMAND must not be empty".into());
                }
            }
            Backend::Extractive => {}
        }
        Ok(())
    }

    /// `--request` and the contents of `--request-file`, joined by a space.
    pub fn request_text(&self) -> std::io::Result<String> {
        let mut parts = Vec::new();
        if let Some(request) = &self.request {
            parts.push(request.trim().to_string());
        }
        if let Some(path) = &self.request_file {
            parts.push(std::fs::read_to_string(path)?.trim().to_string());
        }
        Ok(parts.join(" "))
    }
}
