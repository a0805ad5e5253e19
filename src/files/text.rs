use crate::errors::AgentError;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

static BINARY_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "exe", "dll", "so", "dylib", "a", "o", "obj", "lib", "bin", "png", "jpg", "jpeg", "gif",
        "bmp", "ico", "webp", "tiff", "psd", "mp3", "mp4", "avi", "mkv", "mov", "wav", "flac",
        "ogg", "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "zip", "tar", "gz", "bz2", "xz",
        "7z", "rar", "jar", "wasm", "pyc", "class", "ttf", "otf", "woff", "woff2", "sqlite", "db",
    ]
    .into_iter()
    .collect()
});

static TEXT_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "rs", "toml", "md", "markdown", "txt", "json", "yaml", "yml", "js", "mjs", "cjs", "ts",
        "jsx", "tsx", "py", "go", "java", "kt", "c", "cc", "cpp", "h", "hpp", "cs", "rb", "php",
        "html", "htm", "css", "scss", "sass", "less", "xml", "svg", "sh", "bash", "zsh", "fish",
        "lua", "sql", "csv", "ini", "cfg", "conf", "swift", "vue", "svelte",
    ]
    .into_iter()
    .collect()
});

const SAMPLE_BYTES: usize = 8192;
const ASCII_THRESHOLD: f64 = 0.85;

/// Extension first, content second: a known extension decides on its own,
/// anything else is judged from the first 8 KiB of `bytes`.
pub fn is_text_file(path: &Path, bytes: &[u8]) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    if let Some(ext) = ext.as_deref() {
        if TEXT_EXTENSIONS.contains(ext) {
            return true;
        }
        if BINARY_EXTENSIONS.contains(ext) {
            return false;
        }
    }
    looks_like_text(bytes)
}

fn looks_like_text(bytes: &[u8]) -> bool {
    let sample = &bytes[..bytes.len().min(SAMPLE_BYTES)];
    if sample.is_empty() {
        return true;
    }
    if memchr::memchr(0, sample).is_some() {
        return false;
    }
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        // the sample boundary split a multi-byte character
        Err(e) if e.error_len().is_none() => true,
        Err(_) => {
            let ascii = sample.iter().filter(|b| b.is_ascii()).count();
            ascii as f64 / sample.len() as f64 >= ASCII_THRESHOLD
        }
    }
}

/// Keeps the text files of `paths`, in order. Each file is read once.
pub async fn filter_text(paths: Vec<PathBuf>) -> Result<Vec<PathBuf>, AgentError> {
    let mut text_files = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| AgentError::io(&path, e))?;
        if is_text_file(&path, &bytes) {
            text_files.push(path);
        } else {
            tracing::debug!(file = %path.display(), "skipping binary file");
        }
    }
    Ok(text_files)
}
