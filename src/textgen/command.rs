use crate::errors::GenerateError;
use crate::textgen::TextService;
use std::io::Write;
use std::process::{Command, Stdio};

/// Pipes the prompt to an external command's stdin and returns its stdout.
pub struct CommandTextService {
    bin: String,
    args: Vec<String>,
}

impl CommandTextService {
    pub fn new(bin: String, args: Vec<String>) -> Self {
        Self { bin, args }
    }
}

impl TextService for CommandTextService {
    fn backend(&self) -> &'static str {
        "command"
    }

    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        // Looked up per call so a binary installed after startup is picked up.
        let bin = which::which(&self.bin).map_err(|e| {
            tracing::debug!(bin = %self.bin, error = %e, "text command not found");
            GenerateError::Unavailable
        })?;
        let mut child = Command::new(&bin)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|_| GenerateError::Unavailable)?;

        // Feed stdin from another thread so a chatty child can't fill its
        // stdout pipe while we are still writing.
        let writer = child.stdin.take().map(|mut stdin| {
            let prompt = prompt.to_string();
            std::thread::spawn(move || stdin.write_all(prompt.as_bytes()))
        });

        let output = child
            .wait_with_output()
            .map_err(|e| GenerateError::Other(format!("wait for {}: {e}", self.bin)))?;
        if let Some(writer) = writer {
            let written = writer
                .join()
                .map_err(|_| GenerateError::Other("prompt writer panicked".into()))?;
            match written {
                // the command may legitimately exit without reading all of stdin
                Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => {
                    return Err(GenerateError::Other(format!("write prompt: {e}")));
                }
                _ => {}
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GenerateError::Other(format!(
                "{} exited with {}: {}",
                self.bin,
                output.status,
                stderr.trim()
            )));
        }

        let out = String::from_utf8_lossy(&output.stdout).into_owned();
        if out.trim().is_empty() {
            return Err(GenerateError::Unavailable);
        }
        Ok(out)
    }
}
