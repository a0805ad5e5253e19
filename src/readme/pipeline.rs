use crate::errors::AgentError;
use crate::files::{collect_files, filter_text, relative_path};
use crate::progress::ProgressReport;
use crate::readme::model::FileSummary;
use crate::readme::prompts::{readme_prompt, summarize_file_prompt};
use crate::textgen::{generate, TextService};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const MAX_TEXT_FILES: usize = 30;
pub const README_FILE_NAME: &str = "README.md";

/// Successful summaries and the files that could not be summarized, both in
/// collection order.
#[derive(Debug, Default)]
struct SummaryBatch {
    summaries: Vec<FileSummary>,
    failures: Vec<String>,
}

/// Summarizes every text file of a folder, one request at a time, and
/// condenses the summaries into the folder's `README.md`.
pub struct SummarizationPipeline {
    service: Arc<dyn TextService>,
}

impl SummarizationPipeline {
    pub fn new(service: Arc<dyn TextService>) -> Self {
        Self { service }
    }

    pub async fn summarize_folder(
        &self,
        folder: &Path,
        progress: &mut ProgressReport,
    ) -> Result<PathBuf, AgentError> {
        let folder = tokio::fs::canonicalize(folder)
            .await
            .map_err(|e| AgentError::io(folder, e))?;
        let readme_path = folder.join(README_FILE_NAME);

        progress.info("Collecting files in this folder to summarize");
        // Any entry counts, including a symlink: writing through one would
        // clobber its target.
        match tokio::fs::symlink_metadata(&readme_path).await {
            Ok(_) => return Err(AgentError::AlreadyExists(readme_path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(AgentError::io(&readme_path, e)),
        }
        let all_files = collect_files(&folder).await?;

        let text_files = filter_text(all_files).await?;
        if text_files.len() > MAX_TEXT_FILES {
            return Err(AgentError::TooManyFiles {
                count: text_files.len(),
                limit: MAX_TEXT_FILES,
            });
        }

        let batch = self.summarize_files(&folder, &text_files, progress).await?;
        tracing::info!(
            folder = %folder.display(),
            summarized = batch.summaries.len(),
            failed = batch.failures.len(),
            "file summaries collected"
        );

        progress.info("Summarizing the summaries");
        let folder_name = folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let readme = generate(&self.service, readme_prompt(&folder_name, &batch.summaries)).await?;

        tokio::fs::write(&readme_path, readme.trim())
            .await
            .map_err(|e| AgentError::io(&readme_path, e))?;
        progress.info("README generated!");
        Ok(readme_path)
    }

    /// A failed request only drops that file; read errors still abort.
    async fn summarize_files(
        &self,
        folder: &Path,
        files: &[PathBuf],
        progress: &mut ProgressReport,
    ) -> Result<SummaryBatch, AgentError> {
        let mut batch = SummaryBatch::default();
        for (index, file) in files.iter().enumerate() {
            let filename = relative_path(folder, file);
            progress.info(format!(
                "Summarizing file {} of {}: {}",
                index + 1,
                files.len(),
                filename
            ));
            let bytes = tokio::fs::read(file)
                .await
                .map_err(|e| AgentError::io(file, e))?;
            let content = String::from_utf8_lossy(&bytes);

            match generate(&self.service, summarize_file_prompt(&filename, &content)).await {
                Ok(summary) => batch.summaries.push(FileSummary { filename, summary }),
                Err(e) => {
                    tracing::debug!(file = %filename, error = %e, "summary request failed");
                    progress.warning(format!("File {filename} couldn't be summarized: {e}"));
                    batch.failures.push(filename);
                }
            }
        }
        Ok(batch)
    }
}
