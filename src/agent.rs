use crate::errors::AgentError;
use crate::progress::{ProgressReport, ProgressStatus};
use crate::readme::{FolderResolver, SummarizationPipeline, TargetFolder};
use crate::textgen::TextService;
use std::path::{Component, PathBuf};
use std::sync::Arc;

/// One README run: where to look, what was asked, and optionally the folder
/// to summarize without asking the service.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub root: PathBuf,
    pub request: String,
    /// Relative to `root`.
    pub folder: Option<PathBuf>,
    pub ignore: Vec<String>,
}

impl RunRequest {
    /// `folder` as a target, provided it stays under `root`: no absolute
    /// paths, no `..` components.
    fn explicit_target(&self) -> Option<Result<TargetFolder, AgentError>> {
        self.folder.as_ref().map(|folder| {
            let mut parts = Vec::new();
            for component in folder.components() {
                match component {
                    Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                    Component::CurDir => {}
                    _ => return Err(AgentError::FolderOutsideRoot(folder.clone())),
                }
            }
            Ok(TargetFolder {
                relative: format!("./{}", parts.join("/")),
                path: self.root.join(folder),
            })
        })
    }
}

/// Resolves the target folder and writes its README, narrating each step
/// into `progress`. Returns the path of the written README.
pub async fn run(
    service: Arc<dyn TextService>,
    req: &RunRequest,
    progress: &mut ProgressReport,
) -> Result<PathBuf, AgentError> {
    progress.info("Getting started...");

    let resolved = match req.explicit_target() {
        Some(target) => target,
        None => {
            FolderResolver::new(Arc::clone(&service), req.ignore.clone())
                .identify_target_folder(&req.root, &req.request)
                .await
        }
    };
    let target = match resolved {
        Ok(target) => target,
        Err(e) => {
            progress.error(e.to_string());
            return Err(e);
        }
    };
    progress.info(format!("I think you mean this folder: {target}"));

    match SummarizationPipeline::new(service)
        .summarize_folder(&target.path, progress)
        .await
    {
        Ok(readme) => {
            progress.set_status(ProgressStatus::Done);
            Ok(readme)
        }
        Err(e) => {
            progress.error(format!("Error generating README: {e}"));
            Err(e)
        }
    }
}
