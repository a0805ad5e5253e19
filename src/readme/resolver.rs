use crate::errors::AgentError;
use crate::files::{collect_subfolders, relative_path};
use crate::readme::model::TargetFolder;
use crate::readme::prompts::find_target_folder_prompt;
use crate::textgen::{generate, TextService};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use std::sync::Arc;

pub const MAX_IDENTIFY_SUBFOLDERS: usize = 30;

static SURROUNDING_QUOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^["'`]|["'`]$"#).expect("quote pattern is valid"));

fn with_dot_prefix(path: &str) -> String {
    if path.starts_with("./") {
        path.to_string()
    } else {
        format!("./{path}")
    }
}

/// Trims, drops one layer of surrounding quotes and one trailing slash, then
/// puts the answer in the `./`-prefixed form used for candidates.
fn normalize_answer(answer: &str) -> String {
    let unquoted = SURROUNDING_QUOTES.replace_all(answer.trim(), "");
    let unquoted = unquoted.trim();
    with_dot_prefix(unquoted.strip_suffix('/').unwrap_or(unquoted))
}

/// Maps a free-text request onto one folder of the tree, asking the text
/// service exactly once.
pub struct FolderResolver {
    service: Arc<dyn TextService>,
    ignore: Vec<String>,
}

impl FolderResolver {
    pub fn new(service: Arc<dyn TextService>, ignore: Vec<String>) -> Self {
        Self { service, ignore }
    }

    pub async fn identify_target_folder(
        &self,
        root: &Path,
        request: &str,
    ) -> Result<TargetFolder, AgentError> {
        let candidates = collect_subfolders(root, &self.ignore).await?;
        if candidates.len() > MAX_IDENTIFY_SUBFOLDERS {
            return Err(AgentError::TooManyCandidates {
                count: candidates.len(),
                limit: MAX_IDENTIFY_SUBFOLDERS,
            });
        }

        let listed: Vec<String> = candidates
            .iter()
            .map(|c| with_dot_prefix(&relative_path(root, &c.path)))
            .collect();

        let answer = generate(&self.service, find_target_folder_prompt(request, &listed)).await?;
        let chosen = normalize_answer(&answer);
        tracing::debug!(answer = %answer.trim(), chosen = %chosen, "folder selection answer");

        // Files are listed for context only; the answer has to name a folder.
        candidates
            .iter()
            .zip(listed)
            .find(|(c, rel)| c.is_dir && *rel == chosen)
            .map(|(c, relative)| TargetFolder {
                relative,
                path: c.path.clone(),
            })
            .ok_or(AgentError::UnresolvedFolder(answer))
    }
}
