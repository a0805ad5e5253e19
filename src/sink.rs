use crate::progress::ProgressReport;
use std::path::PathBuf;

const PREAMBLE_MD: &str = "👋 Hey there, let's see if we can generate a `README.md` for the directory in
this repo you're talking about.

This may take a few minutes, but I'll let you know how it goes by updating
this file as I make progress.

---
";

/// Markdown file mirroring a [`ProgressReport`], rewritten on every change.
#[derive(Debug, Clone)]
pub struct ProgressFile {
    path: PathBuf,
}

impl ProgressFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn render(report: &ProgressReport) -> String {
        format!("{PREAMBLE_MD}\n{}", report.to_text())
    }

    /// Failures are logged and otherwise ignored; progress output never
    /// aborts a run.
    pub fn write(&self, report: &ProgressReport) {
        if let Err(e) = std::fs::write(&self.path, Self::render(report)) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write progress file");
        }
    }

    pub fn into_listener(self) -> impl FnMut(&ProgressReport) + Send + 'static {
        move |report| self.write(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_follows_every_update() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("progress.md");
        let mut report = ProgressReport::new();
        report.on_change(ProgressFile::new(path.clone()).into_listener());

        report.info("Getting started...");
        let first = std::fs::read_to_string(&path).unwrap();
        assert!(first.starts_with("👋 Hey there"));
        assert!(first.ends_with("---\n\n- Getting started..."));

        report.warning("File a.txt couldn't be summarized: boom");
        let second = std::fs::read_to_string(&path).unwrap();
        assert!(second.ends_with(
            "- Getting started...\n- ⚠️⚠️ WARNING: File a.txt couldn't be summarized: boom"
        ));
    }

    #[test]
    fn unwritable_path_does_not_panic() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = ProgressFile::new(tmp.path().join("missing/dir/progress.md"));
        let mut report = ProgressReport::new();
        report.on_change(sink.into_listener());
        report.info("still fine");
        assert_eq!(report.entries().len(), 1);
    }
}
