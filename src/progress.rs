//! Observable progress log shared by every step of a run.
//!
//! Steps append leveled entries; registered listeners are called
//! synchronously after each change and typically re-render [`ProgressReport::to_text`]
//! somewhere a human can see it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressLevel {
    Info,
    Warning,
    Error,
}

impl ProgressLevel {
    fn prefix(self) -> &'static str {
        match self {
            Self::Info => "- ",
            Self::Warning => "- ⚠️⚠️ WARNING: ",
            Self::Error => "- 💥💥 ERROR: ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEntry {
    pub level: ProgressLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    Working,
    Done,
}

type Listener = Box<dyn FnMut(&ProgressReport) + Send>;

pub struct ProgressReport {
    status: ProgressStatus,
    entries: Vec<ProgressEntry>,
    listeners: Vec<Listener>,
}

impl Default for ProgressReport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressReport")
            .field("status", &self.status)
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ProgressReport {
    pub fn new() -> Self {
        Self {
            status: ProgressStatus::Working,
            entries: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn status(&self) -> ProgressStatus {
        self.status
    }

    /// Updates the status and notifies listeners. `Done` is final: attempts
    /// to move away from it are ignored.
    pub fn set_status(&mut self, status: ProgressStatus) {
        if self.status == ProgressStatus::Done && status != ProgressStatus::Done {
            tracing::warn!(requested = ?status, "ignoring status change after completion");
            return;
        }
        self.status = status;
        tracing::info!(status = ?status, "status updated");
        self.notify();
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.push(ProgressLevel::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.push(ProgressLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{message}");
        self.push(ProgressLevel::Error, message);
    }

    /// Registers a listener for the lifetime of the report.
    pub fn on_change(&mut self, listener: impl FnMut(&ProgressReport) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    /// Every entry ever appended, oldest first, one per line.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}{}", e.level.prefix(), e.message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&mut self, level: ProgressLevel, message: String) {
        self.entries.push(ProgressEntry { level, message });
        self.notify();
    }

    fn notify(&mut self) {
        // Listeners get a shared view of the report, so lift them out while
        // they run.
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener(&*self);
        }
        self.listeners = listeners;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn fill(report: &mut ProgressReport) {
        report.info("x");
        report.warning("y");
        report.error("z");
    }

    #[test]
    fn renders_entries_in_order_with_level_prefixes() {
        let mut report = ProgressReport::new();
        fill(&mut report);
        assert_eq!(
            report.to_text(),
            "- x\n- ⚠️⚠️ WARNING: y\n- 💥💥 ERROR: z"
        );
        let levels: Vec<_> = report.entries().iter().map(|e| e.level).collect();
        assert_eq!(
            levels,
            vec![ProgressLevel::Info, ProgressLevel::Warning, ProgressLevel::Error]
        );
    }

    #[test]
    fn listener_count_does_not_change_rendering() {
        let mut rendered = Vec::new();
        for listeners in [0usize, 1, 3] {
            let mut report = ProgressReport::new();
            for _ in 0..listeners {
                report.on_change(|r| {
                    let _ = r.to_text();
                });
            }
            fill(&mut report);
            rendered.push(report.to_text());
        }
        assert!(rendered.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn every_listener_sees_each_change_after_it_happens() {
        let mut report = ProgressReport::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        for _ in 0..2 {
            let calls = calls.clone();
            report.on_change(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }
        {
            let seen = seen.clone();
            report.on_change(move |r| {
                seen.lock().unwrap().push((r.entries().len(), r.status()));
            });
        }

        fill(&mut report);
        report.set_status(ProgressStatus::Done);

        assert_eq!(calls.load(Ordering::SeqCst), 8);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (1, ProgressStatus::Working),
                (2, ProgressStatus::Working),
                (3, ProgressStatus::Working),
                (3, ProgressStatus::Done),
            ]
        );
    }

    #[test]
    fn done_never_reverts() {
        let mut report = ProgressReport::new();
        assert_eq!(report.status(), ProgressStatus::Working);
        report.set_status(ProgressStatus::Done);
        report.set_status(ProgressStatus::Working);
        assert_eq!(report.status(), ProgressStatus::Done);
    }

    #[test]
    fn empty_report_renders_empty_text() {
        assert_eq!(ProgressReport::default().to_text(), "");
    }
}
