use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::assist::ResumeAssistant;
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single editing session. Renderers work on a cloned snapshot.
    pub document: Arc<RwLock<ResumeDocument>>,
    pub activity: Arc<ActivityFlags>,
    /// Pluggable AI collaborator. Default: the Anthropic-backed `LlmClient`.
    pub assistant: Arc<dyn ResumeAssistant>,
}

impl AppState {
    pub fn new(document: ResumeDocument, assistant: Arc<dyn ResumeAssistant>) -> Self {
        AppState {
            document: Arc::new(RwLock::new(document)),
            activity: Arc::new(ActivityFlags::default()),
            assistant,
        }
    }

    /// Clones the current document so rendering never holds the lock.
    pub async fn snapshot(&self) -> ResumeDocument {
        self.document.read().await.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-progress flags
// ────────────────────────────────────────────────────────────────────────────

/// The three operation classes that report progress independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    SnapshotExport,
    DocumentExport,
    Assist,
}

impl Activity {
    fn label(self) -> &'static str {
        match self {
            Activity::SnapshotExport => "Snapshot export",
            Activity::DocumentExport => "Document export",
            Activity::Assist => "AI assistance",
        }
    }
}

#[derive(Debug, Default)]
pub struct ActivityFlags {
    snapshot_export: AtomicBool,
    document_export: AtomicBool,
    assist: AtomicBool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStatus {
    pub snapshot_export: bool,
    pub document_export: bool,
    pub assist: bool,
}

impl ActivityFlags {
    fn flag(&self, activity: Activity) -> &AtomicBool {
        match activity {
            Activity::SnapshotExport => &self.snapshot_export,
            Activity::DocumentExport => &self.document_export,
            Activity::Assist => &self.assist,
        }
    }

    /// Marks `activity` as running. Fails with `Busy` when it already is;
    /// the other classes are unaffected.
    pub fn begin(self: &Arc<Self>, activity: Activity) -> Result<ActivityGuard, AppError> {
        self.flag(activity)
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::Busy(activity.label()))?;
        Ok(ActivityGuard {
            flags: Arc::clone(self),
            activity,
        })
    }

    pub fn status(&self) -> ActivityStatus {
        ActivityStatus {
            snapshot_export: self.snapshot_export.load(Ordering::Acquire),
            document_export: self.document_export.load(Ordering::Acquire),
            assist: self.assist.load(Ordering::Acquire),
        }
    }
}

/// Clears its flag when dropped, on success, error or panic alike.
#[derive(Debug)]
pub struct ActivityGuard {
    flags: Arc<ActivityFlags>,
    activity: Activity,
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        self.flags.flag(self.activity).store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_busy_until_guard_drops() {
        let flags = Arc::new(ActivityFlags::default());
        let guard = flags.begin(Activity::SnapshotExport).unwrap();
        assert!(flags.status().snapshot_export);
        assert!(matches!(
            flags.begin(Activity::SnapshotExport),
            Err(AppError::Busy(_))
        ));
        drop(guard);
        assert!(!flags.status().snapshot_export);
        assert!(flags.begin(Activity::SnapshotExport).is_ok());
    }

    #[test]
    fn test_classes_are_independent() {
        let flags = Arc::new(ActivityFlags::default());
        let _snapshot = flags.begin(Activity::SnapshotExport).unwrap();
        let _docx = flags.begin(Activity::DocumentExport).unwrap();
        let _assist = flags.begin(Activity::Assist).unwrap();
        assert_eq!(
            flags.status(),
            ActivityStatus {
                snapshot_export: true,
                document_export: true,
                assist: true,
            }
        );
    }

    #[test]
    fn test_flag_clears_on_panic() {
        let flags = Arc::new(ActivityFlags::default());
        let inner = Arc::clone(&flags);
        let result = std::panic::catch_unwind(move || {
            let _guard = inner.begin(Activity::Assist).unwrap();
            panic!("boom");
        });
        assert!(result.is_err());
        assert!(!flags.status().assist);
    }
}
