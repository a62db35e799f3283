//! The single in-memory document and its change notifications.
//!
//! The document is never mutated in place: each edit installs a new
//! `Arc<Resume>` and bumps the revision. Views subscribe through a
//! `watch` receiver and re-render when the revision moves.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;

use crate::editor::ops::EditOp;
use crate::models::resume::Resume;

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
    pub resume: Arc<Resume>,
}

impl Snapshot {
    fn succeed(&self, resume: Resume) -> Snapshot {
        Snapshot {
            revision: self.revision + 1,
            updated_at: Utc::now(),
            resume: Arc::new(resume),
        }
    }
}

/// Outcome of [`DocumentStore::apply`].
#[derive(Debug, Clone)]
pub struct Applied {
    /// False when the op left the document equal by value.
    pub changed: bool,
    pub snapshot: Snapshot,
}

pub struct DocumentStore {
    tx: watch::Sender<Snapshot>,
}

impl DocumentStore {
    pub fn new(resume: Resume) -> Self {
        let (tx, _rx) = watch::channel(Snapshot {
            revision: 0,
            updated_at: Utc::now(),
            resume: Arc::new(resume),
        });
        Self { tx }
    }

    pub fn current(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    /// Swaps in a complete new document and notifies subscribers.
    #[allow(dead_code)]
    pub fn replace(&self, resume: Resume) -> Snapshot {
        let mut replaced = None;
        self.tx.send_modify(|current| {
            let next = current.succeed(resume);
            *current = next.clone();
            replaced = Some(next);
        });
        replaced.unwrap_or_else(|| self.current())
    }

    /// Applies `op` to the current document as one atomic read-modify-write.
    /// An op that leaves the document equal by value is dropped: the revision
    /// stays put and subscribers are not woken.
    pub fn apply(&self, op: &EditOp) -> Applied {
        let mut outcome = None;
        self.tx.send_if_modified(|current| {
            let next = op.apply(&current.resume);
            if next == *current.resume {
                outcome = Some(Applied {
                    changed: false,
                    snapshot: current.clone(),
                });
                return false;
            }
            *current = current.succeed(next);
            outcome = Some(Applied {
                changed: true,
                snapshot: current.clone(),
            });
            true
        });
        outcome.unwrap_or_else(|| Applied {
            changed: false,
            snapshot: self.current(),
        })
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new(Resume::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::ops::ListKind;
    use crate::models::resume::{EntryId, PersonalInfoUpdate};

    #[test]
    fn test_starts_blank_at_revision_zero() {
        let store = DocumentStore::default();
        let snap = store.current();
        assert_eq!(snap.revision, 0);
        assert_eq!(*snap.resume, Resume::default());
    }

    #[test]
    fn test_apply_bumps_revision_and_keeps_old_snapshot() {
        let store = DocumentStore::default();
        let before = store.current();

        let applied = store.apply(&EditOp::SetPersonal {
            field: PersonalInfoUpdate::FullName("Ada Lovelace".to_string()),
        });

        assert!(applied.changed);
        assert_eq!(applied.snapshot.revision, 1);
        assert_eq!(applied.snapshot.resume.personal_info.full_name, "Ada Lovelace");
        assert_eq!(before.resume.personal_info.full_name, "");
        assert!(!Arc::ptr_eq(&before.resume, &applied.snapshot.resume));
    }

    #[test]
    fn test_apply_noop_keeps_revision() {
        let store = DocumentStore::default();
        let applied = store.apply(&EditOp::Remove {
            list: ListKind::Skills,
            id: EntryId::new(),
        });
        assert!(!applied.changed);
        assert_eq!(applied.snapshot.revision, 0);
        assert_eq!(store.current().revision, 0);
    }

    #[test]
    fn test_replace_swaps_whole_document() {
        let store = DocumentStore::default();
        let next = Resume::default().add(ListKind::Projects);
        let snap = store.replace(next.clone());
        assert_eq!(snap.revision, 1);
        assert_eq!(*store.current().resume, next);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes_but_not_noops() {
        let store = DocumentStore::default();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.apply(&EditOp::Remove {
            list: ListKind::Education,
            id: EntryId::new(),
        });
        assert!(!rx.has_changed().unwrap());

        store.apply(&EditOp::Add {
            list: ListKind::Education,
        });
        rx.changed().await.unwrap();
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.revision, 1);
        assert_eq!(seen.resume.education.len(), 1);
    }
}
