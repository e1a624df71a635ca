//! In-memory resume sessions. One session per upload, discarded on delete or idle expiry.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::{analyze, AnalysisReport};
use crate::documents::DocumentKind;
use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, Serialize)]
pub struct ResumeSession {
    pub id: Uuid,
    pub file_name: String,
    pub document_kind: DocumentKind,
    /// Normalised text extracted from the upload. Empty when extraction failed.
    #[serde(skip)]
    pub source_text: String,
    pub record: ResumeRecord,
    /// True once the user has edited the record.
    pub edited: bool,
    /// Generic user-facing notice, set when the upload could not be read.
    pub notice: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeSession {
    pub fn new(
        file_name: String,
        document_kind: DocumentKind,
        source_text: String,
        record: ResumeRecord,
        notice: Option<String>,
    ) -> Self {
        let now = Utc::now();
        ResumeSession {
            id: Uuid::new_v4(),
            file_name,
            document_kind,
            source_text,
            record,
            edited: false,
            notice,
            created_at: now,
            updated_at: now,
        }
    }

    /// Text the scores are computed from: the upload until the first edit,
    /// the record's composed text afterwards.
    pub fn analysis_text(&self) -> String {
        if self.edited {
            self.record.to_plain_text()
        } else {
            self.source_text.clone()
        }
    }

    /// `None` when there is nothing to score.
    pub fn analysis(&self) -> Option<AnalysisReport> {
        let text = self.analysis_text();
        if text.trim().is_empty() {
            None
        } else {
            Some(analyze(&text))
        }
    }

    /// Replaces the record with a user-edited one.
    pub fn apply_edit(&mut self, record: ResumeRecord) {
        self.record = record;
        self.edited = true;
        self.notice = None;
        self.updated_at = Utc::now();
    }
}

/// Shared session map. Cloning shares the underlying storage.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, ResumeSession>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        SessionStore {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn insert(&self, session: ResumeSession) -> ResumeSession {
        let mut sessions = self.inner.write().await;
        purge_expired(&mut sessions, self.ttl);
        sessions.insert(session.id, session.clone());
        info!("Session {} created ({} active)", session.id, sessions.len());
        session
    }

    /// Returns a snapshot of the session, or `None` if it is unknown or expired.
    pub async fn get(&self, id: Uuid) -> Option<ResumeSession> {
        let mut sessions = self.inner.write().await;
        purge_expired(&mut sessions, self.ttl);
        sessions.get(&id).cloned()
    }

    /// Applies `mutate` to the session and returns the updated snapshot.
    pub async fn update<F>(&self, id: Uuid, mutate: F) -> Option<ResumeSession>
    where
        F: FnOnce(&mut ResumeSession),
    {
        let mut sessions = self.inner.write().await;
        purge_expired(&mut sessions, self.ttl);
        let session = sessions.get_mut(&id)?;
        mutate(session);
        session.updated_at = Utc::now();
        Some(session.clone())
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.inner.write().await.remove(&id).is_some();
        if removed {
            info!("Session {id} ended");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

fn purge_expired(sessions: &mut HashMap<Uuid, ResumeSession>, ttl: Duration) {
    let Some(cutoff) = Utc::now().checked_sub_signed(ttl) else {
        return;
    };
    let before = sessions.len();
    sessions.retain(|_, s| s.updated_at > cutoff);
    let purged = before - sessions.len();
    if purged > 0 {
        debug!("Purged {purged} expired sessions");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ContactInfo;

    fn session_with_text(text: &str) -> ResumeSession {
        ResumeSession::new(
            "resume.txt".to_string(),
            DocumentKind::PlainText,
            text.to_string(),
            crate::parsing::parse_resume(text),
            None,
        )
    }

    #[tokio::test]
    async fn test_insert_get_remove() {
        let store = SessionStore::new(Duration::minutes(10));
        let session = store.insert(session_with_text("Jane Doe")).await;

        let fetched = store.get(session.id).await.unwrap();
        assert_eq!(fetched.record, session.record);
        assert_eq!(store.len().await, 1);

        assert!(store.remove(session.id).await);
        assert!(!store.remove(session.id).await);
        assert!(store.get(session.id).await.is_none());
    }

    #[tokio::test]
    async fn test_update_marks_edited() {
        let store = SessionStore::new(Duration::minutes(10));
        let session = store.insert(session_with_text("Jane Doe")).await;

        let edited = ResumeRecord {
            contact: ContactInfo {
                name: Some("Janet Doe".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let updated = store
            .update(session.id, |s| s.apply_edit(edited.clone()))
            .await
            .unwrap();
        assert!(updated.edited);
        assert_eq!(updated.record, edited);
        assert_eq!(store.get(session.id).await.unwrap().record, edited);
    }

    #[tokio::test]
    async fn test_update_unknown_session() {
        let store = SessionStore::new(Duration::minutes(10));
        assert!(store.update(Uuid::new_v4(), |_| {}).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_sessions_are_purged() {
        let store = SessionStore::new(Duration::minutes(10));
        let mut stale = session_with_text("Jane Doe");
        stale.updated_at = Utc::now() - Duration::minutes(11);
        let stale = store.insert(stale).await;

        assert!(store.get(stale.id).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_huge_ttl_keeps_sessions() {
        let store = SessionStore::new(Duration::days(365 * 100_000_000));
        let session = store.insert(session_with_text("Jane Doe")).await;
        assert!(store.get(session.id).await.is_some());
    }

    #[test]
    fn test_analysis_uses_source_until_edited() {
        let mut session = session_with_text("Jane Doe\njane@example.com\nSkills: Python");
        let before = session.analysis().unwrap();
        assert!(before.word_count > 0);

        session.apply_edit(ResumeRecord::default());
        assert_eq!(session.analysis_text(), "");
        assert!(session.analysis().is_none());
    }

    #[test]
    fn test_blank_source_has_no_analysis() {
        assert!(session_with_text("   ").analysis().is_none());
    }
}
