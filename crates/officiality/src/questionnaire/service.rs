use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;

use super::domain::Schema;
use super::repository::{RepositoryError, SessionId, SessionRecord, SessionRepository};
use super::session::{Questionnaire, SessionError};

/// Service composing questionnaire sessions with their repository.
pub struct QuestionnaireService<R> {
    repository: Arc<R>,
    default_schema: Schema,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("qs-{id:06}"))
}

impl<R> QuestionnaireService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, default_schema: Schema) -> Self {
        Self {
            repository,
            default_schema,
        }
    }

    pub fn default_schema(&self) -> Schema {
        self.default_schema
    }

    /// Open a new, fully unanswered questionnaire.
    pub fn start(&self, schema: Option<Schema>) -> Result<SessionRecord, ServiceError> {
        let schema = schema.unwrap_or(self.default_schema);
        let record = SessionRecord {
            id: next_session_id(),
            questionnaire: Questionnaire::new(schema),
        };

        let stored = self.repository.insert(record)?;
        tracing::info!(session_id = %stored.id.0, schema = schema.label(), "questionnaire started");
        Ok(stored)
    }

    /// Merge new answers into a session and persist the re-derived verdict.
    pub fn answer(&self, id: &SessionId, patch: &Value) -> Result<SessionRecord, ServiceError> {
        self.repository.modify(id, &mut |record| {
            record.questionnaire.apply_patch(patch).map(|_| ())
        })
    }

    pub fn reset(&self, id: &SessionId) -> Result<SessionRecord, ServiceError> {
        let record = self.repository.modify(id, &mut |record| {
            record.questionnaire.reset();
            Ok(())
        })?;
        tracing::info!(session_id = %record.id.0, "questionnaire reset");
        Ok(record)
    }

    pub fn get(&self, id: &SessionId) -> Result<SessionRecord, ServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn discard(&self, id: &SessionId) -> Result<(), ServiceError> {
        self.repository.remove(id)?;
        Ok(())
    }
}

/// Error raised by the questionnaire service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
