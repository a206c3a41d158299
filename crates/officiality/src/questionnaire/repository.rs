use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::Schema;
use super::provision::Officiality;
use super::service::ServiceError;
use super::session::{Questionnaire, QuestionnaireAnswers, SessionError};

/// Identifier wrapper for questionnaire sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Repository record pairing a session id with its questionnaire.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: SessionId,
    pub questionnaire: Questionnaire,
}

impl SessionRecord {
    pub fn status_label(&self) -> &'static str {
        if self.questionnaire.verdict().is_some() {
            "decided"
        } else {
            "pending"
        }
    }

    pub fn status_view(&self) -> SessionStatusView {
        SessionStatusView {
            session_id: self.id.clone(),
            schema: self.questionnaire.schema(),
            status: self.status_label(),
            officiality: self.questionnaire.verdict().copied(),
            answers: self.questionnaire.answers(),
            updated_at: self.questionnaire.updated_at(),
        }
    }
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    /// Apply `change` to the stored record while no other writer can touch it.
    ///
    /// The record is only replaced when `change` succeeds.
    fn modify(
        &self,
        id: &SessionId,
        change: &mut dyn FnMut(&mut SessionRecord) -> Result<(), SessionError>,
    ) -> Result<SessionRecord, ServiceError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Public representation of a session and its current verdict.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusView {
    pub session_id: SessionId,
    pub schema: Schema,
    pub status: &'static str,
    pub officiality: Option<Officiality>,
    pub answers: QuestionnaireAnswers,
    pub updated_at: DateTime<Utc>,
}
