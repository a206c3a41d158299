//! Officiality questionnaire: answer model, rule sets, and the session
//! plumbing that re-classifies a snapshot after every answer.
//!
//! Two rule-set configurations are supported side by side. The flat schema
//! dispatches directly on document type; the nested schema first runs a fixed
//! sequence of gating questions and then splits on whether the document has
//! arrived at the authority.

pub mod answer;
pub mod domain;
pub mod provision;
pub mod repository;
pub mod router;
pub mod rules;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use answer::Answer;
pub use domain::{
    ArrivedAnswers, DocumentPaths, DocumentState, DocumentType, FlatDocumentState,
    FlatDocumentType, NotArrivedAnswers, Schema,
};
pub use provision::{Officiality, Provision, Verdict};
pub use repository::{
    RepositoryError, SessionId, SessionRecord, SessionRepository, SessionStatusView,
};
pub use router::{questionnaire_router, ClassificationResponse};
pub use rules::{classify_flat, classify_nested, Classify};
pub use service::{QuestionnaireService, ServiceError};
pub use session::{Questionnaire, QuestionnaireAnswers, QuestionnaireSession, SessionError};
