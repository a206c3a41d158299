use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::domain::{DocumentState, FlatDocumentState, Schema};
use super::provision::Officiality;
use super::rules::Classify;

/// Holds a questionnaire snapshot and the verdict derived from it.
///
/// The verdict is recomputed after every change, so readers never observe a
/// snapshot and verdict that disagree.
#[derive(Debug, Clone)]
pub struct QuestionnaireSession<S> {
    state: S,
    verdict: Option<Officiality>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<S> QuestionnaireSession<S>
where
    S: Classify + Default + Serialize + DeserializeOwned,
{
    pub fn new() -> Self {
        Self::from_state(S::default())
    }

    pub fn from_state(state: S) -> Self {
        let now = Utc::now();
        let verdict = state.classify();
        Self {
            state,
            verdict,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn verdict(&self) -> Option<&Officiality> {
        self.verdict.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Mutate the snapshot in place and re-derive the verdict.
    pub fn update<F>(&mut self, change: F) -> Option<&Officiality>
    where
        F: FnOnce(&mut S),
    {
        change(&mut self.state);
        self.refresh();
        self.verdict.as_ref()
    }

    /// Apply a JSON merge patch to the snapshot.
    ///
    /// `null` clears an answer. On error the session is left untouched.
    pub fn apply_patch(&mut self, patch: &Value) -> Result<Option<&Officiality>, SessionError> {
        if !patch.is_object() {
            return Err(SessionError::PatchNotObject);
        }

        let mut document = serde_json::to_value(&self.state).map_err(SessionError::Encode)?;
        merge_patch(&mut document, patch);
        self.state = serde_json::from_value(document).map_err(SessionError::InvalidAnswer)?;
        self.refresh();
        Ok(self.verdict.as_ref())
    }

    /// Restore every answer, nested paths included, to unanswered.
    pub fn reset(&mut self) {
        self.state = S::default();
        self.refresh();
        tracing::debug!("questionnaire session reset");
    }

    fn refresh(&mut self) {
        self.verdict = self.state.classify();
        self.updated_at = Utc::now();
        tracing::debug!(
            decided = self.verdict.is_some(),
            "questionnaire session updated"
        );
    }
}

impl<S> Default for QuestionnaireSession<S>
where
    S: Classify + Default + Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

/// RFC 7386 merge of `patch` into `target`.
fn merge_patch(target: &mut Value, patch: &Value) {
    let Value::Object(entries) = patch else {
        *target = patch.clone();
        return;
    };

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }

    if let Value::Object(map) = target {
        for (key, value) in entries {
            if value.is_null() {
                map.remove(key);
            } else {
                merge_patch(map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
    }
}

/// Session over either rule-set configuration.
#[derive(Debug, Clone)]
pub enum Questionnaire {
    Flat(QuestionnaireSession<FlatDocumentState>),
    Nested(QuestionnaireSession<DocumentState>),
}

/// Copy of a questionnaire's current answers.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QuestionnaireAnswers {
    Flat(FlatDocumentState),
    Nested(DocumentState),
}

impl Questionnaire {
    pub fn new(schema: Schema) -> Self {
        match schema {
            Schema::Flat => Questionnaire::Flat(QuestionnaireSession::new()),
            Schema::Nested => Questionnaire::Nested(QuestionnaireSession::new()),
        }
    }

    pub fn schema(&self) -> Schema {
        match self {
            Questionnaire::Flat(_) => Schema::Flat,
            Questionnaire::Nested(_) => Schema::Nested,
        }
    }

    pub fn verdict(&self) -> Option<&Officiality> {
        match self {
            Questionnaire::Flat(session) => session.verdict(),
            Questionnaire::Nested(session) => session.verdict(),
        }
    }

    pub fn answers(&self) -> QuestionnaireAnswers {
        match self {
            Questionnaire::Flat(session) => QuestionnaireAnswers::Flat(session.state().clone()),
            Questionnaire::Nested(session) => {
                QuestionnaireAnswers::Nested(session.state().clone())
            }
        }
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            Questionnaire::Flat(session) => session.updated_at(),
            Questionnaire::Nested(session) => session.updated_at(),
        }
    }

    pub fn apply_patch(&mut self, patch: &Value) -> Result<Option<&Officiality>, SessionError> {
        match self {
            Questionnaire::Flat(session) => session.apply_patch(patch),
            Questionnaire::Nested(session) => session.apply_patch(patch),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Questionnaire::Flat(session) => session.reset(),
            Questionnaire::Nested(session) => session.reset(),
        }
    }
}

/// Errors raised while applying answers to a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("answers must be sent as a JSON object")]
    PatchNotObject,
    #[error("invalid answer: {0}")]
    InvalidAnswer(#[source] serde_json::Error),
    #[error("failed to encode questionnaire state: {0}")]
    Encode(#[source] serde_json::Error),
}
