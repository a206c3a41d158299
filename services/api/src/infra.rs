use metrics_exporter_prometheus::PrometheusHandle;
use officiality::questionnaire::{
    RepositoryError, Schema, ServiceError, SessionError, SessionId, SessionRecord,
    SessionRepository,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl InMemorySessionRepository {
    fn records(&self) -> Result<MutexGuard<'_, HashMap<SessionId, SessionRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("session store poisoned".to_string()))
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn modify(
        &self,
        id: &SessionId,
        change: &mut dyn FnMut(&mut SessionRecord) -> Result<(), SessionError>,
    ) -> Result<SessionRecord, ServiceError> {
        let mut guard = self.records()?;
        let stored = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let mut next = stored.clone();
        change(&mut next)?;
        *stored = next.clone();
        Ok(next)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records()?;
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        let mut guard = self.records()?;
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}

pub(crate) fn parse_schema(raw: &str) -> Result<Schema, String> {
    Schema::parse(raw).ok_or_else(|| format!("unknown schema '{raw}' (expected flat or nested)"))
}
