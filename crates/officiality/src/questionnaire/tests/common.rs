use std::collections::HashMap;
use std::sync::{Arc, Barrier, Mutex};

use proptest::option;
use proptest::prelude::*;

use crate::questionnaire::repository::{
    RepositoryError, SessionId, SessionRecord, SessionRepository,
};
use crate::questionnaire::{
    questionnaire_router, Answer, ArrivedAnswers, DocumentPaths, DocumentState, DocumentType,
    FlatDocumentState, FlatDocumentType, NotArrivedAnswers, QuestionnaireService, Schema,
    ServiceError, SessionError,
};

pub(super) const YES: Answer = Answer::Yes;
pub(super) const NO: Answer = Answer::No;

/// Snapshot that has passed every gate and is about to pick an arrival path.
pub(super) fn gated_state() -> DocumentState {
    DocumentState {
        held_by_authority: YES,
        backup_etc: NO,
        transferred_within_auth: NO,
        competition: NO,
        ..DocumentState::default()
    }
}

pub(super) fn not_arrived(doc_type: DocumentType) -> DocumentState {
    let mut state = gated_state();
    state.has_arrived = NO;
    state.paths.not_arrived.doc_type = Some(doc_type);
    state
}

pub(super) fn flat(doc_type: FlatDocumentType) -> FlatDocumentState {
    FlatDocumentState {
        held_by_authority: YES,
        doc_type_choice: Some(doc_type),
        ..FlatDocumentState::default()
    }
}

pub(super) fn answer() -> impl Strategy<Value = Answer> {
    prop_oneof![Just(Answer::Yes), Just(Answer::No), Just(Answer::Unanswered)]
}

pub(super) fn flat_doc_type() -> impl Strategy<Value = FlatDocumentType> {
    prop_oneof![
        Just(FlatDocumentType::Ledger),
        Just(FlatDocumentType::CourtRuling),
        Just(FlatDocumentType::Memoranda),
        Just(FlatDocumentType::Other),
        Just(FlatDocumentType::Unrecognized),
    ]
}

pub(super) fn doc_type() -> impl Strategy<Value = DocumentType> {
    prop_oneof![
        Just(DocumentType::Ledger),
        Just(DocumentType::CourtRuling),
        Just(DocumentType::Record),
        Just(DocumentType::Other),
        Just(DocumentType::Unrecognized),
    ]
}

pub(super) fn flat_state() -> impl Strategy<Value = FlatDocumentState> {
    (
        answer(),
        option::of(flat_doc_type()),
        [answer(), answer(), answer(), answer()],
        [answer(), answer(), answer(), answer()],
    )
        .prop_map(|(held, doc_type, first, second)| FlatDocumentState {
            held_by_authority: held,
            doc_type_choice: doc_type,
            ready_for_notation: first[0],
            decision_announced: first[1],
            riksdag_record: first[2],
            approved: first[3],
            dispatched: second[0],
            specific_matter: second[1],
            other_approved: second[2],
            settled: second[3],
        })
}

pub(super) fn arrived_answers() -> impl Strategy<Value = ArrivedAnswers> {
    (answer(), answer(), answer()).prop_map(|(directed, refers, working)| ArrivedAnswers {
        directed_to_official: directed,
        refers_to_case: refers,
        working_material: working,
    })
}

pub(super) fn not_arrived_answers() -> impl Strategy<Value = NotArrivedAnswers> {
    (
        option::of(doc_type()),
        [answer(), answer(), answer(), answer(), answer(), answer()],
        [answer(), answer(), answer(), answer(), answer()],
    )
        .prop_map(|(doc_type, first, second)| NotArrivedAnswers {
            doc_type,
            ready_for_notation: first[0],
            decision_announced: first[1],
            riksdag_record: first[2],
            approved: first[3],
            other_working_material: first[4],
            dispatched: first[5],
            specific_matter: second[0],
            other_approved: second[1],
            memoranda: second[2],
            document_archived: second[3],
            settled: second[4],
        })
}

pub(super) fn nested_state() -> impl Strategy<Value = DocumentState> {
    (
        [answer(), answer(), answer(), answer(), answer()],
        arrived_answers(),
        not_arrived_answers(),
    )
        .prop_map(|(gates, arrived, not_arrived)| DocumentState {
            held_by_authority: gates[0],
            backup_etc: gates[1],
            transferred_within_auth: gates[2],
            competition: gates[3],
            has_arrived: gates[4],
            paths: DocumentPaths {
                arrived,
                not_arrived,
            },
        })
}

/// Every slot of the flat snapshot, so a test can answer exactly one more.
pub(super) fn flat_slots(state: &mut FlatDocumentState) -> Vec<&mut Answer> {
    vec![
        &mut state.held_by_authority,
        &mut state.ready_for_notation,
        &mut state.decision_announced,
        &mut state.riksdag_record,
        &mut state.approved,
        &mut state.dispatched,
        &mut state.specific_matter,
        &mut state.other_approved,
        &mut state.settled,
    ]
}

pub(super) fn nested_slots(state: &mut DocumentState) -> Vec<&mut Answer> {
    let DocumentState {
        held_by_authority,
        backup_etc,
        transferred_within_auth,
        competition,
        has_arrived,
        paths,
    } = state;
    let DocumentPaths {
        arrived,
        not_arrived,
    } = paths;

    vec![
        held_by_authority,
        backup_etc,
        transferred_within_auth,
        competition,
        has_arrived,
        &mut arrived.directed_to_official,
        &mut arrived.refers_to_case,
        &mut arrived.working_material,
        &mut not_arrived.ready_for_notation,
        &mut not_arrived.decision_announced,
        &mut not_arrived.riksdag_record,
        &mut not_arrived.approved,
        &mut not_arrived.other_working_material,
        &mut not_arrived.dispatched,
        &mut not_arrived.specific_matter,
        &mut not_arrived.other_approved,
        &mut not_arrived.memoranda,
        &mut not_arrived.document_archived,
        &mut not_arrived.settled,
    ]
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
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
        let mut guard = self.records.lock().expect("lock");
        let stored = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let mut next = stored.clone();
        change(&mut next)?;
        *stored = next.clone();
        Ok(next)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Ok(self.records.lock().expect("lock").get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        match self.records.lock().expect("lock").remove(id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound),
        }
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }

    fn modify(
        &self,
        _id: &SessionId,
        _change: &mut dyn FnMut(&mut SessionRecord) -> Result<(), SessionError>,
    ) -> Result<SessionRecord, ServiceError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()).into())
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }

    fn remove(&self, _id: &SessionId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }
}

/// Holds writers at a barrier before they touch the store so they overlap.
pub(super) struct RendezvousRepository {
    pub(super) inner: MemoryRepository,
    pub(super) barrier: Barrier,
}

impl SessionRepository for RendezvousRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn modify(
        &self,
        id: &SessionId,
        change: &mut dyn FnMut(&mut SessionRecord) -> Result<(), SessionError>,
    ) -> Result<SessionRecord, ServiceError> {
        self.barrier.wait();
        self.inner.modify(id, change)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        self.inner.remove(id)
    }
}

pub(super) fn build_service(
    schema: Schema,
) -> (Arc<QuestionnaireService<MemoryRepository>>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = Arc::new(QuestionnaireService::new(
        Arc::new(repository.clone()),
        schema,
    ));
    (service, repository)
}

pub(super) fn router_with_service(
    service: Arc<QuestionnaireService<MemoryRepository>>,
) -> axum::Router {
    questionnaire_router(service)
}
