use super::super::answer::Answer;
use super::super::domain::{FlatDocumentState, FlatDocumentType};
use super::super::provision::{Officiality, Provision};
use super::{finalisation, settle};

/// Evaluates the flat questionnaire.
pub fn classify_flat(state: &FlatDocumentState) -> Option<Officiality> {
    match state.held_by_authority {
        Answer::No => return Some(Officiality::not_official(Provision::Custody)),
        Answer::Unanswered => return None,
        Answer::Yes => {}
    }

    match state.doc_type_choice? {
        FlatDocumentType::Ledger => settle(state.ready_for_notation, Provision::LedgerNotation),
        FlatDocumentType::CourtRuling => {
            settle(state.decision_announced, Provision::RulingAnnounced)
        }
        FlatDocumentType::Memoranda => match state.riksdag_record {
            Answer::Yes => Some(Officiality::out_of_scope(Provision::RiksdagRecord)),
            Answer::No => settle(state.approved, Provision::MinutesApproved),
            Answer::Unanswered => None,
        },
        FlatDocumentType::Other => match state.dispatched {
            Answer::Yes => Some(Officiality::official(Provision::Dispatched)),
            Answer::No => finalisation(state.specific_matter, state.settled, state.other_approved),
            Answer::Unanswered => None,
        },
        FlatDocumentType::Unrecognized => None,
    }
}
