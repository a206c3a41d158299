use super::super::answer::Answer;
use super::super::domain::{ArrivedAnswers, DocumentState, DocumentType, NotArrivedAnswers};
use super::super::provision::{Officiality, Provision};
use super::{finalisation, settle};

/// Evaluates the nested questionnaire.
///
/// The gating questions are checked in a fixed order and each one is only
/// consulted once every earlier gate has been answered and passed.
pub fn classify_nested(state: &DocumentState) -> Option<Officiality> {
    match state.held_by_authority {
        Answer::No => return Some(Officiality::not_official(Provision::Custody)),
        Answer::Unanswered => return None,
        Answer::Yes => {}
    }

    match state.backup_etc {
        Answer::Yes => return Some(Officiality::not_official(Provision::TechnicalStorage)),
        Answer::Unanswered => return None,
        Answer::No => {}
    }

    match state.transferred_within_auth {
        Answer::Yes => return Some(Officiality::out_of_scope(Provision::InternalTransfer)),
        Answer::Unanswered => return None,
        Answer::No => {}
    }

    match state.competition {
        Answer::Yes => return Some(Officiality::out_of_scope(Provision::Competition)),
        Answer::Unanswered => return None,
        Answer::No => {}
    }

    match state.has_arrived {
        Answer::Yes => arrived(&state.paths.arrived),
        Answer::No => not_arrived(&state.paths.not_arrived),
        Answer::Unanswered => None,
    }
}

fn arrived(answers: &ArrivedAnswers) -> Option<Officiality> {
    match answers.directed_to_official {
        Answer::Yes => settle(answers.refers_to_case, Provision::PersonalLetter),
        Answer::No => match answers.working_material {
            Answer::Yes => Some(Officiality::not_official(
                Provision::ReceivedWorkingMaterial,
            )),
            Answer::No => Some(Officiality::official(Provision::ReceivedWorkingMaterial)),
            Answer::Unanswered => None,
        },
        Answer::Unanswered => None,
    }
}

fn not_arrived(answers: &NotArrivedAnswers) -> Option<Officiality> {
    match answers.doc_type? {
        DocumentType::Ledger => settle(answers.ready_for_notation, Provision::LedgerNotation),
        DocumentType::CourtRuling => {
            settle(answers.decision_announced, Provision::RulingAnnounced)
        }
        DocumentType::Record => match answers.riksdag_record {
            // Riksdag records are finalised like any other document.
            Answer::Yes => other_chain(answers),
            Answer::No => settle(answers.approved, Provision::MinutesApproved),
            Answer::Unanswered => None,
        },
        DocumentType::Other => other_chain(answers),
        DocumentType::Unrecognized => None,
    }
}

/// Rules shared by `other` documents and riksdag records.
fn other_chain(answers: &NotArrivedAnswers) -> Option<Officiality> {
    match answers.other_working_material {
        Answer::Yes => return Some(Officiality::not_official(Provision::DraftWorkingMaterial)),
        Answer::Unanswered => return None,
        Answer::No => {}
    }

    match answers.memoranda {
        Answer::Yes => return settle(answers.document_archived, Provision::MemorandumArchived),
        Answer::Unanswered => return None,
        Answer::No => {}
    }

    match answers.dispatched {
        Answer::Yes => Some(Officiality::official(Provision::Dispatched)),
        Answer::No => finalisation(
            answers.specific_matter,
            answers.settled,
            answers.other_approved,
        ),
        Answer::Unanswered => None,
    }
}
