mod flat;
mod nested;

pub use flat::classify_flat;
pub use nested::classify_nested;

use super::answer::Answer;
use super::domain::{DocumentState, FlatDocumentState};
use super::provision::{Officiality, Provision};

/// Snapshot types that can be run through a fixed rule set.
///
/// `None` means the answers given so far are not enough to reach a verdict.
pub trait Classify {
    fn classify(&self) -> Option<Officiality>;
}

impl Classify for FlatDocumentState {
    fn classify(&self) -> Option<Officiality> {
        let outcome = classify_flat(self);
        trace_outcome("flat", outcome.as_ref());
        outcome
    }
}

impl Classify for DocumentState {
    fn classify(&self) -> Option<Officiality> {
        let outcome = classify_nested(self);
        trace_outcome("nested", outcome.as_ref());
        outcome
    }
}

fn trace_outcome(schema: &'static str, outcome: Option<&Officiality>) {
    match outcome {
        Some(officiality) => tracing::trace!(
            schema,
            verdict = officiality.verdict.label(),
            provision = officiality.provision.citation(),
            "questionnaire classified"
        ),
        None => tracing::trace!(schema, "questionnaire awaiting answers"),
    }
}

/// Question whose answers both end the evaluation under one provision.
pub(crate) fn settle(answer: Answer, provision: Provision) -> Option<Officiality> {
    match answer {
        Answer::Yes => Some(Officiality::official(provision)),
        Answer::No => Some(Officiality::not_official(provision)),
        Answer::Unanswered => None,
    }
}

/// Undispatched documents are finalised either when their matter is settled
/// or, outside a specific matter, when they are otherwise approved.
pub(crate) fn finalisation(
    specific_matter: Answer,
    settled: Answer,
    other_approved: Answer,
) -> Option<Officiality> {
    match specific_matter {
        Answer::Yes => settle(settled, Provision::MatterSettled),
        Answer::No => settle(other_approved, Provision::OtherwiseFinalised),
        Answer::Unanswered => None,
    }
}
