use serde::{Serialize, Serializer};

/// Statutory provisions backing each terminal rule of the questionnaire.
///
/// A provision covers both outcomes of the question it decides, so two rules
/// share a citation only when they are the two answers to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provision {
    Custody,
    TechnicalStorage,
    InternalTransfer,
    Competition,
    PersonalLetter,
    ReceivedWorkingMaterial,
    LedgerNotation,
    RulingAnnounced,
    MinutesApproved,
    RiksdagRecord,
    Dispatched,
    MatterSettled,
    OtherwiseFinalised,
    MemorandumArchived,
    DraftWorkingMaterial,
}

impl Provision {
    pub const ALL: [Provision; 15] = [
        Provision::Custody,
        Provision::TechnicalStorage,
        Provision::InternalTransfer,
        Provision::Competition,
        Provision::PersonalLetter,
        Provision::ReceivedWorkingMaterial,
        Provision::LedgerNotation,
        Provision::RulingAnnounced,
        Provision::MinutesApproved,
        Provision::RiksdagRecord,
        Provision::Dispatched,
        Provision::MatterSettled,
        Provision::OtherwiseFinalised,
        Provision::MemorandumArchived,
        Provision::DraftWorkingMaterial,
    ];

    pub const fn citation(self) -> &'static str {
        match self {
            Provision::Custody => "Ch 2, art 4 FPA",
            Provision::TechnicalStorage => "Ch 2, art 6 FPA",
            Provision::InternalTransfer => "Ch 2, art 8 FPA",
            Provision::Competition => "Ch 2, art 9 ph 2 FPA",
            Provision::PersonalLetter => "Ch 2, art 9 ph 3 FPA",
            Provision::ReceivedWorkingMaterial => "Ch 2, art 9 ph 1 FPA",
            Provision::LedgerNotation => "Ch 2, art 10 ph 2 p. 1 FPA",
            Provision::RulingAnnounced => "Ch 2, art 10 ph 2 p. 2 FPA",
            Provision::MinutesApproved => "Ch 2, art 10 ph 2 p. 3 FPA",
            Provision::RiksdagRecord => "Ch 2, art 10 ph 3 FPA",
            Provision::Dispatched => "Ch 2, art 4 and 10 ph 1 FPA (dispatched)",
            Provision::MatterSettled => "Ch 2, art 4 and 10 ph 1 FPA (settled matter)",
            Provision::OtherwiseFinalised => "Ch 2, art 4 and 10 FPA (otherwise finalised)",
            Provision::MemorandumArchived => "Ch 2, art 12 ph 1 FPA",
            Provision::DraftWorkingMaterial => "Ch 2, art 12 ph 2 FPA",
        }
    }

    /// Human readable explanation shown next to a verdict.
    pub fn reason(self) -> String {
        match self {
            Provision::Custody => format!(
                "Document must be held by authority or public body (see {}).",
                self.citation()
            ),
            other => format!(
                "see {} for further information on this concrete matter.",
                other.citation()
            ),
        }
    }
}

/// Terminal outcome of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Official,
    NotOfficial,
    /// The officiality question does not apply to this document at all.
    OutOfScope,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Verdict::Official => "official",
            Verdict::NotOfficial => "not_official",
            Verdict::OutOfScope => "out_of_scope",
        }
    }
}

/// Verdict paired with the provision that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Officiality {
    pub verdict: Verdict,
    pub provision: Provision,
}

impl Officiality {
    pub const fn official(provision: Provision) -> Self {
        Self {
            verdict: Verdict::Official,
            provision,
        }
    }

    pub const fn not_official(provision: Provision) -> Self {
        Self {
            verdict: Verdict::NotOfficial,
            provision,
        }
    }

    pub const fn out_of_scope(provision: Provision) -> Self {
        Self {
            verdict: Verdict::OutOfScope,
            provision,
        }
    }

    /// `Some(true)` / `Some(false)` for in-scope verdicts, `None` otherwise.
    pub const fn is(&self) -> Option<bool> {
        match self.verdict {
            Verdict::Official => Some(true),
            Verdict::NotOfficial => Some(false),
            Verdict::OutOfScope => None,
        }
    }

    pub const fn is_out_of_scope(&self) -> bool {
        matches!(self.verdict, Verdict::OutOfScope)
    }

    pub fn reason(&self) -> String {
        self.provision.reason()
    }

    pub fn summary(&self) -> String {
        let headline = match self.verdict {
            Verdict::Official => "official document",
            Verdict::NotOfficial => "not an official document",
            Verdict::OutOfScope => "outside the scope of the officiality rules",
        };
        format!("{headline} ({})", self.provision.citation())
    }
}

#[derive(Serialize)]
struct OfficialityView<'a> {
    is: Option<bool>,
    out_of_scope: bool,
    reason: String,
    provision: &'a str,
}

impl Serialize for Officiality {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        OfficialityView {
            is: self.is(),
            out_of_scope: self.is_out_of_scope(),
            reason: self.reason(),
            provision: self.provision.citation(),
        }
        .serialize(serializer)
    }
}
