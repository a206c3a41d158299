use serde::{Deserialize, Serialize};

use super::answer::Answer;

/// Rule-set configuration a questionnaire is evaluated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    /// Single-level questionnaire keyed directly on document type.
    Flat,
    /// Gated questionnaire with separate arrived / not-arrived paths.
    #[default]
    Nested,
}

impl Schema {
    pub const fn label(self) -> &'static str {
        match self {
            Schema::Flat => "flat",
            Schema::Nested => "nested",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flat" | "a" => Some(Schema::Flat),
            "nested" | "b" => Some(Schema::Nested),
            _ => None,
        }
    }
}

/// Document categories offered by the flat questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlatDocumentType {
    Ledger,
    CourtRuling,
    Memoranda,
    Other,
    /// Any value outside the offered categories.
    #[serde(other)]
    Unrecognized,
}

/// Flat questionnaire snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlatDocumentState {
    pub held_by_authority: Answer,
    pub doc_type_choice: Option<FlatDocumentType>,
    pub ready_for_notation: Answer,
    pub decision_announced: Answer,
    pub riksdag_record: Answer,
    pub approved: Answer,
    pub dispatched: Answer,
    pub specific_matter: Answer,
    pub other_approved: Answer,
    pub settled: Answer,
}

/// Document categories offered once a document is known not to have arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    Ledger,
    CourtRuling,
    Record,
    Other,
    #[serde(other)]
    Unrecognized,
}

/// Nested questionnaire snapshot with top-level gating questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentState {
    pub held_by_authority: Answer,
    pub backup_etc: Answer,
    pub transferred_within_auth: Answer,
    pub competition: Answer,
    pub has_arrived: Answer,
    pub paths: DocumentPaths,
}

/// Answers for both arrival paths; `has_arrived` selects which one is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentPaths {
    pub arrived: ArrivedAnswers,
    pub not_arrived: NotArrivedAnswers,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrivedAnswers {
    pub directed_to_official: Answer,
    pub refers_to_case: Answer,
    pub working_material: Answer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotArrivedAnswers {
    pub doc_type: Option<DocumentType>,
    pub ready_for_notation: Answer,
    pub decision_announced: Answer,
    pub riksdag_record: Answer,
    pub approved: Answer,
    pub other_working_material: Answer,
    pub dispatched: Answer,
    pub specific_matter: Answer,
    pub other_approved: Answer,
    pub memoranda: Answer,
    pub document_archived: Answer,
    pub settled: Answer,
}
