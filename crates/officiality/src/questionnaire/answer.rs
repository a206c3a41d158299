use serde::{Deserialize, Serialize};

/// Tri-state answer to a single questionnaire question.
///
/// Serialised as `true`, `false` or `null`; a missing field reads as
/// [`Answer::Unanswered`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Answer {
    Yes,
    No,
    #[default]
    Unanswered,
}

impl Answer {
    pub const fn is_answered(self) -> bool {
        !matches!(self, Answer::Unanswered)
    }

    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Answer::Yes => Some(true),
            Answer::No => Some(false),
            Answer::Unanswered => None,
        }
    }
}

impl From<Option<bool>> for Answer {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Answer::Yes,
            Some(false) => Answer::No,
            None => Answer::Unanswered,
        }
    }
}

impl From<Answer> for Option<bool> {
    fn from(value: Answer) -> Self {
        value.as_bool()
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}
