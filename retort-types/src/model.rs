use serde::{Deserialize, Serialize};

use crate::EntityId;

/// Substitution marker replaced by the main AI reply when a template is rendered.
pub const RESPONSE_MARKER: &str = "{{response}}";

/// Substitution marker replaced by the rendered follow-up question list.
pub const FOLLOW_UP_MARKER: &str = "{{followUpQuestions}}";

/// The template a brand-new format starts from.
pub const DEFAULT_TEMPLATE: &str = "{{response}}\n\n{{followUpQuestions}}";

/// One selectable choice for a follow-up question, paired with the canned
/// response to show if chosen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Present once committed; `None` on not-yet-persisted drafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    /// Label shown to the user.
    pub text: String,

    /// Canned reply sent when this option is chosen.
    pub response: String,
}

impl AnswerOption {
    /// Create a committed option with the given id.
    pub fn new(id: impl Into<EntityId>, text: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: text.into(),
            response: response.into(),
        }
    }

    /// Create an empty draft option with a fresh id.
    pub fn draft() -> Self {
        Self {
            id: Some(EntityId::fresh()),
            text: String::new(),
            response: String::new(),
        }
    }
}

/// A prompt shown to a user after a response, offering discrete answer options.
///
/// A question accepted at submit time must have at least one answer option;
/// the editor permits entering zero and reports the error instead of
/// blocking entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    /// The question text.
    pub question: String,

    /// Owned exclusively by this question; discarded with it.
    pub answer_options: Vec<AnswerOption>,
}

impl FollowUpQuestion {
    /// Create a committed question with the given id and options.
    pub fn new(
        id: impl Into<EntityId>,
        question: impl Into<String>,
        answer_options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            question: question.into(),
            answer_options,
        }
    }

    /// Create an empty draft question with a fresh id and no options.
    pub fn draft() -> Self {
        Self {
            id: Some(EntityId::fresh()),
            question: String::new(),
            answer_options: Vec::new(),
        }
    }
}

/// A named template plus associated follow-up-question tree, used to shape
/// an AI-generated reply.
///
/// The format exclusively owns its questions (and, transitively, their
/// options); deleting the format discards the whole tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    /// Display name.
    pub name: String,

    /// Human-readable summary shown in the listing.
    pub description: String,

    /// Reply template; see `RESPONSE_MARKER` and `FOLLOW_UP_MARKER`.
    pub template: String,

    #[serde(default)]
    pub follow_up_questions: Vec<FollowUpQuestion>,
}

impl ResponseFormat {
    /// An empty, uncommitted format with the template prefilled.
    ///
    /// This is the state the editor resets to when a new format is created.
    pub fn draft() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            template: DEFAULT_TEMPLATE.to_string(),
            follow_up_questions: Vec::new(),
        }
    }
}
