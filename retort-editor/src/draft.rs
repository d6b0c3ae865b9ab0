use retort_types::{
    AnswerOption, EntityId, FollowUpQuestion, ResponseFormat, DEFAULT_TEMPLATE,
};

/// The in-flight form state for one response format.
///
/// This is the explicit state object the form binds to - a mutable tree of
/// typed fields owned by the editor, committed only through
/// `Editor::submit`. The record identity is deliberately not part of the
/// draft: a brand-new format has no id until it is committed, and editing an
/// existing format keeps its id in the editor's selection, never in the form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormatDraft {
    pub name: String,
    pub description: String,
    pub template: String,
    pub follow_up_questions: Vec<FollowUpQuestion>,
}

impl FormatDraft {
    /// The defaults a new format starts from: empty fields, template
    /// prefilled with the two substitution markers.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            template: DEFAULT_TEMPLATE.to_string(),
            follow_up_questions: Vec::new(),
        }
    }

    /// Load a full record (including nested questions and options) into the form.
    pub fn from_format(format: &ResponseFormat) -> Self {
        Self {
            name: format.name.clone(),
            description: format.description.clone(),
            template: format.template.clone(),
            follow_up_questions: format.follow_up_questions.clone(),
        }
    }

    /// Assemble the draft into a record, without an identity.
    ///
    /// The store assigns identity on append; replacement preserves the
    /// selected record's identity.
    pub fn to_format(&self) -> ResponseFormat {
        ResponseFormat {
            id: None,
            name: self.name.clone(),
            description: self.description.clone(),
            template: self.template.clone(),
            follow_up_questions: self.follow_up_questions.clone(),
        }
    }

    /// Append a new question: fresh identity, empty text, no options yet.
    pub fn add_question(&mut self) {
        self.follow_up_questions.push(FollowUpQuestion::draft());
    }

    /// Remove a question by identity. Unknown ids are a silent no-op.
    pub fn delete_question(&mut self, question_id: &EntityId) {
        self.follow_up_questions
            .retain(|q| q.id.as_ref() != Some(question_id));
    }

    /// Append an empty option to the question with the given identity.
    pub fn add_answer_option(&mut self, question_id: &EntityId) {
        if let Some(question) = self.question_mut(question_id) {
            question.answer_options.push(AnswerOption::draft());
        }
    }

    /// Remove an option by identity from the question with the given identity.
    pub fn delete_answer_option(&mut self, question_id: &EntityId, option_id: &EntityId) {
        if let Some(question) = self.question_mut(question_id) {
            question
                .answer_options
                .retain(|o| o.id.as_ref() != Some(option_id));
        }
    }

    fn question_mut(&mut self, question_id: &EntityId) -> Option<&mut FollowUpQuestion> {
        self.follow_up_questions
            .iter_mut()
            .find(|q| q.id.as_ref() == Some(question_id))
    }
}

impl Default for FormatDraft {
    fn default() -> Self {
        Self::new()
    }
}
