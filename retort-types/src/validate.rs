use std::fmt;

use crate::{FieldPath, ResponseFormat};

/// A single validation failure, keyed to the offending field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    /// Path to the field the message belongs to.
    pub path: FieldPath,

    /// Human-readable message rendered inline next to the field.
    pub message: String,
}

/// All validation failures from one submit attempt, in tree walk order.
///
/// An empty report never leaves `validate_format` - a returned report has at
/// least one entry, and any entry rejects the commit atomically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: Vec<ValidationError>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a message to a field path.
    pub fn push(&mut self, path: FieldPath, message: impl Into<String>) {
        self.entries.push(ValidationError {
            path,
            message: message.into(),
        });
    }

    /// Look up the message for a specific field, if any.
    pub fn message_for(&self, path: &FieldPath) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| &e.path == path)
            .map(|e| e.message.as_str())
    }

    /// Iterate over all failures in walk order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.entries.iter()
    }

    /// Number of failures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report holds no failures.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.entries.len())?;
        for entry in &self.entries {
            write!(f, "\n  {entry}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Validate a whole format tree the way the submit handler requires.
///
/// Every required string must be non-empty and every question must offer at
/// least one answer option. The walk reports every failure at once so the
/// form can surface all inline messages in a single pass; any failure means
/// the submit is rejected with no mutation.
pub fn validate_format(format: &ResponseFormat) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::new();

    if format.name.is_empty() {
        report.push(FieldPath::root("name"), "Name is required");
    }
    if format.description.is_empty() {
        report.push(FieldPath::root("description"), "Description is required");
    }
    if format.template.is_empty() {
        report.push(FieldPath::root("template"), "Template is required");
    }

    let questions = FieldPath::root("follow_up_questions");
    for (q_idx, question) in format.follow_up_questions.iter().enumerate() {
        let q_path = questions.index(q_idx);
        if question.question.is_empty() {
            report.push(q_path.child("question"), "Question is required");
        }

        let options = q_path.child("answer_options");
        if question.answer_options.is_empty() {
            report.push(options.clone(), "At least one answer option is required");
        }
        for (o_idx, option) in question.answer_options.iter().enumerate() {
            let o_path = options.index(o_idx);
            if option.text.is_empty() {
                report.push(o_path.child("text"), "Answer text is required");
            }
            if option.response.is_empty() {
                report.push(o_path.child("response"), "Response is required");
            }
        }
    }

    if report.is_empty() { Ok(()) } else { Err(report) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnswerOption, FollowUpQuestion};

    fn valid_format() -> ResponseFormat {
        ResponseFormat {
            id: None,
            name: "Standard".to_string(),
            description: "Basic".to_string(),
            template: crate::DEFAULT_TEMPLATE.to_string(),
            follow_up_questions: vec![FollowUpQuestion::new(
                "q1",
                "More?",
                vec![AnswerOption::new("a1", "Yes", "Great.")],
            )],
        }
    }

    #[test]
    fn accepts_valid_tree() {
        assert!(validate_format(&valid_format()).is_ok());
    }

    #[test]
    fn accepts_format_without_questions() {
        let mut format = valid_format();
        format.follow_up_questions.clear();
        assert!(validate_format(&format).is_ok());
    }

    #[test]
    fn rejects_empty_top_level_fields() {
        let mut format = valid_format();
        format.name.clear();
        format.description.clear();
        format.template.clear();

        let report = validate_format(&format).unwrap_err();
        assert_eq!(report.len(), 3);
        assert_eq!(
            report.message_for(&FieldPath::root("name")),
            Some("Name is required")
        );
        assert_eq!(
            report.message_for(&FieldPath::root("description")),
            Some("Description is required")
        );
        assert_eq!(
            report.message_for(&FieldPath::root("template")),
            Some("Template is required")
        );
    }

    #[test]
    fn rejects_question_without_options() {
        let mut format = valid_format();
        format.follow_up_questions[0].answer_options.clear();

        let report = validate_format(&format).unwrap_err();
        let path = FieldPath::root("follow_up_questions")
            .index(0)
            .child("answer_options");
        assert_eq!(
            report.message_for(&path),
            Some("At least one answer option is required")
        );
    }

    #[test]
    fn rejects_empty_nested_fields_with_exact_paths() {
        let mut format = valid_format();
        format.follow_up_questions[0].question.clear();
        format.follow_up_questions[0].answer_options[0].text.clear();
        format.follow_up_questions[0].answer_options[0]
            .response
            .clear();

        let report = validate_format(&format).unwrap_err();
        assert_eq!(report.len(), 3);

        let q_path = FieldPath::root("follow_up_questions").index(0);
        assert_eq!(
            report.message_for(&q_path.child("question")),
            Some("Question is required")
        );
        let o_path = q_path.child("answer_options").index(0);
        assert_eq!(
            report.message_for(&o_path.child("text")),
            Some("Answer text is required")
        );
        assert_eq!(
            report.message_for(&o_path.child("response")),
            Some("Response is required")
        );
    }

    #[test]
    fn reports_every_failure_at_once() {
        let mut format = valid_format();
        format.name.clear();
        format.follow_up_questions.push(FollowUpQuestion {
            id: None,
            question: String::new(),
            answer_options: Vec::new(),
        });

        let report = validate_format(&format).unwrap_err();
        // name, second question text, second question option minimum.
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn display_lists_paths() {
        let mut format = valid_format();
        format.name.clear();
        let report = validate_format(&format).unwrap_err();
        let rendered = report.to_string();
        assert!(rendered.contains("name: Name is required"));
    }
}
