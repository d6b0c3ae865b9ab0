//! Plain-text preview of a response format.
//!
//! The listing screen flattens each format to its question texts and option
//! labels; `render` substitutes the two template markers with a sample reply
//! and the rendered follow-up list, showing an admin what a shaped reply
//! would look like.

use crate::{FollowUpQuestion, ResponseFormat, FOLLOW_UP_MARKER, RESPONSE_MARKER};

/// Render the format's template against a sample reply.
///
/// `{{response}}` is replaced with `sample_reply` and `{{followUpQuestions}}`
/// with a numbered list of questions, each followed by its bracketed option
/// labels. Markers absent from the template are simply not substituted.
pub fn render(format: &ResponseFormat, sample_reply: &str) -> String {
    format
        .template
        .replace(RESPONSE_MARKER, sample_reply)
        .replace(FOLLOW_UP_MARKER, &render_questions(&format.follow_up_questions))
}

/// One summary line per question: the question text, then each option label
/// in brackets. This is the flattened preview the listing screen shows.
pub fn flatten(format: &ResponseFormat) -> Vec<String> {
    format
        .follow_up_questions
        .iter()
        .map(|question| {
            let mut line = question.question.clone();
            for option in &question.answer_options {
                line.push_str(&format!(" [{}]", option.text));
            }
            line
        })
        .collect()
}

fn render_questions(questions: &[FollowUpQuestion]) -> String {
    let mut out = String::new();
    for (idx, question) in questions.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}. {}", idx + 1, question.question));
        for option in &question.answer_options {
            out.push_str(&format!("\n   [{}]", option.text));
        }
    }
    out
}
