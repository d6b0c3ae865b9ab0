use std::fmt;

/// A path to a field in the format tree, e.g. `"follow_up_questions[0].question"`.
///
/// Used as keys in a `ValidationReport` to attach error messages to the
/// offending field, including fields nested inside sequence elements.
/// Paths are hierarchical: dot notation for named fields, bracket notation
/// for sequence indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    /// Rendered path string, e.g. "follow_up_questions[0].question".
    path: String,
}

impl FieldPath {
    /// Create a root path from a field name.
    pub fn root(name: impl Into<String>) -> Self {
        Self { path: name.into() }
    }

    /// Append a named child segment, returning a new path.
    pub fn child(&self, name: &str) -> Self {
        if name.is_empty() {
            self.clone()
        } else if self.path.is_empty() {
            Self::root(name)
        } else {
            Self::root(format!("{}.{}", self.path, name))
        }
    }

    /// Append a sequence index, returning a new path.
    pub fn index(&self, idx: usize) -> Self {
        Self::root(format!("{}[{idx}]", self.path))
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self::root(s)
    }
}

impl From<String> for FieldPath {
    fn from(s: String) -> Self {
        Self::root(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root() {
        let path = FieldPath::root("name");
        assert_eq!(path.as_str(), "name");
    }

    #[test]
    fn child() {
        let path = FieldPath::root("follow_up_questions").child("question");
        assert_eq!(path.as_str(), "follow_up_questions.question");
    }

    #[test]
    fn index_then_child() {
        let path = FieldPath::root("follow_up_questions").index(2).child("question");
        assert_eq!(path.as_str(), "follow_up_questions[2].question");
    }

    #[test]
    fn nested_sequences() {
        let path = FieldPath::root("follow_up_questions")
            .index(0)
            .child("answer_options")
            .index(1)
            .child("text");
        assert_eq!(path.as_str(), "follow_up_questions[0].answer_options[1].text");
    }

    #[test]
    fn display() {
        let path = FieldPath::root("template");
        assert_eq!(format!("{path}"), "template");
    }
}
