use retort_types::{AnswerOption, EntityId, FollowUpQuestion, ResponseFormat, DEFAULT_TEMPLATE};

/// The authoritative in-memory collection of committed response formats.
///
/// All operations are synchronous, last-write-wins mutations on the single
/// UI thread; nothing is persisted, so the collection is lost when the
/// process exits. The submit handler in `Editor` is the seam where a real
/// deployment would add a persistence call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormatStore {
    formats: Vec<ResponseFormat>,
}

impl FormatStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the one example format shown on first mount.
    pub fn seeded() -> Self {
        Self {
            formats: vec![ResponseFormat {
                id: Some("1".into()),
                name: "Standard Response".to_string(),
                description: "Basic response format with follow-up questions".to_string(),
                template: DEFAULT_TEMPLATE.to_string(),
                follow_up_questions: vec![FollowUpQuestion::new(
                    "q1",
                    "Would you like to know more about our services?",
                    vec![
                        AnswerOption::new(
                            "a1",
                            "Yes, tell me more",
                            "We offer a wide range of services including...",
                        ),
                        AnswerOption::new(
                            "a2",
                            "No, thanks",
                            "No problem! Feel free to ask if you have any other questions.",
                        ),
                    ],
                )],
            }],
        }
    }

    /// Append a format, assigning it a fresh identity. Returns the new id.
    pub fn insert(&mut self, mut format: ResponseFormat) -> EntityId {
        let id = EntityId::fresh();
        format.id = Some(id.clone());
        log::debug!("format inserted: {id}");
        self.formats.push(format);
        id
    }

    /// Replace the format with the given id in place, preserving its identity.
    ///
    /// Leaves the store untouched if no format carries the id.
    pub fn replace(&mut self, id: &EntityId, mut format: ResponseFormat) {
        if let Some(slot) = self.formats.iter_mut().find(|f| f.id.as_ref() == Some(id)) {
            format.id = Some(id.clone());
            log::debug!("format replaced: {id}");
            *slot = format;
        }
    }

    /// Remove the format with the given id. Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: &EntityId) {
        self.formats.retain(|f| f.id.as_ref() != Some(id));
    }

    /// Look up a format by id.
    pub fn get(&self, id: &EntityId) -> Option<&ResponseFormat> {
        self.formats.iter().find(|f| f.id.as_ref() == Some(id))
    }

    /// Iterate over all formats in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ResponseFormat> {
        self.formats.iter()
    }

    /// Number of committed formats.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether the store holds no formats.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_holds_the_example() {
        let store = FormatStore::seeded();
        assert_eq!(store.len(), 1);
        let format = store.get(&"1".into()).unwrap();
        assert_eq!(format.name, "Standard Response");
        assert_eq!(format.follow_up_questions.len(), 1);
        assert_eq!(format.follow_up_questions[0].answer_options.len(), 2);
    }

    #[test]
    fn insert_assigns_fresh_distinct_ids() {
        let mut store = FormatStore::new();
        let a = store.insert(ResponseFormat::draft());
        let b = store.insert(ResponseFormat::draft());
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert!(store.get(&a).is_some());
    }

    #[test]
    fn replace_preserves_identity() {
        let mut store = FormatStore::seeded();
        let mut edited = store.get(&"1".into()).unwrap().clone();
        edited.name = "Renamed".to_string();
        edited.id = None;

        store.replace(&"1".into(), edited);

        assert_eq!(store.len(), 1);
        let format = store.get(&"1".into()).unwrap();
        assert_eq!(format.name, "Renamed");
        assert_eq!(format.id, Some("1".into()));
    }

    #[test]
    fn replace_unknown_id_is_a_no_op() {
        let mut store = FormatStore::seeded();
        let before = store.clone();
        store.replace(&"missing".into(), ResponseFormat::draft());
        assert_eq!(store, before);
    }

    #[test]
    fn remove_by_id() {
        let mut store = FormatStore::seeded();
        store.remove(&"1".into());
        assert!(store.is_empty());
    }

    #[test]
    fn remove_unknown_id_leaves_store_unchanged() {
        let mut store = FormatStore::seeded();
        store.remove(&"missing".into());
        assert_eq!(store.len(), 1);
    }
}
