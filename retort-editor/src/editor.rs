use retort_types::{validate_format, EntityId, ValidationReport};

use crate::{FormatDraft, FormatStore};

/// Which of the editor's two screens is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorView {
    /// The list of committed formats.
    #[default]
    Listing,
    /// The shared edit form, filled with the current draft.
    Editing,
}

/// The response-format editor: authoritative store, one shared form draft,
/// and the two-state view machine between them.
///
/// `Listing -> Editing` via [`Editor::create`] or [`Editor::edit`];
/// `Editing -> Listing` via [`Editor::submit`] or [`Editor::cancel`].
/// There are no other states and nothing survives a drop.
#[derive(Clone, Debug)]
pub struct Editor {
    store: FormatStore,
    view: EditorView,
    draft: FormatDraft,
    /// Identity of the record being edited; `None` while creating a new one.
    selected: Option<EntityId>,
    /// Failures from the last rejected submit, keyed by field path.
    errors: ValidationReport,
}

impl Editor {
    /// An editor over the seeded store (the state on first mount).
    pub fn new() -> Self {
        Self::with_store(FormatStore::seeded())
    }

    /// An editor over a caller-provided store.
    pub fn with_store(store: FormatStore) -> Self {
        Self {
            store,
            view: EditorView::Listing,
            draft: FormatDraft::new(),
            selected: None,
            errors: ValidationReport::new(),
        }
    }

    pub fn view(&self) -> EditorView {
        self.view
    }

    pub fn store(&self) -> &FormatStore {
        &self.store
    }

    pub fn draft(&self) -> &FormatDraft {
        &self.draft
    }

    /// Mutable access for widget binding. Mutations here touch only the
    /// in-flight draft; nothing reaches the store until [`Editor::submit`].
    pub fn draft_mut(&mut self) -> &mut FormatDraft {
        &mut self.draft
    }

    /// Identity of the record loaded into the form, if any.
    pub fn selected(&self) -> Option<&EntityId> {
        self.selected.as_ref()
    }

    /// Failures from the last rejected submit; empty otherwise.
    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    /// Start a new format: clear any selection, reset the form to its
    /// defaults, switch to the edit screen.
    pub fn create(&mut self) {
        self.selected = None;
        self.draft = FormatDraft::new();
        self.errors = ValidationReport::new();
        self.view = EditorView::Editing;
    }

    /// Load an existing record into the form and switch to the edit screen.
    /// Unknown ids leave the editor where it is.
    pub fn edit(&mut self, id: &EntityId) {
        let Some(format) = self.store.get(id) else {
            log::warn!("edit requested for unknown format: {id}");
            return;
        };
        self.draft = FormatDraft::from_format(format);
        self.selected = Some(id.clone());
        self.errors = ValidationReport::new();
        self.view = EditorView::Editing;
    }

    /// Remove a committed format. No confirmation step; irreversible within
    /// the session. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: &EntityId) {
        self.store.remove(id);
    }

    /// Validate the draft and commit it.
    ///
    /// On success: replaces the selected record in place (identity
    /// preserved) or appends a new one (fresh identity), then returns to the
    /// listing. On failure: nothing is mutated, the editor stays on the form
    /// with the report retained for inline display, and the report is also
    /// returned to the caller.
    pub fn submit(&mut self) -> Result<EntityId, ValidationReport> {
        let format = self.draft.to_format();
        if let Err(report) = validate_format(&format) {
            log::debug!("submit rejected: {report}");
            self.errors = report.clone();
            return Err(report);
        }

        let id = match self.selected.take() {
            Some(id) => {
                self.store.replace(&id, format);
                id
            }
            None => self.store.insert(format),
        };

        self.draft = FormatDraft::new();
        self.errors = ValidationReport::new();
        self.view = EditorView::Listing;
        Ok(id)
    }

    /// Discard the draft and any errors; return to the listing.
    pub fn cancel(&mut self) {
        self.selected = None;
        self.draft = FormatDraft::new();
        self.errors = ValidationReport::new();
        self.view = EditorView::Listing;
    }

    // Draft mutators, proxied so surfaces only ever hold the editor.

    pub fn add_question(&mut self) {
        self.draft.add_question();
    }

    pub fn delete_question(&mut self, question_id: &EntityId) {
        self.draft.delete_question(question_id);
    }

    pub fn add_answer_option(&mut self, question_id: &EntityId) {
        self.draft.add_answer_option(question_id);
    }

    pub fn delete_answer_option(&mut self, question_id: &EntityId, option_id: &EntityId) {
        self.draft.delete_answer_option(question_id, option_id);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_listing_over_the_seed() {
        let editor = Editor::new();
        assert_eq!(editor.view(), EditorView::Listing);
        assert_eq!(editor.store().len(), 1);
        assert!(editor.errors().is_empty());
    }

    #[test]
    fn create_resets_a_dirty_form() {
        let mut editor = Editor::new();
        editor.edit(&"1".into());
        assert_eq!(editor.selected(), Some(&"1".into()));

        editor.create();

        assert_eq!(editor.view(), EditorView::Editing);
        assert_eq!(editor.selected(), None);
        assert_eq!(editor.draft(), &FormatDraft::new());
    }

    #[test]
    fn edit_loads_the_full_record() {
        let mut editor = Editor::new();
        editor.edit(&"1".into());

        assert_eq!(editor.view(), EditorView::Editing);
        assert_eq!(editor.draft().name, "Standard Response");
        assert_eq!(editor.draft().follow_up_questions.len(), 1);
    }

    #[test]
    fn edit_unknown_id_stays_listing() {
        let mut editor = Editor::new();
        editor.edit(&"missing".into());
        assert_eq!(editor.view(), EditorView::Listing);
        assert_eq!(editor.selected(), None);
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut editor = Editor::new();
        editor.create();
        editor.draft_mut().name = "Half-typed".to_string();

        editor.cancel();

        assert_eq!(editor.view(), EditorView::Listing);
        assert_eq!(editor.store().len(), 1);
        assert_eq!(editor.draft(), &FormatDraft::new());
    }
}
