//! Draft-and-submit workflow: at most one entry is being edited at a time.

use menu_model::{CatalogError, Direction, EditMode, EntryId, MenuDraft, MenuEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    catalog::MenuCatalog,
    ids::{IdSource, SequentialIds},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "id", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Created(EntryId),
    Updated(EntryId),
}

impl SubmitOutcome {
    pub fn id(&self) -> &EntryId {
        match self {
            Self::Created(id) | Self::Updated(id) => id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuEditor<S = SequentialIds> {
    catalog: MenuCatalog<S>,
    mode: EditMode,
    draft: MenuDraft,
}

impl<S: IdSource> MenuEditor<S> {
    pub fn new(catalog: MenuCatalog<S>) -> Self {
        Self {
            catalog,
            mode: EditMode::Idle,
            draft: MenuDraft::default(),
        }
    }

    /// Starts editing `id`, replacing any session already open, and loads its fields into the draft.
    pub fn begin_edit(&mut self, id: &EntryId) -> Result<&MenuDraft, CatalogError> {
        let entry = self
            .catalog
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        self.draft = MenuDraft::from_entry(entry);
        if let Some(previous) = self.mode.editing_id().filter(|previous| *previous != id) {
            debug!(previous = %previous, id = %id, "switching edit session");
        }
        self.mode = EditMode::Editing(id.clone());
        debug!(id = %id, "began editing menu entry");
        Ok(&self.draft)
    }

    pub fn cancel_edit(&mut self) {
        if let EditMode::Editing(id) = &self.mode {
            debug!(id = %id, "cancelled edit session");
        }
        self.reset();
    }

    /// Updates the entry under edit, or creates a new one when idle.
    ///
    /// On success the session ends and the draft is emptied. On failure nothing changes,
    /// so the caller can fix the draft and submit again.
    pub fn submit(&mut self) -> Result<SubmitOutcome, CatalogError> {
        let outcome = match &self.mode {
            EditMode::Editing(id) => {
                self.catalog.update(id, &self.draft)?;
                SubmitOutcome::Updated(id.clone())
            }
            EditMode::Idle => SubmitOutcome::Created(self.catalog.create(&self.draft)?),
        };
        self.reset();
        Ok(outcome)
    }

    pub fn toggle_availability(&mut self, id: &EntryId) -> Result<bool, CatalogError> {
        self.catalog.toggle_availability(id)
    }

    pub fn reorder(&mut self, index: usize, direction: Direction) -> bool {
        self.catalog.reorder(index, direction)
    }

    /// Removes `id`, ending the edit session if it pointed at that entry.
    pub fn delete(&mut self, id: &EntryId) -> Result<MenuEntry, CatalogError> {
        let removed = self.catalog.delete(id)?;
        if self.mode.editing_id() == Some(id) {
            debug!(id = %id, "edit session invalidated by delete");
            self.reset();
        }
        Ok(removed)
    }

    fn reset(&mut self) {
        self.mode = EditMode::Idle;
        self.draft = MenuDraft::default();
    }
}

impl<S> MenuEditor<S> {
    pub fn catalog(&self) -> &MenuCatalog<S> {
        &self.catalog
    }

    pub fn entries(&self) -> &[MenuEntry] {
        self.catalog.entries()
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    pub fn editing_id(&self) -> Option<&EntryId> {
        self.mode.editing_id()
    }

    pub fn draft(&self) -> &MenuDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut MenuDraft {
        &mut self.draft
    }

    pub fn into_catalog(self) -> MenuCatalog<S> {
        self.catalog
    }
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
