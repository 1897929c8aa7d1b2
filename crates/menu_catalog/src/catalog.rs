use std::collections::HashSet;

use menu_model::{CatalogError, Direction, EntryId, MenuDraft, MenuEntry, Price};
use tracing::debug;

use crate::ids::{IdSource, SequentialIds};

/// Ordered menu entries, newest first unless reordered. Ids are unique and never reassigned.
#[derive(Debug, Clone)]
pub struct MenuCatalog<S = SequentialIds> {
    entries: Vec<MenuEntry>,
    ids: S,
}

impl<S: IdSource> MenuCatalog<S> {
    pub fn new(ids: S) -> Self {
        Self {
            entries: Vec::new(),
            ids,
        }
    }

    pub fn with_entries(ids: S, entries: Vec<MenuEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(&entry.id) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries, ids })
    }

    /// Catalog preloaded with the demo lunch menu.
    pub fn seeded(ids: S) -> Self {
        Self {
            entries: seed_entries(),
            ids,
        }
    }

    /// Validates `draft` and prepends a new entry built from it.
    pub fn create(&mut self, draft: &MenuDraft) -> Result<EntryId, CatalogError> {
        let fields = draft.validate().inspect_err(|err| {
            debug!(error = %err, "rejected menu entry draft");
        })?;

        let id = self.fresh_id();
        self.entries.insert(
            0,
            MenuEntry {
                id: id.clone(),
                name: fields.name,
                price: fields.price,
                category: fields.category,
                available: fields.available,
            },
        );
        debug!(id = %id, len = self.entries.len(), "created menu entry");
        Ok(id)
    }

    /// Replaces every editable field of `id` in place; id and position are kept.
    pub fn update(&mut self, id: &EntryId, draft: &MenuDraft) -> Result<(), CatalogError> {
        let index = self.index_of(id)?;
        let fields = draft.validate().inspect_err(|err| {
            debug!(id = %id, error = %err, "rejected menu entry update");
        })?;

        let entry = &mut self.entries[index];
        entry.name = fields.name;
        entry.price = fields.price;
        entry.category = fields.category;
        entry.available = fields.available;
        debug!(id = %id, position = index, "updated menu entry");
        Ok(())
    }

    /// Flips availability and returns the new value.
    pub fn toggle_availability(&mut self, id: &EntryId) -> Result<bool, CatalogError> {
        let index = self.index_of(id)?;
        let entry = &mut self.entries[index];
        entry.available = !entry.available;
        debug!(id = %id, available = entry.available, "toggled availability");
        Ok(entry.available)
    }

    /// Swaps the entry at `index` with its neighbour. Moves past either end do nothing and return `false`.
    pub fn reorder(&mut self, index: usize, direction: Direction) -> bool {
        let Some(target) = direction.target(index, self.entries.len()) else {
            debug!(index, ?direction, len = self.entries.len(), "reorder at boundary ignored");
            return false;
        };
        self.entries.swap(index, target);
        debug!(from = index, to = target, "reordered menu entries");
        true
    }

    pub fn delete(&mut self, id: &EntryId) -> Result<MenuEntry, CatalogError> {
        let index = self.index_of(id)?;
        let removed = self.entries.remove(index);
        debug!(id = %id, position = index, len = self.entries.len(), "deleted menu entry");
        Ok(removed)
    }

    fn fresh_id(&mut self) -> EntryId {
        loop {
            let id = self.ids.next_id();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl<S> MenuCatalog<S> {
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }

    pub fn entry_at(&self, index: usize) -> Result<&MenuEntry, CatalogError> {
        self.entries.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn available_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.available).count()
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|entry| entry.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    fn index_of(&self, id: &EntryId) -> Result<usize, CatalogError> {
        self.position(id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }
}

impl<S: IdSource + Default> Default for MenuCatalog<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

pub fn seed_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            id: EntryId::new("item-1"),
            name: "Taco al Pastor".into(),
            price: Price::from_cents(850),
            category: "Tacos".into(),
            available: true,
        },
        MenuEntry {
            id: EntryId::new("item-2"),
            name: "Grilled Corn Esquites".into(),
            price: Price::from_cents(600),
            category: "Sides".into(),
            available: true,
        },
        MenuEntry {
            id: EntryId::new("item-3"),
            name: "Mole Chicken Bowl".into(),
            price: Price::from_cents(1200),
            category: "Bowls".into(),
            available: false,
        },
    ]
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
