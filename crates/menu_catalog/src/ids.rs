use menu_model::EntryId;
use uuid::Uuid;

const ID_PREFIX: &str = "item";

/// Supplies fresh ids to the catalog. The catalog skips any id it already holds.
pub trait IdSource {
    fn next_id(&mut self) -> EntryId;
}

/// `item-1`, `item-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> EntryId {
        let id = EntryId::new(format!("{ID_PREFIX}-{}", self.next));
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> EntryId {
        EntryId::new(format!("{ID_PREFIX}-{}", Uuid::new_v4()))
    }
}

impl<S: IdSource + ?Sized> IdSource for Box<S> {
    fn next_id(&mut self) -> EntryId {
        (**self).next_id()
    }
}
