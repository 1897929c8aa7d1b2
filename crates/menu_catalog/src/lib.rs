//! Ordered, identity-stable menu catalog and the single-entry edit workflow on top of it.

pub mod catalog;
pub mod editor;
pub mod ids;

pub use catalog::{seed_entries, MenuCatalog};
pub use editor::{MenuEditor, SubmitOutcome};
pub use ids::{IdSource, RandomIds, SequentialIds};
