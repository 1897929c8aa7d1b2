//! Plain data types for the menu catalog: ids, entries, drafts and errors.

pub mod domain;
pub mod draft;
pub mod error;

pub use domain::{Direction, EditMode, EntryId, MenuEntry, Price, UNCATEGORIZED};
pub use draft::{MenuDraft, ValidatedDraft};
pub use error::{CatalogError, ErrorCode, ErrorReport, ValidationError};
