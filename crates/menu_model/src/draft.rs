//! Unvalidated form input and its checked counterpart.

use serde::{Deserialize, Serialize};

use crate::{
    domain::{MenuEntry, Price, UNCATEGORIZED},
    error::ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDraft {
    pub name: String,
    pub price: String,
    pub category: String,
    pub available: bool,
}

impl Default for MenuDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            category: String::new(),
            available: true,
        }
    }
}

impl MenuDraft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            category: category.into(),
            available,
        }
    }

    pub fn from_entry(entry: &MenuEntry) -> Self {
        Self {
            name: entry.name.clone(),
            price: entry.price.to_draft_string(),
            category: entry.category.clone(),
            available: entry.available,
        }
    }

    pub fn validate(&self) -> Result<ValidatedDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let price = Price::parse(&self.price)?;
        let category = match self.category.trim() {
            "" => UNCATEGORIZED,
            trimmed => trimmed,
        };

        Ok(ValidatedDraft {
            name: name.to_string(),
            price,
            category: category.to_string(),
            available: self.available,
        })
    }
}

/// Typed fields ready to be written into an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    pub name: String,
    pub price: Price,
    pub category: String,
    pub available: bool,
}

#[cfg(test)]
#[path = "tests/draft_tests.rs"]
mod tests;
