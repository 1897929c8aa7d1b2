use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category assigned when a draft leaves it blank.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Non-negative, finite amount in the catalog's single currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingPrice);
        }

        let amount = trimmed
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidPrice(trimmed.to_string()))?;
        if !amount.is_finite() {
            return Err(ValidationError::NonFinitePrice(trimmed.to_string()));
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativePrice(trimmed.to_string()));
        }

        // "-0" parses to negative zero, which would render as "-0.00".
        Ok(Self(if amount == 0.0 { 0.0 } else { amount }))
    }

    pub fn from_cents(cents: u32) -> Self {
        Self(f64::from(cents) / 100.0)
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// Shortest text that parses back to the same amount, used to refill an edit draft.
    pub fn to_draft_string(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: EntryId,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Position to swap with, or `None` when the move would leave `0..len`.
    pub fn target(self, index: usize, len: usize) -> Option<usize> {
        if index >= len {
            return None;
        }
        let target = match self {
            Self::Up => index.checked_sub(1)?,
            Self::Down => index + 1,
        };
        (target < len).then_some(target)
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("up") {
            Ok(Self::Up)
        } else if s.eq_ignore_ascii_case("down") {
            Ok(Self::Down)
        } else {
            Err(format!("unknown direction '{s}', expected 'up' or 'down'"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    Idle,
    Editing(EntryId),
}

impl EditMode {
    pub fn editing_id(&self) -> Option<&EntryId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
