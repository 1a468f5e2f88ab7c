//! Item types shared by the three list stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Item identifier: Unix milliseconds at creation, bumped past the owning
/// list's maximum so ids stay unique within a list (see
/// [`crate::store::ListStore::add`]). Never reused or mutated.
pub type ItemId = i64;

/// Todo priority levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Next step in the fixed cycle high -> medium -> low -> high.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }

    /// Display rank: high sorts before medium before low.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {expected}: '{got}'")]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParseEnumError {
                expected: "priority",
                got: s.to_string(),
            }),
        }
    }
}

/// An item owned by one list store.
///
/// The store mints `id` and the creation instant; the draft carries the
/// caller-supplied fields for the item's list.
pub trait ListItem: Clone + Serialize + for<'de> Deserialize<'de> {
    /// Caller-supplied fields, before the store mints id and timestamp.
    type Draft;

    fn mint(draft: Self::Draft, id: ItemId, at: DateTime<Utc>) -> Self;

    fn id(&self) -> ItemId;

    fn text(&self) -> &str;
}

/// A raw note in the dump list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DumpItem {
    pub id: ItemId,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Fields for a new dump item.
#[derive(Debug, Clone)]
pub struct DumpDraft {
    pub text: String,
}

impl ListItem for DumpItem {
    type Draft = DumpDraft;

    fn mint(draft: Self::Draft, id: ItemId, at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: draft.text,
            timestamp: at,
        }
    }

    fn id(&self) -> ItemId {
        self.id
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// A prioritized task in the todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    pub timestamp: DateTime<Utc>,
}

/// Fields for a new todo item.
#[derive(Debug, Clone)]
pub struct TodoDraft {
    pub text: String,
    pub priority: Priority,
}

impl ListItem for TodoItem {
    type Draft = TodoDraft;

    fn mint(draft: Self::Draft, id: ItemId, at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: draft.text,
            priority: draft.priority,
            completed: false,
            timestamp: at,
        }
    }

    fn id(&self) -> ItemId {
        self.id
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// A finished task in the completed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedItem {
    pub id: ItemId,
    pub text: String,
    pub original_priority: Priority,
    pub completed_at: DateTime<Utc>,
    pub timestamp: DateTime<Utc>,
}

/// Fields for a new completed item.
#[derive(Debug, Clone)]
pub struct CompletedDraft {
    pub text: String,
    pub original_priority: Priority,
    pub completed_at: DateTime<Utc>,
}

impl ListItem for CompletedItem {
    type Draft = CompletedDraft;

    fn mint(draft: Self::Draft, id: ItemId, at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: draft.text,
            original_priority: draft.original_priority,
            completed_at: draft.completed_at,
            timestamp: at,
        }
    }

    fn id(&self) -> ItemId {
        self.id
    }

    fn text(&self) -> &str {
        &self.text
    }
}
