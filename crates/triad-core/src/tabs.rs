//! Active-tab state machine.
//!
//! Tracks which of the three lists is currently in view. The active tab is
//! persisted under its own storage key so a restart resumes where the user
//! left off; an absent or unrecognized value resolves to dump.

use crate::model::ParseEnumError;
use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::debug;

/// Storage key for the persisted active tab.
pub const ACTIVE_TAB_KEY: &str = "activeTab";

/// The three views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Dump,
    Todo,
    Completed,
}

impl Tab {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Dump => "dump",
            Self::Todo => "todo",
            Self::Completed => "completed",
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Self::Dump
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dump" => Ok(Self::Dump),
            "todo" => Ok(Self::Todo),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseEnumError {
                expected: "tab",
                got: s.to_string(),
            }),
        }
    }
}

/// Which list is currently visible.
#[derive(Debug)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    /// Resolve the initial tab from the persisted key, defaulting to dump
    /// when absent or unrecognized.
    #[must_use]
    pub fn open(storage: &Storage) -> Self {
        let active = storage.get::<Tab>(ACTIVE_TAB_KEY).unwrap_or_default();
        Self { active }
    }

    #[must_use]
    pub const fn active(&self) -> Tab {
        self.active
    }

    /// Switch to `target`. Returns true when the view changed (and only the
    /// newly active list needs a re-render); switching to the current tab is
    /// a no-op returning false.
    pub fn switch_tab(&mut self, storage: &Storage, target: Tab) -> bool {
        if target == self.active {
            return false;
        }
        self.active = target;
        storage.put(ACTIVE_TAB_KEY, &target);
        debug!(tab = %target, "switched tab");
        true
    }

    /// Back to the initial state (dump), without persisting anything; used by
    /// clear-all after the adapter has dropped the keys.
    pub(crate) fn reset(&mut self) {
        self.active = Tab::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{ACTIVE_TAB_KEY, Tab, TabController};
    use crate::storage::Storage;
    use std::str::FromStr;

    #[test]
    fn defaults_to_dump() {
        let storage = Storage::in_memory();
        assert_eq!(TabController::open(&storage).active(), Tab::Dump);
    }

    #[test]
    fn unrecognized_persisted_value_defaults_to_dump() {
        let storage = Storage::in_memory();
        storage.put(ACTIVE_TAB_KEY, &"archive");
        assert_eq!(TabController::open(&storage).active(), Tab::Dump);
    }

    #[test]
    fn switch_persists_and_survives_reopen() {
        let storage = Storage::in_memory();
        let mut tabs = TabController::open(&storage);
        assert!(tabs.switch_tab(&storage, Tab::Completed));
        assert_eq!(TabController::open(&storage).active(), Tab::Completed);
    }

    #[test]
    fn switch_to_current_is_a_noop() {
        let storage = Storage::in_memory();
        let mut tabs = TabController::open(&storage);
        assert!(!tabs.switch_tab(&storage, Tab::Dump));
    }

    #[test]
    fn tab_parses_and_displays_lowercase() {
        assert_eq!(Tab::from_str("TODO").unwrap(), Tab::Todo);
        assert_eq!(Tab::Completed.to_string(), "completed");
        assert!(Tab::from_str("inbox").is_err());
    }
}
