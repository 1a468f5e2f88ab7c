//! Application context: one struct owning the storage adapter, the three
//! lists, and the tab state, constructed once and passed explicitly to the
//! CLI command handlers. There are no ambient globals.

use crate::lists::{CompletedList, DumpList, TodoList};
use crate::storage::Storage;
use crate::tabs::TabController;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything a command handler needs, wired from one data directory.
#[derive(Debug)]
pub struct App {
    pub storage: Storage,
    pub dump: DumpList,
    pub todo: TodoList,
    pub completed: CompletedList,
    pub tabs: TabController,
}

impl App {
    /// Open the application rooted at `data_dir`. Storage unavailability is
    /// absorbed by the adapter (volatile fallback), so this never fails.
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        let storage = Storage::open(data_dir);
        if !storage.is_persistent() {
            info!("running on volatile storage; changes will not be saved");
        }
        Self::wire(storage)
    }

    /// Fully volatile app, for tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::wire(Storage::in_memory())
    }

    fn wire(storage: Storage) -> Self {
        let dump = DumpList::open(&storage);
        let todo = TodoList::open(&storage);
        let completed = CompletedList::open(&storage);
        let tabs = TabController::open(&storage);
        Self {
            storage,
            dump,
            todo,
            completed,
            tabs,
        }
    }

    /// Delete every persisted key and return to the initial state: three
    /// empty lists, dump tab active.
    pub fn clear_all(&mut self) {
        self.storage.clear_all();
        self.dump.reset();
        self.todo.reset();
        self.completed.reset();
        self.tabs.reset();
        info!("cleared all lists");
    }
}

/// Resolve the data directory, highest precedence first: explicit flag,
/// `TRIAD_DATA_DIR`, then the platform data dir. A hidden directory under
/// the current working directory is the last resort when the platform
/// reports no data dir.
#[must_use]
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Some(dir) = env::var_os("TRIAD_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_dir().map_or_else(|| PathBuf::from(".triad"), |base| base.join("triad"))
}

#[cfg(test)]
mod tests {
    use super::{App, resolve_data_dir};
    use crate::model::Priority;
    use crate::tabs::Tab;
    use std::path::PathBuf;

    #[test]
    fn clear_all_resets_lists_and_tab() {
        let mut app = App::in_memory();
        app.dump.add(&app.storage, "note");
        app.todo.add(&app.storage, "task", Priority::High);
        app.tabs.switch_tab(&app.storage, Tab::Todo);

        app.clear_all();

        assert!(app.dump.is_empty());
        assert!(app.todo.is_empty());
        assert!(app.completed.is_empty());
        assert_eq!(app.tabs.active(), Tab::Dump);
        assert!(app.storage.load::<serde_json::Value>("dumpItems").is_empty());
    }

    #[test]
    fn open_reloads_persisted_lists() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut app = App::open(dir.path());
            app.dump.add(&app.storage, "survives");
        }
        let app = App::open(dir.path());
        assert_eq!(app.dump.len(), 1);
    }

    #[test]
    fn explicit_flag_wins_data_dir_resolution() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/elsewhere")));
        assert_eq!(dir, PathBuf::from("/tmp/elsewhere"));
    }
}
