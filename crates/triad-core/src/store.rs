//! Generic ordered list store: the mutation-and-persistence layer shared by
//! the dump, todo, and completed lists.
//!
//! Every mutation persists the whole list under the store's key before
//! returning. Lookup misses are normal `false`/`None` returns, never errors.
//! Text validation is the caller's job; the store accepts whatever it is
//! given.

use crate::model::{ItemId, ListItem};
use crate::storage::Storage;
use chrono::Utc;
use tracing::debug;

/// Ordered collection of items for one logical list, newest first.
#[derive(Debug)]
pub struct ListStore<T: ListItem> {
    key: String,
    items: Vec<T>,
}

impl<T: ListItem> ListStore<T> {
    /// Open the store for `key`, loading whatever is persisted there.
    pub fn open(storage: &Storage, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = storage.load(&key);
        Self { key, items }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Mint an id and creation instant for `draft`, insert at the head, and
    /// persist. Returns the constructed item.
    ///
    /// Ids are the current Unix time in milliseconds, bumped past the list's
    /// current maximum so same-millisecond adds stay unique and monotonic.
    pub fn add(&mut self, storage: &Storage, draft: T::Draft) -> &T {
        let now = Utc::now();
        let id = self.mint_id(now.timestamp_millis());
        let item = T::mint(draft, id, now);
        self.items.insert(0, item);
        storage.save(&self.key, &self.items);
        debug!(key = %self.key, id, "added item");
        &self.items[0]
    }

    /// Apply `patch` to the item with `id`, persist, and return true.
    /// Returns false (not an error) when the id is absent.
    pub fn update(&mut self, storage: &Storage, id: ItemId, patch: impl FnOnce(&mut T)) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        patch(item);
        storage.save(&self.key, &self.items);
        debug!(key = %self.key, id, "updated item");
        true
    }

    /// Remove the item with `id` and persist. An absent id is an idempotent
    /// no-op returning false; the list is not re-persisted in that case.
    pub fn remove(&mut self, storage: &Storage, id: ItemId) -> bool {
        let Some(pos) = self.items.iter().position(|item| item.id() == id) else {
            return false;
        };
        self.items.remove(pos);
        storage.save(&self.key, &self.items);
        debug!(key = %self.key, id, "removed item");
        true
    }

    /// Linear lookup by id, no side effects.
    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Relocate the item with `id` into `target`: remove it here, turn it
    /// into a destination draft with `transform`, and add it there. Both
    /// stores persist; the destination mints a fresh id, so the source id
    /// never appears in the target list.
    ///
    /// Returns `None` when the source id is absent. Not transactional across
    /// the two persists; a crash between them can duplicate or lose the item.
    pub fn move_to<'t, U: ListItem>(
        &mut self,
        storage: &Storage,
        id: ItemId,
        target: &'t mut ListStore<U>,
        transform: impl FnOnce(T) -> U::Draft,
    ) -> Option<&'t U> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        let item = self.items.remove(pos);
        storage.save(&self.key, &self.items);
        debug!(key = %self.key, id, target = %target.key, "moving item");
        Some(target.add(storage, transform(item)))
    }

    /// Drop all in-memory items without touching storage. Used by clear-all,
    /// which removes the persisted keys wholesale through the adapter.
    pub(crate) fn reset(&mut self) {
        self.items.clear();
    }

    fn mint_id(&self, now_ms: i64) -> ItemId {
        self.items
            .iter()
            .map(ListItem::id)
            .max()
            .map_or(now_ms, |max| now_ms.max(max + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::ListStore;
    use crate::model::{DumpDraft, DumpItem, Priority, TodoDraft, TodoItem};
    use crate::storage::Storage;

    fn dump_store(storage: &Storage) -> ListStore<DumpItem> {
        ListStore::open(storage, "dumpItems")
    }

    fn add_text(store: &mut ListStore<DumpItem>, storage: &Storage, text: &str) -> i64 {
        store
            .add(
                storage,
                DumpDraft {
                    text: text.to_string(),
                },
            )
            .id
    }

    #[test]
    fn add_persists_and_loads_one_more_item() {
        let storage = Storage::in_memory();
        let mut store = dump_store(&storage);
        let before = storage.load::<DumpItem>("dumpItems").len();

        let id = add_text(&mut store, &storage, "buy milk");

        let loaded = storage.load::<DumpItem>("dumpItems");
        assert_eq!(loaded.len(), before + 1);
        assert!(loaded.iter().any(|item| item.id == id));
    }

    #[test]
    fn ids_are_unique_under_rapid_adds() {
        let storage = Storage::in_memory();
        let mut store = dump_store(&storage);
        let mut ids = Vec::new();
        for n in 0..50 {
            ids.push(add_text(&mut store, &storage, &format!("note {n}")));
        }
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len(), "ids must never collide");
    }

    #[test]
    fn newest_item_sits_at_the_head() {
        let storage = Storage::in_memory();
        let mut store = dump_store(&storage);
        add_text(&mut store, &storage, "first");
        let second = add_text(&mut store, &storage, "second");
        assert_eq!(store.items()[0].id, second);
    }

    #[test]
    fn update_misses_return_false() {
        let storage = Storage::in_memory();
        let mut store = dump_store(&storage);
        assert!(!store.update(&storage, 999, |item| item.text.push('!')));
    }

    #[test]
    fn update_patches_in_place() {
        let storage = Storage::in_memory();
        let mut store = dump_store(&storage);
        let id = add_text(&mut store, &storage, "draft");
        assert!(store.update(&storage, id, |item| item.text = "final".into()));
        assert_eq!(store.find(id).map(|item| item.text.as_str()), Some("final"));
        // The patched text is what got persisted.
        let loaded = storage.load::<DumpItem>("dumpItems");
        assert_eq!(loaded[0].text, "final");
    }

    #[test]
    fn remove_existing_shrinks_persisted_list() {
        let storage = Storage::in_memory();
        let mut store = dump_store(&storage);
        let id = add_text(&mut store, &storage, "to go");
        add_text(&mut store, &storage, "to stay");

        assert!(store.remove(&storage, id));
        let loaded = storage.load::<DumpItem>("dumpItems");
        assert_eq!(loaded.len(), 1);
        assert!(loaded.iter().all(|item| item.id != id));
    }

    #[test]
    fn remove_missing_is_a_noop() {
        let storage = Storage::in_memory();
        let mut store = dump_store(&storage);
        add_text(&mut store, &storage, "kept");
        assert!(!store.remove(&storage, 12345));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn move_mints_a_fresh_id_in_the_target() {
        let storage = Storage::in_memory();
        let mut dump = dump_store(&storage);
        let mut todo: ListStore<TodoItem> = ListStore::open(&storage, "todoItems");

        let source_id = add_text(&mut dump, &storage, "promote me");
        let moved = dump
            .move_to(&storage, source_id, &mut todo, |item| TodoDraft {
                text: item.text,
                priority: Priority::Medium,
            })
            .map(|item| (item.id, item.text.clone(), item.priority));

        let (new_id, text, priority) = moved.expect("source item exists");
        assert_ne!(new_id, source_id);
        assert_eq!(text, "promote me");
        assert_eq!(priority, Priority::Medium);

        assert!(dump.is_empty());
        assert!(storage.load::<DumpItem>("dumpItems").is_empty());
        let todos = storage.load::<TodoItem>("todoItems");
        assert_eq!(todos.len(), 1);
        assert!(todos.iter().all(|item| item.id != source_id));
    }

    #[test]
    fn move_missing_source_returns_none() {
        let storage = Storage::in_memory();
        let mut dump = dump_store(&storage);
        let mut todo: ListStore<TodoItem> = ListStore::open(&storage, "todoItems");
        let result = dump.move_to(&storage, 1, &mut todo, |item| TodoDraft {
            text: item.text,
            priority: Priority::Medium,
        });
        assert!(result.is_none());
        assert!(todo.is_empty());
    }
}
