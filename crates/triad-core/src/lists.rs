//! The three list variants and their transitions.
//!
//! Dump holds raw notes, Todo holds prioritized tasks, Completed holds the
//! finished log. Items travel dump -> todo -> completed, and completed items
//! can be restored to todo. Every transition is a [`ListStore::move_to`]:
//! remove from the source, transform the fields, mint a fresh id in the
//! destination.

use crate::model::{
    CompletedDraft, CompletedItem, DumpDraft, DumpItem, ItemId, Priority, TodoDraft, TodoItem,
};
use crate::storage::Storage;
use crate::store::ListStore;
use chrono::Utc;
use std::cmp::Reverse;
use std::io::{self, Write};

/// Storage key for the dump list.
pub const DUMP_KEY: &str = "dumpItems";
/// Storage key for the todo list.
pub const TODO_KEY: &str = "todoItems";
/// Storage key for the completed list.
pub const COMPLETED_KEY: &str = "completedItems";

/// The unified render sink: each list variant knows how to render itself in
/// its display order to any writer.
pub trait Renderable {
    fn render(&self, w: &mut dyn Write) -> io::Result<()>;
}

/// Raw capture list. Minimal domain: text only.
#[derive(Debug)]
pub struct DumpList {
    store: ListStore<DumpItem>,
}

impl DumpList {
    #[must_use]
    pub fn open(storage: &Storage) -> Self {
        Self {
            store: ListStore::open(storage, DUMP_KEY),
        }
    }

    pub fn add(&mut self, storage: &Storage, text: impl Into<String>) -> &DumpItem {
        self.store.add(storage, DumpDraft { text: text.into() })
    }

    pub fn remove(&mut self, storage: &Storage, id: ItemId) -> bool {
        self.store.remove(storage, id)
    }

    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&DumpItem> {
        self.store.find(id)
    }

    /// Promote a note into the todo list with the default priority.
    pub fn move_to_todo<'t>(
        &mut self,
        storage: &Storage,
        id: ItemId,
        todo: &'t mut TodoList,
    ) -> Option<&'t TodoItem> {
        self.store.move_to(storage, id, &mut todo.store, |item| TodoDraft {
            text: item.text,
            priority: Priority::default(),
        })
    }

    /// Display order: newest first.
    #[must_use]
    pub fn sorted(&self) -> Vec<&DumpItem> {
        let mut items: Vec<&DumpItem> = self.store.items().iter().collect();
        items.sort_by_key(|item| Reverse(item.id));
        items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub(crate) fn reset(&mut self) {
        self.store.reset();
    }
}

impl Renderable for DumpList {
    fn render(&self, w: &mut dyn Write) -> io::Result<()> {
        for item in self.sorted() {
            writeln!(
                w,
                "{:>13}  {}  ({})",
                item.id,
                item.text,
                item.timestamp.format("%Y-%m-%d %H:%M")
            )?;
        }
        Ok(())
    }
}

/// Prioritized task list.
#[derive(Debug)]
pub struct TodoList {
    store: ListStore<TodoItem>,
}

impl TodoList {
    #[must_use]
    pub fn open(storage: &Storage) -> Self {
        Self {
            store: ListStore::open(storage, TODO_KEY),
        }
    }

    pub fn add(
        &mut self,
        storage: &Storage,
        text: impl Into<String>,
        priority: Priority,
    ) -> &TodoItem {
        self.store.add(
            storage,
            TodoDraft {
                text: text.into(),
                priority,
            },
        )
    }

    pub fn remove(&mut self, storage: &Storage, id: ItemId) -> bool {
        self.store.remove(storage, id)
    }

    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&TodoItem> {
        self.store.find(id)
    }

    /// Rewrite an item's text in place.
    pub fn edit(&mut self, storage: &Storage, id: ItemId, text: impl Into<String>) -> bool {
        let text = text.into();
        self.store.update(storage, id, |item| item.text = text)
    }

    /// Advance the item's priority one step around the fixed cycle
    /// high -> medium -> low -> high. Returns the new priority.
    pub fn cycle_priority(&mut self, storage: &Storage, id: ItemId) -> Option<Priority> {
        let next = self.find(id)?.priority.cycled();
        self.store.update(storage, id, |item| item.priority = next);
        Some(next)
    }

    /// Finish a task: move it to the completed list, capturing the completion
    /// instant and the priority it had.
    pub fn complete<'t>(
        &mut self,
        storage: &Storage,
        id: ItemId,
        completed: &'t mut CompletedList,
    ) -> Option<&'t CompletedItem> {
        self.store
            .move_to(storage, id, &mut completed.store, |item| CompletedDraft {
                text: item.text,
                original_priority: item.priority,
                completed_at: Utc::now(),
            })
    }

    /// Display order: grouped by priority (high, medium, low), newest first
    /// within each group.
    #[must_use]
    pub fn sorted(&self) -> Vec<&TodoItem> {
        let mut items: Vec<&TodoItem> = self.store.items().iter().collect();
        items.sort_by_key(|item| (item.priority.rank(), Reverse(item.id)));
        items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub(crate) fn reset(&mut self) {
        self.store.reset();
    }
}

impl Renderable for TodoList {
    fn render(&self, w: &mut dyn Write) -> io::Result<()> {
        for item in self.sorted() {
            writeln!(
                w,
                "{:>13}  [{:<6}]  {}  ({})",
                item.id,
                item.priority,
                item.text,
                item.timestamp.format("%Y-%m-%d %H:%M")
            )?;
        }
        Ok(())
    }
}

/// Finished-task log.
#[derive(Debug)]
pub struct CompletedList {
    store: ListStore<CompletedItem>,
}

impl CompletedList {
    #[must_use]
    pub fn open(storage: &Storage) -> Self {
        Self {
            store: ListStore::open(storage, COMPLETED_KEY),
        }
    }

    pub fn remove(&mut self, storage: &Storage, id: ItemId) -> bool {
        self.store.remove(storage, id)
    }

    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&CompletedItem> {
        self.store.find(id)
    }

    /// Send a finished task back to todo with the priority it had before
    /// completion. Completion metadata is dropped by the transform.
    pub fn restore_to_todo<'t>(
        &mut self,
        storage: &Storage,
        id: ItemId,
        todo: &'t mut TodoList,
    ) -> Option<&'t TodoItem> {
        self.store.move_to(storage, id, &mut todo.store, |item| TodoDraft {
            text: item.text,
            priority: item.original_priority,
        })
    }

    /// Display order: newest first.
    #[must_use]
    pub fn sorted(&self) -> Vec<&CompletedItem> {
        let mut items: Vec<&CompletedItem> = self.store.items().iter().collect();
        items.sort_by_key(|item| Reverse(item.id));
        items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub(crate) fn reset(&mut self) {
        self.store.reset();
    }
}

impl Renderable for CompletedList {
    fn render(&self, w: &mut dyn Write) -> io::Result<()> {
        for item in self.sorted() {
            writeln!(
                w,
                "{:>13}  {}  (was {}, done {})",
                item.id,
                item.text,
                item.original_priority,
                item.completed_at.format("%Y-%m-%d %H:%M")
            )?;
        }
        Ok(())
    }
}
