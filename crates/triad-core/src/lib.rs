//! triad-core library.
//!
//! Storage adapter, generic list store, the dump/todo/completed variants,
//! tab state, and the markdown export.

pub mod app;
pub mod export;
pub mod lists;
pub mod model;
pub mod storage;
pub mod store;
pub mod tabs;

/// # Conventions
///
/// - **Errors**: storage faults are absorbed and logged at the adapter;
///   lookup misses are `false`/`None`, never errors.
/// - **Logging**: use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`).
pub use app::App;
pub use lists::{CompletedList, DumpList, Renderable, TodoList};
pub use model::{CompletedItem, DumpItem, ItemId, Priority, TodoItem};
pub use storage::Storage;
pub use tabs::{Tab, TabController};
