//! To-do lists: the list engine, persistence, and three terminal faces.
//!
//! The engine ([`TodoList`]) owns the ordering rules; a [`Policy`] decides
//! whether new items go on top or at the bottom and whether completed items
//! sink. The faces ([`Model`]) add an input, a cursor and styling on top.
//!
//! ## Engine
//!
//! ```rust
//! use xotools_widgets::todo::{Policy, TodoList};
//!
//! let mut list = TodoList::new(Policy::APPEND);
//! assert!(list.add("   ").is_none());
//! let id = list.add("buy milk").map(|t| t.id.clone()).unwrap();
//! list.add("call mom");
//! list.toggle(&id);
//! assert_eq!(list.completed_count(), 1);
//! assert_eq!(list.progress_percent(), 50.0);
//! ```
//!
//! ## Faces
//!
//! ```rust
//! use xotools_widgets::todo::{self, MemoryStorage, Variant};
//!
//! let dynamic = todo::new(Variant::Dynamic);
//! assert_eq!(dynamic.list().len(), 5);
//!
//! let simple = todo::simple(Box::new(MemoryStorage::new()));
//! assert!(simple.list().is_empty());
//! ```

mod engine;
mod item;
mod keys;
mod model;
pub mod storage;

pub use engine::{reduce, Action, Insertion, Policy, TodoList};
pub use item::TodoItem;
pub use keys::TodoKeyMap;
pub use model::{default_tasks, new, simple, Focus, Model, Styles, Variant};
pub use storage::{
    load_or_empty, FileStorage, MemoryStorage, Storage, StorageError, DEFAULT_KEY,
};

#[cfg(test)]
mod tests;
