//! List operations and derived values.

use super::item::TodoItem;
use crate::progress;

/// Where new items go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// At the end.
    Append,
    /// At the front.
    Prepend,
}

/// How a list orders its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Where `add` inserts.
    pub insertion: Insertion,
    /// After a toggle, move completed items behind incomplete ones.
    pub sink_completed: bool,
}

impl Policy {
    /// Append, keep order.
    pub const APPEND: Policy = Policy {
        insertion: Insertion::Append,
        sink_completed: false,
    };

    /// Prepend, sink completed items on toggle.
    pub const PREPEND_SINKING: Policy = Policy {
        insertion: Insertion::Prepend,
        sink_completed: true,
    };
}

impl Default for Policy {
    fn default() -> Self {
        Policy::APPEND
    }
}

/// A mutation of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add an item with this text.
    Add(String),
    /// Flip the item with this id.
    Toggle(String),
    /// Drop the item with this id.
    Remove(String),
}

/// An ordered to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
    policy: Policy,
}

impl TodoList {
    /// An empty list.
    pub fn new(policy: Policy) -> Self {
        Self {
            items: Vec::new(),
            policy,
        }
    }

    /// A list holding `items` in the given order.
    pub fn from_items(policy: Policy, items: Vec<TodoItem>) -> Self {
        Self { items, policy }
    }

    /// Items in list order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// The ordering policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks an item up by id.
    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Adds an incomplete item. Blank text (after trimming) is rejected and
    /// leaves the list unchanged. The stored text is not trimmed.
    pub fn add(&mut self, text: &str) -> Option<&TodoItem> {
        if text.trim().is_empty() {
            return None;
        }
        let item = TodoItem::new(text);
        match self.policy.insertion {
            Insertion::Append => {
                self.items.push(item);
                self.items.last()
            }
            Insertion::Prepend => {
                self.items.insert(0, item);
                self.items.first()
            }
        }
    }

    /// Flips the item with `id`. Returns false when no item matches.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        item.completed = !item.completed;
        if self.policy.sink_completed {
            // Vec::sort_by_key is stable.
            self.items.sort_by_key(|t| t.completed);
        }
        true
    }

    /// Removes the item with `id`. Returns false when no item matches.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Applies an action in place. Returns whether the list changed.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::Add(text) => self.add(text).is_some(),
            Action::Toggle(id) => self.toggle(id),
            Action::Remove(id) => self.remove(id),
        }
    }

    /// Number of completed items.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    /// Number of incomplete items.
    pub fn remaining_count(&self) -> usize {
        self.items.len() - self.completed_count()
    }

    /// Completed share in `[0, 100]`; `0` for an empty list.
    pub fn progress_percent(&self) -> f64 {
        progress::percent(self.completed_count() as u64, self.items.len() as u64)
    }

    /// Incomplete items, in list order.
    pub fn active(&self) -> Vec<&TodoItem> {
        self.items.iter().filter(|t| !t.completed).collect()
    }

    /// Completed items, in list order.
    pub fn completed(&self) -> Vec<&TodoItem> {
        self.items.iter().filter(|t| t.completed).collect()
    }

    /// Incomplete items first, then completed, each in list order. The stored
    /// order is not touched.
    pub fn sorted(&self) -> Vec<&TodoItem> {
        let mut out = self.active();
        out.extend(self.completed());
        out
    }
}

/// Pure form of [`TodoList::apply`].
pub fn reduce(list: &TodoList, action: &Action) -> TodoList {
    let mut next = list.clone();
    next.apply(action);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(policy: Policy) -> TodoList {
        TodoList::from_items(
            policy,
            vec![
                TodoItem::with_id("a", "first", false),
                TodoItem::with_id("b", "second", false),
                TodoItem::with_id("c", "third", true),
            ],
        )
    }

    fn ids(items: &[TodoItem]) -> Vec<&str> {
        items.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_blank_text_rejected() {
        let mut list = TodoList::new(Policy::APPEND);
        assert!(list.add("").is_none());
        assert!(list.add("   \t").is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_text_kept_untrimmed() {
        let mut list = TodoList::new(Policy::APPEND);
        let item = list.add("  buy milk ").cloned().expect("added");
        assert_eq!(item.text, "  buy milk ");
        assert!(!item.completed);
    }

    #[test]
    fn test_append_and_prepend() {
        let mut list = seeded(Policy::APPEND);
        let id = list.add("fourth").map(|t| t.id.clone()).expect("added");
        assert_eq!(list.items().last().map(|t| &t.id), Some(&id));

        let mut list = seeded(Policy::PREPEND_SINKING);
        let id = list.add("zeroth").map(|t| t.id.clone()).expect("added");
        assert_eq!(list.items()[0].id, id);
    }

    #[test]
    fn test_new_ids_are_unique() {
        let mut list = TodoList::new(Policy::APPEND);
        for _ in 0..50 {
            list.add("same text");
        }
        let mut seen: Vec<&str> = list.items().iter().map(|t| t.id.as_str()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 50);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = seeded(Policy::APPEND);
        assert!(list.toggle("b"));
        assert!(list.get("b").map(|t| t.completed).unwrap_or(false));
        assert!(!list.get("a").map(|t| t.completed).unwrap_or(true));
        assert_eq!(ids(list.items()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let original = seeded(Policy::PREPEND_SINKING);
        let mut list = original.clone();
        list.toggle("c");
        list.toggle("c");
        assert_eq!(list.get("c"), original.get("c"));
    }

    #[test]
    fn test_toggle_sinks_completed_stably() {
        let mut list = seeded(Policy::PREPEND_SINKING);
        list.toggle("a");
        assert_eq!(ids(list.items()), vec!["b", "a", "c"]);
        list.toggle("c");
        assert_eq!(ids(list.items()), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_missing_id_is_noop() {
        let mut list = seeded(Policy::APPEND);
        let before = list.clone();
        assert!(!list.toggle("zzz"));
        assert!(!list.remove("zzz"));
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove() {
        let mut list = seeded(Policy::APPEND);
        assert!(list.remove("b"));
        assert_eq!(ids(list.items()), vec!["a", "c"]);
    }

    #[test]
    fn test_counts_and_percent() {
        let list = seeded(Policy::APPEND);
        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.remaining_count(), 2);
        assert!((list.progress_percent() - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(TodoList::default().progress_percent(), 0.0);
    }

    #[test]
    fn test_sorted_puts_incomplete_first() {
        let list = TodoList::from_items(
            Policy::APPEND,
            vec![
                TodoItem::with_id("a", "x", true),
                TodoItem::with_id("b", "x", false),
                TodoItem::with_id("c", "x", true),
                TodoItem::with_id("d", "x", false),
            ],
        );
        let order: Vec<&str> = list.sorted().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
        assert_eq!(ids(list.items()), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let list = seeded(Policy::APPEND);
        let next = reduce(&list, &Action::Remove("a".into()));
        assert_eq!(list.len(), 3);
        assert_eq!(next.len(), 2);
        let next = reduce(&next, &Action::Add("new".into()));
        assert_eq!(next.len(), 3);
        let unchanged = reduce(&next, &Action::Add(" ".into()));
        assert_eq!(unchanged, next);
    }
}
