//! The to-do faces: state, key handling and rendering.
//!
//! A [`Model`] wraps a [`TodoList`] with an input line, a cursor and an
//! optional store. Mounted on its own it is the simple face, saved under
//! `"focusTodos"` in the user's config directory.

use super::engine::{Policy, TodoList};
use super::item::TodoItem;
use super::keys::TodoKeyMap;
use super::storage::{self, FileStorage, Storage, DEFAULT_KEY};
use crate::{help, progress, textinput, Component};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;

/// Which to-do face to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Plain list, new items at the bottom, saved after every change.
    Simple,
    /// Card with a progress bar, new items on top, completed items sink.
    Dynamic,
    /// Collapsed pill that opens into a list.
    Island,
}

impl Variant {
    /// The ordering policy this face uses.
    pub fn policy(self) -> Policy {
        match self {
            Variant::Simple | Variant::Island => Policy::APPEND,
            Variant::Dynamic => Policy::PREPEND_SINKING,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Variant::Simple => "Todos",
            Variant::Dynamic => "Tasks",
            Variant::Island => "To-do List",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Variant::Simple => "Add todo...",
            Variant::Dynamic => "Add a new task...",
            Variant::Island => "Add a new todo",
        }
    }
}

/// Where key presses go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The new-item field.
    Input,
    /// The item list.
    List,
}

/// The tasks the dynamic face starts with.
pub fn default_tasks() -> Vec<TodoItem> {
    vec![
        TodoItem::with_id("1", "Conduct user interviews for new dashboard design", false),
        TodoItem::with_id("2", "Create wireframes for mobile navigation", false),
        TodoItem::with_id("3", "Review accessibility guidelines for forms", false),
        TodoItem::with_id("4", "Complete usability testing report", true),
        TodoItem::with_id("5", "Update user persona documentation", true),
    ]
}

/// Styles for the to-do faces.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Heading.
    pub title: Style,
    /// Incomplete item text.
    pub item: Style,
    /// Completed item text.
    pub done: Style,
    /// Row under the cursor.
    pub selected: Style,
    /// "No todos" line.
    pub empty: Style,
    /// Counts and captions.
    pub muted: Style,
    /// Collapsed island.
    pub pill: Style,
    /// Remaining count in the pill.
    pub badge: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let muted = AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        };
        Self {
            title: Style::new().bold(true),
            item: Style::new(),
            done: Style::new().strikethrough(true).foreground(muted.clone()),
            selected: Style::new().foreground(AdaptiveColor {
                Light: "#0284C7",
                Dark: "#38BDF8",
            }),
            empty: Style::new().italic(true).foreground(muted.clone()),
            muted: Style::new().foreground(muted),
            pill: Style::new()
                .background(Color::from("#111111"))
                .foreground(Color::from("#E5E7EB"))
                .padding(0, 1, 0, 1),
            badge: Style::new().bold(true).foreground(Color::from("#38BDF8")),
        }
    }
}

/// A to-do face.
///
/// Owns its list, an input for new items, and an optional store. When a
/// store is attached the list is read from it once and written back after
/// every change.
pub struct Model {
    /// Styles.
    pub styles: Styles,
    /// Key bindings.
    pub keys: TodoKeyMap,
    /// Help footer.
    pub help: help::Model,
    variant: Variant,
    list: TodoList,
    input: textinput::Model,
    bar: progress::Model,
    cursor: usize,
    focus: Focus,
    show_completed: bool,
    expanded: bool,
    store: Option<Box<dyn Storage>>,
    store_key: String,
}

/// Creates a face with no store. The dynamic face is seeded with
/// [`default_tasks`]; the others start empty.
pub fn new(variant: Variant) -> Model {
    let items = match variant {
        Variant::Dynamic => default_tasks(),
        Variant::Simple | Variant::Island => Vec::new(),
    };
    let mut input = textinput::new();
    input.set_placeholder(variant.placeholder());

    let mut m = Model {
        styles: Styles::default(),
        keys: TodoKeyMap::default(),
        help: help::Model::new(),
        variant,
        list: TodoList::from_items(variant.policy(), items),
        input,
        bar: progress::new(&[
            progress::with_width(32),
            progress::without_percentage(),
            progress::with_solid_fill("#15803D".to_string()),
        ]),
        cursor: 0,
        focus: Focus::Input,
        show_completed: true,
        expanded: variant != Variant::Island,
        store: None,
        store_key: DEFAULT_KEY.to_string(),
    };
    if m.expanded {
        m.input.focus();
    }
    m.sync_keys();
    m
}

/// The simple face, loaded from and saved to `store` under `"focusTodos"`.
pub fn simple(store: Box<dyn Storage>) -> Model {
    new(Variant::Simple).with_storage(store, DEFAULT_KEY)
}

impl Model {
    /// Attaches a store and replaces the list with what it holds under `key`.
    /// A missing or unreadable entry yields an empty list.
    pub fn with_storage(mut self, store: Box<dyn Storage>, key: &str) -> Self {
        let items = storage::load_or_empty(store.as_ref(), key);
        tracing::debug!(key, count = items.len(), "loaded todos");
        self.list = TodoList::from_items(self.variant.policy(), items);
        self.store = Some(store);
        self.store_key = key.to_string();
        self.cursor = 0;
        self
    }

    /// Whether changes are written to a store.
    pub fn persisted(&self) -> bool {
        self.store.is_some()
    }

    /// Key the list is stored under.
    pub fn store_key(&self) -> &str {
        &self.store_key
    }

    /// The face.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The list.
    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Where keys go.
    pub fn focus_target(&self) -> Focus {
        self.focus
    }

    /// Index of the selected row among the visible rows.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether completed items are listed (dynamic face).
    pub fn show_completed(&self) -> bool {
        self.show_completed
    }

    /// Whether the island is open. Always true for the other faces.
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// The new-item field.
    pub fn input(&self) -> &textinput::Model {
        &self.input
    }

    /// Rows in display order.
    pub fn visible(&self) -> Vec<&TodoItem> {
        match self.variant {
            Variant::Simple => self.list.items().iter().collect(),
            Variant::Dynamic => {
                let mut rows = self.list.active();
                if self.show_completed {
                    rows.extend(self.list.completed());
                }
                rows
            }
            Variant::Island => self.list.sorted(),
        }
    }

    /// Adds `text`. Returns false for blank text.
    pub fn add(&mut self, text: &str) -> bool {
        let added = self.list.add(text).is_some();
        if added {
            self.persist();
        }
        added
    }

    /// Flips the item with `id`.
    pub fn toggle(&mut self, id: &str) -> bool {
        let changed = self.list.toggle(id);
        if changed {
            self.persist();
            self.clamp_cursor();
        }
        changed
    }

    /// Removes the item with `id`.
    pub fn remove(&mut self, id: &str) -> bool {
        let changed = self.list.remove(id);
        if changed {
            self.persist();
            self.clamp_cursor();
        }
        changed
    }

    /// Opens the island and focuses its input.
    pub fn expand(&mut self) {
        if self.variant != Variant::Island || self.expanded {
            return;
        }
        self.expanded = true;
        self.set_focus(Focus::Input);
        self.sync_keys();
    }

    /// Closes the island.
    pub fn collapse(&mut self) {
        if self.variant != Variant::Island || !self.expanded {
            return;
        }
        self.expanded = false;
        self.input.blur();
        self.sync_keys();
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::Input => {
                self.input.focus();
            }
            Focus::List => self.input.blur(),
        }
    }

    fn persist(&mut self) {
        if let Some(store) = self.store.as_deref_mut() {
            storage::save_or_log(store, &self.store_key, self.list.items());
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn selected_id(&self) -> Option<String> {
        self.visible().get(self.cursor).map(|t| t.id.clone())
    }

    fn sync_keys(&mut self) {
        let island = self.variant == Variant::Island;
        self.keys
            .toggle_completed
            .set_enabled(self.variant == Variant::Dynamic);
        self.keys.expand.set_enabled(island && !self.expanded);
        self.keys.collapse.set_enabled(island && self.expanded);
        let open = self.expanded;
        for b in [
            &mut self.keys.switch_focus,
            &mut self.keys.add,
            &mut self.keys.up,
            &mut self.keys.down,
            &mut self.keys.toggle,
            &mut self.keys.remove,
        ] {
            b.set_enabled(open);
        }
    }

    /// Handles key presses.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keys.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        if self.keys.expand.matches(key_msg) {
            self.expand();
            return None;
        }
        if !self.expanded {
            return None;
        }
        if self.keys.collapse.matches(key_msg) {
            self.collapse();
            return None;
        }
        if self.keys.switch_focus.matches(key_msg) {
            let next = match self.focus {
                Focus::Input => Focus::List,
                Focus::List => Focus::Input,
            };
            self.set_focus(next);
            return None;
        }

        match self.focus {
            Focus::Input => {
                if self.keys.add.matches(key_msg) {
                    let text = self.input.value();
                    if self.add(&text) {
                        self.input.reset();
                    }
                    return None;
                }
                self.input.update(&msg)
            }
            Focus::List => {
                if self.keys.up.matches(key_msg) {
                    self.cursor = self.cursor.saturating_sub(1);
                } else if self.keys.down.matches(key_msg) {
                    if self.cursor + 1 < self.visible().len() {
                        self.cursor += 1;
                    }
                } else if self.keys.toggle.matches(key_msg) {
                    if let Some(id) = self.selected_id() {
                        self.toggle(&id);
                    }
                } else if self.keys.remove.matches(key_msg) {
                    if let Some(id) = self.selected_id() {
                        self.remove(&id);
                    }
                } else if self.keys.toggle_completed.matches(key_msg) {
                    self.show_completed = !self.show_completed;
                    self.clamp_cursor();
                }
                None
            }
        }
    }

    fn row(&self, index: usize, item: &TodoItem) -> String {
        let selected = self.focus == Focus::List && index == self.cursor;
        let marker = if selected { "> " } else { "  " };
        let check = if item.completed { "[x]" } else { "[ ]" };
        let text = if item.completed {
            self.styles.done.render(&item.text)
        } else {
            self.styles.item.render(&item.text)
        };
        let lead = format!("{}{} ", marker, check);
        let lead = if selected {
            self.styles.selected.render(&lead)
        } else {
            lead
        };
        format!("{}{}", lead, text)
    }

    fn rows_view(&self, rows: &[&TodoItem], offset: usize) -> Vec<String> {
        rows.iter()
            .enumerate()
            .map(|(i, t)| self.row(offset + i, t))
            .collect()
    }

    fn simple_view(&self) -> Vec<String> {
        let mut lines = vec![
            self.styles.title.render(self.variant.title()),
            self.input.view(),
            String::new(),
        ];
        let rows = self.visible();
        if rows.is_empty() {
            lines.push(self.styles.empty.render("No todos yet"));
        } else {
            lines.extend(self.rows_view(&rows, 0));
        }
        lines
    }

    fn dynamic_view(&self) -> Vec<String> {
        let eye = if self.show_completed {
            "showing done"
        } else {
            "hiding done"
        };
        let progress = self.list.progress_percent() / 100.0;
        let mut lines = vec![
            format!(
                "{}  {}",
                self.styles.title.render(self.variant.title()),
                self.styles.muted.render(eye)
            ),
            self.bar.view_as(progress),
            self.styles.muted.render(&format!(
                "{} of {} tasks completed",
                self.list.completed_count(),
                self.list.len()
            )),
            self.input.view(),
            String::new(),
        ];

        let active = self.list.active();
        lines.extend(self.rows_view(&active, 0));
        if self.show_completed {
            let completed = self.list.completed();
            if !completed.is_empty() && !active.is_empty() {
                lines.push(self.styles.muted.render(&"─".repeat(32)));
            }
            lines.extend(self.rows_view(&completed, active.len()));
        }
        if self.list.is_empty() {
            lines.push(self.styles.empty.render("No tasks yet"));
        }
        lines
    }

    fn pill_view(&self) -> String {
        let remaining = self.list.remaining_count();
        let mut text = self.variant.title().to_string();
        if remaining > 0 {
            text.push_str(&format!(
                "  {} left",
                self.styles.badge.render(&remaining.to_string())
            ));
        }
        let done = self.list.completed_count();
        if done > 0 {
            text.push_str(&format!("  {} done", done));
        }
        self.styles.pill.render(&text)
    }

    fn island_view(&self) -> Vec<String> {
        let mut lines = vec![self.pill_view()];
        if !self.expanded {
            return lines;
        }
        lines.push(self.input.view());
        lines.push(String::new());
        let rows = self.visible();
        if rows.is_empty() {
            lines.push(self.styles.empty.render("No todos yet"));
        } else {
            lines.extend(self.rows_view(&rows, 0));
        }
        lines
    }

    /// Renders the face and its help footer.
    pub fn view(&self) -> String {
        let mut lines = match self.variant {
            Variant::Simple => self.simple_view(),
            Variant::Dynamic => self.dynamic_view(),
            Variant::Island => self.island_view(),
        };
        lines.push(String::new());
        lines.push(self.help.view(&self.keys));
        lines.join("\n")
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (simple(Box::new(FileStorage::in_config_dir())), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
