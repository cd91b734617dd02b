use crate::key::{self, Binding, KeyMap};

/// Keys shared by the to-do faces.
#[derive(Debug, Clone)]
pub struct TodoKeyMap {
    /// Move focus between the input and the list.
    pub switch_focus: Binding,
    /// Add the typed text.
    pub add: Binding,
    /// Cursor up.
    pub up: Binding,
    /// Cursor down.
    pub down: Binding,
    /// Flip the item under the cursor.
    pub toggle: Binding,
    /// Remove the item under the cursor.
    pub remove: Binding,
    /// Show or hide completed items (dynamic face).
    pub toggle_completed: Binding,
    /// Open the island.
    pub expand: Binding,
    /// Close the island.
    pub collapse: Binding,
    /// Leave the program.
    pub quit: Binding,
}

impl Default for TodoKeyMap {
    fn default() -> Self {
        Self {
            switch_focus: key::new_binding(vec![
                key::with_keys_str(&["tab", "shift+tab"]),
                key::with_help("tab", "switch focus"),
            ]),
            add: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "add"),
            ]),
            up: key::new_binding(vec![
                key::with_keys_str(&["up", "k"]),
                key::with_help("↑/k", "up"),
            ]),
            down: key::new_binding(vec![
                key::with_keys_str(&["down", "j"]),
                key::with_help("↓/j", "down"),
            ]),
            toggle: key::new_binding(vec![
                key::with_keys_str(&["space", "enter"]),
                key::with_help("space", "toggle"),
            ]),
            remove: key::new_binding(vec![
                key::with_keys_str(&["d", "delete"]),
                key::with_help("d", "delete"),
            ]),
            toggle_completed: key::new_binding(vec![
                key::with_keys_str(&["h"]),
                key::with_help("h", "hide/show done"),
                key::with_disabled(),
            ]),
            expand: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "open"),
                key::with_disabled(),
            ]),
            collapse: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "close"),
                key::with_disabled(),
            ]),
            quit: key::new_binding(vec![
                key::with_keys_str(&["ctrl+c"]),
                key::with_help("ctrl+c", "quit"),
            ]),
        }
    }
}

impl KeyMap for TodoKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.switch_focus,
            &self.toggle,
            &self.remove,
            &self.toggle_completed,
            &self.expand,
            &self.collapse,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.up, &self.down, &self.toggle, &self.remove],
            vec![&self.switch_focus, &self.add, &self.toggle_completed],
            vec![&self.expand, &self.collapse, &self.quit],
        ]
    }
}
