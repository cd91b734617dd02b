use crate::key::{self, Binding, KeyMap};

/// Keys shared by the timer faces. Face-specific bindings start disabled
/// and are switched on by the face that uses them.
#[derive(Debug, Clone)]
pub struct TimerKeyMap {
    /// Start or pause.
    pub toggle: Binding,
    /// Back to the full duration.
    pub reset: Binding,
    /// Pick one of the minute presets.
    pub presets: Binding,
    /// Open the duration field.
    pub edit: Binding,
    /// Apply the typed duration.
    pub apply: Binding,
    /// Discard the typed duration.
    pub cancel: Binding,
    /// One second more.
    pub increase: Binding,
    /// One second less.
    pub decrease: Binding,
    /// Leave the program.
    pub quit: Binding,
    /// Leave the program, even while typing.
    pub force_quit: Binding,
}

impl Default for TimerKeyMap {
    fn default() -> Self {
        Self {
            toggle: key::new_binding(vec![
                key::with_keys_str(&["space"]),
                key::with_help("space", "start/pause"),
            ]),
            reset: key::new_binding(vec![
                key::with_keys_str(&["r"]),
                key::with_help("r", "reset"),
            ]),
            presets: key::new_binding(vec![
                key::with_keys_str(&["1", "2", "3", "4"]),
                key::with_help("1-4", "preset"),
                key::with_disabled(),
            ]),
            edit: key::new_binding(vec![
                key::with_keys_str(&["e"]),
                key::with_help("e", "set duration"),
                key::with_disabled(),
            ]),
            apply: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "apply"),
                key::with_disabled(),
            ]),
            cancel: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "cancel"),
                key::with_disabled(),
            ]),
            increase: key::new_binding(vec![
                key::with_keys_str(&["+", "="]),
                key::with_help("+/-", "adjust"),
                key::with_disabled(),
            ]),
            decrease: key::new_binding(vec![
                key::with_keys_str(&["-"]),
                key::with_disabled(),
            ]),
            quit: key::new_binding(vec![
                key::with_keys_str(&["q", "ctrl+c"]),
                key::with_help("q", "quit"),
            ]),
            force_quit: key::new_binding(vec![key::with_keys_str(&["ctrl+c"])]),
        }
    }
}

impl KeyMap for TimerKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.toggle,
            &self.reset,
            &self.presets,
            &self.edit,
            &self.apply,
            &self.cancel,
            &self.increase,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.toggle, &self.reset, &self.presets],
            vec![&self.edit, &self.apply, &self.cancel, &self.increase],
            vec![&self.quit],
        ]
    }
}
