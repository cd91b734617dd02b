//! Single-line text input.
//!
//! Used for the new to-do field and the visual timer's duration entry. The
//! input only reacts to keys while focused; the owning widget decides what
//! Enter means.
//!
//! ```rust
//! use xotools_widgets::textinput::new;
//! use xotools_widgets::Component;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut input = new();
//! input.set_placeholder("Add todo...");
//! input.focus();
//! input.update(&(Box::new(KeyMsg { key: KeyCode::Char('h'), modifiers: KeyModifiers::NONE }) as bubbletea_rs::Msg));
//! input.update(&(Box::new(KeyMsg { key: KeyCode::Char('i'), modifiers: KeyModifiers::NONE }) as bubbletea_rs::Msg));
//! assert_eq!(input.value(), "hi");
//! ```

use crate::key::{new_binding, with_keys_str, Binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Editing keys.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Cursor one character left.
    pub character_backward: Binding,
    /// Cursor one character right.
    pub character_forward: Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: Binding,
    /// Delete everything before the cursor.
    pub delete_before_cursor: Binding,
    /// Cursor to start of line.
    pub line_start: Binding,
    /// Cursor to end of line.
    pub line_end: Binding,
}

/// Default editing keys.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
    }
}

/// Predicate deciding whether a typed character is accepted.
pub type CharFilter = fn(char) -> bool;

/// The text input.
#[derive(Debug, Clone)]
pub struct Model {
    /// Shown before the text.
    pub prompt: String,
    /// Style of the prompt.
    pub prompt_style: Style,
    /// Style of the typed text.
    pub text_style: Style,
    /// Shown when empty.
    pub placeholder: String,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Style of the cursor cell.
    pub cursor_style: Style,
    /// Maximum number of characters, `0` for no limit.
    pub char_limit: usize,
    /// Editing keys.
    pub key_map: KeyMap,
    filter: Option<CharFilter>,
    value: Vec<char>,
    pos: usize,
    focus: bool,
}

/// Creates an empty, blurred input with a `"> "` prompt.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        char_limit: 0,
        key_map: default_key_map(),
        filter: None,
        value: Vec::new(),
        pos: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Replaces the text and moves the cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        let mut chars: Vec<char> = s.chars().collect();
        if self.char_limit > 0 {
            chars.truncate(self.char_limit);
        }
        self.value = chars;
        self.pos = self.value.len();
    }

    /// The current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Sets the placeholder.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the character limit.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
    }

    /// Only accept characters for which `filter` returns true.
    pub fn set_filter(&mut self, filter: CharFilter) {
        self.filter = Some(filter);
    }

    /// Clears the text.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Handles editing keys while focused.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        let km = &self.key_map;

        if km.delete_character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if km.delete_character_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if km.delete_before_cursor.matches(key_msg) {
            self.value.drain(..self.pos);
            self.pos = 0;
        } else if km.character_backward.matches(key_msg) {
            self.pos = self.pos.saturating_sub(1);
        } else if km.character_forward.matches(key_msg) {
            self.pos = (self.pos + 1).min(self.value.len());
        } else if km.line_start.matches(key_msg) {
            self.pos = 0;
        } else if km.line_end.matches(key_msg) {
            self.pos = self.value.len();
        } else if let KeyCode::Char(ch) = key_msg.key {
            let plain = key_msg
                .modifiers
                .difference(KeyModifiers::SHIFT)
                .is_empty();
            if plain {
                self.insert(ch);
            }
        }
        None
    }

    fn insert(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        if let Some(filter) = self.filter {
            if !filter(ch) {
                return;
            }
        }
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            return;
        }
        self.value.insert(self.pos, ch);
        self.pos += 1;
    }

    /// Renders prompt, text and cursor.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);
        if self.value.is_empty() {
            if self.placeholder.is_empty() {
                return format!("{}{}", prompt, self.cursor_cell(' '));
            }
            let mut chars = self.placeholder.chars();
            let first = chars.next().unwrap_or(' ');
            let rest: String = chars.collect();
            let head = if self.focus {
                self.cursor_cell(first)
            } else {
                self.placeholder_style.render(&first.to_string())
            };
            return format!("{}{}{}", prompt, head, self.placeholder_style.render(&rest));
        }

        let before: String = self.value[..self.pos].iter().collect();
        let mut out = format!("{}{}", prompt, self.text_style.render(&before));
        match self.value.get(self.pos) {
            Some(&under) => {
                out.push_str(&self.cursor_cell(under));
                let after: String = self.value[self.pos + 1..].iter().collect();
                out.push_str(&self.text_style.render(&after));
            }
            None => out.push_str(&self.cursor_cell(' ')),
        }
        out
    }

    fn cursor_cell(&self, ch: char) -> String {
        if self.focus {
            self.cursor_style.render(&ch.to_string())
        } else {
            self.text_style.render(&ch.to_string())
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn typed(s: &str) -> Model {
        let mut input = new();
        input.focus();
        for c in s.chars() {
            input.update(&key(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn test_blurred_input_ignores_keys() {
        let mut input = new();
        input.update(&key(KeyCode::Char('x')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = typed("milk");
        assert_eq!(input.value(), "milk");
        input.update(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "mil");
        assert_eq!(input.position(), 3);
    }

    #[test]
    fn test_cursor_movement_and_insert() {
        let mut input = typed("ac");
        input.update(&key(KeyCode::Left));
        input.update(&key(KeyCode::Char('b')));
        assert_eq!(input.value(), "abc");
        input.update(&key(KeyCode::Home));
        input.update(&key(KeyCode::Delete));
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn test_filter_and_limit() {
        let mut input = new();
        input.set_filter(|c| c.is_ascii_digit());
        input.set_char_limit(4);
        input.focus();
        for c in "12a345".chars() {
            input.update(&key(KeyCode::Char(c)));
        }
        assert_eq!(input.value(), "1234");
    }

    #[test]
    fn test_control_chords_not_inserted() {
        let mut input = typed("a");
        input.update(&(Box::new(KeyMsg {
            key: KeyCode::Char('x'),
            modifiers: KeyModifiers::CONTROL,
        }) as Msg));
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_view_shows_placeholder_when_empty() {
        let mut input = new();
        input.set_placeholder("Add todo...");
        let view = strip_ansi_escapes::strip_str(input.view());
        assert_eq!(view, "> Add todo...");
    }

    #[test]
    fn test_reset_clears() {
        let mut input = typed("abc");
        input.reset();
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
    }
}
