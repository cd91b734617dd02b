#![warn(missing_docs)]

//! # xotools-widgets
//!
//! Focus widgets for the terminal: countdown timer faces and to-do lists,
//! built on [bubbletea-rs](https://github.com/joshka/bubbletea-rs) and styled
//! with lipgloss.
//!
//! ## Overview
//!
//! Every widget follows the Elm Architecture: it owns its state, handles
//! messages in `update()` and renders a `String` in `view()`. Widgets never
//! start background timers. When a widget wants to be woken up it returns a
//! one-shot tick command from a [`schedule::Scheduler`]; any later change to
//! the state that armed it makes the tick stale, and stale ticks are ignored.
//!
//! ## Layers
//!
//! - **Engines**: [`timer`] (countdown state and transitions) and [`todo`]
//!   (list operations, derived counts, persistence).
//! - **Helpers**: [`timefmt`] (`MM:SS`), [`progress`] (fractions, rings, bars),
//!   [`reel`] (odometer digits), [`schedule`] (cancellable ticks).
//! - **Faces**: [`faces`] (beautiful, braun, visual, countdown) and
//!   [`todo::Model`] (simple, dynamic, island).
//! - **Input**: [`key`], [`help`] and [`textinput`].
//!
//! ## Focus Management
//!
//! ```rust
//! use xotools_widgets::prelude::*;
//! use bubbletea_rs::Cmd;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd: Option<Cmd> = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut input = textinput_new();
//! handle_focus(&mut input);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use xotools_widgets::faces::{self, Dial};
//!
//! struct App {
//!     dial: Dial,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { dial: faces::braun() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.dial.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.dial.view()
//!     }
//! }
//! ```
//!
//! ## Component Overview
//!
//! | Component | Description |
//! |-----------|-------------|
//! | `Dial` | Ring countdown (beautiful, braun, visual) |
//! | `Countdown` | Flip-clock countdown with digit reels |
//! | `TodoModel` | To-do list (simple, dynamic, island) |
//! | `Timer` | Bare countdown engine, `MM:SS` view |
//! | `Progress` | Horizontal progress bar |
//! | `TextInput` | Single-line text input |
//! | `HelpModel` | Key binding footer |

pub mod faces;
pub mod help;
pub mod key;
pub mod progress;
pub mod reel;
pub mod schedule;
pub mod textinput;
pub mod timefmt;
pub mod timer;
pub mod todo;

use bubbletea_rs::Cmd;

/// Core trait for components that take keyboard focus.
///
/// - `focus()` sets the focused state and may return a command.
/// - `blur()` clears it.
/// - `focused()` reports it.
///
/// ```rust
/// use xotools_widgets::prelude::*;
///
/// let mut input = textinput_new();
/// assert!(!input.focused());
///
/// input.focus();
/// assert!(input.focused());
///
/// input.blur();
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use faces::{Countdown, Dial, DialKind, TimerKeyMap};
pub use help::Model as HelpModel;
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use progress::Model as Progress;
pub use reel::Model as Reel;
pub use schedule::{Scheduler, TickMsg};
pub use textinput::{
    default_key_map as textinput_default_key_map, new as textinput_new, KeyMap as TextInputKeyMap,
    Model as TextInput,
};
pub use timer::{
    new as timer_new, new_with_interval as timer_new_with_interval, Model as Timer,
    TimeoutMsg as TimerTimeoutMsg,
};
pub use todo::{Model as TodoModel, TodoItem, TodoList, Variant as TodoVariant};

/// Prelude module for convenient imports.
///
/// ```rust
/// use xotools_widgets::prelude::*;
///
/// let timer = timer_new(90);
/// assert_eq!(timer.view(), "01:30");
/// ```
pub mod prelude {
    pub use crate::faces::{
        beautiful, braun, countdown, visual, Countdown, Dial, DialKind, TimerKeyMap,
    };
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::progress::Model as Progress;
    pub use crate::textinput::{new as textinput_new, Model as TextInput};
    pub use crate::timer::{
        new as timer_new, new_with_interval as timer_new_with_interval, Model as Timer,
        TimeoutMsg as TimerTimeoutMsg,
    };
    pub use crate::todo::{
        FileStorage, MemoryStorage, Model as TodoModel, Storage, TodoItem, TodoList,
        Variant as TodoVariant,
    };
    pub use crate::Component;
}
