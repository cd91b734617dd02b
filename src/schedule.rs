//! One-shot delayed ticks that can be cancelled.
//!
//! Widgets never run a free-standing repeating timer. Instead each widget owns
//! a [`Scheduler`] and asks it for a single tick command whenever it wants to
//! be woken up again. Every `arm()` and every `cancel()` bumps the scheduler's
//! tag; a [`TickMsg`] only counts if it carries the current tag and the
//! owner's id. A tick scheduled before the governing state changed therefore
//! arrives stale and is dropped, and a widget that is gone simply never looks
//! at its messages again.
//!
//! ```rust
//! use xotools_widgets::schedule::Scheduler;
//! use std::time::Duration;
//!
//! let mut s = Scheduler::new(Duration::from_secs(1));
//! let first = s.arm();
//! let stale = s.pending();
//! let _second = s.arm();
//! assert!(!s.accepts(&stale));
//! assert!(s.accepts(&s.pending()));
//! # drop(first);
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Returns a process-wide unique id, starting at 1.
pub fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Delivered when an armed tick fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickMsg {
    /// Id of the scheduler that armed the tick.
    pub id: i64,
    tag: i64,
}

/// A cancellable one-shot delayed task.
///
/// A clone gets a fresh id, so it never accepts ticks armed by the original.
#[derive(Debug)]
pub struct Scheduler {
    id: i64,
    tag: i64,
    delay: Duration,
}

impl Scheduler {
    /// Creates a scheduler with a fresh id and nothing armed.
    pub fn new(delay: Duration) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            delay,
        }
    }

    /// The id stamped on this scheduler's ticks.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The delay between arming and firing.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Invalidates any pending tick and returns a command that fires a new
    /// one after `delay`.
    pub fn arm(&mut self) -> Cmd {
        self.tag += 1;
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.delay, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Invalidates any pending tick.
    pub fn cancel(&mut self) {
        self.tag += 1;
    }

    /// Whether `msg` is the tick most recently armed by this scheduler.
    pub fn accepts(&self, msg: &TickMsg) -> bool {
        msg.id == self.id && msg.tag == self.tag
    }

    /// The message the currently armed tick will deliver. Lets callers that
    /// drive widgets by hand (tests, replay) fire a tick without waiting.
    pub fn pending(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }
}

impl Clone for Scheduler {
    fn clone(&self) -> Self {
        Self {
            id: next_id(),
            tag: self.tag,
            delay: self.delay,
        }
    }
}
