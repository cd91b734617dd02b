//! Odometer-style digit reel.
//!
//! A reel shows one digit with its two neighbours above and below, the way a
//! mechanical counter shows the wheel around the current number. When the
//! digit changes the reel is marked as animating and settles after a short
//! delay.
//!
//! ```rust
//! use xotools_widgets::reel::{self, reel_digits};
//!
//! assert_eq!(reel_digits(0), [8, 9, 0, 1, 2]);
//! assert_eq!(reel_digits(9), [7, 8, 9, 0, 1]);
//!
//! let mut r = reel::new(5);
//! let settle = r.set_value(4);
//! assert!(settle.is_some());
//! assert!(r.animating());
//! ```

use crate::schedule::{Scheduler, TickMsg};
use bubbletea_rs::{Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// Delay between a digit change and the reel settling on it.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// How many neighbours are shown on each side of the current digit.
const REACH: u8 = 2;

/// Returns the five-digit window `[d-2, d-1, d, d+1, d+2]`, wrapping mod 10.
pub fn reel_digits(digit: u8) -> [u8; 5] {
    let d = digit % 10;
    let mut out = [0u8; 5];
    for (i, slot) in out.iter_mut().enumerate() {
        // (d + 10 - REACH + i) stays non-negative for every i.
        *slot = (d + 10 - REACH + i as u8) % 10;
    }
    out
}

/// Styles for the reel window.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The settled center digit.
    pub current: Style,
    /// The center digit while the reel is still moving.
    pub moving: Style,
    /// Neighbouring digits.
    pub neighbour: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            current: Style::new().bold(true).foreground(Color::from("#FFFFFF")),
            moving: Style::new().foreground(Color::from("#BBBBBB")),
            neighbour: Style::new().foreground(Color::from("#4B5563")),
        }
    }
}

/// One digit reel.
#[derive(Debug, Clone)]
pub struct Model {
    /// Styles.
    pub styles: Styles,
    value: u8,
    settled: u8,
    animating: bool,
    scheduler: Scheduler,
}

/// Creates a settled reel showing `digit`.
pub fn new(digit: u8) -> Model {
    let d = digit % 10;
    Model {
        styles: Styles::default(),
        value: d,
        settled: d,
        animating: false,
        scheduler: Scheduler::new(SETTLE_DELAY),
    }
}

impl Model {
    /// The digit being shown.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The last digit the reel settled on.
    pub fn settled(&self) -> u8 {
        self.settled
    }

    /// Whether the reel is between a change and its settle.
    pub fn animating(&self) -> bool {
        self.animating
    }

    /// Moves the reel to `digit`. Returns the settle command when the digit
    /// changed; a change during an animation restarts the settle delay.
    pub fn set_value(&mut self, digit: u8) -> Option<Cmd> {
        let d = digit % 10;
        if d == self.value {
            return None;
        }
        self.value = d;
        self.animating = true;
        Some(self.scheduler.arm())
    }

    /// The settle message for the pending animation.
    pub fn pending_settle(&self) -> TickMsg {
        self.scheduler.pending()
    }

    /// Handles this reel's settle message.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;
        if self.scheduler.accepts(tick) {
            self.settled = self.value;
            self.animating = false;
            self.scheduler.cancel();
        }
        None
    }

    /// The window as five lines, top to bottom.
    pub fn view_lines(&self) -> Vec<String> {
        let center = if self.animating() {
            &self.styles.moving
        } else {
            &self.styles.current
        };
        reel_digits(self.value)
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let style = if i == REACH as usize {
                    center
                } else {
                    &self.styles.neighbour
                };
                style.render(&d.to_string())
            })
            .collect()
    }

    /// The window joined with newlines.
    pub fn view(&self) -> String {
        self.view_lines().join("\n")
    }
}
