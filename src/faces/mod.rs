//! Timer faces.
//!
//! Every face wraps a [`crate::timer::Model`] and shares [`TimerKeyMap`]:
//! space starts and pauses, `r` resets, `q` quits. The faces differ only in
//! defaults and drawing.
//!
//! | Face | Default | Extras |
//! |------|---------|--------|
//! | [`beautiful`] | 10:00 | presets on `1`-`4`, thin ring |
//! | [`braun`] | 10:00 | presets on `1`-`4`, heavy ring with ticks |
//! | [`visual`] | 01:00 | `e` types a duration, `+`/`-` adjust |
//! | [`countdown`] | 15:42 | flip-clock reels, runs on start |
//!
//! ```rust
//! use xotools_widgets::faces;
//!
//! let dial = faces::beautiful();
//! assert_eq!(dial.timer().duration(), 600);
//! assert_eq!(dial.active_preset(), Some(10));
//! ```

mod dial;
mod flip;
mod keys;

pub use dial::{
    beautiful, braun, visual, Dial, DialKind, Styles as DialStyles, PRESETS, SEGMENTS, VISUAL_RANGE,
};
pub use flip::{countdown, Countdown, Styles as CountdownStyles, CAPTION, INITIAL_SECS};
pub use keys::TimerKeyMap;
