//! Countdown engine shared by every timer face.
//!
//! The engine is split in two layers:
//!
//! - [`State`] and [`transition`]: a plain value and a pure function
//!   `(state, action) -> state`. Every rule of the countdown lives here, so it
//!   can be tested without a runtime.
//! - [`Model`]: the bubbletea-rs component. It owns a `State` and a
//!   [`Scheduler`], applies actions, and re-arms exactly one one-second tick
//!   after every change while the countdown is running.
//!
//! # Basic Usage
//!
//! ```rust
//! use xotools_widgets::timer::{new, Phase};
//!
//! let mut timer = new(600);
//! assert_eq!(timer.phase(), Phase::Idle);
//! assert_eq!(timer.view(), "10:00");
//!
//! let _tick = timer.start();
//! assert!(timer.running());
//!
//! timer.set_preset_minutes(15);
//! assert_eq!(timer.duration(), 900);
//! assert!(!timer.running());
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use xotools_widgets::timer::{self, TimeoutMsg};
//!
//! struct App {
//!     timer: timer::Model,
//!     done: bool,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = timer::new(60);
//!         let cmd = timer.start();
//!         (Self { timer, done: false }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(timeout) = msg.downcast_ref::<TimeoutMsg>() {
//!             if timeout.id == self.timer.id() {
//!                 self.done = true;
//!             }
//!         }
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```

use crate::progress;
use crate::schedule::{Scheduler, TickMsg};
use crate::timefmt;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::time::Duration;

/// Shortest duration the engine accepts, in seconds.
pub const MIN_DURATION: u64 = 1;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Countdown values.
///
/// `0 <= time_left <= duration` always holds, `duration` is at least
/// [`MIN_DURATION`], and `running` is false whenever `time_left` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    duration: u64,
    time_left: u64,
    running: bool,
}

impl State {
    /// An idle countdown of `duration` seconds. Durations below
    /// [`MIN_DURATION`] are raised to it.
    pub fn new(duration: u64) -> Self {
        let duration = duration.max(MIN_DURATION);
        Self {
            duration,
            time_left: duration,
            running: false,
        }
    }

    /// Total seconds of the current run.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Seconds remaining.
    pub fn time_left(&self) -> u64 {
        self.time_left
    }

    /// Whether ticks advance the countdown.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Remaining fraction `time_left / duration`, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        progress::fraction(self.time_left, self.duration)
    }

    /// Where the countdown is in its lifecycle.
    pub fn phase(&self) -> Phase {
        if self.time_left == 0 {
            Phase::Expired
        } else if self.running {
            Phase::Running
        } else if self.time_left == self.duration {
            Phase::Idle
        } else {
            Phase::Paused
        }
    }
}

/// Lifecycle of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Stopped with the full duration left.
    Idle,
    /// Counting down.
    Running,
    /// Stopped part way.
    Paused,
    /// Reached zero. Only `Reset` or `SetDuration` leave this phase.
    Expired,
}

/// Something that can happen to a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Begin or resume counting.
    Start,
    /// Stop counting, keeping the remaining time.
    Pause,
    /// Start if stopped, pause if running.
    Toggle,
    /// Stop and restore the full duration.
    Reset,
    /// Replace the duration (seconds), restoring it in full and stopping.
    SetDuration(u64),
    /// One interval elapsed.
    Tick,
}

/// Applies `action` to `state`.
///
/// After every action a countdown with no time left is forced to stop, so
/// starting an expired countdown leaves it expired.
pub fn transition(state: State, action: Action) -> State {
    let mut next = state;
    match action {
        Action::Start => next.running = true,
        Action::Pause => next.running = false,
        Action::Toggle => next.running = !state.running,
        Action::Reset => {
            next.running = false;
            next.time_left = next.duration;
        }
        Action::SetDuration(secs) => next = State::new(secs),
        Action::Tick => {
            if next.running && next.time_left > 0 {
                next.time_left -= 1;
            }
        }
    }
    if next.time_left == 0 {
        next.running = false;
    }
    next
}

/// Sent once when a countdown reaches zero.
#[derive(Debug, Clone)]
pub struct TimeoutMsg {
    /// Id of the timer that expired.
    pub id: i64,
}

/// Countdown component.
#[derive(Debug, Clone)]
pub struct Model {
    state: State,
    scheduler: Scheduler,
}

/// Creates an idle countdown of `duration` seconds ticking once per second.
pub fn new(duration: u64) -> Model {
    new_with_interval(duration, DEFAULT_INTERVAL)
}

/// Creates an idle countdown whose ticks are `interval` apart. Each tick still
/// removes one second; a shorter interval only speeds the countdown up, which
/// is what tests and demos want.
pub fn new_with_interval(duration: u64, interval: Duration) -> Model {
    Model {
        state: State::new(duration),
        scheduler: Scheduler::new(interval),
    }
}

impl Model {
    /// Unique id, matched against tick and timeout messages.
    pub fn id(&self) -> i64 {
        self.scheduler.id()
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.scheduler.delay()
    }

    /// Current values.
    pub fn state(&self) -> State {
        self.state
    }

    /// Total seconds of the current run.
    pub fn duration(&self) -> u64 {
        self.state.duration
    }

    /// Seconds remaining.
    pub fn time_left(&self) -> u64 {
        self.state.time_left
    }

    /// Whether the countdown is advancing.
    pub fn running(&self) -> bool {
        self.state.running
    }

    /// Whether the countdown reached zero.
    pub fn timedout(&self) -> bool {
        self.state.time_left == 0
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Remaining fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    /// Starts or resumes. Returns the first tick when the countdown runs.
    pub fn start(&mut self) -> Option<Cmd> {
        self.apply(Action::Start)
    }

    /// Pauses. Idempotent.
    pub fn pause(&mut self) -> Option<Cmd> {
        self.apply(Action::Pause)
    }

    /// Starts when stopped, pauses when running.
    pub fn toggle(&mut self) -> Option<Cmd> {
        self.apply(Action::Toggle)
    }

    /// Stops and restores the full duration.
    pub fn reset(&mut self) -> Option<Cmd> {
        self.apply(Action::Reset)
    }

    /// Replaces the duration in seconds. Progress is always forfeited.
    pub fn set_duration(&mut self, secs: u64) -> Option<Cmd> {
        tracing::debug!(timer = self.id(), secs, "timer duration changed");
        self.apply(Action::SetDuration(secs))
    }

    /// Replaces the duration with a whole number of minutes.
    pub fn set_preset_minutes(&mut self, minutes: u64) -> Option<Cmd> {
        self.set_duration(minutes.saturating_mul(60))
    }

    /// Applies an action, cancelling the pending tick and arming a new one if
    /// the countdown is still running afterwards.
    pub fn apply(&mut self, action: Action) -> Option<Cmd> {
        let before = self.state;
        self.state = transition(before, action);
        if self.state == before && action != Action::Tick {
            return None;
        }

        self.scheduler.cancel();
        let mut cmds = Vec::with_capacity(2);
        if self.state.running {
            cmds.push(self.scheduler.arm());
        }
        if before.time_left > 0 && self.state.time_left == 0 {
            tracing::debug!(timer = self.id(), "timer expired");
            let id = self.id();
            cmds.push(bubbletea_tick(Duration::from_nanos(1), move |_| {
                Box::new(TimeoutMsg { id }) as Msg
            }));
        }
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(bubbletea_rs::batch(cmds)),
        }
    }

    /// The tick message the currently armed tick will deliver.
    pub fn pending_tick(&self) -> TickMsg {
        self.scheduler.pending()
    }

    /// Handles this timer's tick messages. Ticks from other timers, and ticks
    /// made stale by a later start, pause, reset or duration change, are
    /// ignored.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;
        if !self.scheduler.accepts(tick) || !self.state.running {
            return None;
        }
        self.apply(Action::Tick)
    }

    /// Remaining time as `MM:SS`.
    pub fn view(&self) -> String {
        timefmt::format_time(self.state.time_left)
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Model::default(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    /// A one-minute countdown.
    fn default() -> Self {
        new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(m: &mut Model) -> Option<Cmd> {
        let msg = m.pending_tick();
        m.update(Box::new(msg))
    }

    fn assert_invariant(s: State) {
        assert!(s.time_left() <= s.duration());
        assert!(s.duration() >= MIN_DURATION);
        if s.time_left() == 0 {
            assert!(!s.running());
        }
    }

    #[test]
    fn test_new_is_idle() {
        let timer = new(600);
        assert_eq!(timer.duration(), 600);
        assert_eq!(timer.time_left(), 600);
        assert!(!timer.running());
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn test_invariant_holds_for_every_action() {
        let actions = [
            Action::Start,
            Action::Tick,
            Action::Tick,
            Action::Pause,
            Action::Tick,
            Action::Toggle,
            Action::Tick,
            Action::Tick,
            Action::Tick,
            Action::Start,
            Action::Reset,
            Action::SetDuration(0),
            Action::Start,
            Action::Tick,
            Action::Tick,
            Action::SetDuration(2),
            Action::Toggle,
        ];
        let mut s = State::new(3);
        assert_invariant(s);
        for a in actions {
            s = transition(s, a);
            assert_invariant(s);
        }
    }

    #[test]
    fn test_reset_restores_from_any_state() {
        let starts = [
            State::new(10),
            transition(State::new(10), Action::Start),
            transition(transition(State::new(10), Action::Start), Action::Tick),
            transition(
                transition(transition(State::new(1), Action::Start), Action::Tick),
                Action::Pause,
            ),
        ];
        for s in starts {
            let r = transition(s, Action::Reset);
            assert_eq!(r.time_left(), r.duration());
            assert!(!r.running());
        }
    }

    #[test]
    fn test_three_ticks_expire_on_the_last() {
        let mut s = transition(State::new(3), Action::Start);
        s = transition(s, Action::Tick);
        assert_eq!(s.time_left(), 2);
        assert!(s.running());
        s = transition(s, Action::Tick);
        assert_eq!(s.time_left(), 1);
        assert!(s.running());
        s = transition(s, Action::Tick);
        assert_eq!(s.time_left(), 0);
        assert!(!s.running());
        assert_eq!(s.phase(), Phase::Expired);
    }

    #[test]
    fn test_tick_ignored_when_paused() {
        let s = transition(State::new(5), Action::Tick);
        assert_eq!(s.time_left(), 5);
    }

    #[test]
    fn test_start_at_zero_stays_expired() {
        let mut s = transition(State::new(1), Action::Start);
        s = transition(s, Action::Tick);
        assert_eq!(s.phase(), Phase::Expired);
        let s = transition(s, Action::Start);
        assert!(!s.running());
        assert_eq!(s.phase(), Phase::Expired);
    }

    #[test]
    fn test_set_duration_forfeits_progress() {
        let mut s = transition(State::new(600), Action::Start);
        s = transition(s, Action::Tick);
        s = transition(s, Action::SetDuration(900));
        assert_eq!(s.duration(), 900);
        assert_eq!(s.time_left(), 900);
        assert!(!s.running());
    }

    #[test]
    fn test_non_positive_duration_clamped() {
        let s = State::new(0);
        assert_eq!(s.duration(), MIN_DURATION);
        assert!(s.progress().is_finite());
    }

    #[test]
    fn test_phases() {
        let s = State::new(10);
        assert_eq!(s.phase(), Phase::Idle);
        let s = transition(s, Action::Start);
        assert_eq!(s.phase(), Phase::Running);
        let s = transition(transition(s, Action::Tick), Action::Pause);
        assert_eq!(s.phase(), Phase::Paused);
    }

    #[test]
    fn test_model_start_arms_tick() {
        let mut timer = new(5);
        assert!(timer.start().is_some());
        assert!(timer.running());
    }

    #[test]
    fn test_model_pause_arms_nothing() {
        let mut timer = new(5);
        let _ = timer.start();
        assert!(timer.pause().is_none());
        assert!(timer.pause().is_none());
        assert!(!timer.running());
    }

    #[test]
    fn test_model_tick_advances_and_rearms() {
        let mut timer = new(3);
        let _ = timer.start();
        assert!(tick(&mut timer).is_some());
        assert_eq!(timer.time_left(), 2);
        assert_eq!(timer.view(), "00:02");
    }

    #[test]
    fn test_stale_tick_after_pause_is_ignored() {
        let mut timer = new(5);
        let _ = timer.start();
        let stale = timer.pending_tick();
        let _ = timer.pause();
        assert!(timer.update(Box::new(stale)).is_none());
        assert_eq!(timer.time_left(), 5);
    }

    #[test]
    fn test_stale_tick_after_restart_is_ignored() {
        let mut timer = new(5);
        let _ = timer.start();
        let stale = timer.pending_tick();
        let _ = timer.pause();
        let _ = timer.start();
        assert!(timer.update(Box::new(stale)).is_none());
        assert_eq!(timer.time_left(), 5);
        assert!(tick(&mut timer).is_some());
        assert_eq!(timer.time_left(), 4);
    }

    #[test]
    fn test_other_timers_ticks_ignored() {
        let mut a = new(5);
        let mut b = new(5);
        let _ = a.start();
        let _ = b.start();
        assert!(a.update(Box::new(b.pending_tick())).is_none());
        assert_eq!(a.time_left(), 5);
    }

    #[test]
    fn test_cloned_timer_ticks_independently() {
        let mut a = new(600);
        let _ = a.start();
        let mut b = a.clone();
        assert_ne!(a.id(), b.id());
        assert!(tick(&mut a).is_some());
        assert!(b.update(Box::new(a.pending_tick())).is_none());
        assert_eq!(a.time_left(), 599);
        assert_eq!(b.time_left(), 600);
    }

    #[test]
    fn test_interval_kept() {
        assert_eq!(new(5).interval(), DEFAULT_INTERVAL);
        let timer = new_with_interval(5, Duration::from_millis(40));
        assert_eq!(timer.interval(), Duration::from_millis(40));
    }

    #[test]
    fn test_model_runs_to_expiry() {
        let mut timer = new(2);
        let _ = timer.start();
        let _ = tick(&mut timer);
        assert!(timer.running());
        // Final tick still returns a command: the timeout notification.
        assert!(tick(&mut timer).is_some());
        assert!(timer.timedout());
        assert!(!timer.running());
        assert!(tick(&mut timer).is_none());
    }

    #[test]
    fn test_reset_after_expiry() {
        let mut timer = new(1);
        let _ = timer.start();
        let _ = tick(&mut timer);
        assert_eq!(timer.phase(), Phase::Expired);
        let _ = timer.reset();
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.view(), "00:01");
    }

    #[test]
    fn test_presets() {
        let mut timer = new(600);
        let _ = timer.start();
        let _ = timer.set_preset_minutes(20);
        assert_eq!(timer.duration(), 1200);
        assert_eq!(timer.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_real_ticks_reach_timeout() {
        let mut timer = new_with_interval(2, Duration::from_millis(2));
        let mut cmd = timer.start();
        let mut timed_out = false;
        // Drive the loop the way the runtime would, one message at a time.
        while let Some(c) = cmd.take() {
            let Some(msg) = c.await else { break };
            if let Some(t) = msg.downcast_ref::<TimeoutMsg>() {
                assert_eq!(t.id, timer.id());
                timed_out = true;
                break;
            }
            cmd = timer.update(msg);
        }
        assert!(timed_out);
        assert_eq!(timer.time_left(), 0);
    }
}
