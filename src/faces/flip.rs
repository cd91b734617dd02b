//! Flip-clock countdown: four digit reels reading `MM:SS`.

use super::keys::TimerKeyMap;
use crate::schedule::TickMsg;
use crate::{help, reel, timefmt, timer};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// Where the countdown starts: 15:42.
pub const INITIAL_SECS: u64 = 15 * 60 + 42;

/// Caption above the reels.
pub const CAPTION: &str = "Timer ends in:";

/// Flip-clock styles.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Caption line.
    pub caption: Style,
    /// The colon between minutes and seconds.
    pub colon: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            caption: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            colon: Style::new().bold(true),
        }
    }
}

/// The flip-clock face.
#[derive(Debug, Clone)]
pub struct Countdown {
    /// Styles.
    pub styles: Styles,
    /// Key bindings.
    pub keys: TimerKeyMap,
    /// Help footer.
    pub help: help::Model,
    timer: timer::Model,
    reels: [reel::Model; 4],
    initial: u64,
}

/// A stopped countdown at 15:42. Call [`Countdown::start`] to run it.
pub fn countdown() -> Countdown {
    Countdown::with_timer(timer::new(INITIAL_SECS))
}

impl Countdown {
    /// A countdown from `secs` whose ticks are `interval` apart.
    pub fn with_interval(secs: u64, interval: Duration) -> Self {
        Self::with_timer(timer::new_with_interval(secs, interval))
    }

    fn with_timer(timer: timer::Model) -> Self {
        let d = timefmt::digits(timer.time_left());
        let mut keys = TimerKeyMap::default();
        keys.reset = keys.reset.with_help("r", "restart");
        Self {
            styles: Styles::default(),
            keys,
            help: help::Model::new(),
            initial: timer.duration(),
            timer,
            reels: [reel::new(d[0]), reel::new(d[1]), reel::new(d[2]), reel::new(d[3])],
        }
    }

    /// The countdown.
    pub fn timer(&self) -> &timer::Model {
        &self.timer
    }

    /// The four reels, minutes tens first.
    pub fn reels(&self) -> &[reel::Model; 4] {
        &self.reels
    }

    /// Starts counting.
    pub fn start(&mut self) -> Option<Cmd> {
        self.timer.start()
    }

    /// Back to the initial time, running.
    pub fn restart(&mut self) -> Option<Cmd> {
        let reset = self.timer.reset();
        let start = self.timer.start();
        let settle = self.sync_reels();
        join(reset.into_iter().chain(start).chain(settle).collect())
    }

    fn sync_reels(&mut self) -> Option<Cmd> {
        let digits = timefmt::digits(self.timer.time_left());
        let cmds: Vec<Cmd> = self
            .reels
            .iter_mut()
            .zip(digits)
            .filter_map(|(r, d)| r.set_value(d))
            .collect();
        join(cmds)
    }

    /// Handles keys, the countdown's ticks and the reels' settle messages.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if self.keys.quit.matches(key) {
                return Some(bubbletea_rs::quit());
            }
            if self.keys.toggle.matches(key) {
                return self.timer.toggle();
            }
            if self.keys.reset.matches(key) {
                return self.restart();
            }
            return None;
        }

        let tick = msg.downcast_ref::<TickMsg>()?;
        if tick.id == self.timer.id() {
            let next = self.timer.update(msg);
            let settle = self.sync_reels();
            return join(next.into_iter().chain(settle).collect());
        }
        for r in self.reels.iter_mut() {
            r.update(&msg);
        }
        None
    }

    /// Caption, the reels side by side, and the help footer.
    pub fn view(&self) -> String {
        let columns: Vec<Vec<String>> = self.reels.iter().map(|r| r.view_lines()).collect();
        let colon_row = 2;
        let mut lines = vec![self.styles.caption.render(CAPTION), String::new()];
        for row in 0..5 {
            let cell = |i: usize| columns[i].get(row).cloned().unwrap_or_default();
            let colon = if row == colon_row {
                self.styles.colon.render(":")
            } else {
                " ".to_string()
            };
            lines.push(format!(
                "{} {}  {}  {} {}",
                cell(0),
                cell(1),
                colon,
                cell(2),
                cell(3)
            ));
        }
        lines.push(String::new());
        lines.push(self.help.view(&self.keys));
        lines.join("\n")
    }

    /// Initial time this face restarts from.
    pub fn initial(&self) -> u64 {
        self.initial
    }
}

fn join(mut cmds: Vec<Cmd>) -> Option<Cmd> {
    match cmds.len() {
        0 => None,
        1 => cmds.pop(),
        _ => Some(bubbletea_rs::batch(cmds)),
    }
}

impl BubbleTeaModel for Countdown {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = countdown();
        let cmd = model.start();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(c: char) -> Msg {
        Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        })
    }

    fn values(c: &Countdown) -> Vec<u8> {
        c.reels().iter().map(|r| r.value()).collect()
    }

    fn tick(c: &mut Countdown) -> Option<Cmd> {
        let msg = c.timer().pending_tick();
        c.update(Box::new(msg))
    }

    #[test]
    fn test_starts_at_15_42_and_runs_on_init() {
        let (c, cmd) = <Countdown as BubbleTeaModel>::init();
        assert!(cmd.is_some());
        assert!(c.timer().running());
        assert_eq!(values(&c), vec![1, 5, 4, 2]);
        let view = strip_ansi_escapes::strip_str(c.view());
        assert!(view.starts_with(CAPTION));
    }

    #[test]
    fn test_tick_moves_only_changed_reels() {
        let mut c = countdown();
        let _ = c.start();
        assert!(tick(&mut c).is_some());
        assert_eq!(c.timer().time_left(), INITIAL_SECS - 1);
        assert_eq!(values(&c), vec![1, 5, 4, 1]);
        assert!(c.reels()[3].animating());
        assert!(!c.reels()[2].animating());
    }

    #[test]
    fn test_reel_settle_routed_to_reels() {
        let mut c = countdown();
        let _ = c.start();
        let _ = tick(&mut c);
        let settle = c.reels()[3].pending_settle();
        assert!(c.update(Box::new(settle)).is_none());
        assert!(!c.reels()[3].animating());
        assert_eq!(c.timer().time_left(), INITIAL_SECS - 1);
    }

    #[test]
    fn test_space_pauses_and_r_restarts() {
        let mut c = countdown();
        let _ = c.start();
        let _ = tick(&mut c);
        let _ = tick(&mut c);
        c.update(key(' '));
        assert!(!c.timer().running());
        assert!(c.update(key('r')).is_some());
        assert!(c.timer().running());
        assert_eq!(c.timer().time_left(), c.initial());
        assert_eq!(values(&c), vec![1, 5, 4, 2]);
    }

    #[test]
    fn test_view_reads_mm_ss_on_center_row() {
        let c = countdown();
        let view = strip_ansi_escapes::strip_str(c.view());
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[4], "1 5  :  4 2");
        assert_eq!(lines[2], "9 3     2 0");
    }

    #[test]
    fn test_runs_to_zero() {
        let mut c = Countdown::with_interval(2, Duration::from_millis(1));
        let _ = c.start();
        while c.timer().running() {
            let _ = tick(&mut c);
        }
        assert!(c.timer().timedout());
        assert_eq!(values(&c), vec![0, 0, 0, 0]);
        assert!(tick(&mut c).is_none());
    }
}
