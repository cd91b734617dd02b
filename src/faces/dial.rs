//! Ring-style timer faces.
//!
//! A dial draws the remaining time as a ring of segments around the clock
//! readout. The ring is full when the countdown starts and drains clockwise
//! from 12 o'clock: segment `i` of `n` stays lit while
//! `i < lit_segments(progress, n)`.

use super::keys::TimerKeyMap;
use crate::progress::{lit_segments, Ring};
use crate::timer::{self, Phase};
use crate::{help, textinput, timefmt, Component};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;
use std::f64::consts::PI;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Minute presets offered by the beautiful and braun faces, keys `1`-`4`.
pub const PRESETS: [u64; 4] = [10, 15, 20, 30];

/// Range the visual face accepts for a typed duration, in seconds.
pub const VISUAL_RANGE: (u64, u64) = (1, 3600);

/// Segments around the ring.
pub const SEGMENTS: usize = 40;

const RADIUS_X: f64 = 10.0;
const RADIUS_Y: f64 = 5.0;
// One spare cell on every side for braun's tick marks.
const MARGIN: usize = 1;

/// Which dial to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialKind {
    /// Thin ring, underlined preset.
    Beautiful,
    /// Heavy ring with cardinal ticks, inverted preset.
    Braun,
    /// Thick ring with a typed duration.
    Visual,
}

impl DialKind {
    /// Seconds the face starts with.
    pub fn default_duration(self) -> u64 {
        match self {
            DialKind::Beautiful | DialKind::Braun => 600,
            DialKind::Visual => 60,
        }
    }

    fn radius(self) -> f64 {
        match self {
            DialKind::Beautiful | DialKind::Braun => 48.0,
            DialKind::Visual => 40.0,
        }
    }

    fn glyphs(self) -> (char, char) {
        match self {
            DialKind::Beautiful => ('•', '·'),
            DialKind::Braun => ('█', '░'),
            DialKind::Visual => ('●', '○'),
        }
    }

    fn has_presets(self) -> bool {
        self != DialKind::Visual
    }
}

/// Dial styles.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Segments still lit.
    pub lit: Style,
    /// Drained segments.
    pub dim: Style,
    /// Braun's tick marks.
    pub tick: Style,
    /// Clock readout.
    pub time: Style,
    /// Phase caption under the readout.
    pub caption: Style,
    /// Inactive presets.
    pub preset: Style,
    /// The preset matching the current duration.
    pub active_preset: Style,
}

impl Styles {
    fn for_kind(kind: DialKind) -> Self {
        let muted = AdaptiveColor {
            Light: "#A49FA5",
            Dark: "#777777",
        };
        let (lit, active_preset) = match kind {
            DialKind::Beautiful => (
                Style::new().foreground(Color::from("#38BDF8")),
                Style::new().underline(true).bold(true),
            ),
            DialKind::Braun => (
                Style::new().foreground(Color::from("#F97316")),
                Style::new().reverse(true),
            ),
            DialKind::Visual => (
                Style::new().foreground(Color::from("#A78BFA")),
                Style::new().bold(true),
            ),
        };
        Self {
            lit,
            dim: Style::new().foreground(Color::from("#3F3F46")),
            tick: Style::new().foreground(muted.clone()),
            time: Style::new().bold(true),
            caption: Style::new().foreground(muted.clone()),
            preset: Style::new().foreground(muted),
            active_preset,
        }
    }
}

/// A ring timer face.
#[derive(Debug, Clone)]
pub struct Dial {
    /// Styles.
    pub styles: Styles,
    /// Key bindings.
    pub keys: TimerKeyMap,
    /// Help footer.
    pub help: help::Model,
    kind: DialKind,
    timer: timer::Model,
    ring: Ring,
    editor: Option<textinput::Model>,
}

/// The beautiful face: 10 minutes, presets, thin ring.
pub fn beautiful() -> Dial {
    Dial::new(DialKind::Beautiful)
}

/// The braun face: 10 minutes, presets, heavy ring with ticks.
pub fn braun() -> Dial {
    Dial::new(DialKind::Braun)
}

/// The visual face: one minute, typed duration, thick ring.
pub fn visual() -> Dial {
    Dial::new(DialKind::Visual)
}

impl Dial {
    /// A dial ticking once per second.
    pub fn new(kind: DialKind) -> Self {
        Self::with_timer(kind, timer::new(kind.default_duration()))
    }

    /// A dial whose ticks are `interval` apart.
    pub fn with_interval(kind: DialKind, interval: Duration) -> Self {
        Self::with_timer(
            kind,
            timer::new_with_interval(kind.default_duration(), interval),
        )
    }

    fn with_timer(kind: DialKind, timer: timer::Model) -> Self {
        let mut dial = Self {
            styles: Styles::for_kind(kind),
            keys: TimerKeyMap::default(),
            help: help::Model::new(),
            kind,
            timer,
            ring: Ring::new(kind.radius()),
            editor: None,
        };
        dial.sync_keys();
        dial
    }

    /// Which dial this is.
    pub fn kind(&self) -> DialKind {
        self.kind
    }

    /// The countdown.
    pub fn timer(&self) -> &timer::Model {
        &self.timer
    }

    /// Whether the duration field is open.
    pub fn editing(&self) -> bool {
        self.editor.is_some()
    }

    /// The minute preset matching the current duration, if any.
    pub fn active_preset(&self) -> Option<u64> {
        if !self.kind.has_presets() {
            return None;
        }
        PRESETS
            .iter()
            .copied()
            .find(|m| m * 60 == self.timer.duration())
    }

    /// Number of lit ring segments.
    pub fn lit(&self) -> usize {
        let stroke = self.ring.visible_length(self.timer.progress());
        lit_segments(stroke / self.ring.circumference(), SEGMENTS)
    }

    fn sync_keys(&mut self) {
        let editing = self.editor.is_some();
        let visual = self.kind == DialKind::Visual;
        self.keys.presets.set_enabled(self.kind.has_presets());
        self.keys.edit.set_enabled(visual && !editing);
        self.keys.increase.set_enabled(visual && !editing);
        self.keys.decrease.set_enabled(visual && !editing);
        self.keys.apply.set_enabled(editing);
        self.keys.cancel.set_enabled(editing);
        self.keys.toggle.set_enabled(!editing);
        self.keys.reset.set_enabled(!editing);
        self.keys.quit.set_enabled(!editing);
    }

    /// Opens the duration field pre-filled with the current duration.
    pub fn open_editor(&mut self) {
        if self.kind != DialKind::Visual {
            return;
        }
        let mut input = textinput::new();
        input.prompt = "seconds: ".to_string();
        input.set_filter(|c| c.is_ascii_digit());
        input.set_char_limit(4);
        input.set_value(&self.timer.duration().to_string());
        input.focus();
        self.editor = Some(input);
        self.sync_keys();
    }

    fn close_editor(&mut self) {
        self.editor = None;
        self.sync_keys();
    }

    /// Applies the typed duration and closes the field. Empty input leaves
    /// the duration unchanged.
    pub fn apply_editor(&mut self) -> Option<Cmd> {
        let typed = self.editor.as_ref()?.value();
        self.close_editor();
        match typed.trim().parse::<u64>() {
            Ok(secs) => self.set_visual_duration(secs),
            Err(_) => None,
        }
    }

    fn set_visual_duration(&mut self, secs: u64) -> Option<Cmd> {
        let (lo, hi) = VISUAL_RANGE;
        self.timer.set_duration(secs.clamp(lo, hi))
    }

    /// Handles keys and this face's ticks.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key, &msg);
        }
        self.timer.update(msg)
    }

    fn handle_key(&mut self, key: &KeyMsg, msg: &Msg) -> Option<Cmd> {
        if self.keys.force_quit.matches(key) {
            return Some(bubbletea_rs::quit());
        }
        if self.editor.is_some() {
            if self.keys.apply.matches(key) {
                return self.apply_editor();
            }
            if self.keys.cancel.matches(key) {
                self.close_editor();
                return None;
            }
            return self.editor.as_mut().and_then(|e| e.update(msg));
        }

        if self.keys.quit.matches(key) {
            Some(bubbletea_rs::quit())
        } else if self.keys.toggle.matches(key) {
            self.timer.toggle()
        } else if self.keys.reset.matches(key) {
            self.timer.reset()
        } else if self.keys.presets.matches(key) {
            let KeyCode::Char(c) = key.key else {
                return None;
            };
            let index = c.to_digit(10)? as usize;
            let minutes = *PRESETS.get(index.checked_sub(1)?)?;
            self.timer.set_preset_minutes(minutes)
        } else if self.keys.edit.matches(key) {
            self.open_editor();
            None
        } else if self.keys.increase.matches(key) {
            self.set_visual_duration(self.timer.duration() + 1)
        } else if self.keys.decrease.matches(key) {
            self.set_visual_duration(self.timer.duration().saturating_sub(1))
        } else {
            None
        }
    }

    fn caption(&self) -> &'static str {
        match self.timer.phase() {
            Phase::Idle => "ready",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Expired => "time's up",
        }
    }

    /// The ring with the readout in the middle, one string per row.
    pub fn ring_lines(&self) -> Vec<String> {
        let rows = 2 * (RADIUS_Y as usize + MARGIN) + 1;
        let cols = 2 * (RADIUS_X as usize + MARGIN) + 1;
        let mut grid: Vec<Vec<Option<String>>> = vec![vec![None; cols]; rows];
        let mut lit_cells = vec![vec![false; cols]; rows];

        let (lit_glyph, dim_glyph) = self.kind.glyphs();
        let lit = self.lit();
        for i in 0..SEGMENTS {
            let theta = 2.0 * PI * i as f64 / SEGMENTS as f64;
            let col = (RADIUS_X + RADIUS_X * theta.sin()).round() as usize + MARGIN;
            let row = (RADIUS_Y - RADIUS_Y * theta.cos()).round() as usize + MARGIN;
            // Two segments can land in one cell; lit wins.
            if lit_cells[row][col] {
                continue;
            }
            let on = i < lit;
            lit_cells[row][col] = on;
            grid[row][col] = Some(if on {
                self.styles.lit.render(&lit_glyph.to_string())
            } else {
                self.styles.dim.render(&dim_glyph.to_string())
            });
        }

        if self.kind == DialKind::Braun {
            let (cy, cx) = (rows / 2, cols / 2);
            for (r, c, g) in [
                (0, cx, "│"),
                (rows - 1, cx, "│"),
                (cy, 0, "─"),
                (cy, cols - 1, "─"),
            ] {
                grid[r][c] = Some(self.styles.tick.render(g));
            }
        }

        let cy = rows / 2;
        let readout = timefmt::format_time(self.timer.time_left());
        overlay(&mut grid[cy], &readout, &self.styles.time);
        overlay(&mut grid[cy + 1], self.caption(), &self.styles.caption);

        grid.into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.unwrap_or_else(|| " ".to_string()))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn presets_line(&self) -> String {
        let active = self.active_preset();
        PRESETS
            .iter()
            .map(|&m| {
                let label = format!("{}m", m);
                if Some(m) == active {
                    self.styles.active_preset.render(&label)
                } else {
                    self.styles.preset.render(&label)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Renders the face and its help footer.
    pub fn view(&self) -> String {
        let mut lines = self.ring_lines();
        lines.push(String::new());
        if self.kind.has_presets() {
            lines.push(self.presets_line());
        } else if let Some(editor) = &self.editor {
            lines.push(editor.view());
        } else {
            lines.push(
                self.styles
                    .caption
                    .render(&format!("duration {}s", self.timer.duration())),
            );
        }
        lines.push(String::new());
        lines.push(self.help.view(&self.keys));
        lines.join("\n")
    }
}

/// Writes `text` centered into a row of cells.
fn overlay(row: &mut [Option<String>], text: &str, style: &Style) {
    let start = (row.len() / 2).saturating_sub(text.width() / 2);
    for (i, ch) in text.chars().enumerate() {
        if let Some(cell) = row.get_mut(start + i) {
            *cell = Some(style.render(&ch.to_string()));
        }
    }
}

impl BubbleTeaModel for Dial {
    fn init() -> (Self, Option<Cmd>) {
        (beautiful(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
