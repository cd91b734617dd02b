//! Progress mapping and a terminal progress bar.
//!
//! The free functions turn counts into fractions that every widget shares:
//! timers use the remaining fraction to drain their rings, the dynamic to-do
//! face uses the completed fraction for its bar. Division by zero maps to
//! `0.0` rather than NaN.
//!
//! # Rings
//!
//! ```rust
//! use xotools_widgets::progress::{fraction, Ring};
//!
//! let ring = Ring::new(48.0);
//! let progress = fraction(150, 600); // a quarter of the time is left
//! assert_eq!(progress, 0.25);
//! assert!((ring.dash_offset(progress) - ring.circumference() * 0.75).abs() < 1e-9);
//! ```
//!
//! # Bars
//!
//! ```rust
//! use xotools_widgets::progress::{new, with_width, without_percentage};
//!
//! let bar = new(&[with_width(10), without_percentage()]);
//! let view = bar.view_as(0.5);
//! assert!(!view.is_empty());
//! ```

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use std::f64::consts::PI;

const DEFAULT_WIDTH: i32 = 40;

/// Returns `part / whole` clamped to `[0, 1]`, or `0.0` when `whole` is zero.
pub fn fraction(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64).clamp(0.0, 1.0)
}

/// Returns `part / whole × 100`, or `0.0` when `whole` is zero.
pub fn percent(part: u64, whole: u64) -> f64 {
    fraction(part, whole) * 100.0
}

/// Number of segments out of `segments` that are lit for `progress`.
///
/// Rounds to the nearest segment so a full ring and an empty ring are both
/// exact.
pub fn lit_segments(progress: f64, segments: usize) -> usize {
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    ((segments as f64) * p).round() as usize
}

/// A circular progress indicator of a given radius.
///
/// The stroke drains clockwise: at progress `1.0` the dash offset is zero and
/// the whole circle is drawn, at `0.0` the offset equals the circumference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Radius in the drawing's own units.
    pub radius: f64,
}

impl Ring {
    /// Creates a ring.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// `2πr`.
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Offset of the dash from a full circle: `circumference × (1 − progress)`.
    pub fn dash_offset(&self, progress: f64) -> f64 {
        self.circumference() * (1.0 - progress.clamp(0.0, 1.0))
    }

    /// Visible stroke length: `circumference − dash_offset`.
    pub fn visible_length(&self, progress: f64) -> f64 {
        self.circumference() - self.dash_offset(progress)
    }
}

/// Configuration options for the progress bar.
pub enum ProgressOption {
    /// Solid fill color.
    WithSolidFill(String),
    /// Characters for the filled and empty parts.
    WithFillCharacters(char, char),
    /// Hide the percentage text.
    WithoutPercentage,
    /// Total width in cells, including the percentage text.
    WithWidth(i32),
}

impl ProgressOption {
    fn apply(&self, m: &mut Model) {
        match self {
            ProgressOption::WithSolidFill(color) => m.full_color = color.clone(),
            ProgressOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            ProgressOption::WithoutPercentage => m.show_percentage = false,
            ProgressOption::WithWidth(width) => m.width = *width,
        }
    }
}

/// Sets the fill color.
pub fn with_solid_fill(color: String) -> ProgressOption {
    ProgressOption::WithSolidFill(color)
}

/// Sets the filled and empty characters.
pub fn with_fill_characters(full: char, empty: char) -> ProgressOption {
    ProgressOption::WithFillCharacters(full, empty)
}

/// Hides the percentage text.
pub fn without_percentage() -> ProgressOption {
    ProgressOption::WithoutPercentage
}

/// Sets the total width.
pub fn with_width(w: i32) -> ProgressOption {
    ProgressOption::WithWidth(w)
}

/// A horizontal progress bar.
#[derive(Debug, Clone)]
pub struct Model {
    /// Total width of the bar, including percentage, if shown.
    pub width: i32,
    /// Filled character.
    pub full: char,
    /// Filled color.
    pub full_color: String,
    /// Empty character.
    pub empty: char,
    /// Empty color.
    pub empty_color: String,
    /// Whether to render the trailing percentage.
    pub show_percentage: bool,
    /// Style for the percentage text.
    pub percentage_style: Style,
}

/// Creates a progress bar with the given options.
pub fn new(opts: &[ProgressOption]) -> Model {
    let mut m = Model {
        width: DEFAULT_WIDTH,
        full: '█',
        full_color: "#7571F9".to_string(),
        empty: '░',
        empty_color: "#606060".to_string(),
        show_percentage: true,
        percentage_style: Style::new(),
    };
    for opt in opts {
        opt.apply(&mut m);
    }
    m
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

impl Model {
    /// Renders the bar at `percent` (a fraction in `[0, 1]`).
    pub fn view_as(&self, percent: f64) -> String {
        let percent_view = self.percentage_view(percent);
        let percent_width = lipgloss::width_visible(&percent_view) as i32;
        format!("{}{}", self.bar_view(percent, percent_width), percent_view)
    }

    fn bar_view(&self, percent: f64, text_width: i32) -> String {
        let tw = std::cmp::max(0, self.width - text_width);
        let cells = lit_segments(percent, tw as usize) as i32;
        let fw = std::cmp::min(tw, cells);

        let full = Style::new()
            .foreground(lipgloss::Color::from(self.full_color.as_str()))
            .render(&self.full.to_string());
        let empty = Style::new()
            .foreground(lipgloss::Color::from(self.empty_color.as_str()))
            .render(&self.empty.to_string());

        let mut out = full.repeat(fw as usize);
        out.push_str(&empty.repeat((tw - fw) as usize));
        out
    }

    fn percentage_view(&self, percent: f64) -> String {
        if !self.show_percentage {
            return String::new();
        }
        let percent = percent.clamp(0.0, 1.0);
        self.percentage_style
            .render(&format!(" {:3.0}%", percent * 100.0))
    }
}
