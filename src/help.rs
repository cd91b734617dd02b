//! Help footer for the widgets in this crate.
//!
//! Every timer face and to-do face renders a line of key hints under its
//! body. The hints come from the widget's [`KeyMap`]: `short_help()` for the
//! single-line view, `full_help()` for the multi-column view (`show_all`).
//!
//! ```rust
//! use xotools_widgets::help::Model;
//! use xotools_widgets::key::{Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! struct Keys {
//!     toggle: Binding,
//!     reset: Binding,
//! }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.toggle, &self.reset]
//!     }
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.toggle], vec![&self.reset]]
//!     }
//! }
//!
//! let keys = Keys {
//!     toggle: Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "start"),
//!     reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
//! };
//! let help = Model::new();
//! assert!(!help.view(&keys).is_empty());
//! ```

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help footer.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the truncation marker.
    pub ellipsis: Style,
    /// Key labels in the short view.
    pub short_key: Style,
    /// Descriptions in the short view.
    pub short_desc: Style,
    /// Bullet between short view items.
    pub short_separator: Style,
    /// Key labels in the full view.
    pub full_key: Style,
    /// Descriptions in the full view.
    pub full_desc: Style,
    /// Gap between full view columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// The help footer.
#[derive(Debug, Clone)]
pub struct Model {
    /// Show the multi-column view instead of the single line.
    pub show_all: bool,
    /// Maximum width; `0` means unlimited.
    pub width: usize,
    /// Separator between short view items.
    pub short_separator: String,
    /// Separator between full view columns.
    pub full_separator: String,
    /// Marker appended when items are cut off.
    pub ellipsis: String,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help footer with default styles and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the rendered width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the short or full view depending on `show_all`.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line separated by bullets. Disabled bindings
    /// are skipped; items that do not fit in `width` are replaced by an
    /// ellipsis.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut out = String::new();
        let mut total_width = 0;
        for binding in bindings.into_iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = binding.help();
            let item = format!(
                "{}{} {}",
                sep,
                self.styles.short_key.clone().inline(true).render(&help.key),
                self.styles.short_desc.clone().inline(true).render(&help.desc)
            );
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.overflow_tail(total_width, item_width) {
                out.push_str(&tail);
                break;
            }
            total_width += item_width;
            out.push_str(&item);
        }
        out
    }

    /// Renders one column per group, rows aligned by padding.
    pub fn full_help_view(&self, groups: Vec<Vec<&Binding>>) -> String {
        let columns: Vec<Vec<String>> = groups
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .filter(|b| b.enabled())
                    .map(|b| {
                        let help = b.help();
                        format!(
                            "{} {}",
                            self.styles.full_key.clone().inline(true).render(&help.key),
                            self.styles.full_desc.clone().inline(true).render(&help.desc)
                        )
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|rows| !rows.is_empty())
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .map(|rows| {
                rows.iter()
                    .map(|r| lipgloss::width_visible(r))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let height = columns.iter().map(Vec::len).max().unwrap_or(0);
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        let mut lines = Vec::with_capacity(height);
        for row in 0..height {
            let mut line = String::new();
            for (col, rows) in columns.iter().enumerate() {
                if col > 0 {
                    line.push_str(&separator);
                }
                let cell = rows.get(row).map(String::as_str).unwrap_or("");
                line.push_str(cell);
                let pad = widths[col].saturating_sub(lipgloss::width_visible(cell));
                line.push_str(&" ".repeat(pad));
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn overflow_tail(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles.ellipsis.clone().inline(true).render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) < self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    struct Keys {
        toggle: Binding,
        reset: Binding,
        quit: Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.toggle, &self.reset, &self.quit]
        }
        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.toggle, &self.reset], vec![&self.quit]]
        }
    }

    fn keys() -> Keys {
        Keys {
            toggle: Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "start/pause"),
            reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
            quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
        }
    }

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_short_view_lists_all_bindings() {
        let view = plain(&Model::new().view(&keys()));
        assert_eq!(view, "space start/pause • r reset • q quit");
    }

    #[test]
    fn test_disabled_bindings_hidden() {
        let mut k = keys();
        k.reset.set_enabled(false);
        let view = plain(&Model::new().view(&k));
        assert!(!view.contains("reset"));
        assert!(view.contains("quit"));
    }

    #[test]
    fn test_width_truncates_with_ellipsis() {
        let view = plain(&Model::new().with_width(22).view(&keys()));
        assert!(view.starts_with("space start/pause"));
        assert!(!view.contains("quit"));
        assert!(view.ends_with('…'));
    }

    #[test]
    fn test_full_view_has_one_row_per_binding_in_tallest_column() {
        let mut help = Model::new();
        help.show_all = true;
        let view = plain(&help.view(&keys()));
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("start/pause"));
        assert!(lines[0].contains("quit"));
        assert!(lines[1].contains("reset"));
    }
}
