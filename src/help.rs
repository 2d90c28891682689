//! Help line for the key bindings of a component.
//!
//! The help model renders any [`KeyMap`] either as a single line
//! (`←/h prev page • →/l next page • / search`) or as columns of
//! bindings when `show_all` is set. Disabled bindings are skipped, so the
//! help always reflects what the user can actually press.

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help views.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the ellipsis shown when the help is truncated.
    pub ellipsis: Style,
    /// Key label in the short view.
    pub short_key: Style,
    /// Description in the short view.
    pub short_desc: Style,
    /// Separator between items in the short view.
    pub short_separator: Style,
    /// Key label in the full view.
    pub full_key: Style,
    /// Description in the full view.
    pub full_desc: Style,
    /// Separator between columns in the full view.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
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

/// Help view state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Render the full, multi-column help instead of the short line.
    pub show_all: bool,
    /// Maximum width; 0 means unlimited.
    pub width: usize,
    /// Separator between short help items.
    pub short_separator: String,
    /// Separator between full help columns.
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
    /// Creates a help model with default styles and unlimited width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the short or full help for `keymap`, depending on `show_all`.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on a single line, truncating with an ellipsis.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut builder = String::new();
        let mut total_width = 0;
        for kb in bindings.iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let item = format!(
                "{}{} {}",
                sep,
                self.styles.short_key.clone().inline(true).render(&help.key),
                self.styles.short_desc.clone().inline(true).render(&help.desc)
            );
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.overflow_tail(total_width, item_width) {
                builder.push_str(&tail);
                break;
            }
            total_width += item_width;
            builder.push_str(&item);
        }
        builder
    }

    /// Renders bindings as columns, one per group.
    pub fn full_help_view(&self, groups: Vec<Vec<&Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        let mut columns = Vec::new();
        let mut total_width = 0;
        for group in groups.iter().filter(|g| g.iter().any(|b| b.enabled())) {
            let column = group
                .iter()
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
                .join("\n");
            let column_width = lipgloss::width_visible(&column);

            if let Some(tail) = self.overflow_tail(total_width, column_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }
            total_width += column_width;
            columns.push(column);
        }

        let mut parts = Vec::new();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(column.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
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
        prev: Binding,
        next: Binding,
        hidden: Binding,
    }

    impl Keys {
        fn new() -> Self {
            let mut hidden = Binding::new(vec![KeyCode::Esc]).with_help("esc", "hidden");
            hidden.set_enabled(false);
            Self {
                prev: Binding::new(vec![KeyCode::Left]).with_help("←", "prev page"),
                next: Binding::new(vec![KeyCode::Right]).with_help("→", "next page"),
                hidden,
            }
        }
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.prev, &self.hidden, &self.next]
        }

        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.prev, &self.next], vec![&self.hidden]]
        }
    }

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_short_help_skips_disabled() {
        let view = plain(&Model::new().view(&Keys::new()));
        assert_eq!(view, "← prev page • → next page");
    }

    #[test]
    fn test_short_help_truncates() {
        let view = plain(&Model::new().with_width(14).view(&Keys::new()));
        assert!(view.starts_with("← prev page"));
        assert!(!view.contains("next page"));
    }

    #[test]
    fn test_full_help_lists_enabled_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let view = plain(&help.view(&Keys::new()));
        assert!(view.contains("prev page"));
        assert!(view.contains("next page"));
        assert!(!view.contains("hidden"));
    }
}
