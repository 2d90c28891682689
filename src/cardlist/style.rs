//! Layout styles of the card list.

use lipgloss_extras::prelude::*;

/// Styles for the areas around the cards.
#[derive(Debug, Clone)]
pub struct CardListStyles {
    /// Row holding the search input.
    pub search_bar: Style,
    /// Message shown when the page is empty.
    pub no_items: Style,
    /// Row holding the buttons and page indicator.
    pub pagination: Style,
    /// Page indicator text.
    pub page_indicator: Style,
    /// Count line.
    pub status_bar: Style,
    /// Active filter inside the count line.
    pub status_bar_active_filter: Style,
    /// Help area.
    pub help: Style,
}

impl Default for CardListStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        Self {
            search_bar: Style::new().padding(0, 0, 1, 2),
            no_items: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#909090",
                    Dark: "#626262",
                })
                .padding_left(2),
            pagination: Style::new().padding_left(2),
            page_indicator: Style::new().foreground(subdued),
            status_bar: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding_left(2),
            status_bar_active_filter: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            help: Style::new().padding(1, 0, 0, 2),
        }
    }
}
