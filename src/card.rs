//! Rendering of a single product as a card.
//!
//! The card list hands each product on the current page to a
//! [`CardDelegate`]. [`DefaultCard`] draws the title, the description and
//! the tags; implement the trait to draw something else.
//!
//! ```rust
//! use bubbletea_cardlist::card::{CardDelegate, DefaultCard};
//! use bubbletea_cardlist::Product;
//!
//! let product = Product::new(1, "Desk lamp").with_tags(&["home"]);
//! let card = DefaultCard::new().render(&product);
//! assert!(card.contains("Desk lamp"));
//! ```

use crate::product::Product;
use lipgloss_extras::prelude::*;

/// Draws products as cards.
pub trait CardDelegate {
    /// Renders one product. The result may span several lines.
    fn render(&self, product: &Product) -> String;

    /// Lines one card occupies.
    fn height(&self) -> usize {
        1
    }

    /// Blank lines between cards.
    fn spacing(&self) -> usize {
        0
    }
}

/// Styles of the default card.
#[derive(Debug, Clone)]
pub struct CardStyles {
    /// Product title.
    pub title: Style,
    /// Product description.
    pub description: Style,
    /// One tag chip.
    pub tag: Style,
}

impl Default for CardStyles {
    fn default() -> Self {
        Self {
            title: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1A1A1A",
                    Dark: "#DDDDDD",
                })
                .bold(true)
                .padding(0, 0, 0, 2),
            description: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding(0, 0, 0, 2),
            tag: Style::new().foreground(Color::from("#AD58B4")),
        }
    }
}

/// Title line, description line and tag line.
#[derive(Debug, Clone)]
pub struct DefaultCard {
    /// Draw the description line.
    pub show_description: bool,
    /// Draw the tag line.
    pub show_tags: bool,
    /// Styles.
    pub styles: CardStyles,
    spacing: usize,
}

impl Default for DefaultCard {
    fn default() -> Self {
        Self {
            show_description: true,
            show_tags: true,
            styles: CardStyles::default(),
            spacing: 1,
        }
    }
}

impl DefaultCard {
    /// Creates a card delegate with descriptions, tags and one blank line
    /// between cards.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the blank lines between cards.
    pub fn set_spacing(&mut self, spacing: usize) {
        self.spacing = spacing;
    }

    fn tag_line(&self, product: &Product) -> String {
        let chips: Vec<String> = product
            .tags
            .iter()
            .map(|t| {
                self.styles
                    .tag
                    .clone()
                    .inline(true)
                    .render(&format!("#{}", t.title))
            })
            .collect();
        format!("  {}", chips.join(" "))
    }
}

impl CardDelegate for DefaultCard {
    fn render(&self, product: &Product) -> String {
        let mut lines = vec![self.styles.title.render(&product.title)];
        if self.show_description {
            lines.push(self.styles.description.render(&product.description));
        }
        if self.show_tags {
            lines.push(self.tag_line(product));
        }
        lines.join("\n")
    }

    fn height(&self) -> usize {
        1 + usize::from(self.show_description) + usize::from(self.show_tags)
    }

    fn spacing(&self) -> usize {
        self.spacing
    }
}
