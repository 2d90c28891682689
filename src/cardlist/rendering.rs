//! View rendering for the card list.
//!
//! Top to bottom: search input, the cards on the current page (or the
//! empty message), the Previous/indicator/Next row, the count line, and
//! the help line.

use super::types::Focus;
use super::Model;

impl Model {
    /// Renders the whole component.
    pub fn view(&self) -> String {
        let mut sections = vec![
            self.styles.search_bar.render(&self.search.view()),
            self.cards_view(),
            self.pagination_view(),
        ];
        if self.show_status_bar {
            sections.push(self.status_view());
        }
        if self.show_help {
            sections.push(self.help_view());
        }
        sections.join("\n")
    }

    /// Renders only the cards of the current page.
    pub fn cards_view(&self) -> String {
        let page = self.current_page();
        if page.is_empty() {
            return self.styles.no_items.render(&self.empty_message);
        }
        let gap = "\n".repeat(self.delegate.spacing() + 1);
        page.iter()
            .map(|product| self.delegate.render(product))
            .collect::<Vec<_>>()
            .join(&gap)
    }

    fn pagination_view(&self) -> String {
        let indicator = self
            .styles
            .page_indicator
            .clone()
            .inline(true)
            .render(&self.paginator.view());
        let row = format!(
            "{}  {}  {}",
            self.prev_button.view(),
            indicator,
            self.next_button.view()
        );
        self.styles.pagination.render(&row)
    }

    fn status_view(&self) -> String {
        let count = self.products.len();
        let noun = if count == 1 { "product" } else { "products" };
        let mut status = format!("{count} {noun}");
        if let Some(tag) = &self.filter {
            let tag = self
                .styles
                .status_bar_active_filter
                .clone()
                .inline(true)
                .render(&format!("“{tag}”"));
            status.push_str(&format!(" tagged {tag}"));
        }
        self.styles.status_bar.render(&status)
    }

    fn help_view(&self) -> String {
        let help = if self.focus == Focus::Search {
            self.help.view(&self.search.keymap)
        } else {
            self.help.view(&self.keymap)
        };
        self.styles.help.render(&help)
    }
}
