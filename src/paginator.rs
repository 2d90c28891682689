//! Offset-based pagination state and the page indicator.
//!
//! The paginator tracks the offset of the first item on the current page,
//! the page size, and how many items are being paged. It never renders the
//! items themselves; callers slice their data with [`Model::slice_bounds`].
//!
//! Moving between pages follows one rule: the new offset must stay inside
//! `[0, total_items)`. A move that would leave that range is rejected and
//! the offset is left untouched, so the offset is always a multiple of
//! `per_page` and always points at an existing item (or is 0 when there are
//! no items).
//!
//! ```rust
//! use bubbletea_cardlist::paginator::{Direction, Model};
//!
//! let mut paginator = Model::new().with_per_page(10).with_total_items(25);
//! assert!(paginator.turn(Direction::Next));
//! assert!(paginator.turn(Direction::Next));
//! assert_eq!(paginator.offset(), 20);
//! assert!(!paginator.turn(Direction::Next)); // 30 is past the end
//! assert_eq!(paginator.view(), "3/3");
//! ```

use serde::Deserialize;

/// Default number of items per page.
pub const DEFAULT_PER_PAGE: usize = 10;

/// How the page indicator is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    /// Page numbers, e.g. "2/5".
    #[default]
    Arabic,
    /// One dot per page, e.g. "○ • ○ ○ ○".
    Dots,
}

/// Direction of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards offset 0.
    Prev,
    /// Towards the end of the list.
    Next,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::Prev => "prev",
            Direction::Next => "next",
        })
    }
}

/// Pagination state.
#[derive(Debug, Clone)]
pub struct Model {
    /// The indicator style.
    pub paginator_type: Type,
    /// Character for the current page in dots mode.
    pub active_dot: String,
    /// Character for other pages in dots mode.
    pub inactive_dot: String,
    /// Format for arabic mode; the first `%d` is the page, the second the total.
    pub arabic_format: String,

    offset: usize,
    per_page: usize,
    total_items: usize,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            offset: 0,
            per_page: DEFAULT_PER_PAGE,
            total_items: 0,
        }
    }
}

impl Model {
    /// Creates a paginator with ten items per page and no items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern). Values below 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the number of paged items (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the indicator style (builder pattern).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Sets the page size and returns to the first page. Values below 1 are
    /// clamped to 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.offset = 0;
    }

    /// Sets the number of paged items. If the current offset no longer points
    /// at an item, the paginator moves to the last page.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_items = items;
        if self.offset >= items {
            self.offset = self.last_page_offset();
        }
    }

    /// Goes back to the first page.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Offset of the first item on the current page.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Items per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of paged items.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Zero-based index of the current page.
    pub fn page(&self) -> usize {
        self.offset / self.per_page
    }

    /// Number of pages; at least 1 even with no items.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    /// Moves one page in `direction`. Returns false, leaving the offset
    /// unchanged, when the target offset would be negative or past the last
    /// item.
    pub fn turn(&mut self, direction: Direction) -> bool {
        let target = match direction {
            Direction::Next => self.offset.checked_add(self.per_page),
            Direction::Prev => self.offset.checked_sub(self.per_page),
        };
        match target {
            Some(offset) if offset < self.total_items => {
                self.offset = offset;
                true
            }
            _ => false,
        }
    }

    /// Moves to the previous page. See [`Model::turn`].
    pub fn prev_page(&mut self) -> bool {
        self.turn(Direction::Prev)
    }

    /// Moves to the next page. See [`Model::turn`].
    pub fn next_page(&mut self) -> bool {
        self.turn(Direction::Next)
    }

    /// True when there is no page before the current one.
    pub fn on_first_page(&self) -> bool {
        self.offset == 0
    }

    /// True when there is no page after the current one.
    pub fn on_last_page(&self) -> bool {
        self.offset + self.per_page >= self.total_items
    }

    /// Start (inclusive) and end (exclusive) indices of the current page in a
    /// sequence of `length` items. Both are clamped to `length`.
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = self.offset.min(length);
        let end = self.offset.saturating_add(self.per_page).min(length);
        (start, end)
    }

    /// Number of items on the current page.
    pub fn items_on_page(&self) -> usize {
        let (start, end) = self.slice_bounds(self.total_items);
        end - start
    }

    /// Renders the page indicator.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn last_page_offset(&self) -> usize {
        (self.total_pages() - 1) * self.per_page
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &(self.page() + 1).to_string(), 1)
            .replacen("%d", &self.total_pages().to_string(), 1)
    }

    fn dots_view(&self) -> String {
        let page = self.page();
        (0..self.total_pages())
            .map(|i| {
                if i == page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
