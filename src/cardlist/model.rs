//! Card list state and the operations that change it.
//!
//! Two values make up the view state: the working list (the products that
//! pass the active filter) and the offset of the first product on the
//! current page. Only [`Model::apply_filter`], [`Model::paginate`] and
//! [`Model::set_products`] change them.

use super::keys::CardListKeyMap;
use super::style::CardListStyles;
use super::types::{Direction, Focus, PageMsg};
use crate::card::CardDelegate;
use crate::config::Config;
use crate::product::Product;
use crate::{button, help, paginator, search, Component};
use bubbletea_rs::Msg;

/// A paginated list of product cards filtered by tag.
///
/// # Examples
///
/// ```
/// use bubbletea_cardlist::{CardList, DefaultCard, Direction, Product};
///
/// let products: Vec<Product> = (0..25)
///     .map(|i| Product::new(i, format!("Item {i}")).with_tags(if i % 2 == 0 { &["even"] } else { &["odd"] }))
///     .collect();
/// let mut list = CardList::new(products, DefaultCard::new());
///
/// assert_eq!(list.current_page().len(), 10);
/// assert!(list.paginate(Direction::Next));
/// assert_eq!(list.offset(), 10);
///
/// list.apply_filter(Some("odd"));
/// assert_eq!(list.offset(), 0);
/// assert_eq!(list.len(), 12);
/// ```
pub struct Model {
    pub(super) id: usize,

    // Data
    pub(super) data: Vec<Product>,
    pub(super) products: Vec<Product>,
    pub(super) filter: Option<String>,
    pub(super) paginator: paginator::Model,

    // Collaborators
    pub(super) delegate: Box<dyn CardDelegate + Send + Sync>,
    pub(super) search: search::Model,
    pub(super) prev_button: button::Model,
    pub(super) next_button: button::Model,
    pub(super) help: help::Model,

    // UI state
    pub(super) focus: Focus,
    pub(super) focused: bool,
    pub(super) keymap: CardListKeyMap,
    pub(super) styles: CardListStyles,
    pub(super) empty_message: String,
    pub(super) show_status_bar: bool,
    pub(super) show_help: bool,
}

impl Model {
    /// Creates a card list over `products` with the default configuration.
    pub fn new<D>(products: Vec<Product>, delegate: D) -> Self
    where
        D: CardDelegate + Send + Sync + 'static,
    {
        Self::with_config(products, delegate, &Config::default())
    }

    /// Creates a card list over `products` using `config`.
    ///
    /// A page size of 0 is treated as 1; use [`Config::validate`] to reject
    /// it up front.
    pub fn with_config<D>(products: Vec<Product>, delegate: D, config: &Config) -> Self
    where
        D: CardDelegate + Send + Sync + 'static,
    {
        let id = crate::next_id();

        let paginator = paginator::Model::new()
            .with_per_page(config.page_size)
            .with_total_items(products.len())
            .with_type(config.pagination);

        let mut search = search::new();
        search.prompt = config.search_prompt.clone();
        search.placeholder = config.search_placeholder.clone();

        let prev_button = button::new(config.prev_label.as_str()).with_action(move || {
            Box::new(PageMsg {
                id,
                direction: Direction::Prev,
            }) as Msg
        });
        let next_button = button::new(config.next_label.as_str()).with_action(move || {
            Box::new(PageMsg {
                id,
                direction: Direction::Next,
            }) as Msg
        });

        let mut model = Self {
            id,
            data: products.clone(),
            products,
            filter: None,
            paginator,
            delegate: Box::new(delegate),
            search,
            prev_button,
            next_button,
            help: help::Model::new(),
            focus: Focus::List,
            focused: true,
            keymap: CardListKeyMap::default(),
            styles: CardListStyles::default(),
            empty_message: config.empty_message.clone(),
            show_status_bar: config.show_status_bar,
            show_help: config.show_help,
        };
        model.sync_controls();
        model
    }

    /// Replaces the card renderer (builder pattern).
    pub fn with_delegate<D>(mut self, delegate: D) -> Self
    where
        D: CardDelegate + Send + Sync + 'static,
    {
        self.delegate = Box::new(delegate);
        self
    }

    /// Filters the full product list by tag and returns to the first page.
    ///
    /// Keeps the products that carry a tag whose title equals `tag` exactly.
    /// `None` or an empty tag keeps every product. No match leaves an empty
    /// list.
    pub fn apply_filter(&mut self, tag: Option<&str>) {
        let tag = tag.filter(|t| !t.is_empty());
        self.products = match tag {
            Some(tag) => self
                .data
                .iter()
                .filter(|p| p.has_tag(tag))
                .cloned()
                .collect(),
            None => self.data.clone(),
        };
        self.filter = tag.map(str::to_string);
        self.paginator.set_total_items(self.products.len());
        self.paginator.reset();
        self.sync_controls();

        log::debug!(
            "card list {}: filter {:?} kept {} of {} products",
            self.id,
            self.filter,
            self.products.len(),
            self.data.len()
        );
    }

    /// Turns one page. Returns false, changing nothing, when the new offset
    /// would be negative or past the end of the working list.
    pub fn paginate(&mut self, direction: Direction) -> bool {
        let moved = self.paginator.turn(direction);
        if moved {
            log::debug!(
                "card list {}: page {direction} to offset {}",
                self.id,
                self.paginator.offset()
            );
            self.sync_controls();
        } else {
            log::trace!(
                "card list {}: rejected page {direction} at offset {}",
                self.id,
                self.paginator.offset()
            );
        }
        moved
    }

    /// The products on the current page: at most `page_size` of them,
    /// starting at the offset.
    pub fn current_page(&self) -> &[Product] {
        let (start, end) = self.paginator.slice_bounds(self.products.len());
        &self.products[start..end]
    }

    /// Replaces the full product list, keeps the active filter and returns
    /// to the first page.
    pub fn set_products(&mut self, products: Vec<Product>) {
        log::debug!(
            "card list {}: replacing {} products with {}",
            self.id,
            self.data.len(),
            products.len()
        );
        self.data = products;
        let filter = self.filter.take();
        self.apply_filter(filter.as_deref());
    }

    /// Id carried by this list's [`PageMsg`]s.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The working list: products passing the active filter.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Every product, regardless of the filter.
    pub fn all_products(&self) -> &[Product] {
        &self.data
    }

    /// Number of products in the working list.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when no product passes the filter.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Index of the first product on the current page.
    pub fn offset(&self) -> usize {
        self.paginator.offset()
    }

    /// Products per page.
    pub fn page_size(&self) -> usize {
        self.paginator.per_page()
    }

    /// The tag the working list is filtered by.
    pub fn active_filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// True when there is a page before the current one.
    pub fn has_prev_page(&self) -> bool {
        !self.paginator.on_first_page()
    }

    /// True when there is a page after the current one.
    pub fn has_next_page(&self) -> bool {
        !self.paginator.on_last_page()
    }

    /// The paginator.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// The search input.
    pub fn search(&self) -> &search::Model {
        &self.search
    }

    /// The Previous button.
    pub fn prev_button(&self) -> &button::Model {
        &self.prev_button
    }

    /// The Next button.
    pub fn next_button(&self) -> &button::Model {
        &self.next_button
    }

    /// Which control receives keys.
    pub fn focused_control(&self) -> Focus {
        self.focus
    }

    /// Key bindings, for customization.
    pub fn keymap_mut(&mut self) -> &mut CardListKeyMap {
        &mut self.keymap
    }

    /// Styles, for customization.
    pub fn styles_mut(&mut self) -> &mut CardListStyles {
        &mut self.styles
    }

    /// Limits the help line to `width` cells; 0 means unlimited.
    pub fn set_help_width(&mut self, width: usize) {
        self.help.width = width;
    }

    /// Moves key focus to `target`, blurring the previous control.
    pub fn set_focus(&mut self, target: Focus) {
        match self.focus {
            Focus::Search => self.search.blur(),
            Focus::Prev => self.prev_button.blur(),
            Focus::Next => self.next_button.blur(),
            Focus::List => {}
        }
        self.focus = target;
        if !self.focused {
            return;
        }
        // None of the children start timers on focus, so their commands are empty.
        let _ = match target {
            Focus::Search => self.search.focus(),
            Focus::Prev => self.prev_button.focus(),
            Focus::Next => self.next_button.focus(),
            Focus::List => None,
        };
    }

    /// Moves focus along the ring, skipping disabled buttons.
    pub(super) fn cycle_focus(&mut self, forward: bool) {
        let ring = Focus::RING;
        let len = ring.len();
        let mut index = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        for _ in 0..len {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if self.can_focus(ring[index]) {
                self.set_focus(ring[index]);
                return;
            }
        }
    }

    fn can_focus(&self, target: Focus) -> bool {
        match target {
            Focus::Prev => !self.prev_button.disabled(),
            Focus::Next => !self.next_button.disabled(),
            Focus::List | Focus::Search => true,
        }
    }

    /// Brings button and binding availability in line with the offset.
    pub(super) fn sync_controls(&mut self) {
        let has_prev = self.has_prev_page();
        let has_next = self.has_next_page();
        self.prev_button.set_disabled(!has_prev);
        self.next_button.set_disabled(!has_next);
        self.keymap.prev_page.set_enabled(has_prev);
        self.keymap.next_page.set_enabled(has_next);

        if !self.can_focus(self.focus) {
            self.set_focus(Focus::List);
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<bubbletea_rs::Cmd> {
        self.focused = true;
        self.set_focus(self.focus);
        None
    }

    fn blur(&mut self) {
        self.focused = false;
        self.search.blur();
        self.prev_button.blur();
        self.next_button.blur();
    }

    fn focused(&self) -> bool {
        self.focused
    }
}
