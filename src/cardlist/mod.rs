//! Paginated, tag-filtered list of product cards.
//!
//! The card list owns two pieces of view state, the offset of the current
//! page and the working list of products that pass the tag filter, and
//! draws everything else through its collaborators:
//!
//! - [`card`](crate::card): renders each product on the page
//! - [`search`](crate::search): the tag input, which reports [`SearchMsg`](crate::search::SearchMsg)
//! - [`button`](crate::button): Previous and Next, which report [`PageMsg`]
//!
//! Collaborators never touch the list directly. They return commands whose
//! messages come back through [`Model::update`], so a host only needs to
//! forward every message it receives:
//!
//! ```
//! use bubbletea_cardlist::{CardList, DefaultCard, Product};
//! use bubbletea_rs::{Cmd, Msg};
//!
//! struct Shop {
//!     list: CardList,
//! }
//!
//! impl Shop {
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.list.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.list.view()
//!     }
//! }
//!
//! let shop = Shop {
//!     list: CardList::new(vec![Product::new(1, "Kettle")], DefaultCard::new()),
//! };
//! assert!(shop.view().contains("Kettle"));
//! ```
//!
//! ## Keys
//!
//! See [`CardListKeyMap`]. Focus starts on the list, where `←`/`→` turn
//! pages and `/` jumps to the search input. `tab` cycles through the search
//! input and the enabled buttons.

pub mod keys;
pub mod style;

mod model;
mod rendering;
mod types;

#[cfg(test)]
mod tests;

pub use keys::CardListKeyMap;
pub use model::Model;
pub use style::CardListStyles;
pub use types::{Direction, Focus, PageMsg};

use crate::card::DefaultCard;
use crate::search::SearchMsg;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

impl Model {
    /// Handles search results, page requests and key presses.
    ///
    /// [`SearchMsg`] and [`PageMsg`] addressed to another card list are
    /// ignored. Key handling depends on [`Focus`]:
    ///
    /// - `tab`/`shift+tab` always move focus.
    /// - With the search input focused, keys edit it; submitting or clearing
    ///   returns focus to the list.
    /// - With a button focused, `enter`/`space` press it.
    /// - Otherwise the page, search and help shortcuts apply.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(search) = msg.downcast_ref::<SearchMsg>() {
            if search.id == self.search.id() {
                self.apply_filter(search.tag.as_deref());
            }
            return None;
        }

        if let Some(page) = msg.downcast_ref::<PageMsg>() {
            if page.id == self.id {
                self.paginate(page.direction);
            }
            return None;
        }

        if !self.focused {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.next_focus.matches(key_msg) {
            self.cycle_focus(true);
            return None;
        }
        if self.keymap.prev_focus.matches(key_msg) {
            self.cycle_focus(false);
            return None;
        }

        match self.focus {
            Focus::Search => {
                let cmd = self.search.update(&msg);
                if cmd.is_some() {
                    self.set_focus(Focus::List);
                }
                return cmd;
            }
            Focus::Prev => {
                if let Some(cmd) = self.prev_button.update(&msg) {
                    return Some(cmd);
                }
            }
            Focus::Next => {
                if let Some(cmd) = self.next_button.update(&msg) {
                    return Some(cmd);
                }
            }
            Focus::List => {}
        }

        if self.keymap.prev_page.matches(key_msg) {
            self.paginate(Direction::Prev);
        } else if self.keymap.next_page.matches(key_msg) {
            self.paginate(Direction::Next);
        } else if self.keymap.search.matches(key_msg) {
            self.set_focus(Focus::Search);
        } else if self.keymap.toggle_help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
        }
        None
    }
}

impl BubbleTeaModel for Model {
    /// An empty card list with the default card renderer. Hosts normally
    /// build one with [`Model::new`] and feed it products.
    fn init() -> (Self, Option<Cmd>) {
        (Model::new(Vec::new(), DefaultCard::new()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
