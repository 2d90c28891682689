#![warn(missing_docs)]

//! # bubbletea-cardlist
//!
//! A paginated, tag-filterable list of product cards for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) applications.
//!
//! The [`CardList`] takes an ordered list of [`Product`]s, narrows it to the
//! products carrying a chosen tag, and shows it one page at a time. The
//! pieces it is drawn with are components in their own right:
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`CardList`] | Filtered, paginated list of product cards |
//! | [`card`] | Renders one product ([`DefaultCard`] or your own [`CardDelegate`]) |
//! | [`search`] | Single-line tag input that reports [`SearchMsg`] |
//! | [`button`] | Labeled button with a disabled flag and a press action |
//! | [`paginator`] | Offset-based page state and page indicator |
//! | [`help`] | Key binding help line |
//!
//! ## Quick start
//!
//! ```rust
//! use bubbletea_cardlist::prelude::*;
//!
//! let products = vec![
//!     Product::new(1, "Kettle").with_tags(&["kitchen"]),
//!     Product::new(2, "Desk lamp").with_tags(&["office", "home"]),
//!     Product::new(3, "Teapot").with_tags(&["kitchen", "gift"]),
//! ];
//!
//! let mut list = CardList::new(products, DefaultCard::new());
//! list.apply_filter(Some("kitchen"));
//! assert_eq!(list.current_page().len(), 2);
//!
//! list.apply_filter(None);
//! assert_eq!(list.current_page().len(), 3);
//! ```
//!
//! ## Loading data and settings
//!
//! [`catalog`] reads products from JSON and [`Config`] holds the page size,
//! labels and display toggles:
//!
//! ```rust
//! use bubbletea_cardlist::{catalog, CardList, Config, DefaultCard};
//!
//! let products = catalog::from_str(r#"[{"id": 1, "title": "Kettle", "tags": [{"title": "kitchen"}]}]"#)?;
//! let config = Config::from_json(r#"{"page_size": 5}"#)?;
//! let list = CardList::with_config(products, DefaultCard::new(), &config);
//! assert_eq!(list.page_size(), 5);
//! # Ok::<(), bubbletea_cardlist::Error>(())
//! ```
//!
//! ## Logging
//!
//! State changes are reported through the [`log`](https://docs.rs/log) facade
//! at `debug` and `trace` level; install any logger to see them.

pub mod button;
pub mod card;
pub mod cardlist;
pub mod catalog;
pub mod config;
pub mod error;
pub mod help;
pub mod key;
pub mod paginator;
pub mod product;
pub mod search;

use bubbletea_rs::Cmd;
use std::sync::atomic::{AtomicUsize, Ordering};

// Ids route messages back to the component instance that produced them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Components that can hold keyboard focus.
///
/// A focused component reacts to key messages in its `update`; a blurred
/// one ignores them.
///
/// ```rust
/// use bubbletea_cardlist::prelude::*;
///
/// let mut input = search::new();
/// assert!(!input.focused());
/// input.focus();
/// assert!(input.focused());
/// input.blur();
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes focus away.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use card::{CardDelegate, CardStyles, DefaultCard};
pub use cardlist::Model as CardList;
pub use cardlist::{CardListKeyMap, CardListStyles, Direction, Focus, PageMsg};
pub use config::Config;
pub use error::{Error, Result};
pub use product::{Product, ProductId, Tag};
pub use search::SearchMsg;

/// Common imports.
///
/// ```rust
/// use bubbletea_cardlist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::button::{self, Model as Button};
    pub use crate::card::{CardDelegate, DefaultCard};
    pub use crate::cardlist::{Direction, Focus, Model as CardList, PageMsg};
    pub use crate::config::Config;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::paginator::Model as Paginator;
    pub use crate::product::{Product, ProductId, Tag};
    pub use crate::search::{self, Model as SearchInput, SearchMsg};
    pub use crate::Component;
}
