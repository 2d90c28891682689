//! Key bindings of the card list.
//!
//! - **Pages**: `←/h/pgup` (previous), `→/l/pgdown` (next)
//! - **Focus**: `tab` / `shift+tab` cycle search, Previous and Next; `/` jumps to search
//! - **Help**: `?` toggles the full help
//!
//! While the search input has focus, only the focus keys are handled here;
//! everything else goes to the input.

use crate::key::{self, Binding};

/// Key bindings for paging, focus and help.
#[derive(Debug, Clone)]
pub struct CardListKeyMap {
    /// Turn to the previous page.
    pub prev_page: Binding,
    /// Turn to the next page.
    pub next_page: Binding,
    /// Focus the search input.
    pub search: Binding,
    /// Move focus forward.
    pub next_focus: Binding,
    /// Move focus backward.
    pub prev_focus: Binding,
    /// Toggle the full help.
    pub toggle_help: Binding,
}

impl Default for CardListKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["left", "h", "pgup"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["right", "l", "pgdown"]),
                key::with_help("→/l", "next page"),
            ]),
            search: key::new_binding(vec![
                key::with_keys_str(&["/"]),
                key::with_help("/", "search tag"),
            ]),
            next_focus: key::new_binding(vec![
                key::with_keys_str(&["tab"]),
                key::with_help("tab", "next control"),
            ]),
            prev_focus: key::new_binding(vec![
                key::with_keys_str(&["shift+tab"]),
                key::with_help("shift+tab", "prev control"),
            ]),
            toggle_help: key::new_binding(vec![
                key::with_keys_str(&["?"]),
                key::with_help("?", "more"),
            ]),
        }
    }
}

impl key::KeyMap for CardListKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.prev_page,
            &self.next_page,
            &self.search,
            &self.toggle_help,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.search, &self.next_focus, &self.prev_focus],
            vec![&self.toggle_help],
        ]
    }
}
