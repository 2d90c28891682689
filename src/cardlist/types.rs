//! Messages and focus targets of the card list.

pub use crate::paginator::Direction;

/// Asks the card list with the matching id to turn the page.
///
/// The Previous and Next buttons emit this message when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMsg {
    /// Id of the target card list.
    pub id: usize,
    /// Which way to turn.
    pub direction: Direction,
}

/// Which part of the card list receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The list itself; page and focus shortcuts are active.
    #[default]
    List,
    /// The search input; keys edit the tag.
    Search,
    /// The Previous button.
    Prev,
    /// The Next button.
    Next,
}

impl Focus {
    /// The focus ring in tab order.
    pub(super) const RING: [Focus; 4] = [Focus::List, Focus::Search, Focus::Prev, Focus::Next];
}
