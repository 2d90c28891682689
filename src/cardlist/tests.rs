use super::*;
use crate::card::CardDelegate;
use crate::config::Config;
use crate::product::Product;
use crate::Component;
use crossterm::event::{KeyCode, KeyModifiers};

/// Renders only the title so views stay short.
struct TitleCard;

impl CardDelegate for TitleCard {
    fn render(&self, product: &Product) -> String {
        product.title.clone()
    }
}

fn catalog(n: i64) -> Vec<Product> {
    (0..n)
        .map(|i| {
            let mut product = Product::new(i, format!("Product {i}")).with_tags(&["all"]);
            if i % 3 == 0 {
                product = product.with_tags(&["red"]);
            }
            product
        })
        .collect()
}

fn list(n: i64) -> Model {
    Model::new(catalog(n), TitleCard)
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn plain(s: &str) -> String {
    strip_ansi_escapes::strip_str(s)
}

#[test]
fn test_page_never_exceeds_page_size() {
    for n in [0, 1, 9, 10, 11, 25, 100] {
        let mut list = list(n);
        loop {
            assert!(list.current_page().len() <= list.page_size());
            assert_eq!(list.offset() % list.page_size(), 0);
            if !list.paginate(Direction::Next) {
                break;
            }
            assert!(list.offset() < list.len());
        }
    }
}

#[test]
fn test_first_page_slice() {
    let list = list(25);
    let titles: Vec<_> = list.current_page().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles.len(), 10);
    assert_eq!(titles[0], "Product 0");
    assert_eq!(titles[9], "Product 9");
}

#[test]
fn test_last_partial_page() {
    let mut list = list(25);
    list.paginate(Direction::Next);
    list.paginate(Direction::Next);
    assert_eq!(list.offset(), 20);
    assert_eq!(list.current_page().len(), 5);
    assert_eq!(list.current_page()[0].title, "Product 20");
}

#[test]
fn test_prev_at_start_is_noop() {
    let mut list = list(25);
    assert!(!list.paginate(Direction::Prev));
    assert_eq!(list.offset(), 0);
}

#[test]
fn test_next_past_end_is_noop() {
    let mut list = list(20);
    assert!(list.paginate(Direction::Next));
    assert_eq!(list.offset(), 10);
    assert!(!list.paginate(Direction::Next));
    assert_eq!(list.offset(), 10);
}

#[test]
fn test_filter_resets_offset() {
    let mut list = list(40);
    list.paginate(Direction::Next);
    list.paginate(Direction::Next);
    assert_eq!(list.offset(), 20);

    list.apply_filter(Some("red"));
    assert_eq!(list.offset(), 0);
    assert_eq!(list.len(), 14);
    assert!(list.products().iter().all(|p| p.has_tag("red")));
    assert_eq!(list.active_filter(), Some("red"));
}

#[test]
fn test_filter_scans_full_list_not_working_list() {
    let mut list = list(30);
    list.apply_filter(Some("red"));
    list.apply_filter(Some("all"));
    assert_eq!(list.len(), 30);
}

#[test]
fn test_unknown_tag_yields_empty_page() {
    let mut list = list(30);
    list.paginate(Direction::Next);
    list.apply_filter(Some("blue"));
    assert!(list.is_empty());
    assert!(list.current_page().is_empty());
    assert_eq!(list.offset(), 0);
    assert!(!list.paginate(Direction::Next));
    assert!(!list.paginate(Direction::Prev));
    assert!(list.prev_button().disabled());
    assert!(list.next_button().disabled());
}

#[test]
fn test_filter_is_case_sensitive_and_exact() {
    let mut list = list(30);
    list.apply_filter(Some("Red"));
    assert!(list.is_empty());
    list.apply_filter(Some("re"));
    assert!(list.is_empty());
}

#[test]
fn test_absent_or_empty_tag_restores_everything() {
    let mut list = list(30);
    list.apply_filter(Some("red"));
    list.apply_filter(None);
    assert_eq!(list.products(), list.all_products());
    assert_eq!(list.active_filter(), None);

    list.apply_filter(Some("red"));
    list.apply_filter(Some(""));
    assert_eq!(list.len(), 30);
    assert_eq!(list.active_filter(), None);
}

#[test]
fn test_set_products_keeps_filter() {
    let mut list = list(12);
    list.apply_filter(Some("red"));
    list.paginate(Direction::Next);

    list.set_products(catalog(60));
    assert_eq!(list.active_filter(), Some("red"));
    assert_eq!(list.len(), 20);
    assert_eq!(list.offset(), 0);
    assert_eq!(list.all_products().len(), 60);
}

#[test]
fn test_buttons_track_offset() {
    let mut list = list(25);
    assert!(list.prev_button().disabled());
    assert!(!list.next_button().disabled());

    list.paginate(Direction::Next);
    assert!(!list.prev_button().disabled());
    assert!(!list.next_button().disabled());

    list.paginate(Direction::Next);
    assert!(list.has_prev_page());
    assert!(!list.has_next_page());
    assert!(list.next_button().disabled());
}

#[test]
fn test_page_size_from_config() {
    let config = Config {
        page_size: 4,
        ..Config::default()
    };
    let mut list = Model::with_config(catalog(10), TitleCard, &config);
    assert_eq!(list.current_page().len(), 4);
    list.paginate(Direction::Next);
    list.paginate(Direction::Next);
    assert_eq!(list.offset(), 8);
    assert_eq!(list.current_page().len(), 2);
}

#[test]
fn test_search_msg_for_other_input_is_ignored() {
    let mut list = list(30);
    list.update(Box::new(SearchMsg {
        id: list.search().id() + 1000,
        tag: Some("red".to_string()),
    }) as Msg);
    assert_eq!(list.len(), 30);

    let id = list.search().id();
    list.update(Box::new(SearchMsg {
        id,
        tag: Some("red".to_string()),
    }) as Msg);
    assert_eq!(list.len(), 10);
}

#[test]
fn test_page_msg_routing() {
    let mut a = list(30);
    let b = list(30);
    a.update(Box::new(PageMsg {
        id: b.id(),
        direction: Direction::Next,
    }) as Msg);
    assert_eq!(a.offset(), 0);

    a.update(Box::new(PageMsg {
        id: a.id(),
        direction: Direction::Next,
    }) as Msg);
    assert_eq!(a.offset(), 10);
}

#[test]
fn test_arrow_keys_paginate() {
    let mut list = list(25);
    list.update(key(KeyCode::Right));
    list.update(key(KeyCode::Char('l')));
    assert_eq!(list.offset(), 20);
    list.update(key(KeyCode::Right));
    assert_eq!(list.offset(), 20);
    list.update(key(KeyCode::Left));
    assert_eq!(list.offset(), 10);
}

#[tokio::test]
async fn test_search_roundtrip_through_keys() {
    let mut list = list(30);
    list.update(key(KeyCode::Right));
    list.update(key(KeyCode::Char('/')));
    assert_eq!(list.focused_control(), Focus::Search);

    for c in "red".chars() {
        assert!(list.update(key(KeyCode::Char(c))).is_none());
    }
    // page keys are typed, not obeyed, while searching
    assert_eq!(list.offset(), 10);

    let cmd = list.update(key(KeyCode::Enter)).expect("search command");
    assert_eq!(list.focused_control(), Focus::List);
    let msg = cmd.await.expect("search message");
    list.update(msg);

    assert_eq!(list.active_filter(), Some("red"));
    assert_eq!(list.offset(), 0);
    assert_eq!(list.len(), 10);
}

#[tokio::test]
async fn test_next_button_press_roundtrip() {
    let mut list = list(25);
    list.update(key(KeyCode::Tab)); // search
    list.update(key(KeyCode::Tab)); // prev is disabled, so next
    assert_eq!(list.focused_control(), Focus::Next);
    assert!(list.next_button().focused());

    let msg = list
        .update(key(KeyCode::Enter))
        .expect("press command")
        .await
        .expect("page message");
    list.update(msg);
    assert_eq!(list.offset(), 10);
    assert_eq!(list.focused_control(), Focus::Next);

    let msg = list
        .update(key(KeyCode::Enter))
        .expect("press command")
        .await
        .expect("page message");
    list.update(msg);
    assert_eq!(list.offset(), 20);
    // the button became disabled, so it gave focus back to the list
    assert_eq!(list.focused_control(), Focus::List);
    assert!(!list.next_button().focused());
}

#[test]
fn test_focus_ring_backwards() {
    let mut list = list(25);
    list.paginate(Direction::Next);
    list.update(key(KeyCode::BackTab));
    assert_eq!(list.focused_control(), Focus::Next);
    list.update(key(KeyCode::BackTab));
    assert_eq!(list.focused_control(), Focus::Prev);
    list.update(key(KeyCode::BackTab));
    assert_eq!(list.focused_control(), Focus::Search);
    list.update(key(KeyCode::BackTab));
    assert_eq!(list.focused_control(), Focus::List);
}

#[test]
fn test_blurred_list_ignores_keys_but_not_messages() {
    let mut list = list(25);
    list.blur();
    list.update(key(KeyCode::Right));
    assert_eq!(list.offset(), 0);

    let id = list.id();
    list.update(Box::new(PageMsg {
        id,
        direction: Direction::Next,
    }) as Msg);
    assert_eq!(list.offset(), 10);
}

#[test]
fn test_view_shows_page_and_counts() {
    let mut list = list(25);
    list.paginate(Direction::Next);
    let view = plain(&list.view());
    assert!(view.contains("Product 10"));
    assert!(view.contains("Product 19"));
    assert!(!view.contains("Product 20"));
    assert!(view.contains("[ Previous ]"));
    assert!(view.contains("[ Next ]"));
    assert!(view.contains("2/3"));
    assert!(view.contains("25 products"));
}

#[test]
fn test_view_empty_results() {
    let mut list = list(25);
    list.apply_filter(Some("blue"));
    let view = plain(&list.view());
    assert!(view.contains("No products found."));
    assert!(view.contains("0 products tagged “blue”"));
    assert!(view.contains("1/1"));
}

#[test]
fn test_help_hides_unavailable_page_keys() {
    let mut list = list(5);
    let view = plain(&list.view());
    assert!(!view.contains("next page"));
    assert!(view.contains("search tag"));

    list.set_products(catalog(15));
    let view = plain(&list.view());
    assert!(view.contains("next page"));
    assert!(!view.contains("prev page"));
}

#[test]
fn test_bubbletea_init_is_empty() {
    let (list, cmd) = <Model as BubbleTeaModel>::init();
    assert!(cmd.is_none());
    assert!(list.is_empty());
    assert_eq!(list.offset(), 0);
}
