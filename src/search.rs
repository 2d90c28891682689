//! Single-line search input that reports the tag the user asked for.
//!
//! Typing edits the text; `enter` submits it and `esc` clears it. Either
//! way the input returns a command yielding a [`SearchMsg`] that carries the
//! input's id and the submitted tag. Blank text is submitted as `None`,
//! meaning "no filter".
//!
//! The input only reacts to keys while focused.

use crate::key::{self, Binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

/// Emitted when the user submits or clears the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMsg {
    /// Id of the input that emitted the message.
    pub id: usize,
    /// The trimmed tag, or `None` to show everything.
    pub tag: Option<String>,
}

/// Key bindings of the search input.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Submit the current text.
    pub submit: Binding,
    /// Clear the text and submit nothing.
    pub clear: Binding,
    /// Delete the character before the cursor.
    pub delete_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_forward: Binding,
    /// Move the cursor left.
    pub char_backward: Binding,
    /// Move the cursor right.
    pub char_forward: Binding,
    /// Move the cursor to the start.
    pub line_start: Binding,
    /// Move the cursor to the end.
    pub line_end: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            submit: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "search"),
            ]),
            clear: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "clear"),
            ]),
            delete_backward: key::new_binding(vec![key::with_keys_str(&["backspace"])]),
            delete_forward: key::new_binding(vec![key::with_keys_str(&["delete", "ctrl+d"])]),
            char_backward: key::new_binding(vec![key::with_keys_str(&["left", "ctrl+b"])]),
            char_forward: key::new_binding(vec![key::with_keys_str(&["right", "ctrl+f"])]),
            line_start: key::new_binding(vec![key::with_keys_str(&["home", "ctrl+a"])]),
            line_end: key::new_binding(vec![key::with_keys_str(&["end", "ctrl+e"])]),
        }
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.submit, &self.clear]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.submit, &self.clear],
            vec![
                &self.char_backward,
                &self.char_forward,
                &self.line_start,
                &self.line_end,
            ],
        ]
    }
}

/// Styles of the search input.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The prompt.
    pub prompt: Style,
    /// Typed text.
    pub text: Style,
    /// Placeholder text.
    pub placeholder: Style,
    /// The character under the cursor.
    pub cursor: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            text: Style::new(),
            placeholder: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            cursor: Style::new().foreground(Color::from("#EE6FF8")),
        }
    }
}

/// Search input state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text before the input.
    pub prompt: String,
    /// Shown while the input is empty.
    pub placeholder: String,
    /// Maximum width of the text area in cells; 0 means unlimited.
    pub width: usize,
    /// Styles.
    pub styles: Styles,
    /// Key bindings.
    pub keymap: KeyMap,

    id: usize,
    value: Vec<char>,
    pos: usize,
    focus: bool,
}

/// Creates an empty, unfocused search input.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        placeholder: String::new(),
        width: 0,
        styles: Styles::default(),
        keymap: KeyMap::default(),
        id: crate::next_id(),
        value: Vec::new(),
        pos: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Id carried by the messages this input emits.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        self.pos = self.value.len();
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the text length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Clears the text.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// The tag the current text stands for: trimmed, `None` when blank.
    pub fn tag(&self) -> Option<String> {
        let value = self.value();
        let tag = value.trim();
        (!tag.is_empty()).then(|| tag.to_string())
    }

    /// Command that reports the current tag.
    pub fn submit(&self) -> Cmd {
        let msg = SearchMsg {
            id: self.id,
            tag: self.tag(),
        };
        Box::pin(async move { Some(Box::new(msg) as Msg) })
    }

    /// Handles editing keys. Returns a command when the search is submitted
    /// or cleared.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.submit.matches(key_msg) {
            return Some(self.submit());
        }
        if self.keymap.clear.matches(key_msg) {
            self.reset();
            return Some(self.submit());
        }

        if self.keymap.delete_backward.matches(key_msg) {
            if self.pos > 0 {
                self.pos -= 1;
                self.value.remove(self.pos);
            }
        } else if self.keymap.delete_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if self.keymap.char_backward.matches(key_msg) {
            self.pos = self.pos.saturating_sub(1);
        } else if self.keymap.char_forward.matches(key_msg) {
            self.set_cursor(self.pos + 1);
        } else if self.keymap.line_start.matches(key_msg) {
            self.pos = 0;
        } else if self.keymap.line_end.matches(key_msg) {
            self.pos = self.value.len();
        } else if let KeyCode::Char(c) = key_msg.key {
            let chord = KeyModifiers::CONTROL | KeyModifiers::ALT;
            if !key_msg.modifiers.intersects(chord) && !c.is_control() {
                self.value.insert(self.pos, c);
                self.pos += 1;
            }
        }
        None
    }

    /// Renders the prompt, the text (or placeholder) and the cursor.
    pub fn view(&self) -> String {
        let prompt = self.styles.prompt.clone().inline(true).render(&self.prompt);

        if self.value.is_empty() && !self.placeholder.is_empty() {
            return format!("{}{}", prompt, self.placeholder_view());
        }

        let (start, end) = self.visible_range();
        let mut out = prompt;
        let text = self.styles.text.clone().inline(true);
        let before: String = self.value[start..self.pos].iter().collect();
        out.push_str(&text.render(&before));
        if self.focus {
            let under = self.value.get(self.pos).map_or(' ', |c| *c).to_string();
            out.push_str(&self.cursor_style().render(&under));
            let after_start = (self.pos + 1).min(end);
            let after: String = self.value[after_start..end].iter().collect();
            out.push_str(&text.render(&after));
        } else {
            let after: String = self.value[self.pos..end].iter().collect();
            out.push_str(&text.render(&after));
        }
        out
    }

    fn cursor_style(&self) -> Style {
        self.styles.cursor.clone().inline(true).reverse(true)
    }

    fn placeholder_view(&self) -> String {
        let style = self.styles.placeholder.clone().inline(true);
        if !self.focus {
            return style.render(&self.placeholder);
        }
        let mut chars = self.placeholder.chars();
        let first = chars.next().map(String::from).unwrap_or_default();
        let rest: String = chars.collect();
        format!("{}{}", self.cursor_style().render(&first), style.render(&rest))
    }

    /// Window of characters to draw so the cursor stays visible within
    /// `width` cells.
    fn visible_range(&self) -> (usize, usize) {
        let len = self.value.len();
        if self.width == 0 {
            return (0, len);
        }
        let cell = |c: &char| c.width().unwrap_or(0);

        // The cursor cell past the end also needs room.
        let mut used = if self.pos == len { 1 } else { 0 };
        let mut start = self.pos.min(len);
        let mut end = start;
        while end < len && used + cell(&self.value[end]) <= self.width {
            used += cell(&self.value[end]);
            end += 1;
        }
        while start > 0 && used + cell(&self.value[start - 1]) <= self.width {
            start -= 1;
            used += cell(&self.value[start]);
        }
        (start, end)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn type_str(input: &mut Model, s: &str) {
        for c in s.chars() {
            input.update(&key(KeyCode::Char(c)));
        }
    }

    fn focused() -> Model {
        let mut input = new();
        input.focus();
        input
    }

    #[test]
    fn test_ignores_keys_when_blurred() {
        let mut input = new();
        type_str(&mut input, "abc");
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_typing_and_editing() {
        let mut input = focused();
        type_str(&mut input, "shose");
        input.update(&key(KeyCode::Left));
        input.update(&key(KeyCode::Left));
        input.update(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "shse");
        input.update(&key(KeyCode::Home));
        input.update(&key(KeyCode::Delete));
        assert_eq!(input.value(), "hse");
        input.update(&key(KeyCode::End));
        assert_eq!(input.position(), 3);
    }

    #[test]
    fn test_control_chords_are_not_inserted() {
        let mut input = focused();
        input.update(&(Box::new(KeyMsg {
            key: KeyCode::Char('x'),
            modifiers: KeyModifiers::CONTROL,
        }) as Msg));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_tag_is_trimmed() {
        let mut input = new();
        input.set_value("  shoes ");
        assert_eq!(input.tag(), Some("shoes".to_string()));
        input.set_value("   ");
        assert_eq!(input.tag(), None);
    }

    #[tokio::test]
    async fn test_enter_submits_tag() {
        let mut input = focused();
        type_str(&mut input, "kitchen");
        let msg = input
            .update(&key(KeyCode::Enter))
            .expect("submit command")
            .await
            .expect("message");
        let search = msg.downcast_ref::<SearchMsg>().expect("search message");
        assert_eq!(search.id, input.id());
        assert_eq!(search.tag.as_deref(), Some("kitchen"));
    }

    #[tokio::test]
    async fn test_esc_clears_and_submits_nothing() {
        let mut input = focused();
        type_str(&mut input, "kitchen");
        let msg = input
            .update(&key(KeyCode::Esc))
            .expect("clear command")
            .await
            .expect("message");
        assert_eq!(input.value(), "");
        assert_eq!(msg.downcast_ref::<SearchMsg>().and_then(|m| m.tag.clone()), None);
    }

    #[test]
    fn test_view_placeholder_and_value() {
        let mut input = new();
        input.prompt = "Tag: ".to_string();
        input.placeholder = "filter".to_string();
        assert_eq!(strip_ansi_escapes::strip_str(input.view()), "Tag: filter");

        input.set_value("home");
        assert_eq!(strip_ansi_escapes::strip_str(input.view()), "Tag: home");
    }

    #[test]
    fn test_view_scrolls_to_cursor() {
        let mut input = focused();
        input.prompt = String::new();
        input.width = 4;
        input.set_value("abcdefgh");
        // cursor at the end needs one cell, leaving three characters
        assert_eq!(strip_ansi_escapes::strip_str(input.view()), "fgh ");
        input.update(&key(KeyCode::Home));
        assert_eq!(strip_ansi_escapes::strip_str(input.view()), "abcd");
    }
}
