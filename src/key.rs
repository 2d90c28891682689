//! Type-safe key bindings shared by every component in this crate.
//!
//! A [`Binding`] groups one or more key presses under a single action and
//! carries the help text shown by the [`help`](crate::help) component.
//! Bindings can be built directly from `crossterm` key codes, or from the
//! string form used throughout the defaults (`"ctrl+c"`, `"pgdown"`, `"/"`).
//!
//! ```rust
//! use bubbletea_cardlist::key::{self, Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
//!     .with_help("→/l", "next page");
//! assert_eq!(next.help().desc, "next page");
//!
//! let quit = key::new_binding(vec![
//!     key::with_keys_str(&["q", "ctrl+c"]),
//!     key::with_help("q", "quit"),
//! ]);
//! assert_eq!(quit.keys().len(), 2);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press from a code and modifiers.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Returns true if this press describes the given key message.
    ///
    /// Shift is ignored for character keys and for back-tab, since terminals
    /// disagree on whether they report it.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.code == msg.key
            && normalize(self.code, self.modifiers) == normalize(msg.key, msg.modifiers)
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, modifiers)
    }
}

fn normalize(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(_) | KeyCode::BackTab => modifiers - KeyModifiers::SHIFT,
        _ => modifiers,
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the keys, e.g. `"→/l"`.
    pub key: String,
    /// Description of the action, e.g. `"next page"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys with empty help text.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The key presses this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active. Disabled bindings never match and are
    /// hidden from help views.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the binding is enabled and one of its keys matches.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Option applied by [`new_binding`].
#[derive(Debug, Clone)]
pub enum BindingOpt {
    /// Adds key presses to the binding.
    Keys(Vec<KeyPress>),
    /// Sets the help text.
    Help(Help),
    /// Starts the binding disabled.
    Disabled,
}

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys.extend(keys),
            BindingOpt::Help(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Key option from crossterm key presses.
pub fn with_keys<K: Into<KeyPress>>(keys: Vec<K>) -> BindingOpt {
    BindingOpt::Keys(keys.into_iter().map(Into::into).collect())
}

/// Key option from string names such as `"ctrl+c"` or `"left"`.
///
/// Names that cannot be parsed are skipped with a warning.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(
        keys.iter()
            .filter_map(|name| {
                let parsed = parse_key(name);
                if parsed.is_none() {
                    log::warn!("ignoring unknown key name {name:?}");
                }
                parsed
            })
            .collect(),
    )
}

/// Help text option.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt::Help(Help {
        key: key.to_string(),
        desc: desc.to_string(),
    })
}

/// Disabled option.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Parses a key name like `"shift+tab"`, `"pgup"` or `"x"`.
pub fn parse_key(name: &str) -> Option<KeyPress> {
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = name;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            modifiers |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            modifiers |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift+") {
            modifiers |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "enter" => KeyCode::Enter,
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => {
            modifiers -= KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdown" | "pagedown" => KeyCode::PageDown,
        s => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyPress::new(code, modifiers))
}

/// Returns true if the key message matches any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Collections of bindings that can describe themselves to the help view.
pub trait KeyMap {
    /// Bindings shown in the single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings shown in the expanded help, one inner `Vec` per column.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key("pgdown"), Some(KeyCode::PageDown.into()));
        assert_eq!(parse_key("/"), Some(KeyCode::Char('/').into()));
        assert_eq!(
            parse_key("ctrl+c"),
            Some(KeyPress::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        );
        assert_eq!(parse_key("shift+tab"), Some(KeyCode::BackTab.into()));
        assert_eq!(parse_key("hyper"), None);
    }

    #[test]
    fn test_binding_matches() {
        let binding = new_binding(vec![with_keys_str(&["l", "right"]), with_help("→/l", "next")]);
        assert!(binding.matches(&key(KeyCode::Right, KeyModifiers::NONE)));
        assert!(binding.matches(&key(KeyCode::Char('l'), KeyModifiers::NONE)));
        assert!(!binding.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
        assert!(!binding.matches(&key(KeyCode::Char('l'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let binding = Binding::new(vec![KeyCode::Char('G')]);
        assert!(binding.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        let back = new_binding(vec![with_keys_str(&["shift+tab"])]);
        assert!(back.matches(&key(KeyCode::BackTab, KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Enter]);
        binding.set_enabled(false);
        assert!(!binding.enabled());
        assert!(!binding.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!new_binding(vec![with_disabled()]).enabled());
    }
}
