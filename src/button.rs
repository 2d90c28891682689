//! A push button with a label, a press action and a disabled flag.
//!
//! The press action is a message factory: pressing the button returns a
//! command that yields the message, which the runtime then feeds back into
//! the owning model's `update`. A disabled button produces no command.
//!
//! ```rust
//! use bubbletea_cardlist::button;
//! use bubbletea_rs::Msg;
//!
//! #[derive(Debug)]
//! struct Clicked;
//!
//! let mut save = button::new("Save").with_action(|| Box::new(Clicked) as Msg);
//! assert!(save.press().is_some());
//!
//! save.set_disabled(true);
//! assert!(save.press().is_none());
//! ```

use crate::key::{self, Binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;
use std::fmt;
use std::sync::Arc;

/// Factory for the message a press emits.
pub type Action = Arc<dyn Fn() -> Msg + Send + Sync>;

/// Key bindings of a focused button.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Presses the button.
    pub press: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            press: Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
                .with_help("enter", "press"),
        }
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.press]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.press]]
    }
}

/// Button styles for each visual state.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Enabled, unfocused.
    pub normal: Style,
    /// Enabled and focused.
    pub focused: Style,
    /// Disabled, focused or not.
    pub disabled: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            normal: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            focused: Style::new()
                .foreground(Color::from("#EE6FF8"))
                .bold(true),
            disabled: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
        }
    }
}

/// Button state.
#[derive(Clone)]
pub struct Model {
    /// Text shown inside the brackets.
    pub label: String,
    /// Styles.
    pub styles: Styles,
    /// Key bindings.
    pub keymap: KeyMap,

    action: Option<Action>,
    disabled: bool,
    focus: bool,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .field("focus", &self.focus)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Creates an enabled, unfocused button without an action.
pub fn new(label: impl Into<String>) -> Model {
    Model {
        label: label.into(),
        styles: Styles::default(),
        keymap: KeyMap::default(),
        action: None,
        disabled: false,
        focus: false,
    }
}

impl Model {
    /// Sets the press action (builder pattern).
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn() -> Msg + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Whether the button ignores presses.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables the button.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Presses the button. Returns the action's command, or `None` when the
    /// button is disabled or has no action.
    pub fn press(&self) -> Option<Cmd> {
        if self.disabled {
            log::trace!("ignoring press on disabled button {:?}", self.label);
            return None;
        }
        let action = self.action.clone()?;
        Some(Box::pin(async move { Some(action()) }))
    }

    /// Presses the button when it is focused and a press key arrives.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.press.matches(key_msg) {
            return self.press();
        }
        None
    }

    /// Renders `[ label ]` in the style for the current state.
    pub fn view(&self) -> String {
        let style = if self.disabled {
            &self.styles.disabled
        } else if self.focus {
            &self.styles.focused
        } else {
            &self.styles.normal
        };
        style
            .clone()
            .inline(true)
            .render(&format!("[ {} ]", self.label))
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
