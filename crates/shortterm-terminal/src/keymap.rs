//! Symbolic key bindings.
//!
//! Config files name keys (`"enter"`, `"ctrl-c"`, `"q"`); this module turns
//! those names into crossterm key matchers grouped by [`Action`].

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use shortterm_core::config::KeyBindingsConfig;

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Leave immediately without saving.
    Quit,
    /// Accept the current screen (ready to recall, or answer finished).
    Confirm,
    /// Remove the last typed character.
    Erase,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Quit => write!(f, "quit"),
            Action::Confirm => write!(f, "confirm"),
            Action::Erase => write!(f, "erase"),
        }
    }
}

/// Errors from building a [`Keymap`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyBindingError {
    #[error("unknown key name: '{0}'")]
    UnknownKey(String),

    #[error("no key bound to the {0} action")]
    Unbound(Action),

    #[error("key '{key}' is bound to both {first} and {second}")]
    Conflict {
        key: String,
        first: Action,
        second: Action,
    },
}

/// A single key plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Shift is ignored: it is already reflected in the character itself.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && self.modifiers.difference(KeyModifiers::SHIFT)
                == key.modifiers.difference(KeyModifiers::SHIFT)
    }
}

impl FromStr for KeyBinding {
    type Err = KeyBindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || KeyBindingError::UnknownKey(s.to_string());

        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s.trim();
        loop {
            let lower = rest.to_ascii_lowercase();
            let stripped = ["ctrl-", "ctrl+", "control-"]
                .iter()
                .find(|p| lower.starts_with(*p))
                .map(|p| (KeyModifiers::CONTROL, p.len()))
                .or_else(|| {
                    ["alt-", "alt+"]
                        .iter()
                        .find(|p| lower.starts_with(*p))
                        .map(|p| (KeyModifiers::ALT, p.len()))
                });
            match stripped {
                Some((modifier, len)) if rest.len() > len => {
                    modifiers |= modifier;
                    rest = &rest[len..];
                }
                _ => break,
            }
        }

        let code = match rest.to_ascii_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "backspace" | "bs" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            name if name.len() > 1 && name.starts_with('f') => {
                let n: u8 = name[1..].parse().map_err(|_| unknown())?;
                if !(1..=12).contains(&n) {
                    return Err(unknown());
                }
                KeyCode::F(n)
            }
            _ => {
                let mut chars = rest.chars();
                match (chars.next(), chars.next()) {
                    // Ctrl chords arrive lowercase regardless of shift state.
                    (Some(c), None) if modifiers.contains(KeyModifiers::CONTROL) => {
                        KeyCode::Char(c.to_ascii_lowercase())
                    }
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(unknown()),
                }
            }
        };

        Ok(Self { code, modifiers })
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "ctrl-")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "alt-")?;
        }
        match self.code {
            KeyCode::Enter => write!(f, "enter"),
            KeyCode::Esc => write!(f, "esc"),
            KeyCode::Backspace => write!(f, "backspace"),
            KeyCode::Delete => write!(f, "delete"),
            KeyCode::Tab => write!(f, "tab"),
            KeyCode::Char(' ') => write!(f, "space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::F(n) => write!(f, "f{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Lookup from key events to actions.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, Action)>,
}

impl Keymap {
    /// Build a keymap from config names.
    ///
    /// Quit and confirm must each have at least one key, and no key may be
    /// bound to two actions.
    pub fn from_config(config: &KeyBindingsConfig) -> Result<Self, KeyBindingError> {
        let groups = [
            (Action::Quit, &config.quit),
            (Action::Confirm, &config.confirm),
            (Action::Erase, &config.erase),
        ];

        let mut bindings: Vec<(KeyBinding, Action)> = Vec::new();
        for (action, names) in groups {
            for name in names {
                let binding: KeyBinding = name.parse()?;
                if let Some((_, existing)) = bindings.iter().find(|(b, _)| *b == binding) {
                    return Err(KeyBindingError::Conflict {
                        key: binding.to_string(),
                        first: *existing,
                        second: action,
                    });
                }
                bindings.push((binding, action));
            }
        }

        for required in [Action::Quit, Action::Confirm] {
            if !bindings.iter().any(|(_, a)| *a == required) {
                return Err(KeyBindingError::Unbound(required));
            }
        }

        Ok(Self { bindings })
    }

    /// The action bound to `key`, if any.
    pub fn action(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(key))
            .map(|(_, action)| *action)
    }

    /// Human-readable list of the keys bound to `action`, e.g. `"ctrl-c/esc"`.
    pub fn describe(&self, action: Action) -> String {
        self.bindings
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(b, _)| b.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            bindings: vec![
                (
                    KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                    Action::Quit,
                ),
                (KeyBinding::new(KeyCode::Esc, KeyModifiers::NONE), Action::Quit),
                (
                    KeyBinding::new(KeyCode::Enter, KeyModifiers::NONE),
                    Action::Confirm,
                ),
                (
                    KeyBinding::new(KeyCode::Backspace, KeyModifiers::NONE),
                    Action::Erase,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_named_keys() {
        assert_eq!(
            "enter".parse::<KeyBinding>().unwrap(),
            KeyBinding::new(KeyCode::Enter, KeyModifiers::NONE)
        );
        assert_eq!(
            "Escape".parse::<KeyBinding>().unwrap(),
            KeyBinding::new(KeyCode::Esc, KeyModifiers::NONE)
        );
        assert_eq!(
            "space".parse::<KeyBinding>().unwrap(),
            KeyBinding::new(KeyCode::Char(' '), KeyModifiers::NONE)
        );
        assert_eq!(
            "f5".parse::<KeyBinding>().unwrap(),
            KeyBinding::new(KeyCode::F(5), KeyModifiers::NONE)
        );
    }

    #[test]
    fn parse_modifier_chords() {
        assert_eq!(
            "ctrl-c".parse::<KeyBinding>().unwrap(),
            KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        );
        assert_eq!(
            "Ctrl+D".parse::<KeyBinding>().unwrap(),
            KeyBinding::new(KeyCode::Char('d'), KeyModifiers::CONTROL)
        );
        assert_eq!(
            "ctrl-alt-x".parse::<KeyBinding>().unwrap(),
            KeyBinding::new(
                KeyCode::Char('x'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            )
        );
    }

    #[test]
    fn parse_single_characters() {
        assert_eq!(
            "q".parse::<KeyBinding>().unwrap(),
            KeyBinding::new(KeyCode::Char('q'), KeyModifiers::NONE)
        );
        assert_eq!(
            "-".parse::<KeyBinding>().unwrap(),
            KeyBinding::new(KeyCode::Char('-'), KeyModifiers::NONE)
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(
            "hyper".parse::<KeyBinding>(),
            Err(KeyBindingError::UnknownKey("hyper".into()))
        );
        assert!("f13".parse::<KeyBinding>().is_err());
        assert!("".parse::<KeyBinding>().is_err());
    }

    #[test]
    fn display_round_trips_names() {
        for name in ["enter", "esc", "ctrl-c", "q", "space", "f2"] {
            let binding: KeyBinding = name.parse().unwrap();
            assert_eq!(binding.to_string(), name);
        }
    }

    #[test]
    fn default_config_matches_default_keymap() {
        let keymap = Keymap::from_config(&KeyBindingsConfig::default()).unwrap();
        let fallback = Keymap::default();
        for event in [
            key(KeyCode::Enter, KeyModifiers::NONE),
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            key(KeyCode::Backspace, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::NONE),
        ] {
            assert_eq!(keymap.action(&event), fallback.action(&event));
        }
    }

    #[test]
    fn actions_resolve_from_events() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.action(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::Confirm)
        );
        assert_eq!(
            keymap.action(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.action(&key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Action::Erase)
        );
        assert_eq!(keymap.action(&key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn shift_does_not_block_a_match() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.action(&key(KeyCode::Enter, KeyModifiers::SHIFT)),
            Some(Action::Confirm)
        );
    }

    #[test]
    fn missing_confirm_is_rejected() {
        let config = KeyBindingsConfig {
            confirm: vec![],
            ..Default::default()
        };
        assert_eq!(
            Keymap::from_config(&config).unwrap_err(),
            KeyBindingError::Unbound(Action::Confirm)
        );
    }

    #[test]
    fn erase_may_be_unbound() {
        let config = KeyBindingsConfig {
            erase: vec![],
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config).unwrap();
        assert_eq!(
            keymap.action(&key(KeyCode::Backspace, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn duplicate_key_is_a_conflict() {
        let config = KeyBindingsConfig {
            quit: names(&["esc"]),
            confirm: names(&["enter"]),
            erase: names(&["Escape"]),
        };
        assert_eq!(
            Keymap::from_config(&config).unwrap_err(),
            KeyBindingError::Conflict {
                key: "esc".into(),
                first: Action::Quit,
                second: Action::Erase,
            }
        );
    }

    #[test]
    fn describe_lists_bound_keys() {
        let keymap = Keymap::default();
        assert_eq!(keymap.describe(Action::Quit), "ctrl-c/esc");
        assert_eq!(keymap.describe(Action::Confirm), "enter");
    }
}
