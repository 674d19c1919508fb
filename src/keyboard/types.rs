//! Core types for the keyboard facade: Action, Keys, KeyEvent, Handler

use serde::Deserialize;

/// Which native key event a binding listens for.
///
/// When absent on a shortcut, the matcher picks its own default
/// (typically keydown for special keys, keypress for characters).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Keypress,
    Keydown,
    Keyup,
}

impl Action {
    /// The event name the matcher should listen for.
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Keypress => "keypress",
            Action::Keydown => "keydown",
            Action::Keyup => "keyup",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One or more combination strings for a shortcut.
///
/// Shortcut declarations accept either a bare string (`"ctrl+z"`) or a
/// list (`["ctrl+z", "cmd+z"]`); this variant makes that shape explicit
/// instead of checking it at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Keys {
    Single(String),
    Many(Vec<String>),
}

impl Keys {
    /// Number of combination strings carried.
    pub fn len(&self) -> usize {
        match self {
            Keys::Single(_) => 1,
            Keys::Many(keys) => keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Keys::Single(_) => false,
            Keys::Many(keys) => keys.is_empty(),
        }
    }

    /// Iterate over the raw (unformatted) combination strings.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Keys::Single(key) => std::slice::from_ref(key),
            Keys::Many(keys) => keys,
        };
        slice.iter().map(String::as_str)
    }
}

impl From<&str> for Keys {
    fn from(key: &str) -> Self {
        Keys::Single(key.to_string())
    }
}

impl From<String> for Keys {
    fn from(key: String) -> Self {
        Keys::Single(key)
    }
}

impl From<Vec<String>> for Keys {
    fn from(keys: Vec<String>) -> Self {
        Keys::Many(keys)
    }
}

impl From<&[&str]> for Keys {
    fn from(keys: &[&str]) -> Self {
        Keys::Many(keys.iter().map(|k| k.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Keys {
    fn from(keys: [&str; N]) -> Self {
        Keys::Many(keys.iter().map(|k| k.to_string()).collect())
    }
}

/// The event a matcher hands back to a shortcut callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The formatted combination string that matched, e.g. `"command+del"`.
    pub combination: String,
    /// The native event kind that fired.
    pub action: Action,
}

impl KeyEvent {
    pub fn new(combination: impl Into<String>, action: Action) -> Self {
        Self {
            combination: combination.into(),
            action,
        }
    }
}

/// Callback invoked by the matcher when a bound combination fires.
pub type Handler = Box<dyn FnMut(&KeyEvent)>;
