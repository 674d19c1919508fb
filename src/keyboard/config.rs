//! Keyboard configuration: in-memory options and YAML declaration files
//!
//! Two layers. `KeyboardOptions` is what the facade is constructed with and
//! carries live callbacks, so it cannot be deserialized. `KeyboardFile` is
//! the declarative subset (keys and action only) that hosts keep in YAML;
//! callbacks are attached in code after loading.

use std::path::Path;

use serde::Deserialize;

use super::types::{Action, Handler, Keys};

/// A shortcut ready to register: combinations, callback, optional event
/// filter.
pub struct Shortcut {
    pub keys: Keys,
    pub callback: Handler,
    pub action: Option<Action>,
}

impl Shortcut {
    pub fn new(keys: impl Into<Keys>, callback: Handler) -> Self {
        Self {
            keys: keys.into(),
            callback,
            action: None,
        }
    }

    /// Restrict the shortcut to one native event kind (builder pattern).
    pub fn on(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

impl std::fmt::Debug for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shortcut")
            .field("keys", &self.keys)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

/// One shortcut or several; the two shapes a host may hand over.
#[derive(Debug)]
pub enum Shortcuts {
    Single(Shortcut),
    Many(Vec<Shortcut>),
}

impl From<Shortcut> for Shortcuts {
    fn from(shortcut: Shortcut) -> Self {
        Shortcuts::Single(shortcut)
    }
}

impl From<Vec<Shortcut>> for Shortcuts {
    fn from(shortcuts: Vec<Shortcut>) -> Self {
        Shortcuts::Many(shortcuts)
    }
}

/// Construction-time configuration for the keyboard facade.
///
/// `enabled` defaults to `false`: a host that passes no keyboard
/// configuration gets a facade that captures nothing until `enable`.
#[derive(Debug, Default)]
pub struct KeyboardOptions {
    pub enabled: bool,
    pub shortcuts: Option<Shortcuts>,
}

impl KeyboardOptions {
    /// Disabled, no shortcuts. Same as `Default`.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Enabled from construction, capturing focus immediately.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            shortcuts: None,
        }
    }

    /// Attach shortcuts to register via `init_shortcuts` (builder pattern).
    pub fn with_shortcuts(mut self, shortcuts: impl Into<Shortcuts>) -> Self {
        self.shortcuts = Some(shortcuts.into());
        self
    }
}

/// Root structure of a shortcut declaration YAML file
#[derive(Debug, Deserialize)]
pub struct KeyboardFile {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub shortcuts: Vec<ShortcutDecl>,
}

/// A single declared shortcut: keys and action, no callback
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortcutDecl {
    pub keys: Keys,
    #[serde(default)]
    pub action: Option<Action>,
}

/// Load a shortcut declaration file
pub fn load_keyboard_file(path: &Path) -> Result<KeyboardFile, KeyboardError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| KeyboardError::IoError(e.to_string()))?;

    parse_keyboard_yaml(&content)
}

/// Parse shortcut declarations from a YAML string
pub fn parse_keyboard_yaml(yaml: &str) -> Result<KeyboardFile, KeyboardError> {
    serde_yaml::from_str(yaml).map_err(|e| KeyboardError::ParseError(e.to_string()))
}

/// Errors that can occur when loading shortcut declarations
#[derive(Debug, Clone)]
pub enum KeyboardError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for KeyboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyboardError::IoError(e) => write!(f, "IO error: {}", e),
            KeyboardError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for KeyboardError {}
