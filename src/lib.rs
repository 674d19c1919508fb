//! canvaskeys - keyboard shortcut binding for diagram editors
//!
//! This crate provides the keyboard capture and shortcut registration
//! layer used by canvas-based diagram editors: a facade that enables or
//! disables keyboard focus on the editor container and forwards normalized
//! shortcut bindings to a pluggable key-combination matching engine.

pub mod keyboard;

// Re-export commonly used types
pub use keyboard::{
    format_key, load_keyboard_file, parse_keyboard_yaml, Action, FocusSurface, Handler, KeyEvent,
    Keyboard, KeyboardError, KeyboardFile, KeyboardOptions, Keys, Matcher, Shortcut, ShortcutDecl,
    Shortcuts,
};
