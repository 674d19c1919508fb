//! Keyboard shortcut binding layer for a diagram-editing container
//!
//! This module is a thin facade between a host diagram editor and an
//! external key-combination matching engine:
//! - Toggles keyboard capture on the host surface (focus attribute and
//!   outline suppression)
//! - Normalizes shortcut combination strings before registration
//! - Forwards bind/unbind calls to the matcher
//!
//! # Architecture
//!
//! ```text
//! KeyboardOptions → Keyboard::bind() → format_key() → Matcher::bind()
//! ```
//!
//! The matching engine itself (chord detection, modifier handling across
//! platforms, timing-based sequences) lives behind the [`Matcher`] trait
//! and is not implemented here; the host surface sits behind
//! [`FocusSurface`] so the facade runs without a real rendering surface.

mod config;
mod facade;
mod format;
mod matcher;
mod surface;
mod types;

pub use config::{
    load_keyboard_file, parse_keyboard_yaml, KeyboardError, KeyboardFile, KeyboardOptions,
    Shortcut, ShortcutDecl, Shortcuts,
};
pub use facade::Keyboard;
pub use format::format_key;
pub use matcher::Matcher;
pub use surface::FocusSurface;
pub use types::{Action, Handler, KeyEvent, Keys};
