//! The seam to the external key-combination matching engine
//!
//! Combination parsing, chord detection, and native event dispatch all live
//! behind this trait. The facade only formats combination strings and
//! forwards registrations; it never inspects matcher internals.

use super::types::{Action, Handler};

/// A key-combination matching engine.
///
/// Implementations watch native key events on the host surface and invoke
/// the registered callback when a bound combination fires. Combinations
/// arrive pre-formatted (lowercase, whitespace-free, canonical key names).
pub trait Matcher {
    /// Register `callback` for each of `combinations`, optionally filtered
    /// to a single native event kind.
    fn bind(&mut self, combinations: &[String], callback: Handler, action: Option<Action>);

    /// Remove the registrations for `combinations`, symmetric with `bind`.
    fn unbind(&mut self, combinations: &[String], action: Option<Action>);
}
