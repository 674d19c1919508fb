//! The keyboard facade: enable/disable focus capture and forward bindings

use tracing::{debug, trace};

use super::config::{KeyboardOptions, Shortcut, Shortcuts};
use super::format;
use super::matcher::Matcher;
use super::surface::FocusSurface;
use super::types::{Action, Handler, Keys};

/// Keyboard shortcut facade for a diagram-editing container.
///
/// Owns the matcher it was constructed with and a handle to the host
/// surface. Every bind/unbind passes through [`format::format_key`]
/// normalization before reaching the matcher; enable/disable toggle focus
/// capture on the surface.
pub struct Keyboard {
    options: KeyboardOptions,
    surface: Box<dyn FocusSurface>,
    matcher: Box<dyn Matcher>,
}

impl Keyboard {
    /// Construct the facade. With `enabled: true` in the options, focus
    /// capture is applied immediately.
    pub fn new(
        options: KeyboardOptions,
        surface: Box<dyn FocusSurface>,
        matcher: Box<dyn Matcher>,
    ) -> Self {
        let mut keyboard = Self {
            options,
            surface,
            matcher,
        };
        if keyboard.options.enabled {
            keyboard.enable(true);
        }
        keyboard
    }

    /// Register every shortcut carried by the options with the matcher.
    ///
    /// Callbacks are moved into the matcher, so the configured shortcuts
    /// are drained; calling this twice registers nothing the second time.
    pub fn init_shortcuts(&mut self) {
        let Some(shortcuts) = self.options.shortcuts.take() else {
            return;
        };
        match shortcuts {
            Shortcuts::Many(entries) => {
                for Shortcut {
                    keys,
                    callback,
                    action,
                } in entries
                {
                    self.bind(keys, callback, action);
                }
            }
            Shortcuts::Single(Shortcut {
                keys,
                callback,
                action,
            }) => {
                self.bind(keys, callback, action);
            }
        }
    }

    /// Normalize `keys` and register `callback` with the matcher.
    pub fn bind(&mut self, keys: impl Into<Keys>, callback: Handler, action: Option<Action>) {
        let combinations = format::resolve(&keys.into());
        trace!(?combinations, ?action, "binding shortcut");
        self.matcher.bind(&combinations, callback, action);
    }

    /// Normalize `keys` and remove the matching registration.
    pub fn unbind(&mut self, keys: impl Into<Keys>, action: Option<Action>) {
        let combinations = format::resolve(&keys.into());
        trace!(?combinations, ?action, "unbinding shortcut");
        self.matcher.unbind(&combinations, action);
    }

    /// True iff keyboard capture is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn is_disabled(&self) -> bool {
        !self.options.enabled
    }

    /// Turn keyboard capture on. A no-op when already enabled unless
    /// `force` is set; the focus side effect is applied only when the
    /// surface accepts focus.
    pub fn enable(&mut self, force: bool) {
        if self.is_disabled() || force {
            debug!(force, "enabling keyboard capture");
            self.options.enabled = true;
            if self.surface.accepts_focus() {
                self.surface.capture_focus();
            }
        }
    }

    /// Turn keyboard capture off. A no-op when already disabled.
    pub fn disable(&mut self) {
        if self.is_enabled() {
            debug!("disabling keyboard capture");
            self.options.enabled = false;
            if self.surface.accepts_focus() {
                self.surface.release_focus();
            }
        }
    }
}

impl std::fmt::Debug for Keyboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keyboard")
            .field("enabled", &self.options.enabled)
            .finish_non_exhaustive()
    }
}
