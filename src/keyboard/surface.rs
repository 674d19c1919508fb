//! The seam to the host rendering surface
//!
//! Enabling keyboard capture mutates the host container (a focus-capture
//! attribute plus suppressing its focus outline). That mutation is expressed
//! against this injected abstraction so the facade can be exercised without
//! a real rendering surface.

/// The host container the facade captures keyboard focus on.
///
/// The surface is owned by the host; the facade mutates it through these
/// methods and never tears it down.
pub trait FocusSurface {
    /// Whether the container is a real, focusable rendering surface.
    /// Capture and release are skipped when this is false.
    fn accepts_focus(&self) -> bool;

    /// Make the surface focusable for key capture and suppress the focus
    /// outline it would otherwise draw when a node is selected.
    fn capture_focus(&mut self);

    /// Remove the focus-capture attribute. The outline styling is left as
    /// `capture_focus` set it, matching how hosts reuse the container.
    fn release_focus(&mut self);
}
