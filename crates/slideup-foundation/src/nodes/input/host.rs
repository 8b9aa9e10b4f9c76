//! Capabilities the gesture detector needs from the view it is attached to.

use slideup_ui_graphics::Point;

/// Platform services of the touched view.
///
/// The detector never talks to a concrete toolkit; the host forwards these
/// calls to its view (click dispatch, long click dispatch, screen location).
pub trait TouchHost {
    /// Dispatch a click on the view. Returns whether a handler ran.
    fn perform_click(&mut self) -> bool;

    /// Dispatch a long click anchored at `at`. Returns whether it was handled.
    fn perform_long_click(&mut self, at: Point) -> bool;

    fn is_long_clickable(&self) -> bool;

    /// Translate a view-local point into screen coordinates.
    fn translate_to_screen(&self, local: Point) -> Point;
}
