//! The rendering seam.
//!
//! The engine never draws; it hands frames to whatever backend implements
//! [`Render`]. A backend receives only a frame's memory snapshot and an
//! optional highlighted process id, so a redraw (for example after a terminal
//! or window resize) only needs the last snapshot handed over, never a
//! re-run of the simulation. Concrete backends (raster canvas, terminal grid,
//! SVG) live outside this crate; the CLI ships a plain-text one.

use crate::sim::frame::FrameState;

/// Capability interface a presentation backend implements.
pub trait Render {
    /// Draws one frame's memory snapshot, highlighting `active` if given.
    ///
    /// Must depend only on the arguments of this call: the driver may replay
    /// the same snapshot at any time and expects an identical result.
    fn render(&mut self, state: &FrameState, active: Option<&str>);
}
