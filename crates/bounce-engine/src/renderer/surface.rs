//! Drawing surface contract.
//!
//! The engine never looks up a canvas or window on its own; the host hands
//! a `Surface` to the runner and every tick reads bounds from it and paints
//! onto it.

use glam::Vec2;

use crate::api::types::Viewport;
use crate::components::color::Color;

/// A viewport the world can measure and paint filled circles onto.
///
/// # Example Implementation
///
/// ```ignore
/// struct Canvas2d {
///     ctx: web_sys::CanvasRenderingContext2d,
///     // ...
/// }
///
/// impl Surface for Canvas2d {
///     fn resize(&mut self) {
///         // Match the window size...
///     }
///
///     fn width(&self) -> f32 { self.canvas.width() as f32 }
///     fn height(&self) -> f32 { self.canvas.height() as f32 }
///
///     fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
///         // beginPath / arc / fill...
///     }
/// }
/// ```
pub trait Surface {
    /// Refresh the bounds from the host (e.g. follow a window resize).
    /// Called once at the start of every tick.
    fn resize(&mut self) {}

    fn width(&self) -> f32;

    fn height(&self) -> f32;

    /// Paint a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Current bounds snapshot.
    fn viewport(&self) -> Viewport {
        Viewport::new(self.width(), self.height())
    }
}
