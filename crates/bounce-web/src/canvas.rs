use std::f64::consts::TAU;

use bounce_engine::{Color, Surface};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// `<canvas>` element sized to the browser window.
pub struct CanvasSurface {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up a canvas by element id and grab its 2D context.
    pub fn from_id(id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {:?}", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("element {:?} is not a canvas", id)))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;

        Ok(Self { window, canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    /// Match the window's inner size. Assigning the size also clears the canvas.
    fn resize(&mut self) {
        let size = self
            .window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .zip(self.window.inner_height().ok().and_then(|h| h.as_f64()));
        match size {
            Some((w, h)) => {
                self.canvas.set_width(w as u32);
                self.canvas.set_height(h as u32);
            }
            None => log::warn!(
                "Window size unavailable, keeping canvas at {}x{}",
                self.canvas.width(),
                self.canvas.height()
            ),
        }
    }

    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if let Err(err) = self.ctx.arc_with_anticlockwise(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            TAU,
            true,
        ) {
            // Negative radius is the only documented failure.
            log::warn!("arc({:?}, {}) failed: {:?}", center, radius, err);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }
}
