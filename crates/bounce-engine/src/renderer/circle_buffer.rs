use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::components::color::Color;
use crate::renderer::surface::Surface;

/// One filled circle as drawn during a tick.
/// 6 floats = 24 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Headless surface that records the circles drawn since the last resize.
///
/// Resizing clears the recording, the same way assigning a canvas size
/// clears the canvas, so after a tick it holds exactly that tick's frame.
pub struct CircleBuffer {
    width: f32,
    height: f32,
    instances: Vec<CircleInstance>,
}

impl CircleBuffer {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_capacity(width, height, 16)
    }

    pub fn with_capacity(width: f32, height: f32, max: usize) -> Self {
        Self {
            width,
            height,
            instances: Vec::with_capacity(max),
        }
    }

    /// Simulate the host window changing size.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn circles(&self) -> &[CircleInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Flat float view of the recorded instances.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(self.instances.as_slice())
    }
}

impl Surface for CircleBuffer {
    fn resize(&mut self) {
        self.instances.clear();
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.instances.push(CircleInstance {
            x: center.x,
            y: center.y,
            radius,
            r: color.r,
            g: color.g,
            b: color.b,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_instance_is_24_bytes() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), CircleInstance::STRIDE_BYTES);
        assert_eq!(CircleInstance::FLOATS, 6);
    }

    #[test]
    fn records_and_flattens() {
        let mut buf = CircleBuffer::new(640.0, 480.0);
        buf.fill_circle(Vec2::new(1.0, 2.0), 3.0, Color::new(0.25, 0.5, 0.75));
        buf.fill_circle(Vec2::new(4.0, 5.0), 6.0, Color::BLACK);
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(
            buf.as_floats(),
            &[1.0, 2.0, 3.0, 0.25, 0.5, 0.75, 4.0, 5.0, 6.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn resize_clears_and_picks_up_new_size() {
        let mut buf = CircleBuffer::new(640.0, 480.0);
        buf.fill_circle(Vec2::ZERO, 1.0, Color::WHITE);
        buf.set_size(800.0, 600.0);
        buf.resize();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.viewport().width, 800.0);
        assert_eq!(buf.viewport().height, 600.0);
    }
}
