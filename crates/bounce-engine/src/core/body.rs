use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use crate::api::types::{BodyId, Viewport};
use crate::components::color::Color;
use crate::renderer::surface::Surface;

/// A circular body bouncing around the viewport.
///
/// `next_pos` is the tentative position for the tick in progress. Collision
/// detection and response read and write it so every pair in a tick sees the
/// same pre-commit state; `commit()` copies it back into `pos`.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    /// Committed position, used for rendering.
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
    pub radius: f32,
    color: Color,
    next_pos: Vec2,
}

impl Body {
    /// Create a body at rest at the origin with unit mass and radius.
    pub fn new(id: BodyId, color: Color) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            mass: 1.0,
            radius: 1.0,
            color,
            next_pos: Vec2::ZERO,
        }
    }

    // -- Builder pattern --

    /// Place the body; the tentative position follows.
    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self.next_pos = pos;
        self
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn next_pos(&self) -> Vec2 {
        self.next_pos
    }

    /// Apply gravity, advance by velocity, and reset the tentative position.
    /// Gravity accrues per call, not per tick.
    pub fn integrate(&mut self, gravity: f32) {
        self.vel.y += gravity;
        self.pos += self.vel;
        self.next_pos = self.pos;
    }

    /// Bounce off the viewport edges.
    ///
    /// Checks left, right, bottom, top in that order and corrects only the
    /// first violation, so a body pushed into a corner is fixed one axis per
    /// call. Only the tentative position is clamped.
    pub fn resolve_boundary(&mut self, bounds: Viewport) {
        let r = self.radius;
        if self.next_pos.x - r < 0.0 {
            self.vel.x = -self.vel.x;
            self.next_pos.x = r;
        } else if self.next_pos.x + r > bounds.width {
            self.vel.x = -self.vel.x;
            self.next_pos.x = bounds.width - r;
        } else if self.next_pos.y + r > bounds.height {
            self.vel.y = -self.vel.y;
            self.next_pos.y = bounds.height - r;
        } else if self.next_pos.y - r < 0.0 {
            self.vel.y = -self.vel.y;
            self.next_pos.y = r;
        }
    }

    /// Whether the tentative discs touch or overlap.
    pub fn detect_collision(&self, other: &Body) -> bool {
        let reach = self.radius + other.radius;
        self.next_pos.distance_squared(other.next_pos) <= reach * reach
    }

    /// Elastic response between two touching bodies.
    ///
    /// Both velocities are rotated into the frame of the collision normal,
    /// exchanged along it with the 1D momentum formula, and rotated back.
    /// The tangential components pass through unchanged. Each tentative
    /// position then advances by its new velocity.
    pub fn resolve_collision(&mut self, other: &mut Body) {
        let delta = self.next_pos - other.next_pos;
        let angle = delta.y.atan2(delta.x);

        let (u1, t1) = rotate_into(self.vel, angle);
        let (u2, t2) = rotate_into(other.vel, angle);

        let (m1, m2) = (self.mass, other.mass);
        let total = m1 + m2;
        let f1 = ((m1 - m2) * u1 + (m2 + m2) * u2) / total;
        let f2 = ((m1 + m1) * u1 + (m2 - m1) * u2) / total;

        self.vel = rotate_out(f1, t1, angle);
        other.vel = rotate_out(f2, t2, angle);

        self.next_pos += self.vel;
        other.next_pos += other.vel;
    }

    /// Make the tentative position the committed one.
    pub fn commit(&mut self) {
        self.pos = self.next_pos;
    }

    /// Draw at the committed position.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }
}

/// Split a velocity into (normal, tangential) components for a collision at `angle`.
fn rotate_into(vel: Vec2, angle: f32) -> (f32, f32) {
    let speed = vel.length();
    let direction = vel.y.atan2(vel.x);
    (
        speed * (direction - angle).cos(),
        speed * (direction - angle).sin(),
    )
}

fn rotate_out(normal: f32, tangential: f32, angle: f32) -> Vec2 {
    Vec2::new(
        angle.cos() * normal + (angle + FRAC_PI_2).cos() * tangential,
        angle.sin() * normal + (angle + FRAC_PI_2).sin() * tangential,
    )
}
