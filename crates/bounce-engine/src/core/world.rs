use glam::Vec2;

use crate::api::config::{BodySizing, SimConfig};
use crate::api::error::SimError;
use crate::api::types::{BodyId, Viewport};
use crate::core::body::Body;
use crate::core::rng::RandomSource;
use crate::renderer::surface::Surface;

/// Fixed population of bodies plus the per-tick update.
/// Bodies live in a flat Vec in insertion order; the order drives the
/// pairwise collision pass and is never changed after construction.
pub struct World {
    bodies: Vec<Body>,
    gravity: f32,
    pairwise_collision: bool,
}

impl World {
    /// Place `config.body_count` bodies at random positions inside `viewport`.
    ///
    /// With overlap avoidance enabled, each body is re-rolled until it touches
    /// none of the bodies already placed, giving up after
    /// `config.max_placement_attempts` tries.
    pub fn new<R: RandomSource + ?Sized>(
        config: &SimConfig,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        config.validate()?;

        let mut bodies: Vec<Body> = Vec::with_capacity(config.body_count);
        for index in 0..config.body_count {
            let mut attempts = 0;
            let body = loop {
                attempts += 1;
                let candidate = random_body(BodyId(index as u32), config, viewport, rng);
                let overlaps = config.enable_overlap_avoidance_placement
                    && bodies.iter().any(|placed| candidate.detect_collision(placed));
                if !overlaps {
                    break candidate;
                }
                if attempts >= config.max_placement_attempts {
                    log::warn!(
                        "Gave up placing body {} after {} attempts in {}x{}",
                        index,
                        attempts,
                        viewport.width,
                        viewport.height
                    );
                    return Err(SimError::Placement {
                        count: config.body_count,
                        placed: bodies.len(),
                        attempts,
                        width: viewport.width,
                        height: viewport.height,
                    });
                }
            };
            if attempts > 1 {
                log::debug!("Body {} placed after {} attempts", index, attempts);
            }
            bodies.push(body);
        }

        log::info!(
            "World created: {} bodies in {}x{}",
            bodies.len(),
            viewport.width,
            viewport.height
        );
        Ok(Self::from_bodies(config, bodies))
    }

    /// Build a world from bodies placed by the caller. No overlap check.
    pub fn from_bodies(config: &SimConfig, bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            gravity: config.gravity,
            pairwise_collision: config.enable_pairwise_collision,
        }
    }

    /// Advance one tick and draw the result.
    ///
    /// Order: refresh the surface bounds, resolve body-body collisions
    /// (committing each body once its partners are done), integrate and
    /// bounce off the walls, then render every body.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.resize();
        let bounds = surface.viewport();

        self.resolve_collisions();

        for body in &mut self.bodies {
            body.integrate(self.gravity);
            body.resolve_boundary(bounds);
        }

        for body in &self.bodies {
            body.render(surface);
        }
    }

    /// Check every pair (i, j) with i < j. Body i is committed right after its
    /// inner loop, so later bodies see it already moved. Without pairwise
    /// collision the commit still runs so wall clamps take effect.
    fn resolve_collisions(&mut self) {
        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let body = &mut head[i];
            if self.pairwise_collision {
                for other in tail.iter_mut() {
                    if body.detect_collision(other) {
                        log::trace!("Collision {:?} <-> {:?}", body.id, other.id);
                        body.resolve_collision(other);
                    }
                }
            }
            body.commit();
        }
    }

    /// Get a body by ID.
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Bodies in insertion order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }
}

/// Roll one body. Draw order: mass (if proportional), x, y.
fn random_body<R: RandomSource + ?Sized>(
    id: BodyId,
    config: &SimConfig,
    viewport: Viewport,
    rng: &mut R,
) -> Body {
    let (mass, radius) = match config.sizing {
        BodySizing::Fixed { radius, mass } => (mass, radius),
        BodySizing::MassProportional { min_mass, mass_range } => {
            let mass = min_mass + rng.next_unit() * mass_range;
            (mass, mass)
        }
    };
    let x = (rng.next_unit() * viewport.width).floor();
    let y = (rng.next_unit() * viewport.height).floor();

    Body::new(id, config.color_for(id.0 as usize))
        .with_pos(Vec2::new(x, y))
        .with_vel(config.initial_velocity)
        .with_mass(mass)
        .with_radius(radius)
}
