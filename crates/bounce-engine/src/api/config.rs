use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::SimError;
use crate::components::color::Color;

/// How each body's mass and radius are chosen at placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodySizing {
    /// Every body shares the same radius and mass.
    Fixed { radius: f32, mass: f32 },
    /// `mass = min_mass + rand * mass_range`, and `radius = mass`.
    MassProportional { min_mass: f32, mass_range: f32 },
}

impl Default for BodySizing {
    fn default() -> Self {
        BodySizing::MassProportional {
            min_mass: 20.0,
            mass_range: 60.0,
        }
    }
}

/// Simulation parameters. Every field falls back to its default when
/// missing from JSON, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of bodies placed at construction (fixed for the world's lifetime).
    pub body_count: usize,
    /// Added to `velocity.y` on every integration step. Positive is down.
    pub gravity: f32,
    /// Velocity every body starts with.
    pub initial_velocity: Vec2,
    pub sizing: BodySizing,
    /// Colors alternate by body index parity: `[even, odd]`.
    pub colors: [Color; 2],
    /// Scheduler period in milliseconds.
    pub tick_interval_ms: f32,
    /// Upper bound on ticks run for a single host frame.
    pub max_steps_per_frame: u32,
    /// Retry placement until a body overlaps nothing already placed.
    pub enable_overlap_avoidance_placement: bool,
    /// Resolve body-body collisions each tick.
    pub enable_pairwise_collision: bool,
    /// Placement attempts per body before construction fails.
    pub max_placement_attempts: u32,
    /// Seed for the engine's deterministic RNG.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            body_count: 10,
            gravity: 0.07,
            initial_velocity: Vec2::new(1.0, 2.0),
            sizing: BodySizing::default(),
            colors: [Color::WHITE, Color::BLACK],
            tick_interval_ms: 5.0,
            max_steps_per_frame: 10,
            enable_overlap_avoidance_placement: true,
            enable_pairwise_collision: true,
            max_placement_attempts: 10_000,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let invalid = |msg: String| Err(SimError::InvalidConfig(msg));

        if !self.gravity.is_finite() {
            return invalid(format!("gravity must be finite, got {}", self.gravity));
        }
        if !self.initial_velocity.is_finite() {
            return invalid(format!(
                "initial_velocity must be finite, got {:?}",
                self.initial_velocity
            ));
        }
        match self.sizing {
            BodySizing::Fixed { radius, mass } => {
                if !(radius > 0.0 && radius.is_finite()) {
                    return invalid(format!("radius must be positive, got {}", radius));
                }
                if !(mass > 0.0 && mass.is_finite()) {
                    return invalid(format!("mass must be positive, got {}", mass));
                }
            }
            BodySizing::MassProportional { min_mass, mass_range } => {
                if !(min_mass > 0.0 && min_mass.is_finite()) {
                    return invalid(format!("min_mass must be positive, got {}", min_mass));
                }
                if !(mass_range >= 0.0 && mass_range.is_finite()) {
                    return invalid(format!("mass_range must be non-negative, got {}", mass_range));
                }
            }
        }
        if !(self.tick_interval_ms > 0.0 && self.tick_interval_ms.is_finite()) {
            return invalid(format!(
                "tick_interval_ms must be positive, got {}",
                self.tick_interval_ms
            ));
        }
        if self.max_steps_per_frame == 0 {
            return invalid("max_steps_per_frame must be at least 1".to_string());
        }
        if self.max_placement_attempts == 0 {
            return invalid("max_placement_attempts must be at least 1".to_string());
        }
        Ok(())
    }

    /// Fixed tick duration in seconds.
    pub fn tick_dt(&self) -> f32 {
        self.tick_interval_ms / 1000.0
    }

    /// Color for the body at `index`.
    pub fn color_for(&self, index: usize) -> Color {
        self.colors[index % 2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let config = SimConfig::from_json("{}").unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.body_count, 10);
        assert!((config.tick_dt() - 0.005).abs() < 1e-7);
    }

    #[test]
    fn partial_json_overrides() {
        let json = r##"{
            "body_count": 5,
            "gravity": 0.2,
            "initial_velocity": [0.0, -1.0],
            "sizing": { "kind": "fixed", "radius": 30.0, "mass": 20.0 },
            "colors": ["#f00", "#00ff00"],
            "enable_pairwise_collision": false
        }"##;
        let config = SimConfig::from_json(json).unwrap();
        assert_eq!(config.body_count, 5);
        assert_eq!(config.initial_velocity, Vec2::new(0.0, -1.0));
        assert_eq!(config.sizing, BodySizing::Fixed { radius: 30.0, mass: 20.0 });
        assert_eq!(config.colors[0], Color::new(1.0, 0.0, 0.0));
        assert!(!config.enable_pairwise_collision);
        assert!(config.enable_overlap_avoidance_placement);
    }

    #[test]
    fn colors_alternate_by_parity() {
        let config = SimConfig::default();
        assert_eq!(config.color_for(0), Color::WHITE);
        assert_eq!(config.color_for(1), Color::BLACK);
        assert_eq!(config.color_for(6), Color::WHITE);
    }

    #[test]
    fn rejects_bad_values() {
        let cases = [
            r#"{"tick_interval_ms": 0.0}"#,
            r#"{"max_placement_attempts": 0}"#,
            r#"{"max_steps_per_frame": 0}"#,
            r#"{"sizing": {"kind": "fixed", "radius": -1.0, "mass": 1.0}}"#,
            r#"{"sizing": {"kind": "mass_proportional", "min_mass": 0.0, "mass_range": 1.0}}"#,
        ];
        for json in cases {
            assert!(
                matches!(SimConfig::from_json(json), Err(SimError::InvalidConfig(_))),
                "accepted {}",
                json
            );
        }
    }

    #[test]
    fn rejects_bad_color_and_syntax() {
        assert!(matches!(
            SimConfig::from_json(r##"{"colors": ["red", "#000"]}"##),
            Err(SimError::Config(_))
        ));
        assert!(matches!(SimConfig::from_json("{"), Err(SimError::Config(_))));
    }
}
