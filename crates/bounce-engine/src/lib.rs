//! Bouncing-ball simulation core.
//!
//! A `World` holds a handful of circular `Body`s that fall under gravity,
//! bounce off the viewport edges and collide elastically with each other.
//! Drawing goes through the `Surface` trait, so the same world runs headless
//! (`CircleBuffer`) or on a browser canvas (see the `bounce-web` crate).
//!
//! ```
//! use bounce_engine::{CircleBuffer, Rng, Runner, SimConfig};
//!
//! let config = SimConfig::default();
//! let mut rng = Rng::new(config.seed);
//! let mut runner = Runner::new(config, CircleBuffer::new(1280.0, 720.0), &mut rng).unwrap();
//! runner.tick();
//! assert_eq!(runner.surface().instance_count(), 10);
//! ```

pub mod api;
pub mod core;
pub mod components;
pub mod renderer;
pub mod runner;

// Re-export key types at crate root for convenience
pub use api::config::{BodySizing, SimConfig};
pub use api::error::SimError;
pub use api::types::{BodyId, Viewport};
pub use components::color::Color;
pub use crate::core::body::Body;
pub use crate::core::rng::{RandomSource, Rng};
pub use crate::core::time::FixedTimestep;
pub use crate::core::world::World;
pub use renderer::circle_buffer::{CircleBuffer, CircleInstance};
pub use renderer::surface::Surface;
pub use runner::Runner;
