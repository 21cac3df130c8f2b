use crate::api::config::SimConfig;
use crate::api::error::SimError;
use crate::core::rng::RandomSource;
use crate::core::time::FixedTimestep;
use crate::core::world::World;
use crate::renderer::surface::Surface;

/// Drives a `World` against a host surface.
///
/// Hosts with a fixed-interval timer call `tick()` once per interval.
/// Hosts driven by variable frame callbacks call `frame()` with the elapsed
/// time and let the fixed timestep decide how many ticks to run.
pub struct Runner<S: Surface> {
    world: World,
    surface: S,
    timestep: FixedTimestep,
    config: SimConfig,
    ticks: u64,
}

impl<S: Surface> Runner<S> {
    /// Size the surface, then place the bodies inside it.
    pub fn new<R: RandomSource + ?Sized>(
        config: SimConfig,
        mut surface: S,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        surface.resize();
        let world = World::new(&config, surface.viewport(), rng)?;
        let timestep = FixedTimestep::new(config.tick_dt(), config.max_steps_per_frame);

        Ok(Self {
            world,
            surface,
            timestep,
            config,
            ticks: 0,
        })
    }

    /// Run exactly one tick.
    pub fn tick(&mut self) {
        self.world.tick(&mut self.surface);
        self.ticks += 1;
    }

    /// Feed elapsed host time in seconds. Returns the number of ticks run.
    pub fn frame(&mut self, elapsed: f32) -> u32 {
        let steps = self.timestep.accumulate(elapsed);
        for _ in 0..steps {
            self.tick();
        }
        if self.timestep.capped() {
            log::debug!("Frame of {:.4}s hit the {} tick cap", elapsed, steps);
        }
        steps
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Total ticks run since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether the last `frame` dropped time to stay within the tick cap.
    pub fn capped(&self) -> bool {
        self.timestep.capped()
    }

    /// Fraction of a tick carried over to the next frame.
    pub fn alpha(&self) -> f32 {
        self.timestep.alpha()
    }
}
