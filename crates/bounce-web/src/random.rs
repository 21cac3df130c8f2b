use bounce_engine::RandomSource;

/// Placement randomness from the browser's `Math.random()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f32 {
        narrow_unit(js_sys::Math::random())
    }
}

/// Largest f32 below 1.0.
const BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Narrow a `[0, 1)` draw to f32 without letting it round up to 1.0.
fn narrow_unit(v: f64) -> f32 {
    (v as f32).min(BELOW_ONE)
}
