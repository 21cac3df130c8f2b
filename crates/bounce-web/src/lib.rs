//! WASM bridge: runs a `bounce_engine::World` on a browser canvas.
//!
//! The host page owns the timer and calls one of the tick exports:
//!
//! ```js
//! import init, { bounce_init, bounce_tick, get_tick_interval_ms } from "./bounce_web.js";
//!
//! await init();
//! bounce_init("canvas");
//! setInterval(bounce_tick, get_tick_interval_ms());
//! ```

use std::cell::RefCell;

use bounce_engine::{Runner, SimConfig, SimError};
use wasm_bindgen::prelude::*;

pub mod canvas;
pub mod random;

pub use canvas::CanvasSurface;
pub use random::JsRandom;

thread_local! {
    static RUNNER: RefCell<Option<Runner<CanvasSurface>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut Runner<CanvasSurface>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Simulation not initialized. Call bounce_init() first.");
        f(runner)
    })
}

fn to_js(err: SimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Place the bodies on the canvas with id `canvas_id`.
/// `config_json` overrides any `SimConfig` field; omitted fields keep their defaults.
#[wasm_bindgen]
pub fn bounce_init(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json {
        Some(json) => SimConfig::from_json(&json).map_err(to_js)?,
        None => SimConfig::default(),
    };
    let surface = CanvasSurface::from_id(canvas_id)?;
    let runner = Runner::new(config, surface, &mut JsRandom).map_err(to_js)?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("bounce-web: initialized on #{}", canvas_id);
    Ok(())
}

/// One simulation tick. For hosts calling on a fixed interval.
#[wasm_bindgen]
pub fn bounce_tick() {
    with_runner(|r| r.tick());
}

/// Advance by elapsed wall time, e.g. from `requestAnimationFrame`.
/// Returns the number of ticks run.
#[wasm_bindgen]
pub fn bounce_frame(elapsed_ms: f32) -> u32 {
    with_runner(|r| r.frame(elapsed_ms / 1000.0))
}

#[wasm_bindgen]
pub fn get_body_count() -> u32 {
    with_runner(|r| r.world().len() as u32)
}

#[wasm_bindgen]
pub fn get_tick_interval_ms() -> f32 {
    with_runner(|r| r.config().tick_interval_ms)
}
