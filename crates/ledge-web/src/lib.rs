//! `#[wasm_bindgen]` exports for the page.
//!
//! wasm-bindgen cannot export a stateful struct with borrowed buffers cleanly,
//! so the runner lives in a `thread_local!` and every export is a free function.

use std::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;

use ledge_engine::level::presets;

pub mod runner;

pub use runner::SessionRunner;

thread_local! {
    static RUNNER: RefCell<Option<SessionRunner>> = const { RefCell::new(None) };
    static WARNED_UNINIT: Cell<bool> = const { Cell::new(false) };
}

/// Run `f` against the runner, or return `fallback` if `game_init` has not
/// succeeded yet. The missing-init warning is logged once.
fn with_runner<R>(fallback: R, f: impl FnOnce(&mut SessionRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            if !WARNED_UNINIT.with(|w| w.replace(true)) {
                log::warn!("ledge: not initialized, call game_init() first");
            }
            fallback
        }
    })
}

/// Start a level. `level` is a preset name or a level manifest as JSON.
/// Returns false if the level could not be loaded.
#[wasm_bindgen]
pub fn game_init(level: &str, width: f32, height: f32) -> bool {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::debug_1(&JsValue::from_str("ledge: logger already installed"));
    }

    match SessionRunner::from_source(level, width, height) {
        Ok(runner) => {
            let name = runner.session().manifest().name.clone();
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            log::info!("ledge: `{}` initialized", name);
            true
        }
        Err(err) => {
            log::error!("ledge: init failed: {}", err);
            false
        }
    }
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner((), |r| r.tick(dt));
}

#[wasm_bindgen]
pub fn game_set_input(left: bool, right: bool, jump: bool) {
    with_runner((), |r| r.set_input(left, right, jump));
}

#[wasm_bindgen]
pub fn game_resize(width: f32, height: f32) {
    with_runner((), |r| r.resize(width, height));
}

#[wasm_bindgen]
pub fn game_restart() {
    with_runner((), |r| r.restart());
}

#[wasm_bindgen]
pub fn game_load_level_json(json: &str) -> bool {
    with_runner(false, |r| r.load_level_json(json))
}

#[wasm_bindgen]
pub fn game_load_preset(name: &str) -> bool {
    with_runner(false, |r| r.load_preset(name))
}

#[wasm_bindgen]
pub fn game_set_tuning_json(json: &str) -> bool {
    with_runner(false, |r| r.set_tuning_json(json))
}

/// Built-in level names, for a level picker.
#[wasm_bindgen]
pub fn get_preset_names() -> js_sys::Array {
    presets::PRESET_NAMES
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect()
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_buffer_ptr() -> *const f32 {
    with_runner(std::ptr::null(), |r| r.buffer_ptr())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(0, |r| r.buffer_total_floats())
}

// ---- Layout accessors ----

#[wasm_bindgen]
pub fn get_max_solids() -> u32 {
    with_runner(0, |r| r.max_solids())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(0, |r| r.max_events())
}

#[wasm_bindgen]
pub fn get_solid_data_offset() -> u32 {
    with_runner(0, |r| r.solid_data_offset())
}

#[wasm_bindgen]
pub fn get_event_data_offset() -> u32 {
    with_runner(0, |r| r.event_data_offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_calls_fall_back_and_warn_once() {
        assert!(!WARNED_UNINIT.with(Cell::get));
        assert_eq!(with_runner(7u32, |r| r.max_solids()), 7);
        assert!(WARNED_UNINIT.with(Cell::get));
        assert!(!with_runner(false, |r| r.load_preset(presets::MEADOW_DASH)));
        assert!(WARNED_UNINIT.with(Cell::get));
    }
}
