//! OpenBox Engine - falling-sand particle simulation in WASM
//!
//! A fixed 2D grid of typed cells advanced by a single-threaded
//! cellular-automaton tick: movement, heat diffusion, kind-specific
//! interactions, chemical reactions. Rendering, input, and file handling
//! live in the host; the engine exposes pixels, placement commands, and
//! byte snapshots.
//!
//! Layout:
//! - core/       - utility macros
//! - domain/     - particle ids, property tables, content registry
//! - spatial/    - the SoA grid
//! - systems/    - movement, temperature, interactions, reactions
//! - simulation/ - the context object and tick orchestration
//! - api/        - wasm-bindgen facade

#[macro_use]
pub mod core;
pub mod api;
pub mod domain;
pub mod simulation;
pub mod spatial;
pub mod systems;

// Short internal paths, mirrored in the public API.
pub use domain::particles;
pub use spatial::grid;
pub use systems::behaviors;
pub use systems::interactions;
pub use systems::reactions;
pub use systems::temperature;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Readable panic locations in the browser console.
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"OpenBox engine initialized".into());
}

/// Get engine version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types.
pub use api::wasm::Sandbox;
pub use domain::content::ContentRegistry;
pub use domain::particles::ParticleId;
pub use grid::Cell;
pub use simulation::SimulationCore;

// Particle id constants for the JS host.
#[wasm_bindgen]
pub fn pt_empty() -> u8 { particles::PT_EMPTY }
#[wasm_bindgen]
pub fn pt_sand() -> u8 { particles::PT_SAND }
#[wasm_bindgen]
pub fn pt_water() -> u8 { particles::PT_WATER }
#[wasm_bindgen]
pub fn pt_wall() -> u8 { particles::PT_WALL }
#[wasm_bindgen]
pub fn pt_fire() -> u8 { particles::PT_FIRE }
#[wasm_bindgen]
pub fn pt_smoke() -> u8 { particles::PT_SMOKE }
#[wasm_bindgen]
pub fn pt_steam() -> u8 { particles::PT_STEAM }
#[wasm_bindgen]
pub fn pt_lava() -> u8 { particles::PT_LAVA }
#[wasm_bindgen]
pub fn pt_ice() -> u8 { particles::PT_ICE }
#[wasm_bindgen]
pub fn pt_oil() -> u8 { particles::PT_OIL }
#[wasm_bindgen]
pub fn pt_acid() -> u8 { particles::PT_ACID }
#[wasm_bindgen]
pub fn pt_wood() -> u8 { particles::PT_WOOD }
#[wasm_bindgen]
pub fn pt_plant() -> u8 { particles::PT_PLANT }
#[wasm_bindgen]
pub fn pt_salt() -> u8 { particles::PT_SALT }
#[wasm_bindgen]
pub fn pt_glass() -> u8 { particles::PT_GLASS }
#[wasm_bindgen]
pub fn pt_metal() -> u8 { particles::PT_METAL }
