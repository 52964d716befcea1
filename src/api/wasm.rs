//! JS host facade
//!
//! Thin `wasm-bindgen` wrapper around [`SimulationCore`]. The host drives the
//! loop: input events become `place`/`paint` calls, each animation frame is
//! one `step` plus a pixel extraction, and save/load moves byte snapshots
//! across the boundary.

use wasm_bindgen::prelude::*;

use crate::simulation::{PerfStats, SimulationCore};

#[wasm_bindgen]
pub struct Sandbox {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Sandbox {
    /// Create a sandbox with an explicit grid size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SimulationCore::new(width, height),
        }
    }

    /// Create a sandbox sized from a display resolution and cell size.
    #[wasm_bindgen(js_name = fromResolution)]
    pub fn from_resolution(screen_w: u32, screen_h: u32, cell_size: u32) -> Self {
        Self {
            core: SimulationCore::from_resolution(screen_w, screen_h, cell_size),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.core.particle_count()
    }

    /// Advance one tick; no-op while paused.
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Clear the grid back to a walled empty arena.
    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn is_paused(&self) -> bool {
        self.core.is_paused()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    pub fn toggle_paused(&mut self) {
        self.core.toggle_paused();
    }

    // === Tool state ===

    pub fn brush_kind(&self) -> u8 {
        self.core.brush_kind()
    }

    pub fn set_brush_kind(&mut self, kind: u8) {
        self.core.set_brush_kind(kind);
    }

    pub fn brush_size(&self) -> i32 {
        self.core.brush_size()
    }

    /// Clamped to the supported brush range.
    pub fn set_brush_size(&mut self, size: i32) {
        self.core.set_brush_size(size);
    }

    pub fn symmetry(&self) -> bool {
        self.core.symmetry()
    }

    pub fn set_symmetry(&mut self, on: bool) {
        self.core.set_symmetry(on);
    }

    pub fn toggle_symmetry(&mut self) {
        let on = self.core.symmetry();
        self.core.set_symmetry(!on);
    }

    pub fn debug_overlay(&self) -> bool {
        self.core.debug_overlay()
    }

    pub fn toggle_debug_overlay(&mut self) {
        let on = self.core.debug_overlay();
        self.core.set_debug_overlay(!on);
    }

    /// Directional wind bias from held arrow keys; stored for the HUD, not
    /// yet applied to particle motion.
    pub fn set_wind(&mut self, x: f32, y: f32) {
        self.core.set_wind(x, y);
    }

    pub fn set_ambient_temperature(&mut self, temp: f32) {
        self.core.set_ambient_temperature(temp);
    }

    pub fn set_rng_seed(&mut self, seed: u32) {
        self.core.set_rng_seed(seed);
    }

    // === Placement ===

    pub fn place(&mut self, x: i32, y: i32, kind: u8, radius: i32) {
        self.core.place(x, y, kind, radius);
    }

    pub fn erase(&mut self, x: i32, y: i32, radius: i32) {
        self.core.erase(x, y, radius);
    }

    /// Place with the currently selected brush kind and size.
    pub fn paint(&mut self, x: i32, y: i32) {
        self.core.paint(x, y);
    }

    pub fn erase_at(&mut self, x: i32, y: i32) {
        self.core.erase_at(x, y);
    }

    // === Persistence ===

    pub fn save(&self) -> Vec<u8> {
        self.core.save()
    }

    pub fn load(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.core.load(bytes).map_err(|e| JsValue::from_str(&e))
    }

    pub fn load_content_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_content_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    // === Render boundary ===

    /// Fill the transfer buffer for a viewport rect and return a pointer
    /// into wasm memory. Read `view_width`/`view_height` for the clamped
    /// dimensions.
    pub fn extract_view_pixels(&mut self, x0: i32, y0: i32, w: u32, h: u32) -> *const u32 {
        self.core.extract_view_pixels(x0, y0, w, h)
    }

    pub fn view_width(&self) -> u32 {
        self.core.view_width()
    }

    pub fn view_height(&self) -> u32 {
        self.core.view_height()
    }

    pub fn view_len(&self) -> usize {
        self.core.view_len()
    }

    pub fn kind_at(&self, x: i32, y: i32) -> u8 {
        self.core.kind_at(x, y)
    }

    pub fn temperature_at(&self, x: i32, y: i32) -> f32 {
        self.core.temperature_at(x, y)
    }

    pub fn display_color_at(&self, x: i32, y: i32) -> u32 {
        self.core.display_color_at(x, y)
    }

    /// Raw velocity components for the debug vector overlay.
    pub fn vx_at(&self, x: i32, y: i32) -> f32 {
        self.core.velocity_at(x, y).0
    }

    pub fn vy_at(&self, x: i32, y: i32) -> f32 {
        self.core.velocity_at(x, y).1
    }

    pub fn perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    /// Particle keys in id order, for building the host's palette UI.
    /// JS-only: constructs a JS array.
    pub fn particle_keys(&self) -> js_sys::Array {
        crate::particles::PARTICLE_KEYS
            .iter()
            .map(|k| JsValue::from_str(k))
            .collect()
    }
}
