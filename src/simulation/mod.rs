//! Simulation - the context object and the tick orchestrator around it
//!
//! `SimulationCore` owns everything mutable: the grid, the content registry,
//! the behavior registry, the tool state, and the RNG. There are no globals;
//! the host holds one core and drives it. Orchestration is delegated to the
//! submodules below, one file per concern.

use crate::behaviors::BehaviorRegistry;
use crate::domain::content::ContentRegistry;
use crate::grid::{Cell, Grid};
use crate::particles::{ParticleId, PT_EMPTY};

#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "io/persist.rs"]
mod persist;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "step/update.rs"]
mod update;

pub use perf_stats::PerfStats;
pub use persist::CELL_RECORD_SIZE;
pub use render_extract::temperature_tinted;

pub const MIN_BRUSH_SIZE: i32 = 1;
pub const MAX_BRUSH_SIZE: i32 = 20;

/// The whole simulation state. One tick is one `step()` call.
pub struct SimulationCore {
    content: ContentRegistry,
    grid: Grid,
    behaviors: BehaviorRegistry,

    // Settings and tool state
    ambient_temperature: f32,
    paused: bool,
    brush_kind: ParticleId,
    brush_size: i32,
    symmetry: bool,
    debug_overlay: bool,
    // Wind is captured from input but not yet applied to any particle.
    wind_x: f32,
    wind_y: f32,

    // State
    particle_count: u32,
    frame: u64,
    rng_state: u32,

    // Render transfer buffer (row-major pixels of the last extracted view)
    view_buffer: Vec<u32>,
    view_width: u32,
    view_height: u32,

    stats: PerfStats,
}

impl SimulationCore {
    /// Create a simulation with an explicit grid size. The border ring is
    /// walled immediately.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_simulation(width, height)
    }

    /// Derive the grid size from a display resolution and cell-size divisor.
    pub fn from_resolution(screen_w: u32, screen_h: u32, cell_size: u32) -> Self {
        init::create_simulation_from_resolution(screen_w, screen_h, cell_size)
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn particle_count(&self) -> u32 {
        self.particle_count
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn content(&self) -> &ContentRegistry {
        &self.content
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.grid.cell(x, y)
    }

    /// Wipe the grid back to empty space with a walled border.
    pub fn reset(&mut self) {
        init::reset(self);
    }

    /// Swap in a catalog parsed from a JSON content bundle, then reset.
    pub fn load_content_bundle_json(&mut self, json: &str) -> Result<(), String> {
        let registry = ContentRegistry::from_bundle_json(json)?;
        self.content = registry;
        self.reset();
        Ok(())
    }

    /// Advance one tick. Does nothing while paused.
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Settings ===

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        settings::set_paused(self, paused);
    }

    pub fn toggle_paused(&mut self) {
        settings::set_paused(self, !self.paused);
    }

    pub fn ambient_temperature(&self) -> f32 {
        self.ambient_temperature
    }

    pub fn set_ambient_temperature(&mut self, temp: f32) {
        settings::set_ambient_temperature(self, temp);
    }

    pub fn brush_kind(&self) -> ParticleId {
        self.brush_kind
    }

    pub fn set_brush_kind(&mut self, kind: ParticleId) {
        settings::set_brush_kind(self, kind);
    }

    pub fn brush_size(&self) -> i32 {
        self.brush_size
    }

    pub fn set_brush_size(&mut self, size: i32) {
        settings::set_brush_size(self, size);
    }

    pub fn symmetry(&self) -> bool {
        self.symmetry
    }

    pub fn set_symmetry(&mut self, on: bool) {
        settings::set_symmetry(self, on);
    }

    pub fn debug_overlay(&self) -> bool {
        self.debug_overlay
    }

    pub fn set_debug_overlay(&mut self, on: bool) {
        settings::set_debug_overlay(self, on);
    }

    pub fn wind(&self) -> (f32, f32) {
        (self.wind_x, self.wind_y)
    }

    pub fn set_wind(&mut self, x: f32, y: f32) {
        settings::set_wind(self, x, y);
    }

    /// Seed the generator for reproducible runs.
    pub fn set_rng_seed(&mut self, seed: u32) {
        settings::set_rng_seed(self, seed);
    }

    // === Placement commands ===

    /// Stamp a filled disc of `kind` centered at (x, y), overwriting whatever
    /// is there. Mirrored across the vertical center line in symmetry mode.
    pub fn place(&mut self, x: i32, y: i32, kind: ParticleId, radius: i32) {
        commands::place_brush(self, x, y, kind, radius);
    }

    /// Erase is placement of empty space.
    pub fn erase(&mut self, x: i32, y: i32, radius: i32) {
        commands::place_brush(self, x, y, PT_EMPTY, radius);
    }

    /// Place with the currently selected tool.
    pub fn paint(&mut self, x: i32, y: i32) {
        commands::place_brush(self, x, y, self.brush_kind, self.brush_size);
    }

    /// Erase with the current brush size.
    pub fn erase_at(&mut self, x: i32, y: i32) {
        commands::place_brush(self, x, y, PT_EMPTY, self.brush_size);
    }

    // === Persistence ===

    /// Dump the grid as fixed-size cell records, column-major.
    pub fn save(&self) -> Vec<u8> {
        persist::save_grid(self)
    }

    /// Restore a dump produced by [`save`](Self::save). Validates the byte
    /// length and every kind id before touching the grid.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), String> {
        persist::load_grid(self, bytes)
    }

    // === Render boundary ===

    /// Fill the transfer buffer with temperature-tinted pixels for the given
    /// viewport rect (clamped to the grid) and return a pointer to it.
    pub fn extract_view_pixels(&mut self, x0: i32, y0: i32, w: u32, h: u32) -> *const u32 {
        render_extract::extract_view_pixels(self, x0, y0, w, h)
    }

    /// Width of the last extracted view, after clamping.
    pub fn view_width(&self) -> u32 {
        self.view_width
    }

    /// Height of the last extracted view, after clamping.
    pub fn view_height(&self) -> u32 {
        self.view_height
    }

    pub fn view_len(&self) -> usize {
        self.view_buffer.len()
    }

    /// Display color of one cell (background color out of bounds).
    pub fn display_color_at(&self, x: i32, y: i32) -> u32 {
        render_extract::display_color_at(self, x, y)
    }

    pub fn kind_at(&self, x: i32, y: i32) -> ParticleId {
        self.grid.get_type(x, y)
    }

    pub fn temperature_at(&self, x: i32, y: i32) -> f32 {
        self.grid.get_temp(x, y)
    }

    /// Raw velocity for the debug vector overlay.
    pub fn velocity_at(&self, x: i32, y: i32) -> (f32, f32) {
        if !self.grid.in_bounds(x, y) {
            return (0.0, 0.0);
        }
        (self.grid.get_vx(x as u32, y as u32), self.grid.get_vy(x as u32, y as u32))
    }

    pub fn perf_stats(&self) -> PerfStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
