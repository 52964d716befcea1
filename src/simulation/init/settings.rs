use crate::particles::ParticleId;

use super::{SimulationCore, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

pub(super) fn set_paused(world: &mut SimulationCore, paused: bool) {
    world.paused = paused;
}

pub(super) fn set_ambient_temperature(world: &mut SimulationCore, temp: f32) {
    world.ambient_temperature = temp;
}

pub(super) fn set_brush_kind(world: &mut SimulationCore, kind: ParticleId) {
    if world.content.is_valid_particle_id(kind) {
        world.brush_kind = kind;
    }
}

pub(super) fn set_brush_size(world: &mut SimulationCore, size: i32) {
    world.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
}

pub(super) fn set_symmetry(world: &mut SimulationCore, on: bool) {
    world.symmetry = on;
}

pub(super) fn set_debug_overlay(world: &mut SimulationCore, on: bool) {
    world.debug_overlay = on;
}

// Stored for the HUD and for future particle advection; no rule reads it yet.
pub(super) fn set_wind(world: &mut SimulationCore, x: f32, y: f32) {
    world.wind_x = x;
    world.wind_y = y;
}

pub(super) fn set_rng_seed(world: &mut SimulationCore, seed: u32) {
    // Xorshift has a fixed point at zero; remap it.
    world.rng_state = if seed == 0 { 0xDEAD_BEEF } else { seed };
}
