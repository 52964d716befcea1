use crate::behaviors::BehaviorRegistry;
use crate::domain::content::ContentRegistry;
use crate::grid::Grid;
use crate::particles::{PT_SAND, PT_WALL};
use crate::temperature::AMBIENT_TEMPERATURE;

use super::{commands, PerfStats, SimulationCore};

const DEFAULT_RNG_SEED: u32 = 12345;
const DEFAULT_BRUSH_SIZE: i32 = 3;

pub(super) fn create_simulation(width: u32, height: u32) -> SimulationCore {
    let mut world = SimulationCore {
        content: ContentRegistry::from_builtin(),
        grid: Grid::new(width, height),
        behaviors: BehaviorRegistry::new(),
        ambient_temperature: AMBIENT_TEMPERATURE,
        paused: false,
        brush_kind: PT_SAND,
        brush_size: DEFAULT_BRUSH_SIZE,
        symmetry: false,
        debug_overlay: false,
        wind_x: 0.0,
        wind_y: 0.0,
        particle_count: 0,
        frame: 0,
        rng_state: DEFAULT_RNG_SEED,
        view_buffer: Vec::new(),
        view_width: 0,
        view_height: 0,
        stats: PerfStats::default(),
    };
    reset(&mut world);
    world
}

pub(super) fn create_simulation_from_resolution(
    screen_w: u32,
    screen_h: u32,
    cell_size: u32,
) -> SimulationCore {
    let cell_size = cell_size.max(1);
    create_simulation(screen_w / cell_size, screen_h / cell_size)
}

/// Reinitialize: every cell back to empty at ambient, then wall the outer
/// ring. The ring is only stamped here - placement may overwrite it later
/// and nothing re-enforces it.
pub(super) fn reset(world: &mut SimulationCore) {
    world.grid.clear();
    world.particle_count = 0;
    world.frame = 0;

    let w = world.grid.width() as i32;
    let h = world.grid.height() as i32;
    for x in 0..w {
        commands::stamp_cell(world, x, 0, PT_WALL);
        commands::stamp_cell(world, x, h - 1, PT_WALL);
    }
    for y in 0..h {
        commands::stamp_cell(world, 0, y, PT_WALL);
        commands::stamp_cell(world, w - 1, y, PT_WALL);
    }
}
