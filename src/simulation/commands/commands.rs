use crate::particles::{ParticleId, PT_EMPTY};

use super::SimulationCore;

/// Stamp one cell to a kind at its catalog defaults, overwriting whatever is
/// there. Out-of-range coordinates and unknown kinds are no-ops.
pub(super) fn stamp_cell(world: &mut SimulationCore, x: i32, y: i32, kind: ParticleId) {
    if !world.grid.in_bounds(x, y) {
        return;
    }
    let Some(props) = world.content.props(kind) else {
        return;
    };
    let prev = world.grid.get_type(x, y);
    let (x, y) = (x as u32, y as u32);

    if kind == PT_EMPTY {
        world.grid.clear_cell(x, y);
        if prev != PT_EMPTY {
            world.particle_count = world.particle_count.saturating_sub(1);
        }
    } else {
        world
            .grid
            .set_particle(x, y, kind, props.color, props.lifetime, props.default_temp);
        if prev == PT_EMPTY {
            world.particle_count += 1;
        }
    }
}

/// Brush placement: fill every cell within Euclidean distance `radius` of
/// the center. In symmetry mode the same disc lands mirrored across the
/// vertical center line.
pub(super) fn place_brush(
    world: &mut SimulationCore,
    cx: i32,
    cy: i32,
    kind: ParticleId,
    radius: i32,
) {
    if !world.grid.in_bounds(cx, cy) {
        return;
    }
    stamp_disc(world, cx, cy, kind, radius);
    if world.symmetry {
        let mirror_x = world.grid.width() as i32 - 1 - cx;
        stamp_disc(world, mirror_x, cy, kind, radius);
    }
}

fn stamp_disc(world: &mut SimulationCore, cx: i32, cy: i32, kind: ParticleId, radius: i32) {
    let radius = radius.max(0);
    let r2 = radius * radius;
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                stamp_cell(world, cx + dx, cy + dy, kind);
            }
        }
    }
}
