use crate::behaviors::UpdateContext;
use crate::grid::BG_COLOR;
use crate::particles::PT_EMPTY;
use crate::systems::{interactions, reactions, temperature};

use super::SimulationCore;

/// Update one cell: claim it, age it, then run the four phases in order.
/// Returns false when the cell was already claimed this tick.
///
/// The phases after movement run at the cell's original coordinate. If the
/// particle moved away, that coordinate now holds the air it swapped with -
/// which still diffuses heat, and has no interactions of its own.
pub(super) fn update_cell(world: &mut SimulationCore, x: u32, y: u32) -> bool {
    if world.grid.is_updated(x, y) {
        return false;
    }
    world.grid.set_updated(x, y, true);

    // Lifetime countdown; -1 never expires.
    let life = world.grid.get_life(x, y);
    if life > 0 {
        world.grid.set_life(x, y, life - 1);
        if life == 1 {
            retire_particle(world, x, y);
            return true;
        }
    }

    let SimulationCore {
        grid,
        content,
        behaviors,
        particle_count,
        rng_state,
        frame,
        ambient_temperature,
        ..
    } = world;

    let mut ctx = UpdateContext {
        grid,
        content: &*content,
        particle_count,
        x,
        y,
        frame: *frame,
        rng: rng_state,
    };

    let kind = ctx.grid.get_type(x as i32, y as i32);
    let movable = ctx.content.props(kind).is_some_and(|p| p.movable);
    if movable {
        let behavior = ctx.content.behavior_kind(kind);
        behaviors.update(behavior, &mut ctx);
    }

    temperature::update_temperature(ctx.grid, x, y, *ambient_temperature);
    interactions::update_interactions(&mut ctx);
    reactions::update_reactions(&mut ctx);
    true
}

/// An expired particle becomes empty space but leaves its heat behind - a
/// burned-out fire keeps warming the cell it died in for a while.
fn retire_particle(world: &mut SimulationCore, x: u32, y: u32) {
    world.grid.set_type(x, y, PT_EMPTY);
    world.grid.set_color(x, y, BG_COLOR);
    world.grid.set_life(x, y, 0);
    world.grid.set_vx(x, y, 0.0);
    world.grid.set_vy(x, y, 0.0);
    world.particle_count = world.particle_count.saturating_sub(1);
}
