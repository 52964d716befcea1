use crate::behaviors::{reset_move_counter, take_move_counter};

use super::{update, SimulationCore};

/// One complete tick over the whole grid.
///
/// Scan order is bottom-to-top, left-to-right. A particle that falls is
/// swapped into a row the scan has already passed, and the claim marker
/// travels with it, so nothing moves twice. Lateral moves land in cells the
/// scan has not reached yet - there the marker check is what stops a second
/// move in the same tick.
pub(super) fn step(world: &mut SimulationCore) {
    if world.paused {
        return;
    }

    reset_move_counter();
    world.grid.reset_updated();

    let w = world.grid.width();
    let h = world.grid.height();
    for y in (0..h).rev() {
        for x in 0..w {
            if update::update_cell(world, x, y) {
                world.stats.cells_processed += 1;
            }
        }
    }

    world.stats.moves += take_move_counter();
    world.stats.ticks += 1;
    world.frame += 1;
}
