//! Chemical reactions - the last phase of a cell's update
//!
//! Runs after the interaction engine in the same cell visit, so it sees any
//! kind change the earlier phases made to this cell.

use crate::particles::{pack_abgr, PT_GLASS, PT_SALT, PT_SAND, PT_WATER};

use super::behaviors::UpdateContext;

/// Sand fuses to glass above this temperature, °C.
pub const SAND_VITRIFY_TEMP: f32 = 1700.0;

/// Cached color water takes on after dissolving salt. Cosmetic and
/// persistent - it sticks until the cell changes kind.
pub const SALTY_WATER_COLOR: u32 = pack_abgr(102, 191, 255, 255);

pub fn update_reactions(ctx: &mut UpdateContext) {
    let xi = ctx.x as i32;
    let yi = ctx.y as i32;

    match ctx.grid.get_type(xi, yi) {
        PT_SAND => {
            if ctx.grid.get_temp(xi, yi) > SAND_VITRIFY_TEMP {
                ctx.replace_particle(xi as u32, yi as u32, PT_GLASS);
            }
        }
        PT_WATER => {
            for dx in -1..=1i32 {
                for dy in -1..=1i32 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = xi + dx;
                    let ny = yi + dy;
                    if ctx.grid.get_type(nx, ny) == PT_SALT {
                        ctx.dissolve_particle(nx as u32, ny as u32);
                        ctx.grid.set_color(xi as u32, yi as u32, SALTY_WATER_COLOR);
                    }
                }
            }
        }
        _ => {}
    }
}
