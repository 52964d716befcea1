//! Interaction engine - kind-specific neighborhood rules
//!
//! Runs after movement and temperature, on live state at the cell's original
//! coordinate: if the particle moved away this tick, the vacated cell is
//! what gets examined (and empty space has no interactions). Conversions are
//! visible to the reaction pass that follows in the same cell visit.

use crate::particles::{PT_ACID, PT_EMPTY, PT_FIRE, PT_GLASS, PT_ICE, PT_LAVA, PT_METAL, PT_SMOKE, PT_STEAM, PT_WATER};

use super::behaviors::{rand_percent, UpdateContext};

/// Chance per tick, in percent, for fire to ignite one flammable neighbor.
pub const FIRE_IGNITE_CHANCE: u32 = 10;

/// Chance per tick, in percent, for fire to shed smoke above itself.
pub const FIRE_SMOKE_CHANCE: u32 = 5;

/// Chance per tick, in percent, for acid to dissolve one neighbor.
pub const ACID_DISSOLVE_CHANCE: u32 = 20;

/// Water self-converts to ice below this temperature, °C.
pub const WATER_FREEZE_TEMP: f32 = 0.0;

/// Lava self-converts to metal below this temperature, °C.
pub const LAVA_SOLIDIFY_TEMP: f32 = 800.0;

pub fn update_interactions(ctx: &mut UpdateContext) {
    let xi = ctx.x as i32;
    let yi = ctx.y as i32;

    match ctx.grid.get_type(xi, yi) {
        PT_WATER => update_water(ctx, xi, yi),
        PT_FIRE => update_fire(ctx, xi, yi),
        PT_LAVA => update_lava(ctx, xi, yi),
        PT_ACID => update_acid(ctx, xi, yi),
        _ => {}
    }
}

/// Water puts out every adjacent fire (no dice roll) and freezes when its
/// own temperature drops below zero.
fn update_water(ctx: &mut UpdateContext, xi: i32, yi: i32) {
    for dx in -1..=1i32 {
        for dy in -1..=1i32 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = xi + dx;
            let ny = yi + dy;
            if ctx.grid.get_type(nx, ny) == PT_FIRE {
                ctx.replace_particle(nx as u32, ny as u32, PT_STEAM);
            }
        }
    }

    if ctx.grid.get_temp(xi, yi) < WATER_FREEZE_TEMP {
        ctx.replace_particle(xi as u32, yi as u32, PT_ICE);
    }
}

/// Fire spreads to flammable neighbors and sheds smoke upward. The smoke
/// roll happens before the emptiness check, so the roll is consumed whether
/// or not there is room above.
fn update_fire(ctx: &mut UpdateContext, xi: i32, yi: i32) {
    for dx in -1..=1i32 {
        for dy in -1..=1i32 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = xi + dx;
            let ny = yi + dy;
            let neighbor = ctx.grid.get_type(nx, ny);
            let flammable = ctx.content.props(neighbor).is_some_and(|p| p.flammable);
            if flammable && rand_percent(ctx.rng) < FIRE_IGNITE_CHANCE {
                ctx.replace_particle(nx as u32, ny as u32, PT_FIRE);
            }
        }
    }

    if rand_percent(ctx.rng) < FIRE_SMOKE_CHANCE && ctx.grid.is_empty(xi, yi - 1) {
        ctx.spawn_particle(xi as u32, (yi - 1) as u32, PT_SMOKE);
    }
}

/// Lava boils adjacent water on contact and solidifies once it has cooled.
fn update_lava(ctx: &mut UpdateContext, xi: i32, yi: i32) {
    for dx in -1..=1i32 {
        for dy in -1..=1i32 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = xi + dx;
            let ny = yi + dy;
            if ctx.grid.get_type(nx, ny) == PT_WATER {
                ctx.replace_particle(nx as u32, ny as u32, PT_STEAM);
            }
        }
    }

    if ctx.grid.get_temp(xi, yi) < LAVA_SOLIDIFY_TEMP {
        ctx.replace_particle(xi as u32, yi as u32, PT_METAL);
    }
}

/// Acid eats every neighbor except other acid and glass. Walls are not
/// spared; glass is the only immune material.
fn update_acid(ctx: &mut UpdateContext, xi: i32, yi: i32) {
    for dx in -1..=1i32 {
        for dy in -1..=1i32 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = xi + dx;
            let ny = yi + dy;
            let neighbor = ctx.grid.get_type(nx, ny);
            if neighbor == PT_EMPTY || neighbor == PT_ACID || neighbor == PT_GLASS {
                continue;
            }
            if rand_percent(ctx.rng) < ACID_DISSOLVE_CHANCE {
                ctx.dissolve_particle(nx as u32, ny as u32);
            }
        }
    }
}
